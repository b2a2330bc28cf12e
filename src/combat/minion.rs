//! Minion state and the spec token grammar used by the CLI and tests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable description of one board slot, as given on the command line or
/// in an API request. Attack and health may be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinionSpec {
    pub attack: i32,
    pub health: i32,
    #[serde(default)]
    pub divine_shield: bool,
    #[serde(default)]
    pub poison: bool,
}

impl MinionSpec {
    pub fn new(attack: i32, health: i32) -> Self {
        Self {
            attack,
            health,
            divine_shield: false,
            poison: false,
        }
    }

    pub fn with_divine_shield(mut self) -> Self {
        self.divine_shield = true;
        self
    }

    pub fn with_poison(mut self) -> Self {
        self.poison = true;
        self
    }

    /// Parse the positional spec grammar: repeated `attack health [d|p]...`.
    ///
    /// # Example
    /// ```
    /// # use yogg::combat::minion::MinionSpec;
    /// let specs = MinionSpec::parse_str("4 2 d 2 2 p").unwrap();
    /// assert_eq!(specs.len(), 2);
    /// assert!(specs[0].divine_shield);
    /// assert!(specs[1].poison);
    /// ```
    pub fn parse_tokens(tokens: &[&str]) -> Result<Vec<MinionSpec>, SpecError> {
        let mut specs = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let attack = parse_stat(tokens[i], i)?;
            let health = match tokens.get(i + 1) {
                Some(token) => parse_stat(token, i + 1)?,
                None => return Err(SpecError::MissingHealth { position: i + 2 }),
            };
            i += 2;

            let mut spec = MinionSpec::new(attack, health);
            while i < tokens.len() {
                match tokens[i] {
                    "d" => spec.divine_shield = true,
                    "p" => spec.poison = true,
                    _ => break,
                }
                i += 1;
            }
            specs.push(spec);
        }
        Ok(specs)
    }

    /// Like [MinionSpec::parse_tokens] for a whitespace-separated string.
    pub fn parse_str(input: &str) -> Result<Vec<MinionSpec>, SpecError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        Self::parse_tokens(&tokens)
    }
}

fn parse_stat(token: &str, index: usize) -> Result<i32, SpecError> {
    token.parse::<i32>().map_err(|_| SpecError::ExpectedStat {
        token: token.to_string(),
        position: index + 1,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    ExpectedStat { token: String, position: usize },
    MissingHealth { position: usize },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedStat { token, position } => {
                write!(f, "expected a number at token {position}, got '{token}'")
            }
            Self::MissingHealth { position } => {
                write!(f, "expected a health value at token {position}")
            }
        }
    }
}

impl std::error::Error for SpecError {}

/// One hit as seen by the victim: the attacker's values captured before any
/// state in the exchange is mutated.
#[derive(Debug, Clone, Copy)]
pub struct Strike {
    pub attack: i32,
    pub poison: bool,
}

/// Mutable per-trial minion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Minion {
    pub identity: usize,
    pub attack: i32,
    pub health: i32,
    pub divine_shield: bool,
    pub poison: bool,
    pub has_attacked: bool,
}

impl Minion {
    pub fn from_spec(identity: usize, spec: &MinionSpec) -> Self {
        Self {
            identity,
            attack: spec.attack,
            health: spec.health,
            divine_shield: spec.divine_shield,
            poison: spec.poison,
            has_attacked: false,
        }
    }

    /// Display name, `m1`..`mN` in board order.
    pub fn name(&self) -> String {
        format!("m{}", self.identity)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn strike(&self) -> Strike {
        Strike {
            attack: self.attack,
            poison: self.poison,
        }
    }

    /// Apply one incoming hit. The shield soaks a positive hit before poison
    /// is considered; non-positive attack falls through to plain subtraction,
    /// so a negative attack heals.
    pub fn take_hit(&mut self, hit: Strike) {
        if self.divine_shield && hit.attack > 0 {
            self.divine_shield = false;
        } else if hit.poison && hit.attack > 0 {
            self.health = 0;
        } else {
            self.health -= hit.attack;
        }
    }
}
