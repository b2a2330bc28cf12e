//! Monte Carlo odds for the induced-insanity board clear: minions attack
//! random targets until the board empties, one stands, or nobody can act,
//! and repeated trials turn that chaos into clearance statistics.

pub mod cli;
pub mod combat;
pub mod parallel;
pub mod server;
pub mod stats;
