//! Stderr progress bar for long runs, redrawn in place.

const BAR_WIDTH: usize = 25;

/// Tracks completed trials and redraws the bar whenever the integer
/// percentage changes, so a million-trial run repaints at most 101 times.
#[derive(Debug)]
pub struct Progress {
    total: u64,
    last_percent: Option<u8>,
}

impl Progress {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            last_percent: None,
        }
    }

    pub fn update(&mut self, done: u64) {
        let percent = percent_of(done, self.total);
        if self.last_percent == Some(percent) {
            return;
        }
        self.last_percent = Some(percent);
        let filled = BAR_WIDTH * percent as usize / 100;
        eprint!(
            "\rCalculating... |{}{}|{:3}% ",
            "█".repeat(filled),
            " ".repeat(BAR_WIDTH - filled),
            percent
        );
    }

    /// Draw the full bar and end the line so later output starts fresh.
    pub fn finish(&mut self) {
        self.update(self.total);
        eprintln!();
    }
}

fn percent_of(done: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    (done.min(total) * 100 / total) as u8
}
