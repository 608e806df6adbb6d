// Keeps track of the right and wrong answers during a session.

/// Running count of right and wrong answers.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct Tally {
    right: usize,
    wrong: usize,
}

impl Tally {
    pub fn new() -> Self {
        Default::default()
    }

    /// Store an answer.
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.right += 1;
        } else {
            self.wrong += 1;
        }
    }

    pub fn right(&self) -> usize {
        self.right
    }

    pub fn wrong(&self) -> usize {
        self.wrong
    }

    pub fn total(&self) -> usize {
        self.right + self.wrong
    }

    /// Percentage of right answers, 0.0 if nothing was answered yet.
    pub fn percent_right(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.right as f64 / self.total() as f64 * 100.0
    }

    pub fn percent_wrong(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        100.0 - self.percent_right()
    }

    /// Two line summary of the tally.
    pub fn stats(&self) -> String {
        format!(
            "Right: {:>10} ({:.1}%)\nWrong: {:>10} ({:.1}%)",
            self.right,
            self.percent_right(),
            self.wrong,
            self.percent_wrong()
        )
    }
}
