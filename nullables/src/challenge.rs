//! Nullable challenge widget — scripted completions, recorded resets.

use std::collections::VecDeque;

use drip_verification::ChallengeWidget;

/// A test widget that hands out scripted challenge outcomes.
pub struct NullChallenge {
    /// Outcomes to deliver, in order. An exhausted queue reports expiry.
    outcomes: VecDeque<Option<String>>,
    resets: u32,
}

impl NullChallenge {
    pub fn new() -> Self {
        Self {
            outcomes: VecDeque::new(),
            resets: 0,
        }
    }

    /// Queue an outcome for the next `complete` call.
    pub fn enqueue(&mut self, outcome: Option<&str>) {
        self.outcomes.push_back(outcome.map(str::to_string));
    }

    /// Number of imperative resets requested so far (for assertions).
    pub fn reset_count(&self) -> u32 {
        self.resets
    }
}

impl ChallengeWidget for NullChallenge {
    fn complete(&mut self) -> Option<String> {
        self.outcomes.pop_front().flatten()
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}

impl Default for NullChallenge {
    fn default() -> Self {
        Self::new()
    }
}
