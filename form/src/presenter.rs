//! Latest-verdict holder for display.

use drip_types::ClaimResult;

/// Holds the outcome of the most recent submission attempt.
///
/// The initial value carries an empty message, meaning "no result yet,
/// render nothing". Each completed submission replaces the verdict
/// atomically; verdicts are never merged. The message text is exactly what
/// the service returned.
#[derive(Clone, Debug)]
pub struct ResultPresenter {
    current: ClaimResult,
}

impl ResultPresenter {
    pub fn new() -> Self {
        Self {
            current: ClaimResult::none_yet(),
        }
    }

    /// Replace the displayed verdict.
    pub fn present(&mut self, verdict: ClaimResult) {
        self.current = verdict;
    }

    /// The verdict to render, or `None` while there is nothing to show.
    pub fn display(&self) -> Option<&ClaimResult> {
        self.current.is_displayable().then_some(&self.current)
    }

    /// The raw current verdict, empty-message sentinel included.
    pub fn current(&self) -> &ClaimResult {
        &self.current
    }
}

impl Default for ResultPresenter {
    fn default() -> Self {
        Self::new()
    }
}
