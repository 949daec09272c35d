//! Nullable claim service — scripted verdicts, recorded requests.

use std::cell::RefCell;
use std::collections::VecDeque;

use drip_client::{ClaimRequest, ClaimSubmitter, ClientError};
use drip_types::ClaimResult;

/// A test claim service that records requests instead of sending them.
pub struct NullClaimService {
    /// Verdicts to deliver, in order. An exhausted queue reports a
    /// transport error.
    outcomes: RefCell<VecDeque<Result<ClaimResult, ClientError>>>,
    /// All requests "sent" through this service.
    requests: RefCell<Vec<ClaimRequest>>,
}

impl NullClaimService {
    pub fn new() -> Self {
        Self {
            outcomes: RefCell::new(VecDeque::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Queue an outcome for the next submission.
    pub fn enqueue(&self, outcome: Result<ClaimResult, ClientError>) {
        self.outcomes.borrow_mut().push_back(outcome);
    }

    /// Queue a verdict with the given triple.
    pub fn enqueue_verdict(&self, is_success: bool, code: i64, message: &str) {
        self.enqueue(Ok(ClaimResult {
            is_success,
            code,
            message: message.to_string(),
        }));
    }

    /// All requests received so far (for assertions).
    pub fn requests(&self) -> Vec<ClaimRequest> {
        self.requests.borrow().clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl ClaimSubmitter for NullClaimService {
    async fn submit(&self, request: &ClaimRequest) -> Result<ClaimResult, ClientError> {
        self.requests.borrow_mut().push(request.clone());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no scripted outcome".to_string())))
    }
}

impl Default for NullClaimService {
    fn default() -> Self {
        Self::new()
    }
}
