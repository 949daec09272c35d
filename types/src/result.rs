//! Claim service verdicts.

use serde::{Deserialize, Serialize};

/// Outcome of a claim submission, exactly as the service reported it.
///
/// The service speaks in-band: both disbursements and "already claimed"
/// style rejections arrive in this shape, and the message is displayed
/// verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimResult {
    /// Whether the disbursement went through.
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    /// Service-defined status code.
    pub code: i64,
    /// Service-supplied message.
    pub message: String,
}

impl ClaimResult {
    /// The fresh-on-mount sentinel: an empty message means "no result yet,
    /// render nothing".
    pub fn none_yet() -> Self {
        Self {
            is_success: false,
            code: 0,
            message: String::new(),
        }
    }

    /// Whether there is anything to display.
    pub fn is_displayable(&self) -> bool {
        !self.message.is_empty()
    }
}
