//! Claim client error type.

use thiserror::Error;

/// Why a claim submission produced no service verdict.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be completed at all (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// A response arrived but its body does not match the expected
    /// `{isSuccess, code, message}` shape.
    #[error("invalid claim service response: {0}")]
    InvalidResponse(String),
}
