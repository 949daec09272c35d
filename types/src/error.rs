//! Address validation errors.

use thiserror::Error;

/// Why a candidate wallet address failed syntactic validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("address contains characters outside the Base58 alphabet")]
    InvalidCharacter,

    #[error("address decodes to {decoded} bytes, expected {expected}")]
    InvalidLength { decoded: usize, expected: usize },

    #[error("address checksum does not match its payload")]
    ChecksumMismatch,
}
