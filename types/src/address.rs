//! Wallet address type with Base58Check syntactic validation.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::AddressError;

/// Length of the decoded account identifier.
const PAYLOAD_LEN: usize = 32;
/// Length of the checksum appended after the payload.
const CHECKSUM_LEN: usize = 4;

/// A syntactically valid testnet wallet address.
///
/// Addresses are the Base58 encoding of a 32-byte account identifier
/// followed by a 4-byte checksum (the first four bytes of the double
/// SHA-256 of the identifier). [`WalletAddress::parse`] is the only way to
/// obtain one from user input, so holding a `WalletAddress` implies every
/// schema check passed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Parse and validate a candidate address string.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        validate(raw)?;
        Ok(Self(raw.to_string()))
    }

    /// Encode an account identifier into address form.
    pub fn from_account_id(payload: [u8; PAYLOAD_LEN]) -> Self {
        let mut bytes = Vec::with_capacity(PAYLOAD_LEN + CHECKSUM_LEN);
        bytes.extend_from_slice(&payload);
        bytes.extend_from_slice(&checksum(&payload));
        Self(bs58::encode(bytes).into_string())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check whether a candidate string is a syntactically valid address.
///
/// Pure and synchronous: suitable for running on every input change.
/// Rejects empty input, non-Base58 characters, wrong decoded length, and
/// checksum mismatches.
pub fn validate(candidate: &str) -> Result<(), AddressError> {
    if candidate.is_empty() {
        return Err(AddressError::Empty);
    }

    let decoded = bs58::decode(candidate)
        .into_vec()
        .map_err(|_| AddressError::InvalidCharacter)?;

    if decoded.len() != PAYLOAD_LEN + CHECKSUM_LEN {
        return Err(AddressError::InvalidLength {
            decoded: decoded.len(),
            expected: PAYLOAD_LEN + CHECKSUM_LEN,
        });
    }

    let (payload, stored) = decoded.split_at(PAYLOAD_LEN);
    if stored != checksum(payload) {
        return Err(AddressError::ChecksumMismatch);
    }

    Ok(())
}

/// Predicate form of [`validate`].
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).is_ok()
}

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let second = Sha256::digest(Sha256::digest(payload));
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&second[..CHECKSUM_LEN]);
    out
}
