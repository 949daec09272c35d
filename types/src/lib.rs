//! Fundamental types for the drip faucet.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! claim kinds and their endpoint routing, wallet addresses and their syntactic
//! validation, and claim service verdicts.

pub mod address;
pub mod claim_kind;
pub mod error;
pub mod result;

pub use address::WalletAddress;
pub use claim_kind::{ClaimKind, DisplayMode};
pub use error::AddressError;
pub use result::ClaimResult;
