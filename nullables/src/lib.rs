//! Nullable collaborators for deterministic testing.
//!
//! The faucet has exactly two external collaborators: the human-verification
//! widget and the remote claim service. Both are abstracted behind traits,
//! and this crate provides test-friendly implementations that:
//! - Return scripted, deterministic outcomes
//! - Record every interaction for assertions
//! - Never touch the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod challenge;
pub mod claim_service;

pub use challenge::NullChallenge;
pub use claim_service::NullClaimService;
