//! HTTP client for the remote claim service.
//!
//! One POST per user-initiated submission, no request body (the claim is
//! carried entirely in the query string), and the verdict arrives as an
//! in-band JSON triple.

pub mod client;
pub mod error;

pub use client::{ClaimClient, ClaimRequest, ClaimSubmitter};
pub use error::ClientError;
