//! Shared utilities for the drip workspace.

pub mod logging;

pub use logging::init_tracing;
