//! Capability trait for the external human-verification widget.

/// The contract the external challenge widget exposes.
///
/// A real implementation mounts the vendor widget configured with a site
/// key; tests use `drip-nullables::NullChallenge`. Completion yields an
/// opaque token, or `None` when the widget reports expiry.
pub trait ChallengeWidget {
    /// Run (or resume) a challenge. `None` means the challenge expired
    /// before a token was issued.
    fn complete(&mut self) -> Option<String>;

    /// Invalidate the current token; a fresh challenge is required
    /// afterwards.
    fn reset(&mut self);
}
