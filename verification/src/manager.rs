//! Verification token state machine.

use serde::{Deserialize, Serialize};

/// Current verification status.
///
/// Invariant: a token is held if and only if the state is `Verified`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationState {
    /// No valid token; submission stays gated while verification is
    /// required.
    Unverified,
    /// Challenge passed; holds the opaque token forwarded with the claim.
    Verified(String),
}

/// Tracks whether the human-verification challenge has been completed and
/// holds the resulting token.
///
/// Created empty, set by a successful challenge completion, cleared by a
/// widget reset, an expiry callback, or a claim-kind change.
#[derive(Clone, Debug, Default)]
pub struct VerificationManager {
    state: VerificationState,
}

impl Default for VerificationState {
    fn default() -> Self {
        Self::Unverified
    }
}

impl VerificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completion callback from the widget: `Some(token)` on success,
    /// `None` on expiry. An empty token is treated as expiry.
    pub fn on_challenge_completed(&mut self, token: Option<String>) {
        self.state = match token {
            Some(token) if !token.is_empty() => {
                tracing::debug!("verification challenge completed");
                VerificationState::Verified(token)
            }
            _ => {
                tracing::debug!("verification challenge expired");
                VerificationState::Unverified
            }
        };
    }

    /// Drop any held token; a fresh challenge is required.
    ///
    /// Serves both the widget's imperative reset and claim-kind changes.
    pub fn invalidate(&mut self) {
        if self.is_verified() {
            tracing::debug!("verification token invalidated");
        }
        self.state = VerificationState::Unverified;
    }

    pub fn is_verified(&self) -> bool {
        matches!(self.state, VerificationState::Verified(_))
    }

    /// The held token, if verified.
    pub fn token(&self) -> Option<&str> {
        match &self.state {
            VerificationState::Verified(token) => Some(token),
            VerificationState::Unverified => None,
        }
    }

    pub fn state(&self) -> &VerificationState {
        &self.state
    }
}
