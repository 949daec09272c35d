//! Claim form state machine.
//!
//! Sequences the submit → parse → present flow: field edits run the
//! address validator, the gate decides whether submission is possible, and
//! accepted submissions are tagged with sequence numbers so a late outcome
//! can never overwrite the verdict of a newer one.

use drip_client::{ClaimRequest, ClaimSubmitter, ClientError};
use drip_types::{address, AddressError, ClaimKind, ClaimResult, DisplayMode, WalletAddress};
use drip_verification::{ChallengeWidget, VerificationManager};

use crate::config::FaucetConfig;
use crate::presenter::ResultPresenter;

/// Current field values of the claim form.
#[derive(Clone, Debug)]
pub struct FormState {
    /// Raw address input; recorded even while invalid.
    pub address: String,
    /// Selected claim kind; never empty.
    pub claim_kind: ClaimKind,
}

/// Where the controller is in the submission cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Accepting edits; a submission may be issued if the gate passes.
    Editing,
    /// A submission is in flight; further attempts are ignored.
    Submitting,
}

/// One accepted submission: a sequence number and the field values captured
/// at the instant the user submitted.
#[derive(Clone, Debug)]
pub struct SubmissionTicket {
    pub seq: u64,
    pub request: ClaimRequest,
}

/// Orchestrates the claim form.
///
/// Owns the field values, the verification token lifecycle, and the result
/// presenter. Submission is a two-step protocol so the driving event loop
/// stays in control of the actual I/O:
///
/// 1. [`FormController::begin_submission`] gates and, if accepted, issues a
///    ticket bound to the current field values;
/// 2. [`FormController::complete_submission`] applies the outcome, unless
///    the ticket is no longer the latest issued, in which case the stale
///    outcome is discarded.
///
/// [`FormController::submit`] wires both steps around a [`ClaimSubmitter`]
/// for drivers with no interleaving to manage. Edits made while a
/// submission is in flight are accepted immediately but do not affect the
/// in-flight request.
pub struct FormController {
    state: FormState,
    verification: Option<VerificationManager>,
    presenter: ResultPresenter,
    phase: Phase,
    /// Sequence number handed to the next accepted submission.
    next_seq: u64,
}

impl FormController {
    /// Create a controller for the given configuration, optionally
    /// pre-filling the address field.
    pub fn new(config: &FaucetConfig, prefill_address: Option<String>) -> Self {
        Self {
            state: FormState {
                address: prefill_address.unwrap_or_default(),
                claim_kind: ClaimKind::default(),
            },
            verification: config
                .verification_required()
                .then(VerificationManager::new),
            presenter: ResultPresenter::new(),
            phase: Phase::Editing,
            next_seq: 0,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn presenter(&self) -> &ResultPresenter {
        &self.presenter
    }

    /// How the faucet should present itself for the selected kind.
    pub fn display_mode(&self) -> DisplayMode {
        self.state.claim_kind.display_mode()
    }

    /// Whether this faucet gates submission behind human verification.
    pub fn verification_required(&self) -> bool {
        self.verification.is_some()
    }

    /// Record an address edit. The raw string is kept either way;
    /// validation runs on every change via [`FormController::address_error`].
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.state.address = address.into();
    }

    /// Field-level validation of the current address input.
    pub fn address_error(&self) -> Option<AddressError> {
        address::validate(&self.state.address).err()
    }

    /// Switch the claim kind. An actual change invalidates any held
    /// verification token; the displayed verdict of a previous submission
    /// is kept.
    pub fn set_claim_kind(&mut self, kind: ClaimKind) {
        if self.state.claim_kind == kind {
            return;
        }
        self.state.claim_kind = kind;
        if let Some(verification) = &mut self.verification {
            verification.invalidate();
        }
    }

    /// Completion callback from the verification widget.
    pub fn on_challenge_completed(&mut self, token: Option<String>) {
        if let Some(verification) = &mut self.verification {
            verification.on_challenge_completed(token);
        }
    }

    /// Drop any held token without touching the widget (widget-side reset
    /// callback).
    pub fn reset_verification(&mut self) {
        if let Some(verification) = &mut self.verification {
            verification.invalidate();
        }
    }

    /// Drive the verification widget through one challenge and record the
    /// outcome.
    pub fn run_challenge(&mut self, widget: &mut impl ChallengeWidget) {
        if self.verification.is_some() {
            let token = widget.complete();
            self.on_challenge_completed(token);
        }
    }

    /// Imperatively reset the widget and drop the held token; a fresh
    /// challenge is required afterwards.
    pub fn reset_challenge(&mut self, widget: &mut impl ChallengeWidget) {
        widget.reset();
        self.reset_verification();
    }

    /// Whether the submit control is enabled: the address validates and,
    /// when verification is required, a token is held. Always false while a
    /// submission is in flight.
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Editing
            && address::is_valid(&self.state.address)
            && self
                .verification
                .as_ref()
                .is_none_or(VerificationManager::is_verified)
    }

    /// Gate and issue a submission ticket bound to the current field
    /// values. Returns `None` when the gate fails or a submission is
    /// already in flight (re-entrant attempts are ignored, not queued).
    pub fn begin_submission(&mut self) -> Option<SubmissionTicket> {
        if !self.can_submit() {
            return None;
        }
        // can_submit validated the address, so parse cannot fail here.
        let address = WalletAddress::parse(&self.state.address).ok()?;
        let request = ClaimRequest {
            address,
            kind: self.state.claim_kind,
            verification_token: self
                .verification
                .as_ref()
                .and_then(|v| v.token().map(str::to_string)),
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.phase = Phase::Submitting;
        tracing::info!(seq, kind = request.kind.as_str(), "claim submission issued");
        Some(SubmissionTicket { seq, request })
    }

    /// Apply a submission outcome.
    ///
    /// Only the outcome of the latest issued ticket is applied, and only
    /// once: anything else is a late or duplicated delivery and is
    /// discarded without touching the presenter.
    pub fn complete_submission(
        &mut self,
        seq: u64,
        outcome: Result<ClaimResult, ClientError>,
    ) {
        let latest = self.next_seq.checked_sub(1);
        if self.phase != Phase::Submitting || Some(seq) != latest {
            tracing::warn!(seq, "discarding stale submission outcome");
            return;
        }
        let verdict = match outcome {
            Ok(verdict) => verdict,
            Err(error) => {
                tracing::warn!(seq, %error, "claim submission failed");
                failure_verdict(&error)
            }
        };
        tracing::info!(
            seq,
            is_success = verdict.is_success,
            code = verdict.code,
            "claim submission completed"
        );
        self.presenter.present(verdict);
        self.phase = Phase::Editing;
    }

    /// Run one full submission against `submitter`.
    ///
    /// Returns whether a submission was actually issued.
    pub async fn submit<S: ClaimSubmitter>(&mut self, submitter: &S) -> bool {
        let Some(ticket) = self.begin_submission() else {
            return false;
        };
        let outcome = submitter.submit(&ticket.request).await;
        self.complete_submission(ticket.seq, outcome);
        true
    }
}

/// Generic verdict shown when no service verdict could be obtained.
fn failure_verdict(error: &ClientError) -> ClaimResult {
    let message = match error {
        ClientError::Transport(_) => "The faucet could not be reached. Please try again.",
        ClientError::InvalidResponse(_) => {
            "The faucet returned an unexpected response. Please try again."
        }
    };
    ClaimResult {
        is_success: false,
        code: -1,
        message: message.to_string(),
    }
}
