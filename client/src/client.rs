//! Claim service client over reqwest.

use std::future::Future;
use std::time::Duration;

use drip_types::{ClaimKind, ClaimResult, WalletAddress};

use crate::error::ClientError;

/// Query parameter carrying the destination wallet.
const WALLET_ADDRESS_PARAM: &str = "walletAddress";
/// Query parameter carrying the human-verification token.
const VERIFICATION_TOKEN_PARAM: &str = "recaptchaToken";
/// Content-type marker sent when verification is in use.
const CONTENT_TYPE_MARKER: &str = "application/json";
/// Identifying platform marker sent when verification is in use.
const PLATFORM_MARKER: &str = "FaucetUI";
/// Header name for the platform marker.
const PLATFORM_HEADER: &str = "Platform";

/// A single claim, bound to the field values captured when the user
/// submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimRequest {
    /// Destination wallet; already syntactically validated.
    pub address: WalletAddress,
    /// Which disbursement to request.
    pub kind: ClaimKind,
    /// Verification token, present only when the faucet requires human
    /// verification.
    pub verification_token: Option<String>,
}

/// The submission seam the form controller drives.
///
/// [`ClaimClient`] is the real implementation; deterministic tests use
/// `drip-nullables::NullClaimService`.
pub trait ClaimSubmitter {
    /// Issue one claim and resolve with the service verdict.
    fn submit(
        &self,
        request: &ClaimRequest,
    ) -> impl Future<Output = Result<ClaimResult, ClientError>>;
}

/// HTTP client for the remote claim service.
///
/// Wraps `reqwest::Client` with the service's base URL and fixed timeouts.
#[derive(Clone)]
pub struct ClaimClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClaimClient {
    /// Create a client targeting the given base URL
    /// (e.g. `https://faucet.example.org`).
    pub fn new(
        base_url: impl Into<String>,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to create HTTP client: {e}")))?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    /// The configured service base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint URL for a claim kind.
    fn endpoint(&self, kind: ClaimKind) -> String {
        format!("{}/api/{}", self.base_url, kind.endpoint_path())
    }
}

/// Query parameters for a claim request: the wallet address always, the
/// verification token only when one was issued.
fn build_query(request: &ClaimRequest) -> Vec<(&'static str, &str)> {
    let mut query = vec![(WALLET_ADDRESS_PARAM, request.address.as_str())];
    if let Some(token) = request.verification_token.as_deref() {
        query.push((VERIFICATION_TOKEN_PARAM, token));
    }
    query
}

impl ClaimSubmitter for ClaimClient {
    /// Issue the claim and parse the service verdict.
    ///
    /// The body is parsed whatever the HTTP status: the service reports
    /// rejections in-band as `isSuccess = false` verdicts.
    async fn submit(&self, request: &ClaimRequest) -> Result<ClaimResult, ClientError> {
        let url = self.endpoint(request.kind);
        tracing::info!(kind = request.kind.as_str(), %url, "submitting claim");

        let mut builder = self.http.post(&url).query(&build_query(request));
        if request.verification_token.is_some() {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE_MARKER)
                .header(PLATFORM_HEADER, PLATFORM_MARKER);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("failed to read response body: {e}")))?;

        let verdict: ClaimResult = serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("HTTP {status}: {e}")))?;

        tracing::info!(
            is_success = verdict.is_success,
            code = verdict.code,
            "claim verdict received"
        );
        Ok(verdict)
    }
}
