//! ID token verifier interface used by the authorizer.
use async_trait::async_trait;
use thiserror::Error;

use crate::services::verifier::claims::{VerificationFailure, VerifiedClaims};

pub type VerifyResult<T> = Result<T, VerifyError>;

/// Why a token could not be turned into `VerifiedClaims`.
///
/// Not:
/// - None of these reach the gateway. The authorizer logs them and answers `Deny`.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Provider answered with an error status (invalid/expired/revoked token, aud mismatch ...).
    #[error("verification rejected ({status}): {error}: {description}")]
    Rejected {
        status: u16,
        error: String,
        description: String,
    },
    /// Provider could not be reached (connect/DNS/timeout).
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    /// Success status, but the body is not a claim set.
    #[error("unexpected provider response ({status}): {reason}")]
    UnexpectedResponse { status: u16, reason: String },
}

impl VerifyError {
    pub fn rejected(status: u16, failure: VerificationFailure) -> Self {
        Self::Rejected {
            status,
            error: failure.error,
            description: failure.error_description,
        }
    }

    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "verification_rejected",
            Self::Transport(_) => "transport_failure",
            Self::UnexpectedResponse { .. } => "unexpected_provider_response",
        }
    }
}

/// Verifies an ID token against an identity provider.
///
/// One call per invocation: implementations must not retry.
#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    // Provider name (for logging).
    fn provider_name(&self) -> &'static str;

    async fn verify(&self, id_token: &str) -> VerifyResult<VerifiedClaims>;
}
