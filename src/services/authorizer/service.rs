use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::services::authorizer::context::flatten_claims;
use crate::services::authorizer::event::InvocationEvent;
use crate::services::authorizer::policy::AuthorizationDecision;
use crate::services::authorizer::token::extract_bearer;
use crate::services::verifier::{IdTokenVerifier, VerifyError};

/// Gateway TOKEN authorizer backed by remote ID token verification.
///
/// - `authorize` never fails: every error path becomes a `Deny` decision.
/// - The failure reason is logged, never returned to the gateway.
/// - No state is kept between invocations; the verifier is shared read-only.
#[derive(Clone)]
pub struct TokenAuthorizer {
    verifier: Arc<dyn IdTokenVerifier>,
}

impl std::fmt::Debug for TokenAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthorizer")
            .field("provider", &self.verifier.provider_name())
            .finish()
    }
}

impl TokenAuthorizer {
    pub fn new(verifier: Arc<dyn IdTokenVerifier>) -> Self {
        Self { verifier }
    }

    pub async fn authorize(&self, event: &InvocationEvent) -> AuthorizationDecision {
        let resource = event.method_arn.as_str();
        // Never log the token itself.
        debug!(resource, "authorizer invoked");

        let decision = match extract_bearer(&event.authorization_token) {
            None => {
                warn!(resource, "authorization header carries no bearer token");
                AuthorizationDecision::deny(resource)
            }
            Some(id_token) => match self.verifier.verify(id_token).await {
                Ok(claims) => {
                    debug!(resource, sub = %claims.sub, "id token verified");
                    AuthorizationDecision::allow(resource, flatten_claims(&claims))
                }
                Err(err) => {
                    log_verify_error(self.verifier.provider_name(), resource, &err);
                    AuthorizationDecision::deny(resource)
                }
            },
        };

        info!(
            resource = decision.resource(),
            effect = ?decision.effect(),
            "authorization decided"
        );
        decision
    }
}

fn log_verify_error(provider: &'static str, resource: &str, err: &VerifyError) {
    match err {
        VerifyError::Rejected {
            status,
            error,
            description,
        } => warn!(
            provider,
            resource,
            kind = err.kind(),
            status,
            error = %error,
            error_description = %description,
            "id token verification rejected"
        ),
        VerifyError::Transport(source) => warn!(
            provider,
            resource,
            kind = err.kind(),
            timeout = source.is_timeout(),
            error = %source,
            "id token verification endpoint unreachable"
        ),
        VerifyError::UnexpectedResponse { status, reason } => warn!(
            provider,
            resource,
            kind = err.kind(),
            status,
            reason = %reason,
            "id token verification returned an unexpected body"
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::services::authorizer::policy::Effect;
    use crate::services::verifier::{VerifiedClaims, VerifyResult};

    const ARN: &str = "arn:aws:execute-api:ap-northeast-1:123456789012:abcdef/prod/GET/profile";

    /// Accepts tokens starting with "valid-" and uses the rest as `sub`.
    #[derive(Default)]
    struct PrefixVerifier {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl IdTokenVerifier for PrefixVerifier {
        fn provider_name(&self) -> &'static str {
            "fake"
        }

        async fn verify(&self, id_token: &str) -> VerifyResult<VerifiedClaims> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match id_token.strip_prefix("valid-") {
                Some(sub) => Ok(serde_json::from_value(json!({
                    "iss": "https://access.line.me",
                    "sub": sub,
                    "aud": "client1",
                    "exp": 9999999999u64,
                    "iat": 1000000000u64,
                    "amr": ["pwd", "lineqr"],
                    "name": "Taro"
                }))
                .unwrap()),
                None => Err(VerifyError::Rejected {
                    status: 400,
                    error: "invalid_request".into(),
                    description: "Invalid IdToken.".into(),
                }),
            }
        }
    }

    fn authorizer() -> (TokenAuthorizer, Arc<PrefixVerifier>) {
        let verifier = Arc::new(PrefixVerifier::default());
        (TokenAuthorizer::new(verifier.clone()), verifier)
    }

    #[tokio::test]
    async fn valid_token_is_allowed_with_flat_context() {
        let (authorizer, _) = authorizer();

        let decision = authorizer
            .authorize(&InvocationEvent::new("Bearer valid-U1", ARN))
            .await;

        assert_eq!(decision.effect(), Effect::Allow);
        assert_eq!(decision.principal_id, "user");
        assert_eq!(decision.resource(), ARN);
        let ctx = decision.context.expect("allow carries context");
        assert_eq!(ctx["sub"], "U1");
        assert_eq!(ctx["amr"], "pwd,lineqr");
        assert_eq!(ctx["name"], "Taro");
    }

    #[tokio::test]
    async fn rejected_token_is_denied_without_context() {
        let (authorizer, _) = authorizer();

        let decision = authorizer
            .authorize(&InvocationEvent::new("Bearer expired", ARN))
            .await;

        assert_eq!(decision, AuthorizationDecision::deny(ARN));
        assert!(decision.context.is_none());
    }

    #[tokio::test]
    async fn missing_token_is_denied_without_calling_provider() {
        let (authorizer, verifier) = authorizer();

        let decision = authorizer
            .authorize(&InvocationEvent::new("Bearer", ARN))
            .await;

        assert_eq!(decision.effect(), Effect::Deny);
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn same_token_twice_gives_same_decision() {
        let (authorizer, verifier) = authorizer();
        let event = InvocationEvent::new("Bearer valid-U1", ARN);

        let first = authorizer.authorize(&event).await;
        let second = authorizer.authorize(&event).await;

        assert_eq!(first, second);
        // one provider call per invocation, no retries
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn deny_does_not_affect_concurrent_allow() {
        let (authorizer, _) = authorizer();
        let bad = InvocationEvent::new("Bearer revoked", ARN);
        let good = InvocationEvent::new("Bearer valid-U2", ARN);

        let (denied, allowed) = tokio::join!(authorizer.authorize(&bad), authorizer.authorize(&good));
        let after = authorizer.authorize(&good).await;

        assert_eq!(denied.effect(), Effect::Deny);
        assert_eq!(allowed.effect(), Effect::Allow);
        assert_eq!(allowed, after);
        assert_eq!(allowed.context.unwrap()["sub"], "U2");
    }
}
