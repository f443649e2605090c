//! Authorizer response shape consumed by the gateway.
//!
//! ```json
//! {
//!   "principalId": "user",
//!   "context": { "sub": "U1", "amr": "pwd" },
//!   "policyDocument": {
//!     "Version": "2012-10-17",
//!     "Statement": [{ "Effect": "Allow", "Action": "execute-api:Invoke", "Resource": "<methodArn>" }]
//!   }
//! }
//! ```
use serde::Serialize;
use std::collections::BTreeMap;

pub const POLICY_VERSION: &str = "2012-10-17";
pub const INVOKE_ACTION: &str = "execute-api:Invoke";
pub const PRINCIPAL_ID: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub effect: Effect,
    pub action: &'static str,
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: &'static str,
    pub statement: Vec<Statement>,
}

impl PolicyDocument {
    /// Single-statement policy for `execute-api:Invoke` on `resource`.
    pub fn generate(effect: Effect, resource: impl Into<String>) -> Self {
        Self {
            version: POLICY_VERSION,
            statement: vec![Statement {
                effect,
                action: INVOKE_ACTION,
                resource: resource.into(),
            }],
        }
    }
}

/// Flat string map handed to downstream integrations. No nesting, no arrays.
pub type ClaimsContext = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationDecision {
    pub principal_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ClaimsContext>,
    pub policy_document: PolicyDocument,
}

impl AuthorizationDecision {
    pub fn allow(resource: impl Into<String>, context: ClaimsContext) -> Self {
        Self {
            principal_id: PRINCIPAL_ID,
            context: Some(context),
            policy_document: PolicyDocument::generate(Effect::Allow, resource),
        }
    }

    /// Deny never carries claims.
    pub fn deny(resource: impl Into<String>) -> Self {
        Self {
            principal_id: PRINCIPAL_ID,
            context: None,
            policy_document: PolicyDocument::generate(Effect::Deny, resource),
        }
    }

    pub fn effect(&self) -> Effect {
        self.policy_document
            .statement
            .first()
            .map(|s| s.effect)
            .unwrap_or(Effect::Deny)
    }

    pub fn resource(&self) -> &str {
        self.policy_document
            .statement
            .first()
            .map(|s| s.resource.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ARN: &str = "arn:aws:execute-api:ap-northeast-1:123456789012:abcdef/prod/GET/profile";

    #[test]
    fn deny_serializes_without_context() {
        let decision = AuthorizationDecision::deny(ARN);

        assert_eq!(
            serde_json::to_value(&decision).unwrap(),
            json!({
                "principalId": "user",
                "policyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Effect": "Deny",
                        "Action": "execute-api:Invoke",
                        "Resource": ARN
                    }]
                }
            })
        );
    }

    #[test]
    fn allow_serializes_context_and_statement() {
        let mut context = ClaimsContext::new();
        context.insert("sub".into(), "U1".into());
        context.insert("amr".into(), "pwd".into());

        let decision = AuthorizationDecision::allow(ARN, context);
        let value = serde_json::to_value(&decision).unwrap();

        assert_eq!(value["principalId"], "user");
        assert_eq!(value["context"], json!({ "sub": "U1", "amr": "pwd" }));
        assert_eq!(value["policyDocument"]["Statement"][0]["Effect"], "Allow");
        assert_eq!(value["policyDocument"]["Statement"][0]["Resource"], ARN);
        assert_eq!(decision.effect(), Effect::Allow);
        assert_eq!(decision.resource(), ARN);
    }
}
