use serde::Deserialize;

/// TOKEN authorizer invocation sent by the gateway.
///
/// `authorization_token` is the raw `Authorization` header (`Bearer <token>`);
/// `method_arn` is the protected operation and becomes the policy resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    // Always "TOKEN" for this authorizer type.
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    pub authorization_token: String,
    pub method_arn: String,
}

impl InvocationEvent {
    pub fn new(authorization_token: impl Into<String>, method_arn: impl Into<String>) -> Self {
        Self {
            event_type: Some("TOKEN".to_string()),
            authorization_token: authorization_token.into(),
            method_arn: method_arn.into(),
        }
    }
}
