use serde::Deserialize;
use serde_json::{Map, Value};

/// Decoded ID token returned by the verification endpoint on success.
///
/// `amr` is drawn from `pwd`, `lineautologin`, `lineqr` and `linesso`, but the
/// values are passed through untouched; nothing here rejects an unknown method.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VerifiedClaims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub exp: u64,
    pub iat: u64,

    #[serde(default)]
    pub auth_time: Option<u64>,
    #[serde(default)]
    pub nonce: Option<String>,

    // Required: a body without `amr` is not a claim set.
    pub amr: Vec<String>,

    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub email: Option<String>,

    // Anything else the provider adds at the top level.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Error body returned by the verification endpoint (`{ error, error_description }`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerificationFailure {
    pub error: String,
    #[serde(default)]
    pub error_description: String,
}
