use serde_json::Value;

use crate::services::authorizer::policy::ClaimsContext;
use crate::services::verifier::VerifiedClaims;

/// Flatten verified claims into the gateway context map.
///
/// - every value is a string; `amr` is comma-joined (`["pwd","lineqr"]` -> `"pwd,lineqr"`)
/// - absent optional claims are omitted, not written as empty strings
/// - extra provider fields survive only when scalar; arrays/objects/null are dropped
pub fn flatten_claims(claims: &VerifiedClaims) -> ClaimsContext {
    let mut ctx = ClaimsContext::new();

    for (key, value) in &claims.extra {
        if let Some(s) = scalar_to_string(value) {
            ctx.insert(key.clone(), s);
        }
    }

    // Known claims win over anything of the same name in `extra`.
    ctx.insert("iss".into(), claims.iss.clone());
    ctx.insert("sub".into(), claims.sub.clone());
    ctx.insert("aud".into(), claims.aud.clone());
    ctx.insert("exp".into(), claims.exp.to_string());
    ctx.insert("iat".into(), claims.iat.to_string());
    ctx.insert("amr".into(), claims.amr.join(","));

    if let Some(auth_time) = claims.auth_time {
        ctx.insert("auth_time".into(), auth_time.to_string());
    }
    let optional = [
        ("nonce", &claims.nonce),
        ("name", &claims.name),
        ("picture", &claims.picture),
        ("email", &claims.email),
    ];
    for (key, value) in optional {
        if let Some(v) = value {
            ctx.insert(key.into(), v.clone());
        }
    }

    ctx
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
