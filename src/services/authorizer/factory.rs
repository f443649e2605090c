/// Factory: build `TokenAuthorizer` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::services::authorizer::TokenAuthorizer;
use crate::services::verifier::LineVerifier;

pub fn build_token_authorizer(config: &Config) -> Result<Arc<TokenAuthorizer>, AppError> {
    let verifier = LineVerifier::new(
        config.verify_url.clone(),
        config.client_id.clone(),
        Some(config.verify_timeout),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "failed to build verify http client");
        AppError::Internal
    })?;

    Ok(Arc::new(TokenAuthorizer::new(Arc::new(verifier))))
}
