use std::sync::Arc;

use crate::services::authorizer::TokenAuthorizer;

#[derive(Clone, Debug)]
pub struct AppState {
    pub authorizer: Arc<TokenAuthorizer>,
}

impl AppState {
    pub fn new(authorizer: Arc<TokenAuthorizer>) -> Self {
        Self { authorizer }
    }
}
