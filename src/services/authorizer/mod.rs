pub mod context;
pub mod event;
pub mod factory;
pub mod policy;
pub mod service;
pub mod token;

pub use event::InvocationEvent;
pub use factory::build_token_authorizer;
pub use policy::{AuthorizationDecision, ClaimsContext, Effect, PolicyDocument, Statement};
pub use service::TokenAuthorizer;
