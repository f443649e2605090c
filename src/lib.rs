//! Gateway TOKEN authorizer that verifies LINE Login ID tokens.
//!
//! The gateway posts a `{ authorizationToken, methodArn }` event; the bearer
//! token is checked against LINE's `/oauth2/v2.1/verify` endpoint and an
//! `Allow`/`Deny` policy document is returned. Every failure is a `Deny`.
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
