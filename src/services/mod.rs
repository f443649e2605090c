pub mod authorizer;
pub mod verifier;
