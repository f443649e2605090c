pub mod claims;
pub mod client;
pub mod line;

pub use claims::{VerificationFailure, VerifiedClaims};
pub use client::{IdTokenVerifier, VerifyError, VerifyResult};
pub use line::LineVerifier;
