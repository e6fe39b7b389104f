pub mod field_verification;
pub mod verifier;
