//! Form engine errors.
//!
//! Validation failures are not errors; they are carried in
//! `FieldValidationState`. These variants cover genuine misuse or setup
//! failures only.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Challenge already decided: {0:?}")]
    ChallengeDecided(crate::otp::ChallengeStatus),
}
