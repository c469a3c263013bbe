//! Registration form engine: rule-based field validation, phone input
//! masking with region lookup, and a retry-limited OTP challenge.
//!
//! All UI concerns (rendering, navigation) sit behind the sink traits in
//! [`types`]; the engine itself is synchronous and never blocks.

mod error;
mod form;
mod otp;
pub mod phone;
mod types;
pub mod validation;

pub use error::FormError;
pub use form::{FieldStore, RegistrationForm, SubmitOutcome};
pub use otp::{ChallengeStatus, CheckOutcome, OtpChallenge, LOCKOUT_URL, MAX_ATTEMPTS, SUCCESS_URL};
pub use phone::KeyEvent;
pub use types::*;
