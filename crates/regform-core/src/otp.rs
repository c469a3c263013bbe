//! One-time-passcode challenge state machine.
//!
//! The code is generated and checked entirely on this side, never sent
//! anywhere, and written to the log on issue. That weakness is part of the
//! shipped design and is kept as-is.

use crate::error::FormError;
use crate::types::NavigationSink;
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info, warn};

/// Destination on an accepted challenge.
pub const SUCCESS_URL: &str = "http://pixel6.co";

/// Destination once the attempt limit is exceeded.
pub const LOCKOUT_URL: &str = "http://pixel6.co/page-not-found";

/// Attempt limit; the counter may reach this value and still retry, one
/// past it locks out.
pub const MAX_ATTEMPTS: u32 = 3;

/// Where the challenge currently stands. `Accepted` and `LockedOut` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeStatus {
    AwaitingCode,
    Retrying,
    Accepted,
    LockedOut,
}

impl ChallengeStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ChallengeStatus::Accepted | ChallengeStatus::LockedOut)
    }
}

/// Outcome of checking one entered code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Accepted,
    Retrying,
    LockedOut,
}

impl CheckOutcome {
    /// Redirect target for terminal outcomes.
    pub fn destination(&self) -> Option<&'static str> {
        match self {
            CheckOutcome::Accepted => Some(SUCCESS_URL),
            CheckOutcome::LockedOut => Some(LOCKOUT_URL),
            CheckOutcome::Retrying => None,
        }
    }
}

/// A pending OTP confirmation for one submitted registration.
///
/// The attempt counter is driven by [`record_attempt`], a separate control
/// from the check itself: a failed check regenerates the code but does not
/// count an attempt. The shipped form behaved this way and the decoupling
/// is preserved.
///
/// [`record_attempt`]: OtpChallenge::record_attempt
pub struct OtpChallenge {
    code: u16,
    attempts: u32,
    status: ChallengeStatus,
    first_name: String,
    phone_number: String,
    issued_at: DateTime<Utc>,
}

impl OtpChallenge {
    /// Issue a challenge for a submitted form.
    ///
    /// `username` contributes its first space-delimited token as the
    /// display name; `phone_number` is the masked display value.
    pub fn new(username: &str, phone_number: &str) -> Self {
        let first_name = username
            .split(' ')
            .next()
            .unwrap_or_default()
            .to_string();
        let code = draw_code();

        info!("OTP issued: {}", code);

        Self {
            code,
            attempts: 0,
            status: ChallengeStatus::AwaitingCode,
            first_name,
            phone_number: phone_number.to_string(),
            issued_at: Utc::now(),
        }
    }

    /// The prompt shown while awaiting the code.
    pub fn prompt(&self) -> String {
        format!(
            "Dear {}, Thank you for your inquiry. A 4 digit random number has been sent to your phone number: {}, please enter in the following box and submit for confirmation.",
            self.first_name, self.phone_number
        )
    }

    /// Count one activation of the attempt control. Independent of how many
    /// times the challenge form is submitted.
    pub fn record_attempt(&mut self) {
        self.attempts += 1;
        debug!("Attempt count now {}", self.attempts);
    }

    /// Check an entered code against the current one.
    ///
    /// A mismatch within the attempt limit regenerates the code and stays
    /// open; past the limit the challenge locks out. Checking an already
    /// decided challenge is an error.
    pub fn check(&mut self, entered: &str) -> Result<CheckOutcome, FormError> {
        if self.status.is_terminal() {
            return Err(FormError::ChallengeDecided(self.status));
        }

        // Loose numeric comparison: whitespace and leading zeros do not
        // make an otherwise correct code wrong.
        let matches = entered.trim().parse::<u32>() == Ok(u32::from(self.code));

        if matches {
            self.status = ChallengeStatus::Accepted;
            info!("OTP accepted");
            return Ok(CheckOutcome::Accepted);
        }

        if self.attempts <= MAX_ATTEMPTS {
            self.code = draw_code();
            self.status = ChallengeStatus::Retrying;
            info!("OTP mismatch, new code issued: {}", self.code);
            Ok(CheckOutcome::Retrying)
        } else {
            self.status = ChallengeStatus::LockedOut;
            warn!("OTP attempt limit exceeded, locking out");
            Ok(CheckOutcome::LockedOut)
        }
    }

    /// Apply a terminal outcome's redirect, if any.
    pub fn redirect(&self, outcome: CheckOutcome, nav: &mut dyn NavigationSink) {
        if let Some(url) = outcome.destination() {
            nav.redirect(url);
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn status(&self) -> ChallengeStatus {
        self.status
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

fn draw_code() -> u16 {
    rand::thread_rng().gen_range(1000..=9999)
}
