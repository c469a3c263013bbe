//! Session-scoped key/value storage for the registration flow.
//!
//! In-memory analog of browser session storage: the form phase writes the
//! submitter's first name and phone number, the challenge phase reads them
//! back. No external persistence.

mod error;
mod store;

pub use error::SessionError;
pub use store::{SessionStore, FIRST_NAME_KEY, PHONE_NUMBER_KEY};
