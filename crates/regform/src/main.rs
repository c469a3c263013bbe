//! Registration form console - main entry point.
//!
//! Drives the two-phase flow the original page implemented: fill and
//! validate the form, then confirm a one-time passcode. Stdin lines stand
//! in for browser events; the console page stands in for the DOM.

mod config;
mod console;
mod error;
mod events;

use crate::config::{Config, ConsoleConfig};
use crate::console::ConsolePage;
use crate::error::AppResult;
use crate::events::{EventReceiver, FormEvent};
use anyhow::Context;
use regform_core::{CheckOutcome, FieldId, OtpChallenge, RegistrationForm, SubmitOutcome};
use session_store::{SessionStore, FIRST_NAME_KEY, PHONE_NUMBER_KEY};
use tokio::signal;
use tokio_stream::StreamExt;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log.level);

    info!("Starting registration form console...");

    let mut page = ConsolePage::new();
    let session = SessionStore::new();
    let mut form = RegistrationForm::new()?;
    let mut challenge: Option<OtpChallenge> = None;

    print_help();

    // Start event receiver
    let receiver = EventReceiver::new();
    let mut stream = Box::pin(receiver.stream());

    // Main event loop
    loop {
        tokio::select! {
            Some(event) = stream.next() => {
                match event {
                    FormEvent::Quit => break,
                    FormEvent::Help => print_help(),
                    event => {
                        if let Some(active) = challenge.as_mut() {
                            if handle_challenge_event(active, event, &mut page)? {
                                break;
                            }
                        } else {
                            challenge = handle_form_event(
                                &mut form,
                                event,
                                &mut page,
                                &session,
                                &config.console,
                            )
                            .await?;
                        }
                    }
                }
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

/// Handle one event during the form phase. Returns the challenge once a
/// submission goes through.
async fn handle_form_event(
    form: &mut RegistrationForm,
    event: FormEvent,
    page: &mut ConsolePage,
    session: &SessionStore,
    console: &ConsoleConfig,
) -> AppResult<Option<OtpChallenge>> {
    match event {
        FormEvent::Edit(field, value) => {
            let state = form.field_edited(field, &value, page);
            if field == FieldId::Phone {
                println!("phone: {}", form.store().phone);
                page.render_region();
            }
            if console.show_requirements {
                page.render_requirements(field);
            }
            if !state.valid && !state.messages.is_empty() {
                println!("{}", state.message());
            }
        }
        FormEvent::Keystroke(key) => match form.phone_keystroke(key, page) {
            Some(_) => println!("phone: {}", form.store().phone),
            None => println!("(key rejected)"),
        },
        FormEvent::Submit => match form.submit(page) {
            SubmitOutcome::Submitted {
                first_name,
                phone_number,
            } => {
                session.set(FIRST_NAME_KEY, &first_name).await;
                session.set(PHONE_NUMBER_KEY, &phone_number).await;

                // The challenge page reads the handoff values back out of
                // the session, as the original did.
                let first_name = session.get(FIRST_NAME_KEY).await.unwrap_or_default();
                let phone_number = session.get(PHONE_NUMBER_KEY).await.unwrap_or_default();

                let challenge = OtpChallenge::new(&first_name, &phone_number);
                println!("{}", challenge.prompt());
                return Ok(Some(challenge));
            }
            SubmitOutcome::Rejected(states) => {
                println!("Submission rejected:");
                for state in states.iter().filter(|s| !s.valid) {
                    println!("  {}: {}", state.field.as_str(), state.message());
                }
            }
        },
        FormEvent::Otp(_) | FormEvent::Count => {
            println!("No pending challenge; submit the form first.");
        }
        FormEvent::Unknown(line) => {
            warn!("Unrecognized input: {}", line);
            println!("Unrecognized command; try 'help'.");
        }
        FormEvent::Help | FormEvent::Quit => unreachable!("handled by the event loop"),
    }
    Ok(None)
}

/// Handle one event during the challenge phase. Returns true once the
/// challenge is decided.
fn handle_challenge_event(
    challenge: &mut OtpChallenge,
    event: FormEvent,
    page: &mut ConsolePage,
) -> AppResult<bool> {
    match event {
        FormEvent::Otp(entered) => {
            let outcome = challenge.check(&entered)?;
            challenge.redirect(outcome, page);
            match outcome {
                CheckOutcome::Accepted => {
                    println!("Valid");
                    Ok(true)
                }
                CheckOutcome::Retrying => {
                    println!("Incorrect code, please try again.");
                    Ok(false)
                }
                CheckOutcome::LockedOut => {
                    println!("Invalid");
                    Ok(true)
                }
            }
        }
        FormEvent::Count => {
            challenge.record_attempt();
            Ok(false)
        }
        FormEvent::Unknown(line) => {
            warn!("Unrecognized input: {}", line);
            println!("Unrecognized command; try 'help'.");
            Ok(false)
        }
        _ => {
            println!("Challenge pending; enter 'otp <code>'.");
            Ok(false)
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  username <value>   set and validate the username field");
    println!("  email <value>      set and validate the email field");
    println!("  phone <value>      set, mask, and validate the phone field");
    println!("  type <chars>       feed phone keystrokes through the guard");
    println!("  backspace          remove the trailing phone character");
    println!("  submit             validate everything and issue the OTP");
    println!("  otp <code>         check an entered passcode");
    println!("  count              press the attempt-count control");
    println!("  help | quit");
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
