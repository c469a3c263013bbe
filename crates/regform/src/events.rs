//! Line-based event input standing in for the browser's event dispatch.
//!
//! Each stdin line becomes one form event. `type` feeds characters through
//! the phone keystroke guard one at a time, like real key events would;
//! `phone` replaces the whole field value in one edit.

use regform_core::{FieldId, KeyEvent};
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio_stream::Stream;
use tracing::debug;

/// One event for the form or challenge phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Replace a field's value.
    Edit(FieldId, String),
    /// One phone keystroke.
    Keystroke(KeyEvent),
    /// Submit the form (or the challenge form, carrying the entered code).
    Submit,
    /// An entered OTP code.
    Otp(String),
    /// One activation of the attempt-count control.
    Count,
    Help,
    Quit,
    /// Anything unparseable; reported, never fatal.
    Unknown(String),
}

/// Parse one input line into an event.
pub fn parse_line(line: &str) -> Vec<FormEvent> {
    let line = line.trim();
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest),
        None => (line, ""),
    };

    match command {
        "username" => vec![FormEvent::Edit(FieldId::Username, rest.to_string())],
        "email" => vec![FormEvent::Edit(FieldId::Email, rest.to_string())],
        "phone" => vec![FormEvent::Edit(FieldId::Phone, rest.to_string())],
        "type" => rest.chars().map(|c| FormEvent::Keystroke(key_for(c))).collect(),
        "backspace" => vec![FormEvent::Keystroke(KeyEvent::key(8))],
        "submit" => vec![FormEvent::Submit],
        "otp" => vec![FormEvent::Otp(rest.to_string())],
        "count" => vec![FormEvent::Count],
        "help" => vec![FormEvent::Help],
        "quit" | "exit" => vec![FormEvent::Quit],
        "" => vec![],
        _ => vec![FormEvent::Unknown(line.to_string())],
    }
}

/// Map a typed character to the key event a browser would report.
fn key_for(c: char) -> KeyEvent {
    match c {
        '0'..='9' => KeyEvent::key(48 + c as u32 - '0' as u32),
        'a'..='z' => KeyEvent::key(c.to_ascii_uppercase() as u32),
        'A'..='Z' => KeyEvent::key(c as u32),
        // Anything else maps to a code the guard rejects.
        _ => KeyEvent::key(0),
    }
}

/// Reads stdin lines and yields form events.
pub struct EventReceiver {
    reader: BufReader<Stdin>,
}

impl EventReceiver {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }

    /// Start receiving events as an async stream. Ends when stdin closes.
    pub fn stream(self) -> impl Stream<Item = FormEvent> {
        async_stream::stream! {
            let mut lines = self.reader.lines();
            while let Ok(Some(line)) = lines.next_line().await {
                for event in parse_line(&line) {
                    debug!("Event: {:?}", event);
                    yield event;
                }
            }
        }
    }
}

impl Default for EventReceiver {
    fn default() -> Self {
        Self::new()
    }
}
