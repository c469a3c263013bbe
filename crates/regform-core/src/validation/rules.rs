//! Validity rules bound to each field.
//!
//! A rule pairs a check with the message shown when the check fires and the
//! index of the requirement indicator it drives. Checks return `true` when
//! the input is *invalid*. The phone rule is the only one that reads derived
//! state (the region label written by the masker) instead of the raw value.

use crate::error::FormError;
use crate::phone::REGION_INVALID;
use crate::types::FieldId;
use regex::Regex;
use std::collections::HashMap;

/// A single validity check for one field.
#[derive(Debug, Clone)]
pub struct Rule {
    pub check: RuleCheck,
    pub message: String,
    /// Index of the requirement indicator this rule drives.
    pub indicator: usize,
}

/// The closed set of check kinds.
#[derive(Debug, Clone)]
pub enum RuleCheck {
    /// Invalid if the value has fewer than this many characters.
    MinLength(usize),
    /// Invalid if the pattern matches anywhere in the value.
    ForbiddenPattern(Regex),
    /// Invalid if splitting on single spaces yields fewer tokens than this.
    MinWords(usize),
    /// Invalid unless the whole value matches the pattern.
    RequiredPattern(Regex),
    /// Invalid iff the derived region label equals this sentinel exactly.
    RegionSentinel(String),
    /// Never fires. The original email "required" check compared length
    /// against zero and could not fire; kept as a visible no-op.
    Never,
}

impl RuleCheck {
    /// Returns true when the input fails this check.
    pub fn is_invalid(&self, value: &str, region_label: &str) -> bool {
        match self {
            RuleCheck::MinLength(min) => value.chars().count() < *min,
            RuleCheck::ForbiddenPattern(re) => re.is_match(value),
            RuleCheck::MinWords(min) => value.split(' ').count() < *min,
            RuleCheck::RequiredPattern(re) => !re.is_match(value),
            RuleCheck::RegionSentinel(sentinel) => region_label == sentinel,
            RuleCheck::Never => false,
        }
    }
}

impl Rule {
    fn new(check: RuleCheck, message: &str, indicator: usize) -> Self {
        Self {
            check,
            message: message.into(),
            indicator,
        }
    }
}

/// Rules for the username field.
///
/// The length message understates the bound by one; both the check and the
/// message are kept exactly as shipped.
pub fn username_rules() -> Result<Vec<Rule>, FormError> {
    Ok(vec![
        Rule::new(
            RuleCheck::MinLength(4),
            "This input needs to be at least 3 characters",
            0,
        ),
        Rule::new(
            RuleCheck::ForbiddenPattern(Regex::new(r"[^a-zA-Z]+\s")?),
            "Only letters are allowed",
            1,
        ),
        Rule::new(
            RuleCheck::MinWords(2),
            "This input needs to have at least 2 words",
            2,
        ),
    ])
}

/// Rules for the email field. The first rule never fires.
pub fn email_rules() -> Result<Vec<Rule>, FormError> {
    Ok(vec![
        Rule::new(RuleCheck::Never, "Email is required", 0),
        Rule::new(
            RuleCheck::RequiredPattern(Regex::new(
                r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$",
            )?),
            "Enter correct Email format",
            1,
        ),
    ])
}

/// Rules for the phone field. Compares the masker-derived region label
/// against the lowercase sentinel only; the capitalized sentinel from the
/// short-number branch deliberately does not match.
pub fn phone_rules() -> Result<Vec<Rule>, FormError> {
    Ok(vec![Rule::new(
        RuleCheck::RegionSentinel(REGION_INVALID.into()),
        "Number is invalid",
        0,
    )])
}

/// The standard rule bindings for the registration form.
pub fn default_rules() -> Result<HashMap<FieldId, Vec<Rule>>, FormError> {
    let mut rules = HashMap::new();
    rules.insert(FieldId::Username, username_rules()?);
    rules.insert(FieldId::Email, email_rules()?);
    rules.insert(FieldId::Phone, phone_rules()?);
    Ok(rules)
}
