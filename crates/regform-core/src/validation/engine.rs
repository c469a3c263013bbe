//! Rule evaluation over field values.

use crate::error::FormError;
use crate::types::{FieldId, IndicatorState};
use crate::validation::rules::{default_rules, Rule};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Outcome of evaluating every rule bound to one field.
///
/// Recomputed from scratch on each evaluation; there is no incremental
/// update. The indicator list carries one entry per rule, in rule order,
/// so the host can repaint the requirement checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationState {
    pub field: FieldId,
    /// Messages of the rules that fired, in rule order.
    pub messages: Vec<String>,
    /// (indicator index, state) for every rule, in rule order.
    pub indicators: Vec<(usize, IndicatorState)>,
    /// True iff no rule fired and the value is non-empty.
    pub valid: bool,
}

impl FieldValidationState {
    /// The combined invalidity message shown for the field.
    pub fn message(&self) -> String {
        self.messages.join(". \n")
    }
}

/// Binds rule sets to fields and evaluates them.
pub struct ValidationEngine {
    rules: HashMap<FieldId, Vec<Rule>>,
}

impl ValidationEngine {
    /// Create an engine with the standard registration-form rules.
    pub fn new() -> Result<Self, FormError> {
        Ok(Self {
            rules: default_rules()?,
        })
    }

    /// Create an engine with explicit rule bindings.
    pub fn with_rules(rules: HashMap<FieldId, Vec<Rule>>) -> Self {
        Self { rules }
    }

    /// Run every rule bound to `field` against `value`.
    ///
    /// `region_label` is the derived state the phone rule reads; other
    /// fields ignore it. All rules run every pass, none are skipped.
    pub fn evaluate(&self, field: FieldId, value: &str, region_label: &str) -> FieldValidationState {
        let mut messages = Vec::new();
        let mut indicators = Vec::new();

        for rule in self.rules.get(&field).map(Vec::as_slice).unwrap_or(&[]) {
            let is_invalid = rule.check.is_invalid(value, region_label);
            if is_invalid {
                messages.push(rule.message.clone());
            }
            indicators.push((
                rule.indicator,
                if is_invalid {
                    IndicatorState::Invalid
                } else {
                    IndicatorState::Valid
                },
            ));
        }

        let valid = messages.is_empty() && !value.is_empty();

        debug!(
            "Evaluated {} ({} rules, {} fired, valid={})",
            field.as_str(),
            indicators.len(),
            messages.len(),
            valid
        );

        FieldValidationState {
            field,
            messages,
            indicators,
            valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ValidationEngine {
        ValidationEngine::new().unwrap()
    }

    #[test]
    fn short_username_reports_length_message() {
        let state = engine().evaluate(FieldId::Username, "ab", "");
        assert!(!state.valid);
        assert!(state
            .messages
            .contains(&"This input needs to be at least 3 characters".to_string()));
    }

    #[test]
    fn two_word_username_is_valid() {
        let state = engine().evaluate(FieldId::Username, "John Doe", "");
        assert!(state.valid);
        assert!(state.messages.is_empty());
        assert!(state
            .indicators
            .iter()
            .all(|(_, s)| *s == IndicatorState::Valid));
    }

    #[test]
    fn username_messages_join_with_dot_newline() {
        let state = engine().evaluate(FieldId::Username, "a1 ", "");
        assert!(state.messages.len() >= 2);
        assert!(state.message().contains(". \n"));
    }

    #[test]
    fn empty_value_is_invalid_even_without_fired_rules() {
        // The dead email rule never fires and the pattern rule does, so use
        // the phone field with a clean label: no messages, still invalid.
        let state = engine().evaluate(FieldId::Phone, "", "Kerala");
        assert!(state.messages.is_empty());
        assert!(!state.valid);
    }

    #[test]
    fn well_formed_email_passes() {
        let state = engine().evaluate(FieldId::Email, "jane@example.com", "");
        assert!(state.valid);
        // Dead rule's indicator stays valid.
        assert_eq!(state.indicators[0], (0, IndicatorState::Valid));
    }

    #[test]
    fn malformed_email_fires_format_rule_only() {
        let state = engine().evaluate(FieldId::Email, "jane@@example", "");
        assert_eq!(state.messages, vec!["Enter correct Email format".to_string()]);
        assert_eq!(state.indicators[0], (0, IndicatorState::Valid));
        assert_eq!(state.indicators[1], (1, IndicatorState::Invalid));
    }

    #[test]
    fn phone_rule_fires_on_lowercase_sentinel_only() {
        let e = engine();
        let bad = e.evaluate(FieldId::Phone, "(123)-999-0000", "invalid number");
        assert!(!bad.valid);
        assert_eq!(bad.messages, vec!["Number is invalid".to_string()]);

        let capitalized = e.evaluate(FieldId::Phone, "(123)-9", "Invalid Number");
        assert!(capitalized.messages.is_empty());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let e = engine();
        let first = e.evaluate(FieldId::Username, "John", "");
        let second = e.evaluate(FieldId::Username, "John", "");
        assert_eq!(first, second);
    }

    #[test]
    fn unbound_field_yields_no_indicators() {
        let e = ValidationEngine::with_rules(HashMap::new());
        let state = e.evaluate(FieldId::Username, "anything", "");
        assert!(state.indicators.is_empty());
        assert!(state.valid);
    }
}
