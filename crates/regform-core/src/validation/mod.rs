//! Declarative field validation: rule sets and the evaluation engine.

mod engine;
mod rules;

pub use engine::{FieldValidationState, ValidationEngine};
pub use rules::{default_rules, email_rules, phone_rules, username_rules, Rule, RuleCheck};
