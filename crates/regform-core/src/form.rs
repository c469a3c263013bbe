//! Registration form controller: routes edits and keystrokes through the
//! masker and the validation engine, and gates submission.

use crate::error::FormError;
use crate::phone::{self, KeyEvent, ZoneUpdate};
use crate::types::{FieldId, IndicatorSink};
use crate::validation::{FieldValidationState, ValidationEngine};
use tracing::{debug, warn};

/// Current values of the form fields plus the derived region label.
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    pub username: String,
    pub email: String,
    /// Masked display value of the phone field.
    pub phone: String,
    /// Last region label written by the masker.
    pub region_label: String,
}

impl FieldStore {
    fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Username => &self.username,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
        }
    }
}

/// What a submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid; carries the values that seed the OTP challenge.
    Submitted {
        first_name: String,
        phone_number: String,
    },
    /// At least one field invalid; default navigation stays suppressed.
    Rejected(Vec<FieldValidationState>),
}

/// Owns the engine and the field store and drives both from host events.
pub struct RegistrationForm {
    engine: ValidationEngine,
    store: FieldStore,
}

impl RegistrationForm {
    pub fn new() -> Result<Self, FormError> {
        Ok(Self {
            engine: ValidationEngine::new()?,
            store: FieldStore::default(),
        })
    }

    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    /// Store a new field value and re-evaluate it.
    ///
    /// Phone values run through the masker first; region label and zone
    /// updates go to the sink before evaluation so the phone rule sees the
    /// fresh label.
    pub fn field_edited(
        &mut self,
        field: FieldId,
        value: &str,
        sink: &mut dyn IndicatorSink,
    ) -> FieldValidationState {
        match field {
            FieldId::Username => self.store.username = value.to_string(),
            FieldId::Email => self.store.email = value.to_string(),
            FieldId::Phone => self.apply_mask(value, sink),
        }
        self.evaluate(field, sink)
    }

    /// Feed one phone keystroke through the guard.
    ///
    /// Rejected keys change nothing and return `None`. Accepted digits
    /// append to the field and Backspace removes the trailing character.
    /// Modifier keys skip the re-mask on release, so a deletion leaves the
    /// display unformatted until the next digit; re-validation still runs
    /// on every accepted release.
    pub fn phone_keystroke(
        &mut self,
        event: KeyEvent,
        sink: &mut dyn IndicatorSink,
    ) -> Option<FieldValidationState> {
        if !event.is_allowed() {
            debug!("Rejected phone key {}", event.code);
            return None;
        }

        if let Some(digit) = phone::digit_char(&event) {
            self.store.phone.push(digit);
        } else if event.code == 8 {
            self.store.phone.pop();
        }

        if !phone::is_modifier_key(&event) {
            let value = self.store.phone.clone();
            self.apply_mask(&value, sink);
        }

        Some(self.evaluate(FieldId::Phone, sink))
    }

    /// Evaluate every field, as the form does on submission.
    ///
    /// Valid across the board yields the first name and masked phone
    /// number for the challenge handoff; otherwise the submission is
    /// rejected with the full set of states.
    pub fn submit(&mut self, sink: &mut dyn IndicatorSink) -> SubmitOutcome {
        let states: Vec<FieldValidationState> = [FieldId::Username, FieldId::Email, FieldId::Phone]
            .into_iter()
            .map(|field| self.evaluate(field, sink))
            .collect();

        if states.iter().all(|s| s.valid) {
            let first_name = self
                .store
                .username
                .split(' ')
                .next()
                .unwrap_or_default()
                .to_string();
            SubmitOutcome::Submitted {
                first_name,
                phone_number: self.store.phone.clone(),
            }
        } else {
            warn!(
                "Submission rejected ({} invalid fields)",
                states.iter().filter(|s| !s.valid).count()
            );
            SubmitOutcome::Rejected(states)
        }
    }

    fn apply_mask(&mut self, value: &str, sink: &mut dyn IndicatorSink) {
        let masked = phone::mask(value);
        self.store.phone = masked.display;
        if let Some(label) = masked.region_label {
            sink.set_region_label(&label);
            self.store.region_label = label;
        }
        match masked.zone {
            ZoneUpdate::Show(zone) => sink.set_zone(Some(zone)),
            ZoneUpdate::HideAll => sink.set_zone(None),
            ZoneUpdate::Untouched => {}
        }
    }

    fn evaluate(&self, field: FieldId, sink: &mut dyn IndicatorSink) -> FieldValidationState {
        let state = self
            .engine
            .evaluate(field, self.store.value(field), &self.store.region_label);
        for (index, indicator) in &state.indicators {
            sink.set_requirement(field, *index, *indicator);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IndicatorState, Zone};

    /// Records every sink call for assertions.
    #[derive(Default)]
    struct RecordingSink {
        requirements: Vec<(FieldId, usize, IndicatorState)>,
        zones: Vec<Option<Zone>>,
        region_labels: Vec<String>,
    }

    impl IndicatorSink for RecordingSink {
        fn set_requirement(&mut self, field: FieldId, index: usize, state: IndicatorState) {
            self.requirements.push((field, index, state));
        }

        fn set_zone(&mut self, zone: Option<Zone>) {
            self.zones.push(zone);
        }

        fn set_region_label(&mut self, label: &str) {
            self.region_labels.push(label.to_string());
        }
    }

    fn form() -> RegistrationForm {
        RegistrationForm::new().unwrap()
    }

    #[test]
    fn username_edit_pushes_indicators() {
        let mut form = form();
        let mut sink = RecordingSink::default();

        let state = form.field_edited(FieldId::Username, "John Doe", &mut sink);

        assert!(state.valid);
        assert_eq!(sink.requirements.len(), 3);
        assert!(sink
            .requirements
            .iter()
            .all(|(f, _, s)| *f == FieldId::Username && *s == IndicatorState::Valid));
    }

    #[test]
    fn phone_edit_masks_and_labels() {
        let mut form = form();
        let mut sink = RecordingSink::default();

        let state = form.field_edited(FieldId::Phone, "1231307890", &mut sink);

        assert_eq!(form.store().phone, "(123)-130-7890");
        assert_eq!(form.store().region_label, "Madhya Pradesh");
        assert_eq!(sink.region_labels, vec!["Madhya Pradesh".to_string()]);
        assert!(sink.zones.is_empty());
        assert!(state.valid);
    }

    #[test]
    fn unmapped_bucket_invalidates_the_phone_field() {
        let mut form = form();
        let mut sink = RecordingSink::default();

        let state = form.field_edited(FieldId::Phone, "1239997890", &mut sink);

        assert_eq!(form.store().region_label, "invalid number");
        assert_eq!(sink.zones, vec![None]);
        assert!(!state.valid);
        assert_eq!(state.messages, vec!["Number is invalid".to_string()]);
    }

    #[test]
    fn short_phone_drives_the_zone_indicator() {
        let mut form = form();
        let mut sink = RecordingSink::default();

        form.field_edited(FieldId::Phone, "650123", &mut sink);

        assert_eq!(form.store().phone, "(650)-123");
        assert_eq!(sink.zones, vec![Some(Zone::A)]);
        assert!(sink.region_labels.is_empty());
    }

    #[test]
    fn capitalized_sentinel_does_not_invalidate() {
        let mut form = form();
        let mut sink = RecordingSink::default();

        let state = form.field_edited(FieldId::Phone, "123456", &mut sink);

        assert_eq!(form.store().region_label, "Invalid Number");
        assert_eq!(sink.zones, vec![None]);
        assert!(state.valid);
    }

    #[test]
    fn rejected_keystroke_changes_nothing() {
        let mut form = form();
        let mut sink = RecordingSink::default();
        form.field_edited(FieldId::Phone, "12", &mut sink);

        let result = form.phone_keystroke(KeyEvent::key(75), &mut sink); // plain K

        assert!(result.is_none());
        assert_eq!(form.store().phone, "(12");
    }

    #[test]
    fn digit_keystrokes_build_up_the_masked_value() {
        let mut form = form();
        let mut sink = RecordingSink::default();

        for code in [49, 50, 51, 52] {
            form.phone_keystroke(KeyEvent::key(code), &mut sink);
        }

        assert_eq!(form.store().phone, "(123)-4");
    }

    #[test]
    fn backspace_skips_the_remask() {
        let mut form = form();
        let mut sink = RecordingSink::default();
        for code in [49, 50, 51, 52] {
            form.phone_keystroke(KeyEvent::key(code), &mut sink);
        }
        assert_eq!(form.store().phone, "(123)-4");

        let state = form.phone_keystroke(KeyEvent::key(8), &mut sink);

        // Trailing character removed, display left unformatted.
        assert_eq!(form.store().phone, "(123)-");
        assert!(state.is_some());
    }

    #[test]
    fn submit_rejects_until_every_field_is_valid() {
        let mut form = form();
        let mut sink = RecordingSink::default();
        form.field_edited(FieldId::Username, "John Doe", &mut sink);
        form.field_edited(FieldId::Phone, "1231307890", &mut sink);

        // Email still empty.
        match form.submit(&mut sink) {
            SubmitOutcome::Rejected(states) => {
                assert_eq!(states.len(), 3);
                assert!(states.iter().any(|s| s.field == FieldId::Email && !s.valid));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn submit_hands_off_first_name_and_masked_phone() {
        let mut form = form();
        let mut sink = RecordingSink::default();
        form.field_edited(FieldId::Username, "John Doe", &mut sink);
        form.field_edited(FieldId::Email, "john@example.com", &mut sink);
        form.field_edited(FieldId::Phone, "1231307890", &mut sink);

        match form.submit(&mut sink) {
            SubmitOutcome::Submitted {
                first_name,
                phone_number,
            } => {
                assert_eq!(first_name, "John");
                assert_eq!(phone_number, "(123)-130-7890");
            }
            other => panic!("expected submission, got {:?}", other),
        }
    }
}
