//! End-to-end flow: fill the form, submit, run the OTP challenge.

use regform_core::{
    CheckOutcome, FieldId, IndicatorSink, IndicatorState, NavigationSink, OtpChallenge,
    RegistrationForm, SubmitOutcome, Zone, LOCKOUT_URL, SUCCESS_URL,
};

#[derive(Default)]
struct FakeUi {
    zone: Option<Zone>,
    region_label: String,
    invalid_indicators: Vec<(FieldId, usize)>,
    redirects: Vec<String>,
}

impl IndicatorSink for FakeUi {
    fn set_requirement(&mut self, field: FieldId, index: usize, state: IndicatorState) {
        self.invalid_indicators.retain(|entry| *entry != (field, index));
        if state == IndicatorState::Invalid {
            self.invalid_indicators.push((field, index));
        }
    }

    fn set_zone(&mut self, zone: Option<Zone>) {
        self.zone = zone;
    }

    fn set_region_label(&mut self, label: &str) {
        self.region_label = label.to_string();
    }
}

impl NavigationSink for FakeUi {
    fn redirect(&mut self, url: &str) {
        self.redirects.push(url.to_string());
    }
}

fn filled_form(ui: &mut FakeUi) -> RegistrationForm {
    let mut form = RegistrationForm::new().unwrap();
    form.field_edited(FieldId::Username, "John Doe", ui);
    form.field_edited(FieldId::Email, "john.doe@example.com", ui);
    form.field_edited(FieldId::Phone, "1231307890", ui);
    form
}

#[test]
fn full_registration_reaches_the_success_destination() {
    let mut ui = FakeUi::default();
    let mut form = filled_form(&mut ui);

    let (first_name, phone_number) = match form.submit(&mut ui) {
        SubmitOutcome::Submitted {
            first_name,
            phone_number,
        } => (first_name, phone_number),
        other => panic!("expected submission, got {:?}", other),
    };
    assert!(ui.invalid_indicators.is_empty());
    assert_eq!(ui.region_label, "Madhya Pradesh");

    let mut challenge = OtpChallenge::new(&first_name, &phone_number);
    assert!(challenge.prompt().contains("Dear John,"));
    assert!(challenge.prompt().contains("(123)-130-7890"));

    let code = challenge.code().to_string();
    let outcome = challenge.check(&code).unwrap();
    challenge.redirect(outcome, &mut ui);

    assert_eq!(ui.redirects, vec![SUCCESS_URL.to_string()]);
}

#[test]
fn wrong_codes_past_the_limit_reach_the_lockout_destination() {
    let mut ui = FakeUi::default();
    let mut form = filled_form(&mut ui);

    let outcome = form.submit(&mut ui);
    assert!(matches!(outcome, SubmitOutcome::Submitted { .. }));

    let mut challenge = OtpChallenge::new("John Doe", form.store().phone.as_str());
    for _ in 0..4 {
        challenge.record_attempt();
    }

    let wrong = if challenge.code() == 1000 { "1001" } else { "1000" };
    let outcome = challenge.check(wrong).unwrap();
    assert_eq!(outcome, CheckOutcome::LockedOut);
    challenge.redirect(outcome, &mut ui);

    assert_eq!(ui.redirects, vec![LOCKOUT_URL.to_string()]);
}

#[test]
fn retrying_redraws_the_code_and_keeps_the_challenge_open() {
    let mut challenge = OtpChallenge::new("Jane Doe", "(650)-123");

    let wrong = if challenge.code() == 1000 { "1001" } else { "1000" };
    let outcome = challenge.check(wrong).unwrap();
    assert_eq!(outcome, CheckOutcome::Retrying);
    assert_eq!(outcome.destination(), None);

    // Still open: the fresh code is accepted.
    let code = challenge.code().to_string();
    assert_eq!(challenge.check(&code).unwrap(), CheckOutcome::Accepted);
}

#[test]
fn invalid_phone_region_blocks_submission() {
    let mut ui = FakeUi::default();
    let mut form = RegistrationForm::new().unwrap();
    form.field_edited(FieldId::Username, "John Doe", &mut ui);
    form.field_edited(FieldId::Email, "john@example.com", &mut ui);
    form.field_edited(FieldId::Phone, "1239997890", &mut ui);

    assert_eq!(ui.region_label, "invalid number");
    match form.submit(&mut ui) {
        SubmitOutcome::Rejected(states) => {
            let phone = states.iter().find(|s| s.field == FieldId::Phone).unwrap();
            assert_eq!(phone.message(), "Number is invalid");
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}
