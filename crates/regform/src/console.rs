//! Console rendering of the page indicators, standing in for the DOM.

use regform_core::{FieldId, IndicatorSink, IndicatorState, NavigationSink, Zone};
use std::collections::HashMap;
use tracing::info;

/// Requirement checklist labels, one per rule, in rule order.
const USERNAME_REQUIREMENTS: &[&str] = &[
    "At least 3 characters long",
    "Only letters",
    "At least 2 words",
];
const EMAIL_REQUIREMENTS: &[&str] = &["Email is required", "Correct email format"];
const PHONE_REQUIREMENTS: &[&str] = &["Number maps to a region"];

fn requirements_for(field: FieldId) -> &'static [&'static str] {
    match field {
        FieldId::Username => USERNAME_REQUIREMENTS,
        FieldId::Email => EMAIL_REQUIREMENTS,
        FieldId::Phone => PHONE_REQUIREMENTS,
    }
}

/// The rendered page: requirement indicators, zone visibility, region
/// label, and the navigation target.
#[derive(Default)]
pub struct ConsolePage {
    indicators: HashMap<(FieldId, usize), IndicatorState>,
    zone: Option<Zone>,
    region_label: String,
    destination: Option<String>,
}

impl ConsolePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the requirement checklist for one field.
    pub fn render_requirements(&self, field: FieldId) {
        for (index, label) in requirements_for(field).iter().enumerate() {
            let mark = match self.indicators.get(&(field, index)) {
                Some(IndicatorState::Valid) => "ok",
                Some(IndicatorState::Invalid) => "!!",
                None => "  ",
            };
            println!("  [{}] {}", mark, label);
        }
    }

    /// Print the region line for the phone field.
    pub fn render_region(&self) {
        if !self.region_label.is_empty() {
            println!("  region: {}", self.region_label);
        }
        match self.zone {
            Some(zone) => println!("  zone: {:?}", zone),
            None => println!("  zone: none"),
        }
    }

    /// Where the page last navigated to, if anywhere.
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }
}

impl IndicatorSink for ConsolePage {
    fn set_requirement(&mut self, field: FieldId, index: usize, state: IndicatorState) {
        self.indicators.insert((field, index), state);
    }

    fn set_zone(&mut self, zone: Option<Zone>) {
        self.zone = zone;
    }

    fn set_region_label(&mut self, label: &str) {
        self.region_label = label.to_string();
    }
}

impl NavigationSink for ConsolePage {
    fn redirect(&mut self, url: &str) {
        info!("Redirecting to {}", url);
        println!("-> {}", url);
        self.destination = Some(url.to_string());
    }
}
