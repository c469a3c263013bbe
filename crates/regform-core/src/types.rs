//! Shared field, indicator, and sink types.

use serde::Serialize;

/// The three validated form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldId {
    Username,
    Email,
    Phone,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Username => "username",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
        }
    }
}

/// State of a single requirement indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndicatorState {
    Valid,
    Invalid,
}

/// The three mutually exclusive display zones keyed by zip-prefix range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Zone {
    A,
    B,
    C,
}

/// Receives per-rule indicator updates, zone visibility, and the region
/// label display. Implemented by the host UI.
pub trait IndicatorSink {
    /// Mark the requirement indicator `index` of `field` valid or invalid.
    fn set_requirement(&mut self, field: FieldId, index: usize, state: IndicatorState);

    /// Show exactly the given zone; `None` hides all three.
    fn set_zone(&mut self, zone: Option<Zone>);

    /// Update the displayed region label.
    fn set_region_label(&mut self, label: &str);
}

/// Receives redirect requests on challenge acceptance or lockout.
pub trait NavigationSink {
    fn redirect(&mut self, url: &str);
}
