//! Phone display masking and region/zone derivation.

use crate::phone::region::{region_for_bucket, REGION_INVALID, REGION_INVALID_SHORT};
use crate::types::Zone;
use tracing::debug;

/// What the mask pass decided about zone visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneUpdate {
    /// Leave whatever zone is currently showing.
    Untouched,
    /// Show exactly this zone, hide the other two.
    Show(Zone),
    /// Hide all three zones.
    HideAll,
}

/// Result of masking one raw phone value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Masked {
    /// The grouped display string to put back into the field.
    pub display: String,
    /// New region label, or `None` to leave the current label alone.
    pub region_label: Option<String>,
    pub zone: ZoneUpdate,
}

/// Mask a raw phone value into its grouped display form and derive the
/// region label / zone signal.
///
/// Digits are truncated at 15 even though the display uses at most 10;
/// both bounds are carried over as-is. With 1 to 3 digits the display is
/// the unterminated `"(zip"`. With no digits the input passes through
/// unchanged.
pub fn mask(raw: &str) -> Masked {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(15).collect();
    let zip = &digits[..digits.len().min(3)];
    let middle = &digits[digits.len().min(3)..digits.len().min(6)];
    let last = &digits[digits.len().min(6)..digits.len().min(10)];

    let masked = if digits.len() > 6 {
        let bucket: u16 = middle.parse().unwrap_or(0);
        match region_for_bucket(bucket) {
            Some(name) => Masked {
                display: format!("({})-{}-{}", zip, middle, last),
                region_label: Some(name.into()),
                zone: ZoneUpdate::Untouched,
            },
            None => Masked {
                display: format!("({})-{}-{}", zip, middle, last),
                region_label: Some(REGION_INVALID.into()),
                zone: ZoneUpdate::HideAll,
            },
        }
    } else if digits.len() > 3 {
        let display = format!("({})-{}", zip, middle);
        let prefix: u16 = zip.parse().unwrap_or(0);
        match zone_for_zip(prefix) {
            Some(zone) => Masked {
                display,
                region_label: None,
                zone: ZoneUpdate::Show(zone),
            },
            None => Masked {
                display,
                region_label: Some(REGION_INVALID_SHORT.into()),
                zone: ZoneUpdate::HideAll,
            },
        }
    } else if !digits.is_empty() {
        Masked {
            display: format!("({}", zip),
            region_label: None,
            zone: ZoneUpdate::Untouched,
        }
    } else {
        Masked {
            display: raw.into(),
            region_label: None,
            zone: ZoneUpdate::Untouched,
        }
    };

    debug!(
        "Masked {} digits -> {:?} (zone {:?})",
        digits.len(),
        masked.display,
        masked.zone
    );

    masked
}

/// Zone for a zip prefix. 800 falls in no zone; that gap is part of the
/// shipped behavior.
fn zone_for_zip(zip: u16) -> Option<Zone> {
    match zip {
        621..=799 => Some(Zone::A),
        801..=920 => Some(Zone::B),
        921..=999 => Some(Zone::C),
        _ => None,
    }
}
