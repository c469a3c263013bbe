//! Phone input handling: keystroke guard, display masking, region lookup.

mod keyboard;
mod masker;
mod region;

pub use keyboard::{digit_char, is_modifier_key, is_numeric_input, KeyEvent};
pub use masker::{mask, Masked, ZoneUpdate};
pub use region::{region_for_bucket, REGION_INVALID, REGION_INVALID_SHORT, REGION_TABLE};
