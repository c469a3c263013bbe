//! Static region table keyed by the middle phone-number bucket.
//!
//! Entry names are carried over verbatim from the shipped table, spelling
//! included. The two sentinels differ only in casing but are produced by
//! different masker branches and must stay distinct: the phone validation
//! rule matches the lowercase one exactly.

/// Sentinel written when a long number's middle bucket is unmapped.
pub const REGION_INVALID: &str = "invalid number";

/// Sentinel written when a short number's zip falls outside every zone.
pub const REGION_INVALID_SHORT: &str = "Invalid Number";

/// Middle-bucket to region-name mapping, ordered by bucket.
pub const REGION_TABLE: &[(u16, &str)] = &[
    (121, "Arunachal Pradesh"),
    (122, "Assam"),
    (123, "Andhra Pradesh"),
    (124, "Gujarat"),
    (125, "Goa"),
    (126, "Bihar"),
    (127, "West Bangal"),
    (128, "Karnataka"),
    (129, "Kerala"),
    (130, "Madhya Pradesh"),
    (131, "Maharashtra"),
    (132, "Manipur"),
    (133, "Meghalaya"),
    (134, "Mizoram"),
    (135, "Nagaland"),
    (136, "Orissa"),
    (137, "Punjab"),
    (138, "Rajasthan"),
    (139, "Sikkim"),
    (140, "Tamil Nadu"),
    (141, "Tripura"),
    (142, "Uttaranchal"),
    (143, "Uttar Pradesh"),
    (144, "Hariyana"),
    (145, "Himachal Pradesh"),
    (146, "Chhattisgadh"),
    (147, "Andaman and Nicobar"),
    (148, "Dadra div daman and Nagar haveli"),
    (149, "Delhi"),
    (150, "Pondecherry"),
    (151, "Chandigadh"),
    (152, "jammu"),
    (153, "Lakshadweep"),
    (154, "ladakh"),
    (155, "Jharkhand"),
    (156, "Telangana"),
];

/// Look up the region name for a middle bucket.
pub fn region_for_bucket(bucket: u16) -> Option<&'static str> {
    REGION_TABLE
        .iter()
        .find(|(b, _)| *b == bucket)
        .map(|(_, name)| *name)
}
