//! Lab value status classification.
//!
//! A backend flag, when present, decides the status on its own. Only items without a flag are
//! compared against their reference range. Anything that cannot be decided is
//! [`Status::Unknown`]; classification never fails and never falls back to `Normal`.

use crate::constants::{FLAG_HIGH, FLAG_LOW, FLAG_NORMAL};
use crate::lab::{LabItem, RefRange};
use serde::{Deserialize, Serialize};

/// Status of a single lab value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Normal,
    Elevated,
    Low,
    Critical,
    Unknown,
}

impl Status {
    /// Every status, in display order.
    pub const ALL: [Status; 5] = [
        Status::Normal,
        Status::Elevated,
        Status::Low,
        Status::Critical,
        Status::Unknown,
    ];

    /// Canonical lowercase name, as serialised.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Elevated => "elevated",
            Status::Low => "low",
            Status::Critical => "critical",
            Status::Unknown => "unknown",
        }
    }

    /// Parse a canonical name (case-insensitive, surrounding whitespace ignored).
    pub fn from_canonical(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Status::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Whether the value is outside its range and should be looked at.
    pub fn needs_attention(self) -> bool {
        matches!(self, Status::Elevated | Status::Low | Status::Critical)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a backend flag.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Unrecognised flags are
/// [`Status::Unknown`].
pub fn classify_flag(flag: &str) -> Status {
    let flag = flag.trim().to_lowercase();
    match flag.as_str() {
        FLAG_HIGH => Status::Elevated,
        FLAG_LOW => Status::Low,
        FLAG_NORMAL => Status::Normal,
        _ => Status::Unknown,
    }
}

/// Classify a value against a reference range.
///
/// Needs the value and both bounds; otherwise the result is [`Status::Unknown`]. Bounds are
/// inclusive.
pub fn classify_range(value: Option<f64>, range: Option<&RefRange>) -> Status {
    let (Some(value), Some((min, max))) = (value, range.and_then(RefRange::bounds)) else {
        return Status::Unknown;
    };

    if value.is_nan() || min.is_nan() || max.is_nan() {
        return Status::Unknown;
    }

    if value < min {
        Status::Low
    } else if value > max {
        Status::Elevated
    } else {
        Status::Normal
    }
}

/// Classify a lab item: its flag if it has one, else its range.
pub fn classify(item: &LabItem) -> Status {
    match item.flag.as_deref() {
        Some(flag) => classify_flag(flag),
        None => classify_range(item.value, item.ref_range.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranged(value: Option<f64>, min: Option<f64>, max: Option<f64>) -> LabItem {
        LabItem {
            value,
            ref_range: Some(RefRange::new(min, max)),
            ..LabItem::named("Glucosa")
        }
    }

    #[test]
    fn flag_matching_ignores_case_and_whitespace() {
        for flag in ["alto", "ALTO", " Alto ", "aLtO\n"] {
            assert_eq!(classify_flag(flag), Status::Elevated, "flag {flag:?}");
        }
        assert_eq!(classify_flag("BAJO"), Status::Low);
        assert_eq!(classify_flag(" normal"), Status::Normal);
    }

    #[test]
    fn unrecognised_flags_are_unknown() {
        for flag in ["", "   ", "H", "high", "crítico", "alert", "altísimo"] {
            assert_eq!(classify_flag(flag), Status::Unknown, "flag {flag:?}");
        }
    }

    #[test]
    fn range_comparison() {
        let range = RefRange::new(Some(10.0), Some(20.0));
        assert_eq!(classify_range(Some(25.0), Some(&range)), Status::Elevated);
        assert_eq!(classify_range(Some(5.0), Some(&range)), Status::Low);
        assert_eq!(classify_range(Some(15.0), Some(&range)), Status::Normal);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = RefRange::new(Some(10.0), Some(20.0));
        assert_eq!(classify_range(Some(10.0), Some(&range)), Status::Normal);
        assert_eq!(classify_range(Some(20.0), Some(&range)), Status::Normal);
    }

    #[test]
    fn insufficient_range_data_is_unknown() {
        assert_eq!(classify_range(Some(25.0), None), Status::Unknown);
        assert_eq!(classify_range(None, None), Status::Unknown);
        assert_eq!(
            classify(&ranged(None, Some(10.0), Some(20.0))),
            Status::Unknown
        );
        assert_eq!(
            classify(&ranged(Some(25.0), None, Some(20.0))),
            Status::Unknown
        );
        assert_eq!(
            classify(&ranged(Some(25.0), Some(10.0), None)),
            Status::Unknown
        );
        assert_eq!(
            classify(&ranged(Some(f64::NAN), Some(10.0), Some(20.0))),
            Status::Unknown
        );
    }

    #[test]
    fn no_flag_and_no_range_is_unknown_for_any_value() {
        for value in [None, Some(0.0), Some(-3.5), Some(1e9)] {
            let item = LabItem {
                value,
                ..LabItem::named("Hemoglobina")
            };
            assert_eq!(classify(&item), Status::Unknown);
        }
    }

    #[test]
    fn flag_overrides_range() {
        let item = ranged(Some(15.0), Some(10.0), Some(20.0)).with_flag("alto");
        assert_eq!(classify(&item), Status::Elevated);

        let item = ranged(Some(25.0), Some(10.0), Some(20.0)).with_flag("desconocido");
        assert_eq!(classify(&item), Status::Unknown);
    }

    #[test]
    fn classification_is_repeatable() {
        let item = ranged(Some(25.0), Some(10.0), Some(20.0));
        assert_eq!(classify(&item), classify(&item));

        let flagged = LabItem::named("Colesterol").with_flag(" Bajo ");
        assert_eq!(classify(&flagged), classify(&flagged));
    }

    #[test]
    fn canonical_names_round_trip() {
        for status in Status::ALL {
            assert_eq!(Status::from_canonical(status.as_str()), Some(status));
            assert_eq!(status.to_string(), status.as_str());
        }
        assert_eq!(Status::from_canonical(" Elevated "), Some(Status::Elevated));
        assert_eq!(Status::from_canonical("alto"), None);
    }

    #[test]
    fn serialises_lowercase() {
        let json = serde_json::to_string(&Status::Critical).expect("serialise status");
        assert_eq!(json, "\"critical\"");
    }
}
