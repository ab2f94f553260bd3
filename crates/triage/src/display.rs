//! Presentation of statuses and measured values.
//!
//! Pure lookup and formatting. Thresholds live in [`crate::status`], never here.

use crate::lab::RefRange;
use crate::status::Status;
use serde::Serialize;

/// Colours and short label for a status pill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub text_color: &'static str,
    pub label: &'static str,
}

// Palette shared with the mobile screens.
const SUCCESS: &str = "#10B981";
const SUCCESS_BG: &str = "#D1FAE5";
const SUCCESS_BORDER: &str = "#6EE7B7";
const WARNING: &str = "#F59E0B";
const WARNING_BG: &str = "#FEF3C7";
const WARNING_BORDER: &str = "#FCD34D";
const DANGER: &str = "#EF4444";
const DANGER_BG: &str = "#FEE2E2";
const DANGER_BORDER: &str = "#FCA5A5";
const DANGER_DARK: &str = "#B91C1C";
const GRAY_100: &str = "#F3F4F6";
const GRAY_300: &str = "#D1D5DB";
const GRAY_600: &str = "#4B5563";

/// Presentation for a status.
///
/// `Unknown` gets a neutral "review" pill rather than no pill at all.
pub fn presentation(status: Status) -> Presentation {
    match status {
        Status::Normal => Presentation {
            background_color: SUCCESS_BG,
            border_color: SUCCESS_BORDER,
            text_color: SUCCESS,
            label: "Normal",
        },
        Status::Elevated => Presentation {
            background_color: WARNING_BG,
            border_color: WARNING_BORDER,
            text_color: WARNING,
            label: "Elevado",
        },
        Status::Low => Presentation {
            background_color: DANGER_BG,
            border_color: DANGER_BORDER,
            text_color: DANGER,
            label: "Bajo",
        },
        Status::Critical => Presentation {
            background_color: DANGER_BG,
            border_color: DANGER,
            text_color: DANGER_DARK,
            label: "Crítico",
        },
        Status::Unknown => Presentation {
            background_color: GRAY_100,
            border_color: GRAY_300,
            text_color: GRAY_600,
            label: "Revisar",
        },
    }
}

/// Short user-facing label for a status.
pub fn short_label(status: Status) -> &'static str {
    presentation(status).label
}

/// Format a measured value with its unit, e.g. `245 mg/dL`.
pub fn format_value(value: Option<f64>, unit: Option<&str>) -> Option<String> {
    let value = value?;
    Some(with_unit(value.to_string(), unit))
}

/// Format a reference range for display.
///
/// - both bounds: `12-15.5 g/dL`
/// - only an upper bound: `<200 mg/dL`
/// - only a lower bound: `>40 mg/dL`
/// - no bounds: `None`
pub fn format_range(range: Option<&RefRange>, unit: Option<&str>) -> Option<String> {
    let range = range?;
    let text = match (range.min, range.max) {
        (Some(min), Some(max)) => format!("{min}-{max}"),
        (None, Some(max)) => format!("<{max}"),
        (Some(min), None) => format!(">{min}"),
        (None, None) => return None,
    };
    Some(with_unit(text, unit))
}

fn with_unit(text: String, unit: Option<&str>) -> String {
    match unit.map(str::trim).filter(|u| !u.is_empty()) {
        Some(unit) => format!("{text} {unit}"),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_presentation() {
        for status in Status::ALL {
            let p = presentation(status);
            assert!(!p.label.is_empty(), "{status} has no label");
            assert!(p.background_color.starts_with('#'));
            assert!(p.border_color.starts_with('#'));
            assert!(p.text_color.starts_with('#'));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(short_label(Status::Normal), "Normal");
        assert_eq!(short_label(Status::Elevated), "Elevado");
        assert_eq!(short_label(Status::Low), "Bajo");
        assert_eq!(short_label(Status::Critical), "Crítico");
        assert_eq!(short_label(Status::Unknown), "Revisar");
    }

    #[test]
    fn unknown_is_neutral() {
        let p = presentation(Status::Unknown);
        assert_eq!(p.background_color, GRAY_100);
        assert_ne!(p, presentation(Status::Normal));
    }

    #[test]
    fn formats_values() {
        assert_eq!(
            format_value(Some(245.0), Some("mg/dL")).as_deref(),
            Some("245 mg/dL")
        );
        assert_eq!(format_value(Some(12.5), None).as_deref(), Some("12.5"));
        assert_eq!(format_value(Some(8.2), Some("  ")).as_deref(), Some("8.2"));
        assert_eq!(format_value(None, Some("mg/dL")), None);
    }

    #[test]
    fn formats_ranges() {
        let both = RefRange::new(Some(12.0), Some(15.5));
        assert_eq!(
            format_range(Some(&both), Some("g/dL")).as_deref(),
            Some("12-15.5 g/dL")
        );

        let upper = RefRange::new(None, Some(200.0));
        assert_eq!(
            format_range(Some(&upper), Some("mg/dL")).as_deref(),
            Some("<200 mg/dL")
        );

        let lower = RefRange::new(Some(40.0), None);
        assert_eq!(format_range(Some(&lower), None).as_deref(), Some(">40"));

        assert_eq!(format_range(Some(&RefRange::default()), Some("mg/dL")), None);
        assert_eq!(format_range(None, Some("mg/dL")), None);
    }
}
