//! Measurement and reference-range text.
//!
//! Lab reports and user edits carry values as text: `245 mg/dL`, `47,4 %`, `12.0-15.5 g/dL`,
//! `<200 mg/dL`, `4 a 10`. Decimal commas are accepted everywhere.

use crate::{WireError, WireResult};
use triage::{LabItem, RefRange};

/// Parse a bare number, accepting a decimal comma. Non-finite results are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let n: f64 = text.trim().replace(',', ".").parse().ok()?;
    n.is_finite().then_some(n)
}

/// Split `text` into its leading number and the unit that follows.
///
/// `"245 mg/dL"` gives `(Some(245.0), Some("mg/dL"))`. Text that does not start with a number
/// gives `(None, None)`.
pub fn parse_measurement(text: &str) -> (Option<f64>, Option<String>) {
    match split_leading_number(text) {
        Some((value, rest)) => (Some(value), unit_from(rest)),
        None => (None, None),
    }
}

/// Parse reference-range text into a range and an optional unit.
///
/// Accepts `low-high` (hyphen, en dash or em dash), `low a high`, `low to high`, and one-sided
/// `<x`, `<=x`, `≤x`, `>x`, `>=x`, `≥x`.
pub fn parse_ref_range(text: &str) -> Option<(RefRange, Option<String>)> {
    let text = text.trim();

    const ONE_SIDED: [(&str, bool); 6] = [
        ("<=", true),
        ("≤", true),
        ("<", true),
        (">=", false),
        ("≥", false),
        (">", false),
    ];

    for (prefix, is_upper) in ONE_SIDED {
        if let Some(rest) = text.strip_prefix(prefix) {
            let (bound, rest) = split_leading_number(rest)?;
            let range = if is_upper {
                RefRange::new(None, Some(bound))
            } else {
                RefRange::new(Some(bound), None)
            };
            return Some((range, unit_from(rest)));
        }
    }

    let (low, rest) = split_leading_number(text)?;
    let rest = strip_range_separator(rest)?;
    let (high, rest) = split_leading_number(rest)?;

    Some((RefRange::new(Some(low), Some(high)), unit_from(rest)))
}

/// Apply a user correction to a lab item.
///
/// The input replaces the value (and the unit, if it carries one). The backend flag is dropped
/// so the corrected value is classified against its reference range again.
///
/// # Errors
///
/// Returns [`WireError::InvalidInput`] if the input is blank or does not start with a number.
pub fn apply_correction(item: &LabItem, input: &str) -> WireResult<LabItem> {
    let input = input.trim();
    if input.is_empty() {
        return Err(WireError::InvalidInput(
            "corrected value cannot be empty".into(),
        ));
    }

    let (value, unit) = parse_measurement(input);
    let Some(value) = value else {
        return Err(WireError::InvalidInput(format!(
            "could not read a number from {input:?}"
        )));
    };

    tracing::debug!(name = %item.name, value, "applying corrected lab value");

    Ok(LabItem {
        value: Some(value),
        unit: unit.or_else(|| item.unit.clone()),
        flag: None,
        ..item.clone()
    })
}

fn split_leading_number(text: &str) -> Option<(f64, &str)> {
    let text = text.trim_start();

    let mut end = 0;
    for (i, c) in text.char_indices() {
        let is_part = c.is_ascii_digit()
            || (i == 0 && (c == '-' || c == '+'))
            || (i > 0 && (c == '.' || c == ','));
        if !is_part {
            break;
        }
        end = i + c.len_utf8();
    }

    if end == 0 {
        return None;
    }

    let number = parse_number(&text[..end])?;
    Some((number, &text[end..]))
}

fn strip_range_separator(text: &str) -> Option<&str> {
    let text = text.trim_start();

    for dash in ["-", "–", "—"] {
        if let Some(rest) = text.strip_prefix(dash) {
            return Some(rest);
        }
    }

    for word in ["a", "to"] {
        if let Some(rest) = text.strip_prefix(word) {
            if rest.starts_with(char::is_whitespace) {
                return Some(rest);
            }
        }
    }

    None
}

fn unit_from(rest: &str) -> Option<String> {
    let unit = rest.trim();
    (!unit.is_empty()).then(|| unit.to_string())
}
