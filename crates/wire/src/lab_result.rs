//! Backend OCR lab-result payloads.
//!
//! The OCR endpoint returns:
//!
//! ```json
//! { "text": "...", "items": [ { "name_raw": "Colesterol total", "name": "COLESTEROL TOTAL",
//!   "value": 245.0, "unit": "mg/dL", "ref_range": { "min": 0, "max": 200 },
//!   "flag": "H", "status": "alto", "line": "..." } ], "pages_processed": 1 }
//! ```
//!
//! `flag` is the marker printed on the lab report (`H`/`L`, sometimes arrows), `status` is the
//! backend's own range comparison (`alto`/`bajo`/`normal`). Both are authoritative signals; the
//! printed marker wins when both are present. Signals are normalised to the `triage` flag
//! vocabulary so the classifier only ever sees one set of words. The raw OCR `text` and each
//! item's `line` are not kept.

use crate::measurement::{parse_measurement, parse_ref_range};
use crate::{from_json, WireResult};
use serde::Deserialize;
use triage::constants::{FLAG_HIGH, FLAG_LOW, FLAG_NORMAL};
use triage::{LabItem, RefRange};

/// A parsed OCR response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabResult {
    pub items: Vec<LabItem>,
    pub pages_processed: Option<u32>,
}

/// Parse an OCR lab-result document.
///
/// # Errors
///
/// Returns [`crate::WireError::Translation`] if the document is not valid JSON, lacks `items`,
/// or has a field of the wrong type. Unreadable item values are not errors; they become `None`.
pub fn parse_lab_result(json: &str) -> WireResult<LabResult> {
    let wire: LabResultWire = from_json("lab result", json)?;

    Ok(LabResult {
        items: wire.items.into_iter().map(LabItemWire::into_lab_item).collect(),
        pages_processed: wire.pages_processed,
    })
}

/// Map a backend status or marker onto the classifier's flag words.
///
/// Blank input is no signal at all. `critical`/`crítico` has no flag word of its own and is read
/// as `alto`, so a critical result still counts as raised. Unrecognised signals are kept verbatim
/// so they still reach the classifier (and classify as unknown) instead of being silently dropped.
pub fn normalize_signal(signal: &str) -> Option<String> {
    let trimmed = signal.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = match trimmed.to_lowercase().as_str() {
        "h" | "↑" | "high" | "elevated" | "critical" | "crítico" | "critico" | FLAG_HIGH => {
            FLAG_HIGH.to_string()
        }
        "l" | "↓" | "low" | FLAG_LOW => FLAG_LOW.to_string(),
        FLAG_NORMAL => FLAG_NORMAL.to_string(),
        _ => trimmed.to_string(),
    };
    Some(normalized)
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize)]
struct LabResultWire {
    items: Vec<LabItemWire>,

    #[serde(default)]
    pages_processed: Option<u32>,
}

/// One lab item as sent by the OCR backend or stored in a profile.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct LabItemWire {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    name_raw: Option<String>,

    #[serde(default)]
    value: Option<ValueWire>,

    #[serde(default)]
    unit: Option<String>,

    #[serde(default)]
    ref_range: Option<RefRangeWire>,

    /// Profile entries carry the range as display text instead of `ref_range`.
    #[serde(default, rename = "normalRange", alias = "normal_range")]
    normal_range: Option<String>,

    #[serde(default)]
    flag: Option<String>,

    #[serde(default)]
    status: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum ValueWire {
    Number(f64),
    Text(String),
}

#[derive(Clone, Copy, Debug, Deserialize)]
struct RefRangeWire {
    #[serde(default)]
    min: Option<f64>,

    #[serde(default)]
    max: Option<f64>,
}

impl LabItemWire {
    pub(crate) fn into_lab_item(self) -> LabItem {
        let name = pick_name(self.name, self.name_raw);
        let mut unit = self.unit.filter(|u| !u.trim().is_empty());

        let value = match self.value {
            Some(ValueWire::Number(n)) if n.is_finite() => Some(n),
            Some(ValueWire::Number(n)) => {
                tracing::warn!(%name, value = n, "ignoring non-finite lab value");
                None
            }
            Some(ValueWire::Text(text)) => {
                let (value, text_unit) = parse_measurement(&text);
                if value.is_none() && !text.trim().is_empty() {
                    tracing::warn!(%name, %text, "could not read lab value");
                }
                unit = unit.or(text_unit);
                value
            }
            None => None,
        };

        let ref_range = match (self.ref_range, self.normal_range) {
            (Some(range), _) => Some(RefRange::new(range.min, range.max)),
            (None, Some(text)) => match parse_ref_range(&text) {
                Some((range, range_unit)) => {
                    unit = unit.or(range_unit);
                    Some(range)
                }
                None => {
                    tracing::warn!(%name, %text, "could not read reference range");
                    None
                }
            },
            (None, None) => None,
        };

        let flag = self
            .flag
            .as_deref()
            .and_then(normalize_signal)
            .or_else(|| self.status.as_deref().and_then(normalize_signal));

        LabItem {
            name,
            value,
            unit,
            ref_range,
            flag,
        }
    }
}

fn pick_name(name: Option<String>, name_raw: Option<String>) -> String {
    [name, name_raw]
        .into_iter()
        .flatten()
        .map(|n| n.trim().to_string())
        .find(|n| !n.is_empty())
        .unwrap_or_default()
}
