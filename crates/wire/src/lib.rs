//! Boundary adapters for Pocket Doctor backend payloads.
//!
//! The backend and the mobile screens disagree on vocabulary: Spanish keys
//! (`condiciones_medicas`, `alergias`, `nombre`), OCR markers (`H`, `L`), free-text values
//! (`"245 mg/dL"`). This crate translates all of that into the canonical types of the `triage`
//! crate, once, at the edge.
//!
//! This crate focuses on:
//! - wire structs mirroring what the backend actually sends
//! - translation from wire structs into `triage` types
//! - parsing measurement and reference-range text
//!
//! Wire structs are tolerant of unknown keys: backend payloads grow fields the triage rules do
//! not care about. Structurally wrong documents (wrong types, missing required keys) are errors
//! that name the failing path.

pub mod clinic;
pub mod history;
pub mod lab_result;
pub mod measurement;
pub mod profile;

pub use clinic::{parse_clinic_search, parse_clinics, ClinicSearch};
pub use history::{parse_history, AnalysisKind, HistoryEntry};
pub use lab_result::{normalize_signal, parse_lab_result, LabResult};
pub use measurement::{apply_correction, parse_measurement, parse_number, parse_ref_range};
pub use profile::parse_profile;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Errors returned by the `pocket-wire` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`WireError`].
pub type WireResult<T> = Result<T, WireError>;

/// Deserialize `json` into `T`, reporting the path of the first mismatch.
pub(crate) fn from_json<T: DeserializeOwned>(what: &str, json: &str) -> WireResult<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json);

    let parsed = match serde_path_to_error::deserialize::<_, T>(&mut deserializer) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() || path == "." {
                "<root>"
            } else {
                path.as_str()
            };
            return Err(WireError::Translation(format!(
                "{what} schema mismatch at {path}: {source}"
            )));
        }
    };

    deserializer
        .end()
        .map_err(|e| WireError::Translation(format!("{what} has trailing content: {e}")))?;

    Ok(parsed)
}

/// A list the backend sends either as a JSON array or as one delimited string.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TextList {
    Many(Vec<String>),
    One(String),
}

impl TextList {
    /// Trimmed, non-blank entries. Single strings are split on `,` and `;`.
    pub(crate) fn into_entries(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            TextList::Many(items) => items,
            TextList::One(text) => text
                .split(|c: char| c == ',' || c == ';')
                .map(str::to_string)
                .collect(),
        };

        raw.into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Identifiers arrive as numbers from the database and as strings from mapped clients.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum IdWire {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for IdWire {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdWire::Number(n) => write!(f, "{n}"),
            IdWire::Text(s) => f.write_str(s),
        }
    }
}
