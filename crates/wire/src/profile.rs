//! Patient profile payloads.
//!
//! Profiles reach the app from two places with different vocabularies: the backend history
//! table (`condiciones_previas`, `alergias`, stored as comma-separated text) and locally built
//! profiles (`conditions`, `allergies`, `medicalHistory` as arrays). Both are folded into one
//! [`PatientProfile`] here.

use crate::lab_result::LabItemWire;
use crate::{from_json, TextList, WireResult};
use serde::Deserialize;
use triage::PatientProfile;

/// Parse a profile document in any of the supported key variants.
///
/// Keys not listed below are ignored (name, age, blood type and so on).
///
/// | canonical     | accepted aliases                                |
/// |---------------|-------------------------------------------------|
/// | `conditions`  | `condiciones_medicas`, `condiciones_previas`    |
/// | `allergies`   | `alergias`                                      |
/// | `labHistory`  | `lab_history`, `medicalHistory`, `historial`    |
///
/// # Errors
///
/// Returns [`crate::WireError::Translation`] if the document is not a JSON object of the
/// expected shape, or if the same field is given under two aliases.
pub fn parse_profile(json: &str) -> WireResult<PatientProfile> {
    let wire: ProfileWire = from_json("patient profile", json)?;
    Ok(wire.into_profile())
}

#[derive(Clone, Debug, Default, Deserialize)]
struct ProfileWire {
    #[serde(
        default,
        alias = "condiciones_medicas",
        alias = "condiciones_previas"
    )]
    conditions: Option<TextList>,

    #[serde(default, alias = "alergias")]
    allergies: Option<TextList>,

    #[serde(
        default,
        rename = "labHistory",
        alias = "lab_history",
        alias = "medicalHistory",
        alias = "historial"
    )]
    lab_history: Option<Vec<LabItemWire>>,
}

impl ProfileWire {
    fn into_profile(self) -> PatientProfile {
        PatientProfile {
            conditions: self.conditions.map(TextList::into_entries).unwrap_or_default(),
            allergies: self.allergies.map(TextList::into_entries).unwrap_or_default(),
            lab_history: self
                .lab_history
                .unwrap_or_default()
                .into_iter()
                .map(LabItemWire::into_lab_item)
                .collect(),
        }
    }
}
