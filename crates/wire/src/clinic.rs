//! Clinic directory payloads.
//!
//! The backend lists medical centres (`centros`) with Spanish keys and their specialists nested
//! underneath; the app works with flat [`Clinic`] values. Already-flat clinics are accepted too,
//! so a directory cached by a client can be sent back as-is.

use crate::{from_json, IdWire, TextList, WireResult};
use serde::Deserialize;
use triage::Clinic;

/// Parse a JSON array of clinics or backend centres (they may be mixed).
///
/// # Errors
///
/// Returns [`crate::WireError::Translation`] if the document is not an array or an entry
/// matches neither shape.
pub fn parse_clinics(json: &str) -> WireResult<Vec<Clinic>> {
    let entries: Vec<ClinicEntryWire> = from_json("clinic directory", json)?;
    Ok(entries.into_iter().map(ClinicEntryWire::into_clinic).collect())
}

/// A clinic search request: a directory plus the two filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClinicSearch {
    pub clinics: Vec<Clinic>,
    pub specialty: Option<String>,
    pub query: String,
}

/// Parse `{ "clinics": [...], "specialty": "...", "query": "..." }`.
///
/// A blank `specialty` means no specialty filter; a missing `query` is the empty query.
///
/// # Errors
///
/// Returns [`crate::WireError::Translation`] if `clinics` is missing or malformed.
pub fn parse_clinic_search(json: &str) -> WireResult<ClinicSearch> {
    let wire: ClinicSearchWire = from_json("clinic search", json)?;

    Ok(ClinicSearch {
        clinics: wire
            .clinics
            .into_iter()
            .map(ClinicEntryWire::into_clinic)
            .collect(),
        specialty: wire.specialty.filter(|s| !s.trim().is_empty()),
        query: wire.query.unwrap_or_default(),
    })
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize)]
struct ClinicSearchWire {
    clinics: Vec<ClinicEntryWire>,

    #[serde(default, alias = "especialidad", alias = "selectedSpecialty")]
    specialty: Option<String>,

    #[serde(default)]
    query: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum ClinicEntryWire {
    Mapped(ClinicWire),
    Centre(CentreWire),
}

#[derive(Clone, Debug, Deserialize)]
struct ClinicWire {
    id: IdWire,

    name: String,

    #[serde(default, rename = "fullName", alias = "full_name")]
    full_name: Option<String>,

    #[serde(default)]
    address: Option<String>,

    #[serde(default)]
    specialties: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct CentreWire {
    id: IdWire,

    nombre: String,

    #[serde(default)]
    direccion: Option<String>,

    #[serde(default)]
    ciudad: Option<String>,

    #[serde(default)]
    provincia: Option<String>,

    #[serde(default)]
    especialistas: Option<Vec<SpecialistWire>>,
}

#[derive(Clone, Debug, Deserialize)]
struct SpecialistWire {
    #[serde(default)]
    especialidad: Option<TextList>,
}

impl ClinicEntryWire {
    fn into_clinic(self) -> Clinic {
        match self {
            ClinicEntryWire::Mapped(clinic) => clinic.into_clinic(),
            ClinicEntryWire::Centre(centre) => centre.into_clinic(),
        }
    }
}

impl ClinicWire {
    fn into_clinic(self) -> Clinic {
        Clinic {
            id: self.id.to_string(),
            full_name: self.full_name.unwrap_or_else(|| self.name.clone()),
            name: self.name,
            address: self.address.unwrap_or_default(),
            specialties: self.specialties,
        }
    }
}

impl CentreWire {
    fn into_clinic(self) -> Clinic {
        let address = [self.direccion, self.ciudad, self.provincia]
            .into_iter()
            .flatten()
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        let mut specialties: Vec<String> = Vec::new();
        let offered = self
            .especialistas
            .unwrap_or_default()
            .into_iter()
            .filter_map(|specialist| specialist.especialidad)
            .flat_map(TextList::into_entries);
        for specialty in offered {
            if !specialties.contains(&specialty) {
                specialties.push(specialty);
            }
        }

        Clinic {
            id: self.id.to_string(),
            name: self.nombre.clone(),
            full_name: self.nombre,
            address,
            specialties,
        }
    }
}
