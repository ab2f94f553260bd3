//! Clinic directory filtering.

use serde::{Deserialize, Serialize};

/// A clinic as shown in the directory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinic {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub address: String,
    pub specialties: Vec<String>,
}

impl Clinic {
    /// Whether this clinic lists `specialty` (exact match).
    pub fn offers(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s == specialty)
    }

    /// Whether `needle` (already lowercased) appears in the name, full name or address.
    fn matches_text(&self, needle: &str) -> bool {
        [&self.name, &self.full_name, &self.address]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Filter `clinics` by an optional specialty and a free-text query.
///
/// Both filters must pass. A `None` specialty and a blank query each accept every clinic. The
/// query is trimmed and matched case-insensitively as a substring of the name, full name or
/// address. Input order is preserved; no matches gives an empty `Vec`.
pub fn filter_clinics<'a>(
    clinics: &'a [Clinic],
    selected_specialty: Option<&str>,
    query: &str,
) -> Vec<&'a Clinic> {
    let needle = query.trim().to_lowercase();

    clinics
        .iter()
        .filter(|clinic| selected_specialty.map_or(true, |s| clinic.offers(s)))
        .filter(|clinic| needle.is_empty() || clinic.matches_text(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clinic(id: &str, name: &str, address: &str, specialties: &[&str]) -> Clinic {
        Clinic {
            id: id.into(),
            name: name.into(),
            full_name: format!("{name} Centro Médico"),
            address: address.into(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn directory() -> Vec<Clinic> {
        vec![
            clinic("a", "Clínica Abreu", "Av. Independencia, Santo Domingo", &["Cardiología"]),
            clinic("b", "Hospital Bella Vista", "Calle 5, Santiago", &["Nutrición"]),
        ]
    }

    fn ids(found: &[&Clinic]) -> Vec<String> {
        found.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn filters_by_specialty() {
        let clinics = directory();
        assert_eq!(ids(&filter_clinics(&clinics, Some("Cardiología"), "")), ["a"]);
    }

    #[test]
    fn no_specialty_and_empty_query_returns_all_in_order() {
        let clinics = directory();
        let found = filter_clinics(&clinics, None, "");
        assert_eq!(found, clinics.iter().collect::<Vec<_>>());
    }

    #[test]
    fn query_matches_name_full_name_or_address() {
        let clinics = directory();
        assert_eq!(ids(&filter_clinics(&clinics, None, "abreu")), ["a"]);
        assert_eq!(ids(&filter_clinics(&clinics, None, "SANTIAGO")), ["b"]);
        assert_eq!(ids(&filter_clinics(&clinics, None, "centro médico")), ["a", "b"]);
        assert_eq!(ids(&filter_clinics(&clinics, None, "  bella ")), ["b"]);
    }

    #[test]
    fn filters_combine_with_and() {
        let clinics = directory();
        assert!(filter_clinics(&clinics, Some("Cardiología"), "santiago").is_empty());
        assert_eq!(
            ids(&filter_clinics(&clinics, Some("Nutrición"), "santiago")),
            ["b"]
        );
    }

    #[test]
    fn no_matches_is_empty_not_absent() {
        let clinics = directory();
        assert_eq!(filter_clinics(&clinics, Some("Alergología"), ""), Vec::<&Clinic>::new());
        assert!(filter_clinics(&[], None, "").is_empty());
    }

    #[test]
    fn specialty_match_is_exact() {
        let clinics = directory();
        assert!(filter_clinics(&clinics, Some("cardiología"), "").is_empty());
    }
}
