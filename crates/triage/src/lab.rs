//! Canonical input shapes for the triage rules.
//!
//! These are the already-normalised forms. Backend payloads with `condiciones_medicas`,
//! `alergias`, `H`/`L` markers and so on are translated into these types by `pocket-wire`.

use serde::{Deserialize, Serialize};

/// Reference range for a lab value. Either bound may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RefRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RefRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Both bounds, if both are present.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((self.min?, self.max?))
    }
}

/// A single measured analyte.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabItem {
    /// Human-readable analyte name, e.g. `Colesterol`.
    pub name: String,

    /// Measured value; `None` when the value could not be read.
    pub value: Option<f64>,

    pub unit: Option<String>,

    pub ref_range: Option<RefRange>,

    /// Backend-computed flag (`alto`, `bajo`, `normal`). Authoritative when present.
    pub flag: Option<String>,
}

impl LabItem {
    /// Creates an item with only a name; every measured field is absent.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.ref_range = Some(RefRange::new(min, max));
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }
}

/// Patient data the specialty rules look at.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub lab_history: Vec<LabItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_requires_both_ends() {
        assert_eq!(RefRange::new(Some(1.0), Some(2.0)).bounds(), Some((1.0, 2.0)));
        assert_eq!(RefRange::new(None, Some(2.0)).bounds(), None);
        assert_eq!(RefRange::new(Some(1.0), None).bounds(), None);
        assert_eq!(RefRange::default().bounds(), None);
    }

    #[test]
    fn builder_sets_fields() {
        let item = LabItem::named("Creatinina")
            .with_value(0.9)
            .with_unit("mg/dL")
            .with_range(Some(0.6), Some(1.2))
            .with_flag("normal");

        assert_eq!(item.name, "Creatinina");
        assert_eq!(item.value, Some(0.9));
        assert_eq!(item.unit.as_deref(), Some("mg/dL"));
        assert_eq!(item.ref_range, Some(RefRange::new(Some(0.6), Some(1.2))));
        assert_eq!(item.flag.as_deref(), Some("normal"));
    }
}
