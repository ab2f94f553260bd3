//! Constants shared by the triage rules.
//!
//! Flag words and specialty names are the Spanish strings the backend and the screens use, so
//! they are kept verbatim.

/// Backend flag for a value above its reference range.
pub const FLAG_HIGH: &str = "alto";

/// Backend flag for a value below its reference range.
pub const FLAG_LOW: &str = "bajo";

/// Backend flag for a value inside its reference range.
pub const FLAG_NORMAL: &str = "normal";

/// Lab names containing this (lowercased) are treated as cholesterol markers.
pub const CHOLESTEROL_MARKER: &str = "colesterol";

/// Condition labels recognised as hypertension when no configuration overrides them.
pub const DEFAULT_HYPERTENSION_LABELS: &[&str] = &["Hipertensión leve"];

pub const CARDIOLOGY: &str = "Cardiología";
pub const ENDOCRINOLOGY: &str = "Endocrinología";
pub const NUTRITION: &str = "Nutrición";
pub const ALLERGOLOGY: &str = "Alergología";
