//! # Triage
//!
//! Pure rules that turn raw lab values and patient profiles into the things the Pocket Doctor
//! screens display:
//! - a [`Status`] per lab item (from the backend flag, or from its reference range)
//! - a [`Presentation`] (colours and short label) per status
//! - recommended medical specialties for a [`PatientProfile`]
//! - the subset of a clinic directory matching a specialty and a free-text query
//!
//! Every function here is total over its input. Missing data is represented as
//! [`Status::Unknown`] or an empty `Vec`, never as an error, so callers branch on those values
//! instead of handling failures.
//!
//! **No I/O**: parsing backend JSON (with its Spanish/English key variants) belongs in
//! `pocket-wire`; HTTP and CLI surfaces live in `api-rest` and `cli`.

pub mod clinic;
pub mod config;
pub mod constants;
pub mod display;
pub mod lab;
pub mod report;
pub mod specialty;
pub mod status;

pub use clinic::{filter_clinics, Clinic};
pub use config::{ConfigError, TriageConfig};
pub use display::{format_range, format_value, presentation, short_label, Presentation};
pub use lab::{LabItem, PatientProfile, RefRange};
pub use report::{triage_report, AnalysisState, TriageReport, TriageRow, TriageSummary};
pub use specialty::{recommend_specialties, SpecialtyRecommender};
pub use status::{classify, classify_flag, classify_range, Status};
