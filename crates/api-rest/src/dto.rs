//! Request/response bodies for the REST surface.
//!
//! Engine types are converted here so the OpenAPI schema stays independent of the engine's
//! internal representation.

use serde::Serialize;
use triage::{Clinic, TriageReport, TriageRow, TriageSummary};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// One classified lab row with its display colours.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct TriageRowRes {
    pub name: String,
    /// One of `normal`, `elevated`, `low`, `critical`, `unknown`.
    pub status: String,
    pub value_display: Option<String>,
    pub range_display: Option<String>,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
    pub label: String,
}

#[derive(Clone, Copy, Debug, Serialize, ToSchema)]
pub struct TriageSummaryRes {
    pub total: usize,
    pub normal: usize,
    pub elevated: usize,
    pub low: usize,
    pub critical: usize,
    pub unknown: usize,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct TriageReportRes {
    pub rows: Vec<TriageRowRes>,
    pub summary: TriageSummaryRes,
    /// `pending`, `completed` or `abnormal`.
    pub overall: String,
    pub needs_attention: bool,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct RecommendationsRes {
    pub specialties: Vec<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ClinicRes {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub address: String,
    pub specialties: Vec<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ClinicSearchRes {
    pub clinics: Vec<ClinicRes>,
}

impl From<&TriageRow> for TriageRowRes {
    fn from(row: &TriageRow) -> Self {
        Self {
            name: row.name.clone(),
            status: row.status.as_str().to_string(),
            value_display: row.value_display.clone(),
            range_display: row.range_display.clone(),
            background_color: row.presentation.background_color.to_string(),
            border_color: row.presentation.border_color.to_string(),
            text_color: row.presentation.text_color.to_string(),
            label: row.presentation.label.to_string(),
        }
    }
}

impl From<TriageSummary> for TriageSummaryRes {
    fn from(summary: TriageSummary) -> Self {
        Self {
            total: summary.total,
            normal: summary.normal,
            elevated: summary.elevated,
            low: summary.low,
            critical: summary.critical,
            unknown: summary.unknown,
        }
    }
}

impl From<&TriageReport> for TriageReportRes {
    fn from(report: &TriageReport) -> Self {
        Self {
            rows: report.rows.iter().map(TriageRowRes::from).collect(),
            summary: report.summary.into(),
            overall: report.summary.overall().as_str().to_string(),
            needs_attention: report.summary.needs_attention(),
        }
    }
}

impl From<&Clinic> for ClinicRes {
    fn from(clinic: &Clinic) -> Self {
        Self {
            id: clinic.id.clone(),
            name: clinic.name.clone(),
            full_name: clinic.full_name.clone(),
            address: clinic.address.clone(),
            specialties: clinic.specialties.clone(),
        }
    }
}
