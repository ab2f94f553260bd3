//! Stored analysis history rows.
//!
//! History rows carry a coarse `estado` string rather than per-item flags. Only the values the
//! backend is known to write are mapped; anything else is [`Status::Unknown`] so an unexpected
//! code is shown for review instead of as a normal result.

use crate::{from_json, IdWire, WireResult};
use chrono::NaiveDate;
use serde::Deserialize;
use triage::Status;

const DEFAULT_TITLE: &str = "Análisis";
const DEFAULT_SUMMARY: &str = "Sin resumen disponible";

/// Kind of analysis, used to pick the list icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisKind {
    Blood,
    Imaging,
    Cardiac,
    Other,
}

impl AnalysisKind {
    fn from_wire(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "blood" => AnalysisKind::Blood,
            "imaging" => AnalysisKind::Imaging,
            "cardiac" => AnalysisKind::Cardiac,
            _ => AnalysisKind::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisKind::Blood => "blood",
            AnalysisKind::Imaging => "imaging",
            AnalysisKind::Cardiac => "cardiac",
            AnalysisKind::Other => "other",
        }
    }
}

/// One row of the analysis history list.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub title: String,
    /// Date part of `created_at`; `None` when missing or unreadable.
    pub date: Option<NaiveDate>,
    pub kind: AnalysisKind,
    pub status: Status,
    pub summary: String,
    /// Whether the row carries the full analysis payload for a detail view.
    pub has_details: bool,
}

/// Parse a JSON array of history rows.
///
/// # Errors
///
/// Returns [`crate::WireError::Translation`] if the document is not an array of objects with
/// an `id`.
pub fn parse_history(json: &str) -> WireResult<Vec<HistoryEntry>> {
    let rows: Vec<HistoryWire> = from_json("analysis history", json)?;
    Ok(rows.into_iter().map(HistoryWire::into_entry).collect())
}

/// Status for a history `estado` code.
///
/// `alert`/`alerta` is elevated, `ok`/`normal` is normal, canonical status names map to
/// themselves. Missing or other codes are unknown.
pub fn history_status(estado: Option<&str>) -> Status {
    let Some(estado) = estado else {
        return Status::Unknown;
    };

    match estado.trim().to_lowercase().as_str() {
        "alert" | "alerta" => Status::Elevated,
        "ok" => Status::Normal,
        other => Status::from_canonical(other).unwrap_or(Status::Unknown),
    }
}

#[derive(Clone, Debug, Deserialize)]
struct HistoryWire {
    id: IdWire,

    #[serde(default)]
    titulo: Option<String>,

    #[serde(default)]
    created_at: Option<String>,

    #[serde(default)]
    tipo: Option<String>,

    #[serde(default)]
    estado: Option<String>,

    #[serde(default)]
    resumen: Option<String>,

    #[serde(default)]
    datos_completos: Option<serde_json::Value>,
}

impl HistoryWire {
    fn into_entry(self) -> HistoryEntry {
        let id = self.id.to_string();
        let date = self.created_at.as_deref().and_then(|raw| {
            let day = raw.split('T').next().unwrap_or(raw).trim();
            match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::warn!(%id, created_at = raw, "unreadable history date: {e}");
                    None
                }
            }
        });

        HistoryEntry {
            title: non_blank(self.titulo).unwrap_or_else(|| DEFAULT_TITLE.into()),
            date,
            kind: self
                .tipo
                .as_deref()
                .map_or(AnalysisKind::Other, AnalysisKind::from_wire),
            status: history_status(self.estado.as_deref()),
            summary: non_blank(self.resumen).unwrap_or_else(|| DEFAULT_SUMMARY.into()),
            has_details: self
                .datos_completos
                .as_ref()
                .is_some_and(|v| !v.is_null()),
            id,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
