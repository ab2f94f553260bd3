//! Row-per-item triage report for the validation and history views.

use crate::display::{format_range, format_value, presentation, Presentation};
use crate::lab::LabItem;
use crate::status::{classify, Status};
use serde::Serialize;

/// One displayable lab row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TriageRow {
    pub name: String,
    pub status: Status,
    pub value_display: Option<String>,
    pub range_display: Option<String>,
    pub presentation: Presentation,
}

/// Overall state of an analysis, as listed in the history view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisState {
    /// Nothing could be classified yet.
    Pending,
    /// Classified, nothing out of range.
    Completed,
    /// At least one value is out of range.
    Abnormal,
}

impl AnalysisState {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisState::Pending => "pending",
            AnalysisState::Completed => "completed",
            AnalysisState::Abnormal => "abnormal",
        }
    }
}

/// Per-status counts over a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TriageSummary {
    pub total: usize,
    pub normal: usize,
    pub elevated: usize,
    pub low: usize,
    pub critical: usize,
    pub unknown: usize,
}

impl TriageSummary {
    fn record(&mut self, status: Status) {
        self.total += 1;
        match status {
            Status::Normal => self.normal += 1,
            Status::Elevated => self.elevated += 1,
            Status::Low => self.low += 1,
            Status::Critical => self.critical += 1,
            Status::Unknown => self.unknown += 1,
        }
    }

    pub fn needs_attention(&self) -> bool {
        self.elevated + self.low + self.critical > 0
    }

    pub fn overall(&self) -> AnalysisState {
        if self.needs_attention() {
            AnalysisState::Abnormal
        } else if self.unknown == self.total {
            AnalysisState::Pending
        } else {
            AnalysisState::Completed
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TriageReport {
    pub rows: Vec<TriageRow>,
    pub summary: TriageSummary,
}

/// Classify and format every item, preserving input order.
pub fn triage_report(items: &[LabItem]) -> TriageReport {
    let mut summary = TriageSummary::default();

    let rows = items
        .iter()
        .map(|item| {
            let status = classify(item);
            summary.record(status);
            TriageRow {
                name: item.name.clone(),
                status,
                value_display: format_value(item.value, item.unit.as_deref()),
                range_display: format_range(item.ref_range.as_ref(), item.unit.as_deref()),
                presentation: presentation(status),
            }
        })
        .collect();

    TriageReport { rows, summary }
}
