//! Command bodies. Each reads its input file and returns the text to print.

use anyhow::{bail, Context};
use pocket_wire::{apply_correction, parse_clinics, parse_history, parse_lab_result, parse_profile};
use std::fs;
use std::path::Path;
use triage::{
    filter_clinics, triage_report, Clinic, SpecialtyRecommender, TriageReport, TriageRow,
};

const NO_REFERRAL: &str =
    "No specialist referral suggested. A general health check-up is recommended.";

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

pub fn triage(path: &Path) -> anyhow::Result<String> {
    let result = parse_lab_result(&read(path)?)?;
    let report = render_report(&triage_report(&result.items));

    Ok(match result.pages_processed {
        Some(pages) => format!("{pages} page(s) read\n{report}"),
        None => report,
    })
}

pub fn recommend(path: &Path, recommender: &SpecialtyRecommender) -> anyhow::Result<String> {
    let profile = parse_profile(&read(path)?)?;
    let specialties = recommender.recommend(&profile);

    if specialties.is_empty() {
        return Ok(NO_REFERRAL.to_string());
    }
    Ok(specialties
        .iter()
        .map(|s| format!("- {s}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn clinics(path: &Path, specialty: Option<&str>, query: &str) -> anyhow::Result<String> {
    let directory = parse_clinics(&read(path)?)?;
    let found = filter_clinics(&directory, specialty, query);

    if found.is_empty() {
        return Ok("No clinics match.".to_string());
    }
    Ok(found
        .into_iter()
        .map(render_clinic)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Replace the value of item `index` (zero-based) and show the re-classified row.
pub fn correct(path: &Path, index: usize, value: &str) -> anyhow::Result<String> {
    let result = parse_lab_result(&read(path)?)?;
    let Some(item) = result.items.get(index) else {
        bail!(
            "item {index} out of range: {} has {} items",
            path.display(),
            result.items.len()
        );
    };

    let corrected = apply_correction(item, value)?;
    let report = triage_report(std::slice::from_ref(&corrected));
    Ok(report.rows.iter().map(render_row).collect())
}

pub fn history(path: &Path) -> anyhow::Result<String> {
    let entries = parse_history(&read(path)?)?;

    if entries.is_empty() {
        return Ok("No analyses on record.".to_string());
    }
    Ok(entries
        .iter()
        .map(|entry| {
            let date = entry
                .date
                .map_or_else(|| "----------".to_string(), |d| d.to_string());
            let mut line = format!(
                "{date}  [{}] {}: {} ({})",
                entry.kind.as_str(),
                entry.title,
                entry.summary,
                entry.status
            );
            if entry.has_details {
                line.push_str("  +details");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

fn render_row(row: &TriageRow) -> String {
    let mut line = format!("{}: {} ({})", row.name, row.presentation.label, row.status);
    if let Some(value) = &row.value_display {
        line.push_str(&format!("  {value}"));
    }
    if let Some(range) = &row.range_display {
        line.push_str(&format!("  ref {range}"));
    }
    line
}

fn render_report(report: &TriageReport) -> String {
    let s = &report.summary;
    let mut lines: Vec<String> = report.rows.iter().map(render_row).collect();
    lines.push(format!(
        "{} results: {} normal, {} elevated, {} low, {} critical, {} to review; overall {}",
        s.total,
        s.normal,
        s.elevated,
        s.low,
        s.critical,
        s.unknown,
        s.overall().as_str()
    ));
    lines.join("\n")
}

fn render_clinic(clinic: &Clinic) -> String {
    let mut line = format!("{}  {}", clinic.id, clinic.full_name);
    if !clinic.address.is_empty() {
        line.push_str(&format!(", {}", clinic.address));
    }
    if !clinic.specialties.is_empty() {
        line.push_str(&format!("  [{}]", clinic.specialties.join(", ")));
    }
    line
}
