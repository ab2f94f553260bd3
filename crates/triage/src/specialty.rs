//! Specialty recommendations from a patient profile.
//!
//! Rules are evaluated in a fixed order and their specialties appended in that order:
//! 1. an elevated or critical cholesterol result adds cardiology, endocrinology and nutrition
//! 2. a known hypertension condition adds cardiology
//! 3. any recorded allergy adds allergology
//!
//! Duplicates are then removed keeping the first occurrence, so the output order is the rule
//! order, not an alphabetical one. An empty profile yields an empty list; whether to show a
//! general-health fallback is the caller's call.

use crate::config::TriageConfig;
use crate::constants::{ALLERGOLOGY, CARDIOLOGY, CHOLESTEROL_MARKER, ENDOCRINOLOGY, NUTRITION};
use crate::lab::{LabItem, PatientProfile};
use crate::status::{classify, Status};

/// Specialty rules bound to a configuration.
#[derive(Clone, Debug, Default)]
pub struct SpecialtyRecommender {
    config: TriageConfig,
}

impl SpecialtyRecommender {
    pub fn new(config: TriageConfig) -> Self {
        Self { config }
    }

    /// Ordered, de-duplicated specialties for `profile`.
    pub fn recommend(&self, profile: &PatientProfile) -> Vec<String> {
        let mut recommendations: Vec<&str> = Vec::new();

        if profile.lab_history.iter().any(is_raised_cholesterol) {
            recommendations.extend([CARDIOLOGY, ENDOCRINOLOGY, NUTRITION]);
        }

        if self.has_hypertension(profile) {
            recommendations.push(CARDIOLOGY);
        }

        if !profile.allergies.is_empty() {
            recommendations.push(ALLERGOLOGY);
        }

        dedup_stable(recommendations)
    }

    fn has_hypertension(&self, profile: &PatientProfile) -> bool {
        profile.conditions.iter().any(|condition| {
            self.config
                .hypertension_labels()
                .iter()
                .any(|label| label == condition)
        })
    }
}

/// Recommend specialties using the built-in rule configuration.
pub fn recommend_specialties(profile: &PatientProfile) -> Vec<String> {
    SpecialtyRecommender::default().recommend(profile)
}

fn is_raised_cholesterol(item: &LabItem) -> bool {
    item.name.to_lowercase().contains(CHOLESTEROL_MARKER)
        && matches!(classify(item), Status::Elevated | Status::Critical)
}

fn dedup_stable(items: Vec<&str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.iter().any(|seen| seen == item) {
            out.push(item.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(labs: Vec<LabItem>, conditions: &[&str], allergies: &[&str]) -> PatientProfile {
        PatientProfile {
            conditions: conditions.iter().map(|s| s.to_string()).collect(),
            allergies: allergies.iter().map(|s| s.to_string()).collect(),
            lab_history: labs,
        }
    }

    #[test]
    fn all_rules_fire_without_duplicating_cardiology() {
        let p = profile(
            vec![LabItem::named("Colesterol").with_flag("alto")],
            &["Hipertensión leve"],
            &["Polen"],
        );

        assert_eq!(
            recommend_specialties(&p),
            ["Cardiología", "Endocrinología", "Nutrición", "Alergología"]
        );
    }

    #[test]
    fn empty_profile_gives_no_recommendations() {
        assert!(recommend_specialties(&PatientProfile::default()).is_empty());
    }

    #[test]
    fn cholesterol_match_is_case_insensitive_substring() {
        let p = profile(
            vec![LabItem::named("COLESTEROL TOTAL")
                .with_value(245.0)
                .with_range(Some(0.0), Some(200.0))],
            &[],
            &[],
        );
        assert_eq!(
            recommend_specialties(&p),
            ["Cardiología", "Endocrinología", "Nutrición"]
        );
    }

    #[test]
    fn normal_or_unknown_cholesterol_does_not_fire() {
        let normal = profile(
            vec![LabItem::named("Colesterol").with_flag("normal")],
            &[],
            &[],
        );
        assert!(recommend_specialties(&normal).is_empty());

        let unknown = profile(vec![LabItem::named("Colesterol LDL")], &[], &[]);
        assert!(recommend_specialties(&unknown).is_empty());

        let low = profile(vec![LabItem::named("Colesterol").with_flag("bajo")], &[], &[]);
        assert!(recommend_specialties(&low).is_empty());
    }

    #[test]
    fn elevated_non_cholesterol_lab_does_not_fire() {
        let p = profile(vec![LabItem::named("Glucosa").with_flag("alto")], &[], &[]);
        assert!(recommend_specialties(&p).is_empty());
    }

    #[test]
    fn hypertension_requires_exact_label() {
        let exact = profile(vec![], &["Hipertensión leve"], &[]);
        assert_eq!(recommend_specialties(&exact), ["Cardiología"]);

        let other = profile(vec![], &["hipertensión leve", "Hipertensión"], &[]);
        assert!(recommend_specialties(&other).is_empty());
    }

    #[test]
    fn hypertension_then_allergy_keeps_rule_order() {
        let p = profile(vec![], &["Hipertensión leve"], &["Penicilina", "Polen"]);
        assert_eq!(recommend_specialties(&p), ["Cardiología", "Alergología"]);
    }

    #[test]
    fn configured_labels_extend_hypertension_rule() {
        let config = TriageConfig::new(vec![
            "Hipertensión leve".into(),
            "Hipertensión arterial".into(),
        ])
        .expect("valid config");
        let recommender = SpecialtyRecommender::new(config);

        let p = profile(vec![], &["Hipertensión arterial"], &[]);
        assert_eq!(recommender.recommend(&p), ["Cardiología"]);
    }
}
