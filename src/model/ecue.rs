//! Course elements (ECUE), the leaves of the curriculum tree.

use crate::aggregator::{ActivityKind, Stats};
use serde::Deserialize;

/// A scheduled block of hours
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub hours: f64,
    pub label: Option<String>,
}

/// A graded assessment; its hours always count as exam time
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub kind: String,
    pub environment: String,
    pub hours: f64,
    pub code: String,
    pub coefficient: f64,
    pub label: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Link,
    Book,
    #[default]
    Other,
}

/// Bibliography entry
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub kind: ReferenceKind,
    pub url: Option<String>,
    pub isbn13: Option<String>,
    pub label: Option<String>,
}

/// Smallest gradable course element
#[derive(Debug, Clone)]
pub struct Ecue {
    pub code: String,
    pub label: String,
    pub coefficient: f64,
    pub threshold: f64,
    pub referents: Vec<String>,
    pub prerequisites: Option<Vec<String>>,
    pub summary: Option<String>,
    pub outline: Option<String>,
    pub tlo: Option<String>,
    pub others: Option<String>,
    activities: Vec<Activity>,
    evaluations: Vec<Evaluation>,
    pub references: Vec<Reference>,
    stats: Stats,

    // Set by `Ue::add_ecue`
    pub ue_code: Option<String>,
    pub ue_label: Option<String>,
}

impl Ecue {
    pub fn new(
        code: impl Into<String>,
        label: impl Into<String>,
        coefficient: f64,
        threshold: f64,
        referents: Vec<String>,
    ) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            coefficient,
            threshold,
            referents,
            prerequisites: None,
            summary: None,
            outline: None,
            tlo: None,
            others: None,
            activities: Vec::new(),
            evaluations: Vec::new(),
            references: Vec::new(),
            stats: Stats::new(),
            ue_code: None,
            ue_label: None,
        }
    }

    pub fn add_activity(&mut self, activity: Activity) -> &mut Self {
        self.stats.update(activity.kind, activity.hours);
        self.activities.push(activity);
        self
    }

    pub fn add_evaluation(&mut self, evaluation: Evaluation) -> &mut Self {
        self.stats.update(ActivityKind::Exam, evaluation.hours);
        self.evaluations.push(evaluation);
        self
    }

    pub fn add_reference(&mut self, reference: Reference) -> &mut Self {
        self.references.push(reference);
        self
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Sub-group key when the code has five segments
    ///
    /// `S1-MATH-OPT-01-GEO` is grouped under `OPT`; four-segment codes are
    /// attached directly.
    pub fn group_key(&self) -> Option<&str> {
        let segments: Vec<&str> = self.code.split('-').collect();
        if segments.len() == 5 {
            Some(segments[2])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ecue(code: &str) -> Ecue {
        Ecue::new(code, "Algèbre", 0.5, 8.0, vec!["J. Doe".to_string()])
    }

    #[test]
    fn test_activities_and_evaluations_feed_stats() {
        let mut e = ecue("S1-MATH-01-ALG");
        e.add_activity(Activity {
            kind: ActivityKind::Lecture,
            hours: 20.0,
            label: Some("Cours".to_string()),
        })
        .add_activity(Activity {
            kind: ActivityKind::Tutorial,
            hours: 10.0,
            label: None,
        })
        .add_evaluation(Evaluation {
            kind: "written".to_string(),
            environment: "on-site".to_string(),
            hours: 2.0,
            code: "E1".to_string(),
            coefficient: 1.0,
            label: None,
            comments: None,
        });

        assert_eq!(e.stats().lecture, 20.0);
        assert_eq!(e.stats().tutorial, 10.0);
        assert_eq!(e.stats().exam, 2.0);
        assert_eq!(e.stats().total(), 32.0);
        assert_eq!(e.activities.len(), 2);
        assert_eq!(e.evaluations.len(), 1);
    }

    #[test]
    fn test_group_key() {
        assert_eq!(ecue("S1-MATH-OPT-01-GEO").group_key(), Some("OPT"));
        assert_eq!(ecue("S1-MATH-01-ALG").group_key(), None);
        assert_eq!(ecue("ALG").group_key(), None);
    }
}
