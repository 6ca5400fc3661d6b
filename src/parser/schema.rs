//! Source document definitions.
//!
//! These are the shapes of the TOML/JSON/YAML files under the source tree. They
//! are checked with `validate` and then turned into model nodes.

use crate::aggregator::ActivityKind;
use crate::model::{Activity, Ecue, Evaluation, Preamble, Reference, ReferenceKind, Ue};
use crate::utils::error::ValidationError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// `{ecue_code}.toml`
#[derive(Debug, Clone, Deserialize)]
pub struct EcueDocument {
    pub information: EcueInformation,

    #[serde(default)]
    pub prerequisites: Option<Vec<String>>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub outline: Option<String>,

    /// Targeted learning outcomes
    #[serde(default)]
    pub tlo: Option<String>,

    #[serde(default)]
    pub others: Option<String>,

    #[serde(default)]
    pub activities: Vec<ActivityDocument>,

    #[serde(default)]
    pub evaluations: Vec<EvaluationDocument>,

    #[serde(default)]
    pub references: Vec<ReferenceDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EcueInformation {
    pub label: String,
    pub coefficient: f64,
    pub threshold: f64,
    pub referents: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityDocument {
    pub kind: ActivityKind,
    pub hours: f64,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationDocument {
    pub kind: String,
    pub environment: String,
    pub hours: f64,
    pub code: String,
    pub coefficient: f64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceDocument {
    #[serde(default)]
    pub kind: ReferenceKind,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "isbn-13")]
    pub isbn13: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// `.ue.toml`
#[derive(Debug, Clone, Deserialize)]
pub struct UeDocument {
    pub information: UeInformation,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UeInformation {
    pub label: String,
    pub level: String,
    pub ects: u32,
    pub coordinator: String,
}

/// `.preamble.toml`
#[derive(Debug, Clone, Deserialize)]
pub struct PreambleDocument {
    pub description: String,
}

fn invalid(path: &Path, message: impl Into<String>) -> ValidationError {
    ValidationError {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

fn check_hours(path: &Path, what: &str, hours: f64) -> Result<(), ValidationError> {
    if hours.is_finite() && hours >= 0.0 {
        Ok(())
    } else {
        Err(invalid(path, format!("{} hours must be a non-negative number, got {}", what, hours)))
    }
}

impl EcueDocument {
    pub fn validate(&self, path: &Path) -> Result<(), ValidationError> {
        let info = &self.information;
        if info.label.trim().is_empty() {
            return Err(invalid(path, "label is empty"));
        }
        if info.referents.is_empty() {
            return Err(invalid(path, "at least one referent is required"));
        }
        if !info.coefficient.is_finite() || info.coefficient < 0.0 {
            return Err(invalid(path, format!("invalid coefficient {}", info.coefficient)));
        }
        if !info.threshold.is_finite() {
            return Err(invalid(path, format!("invalid threshold {}", info.threshold)));
        }

        for activity in &self.activities {
            check_hours(path, "activity", activity.hours)?;
        }

        let mut codes = HashSet::new();
        for evaluation in &self.evaluations {
            check_hours(path, &format!("evaluation {}", evaluation.code), evaluation.hours)?;
            if !(0.0..=1.0).contains(&evaluation.coefficient) {
                return Err(invalid(
                    path,
                    format!(
                        "evaluation {} coefficient must be within [0, 1], got {}",
                        evaluation.code, evaluation.coefficient
                    ),
                ));
            }
            if !codes.insert(evaluation.code.as_str()) {
                return Err(invalid(path, format!("evaluation code {} is repeated", evaluation.code)));
            }
        }
        Ok(())
    }

    /// Build the ECUE; activities and evaluations feed its hours
    pub fn into_ecue(self, code: &str) -> Ecue {
        let info = self.information;
        let mut ecue = Ecue::new(code, info.label, info.coefficient, info.threshold, info.referents);
        ecue.prerequisites = self.prerequisites;
        ecue.summary = self.summary;
        ecue.outline = self.outline;
        ecue.tlo = self.tlo;
        ecue.others = self.others;

        for a in self.activities {
            ecue.add_activity(Activity {
                kind: a.kind,
                hours: a.hours,
                label: a.label,
            });
        }
        for e in self.evaluations {
            ecue.add_evaluation(Evaluation {
                kind: e.kind,
                environment: e.environment,
                hours: e.hours,
                code: e.code,
                coefficient: e.coefficient,
                label: e.label,
                comments: e.comments,
            });
        }
        for r in self.references {
            ecue.add_reference(Reference {
                kind: r.kind,
                url: r.url,
                isbn13: r.isbn13,
                label: r.label,
            });
        }
        ecue
    }
}

impl UeDocument {
    pub fn validate(&self, path: &Path) -> Result<(), ValidationError> {
        let info = &self.information;
        if info.label.trim().is_empty() {
            return Err(invalid(path, "label is empty"));
        }
        if info.ects == 0 {
            return Err(invalid(path, "ects must be positive"));
        }
        Ok(())
    }

    pub fn into_ue(self, code: &str) -> Ue {
        let info = self.information;
        let mut ue = Ue::new(code, info.label, info.level, info.ects, info.coordinator);
        ue.description = self.description;
        ue
    }
}

impl PreambleDocument {
    pub fn into_preamble(self, cycle: &str) -> Preamble {
        Preamble {
            code: cycle.to_string(),
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const ECUE_TOML: &str = r#"
        summary = "Groupes"

        [information]
        label = "Algèbre"
        coefficient = 0.5
        threshold = 8
        referents = ["J. Doe"]

        [[activities]]
        kind = "lecture"
        hours = 20

        [[activities]]
        kind = "personnal"
        hours = 10.5
        label = "Exercices"

        [[evaluations]]
        kind = "written"
        environment = "on-site"
        hours = 2
        code = "E1"
        coefficient = 1.0

        [[references]]
        kind = "book"
        isbn-13 = "9780131103627"
        label = "K&R"
    "#;

    fn path() -> PathBuf {
        PathBuf::from("23/PA/23-PA-S1-MATH/S1-MATH-01-ALG.toml")
    }

    #[test]
    fn test_ecue_document_to_model() {
        let doc: EcueDocument = toml::from_str(ECUE_TOML).unwrap();
        doc.validate(&path()).unwrap();
        let ecue = doc.into_ecue("S1-MATH-01-ALG");

        assert_eq!(ecue.code, "S1-MATH-01-ALG");
        assert_eq!(ecue.stats().lecture, 20.0);
        assert_eq!(ecue.stats().personal, 10.5);
        assert_eq!(ecue.stats().exam, 2.0);
        assert_eq!(ecue.summary.as_deref(), Some("Groupes"));
        assert_eq!(ecue.references[0].kind, ReferenceKind::Book);
        assert_eq!(ecue.references[0].isbn13.as_deref(), Some("9780131103627"));
    }

    #[test]
    fn test_ecue_validation_failures() {
        let mut doc: EcueDocument = toml::from_str(ECUE_TOML).unwrap();
        doc.information.referents.clear();
        let err = doc.validate(&path()).unwrap_err();
        assert!(err.to_string().contains("referent"));

        let mut doc: EcueDocument = toml::from_str(ECUE_TOML).unwrap();
        doc.activities[0].hours = -1.0;
        assert!(doc.validate(&path()).is_err());

        let mut doc: EcueDocument = toml::from_str(ECUE_TOML).unwrap();
        doc.evaluations[0].coefficient = 1.5;
        assert!(doc.validate(&path()).is_err());

        let mut doc: EcueDocument = toml::from_str(ECUE_TOML).unwrap();
        let repeated = doc.evaluations[0].clone();
        doc.evaluations.push(repeated);
        let err = doc.validate(&path()).unwrap_err();
        assert!(err.to_string().contains("E1 is repeated"));
    }

    #[test]
    fn test_ue_document_from_json() {
        let doc: UeDocument = serde_json::from_str(
            r#"{"information": {"label": "Maths", "level": "L1", "ects": 6, "coordinator": "A. Smith"}}"#,
        )
        .unwrap();
        doc.validate(Path::new(".ue.json")).unwrap();
        let ue = doc.into_ue("23-PA-S1-MATH");
        assert_eq!(ue.ects, 6);
        assert!(ue.description.is_none());
    }

    #[test]
    fn test_ue_zero_ects_is_rejected() {
        let doc: UeDocument = toml::from_str(
            "[information]\nlabel = \"Maths\"\nlevel = \"L1\"\nects = 0\ncoordinator = \"C\"\n",
        )
        .unwrap();
        assert!(doc.validate(Path::new(".ue.toml")).is_err());
    }
}
