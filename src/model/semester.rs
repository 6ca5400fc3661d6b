use super::Ue;
use crate::aggregator::Stats;
use crate::utils::error::DuplicateEntityError;
use std::collections::BTreeMap;

/// A semester: UEs keyed by code
#[derive(Debug, Clone)]
pub struct Semester {
    pub code: String,
    stats: Stats,
    ues: BTreeMap<String, Ue>,
}

impl Semester {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            stats: Stats::new(),
            ues: BTreeMap::new(),
        }
    }

    pub fn add_ue(&mut self, mut ue: Ue) -> Result<&mut Self, DuplicateEntityError> {
        if self.ues.contains_key(&ue.code) {
            return Err(DuplicateEntityError {
                kind: "UE",
                code: ue.code,
                parent: self.code.clone(),
            });
        }
        ue.semester = Some(self.code.clone());
        self.stats.merge(ue.stats());
        self.ues.insert(ue.code.clone(), ue);
        Ok(self)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn ues(&self) -> &BTreeMap<String, Ue> {
        &self.ues
    }

    pub fn ects(&self) -> u32 {
        self.ues.values().map(|ue| ue.ects).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::ActivityKind;
    use crate::model::{Activity, Ecue};

    fn ue(code: &str, practical: f64) -> Ue {
        let mut ecue = Ecue::new("S1-X-01-Y", "Y", 1.0, 10.0, vec!["R".to_string()]);
        ecue.add_activity(Activity {
            kind: ActivityKind::Practical,
            hours: practical,
            label: None,
        });
        let mut ue = Ue::new(code, code, "L1", 3, "C");
        ue.add_ecue(ecue).unwrap();
        ue
    }

    #[test]
    fn test_add_ue() {
        let mut semester = Semester::new("S1");
        semester.add_ue(ue("23-PA-S1-MATH", 4.0)).unwrap();
        semester.add_ue(ue("23-PA-S1-INFO", 6.0)).unwrap();

        assert_eq!(semester.stats().practical, 10.0);
        assert_eq!(semester.ects(), 6);
        assert_eq!(
            semester.ues()["23-PA-S1-INFO"].semester.as_deref(),
            Some("S1")
        );
    }

    #[test]
    fn test_duplicate_ue() {
        let mut semester = Semester::new("S1");
        semester.add_ue(ue("23-PA-S1-MATH", 4.0)).unwrap();
        let err = semester.add_ue(ue("23-PA-S1-MATH", 4.0)).unwrap_err();

        assert_eq!(err.to_string(), "duplicate UE '23-PA-S1-MATH' in 'S1'");
        assert_eq!(semester.stats().practical, 4.0);
    }
}
