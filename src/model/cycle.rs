use super::Semester;
use crate::aggregator::Stats;
use crate::utils::error::DuplicateEntityError;
use std::collections::BTreeMap;

/// Free-text introduction of a cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Preamble {
    pub code: String,
    pub description: String,
}

/// Top-level academic track
#[derive(Debug, Clone)]
pub struct Cycle {
    pub code: String,
    pub preamble: Option<Preamble>,
    stats: Stats,
    semesters: BTreeMap<String, Semester>,
}

impl Cycle {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            preamble: None,
            stats: Stats::new(),
            semesters: BTreeMap::new(),
        }
    }

    pub fn add_semester(&mut self, semester: Semester) -> Result<&mut Self, DuplicateEntityError> {
        if self.semesters.contains_key(&semester.code) {
            return Err(DuplicateEntityError {
                kind: "semester",
                code: semester.code,
                parent: self.code.clone(),
            });
        }
        self.stats.merge(semester.stats());
        self.semesters.insert(semester.code.clone(), semester);
        Ok(self)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Semesters keyed by code
    pub fn semesters(&self) -> &BTreeMap<String, Semester> {
        &self.semesters
    }

    pub fn ue_count(&self) -> usize {
        self.semesters.values().map(|s| s.ues().len()).sum()
    }

    pub fn ecue_count(&self) -> usize {
        self.semesters
            .values()
            .flat_map(|s| s.ues().values())
            .map(|ue| ue.ecues().count())
            .sum()
    }
}

/// Every cycle of every year, as loaded from the source tree
#[derive(Debug, Clone, Default)]
pub struct Syllabus {
    pub years: BTreeMap<String, Vec<Cycle>>,
}

impl Syllabus {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(year, cycle)` pairs in year order, cycles sorted by code
    pub fn cycles(&self) -> impl Iterator<Item = (&str, &Cycle)> {
        self.years
            .iter()
            .flat_map(|(year, cycles)| cycles.iter().map(move |c| (year.as_str(), c)))
    }

    pub fn is_empty(&self) -> bool {
        self.years.values().all(Vec::is_empty)
    }
}
