//! Teaching units (UE) and their course-element slots.

use super::Ecue;
use crate::aggregator::Stats;
use crate::utils::error::DuplicateEntityError;
use std::collections::BTreeMap;

/// One position in a UE: a single ECUE or parallel alternatives
#[derive(Debug, Clone)]
pub enum EcueSlot {
    Single(Ecue),
    Group(Vec<Ecue>),
}

impl EcueSlot {
    /// ECUEs of the slot; groups are kept sorted by code
    pub fn ecues(&self) -> &[Ecue] {
        match self {
            EcueSlot::Single(ecue) => std::slice::from_ref(ecue),
            EcueSlot::Group(group) => group,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, EcueSlot::Group(_))
    }
}

/// Teaching unit
#[derive(Debug, Clone)]
pub struct Ue {
    pub code: String,
    pub label: String,
    pub level: String,
    pub ects: u32,
    pub coordinator: String,
    pub description: Option<String>,
    stats: Stats,
    slots: BTreeMap<String, EcueSlot>,

    // Set by `Semester::add_ue`
    pub semester: Option<String>,
}

impl Ue {
    pub fn new(
        code: impl Into<String>,
        label: impl Into<String>,
        level: impl Into<String>,
        ects: u32,
        coordinator: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            level: level.into(),
            ects,
            coordinator: coordinator.into(),
            description: None,
            stats: Stats::new(),
            slots: BTreeMap::new(),
            semester: None,
        }
    }

    /// Attach an ECUE and fold its hours into this UE
    ///
    /// Codes with a sub-group segment join that group. A code already present
    /// is rejected and nothing changes, as is a direct ECUE whose code names
    /// an existing group (or the reverse).
    pub fn add_ecue(&mut self, mut ecue: Ecue) -> Result<&mut Self, DuplicateEntityError> {
        let group_key = ecue.group_key().map(str::to_string);
        let key = group_key.clone().unwrap_or_else(|| ecue.code.clone());

        let collision = match (self.slots.get(&key), group_key.is_some()) {
            (None, _) => None,
            (Some(EcueSlot::Group(group)), true) => group
                .iter()
                .any(|e| e.code == ecue.code)
                .then(|| ("ECUE", ecue.code.clone())),
            (Some(EcueSlot::Single(_)), false) => Some(("ECUE", ecue.code.clone())),
            // A direct entry and a group can never share a key
            (Some(_), _) => Some(("ECUE slot", key.clone())),
        };
        if let Some((kind, code)) = collision {
            return Err(DuplicateEntityError {
                kind,
                code,
                parent: self.code.clone(),
            });
        }

        ecue.ue_code = Some(self.code.clone());
        ecue.ue_label = Some(self.label.clone());
        self.stats.merge(ecue.stats());

        if group_key.is_some() {
            let slot = self
                .slots
                .entry(key)
                .or_insert_with(|| EcueSlot::Group(Vec::new()));
            if let EcueSlot::Group(group) = slot {
                let at = group.partition_point(|e| e.code < ecue.code);
                group.insert(at, ecue);
            }
        } else {
            self.slots.insert(key, EcueSlot::Single(ecue));
        }
        Ok(self)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Slots keyed by sub-group key or ECUE code
    pub fn slots(&self) -> &BTreeMap<String, EcueSlot> {
        &self.slots
    }

    /// Every ECUE in slot order, groups flattened
    pub fn ecues(&self) -> impl Iterator<Item = &Ecue> {
        self.slots.values().flat_map(EcueSlot::ecues)
    }

    /// Last `-` segment of the code, used as the short display key
    pub fn short_code(&self) -> &str {
        short_code(&self.code)
    }
}

/// Last `-` segment of a code
pub fn short_code(code: &str) -> &str {
    code.rsplit('-').next().unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::ActivityKind;
    use crate::model::Activity;

    fn ecue(code: &str, lecture: f64) -> Ecue {
        let mut e = Ecue::new(code, code, 1.0, 10.0, vec!["R".to_string()]);
        e.add_activity(Activity {
            kind: ActivityKind::Lecture,
            hours: lecture,
            label: None,
        });
        e
    }

    fn ue() -> Ue {
        Ue::new("23-PA-S1-MATH", "Mathématiques", "L1", 6, "A. Smith")
    }

    #[test]
    fn test_add_ecue_aggregates_and_sets_back_refs() {
        let mut ue = ue();
        ue.add_ecue(ecue("S1-MATH-01-ALG", 20.0)).unwrap();
        ue.add_ecue(ecue("S1-MATH-02-ANA", 15.0)).unwrap();

        assert_eq!(ue.stats().lecture, 35.0);
        let first = ue.ecues().next().unwrap();
        assert_eq!(first.ue_code.as_deref(), Some("23-PA-S1-MATH"));
        assert_eq!(first.ue_label.as_deref(), Some("Mathématiques"));
    }

    #[test]
    fn test_grouped_ecues_share_a_sorted_slot() {
        let mut ue = ue();
        ue.add_ecue(ecue("S1-MATH-OPT-02-STA", 10.0)).unwrap();
        ue.add_ecue(ecue("S1-MATH-OPT-01-GEO", 10.0)).unwrap();
        ue.add_ecue(ecue("S1-MATH-01-ALG", 5.0)).unwrap();

        assert_eq!(ue.slots().len(), 2);
        let group = ue.slots().get("OPT").unwrap();
        assert!(group.is_group());
        let codes: Vec<&str> = group.ecues().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["S1-MATH-OPT-01-GEO", "S1-MATH-OPT-02-STA"]);
        assert_eq!(ue.stats().lecture, 25.0);
    }

    #[test]
    fn test_duplicate_ecue_is_rejected_without_double_count() {
        let mut ue = ue();
        ue.add_ecue(ecue("S1-MATH-01-ALG", 20.0)).unwrap();
        let err = ue.add_ecue(ecue("S1-MATH-01-ALG", 99.0)).unwrap_err();

        assert_eq!(err.kind, "ECUE");
        assert_eq!(err.code, "S1-MATH-01-ALG");
        assert_eq!(err.parent, "23-PA-S1-MATH");
        assert_eq!(ue.stats().lecture, 20.0);
        assert_eq!(ue.ecues().count(), 1);
    }

    #[test]
    fn test_duplicate_in_group_is_rejected() {
        let mut ue = ue();
        ue.add_ecue(ecue("S1-MATH-OPT-01-GEO", 10.0)).unwrap();
        assert!(ue.add_ecue(ecue("S1-MATH-OPT-01-GEO", 10.0)).is_err());
        assert_eq!(ue.stats().lecture, 10.0);
    }

    #[test]
    fn test_direct_ecue_named_like_a_group_is_a_slot_collision() {
        let mut ue = ue();
        ue.add_ecue(ecue("S1-MATH-OPT-01-GEO", 10.0)).unwrap();
        let err = ue.add_ecue(ecue("OPT", 4.0)).unwrap_err();

        assert_eq!(err.kind, "ECUE slot");
        assert_eq!(err.code, "OPT");
        assert_eq!(err.to_string(), "duplicate ECUE slot 'OPT' in '23-PA-S1-MATH'");
        assert_eq!(ue.stats().lecture, 10.0);
        assert_eq!(ue.ecues().count(), 1);
    }

    #[test]
    fn test_short_code() {
        assert_eq!(ue().short_code(), "MATH");
        assert_eq!(short_code("PLAIN"), "PLAIN");
    }
}
