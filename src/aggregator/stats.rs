//! Fixed-category hour accumulator.
//!
//! Every node of the curriculum tree owns one `Stats`. Values only grow while
//! the tree is assembled and are read-only afterwards.

use serde::Deserialize;
use std::fmt;
use std::ops::AddAssign;

/// Kind of a scheduled activity, one per accumulated counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Lecture,
    Remediation,
    Tutorial,
    Practical,
    #[serde(alias = "personnal")]
    Personal,
    Exam,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::Lecture,
        ActivityKind::Remediation,
        ActivityKind::Tutorial,
        ActivityKind::Practical,
        ActivityKind::Personal,
        ActivityKind::Exam,
    ];
}

/// A reported column: the six counters plus the two derived sums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    Lecture,
    Remediation,
    Tutorial,
    Practical,
    Personal,
    Exam,
    Total,
    Supervised,
}

impl Measure {
    /// Display order of every hours table
    pub const ALL: [Measure; 8] = [
        Measure::Lecture,
        Measure::Remediation,
        Measure::Tutorial,
        Measure::Practical,
        Measure::Personal,
        Measure::Exam,
        Measure::Total,
        Measure::Supervised,
    ];

    /// Translation key
    pub fn key(self) -> &'static str {
        match self {
            Measure::Lecture => "lecture",
            Measure::Remediation => "remediation",
            Measure::Tutorial => "tutorial",
            Measure::Practical => "practical",
            Measure::Personal => "personal",
            Measure::Exam => "exam",
            Measure::Total => "total",
            Measure::Supervised => "supervised",
        }
    }

    pub fn is_derived(self) -> bool {
        matches!(self, Measure::Total | Measure::Supervised)
    }
}

/// Hours per category
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    pub lecture: f64,
    pub remediation: f64,
    pub tutorial: f64,
    pub practical: f64,
    pub personal: f64,
    pub exam: f64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `hours` to one counter
    ///
    /// Negative hours are a caller bug, not an input error.
    pub fn update(&mut self, kind: ActivityKind, hours: f64) -> &mut Self {
        debug_assert!(hours >= 0.0, "negative hours: {hours}");
        let counter = match kind {
            ActivityKind::Lecture => &mut self.lecture,
            ActivityKind::Remediation => &mut self.remediation,
            ActivityKind::Tutorial => &mut self.tutorial,
            ActivityKind::Practical => &mut self.practical,
            ActivityKind::Personal => &mut self.personal,
            ActivityKind::Exam => &mut self.exam,
        };
        *counter += hours;
        self
    }

    /// Add all six counters of `other`
    pub fn merge(&mut self, other: &Stats) -> &mut Self {
        self.lecture += other.lecture;
        self.remediation += other.remediation;
        self.tutorial += other.tutorial;
        self.practical += other.practical;
        self.personal += other.personal;
        self.exam += other.exam;
        self
    }

    pub fn total(&self) -> f64 {
        self.lecture + self.remediation + self.tutorial + self.practical + self.personal + self.exam
    }

    /// Face-to-face hours: everything but personal study
    pub fn supervised(&self) -> f64 {
        self.total() - self.personal
    }

    pub fn get(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Lecture => self.lecture,
            Measure::Remediation => self.remediation,
            Measure::Tutorial => self.tutorial,
            Measure::Practical => self.practical,
            Measure::Personal => self.personal,
            Measure::Exam => self.exam,
            Measure::Total => self.total(),
            Measure::Supervised => self.supervised(),
        }
    }

    /// The eight measures in display order
    pub fn iter(&self) -> impl Iterator<Item = (Measure, f64)> + '_ {
        Measure::ALL.iter().map(move |&m| (m, self.get(m)))
    }

    /// Format fractional hours as `"H h MM"`
    ///
    /// The fraction is first truncated to 1/100000 of an hour, then minutes
    /// are rounded up so a displayed total never under-reports.
    pub fn format(hours: f64) -> String {
        let whole = hours.trunc();
        let mut hour = whole as u64;
        let fraction = ((hours - whole) * 100_000.0).trunc() as u64;
        let mut minutes = (fraction * 60).div_ceil(100_000);
        if minutes >= 60 {
            hour += minutes / 60;
            minutes %= 60;
        }
        format!("{} h {:02}", hour, minutes)
    }
}

impl AddAssign<&Stats> for Stats {
    fn add_assign(&mut self, other: &Stats) {
        self.merge(other);
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Stats) {
        self.merge(&other);
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "l:{} / r:{} / t:{} / p:{} / h:{} / e:{} / [{} / {}]",
            self.lecture,
            self.remediation,
            self.tutorial,
            self.practical,
            self.personal,
            self.exam,
            self.total(),
            self.supervised()
        )
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_stats() -> impl Strategy<Value = Stats> {
        proptest::array::uniform6(0.0f64..500.0).prop_map(|v| Stats {
            lecture: v[0],
            remediation: v[1],
            tutorial: v[2],
            practical: v[3],
            personal: v[4],
            exam: v[5],
        })
    }

    proptest! {
        #[test]
        fn total_is_sum_of_counters(stats in arb_stats()) {
            let sum = stats.lecture + stats.remediation + stats.tutorial
                + stats.practical + stats.personal + stats.exam;
            prop_assert!((stats.total() - sum).abs() < 1e-9);
            prop_assert!((stats.supervised() - (stats.total() - stats.personal)).abs() < 1e-9);
            prop_assert!(stats.supervised() <= stats.total());
        }

        #[test]
        fn format_never_reports_sixty_minutes(hours in 0.0f64..1000.0) {
            let text = Stats::format(hours);
            let minutes: u64 = text.rsplit(' ').next().unwrap().parse().unwrap();
            prop_assert!(minutes < 60);
        }
    }
}
