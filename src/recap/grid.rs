//! Flatten a cycle into the recap matrix.
//!
//! Row order: per semester, per UE, one row per ECUE then a UE total row,
//! then a semester total row. A separator row precedes every semester but
//! the first. Every level is sorted by code.

use crate::aggregator::Stats;
use crate::model::{Cycle, Ecue, Semester};
use crate::utils::config::{TOTAL_SEMESTER_LABEL, TOTAL_UE_LABEL};
use crate::utils::Translations;
use log::debug;

/// Semester, UE and ECUE label columns
pub const LABEL_COLUMNS: usize = 3;

/// Label columns plus the eight measures
pub const RECAP_COLUMNS: usize = LABEL_COLUMNS + 8;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Hours(f64),
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            Cell::Hours(_) => None,
        }
    }

    /// Display text; zero hours render empty
    pub fn display(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Hours(hours) if *hours > 0.0 => format_number(*hours),
            Cell::Hours(_) => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridRow {
    /// Blank spacer between two semesters
    Separator,
    Cells(Vec<Cell>),
}

impl GridRow {
    pub fn cells(&self) -> Option<&[Cell]> {
        match self {
            GridRow::Separator => None,
            GridRow::Cells(cells) => Some(cells),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecapGrid {
    pub rows: Vec<GridRow>,
}

impl RecapGrid {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Build the recap matrix of an aggregated cycle
pub fn build_grid(cycle: &Cycle, tr: &Translations) -> RecapGrid {
    let mut rows = Vec::new();

    for semester in cycle.semesters().values() {
        if !rows.is_empty() {
            rows.push(GridRow::Separator);
        }
        push_semester(&mut rows, semester, tr);
    }

    debug!("Recap grid for {}: {} rows", cycle.code, rows.len());
    RecapGrid { rows }
}

fn push_semester(rows: &mut Vec<GridRow>, semester: &Semester, tr: &Translations) {
    for ue in semester.ues().values() {
        let ue_label = tr.tr(ue.short_code());
        for ecue in ue.ecues() {
            rows.push(ecue_row(&semester.code, ue_label, ecue));
        }
        rows.push(stats_row(&semester.code, ue_label, TOTAL_UE_LABEL, ue.stats()));
    }
    rows.push(stats_row(
        &semester.code,
        TOTAL_SEMESTER_LABEL,
        TOTAL_SEMESTER_LABEL,
        semester.stats(),
    ));
}

fn ecue_row(semester: &str, ue_label: &str, ecue: &Ecue) -> GridRow {
    stats_row(semester, ue_label, &ecue.label, ecue.stats())
}

fn stats_row(semester: &str, ue_label: &str, label: &str, stats: &Stats) -> GridRow {
    let mut cells = Vec::with_capacity(RECAP_COLUMNS);
    cells.push(Cell::Text(semester.to_string()));
    cells.push(Cell::Text(ue_label.to_string()));
    cells.push(Cell::Text(label.to_string()));
    cells.extend(stats.iter().map(|(_, hours)| Cell::Hours(hours)));
    GridRow::Cells(cells)
}

/// Up to two decimals, trailing zeros dropped
///
/// Fractions round up like `Stats::format` minutes, so any positive amount
/// prints as at least `0.01`.
pub fn format_number(value: f64) -> String {
    let whole = value.trunc();
    let mut units = whole as u64;
    let fraction = ((value - whole) * 100_000.0).trunc() as u64;
    let mut hundredths = fraction.div_ceil(1_000);
    if hundredths >= 100 {
        units += hundredths / 100;
        hundredths %= 100;
    }
    if value > 0.0 && units == 0 && hundredths == 0 {
        hundredths = 1;
    }

    match hundredths {
        0 => units.to_string(),
        h if h % 10 == 0 => format!("{}.{}", units, h / 10),
        h => format!("{}.{:02}", units, h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::ActivityKind;
    use crate::model::{Activity, Ue};
    use pretty_assertions::assert_eq;

    fn ecue(code: &str, label: &str, kind: ActivityKind, hours: f64) -> Ecue {
        let mut e = Ecue::new(code, label, 1.0, 10.0, vec!["R".to_string()]);
        e.add_activity(Activity {
            kind,
            hours,
            label: None,
        });
        e
    }

    fn texts(row: &GridRow) -> Vec<String> {
        row.cells()
            .unwrap()
            .iter()
            .take(LABEL_COLUMNS)
            .map(Cell::display)
            .collect()
    }

    fn sample_cycle() -> Cycle {
        let mut math = Ue::new("23-PA-S1-MATH", "Mathématiques", "L1", 6, "C");
        math.add_ecue(ecue("S1-MATH-02-ANA", "Analyse", ActivityKind::Lecture, 20.0))
            .unwrap();
        math.add_ecue(ecue("S1-MATH-01-ALG", "Algèbre", ActivityKind::Lecture, 10.0))
            .unwrap();
        let mut info = Ue::new("23-PA-S1-INFO", "Informatique", "L1", 4, "C");
        info.add_ecue(ecue("S1-INFO-01-PRG", "Programmation", ActivityKind::Practical, 12.0))
            .unwrap();
        let mut s1 = Semester::new("S1");
        s1.add_ue(math).unwrap().add_ue(info).unwrap();

        let mut phys = Ue::new("23-PA-S2-PHYS", "Physique", "L1", 5, "C");
        phys.add_ecue(ecue("S2-PHYS-01-MEC", "Mécanique", ActivityKind::Tutorial, 8.0))
            .unwrap();
        let mut s2 = Semester::new("S2");
        s2.add_ue(phys).unwrap();

        let mut cycle = Cycle::new("PA");
        cycle.add_semester(s2).unwrap().add_semester(s1).unwrap();
        cycle
    }

    #[test]
    fn test_row_order_and_totals() {
        let tr = Translations::from_pairs([("MATH", "Maths"), ("INFO", "Info"), ("PHYS", "Physique")]);
        let grid = build_grid(&sample_cycle(), &tr);

        let labels: Vec<Vec<String>> = grid
            .rows
            .iter()
            .map(|r| match r {
                GridRow::Separator => vec!["SKIP".to_string()],
                _ => texts(r),
            })
            .collect();

        let row = |a: &str, b: &str, c: &str| vec![a.to_string(), b.to_string(), c.to_string()];
        assert_eq!(
            labels,
            vec![
                row("S1", "Info", "Programmation"),
                row("S1", "Info", "Total UE"),
                row("S1", "Maths", "Algèbre"),
                row("S1", "Maths", "Analyse"),
                row("S1", "Maths", "Total UE"),
                row("S1", "Total Semestre", "Total Semestre"),
                vec!["SKIP".to_string()],
                row("S2", "Physique", "Mécanique"),
                row("S2", "Physique", "Total UE"),
                row("S2", "Total Semestre", "Total Semestre"),
            ]
        );
    }

    #[test]
    fn test_numeric_columns_follow_measure_order() {
        let grid = build_grid(&sample_cycle(), &Translations::default());
        let semester_total = grid.rows[5].cells().unwrap();

        assert_eq!(semester_total.len(), RECAP_COLUMNS);
        // lecture, remediation, tutorial, practical, personal, exam, total, supervised
        let hours: Vec<String> = semester_total[LABEL_COLUMNS..].iter().map(Cell::display).collect();
        assert_eq!(hours, vec!["30", "", "", "12", "", "", "42", "42"]);
    }

    #[test]
    fn test_empty_cycle_gives_empty_grid() {
        let grid = build_grid(&Cycle::new("PB"), &Translations::default());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_suppression_for_every_measure() {
        for kind in ActivityKind::ALL {
            let mut stats = Stats::new();
            stats.update(kind, 2.0);
            let row = stats_row("S1", "MATH", "Algèbre", &stats);
            let cells = &row.cells().unwrap()[LABEL_COLUMNS..];

            for ((measure, value), cell) in stats.iter().zip(cells) {
                if value > 0.0 {
                    assert_eq!(cell.display(), "2", "{:?} for {:?}", measure, kind);
                } else {
                    assert_eq!(cell.display(), "", "{:?} for {:?}", measure, kind);
                }
            }
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(2.25), "2.25");
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(0.999999), "1");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_tiny_positive_hours_stay_visible() {
        assert_eq!(format_number(0.004), "0.01");
        assert_eq!(format_number(1e-9), "0.01");
        assert_eq!(Cell::Hours(0.004).display(), "0.01");
        assert_eq!(Cell::Hours(1e-9).display(), "0.01");
        assert_eq!(Cell::Hours(0.0).display(), "");
    }
}
