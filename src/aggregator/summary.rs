//! Plain-text workload summary printed by `build --summary`.

use super::Stats;
use crate::model::Cycle;
use crate::utils::Translations;
use log::debug;

const LABEL_WIDTH: usize = 40;

/// Render a boxed per-semester / per-UE hours table
pub fn generate_text_summary(cycle: &Cycle, tr: &Translations) -> String {
    debug!("Summarizing cycle {} ({} semesters)", cycle.code, cycle.semesters().len());

    let mut lines = Vec::new();
    lines.push(format!("  {} - {}", tr.tr("global-hours"), tr.tr(&cycle.code)));
    lines.push("  ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━┳━━━━━━━━━━━━┳━━━━━━━━━━━━┓".to_string());
    lines.push(format!(
        "  ┃ {:<40} ┃ {:>10} ┃ {:>10} ┃ {:>10} ┃",
        "", "total", "supervised", "personal"
    ));
    lines.push("  ┣━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━╋━━━━━━━━━━━━╋━━━━━━━━━━━━┫".to_string());

    for semester in cycle.semesters().values() {
        lines.push(summary_line(&semester.code, semester.stats()));
        for ue in semester.ues().values() {
            lines.push(summary_line(&format!("  {}", ue.label), ue.stats()));
        }
    }

    lines.push("  ┣━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━╋━━━━━━━━━━━━╋━━━━━━━━━━━━┫".to_string());
    lines.push(summary_line(&cycle.code, cycle.stats()));
    lines.push("  ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━┻━━━━━━━━━━━━┻━━━━━━━━━━━━┛".to_string());

    lines.join("\n")
}

fn summary_line(label: &str, stats: &Stats) -> String {
    let label = if label.chars().count() > LABEL_WIDTH {
        let kept: String = label.chars().take(LABEL_WIDTH - 3).collect();
        format!("{}...", kept)
    } else {
        label.to_string()
    };
    format!(
        "  ┃ {:<40} ┃ {:>10} ┃ {:>10} ┃ {:>10} ┃",
        label,
        Stats::format(stats.total()),
        Stats::format(stats.supervised()),
        Stats::format(stats.personal)
    )
}
