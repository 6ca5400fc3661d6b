//! HTML page generation.
//!
//! One self-contained page per cycle: a navigation column and a tab per
//! preamble, UE, ECUE and the hours recap.

pub mod card;
pub mod ecue;
pub mod markup;
pub mod nav;
pub mod page;
pub mod preamble;
pub mod text;
pub mod ue;

pub use markup::{Element, Node};
pub use page::Assets;
pub use text::{markdown, plain};

use crate::model::Cycle;
use crate::recap::render_recap;
use crate::utils::Translations;
use chrono::{Local, NaiveDateTime};
use log::debug;

/// Render the page of `cycle`, stamped with the current local time
pub fn render_cycle(cycle: &Cycle, tr: &Translations, assets: &Assets) -> String {
    render_cycle_at(cycle, tr, assets, Local::now().naive_local())
}

/// Render the page of `cycle` with an explicit build stamp
pub fn render_cycle_at(
    cycle: &Cycle,
    tr: &Translations,
    assets: &Assets,
    stamp: NaiveDateTime,
) -> String {
    let mut panes = Vec::new();

    if let Some(preamble) = &cycle.preamble {
        panes.push(preamble::render_preamble(preamble, cycle, tr));
    }
    for semester in cycle.semesters().values() {
        for ue in semester.ues().values() {
            panes.push(ue::render_ue(ue, tr));
            panes.extend(ue.ecues().map(|e| ecue::render_ecue(e, tr)));
        }
    }
    panes.push(render_recap(cycle, tr));
    debug!("Cycle {}: {} tab panes", cycle.code, panes.len());

    page::render_shell(cycle, tr, assets, stamp, nav::render_nav(cycle, tr), panes)
}
