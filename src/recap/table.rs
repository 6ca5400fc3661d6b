//! Recap tab: the merged hours table of a whole cycle.

use super::grid::{build_grid, Cell, GridRow, LABEL_COLUMNS, RECAP_COLUMNS};
use super::merge::SpanLayout;
use crate::aggregator::Measure;
use crate::model::Cycle;
use crate::render::markup::Element;
use crate::utils::config::TOTAL_PREFIX;
use crate::utils::Translations;
use log::debug;

const SEMESTER_TOTAL_STYLE: &str = "background-color: #B70D7F33; font-weight: bold; ";
const UE_TOTAL_STYLE: &str = "background-color: #B70D7F11; font-style: italic; ";
const EVEN_STRIPE_STYLE: &str = "background-color: #F0FDFD; ";
const ODD_STRIPE_STYLE: &str = "background-color: #FFFFFF; ";
const SEPARATOR_STYLE: &str = "border-left: none; border-right: none; background-color: #00000000;";

pub const RECAP_PANE_ID: &str = "div-recap";
pub const RECAP_TAB_ID: &str = "tab-recap";

/// Highlight of a grid row, picked from its label columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    SemesterTotal,
    UeTotal,
    Stripe { even: bool },
}

impl RowStyle {
    pub fn of(cells: &[Cell], index: usize) -> Self {
        let starts_total =
            |col: usize| cells.get(col).and_then(Cell::as_text).is_some_and(|t| t.starts_with(TOTAL_PREFIX));

        if starts_total(1) {
            RowStyle::SemesterTotal
        } else if starts_total(2) {
            RowStyle::UeTotal
        } else {
            RowStyle::Stripe {
                even: index % 2 == 0,
            }
        }
    }

    /// Style applied to merged label cells past the first column
    fn label_style(self) -> Option<String> {
        match self {
            RowStyle::SemesterTotal => Some(format!("{};", SEMESTER_TOTAL_STYLE)),
            RowStyle::UeTotal => Some(format!("{};", UE_TOTAL_STYLE)),
            RowStyle::Stripe { .. } => None,
        }
    }

    fn numeric_style(self) -> String {
        let highlight = match self {
            RowStyle::SemesterTotal => SEMESTER_TOTAL_STYLE,
            RowStyle::UeTotal => UE_TOTAL_STYLE,
            RowStyle::Stripe { even: true } => EVEN_STRIPE_STYLE,
            RowStyle::Stripe { even: false } => ODD_STRIPE_STYLE,
        };
        format!("text-align: right; {};", highlight)
    }
}

/// Build the recap tab pane of `cycle`
pub fn render_recap(cycle: &Cycle, tr: &Translations) -> Element {
    let grid = build_grid(cycle, tr);

    let labels: Vec<Option<&[Cell]>> = grid
        .rows
        .iter()
        .map(|row| row.cells().map(|cells| &cells[..LABEL_COLUMNS]))
        .collect();
    let layout = SpanLayout::compute(&labels);
    debug!(
        "Recap table for {}: {} rows, {} label cells emitted",
        cycle.code,
        grid.len(),
        layout.len()
    );

    let mut tbody = Element::new("tbody");
    for (index, row) in grid.rows.iter().enumerate() {
        let tr_row = match row {
            GridRow::Separator => Element::new("tr").child(
                Element::new("td")
                    .attr("colspan", RECAP_COLUMNS.to_string())
                    .style(SEPARATOR_STYLE),
            ),
            GridRow::Cells(cells) => cells_row(cells, index, &layout),
        };
        tbody.push(tr_row);
    }

    let table = Element::new("table")
        .class("table table-bordered table-sm")
        .style("vertical-align: middle; ")
        .child(Element::new("thead").child(header_row(tr)))
        .child(tbody);

    Element::new("div")
        .class("tab-pane fade")
        .id(RECAP_PANE_ID)
        .attr("role", "tabpanel")
        .attr("aria-labelledby", RECAP_TAB_ID)
        .child(
            Element::new("div")
                .class("overflow-auto")
                .style("height: 80vh; overflow-y: scroll;")
                .child(table),
        )
}

/// Navigation button opening the recap tab
pub fn render_recap_link(tr: &Translations) -> Element {
    Element::new("a")
        .text(tr.tr("global-hours"))
        .id(RECAP_TAB_ID)
        .class("btn btn-toggle d-inline-flex align-items-center rounded border-0 collapsed preambule nav-link")
        .attr("data-bs-toggle", "tab")
        .attr("data-bs-target", format!("#{}", RECAP_PANE_ID))
        .attr("aria-selected", "true")
        .attr("aria-controls", RECAP_PANE_ID)
        .attr("role", "tab")
        .attr("type", "button")
}

fn header_row(tr: &Translations) -> Element {
    let mut row = Element::new("tr")
        .class("table-secondary fw-bold sticky-top")
        .child(Element::new("td").text(tr.tr("semester")))
        .child(Element::new("td").text(tr.tr("ue")))
        .child(Element::new("td").text(tr.tr("ecue")));
    for measure in Measure::ALL {
        row.push(
            Element::new("td")
                .style("text-align: right;")
                .text(tr.tr(measure.key())),
        );
    }
    row
}

fn cells_row(cells: &[Cell], index: usize, layout: &SpanLayout) -> Element {
    let style = RowStyle::of(cells, index);
    let mut row = Element::new("tr");

    for span in layout.row(index) {
        let mut td = Element::new("td")
            .attr_opt("colspan", span.colspan_attr())
            .attr_opt("rowspan", span.rowspan_attr());
        td = if span.col == 0 {
            td.class("table-secondary")
        } else {
            td.attr_opt("style", style.label_style())
        };
        row.push(td.text(cells[span.col].display()));
    }

    for cell in &cells[LABEL_COLUMNS..] {
        row.push(
            Element::new("td")
                .style(style.numeric_style())
                .text(cell.display()),
        );
    }
    row
}
