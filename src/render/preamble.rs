//! Preamble tab: cycle description and ECTS per semester.

use super::card::{card_pane, code};
use super::markup::{Element, Node};
use super::text::markdown;
use crate::model::{Cycle, Preamble};
use crate::utils::Translations;

fn pane_id(preamble: &Preamble) -> String {
    format!("div-{}-preamble", preamble.code)
}

fn tab_id(preamble: &Preamble) -> String {
    format!("tab-{}-preamble", preamble.code)
}

/// Navigation button; the preamble is the tab shown on load
pub fn render_preamble_link(preamble: &Preamble, tr: &Translations) -> Element {
    Element::new("a")
        .text(tr.tr("preamble"))
        .id(tab_id(preamble))
        .class("btn btn-toggle d-inline-flex align-items-center rounded border-0 collapsed preambule nav-link active")
        .attr("data-bs-toggle", "tab")
        .attr("data-bs-target", format!("#{}", pane_id(preamble)))
        .attr("aria-selected", "true")
        .attr("aria-controls", pane_id(preamble))
        .attr("role", "tab")
        .attr("type", "button")
}

pub fn render_preamble(preamble: &Preamble, cycle: &Cycle, tr: &Translations) -> Element {
    let side: Vec<Node> = cycle
        .semesters()
        .values()
        .map(|semester| {
            let title = Element::new("tr").class("table-light fw-bold").child(
                Element::new("td")
                    .attr("colspan", "2")
                    .text(tr.tr("ects"))
                    .text(" - ")
                    .child(code(semester.code.as_str())),
            );
            let rows = semester.ues().values().map(|ue| {
                Element::new("tr")
                    .child(
                        Element::new("td")
                            .text(ue.label.as_str())
                            .child(code(format!("[{}]", ue.code))),
                    )
                    .child(Element::new("td").child(code(ue.ects.to_string())))
            });

            Element::new("table")
                .class("table table-bordered")
                .style("vertical-align: middle;")
                .child(Element::new("tbody").child(title).children(rows))
                .into()
        })
        .collect();

    card_pane(
        &pane_id(preamble),
        &tab_id(preamble),
        true,
        vec![tr.tr("preamble-header").into()],
        vec![Element::new("div").raw(markdown(&preamble.description)).into()],
        side,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Semester, Ue};

    #[test]
    fn test_preamble_lists_ects_per_semester() {
        let mut semester = Semester::new("S1");
        semester
            .add_ue(Ue::new("23-PA-S1-MATH", "Mathématiques", "L1", 6, "C"))
            .unwrap();
        let mut cycle = Cycle::new("PA");
        cycle.add_semester(semester).unwrap();
        let preamble = Preamble {
            code: "PA".to_string(),
            description: "**Bienvenue**".to_string(),
        };

        let html = render_preamble(&preamble, &cycle, &Translations::default()).render();
        assert!(html.contains(r#"id="div-PA-preamble""#));
        assert!(html.contains("<strong>Bienvenue</strong>"));
        assert!(html.contains("ects - <code>S1</code>"));
        assert!(html.contains("<td>Mathématiques<code>[23-PA-S1-MATH]</code></td><td><code>6</code></td>"));
    }
}
