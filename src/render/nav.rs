//! Left-hand navigation: preamble, semesters, UEs, ECUEs and the recap.

use super::ecue::render_ecue_link;
use super::markup::Element;
use super::preamble::render_preamble_link;
use super::ue::render_ue_link;
use crate::model::{Cycle, EcueSlot, Semester, Ue};
use crate::recap::render_recap_link;
use crate::utils::Translations;

const TOGGLE_CLASS: &str = "btn btn-toggle d-inline-flex align-items-center rounded border-0 collapsed";
const LIST_CLASS: &str = "btn-toggle-nav list-unstyled fw-normal pb-1";

pub fn render_nav(cycle: &Cycle, tr: &Translations) -> Element {
    let mut nav = Element::new("ul").class(LIST_CLASS).attr("role", "tablist");

    if let Some(preamble) = &cycle.preamble {
        nav.push(nav_item("mb-1 nav-item").child(render_preamble_link(preamble, tr)));
    }
    for semester in cycle.semesters().values() {
        nav.push(semester_entry(semester, tr));
    }
    nav.push(nav_item("mb-1 nav-item").child(render_recap_link(tr)));
    nav
}

fn nav_item(class: &str) -> Element {
    Element::new("li").class(class).attr("role", "presentation")
}

/// Collapsible entry: a toggle button and the list it opens
fn collapsible(class: &str, button: Element, target: String, items: Vec<Element>) -> Element {
    Element::new("li")
        .class(class)
        .child(
            button
                .attr("data-bs-toggle", "collapse")
                .attr("data-bs-target", format!("#{}", target))
                .attr("aria-expanded", "false"),
        )
        .child(
            Element::new("div")
                .class("collapse")
                .id(target)
                .child(Element::new("ul").class(LIST_CLASS).children(items)),
        )
}

fn semester_entry(semester: &Semester, tr: &Translations) -> Element {
    let button = Element::new("button")
        .class(TOGGLE_CLASS)
        .text(tr.tr(&semester.code))
        .raw(format!("<sup><b><code>[{}]</code></b></sup>", semester.code));
    let ues = semester.ues().values().map(|ue| ue_entry(ue, tr)).collect();

    collapsible("mb-1 ms-3", button, format!("nav-sem-{}", semester.code), ues)
}

fn ue_entry(ue: &Ue, tr: &Translations) -> Element {
    let button = Element::new("button")
        .class(TOGGLE_CLASS)
        .text(tr.tr(ue.short_code()));

    let mut items = vec![nav_item("mb-1 ms-2 nav-item").child(render_ue_link(ue, tr))];
    for (key, slot) in ue.slots() {
        match slot {
            EcueSlot::Single(ecue) => {
                items.push(nav_item("mb-1 ms-2 nav-item").child(render_ecue_link(ecue)));
            }
            EcueSlot::Group(group) => {
                let toggle = Element::new("button")
                    .class(format!("{} text-start", TOGGLE_CLASS))
                    .text(tr.tr(key));
                let links = group
                    .iter()
                    .map(|ecue| nav_item("mb-1 ms-2 nav-item").child(render_ecue_link(ecue)))
                    .collect();
                items.push(collapsible(
                    "mb-1 ms-2",
                    toggle,
                    format!("nav-sub-{}-{}", ue.code, key),
                    links,
                ));
            }
        }
    }

    collapsible("mb-1 ms-3", button, format!("nav-ue-{}", ue.code), items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ecue, Preamble};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nav_lists_groups_under_a_toggle() {
        let mut ue = Ue::new("23-PA-S1-MATH", "Mathématiques", "L1", 6, "C");
        ue.add_ecue(Ecue::new("S1-MATH-01-ALG", "Algèbre", 1.0, 10.0, vec![])).unwrap();
        ue.add_ecue(Ecue::new("S1-MATH-OPT-01-GEO", "Géométrie", 0.5, 10.0, vec![])).unwrap();
        let mut semester = Semester::new("S1");
        semester.add_ue(ue).unwrap();
        let mut cycle = Cycle::new("PA");
        cycle.preamble = Some(Preamble {
            code: "PA".to_string(),
            description: String::new(),
        });
        cycle.add_semester(semester).unwrap();

        let nav = render_nav(&cycle, &Translations::default());
        // preamble, one semester, recap
        assert_eq!(nav.elements().count(), 3);

        let html = nav.render();
        assert!(html.contains(r#"id="nav-sem-S1""#));
        assert!(html.contains(r#"id="nav-ue-23-PA-S1-MATH""#));
        assert!(html.contains(r#"id="nav-sub-23-PA-S1-MATH-OPT""#));
        assert!(html.contains(r##"data-bs-target="#div-ecue-S1-MATH-OPT-01-GEO""##));
    }
}
