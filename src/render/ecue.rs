//! ECUE tab: course content, assessments and references.

use super::card::{card_pane, code, field_row, hours_table, section_title, separator, side_table};
use super::markup::{Element, Node};
use super::text::plain;
use crate::model::{Ecue, Evaluation, Reference, ReferenceKind};
use crate::utils::Translations;
use log::debug;

const BOOK_SEARCH_URL: &str = "https://www.google.com/search?q=";

fn pane_id(ecue: &Ecue) -> String {
    format!("div-ecue-{}", ecue.code)
}

fn tab_id(ecue: &Ecue) -> String {
    format!("tab-ecue-{}", ecue.code)
}

pub fn render_ecue_link(ecue: &Ecue) -> Element {
    Element::new("a")
        .text(ecue.label.as_str())
        .raw(" <sup><b><code>[ECUE]</code></b></sup>")
        .class("nav-link link-body-emphasis text-decoration-none rounded ecue d-block")
        .attr("type", "button")
        .attr("role", "tab")
        .id(tab_id(ecue))
        .attr("data-bs-target", format!("#{}", pane_id(ecue)))
        .attr("data-bs-toggle", "tab")
        .attr("aria-selected", "false")
        .attr("aria-controls", pane_id(ecue))
}

pub fn render_ecue(ecue: &Ecue, tr: &Translations) -> Element {
    debug!(
        "Rendering ECUE {} / {}",
        ecue.ue_code.as_deref().unwrap_or("?"),
        ecue.code
    );

    card_pane(
        &pane_id(ecue),
        &tab_id(ecue),
        false,
        vec![ecue.label.as_str().into(), code(format!("[{}]", ecue.code)).into()],
        content(ecue, tr),
        side(ecue, tr),
    )
}

fn content(ecue: &Ecue, tr: &Translations) -> Vec<Node> {
    let mut main: Vec<Node> = Vec::new();

    if let Some(prerequisites) = &ecue.prerequisites {
        main.push(section_title(tr.tr("prerequisites")).into());
        main.push(
            Element::new("div")
                .class("card-text")
                .child(bullets(prerequisites.iter().map(|item| plain(item))))
                .into(),
        );
        main.extend(separator());
    }
    for (key, text) in [("summary", &ecue.summary), ("outline", &ecue.outline)] {
        if let Some(text) = text {
            main.push(section_title(tr.tr(key)).into());
            main.push(Element::new("div").class("card-text").raw(plain(text)).into());
            main.extend(separator());
        }
    }
    if let Some(tlo) = &ecue.tlo {
        main.push(section_title(tr.tr("tlo")).into());
        main.push(
            Element::new("div")
                .class("card-text")
                .child(Element::new("p").raw(plain(tr.tr("tlo-intro"))))
                .child(Element::new("div").class("card-text").raw(plain(tlo)))
                .into(),
        );
        main.extend(separator());
    }
    if !ecue.activities().is_empty() {
        main.push(section_title(tr.tr("activities")).into());
        let labels = ecue
            .activities()
            .iter()
            .filter_map(|a| a.label.as_deref())
            .map(plain);
        main.push(Element::new("div").class("card-text").child(bullets(labels)).into());
        main.extend(separator());
    }
    if !ecue.evaluations().is_empty() {
        main.push(section_title(tr.tr("evaluations")).into());
        main.push(evaluations_table(ecue.evaluations(), tr).into());
        main.push(Element::new("br").into());
        main.push(section_title(tr.tr("grading")).into());
        main.push(
            Element::new("div")
                .class("card-text")
                .children(grade_formula(ecue.evaluations(), tr))
                .into(),
        );
        main.extend(separator());
    }
    if !ecue.references.is_empty() {
        main.push(section_title(tr.tr("references")).into());
        let items = Element::new("ul").children(ecue.references.iter().map(reference_item));
        main.push(Element::new("div").class("card-text").child(items).into());
        main.extend(separator());
    }
    if let Some(others) = &ecue.others {
        main.push(section_title(tr.tr("others")).into());
        main.push(Element::new("div").class("card-text").raw(plain(others)).into());
    }

    main
}

fn side(ecue: &Ecue, tr: &Translations) -> Vec<Node> {
    let labelled = |header: &str, label: &str, code_text: &str| {
        Element::new("tr")
            .child(Element::new("td").class("fw-bold").text(header))
            .child(
                Element::new("td")
                    .text(label)
                    .child(Element::new("br"))
                    .child(code(format!("[{}]", code_text))),
            )
    };

    let info = side_table(
        tr.tr("info"),
        [
            labelled(
                "UE",
                ecue.ue_label.as_deref().unwrap_or_default(),
                ecue.ue_code.as_deref().unwrap_or_default(),
            ),
            labelled("ECUE", &ecue.label, &ecue.code),
            field_row(tr.tr("info-coefficient"), ecue.coefficient.to_string()),
            field_row(tr.tr("info-threshold"), ecue.threshold.to_string()),
        ],
    );

    let mut referent_title = tr.tr("referent").to_string();
    if ecue.referents.len() != 1 {
        referent_title.push('s');
    }
    let referents = side_table(
        &referent_title,
        [Element::new("tr").child(
            Element::new("td").child(Element::new("ul").children(
                ecue.referents
                    .iter()
                    .map(|name| Element::new("li").text(name.as_str())),
            )),
        )],
    );

    vec![
        info.into(),
        referents.into(),
        hours_table(ecue.stats(), tr, true).into(),
        Element::new("br").into(),
        Element::new("br").into(),
    ]
}

fn bullets(items: impl Iterator<Item = String>) -> Element {
    Element::new("ul").children(items.map(|html| Element::new("li").raw(html)))
}

fn evaluations_table(evaluations: &[Evaluation], tr: &Translations) -> Element {
    let header = Element::new("tr").children(
        [
            "evaluations-label",
            "evaluations-kind",
            "evaluations-environment",
            "evaluations-code",
            "evaluations-comments",
        ]
        .map(|key| Element::new("td").text(tr.tr(key))),
    );

    let rows = evaluations.iter().map(|e| {
        Element::new("tr")
            .child(Element::new("td").text(e.label.as_deref().unwrap_or_default()))
            .child(Element::new("td").text(tr.tr(&e.kind)))
            .child(Element::new("td").text(tr.tr(&e.environment)))
            .child(Element::new("td").child(code(format!("[{}]", e.code))))
            .child(Element::new("td").raw(e.comments.as_deref().map(plain).unwrap_or_default()))
    });

    Element::new("table")
        .class("table table-bordered")
        .child(Element::new("thead").class("table-light").child(header))
        .child(Element::new("tbody").children(rows))
}

/// `[grade] = 40%[E1] + 60%[E2]`
pub fn grade_formula(evaluations: &[Evaluation], tr: &Translations) -> Vec<Node> {
    let mut nodes: Vec<Node> = vec![
        code(format!("[{}]", tr.tr("grading-grade"))).into(),
        " = ".into(),
    ];
    for (index, evaluation) in evaluations.iter().enumerate() {
        if index > 0 {
            nodes.push(" + ".into());
        }
        nodes.push(format!("{:.0}%", evaluation.coefficient * 100.0).into());
        nodes.push(code(format!("[{}]", evaluation.code)).into());
    }
    nodes
}

fn reference_item(reference: &Reference) -> Element {
    let label = reference.label.as_deref().unwrap_or_default();
    let item = Element::new("li");
    match reference.kind {
        ReferenceKind::Link => item.child(
            Element::new("a")
                .text(label)
                .attr_opt("href", reference.url.as_deref())
                .attr("target", "_blank"),
        ),
        ReferenceKind::Book => {
            let isbn = reference.isbn13.as_deref().unwrap_or_default();
            item.text(label)
                .text(" (")
                .child(
                    Element::new("a")
                        .text(isbn)
                        .attr("href", format!("{}{}", BOOK_SEARCH_URL, isbn))
                        .attr("target", "_blank"),
                )
                .text(" )")
        }
        ReferenceKind::Other => item.text(label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::ActivityKind;
    use crate::model::Activity;
    use pretty_assertions::assert_eq;

    fn evaluation(code: &str, coefficient: f64) -> Evaluation {
        Evaluation {
            kind: "written".to_string(),
            environment: "on-site".to_string(),
            hours: 2.0,
            code: code.to_string(),
            coefficient,
            label: Some("Partiel".to_string()),
            comments: None,
        }
    }

    #[test]
    fn test_grade_formula() {
        let nodes = grade_formula(&[evaluation("E1", 0.4), evaluation("E2", 0.6)], &Translations::default());
        let html = Element::new("div").children(nodes).render();
        assert_eq!(
            html,
            "<div><code>[grading-grade]</code> = 40%<code>[E1]</code> + 60%<code>[E2]</code></div>"
        );
    }

    #[test]
    fn test_book_reference_links_to_search() {
        let html = reference_item(&Reference {
            kind: ReferenceKind::Book,
            url: None,
            isbn13: Some("9780131103627".to_string()),
            label: Some("The C Programming Language".to_string()),
        })
        .render();
        assert_eq!(
            html,
            r#"<li>The C Programming Language (<a href="https://www.google.com/search?q=9780131103627" target="_blank">9780131103627</a> )</li>"#
        );
    }

    #[test]
    fn test_ecue_pane_sections() {
        let mut ecue = Ecue::new(
            "S1-MATH-01-ALG",
            "Algèbre",
            0.5,
            10.0,
            vec!["A".to_string(), "B".to_string()],
        );
        ecue.summary = Some("Groupes et anneaux".to_string());
        ecue.add_activity(Activity {
            kind: ActivityKind::Lecture,
            hours: 10.0,
            label: Some("Cours".to_string()),
        })
        .add_evaluation(evaluation("E1", 1.0));

        let html = render_ecue(&ecue, &Translations::default()).render();
        assert!(html.contains(r#"id="div-ecue-S1-MATH-01-ALG""#));
        assert!(html.contains("Groupes et anneaux"));
        assert!(html.contains("<li>Cours"));
        assert!(html.contains("100%<code>[E1]</code>"));
        assert!(html.contains(r#"<td colspan="2">referents</td>"#));
        assert!(html.contains("<code>12 h 00</code>"));
        assert!(!html.contains("prerequisites"));
    }
}
