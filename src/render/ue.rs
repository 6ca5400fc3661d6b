//! UE tab: description, information, coefficients and hours.

use super::card::{card_pane, code, field_row, hours_table, side_table};
use super::markup::{Element, Node};
use super::text::markdown;
use crate::model::Ue;
use crate::utils::Translations;

fn pane_id(ue: &Ue) -> String {
    format!("div-{}", ue.code)
}

fn tab_id(ue: &Ue) -> String {
    format!("tab-{}", ue.code)
}

pub fn render_ue_link(ue: &Ue, tr: &Translations) -> Element {
    Element::new("a")
        .text(tr.tr(ue.short_code()))
        .raw(" <sup><b><code>[UE]</code></b></sup>")
        .id(tab_id(ue))
        .class("btn btn-toggle d-inline-flex align-items-center rounded border-0 collapsed preambule nav-link")
        .attr("data-bs-toggle", "tab")
        .attr("data-bs-target", format!("#{}", pane_id(ue)))
        .attr("aria-selected", "false")
        .attr("aria-controls", pane_id(ue))
        .attr("role", "tab")
        .attr("type", "button")
}

/// The UE pane; ECUE panes are rendered separately
pub fn render_ue(ue: &Ue, tr: &Translations) -> Element {
    let info = side_table(
        tr.tr("info"),
        [
            field_row(tr.tr("level"), ue.level.as_str()),
            field_row(tr.tr("semester"), ue.semester.as_deref().unwrap_or_default()),
            field_row(tr.tr("ects"), ue.ects.to_string()),
            field_row(tr.tr("coordinator"), ue.coordinator.as_str()),
        ],
    );

    let coefficients = side_table(
        tr.tr("ecue-coefficient"),
        ue.ecues().map(|ecue| {
            Element::new("tr")
                .child(
                    Element::new("td")
                        .text(ecue.label.as_str())
                        .child(code(format!("[{}]", ecue.code))),
                )
                .child(Element::new("td").child(code(ecue.coefficient.to_string())))
        }),
    );

    let main: Vec<Node> = ue
        .description
        .as_deref()
        .map(|text| Element::new("div").raw(markdown(text)).into())
        .into_iter()
        .collect();

    card_pane(
        &pane_id(ue),
        &tab_id(ue),
        false,
        vec![
            ue.label.as_str().into(),
            " [".into(),
            code(ue.code.as_str()).into(),
            "]".into(),
        ],
        main,
        vec![
            info.into(),
            coefficients.into(),
            hours_table(ue.stats(), tr, false).into(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::ActivityKind;
    use crate::model::{Activity, Ecue, Semester};

    #[test]
    fn test_ue_pane_fields() {
        let mut ecue = Ecue::new("S1-MATH-01-ALG", "Algèbre", 0.5, 10.0, vec!["R".to_string()]);
        ecue.add_activity(Activity {
            kind: ActivityKind::Lecture,
            hours: 12.0,
            label: None,
        });
        let mut ue = Ue::new("23-PA-S1-MATH", "Mathématiques", "L1", 6, "A. Smith");
        ue.description = Some("Intro".to_string());
        ue.add_ecue(ecue).unwrap();
        let mut semester = Semester::new("S1");
        semester.add_ue(ue).unwrap();
        let ue = &semester.ues()["23-PA-S1-MATH"];

        let html = render_ue(ue, &Translations::default()).render();
        assert!(html.contains(r#"id="div-23-PA-S1-MATH""#));
        assert!(html.contains("<p>Intro</p>"));
        assert!(html.contains("<td class=\"fw-bold\">semester</td><td><code>S1</code></td>"));
        assert!(html.contains("<td>Algèbre<code>[S1-MATH-01-ALG]</code></td><td><code>0.5</code></td>"));
        assert!(html.contains("<code>12 h 00</code>"));
    }

    #[test]
    fn test_ue_link_uses_short_code() {
        let ue = Ue::new("23-PA-S1-MATH", "Mathématiques", "L1", 6, "C");
        let tr = Translations::from_pairs([("MATH", "Maths")]);
        let html = render_ue_link(&ue, &tr).render();
        assert!(html.starts_with(r#"<a id="tab-23-PA-S1-MATH""#));
        assert!(html.ends_with(">Maths <sup><b><code>[UE]</code></b></sup></a>"));
    }
}
