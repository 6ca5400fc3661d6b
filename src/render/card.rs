//! Building blocks shared by the preamble, UE and ECUE tabs.

use super::markup::{Element, Node};
use crate::aggregator::{Measure, Stats};
use crate::utils::Translations;

/// A tab pane with a header, a scrolling main column and a sticky side column
pub fn card_pane(
    pane_id: &str,
    tab_id: &str,
    active: bool,
    heading: Vec<Node>,
    main: Vec<Node>,
    side: Vec<Node>,
) -> Element {
    let class = if active {
        "card container tab-pane fade show active"
    } else {
        "card container tab-pane fade"
    };

    Element::new("div")
        .class(class)
        .id(pane_id)
        .attr("role", "tabpanel")
        .attr("aria-labelledby", tab_id)
        .child(
            Element::new("div").class("row").child(
                Element::new("div")
                    .class("col-12")
                    .style("padding: 0")
                    .child(Element::new("div").class("card-header h3").children(heading)),
            ),
        )
        .child(Element::new("br"))
        .child(
            Element::new("div")
                .class("row overflow-auto")
                .style("height: 80vh; overflow-y: scroll;")
                .child(
                    Element::new("div")
                        .class("col-8")
                        .style("padding: 32px;")
                        .children(main),
                )
                .child(
                    Element::new("div")
                        .class("col-4")
                        .style("padding-right: 32px")
                        .child(Element::new("div").class("sticky-top").children(side)),
                ),
        )
}

/// Bordered side table whose first row is a two-column title
pub fn side_table(title: &str, rows: impl IntoIterator<Item = Element>) -> Element {
    Element::new("table")
        .class("table table-bordered")
        .style("vertical-align: middle;")
        .child(
            Element::new("tbody")
                .child(
                    Element::new("tr")
                        .class("table-light fw-bold")
                        .child(Element::new("td").attr("colspan", "2").text(title)),
                )
                .children(rows),
        )
}

/// `label | <code>value</code>` row with a bold label
pub fn field_row(label: &str, value: impl Into<Node>) -> Element {
    Element::new("tr")
        .child(Element::new("td").class("fw-bold").text(label))
        .child(Element::new("td").child(Element::new("code").child(value)))
}

pub fn code(text: impl Into<String>) -> Element {
    Element::new("code").text(text)
}

/// Card section title
pub fn section_title(title: &str) -> Element {
    Element::new("div").class("card-title h4").text(title)
}

/// Visual break between two sections
pub fn separator() -> [Node; 3] {
    [
        Element::new("br").into(),
        Element::new("hr").into(),
        Element::new("br").into(),
    ]
}

/// Hours side table listing every non-zero measure
///
/// With `emphasize`, the derived sums are shaded and the total is bold.
pub fn hours_table(stats: &Stats, tr: &Translations, emphasize: bool) -> Element {
    let rows = stats
        .iter()
        .filter(|(_, hours)| *hours > 0.0)
        .map(|(measure, hours)| {
            let class = match (emphasize, measure) {
                (true, Measure::Total) => Some("table-light fw-bold"),
                (true, m) if m.is_derived() => Some("table-light"),
                _ => None,
            };
            Element::new("tr")
                .attr_opt("class", class)
                .child(Element::new("td").raw(super::text::plain(tr.tr(measure.key()))))
                .child(
                    Element::new("td")
                        .style("text-align: right;")
                        .child(code(Stats::format(hours))),
                )
        });
    side_table(tr.tr("info-hours"), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::ActivityKind;

    #[test]
    fn test_hours_table_skips_zero_measures() {
        let mut stats = Stats::new();
        stats.update(ActivityKind::Lecture, 1.5);
        let html = hours_table(&stats, &Translations::default(), true).render();

        assert!(html.contains("<code>1 h 30</code>"));
        assert!(html.contains(r#"<tr class="table-light fw-bold"><td>total"#));
        assert!(!html.contains("remediation"));
        assert!(!html.contains("personal"));
    }

    #[test]
    fn test_pane_active_class() {
        let pane = card_pane("div-x", "tab-x", true, vec![], vec![], vec![]);
        assert_eq!(pane.get_attr("class"), Some("card container tab-pane fade show active"));
        assert_eq!(pane.get_attr("aria-labelledby"), Some("tab-x"));
    }
}
