//! Document shell shared by every cycle page.
//!
//! Stylesheets and scripts are inlined so a generated page is a single
//! self-contained file that can be downloaded from the browser.

use super::markup::Element;
use super::text::pattern;
use crate::model::Cycle;
use crate::utils::config::{CSS_ASSETS, DOWNLOAD_ASSET, JS_ASSETS, LOGO_ASSET};
use crate::utils::error::RenderError;
use crate::utils::Translations;
use chrono::NaiveDateTime;
use log::{debug, info};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

static SVG_WIDTH: OnceLock<Regex> = OnceLock::new();
static SVG_HEIGHT: OnceLock<Regex> = OnceLock::new();

const KATEX_BOOTSTRAP: &str = r#"document.addEventListener("DOMContentLoaded", function() {renderMathInElement(document.body, { delimiters: [{left: "$$", right: "$$", display: true}, {left: "$", right: "$", display: false}, {left: "\\(", right: "\\)", display: false}, {left: "\\[", right: "\\]", display: true}], throwOnError : false }); });"#;

const DOWNLOAD_SCRIPT: &str = r#"
document.getElementById('syllabus-download').addEventListener('click', function() {
    var htmlContent = document.documentElement.outerHTML;
    var blob = new Blob([htmlContent], { type: 'text/html' });
    var url = URL.createObjectURL(blob);
    this.href = url;
});
"#;

/// Static files inlined into every page
#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub css: Vec<String>,
    pub js: Vec<String>,
    pub logo: Option<String>,
    pub download_icon: Option<String>,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read stylesheets, scripts and header images from `dir`
    ///
    /// Every stylesheet and script must exist. The logo and the download
    /// icon are optional.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, RenderError> {
        let dir = dir.as_ref();
        info!("Loading assets from: {}", dir.display());

        let read = |relative: &str| {
            let path = dir.join(relative);
            std::fs::read_to_string(&path).map_err(|source| RenderError::Asset { path, source })
        };
        let css = CSS_ASSETS.iter().map(|&f| read(f)).collect::<Result<Vec<_>, _>>()?;
        let js = JS_ASSETS.iter().map(|&f| read(f)).collect::<Result<Vec<_>, _>>()?;

        let optional = |relative: &str| {
            let found = read(relative).ok();
            if found.is_none() {
                debug!("Optional asset missing: {}", relative);
            }
            found
        };

        Ok(Self {
            css,
            js,
            logo: optional(LOGO_ASSET).map(|svg| scale_svg(&svg)),
            download_icon: optional(DOWNLOAD_ASSET),
        })
    }

    pub fn with_logo(mut self, svg: &str) -> Self {
        self.logo = Some(scale_svg(svg));
        self
    }
}

/// Swap fixed `width`/`height` attributes for a matching `viewBox`
///
/// The SVG then scales to its container. Markup without both attributes is
/// returned unchanged.
pub fn scale_svg(svg: &str) -> String {
    let width = pattern(&SVG_WIDTH, r#"width="([^"]*)""#);
    let height = pattern(&SVG_HEIGHT, r#"height="([^"]*)""#);
    let (Some(w), Some(h)) = (width.captures(svg), height.captures(svg)) else {
        return svg.to_string();
    };

    let view_box = format!(r#"viewBox="0 0 {} {}""#, &w[1], &h[1]);
    let scaled = width.replace(svg, view_box.as_str());
    height.replace(&scaled, "").into_owned()
}

/// Page title: `{title} - {cycle}`
pub fn page_title(cycle: &Cycle, tr: &Translations) -> String {
    format!("{} - {}", tr.tr("title"), tr.tr(&cycle.code))
}

/// Wrap the navigation column and tab content into a full HTML document
pub fn render_shell(
    cycle: &Cycle,
    tr: &Translations,
    assets: &Assets,
    stamp: NaiveDateTime,
    nav: Element,
    panes: Vec<Element>,
) -> String {
    let title = page_title(cycle, tr);

    let mut head = Element::new("head")
        .child(Element::new("title").text(title.as_str()))
        .child(
            Element::new("meta")
                .attr("http-equiv", "Content-Type")
                .attr("content", "text/html; charset=utf-8"),
        )
        .child(Element::new("meta").attr("name", "language").attr("content", tr.tr("lang")))
        .child(Element::new("meta").attr("name", "title").attr("content", title.as_str()));
    for css in &assets.css {
        head.push(Element::new("style").raw(css.as_str()));
    }
    for js in &assets.js {
        head.push(Element::new("script").raw(js.as_str()));
    }
    head.push(Element::new("script").raw(KATEX_BOOTSTRAP));

    let body = Element::new("body").class("bg-light").child(
        Element::new("div")
            .class("container")
            .child(Element::new("div").class("row").child(header(cycle, tr, assets, stamp, &title)))
            .child(Element::new("br"))
            .child(
                Element::new("div")
                    .class("row")
                    .child(
                        Element::new("div").class("col-3").child(
                            Element::new("div")
                                .class("sticky-top overflow-auto d-flex mx-auto")
                                .style("height: 90vh; overflow-y: scroll;")
                                .child(nav),
                        ),
                    )
                    .child(
                        Element::new("div").class("col-9").child(
                            Element::new("div")
                                .class("tab-content")
                                .style("padding-right: 32px")
                                .children(panes),
                        ),
                    ),
            ),
    );

    let html = Element::new("html")
        .attr("lang", tr.tr("lang"))
        .child(head)
        .child(body);

    let mut out = String::from("<!DOCTYPE html>\n");
    html.write_to(&mut out);
    out
}

fn header(
    cycle: &Cycle,
    tr: &Translations,
    assets: &Assets,
    stamp: NaiveDateTime,
    title: &str,
) -> Element {
    let logo = Element::new("div").style("width: 64px; height: 42px;");
    let logo = match &assets.logo {
        Some(svg) => logo.raw(svg.as_str()),
        None => logo,
    };
    let icon = Element::new("div").style("width: 42px; height: 42px;");
    let icon = match &assets.download_icon {
        Some(svg) => icon.raw(svg.as_str()),
        None => icon,
    };

    let heading = Element::new("h2")
        .style("display: flex; vertical-align: middle;")
        .child(logo)
        .child(Element::new("div").style("width: 32px"))
        .child(
            Element::new("a")
                .attr("href", "#")
                .attr("download", format!("Syllabus {}.html", tr.tr(&cycle.code)))
                .id("syllabus-download")
                .child(icon),
        )
        .child(Element::new("div").style("width: 16px"))
        .child(
            Element::new("span")
                .style("color: #102b65; font-size: 1.25em")
                .text(title)
                .text(" ")
                .child(Element::new("code").text(format!("(v{})", stamp.format("%Y-%m-%d %H:%M:%S")))),
        );

    Element::new("div")
        .class("col-12")
        .child(heading)
        .child(Element::new("script").raw(DOWNLOAD_SCRIPT))
}
