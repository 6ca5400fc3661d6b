//! Minimal HTML node tree.
//!
//! Renderers build an owned tree of elements, escaped text and raw markup,
//! then serialize it once. Attribute order is insertion order so output is
//! byte-stable.

use std::fmt::Write;

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A child of an element
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Text, escaped on output
    Text(String),
    /// Markup inserted verbatim (converted Markdown, inline SVG)
    Raw(String),
    Element(Element),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Add the attribute only when `value` is `Some`
    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn style(self, value: impl Into<String>) -> Self {
        self.attr("style", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<N: Into<Node>>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn raw(self, markup: impl Into<String>) -> Self {
        self.child(Node::Raw(markup.into()))
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn tag(&self) -> &str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text and raw nodes
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            // Writing into a String cannot fail
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&escape_text(text)),
                Node::Raw(markup) => out.push_str(markup),
                Node::Element(element) => element.write_to(out),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_nested_with_escaping() {
        let td = Element::new("td")
            .attr("title", "a \"b\" & c")
            .text("1 < 2")
            .child(Element::new("code").text("[E1]"));

        assert_eq!(
            td.render(),
            r#"<td title="a &quot;b&quot; &amp; c">1 &lt; 2<code>[E1]</code></td>"#
        );
    }

    #[test]
    fn test_raw_is_verbatim_and_void_has_no_close() {
        let div = Element::new("div")
            .raw("<em>md</em>")
            .child(Element::new("br"));
        assert_eq!(div.render(), "<div><em>md</em><br></div>");
    }

    #[test]
    fn test_attr_opt_and_lookup() {
        let td = Element::new("td")
            .attr_opt("rowspan", Some("2"))
            .attr_opt("colspan", None::<String>);
        assert_eq!(td.get_attr("rowspan"), Some("2"));
        assert_eq!(td.get_attr("colspan"), None);
    }
}
