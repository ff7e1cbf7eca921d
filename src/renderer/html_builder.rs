//! HTML builder — accumulates grid items and produces the final markup.

use super::constants::*;

// ═══════════════════════════════════════════════════════════════════════
// HtmlBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct HtmlBuilder {
    pub(super) elements: Vec<String>,
    template: String,
}

impl HtmlBuilder {
    pub(super) fn new(template: String) -> Self {
        Self {
            elements: Vec::new(),
            template,
        }
    }

    pub(super) fn build(self) -> String {
        let mut html = format!(
            r#"<grid style="grid-template-columns: {};">"#,
            escape(&self.template)
        );
        html.push('\n');
        for el in &self.elements {
            html.push_str("  ");
            html.push_str(el);
            html.push('\n');
        }
        html.push_str("</grid>\n");
        html
    }

    pub(super) fn push(&mut self, element: String) {
        self.elements.push(element);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Element helpers
// ═══════════════════════════════════════════════════════════════════════

/// `<name class=".." style="..">inner</name>`; `inner` must already be markup.
pub(super) fn element(name: &str, class: Option<&str>, style: Option<&str>, inner: &str) -> String {
    let mut html = format!("<{name}");
    if let Some(class) = class.filter(|c| !c.is_empty()) {
        html.push_str(&format!(r#" class="{}""#, escape(class)));
    }
    if let Some(style) = style {
        html.push_str(&format!(r#" style="{}""#, escape(style)));
    }
    html.push('>');
    html.push_str(inner);
    html.push_str(&format!("</{name}>"));
    html
}

pub(super) fn div(class: &str, inner: &str) -> String {
    element("div", Some(class), None, inner)
}

pub(super) fn span(class: Option<&str>, inner: &str) -> String {
    element("span", class, None, inner)
}

/// Empty grid item that keeps a track occupied.
pub(super) fn nop() -> String {
    element("nop", None, None, "")
}

/// Style for rows that stretch across every track.
pub(super) fn span_all(columns_count: usize) -> String {
    format!("grid-column: span {}", columns_count.max(1))
}

pub(super) fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Wrap a rendered grid in a complete HTML document with the default stylesheet.
pub(super) fn standalone_document(grid: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        DOCUMENT_TITLE, STYLESHEET, grid
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_attributes() {
        assert_eq!(element("nop", None, None, ""), "<nop></nop>");
        assert_eq!(div("note", "C"), r#"<div class="note">C</div>"#);
        assert_eq!(
            element("spacer", None, Some(&span_all(3)), ""),
            r#"<spacer style="grid-column: span 3"></spacer>"#
        );
        assert_eq!(span(Some(""), "x"), "<span>x</span>");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn build_wraps_elements_in_grid() {
        let mut html = HtmlBuilder::new("a b".into());
        html.push(nop());
        assert_eq!(
            html.build(),
            "<grid style=\"grid-template-columns: a b;\">\n  <nop></nop>\n</grid>\n"
        );
    }

    #[test]
    fn empty_chart_still_spans_one_track() {
        assert_eq!(span_all(0), "grid-column: span 1");
    }
}
