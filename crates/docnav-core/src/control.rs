//! Clickable controls emitted into rendered pages.
//!
//! Controls are built as typed [`Element`]s whose `onclick` handlers call the
//! page-level toggle functions exported by `docnav-js`. Arguments are embedded
//! as single-quoted JS string literals, and the whole handler is attribute
//! escaped on serialisation.

use crate::markup::Element;
use crate::toggle::triangle_id;
use crate::tree::CLOSED_GLYPH;

/// CSS class of the wrapper around a replace control.
pub const REPLACE_CONTROL_PARENT_CLASS: &str = "optional-replace-control-parent";
/// CSS class of the replace control's text anchor.
pub const REPLACE_CONTROL_CLASS: &str = "optional-replace-control";
/// CSS class of the replace control's glyph anchor.
pub const REPLACE_CONTROL_TRIANGLE_CLASS: &str = "optional-replace-control-triangle";
/// CSS class of a standalone triangle control.
pub const TRIANGLE_CLASS: &str = "optional-triangle";

/// Quote `value` as a single-quoted JS string literal.
pub fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '<' => out.push_str("\\x3C"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn js_call(function: &str, args: &[&str]) -> String {
    let args: Vec<String> = args.iter().map(|arg| js_string_literal(arg)).collect();
    format!("{function}({})", args.join(", "))
}

/// A glyph anchor plus a text anchor that open and close a target section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceControl {
    pub target_id: String,
    pub control_id: String,
    pub open_text: String,
    pub close_text: String,
}

impl ReplaceControl {
    pub fn new(
        target_id: impl Into<String>,
        control_id: impl Into<String>,
        open_text: impl Into<String>,
        close_text: impl Into<String>,
    ) -> Self {
        Self {
            target_id: target_id.into(),
            control_id: control_id.into(),
            open_text: open_text.into(),
            close_text: close_text.into(),
        }
    }

    pub fn triangle_id(&self) -> String {
        triangle_id(&self.control_id)
    }

    /// The `onclick` handler shared by both anchors.
    pub fn on_click(&self) -> String {
        js_call(
            "toggleVisibilityWithReplaceControl",
            &[
                self.target_id.as_str(),
                self.control_id.as_str(),
                self.open_text.as_str(),
                self.close_text.as_str(),
            ],
        )
    }

    /// Controls start closed: ▶ and the open wording.
    pub fn to_element(&self) -> Element {
        let on_click = self.on_click();
        Element::builder("div")
            .class(REPLACE_CONTROL_PARENT_CLASS)
            .child(
                Element::builder("a")
                    .id(self.triangle_id())
                    .class(REPLACE_CONTROL_TRIANGLE_CLASS)
                    .attr("onclick", on_click.clone())
                    .text(CLOSED_GLYPH),
            )
            .child(
                Element::builder("a")
                    .id(self.control_id.clone())
                    .class(REPLACE_CONTROL_CLASS)
                    .attr("onclick", on_click)
                    .text(self.open_text.clone()),
            )
            .build()
    }

    pub fn render(&self) -> String {
        self.to_element().to_html()
    }
}

/// A lone ▶/▼ anchor toggling a target section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangleControl {
    pub target_id: String,
    pub triangle_id: String,
}

impl TriangleControl {
    pub fn new(target_id: impl Into<String>, triangle_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            triangle_id: triangle_id.into(),
        }
    }

    pub fn on_click(&self) -> String {
        js_call(
            "toggleVisibilityWithTriangle",
            &[self.target_id.as_str(), self.triangle_id.as_str()],
        )
    }

    pub fn to_element(&self) -> Element {
        Element::builder("a")
            .id(self.triangle_id.clone())
            .class(TRIANGLE_CLASS)
            .attr("onclick", self.on_click())
            .text(CLOSED_GLYPH)
            .build()
    }

    pub fn render(&self) -> String {
        self.to_element().to_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocument;
    use crate::toggle::toggle_with_replace_control;
    use crate::tree::{DocumentTree, Visibility};

    #[test]
    fn test_js_string_literal_escapes() {
        assert_eq!(js_string_literal("plain"), "'plain'");
        assert_eq!(js_string_literal("it's"), r"'it\'s'");
        assert_eq!(js_string_literal(r"a\b"), r"'a\\b'");
        assert_eq!(js_string_literal("</script>"), r"'\x3C/script>'");
    }

    #[test]
    fn test_replace_control_markup() {
        let control = ReplaceControl::new("uasc", "uasc-ctl", "Show more", "Show less");
        insta::assert_snapshot!(
            control.render(),
            @r#"<div class="optional-replace-control-parent"><a id="uasc-ctl-triangle" class="optional-replace-control-triangle" onclick="toggleVisibilityWithReplaceControl('uasc', 'uasc-ctl', 'Show more', 'Show less')">▶</a><a id="uasc-ctl" class="optional-replace-control" onclick="toggleVisibilityWithReplaceControl('uasc', 'uasc-ctl', 'Show more', 'Show less')">Show more</a></div>"#
        );
    }

    #[test]
    fn test_replace_control_escapes_arguments() {
        let control = ReplaceControl::new("t", "c", "Say \"open\"", "Don't");
        let handler = control.on_click();
        assert_eq!(
            handler,
            r#"toggleVisibilityWithReplaceControl('t', 'c', 'Say "open"', 'Don\'t')"#
        );
        let html = control.render();
        assert!(html.contains("onclick=\"toggleVisibilityWithReplaceControl('t', 'c', 'Say &quot;open&quot;', 'Don\\'t')\""));
        assert!(html.contains(">Say \"open\"</a>"));
    }

    #[test]
    fn test_triangle_control_markup() {
        let control = TriangleControl::new("uasc_optional_1", "uasc_optional_1_triangle");
        insta::assert_snapshot!(
            control.render(),
            @r#"<a id="uasc_optional_1_triangle" class="optional-triangle" onclick="toggleVisibilityWithTriangle('uasc_optional_1', 'uasc_optional_1_triangle')">▶</a>"#
        );
    }

    #[test]
    fn test_emitted_control_drives_toggle() {
        let control = ReplaceControl::new("section", "ctl", "Open", "Close");
        let mut doc = MemoryDocument::from_element(
            Element::builder("body")
                .child(control.to_element())
                .child(Element::builder("div").id("section"))
                .build(),
        );

        let state = toggle_with_replace_control(
            &mut doc,
            &control.target_id,
            &control.control_id,
            &control.open_text,
            &control.close_text,
        )
        .unwrap();
        assert_eq!(state, Visibility::Shown);

        let ctl = doc.element_by_id("ctl").unwrap();
        let tri = doc.element_by_id("ctl-triangle").unwrap();
        assert_eq!(doc.text_content(ctl), "Close");
        assert_eq!(doc.text_content(tri), "▼");
    }
}
