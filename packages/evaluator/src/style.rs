//! Section style shell.
//!
//! Wraps a section's template output in a container carrying its
//! presentation attributes. Missing attributes fall back to the site
//! defaults; explicit padding replaces the default padding class.

use crate::vdom::VNode;
use siteframe_schema::SectionStyle;

pub const DEFAULT_BACKGROUND: &str = "bg-white";
pub const DEFAULT_TEXT_COLOR: &str = "text-gray-900";
pub const DEFAULT_PADDING_CLASS: &str = "py-20";
const TRANSITION: &str = "transition-colors duration-300";

/// Apply `style` around `inner`
pub fn shell(style: Option<&SectionStyle>, inner: VNode) -> VNode {
    let empty = SectionStyle::default();
    let style = style.unwrap_or(&empty);

    let mut node = VNode::el("div", "section-shell")
        .with_class(style.background_color.as_deref().unwrap_or(DEFAULT_BACKGROUND))
        .with_class(style.text_color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR));

    match style.padding_top {
        Some(top) => {
            let bottom = style.padding_bottom.unwrap_or(top);
            node = node
                .with_style("padding-top", format!("{}px", top))
                .with_style("padding-bottom", format!("{}px", bottom));
        }
        None => node = node.with_class(DEFAULT_PADDING_CLASS),
    }

    if let Some(align) = style.text_align {
        node = node.with_class(&format!("text-{}", align.as_str()));
    }

    node.with_class(TRANSITION).with_child(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteframe_schema::TextAlign;

    #[test]
    fn test_defaults_without_style() {
        let node = shell(None, VNode::text("x"));
        assert!(node.has_class("bg-white"));
        assert!(node.has_class("text-gray-900"));
        assert!(node.has_class("py-20"));
        assert!(node.has_class("transition-colors"));
    }

    #[test]
    fn test_bottom_padding_follows_top() {
        let style = SectionStyle {
            background_color: Some("bg-gray-50".to_string()),
            padding_top: Some(40),
            text_align: Some(TextAlign::Center),
            ..Default::default()
        };
        let node = shell(Some(&style), VNode::text("x"));

        assert!(node.has_class("bg-gray-50"));
        assert!(!node.has_class("py-20"));
        assert!(node.has_class("text-center"));
        match node {
            VNode::Element { styles, .. } => {
                assert_eq!(styles.get("padding-top").map(String::as_str), Some("40px"));
                assert_eq!(styles.get("padding-bottom").map(String::as_str), Some("40px"));
            }
            other => panic!("expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_bottom_without_top_is_ignored() {
        let style = SectionStyle {
            padding_bottom: Some(10),
            ..Default::default()
        };
        let node = shell(Some(&style), VNode::text("x"));
        assert!(node.has_class("py-20"));
    }
}
