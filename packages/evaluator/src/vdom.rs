use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<VNode>,
        /// Stable key for list items (section id, record id)
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },

    /// Text node
    Text { content: String },

    /// Comment node
    Comment { content: String },

    /// Error node (shows a problem inline instead of failing the page)
    Error { message: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
            key: None,
        }
    }

    /// Element with a class list
    pub fn el(tag: impl Into<String>, class: &str) -> Self {
        Self::element(tag).with_class(class)
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        VNode::Comment {
            content: content.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        VNode::Error {
            message: message.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    /// Append classes to the `class` attribute; blank input is ignored
    pub fn with_class(mut self, class: &str) -> Self {
        let class = class.trim();
        if class.is_empty() {
            return self;
        }
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes
                .entry("class".to_string())
                .and_modify(|existing| {
                    existing.push(' ');
                    existing.push_str(class);
                })
                .or_insert_with(|| class.to_string());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        if let VNode::Element {
            key: ref mut node_key,
            ..
        } = self
        {
            *node_key = Some(key.into());
        }
        self
    }

    /// Append a text child when `content` is present
    pub fn with_text(self, content: Option<&str>) -> Self {
        match content {
            Some(content) => self.with_child(VNode::text(content)),
            None => self,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            VNode::Text { content } => out.push_str(content),
            VNode::Element { children, .. } => children.iter().for_each(|c| c.collect_text(out)),
            VNode::Comment { .. } | VNode::Error { .. } => {}
        }
    }

    /// Depth-first search for elements carrying `class`
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a VNode> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if node.has_class(class) {
                found.push(node);
            }
        });
        found
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a VNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// A rendered page: document title plus root nodes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderedPage {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    pub nodes: Vec<VNode>,
}

impl RenderedPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn add_node(&mut self, node: VNode) {
        self.nodes.push(node);
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&VNode> {
        self.nodes.iter().flat_map(|n| n.find_by_class(class)).collect()
    }

    pub fn text_content(&self) -> String {
        self.nodes.iter().map(VNode::text_content).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_class_appends() {
        let node = VNode::el("div", "a b").with_class("c").with_class("  ");
        assert_eq!(node.attr("class"), Some("a b c"));
        assert!(node.has_class("b"));
        assert!(!node.has_class("d"));
    }

    #[test]
    fn test_text_content_skips_comments() {
        let node = VNode::element("p")
            .with_child(VNode::text("Hello "))
            .with_child(VNode::comment("hidden"))
            .with_child(VNode::element("b").with_child(VNode::text("world")));
        assert_eq!(node.text_content(), "Hello world");
    }
}
