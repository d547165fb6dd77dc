use siteframe_evaluator::{RenderedPage, VNode};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur during HTML compilation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(String),

    #[error("Invalid attribute name {name:?} on <{tag}>")]
    InvalidAttributeName { tag: String, name: String },
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// `lang` attribute on the root element
    pub lang: String,
    /// Stylesheet links added to the head
    pub stylesheets: Vec<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            lang: "en".to_string(),
            stylesheets: Vec::new(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a rendered page into a standalone HTML document
pub fn compile_to_html(page: &RenderedPage, options: CompileOptions) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    let lang = escape_html(&ctx.options.lang);
    ctx.add_line(&format!("<html lang=\"{}\">", lang));
    ctx.indent();

    compile_head(page, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();

    for node in &page.nodes {
        compile_node(node, &mut ctx)?;
    }

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    Ok(ctx.get_output())
}

/// Compile nodes without the document shell
pub fn compile_fragment(nodes: &[VNode], options: CompileOptions) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);
    for node in nodes {
        compile_node(node, &mut ctx)?;
    }
    Ok(ctx.get_output())
}

fn compile_head(page: &RenderedPage, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");

    let title = escape_html(&page.title);
    ctx.add_line(&format!("<title>{}</title>", title));
    ctx.add_line(&format!("<meta property=\"og:title\" content=\"{}\">", title));

    if let Some(description) = &page.description {
        let description = escape_html(description);
        ctx.add_line(&format!("<meta name=\"description\" content=\"{}\">", description));
        ctx.add_line(&format!("<meta property=\"og:description\" content=\"{}\">", description));
    }
    if let Some(image) = &page.og_image {
        ctx.add_line(&format!("<meta property=\"og:image\" content=\"{}\">", escape_html(image)));
    }

    for href in ctx.options.stylesheets.clone() {
        ctx.add_line(&format!("<link rel=\"stylesheet\" href=\"{}\">", escape_html(&href)));
    }

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_node(node: &VNode, ctx: &mut Context) -> Result<(), CompileError> {
    match node {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
            key: _,
        } => compile_tag(tag, attributes, styles, children, ctx),

        VNode::Text { content } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&escape_html(content));
            if ctx.options.pretty {
                ctx.add("\n");
            }
            Ok(())
        }

        VNode::Comment { content } => {
            ctx.add_line(&format!("<!-- {} -->", comment_text(content)));
            Ok(())
        }

        VNode::Error { message } => {
            ctx.add_line(&format!(
                "<div class=\"render-error\">{}</div>",
                escape_html(message)
            ));
            Ok(())
        }
    }
}

fn compile_tag(
    name: &str,
    attributes: &BTreeMap<String, String>,
    styles: &BTreeMap<String, String>,
    children: &[VNode],
    ctx: &mut Context,
) -> Result<(), CompileError> {
    if !is_valid_name(name) {
        return Err(CompileError::InvalidTagName(name.to_string()));
    }

    // Opening tag
    if ctx.options.pretty {
        ctx.add_indent();
    }
    ctx.add(&format!("<{}", name));

    for (attr_name, value) in attributes {
        if !is_valid_name(attr_name) {
            return Err(CompileError::InvalidAttributeName {
                tag: name.to_string(),
                name: attr_name.clone(),
            });
        }
        if value.is_empty() && is_boolean_attribute(attr_name) {
            ctx.add(&format!(" {}", attr_name));
        } else {
            ctx.add(&format!(" {}=\"{}\"", attr_name, escape_html(value)));
        }
    }

    if !styles.is_empty() {
        let inline = styles
            .iter()
            .map(|(key, value)| format!("{}: {};", key, value))
            .collect::<Vec<_>>()
            .join(" ");
        ctx.add(&format!(" style=\"{}\"", escape_html(&inline)));
    }

    if is_void(name) {
        ctx.add(">");
        if ctx.options.pretty {
            ctx.add("\n");
        }
        return Ok(());
    }

    ctx.add(">");

    if !children.is_empty() {
        let block = ctx.options.pretty && has_element_children(children);
        if block {
            ctx.add("\n");
            ctx.indent();
            for child in children {
                compile_node(child, ctx)?;
            }
            ctx.dedent();
            ctx.add_indent();
        } else {
            // Inline text stays on the tag's line
            for child in children {
                match child {
                    VNode::Text { content } => ctx.add(&escape_html(content)),
                    other => compile_node(other, ctx)?,
                }
            }
        }
    }

    ctx.add(&format!("</{}>", name));
    if ctx.options.pretty {
        ctx.add("\n");
    }

    Ok(())
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Comment body with no `--` run left, however many dashes are adjacent
fn comment_text(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut previous_dash = false;
    for c in content.chars() {
        if c == '-' && previous_dash {
            out.push(' ');
        }
        previous_dash = c == '-';
        out.push(c);
    }
    out
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':')
}

fn is_boolean_attribute(name: &str) -> bool {
    matches!(
        name,
        "allowfullscreen" | "disabled" | "checked" | "required" | "selected" | "hidden"
    )
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_element_children(children: &[VNode]) -> bool {
    children
        .iter()
        .any(|child| !matches!(child, VNode::Text { .. }))
}
