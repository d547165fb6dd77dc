//! # Siteframe HTML Compiler
//!
//! Serializes a [`RenderedPage`](siteframe_evaluator::RenderedPage) into a
//! static HTML document. The head carries the page title and SEO tags
//! (description, Open Graph) taken from the page's meta.

mod compiler;

pub use compiler::{compile_fragment, compile_to_html, CompileError, CompileOptions};
