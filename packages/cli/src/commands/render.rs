use super::{GlobalArgs, Session};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use siteframe_compiler_html::{compile_fragment, compile_to_html, CompileOptions};
use siteframe_editor::ViewRoute;
use siteframe_evaluator::{Evaluator, RevealTracker};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Page id, or a query string such as "?view=about"
    pub page: String,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit body markup only
    #[arg(long)]
    pub fragment: bool,

    /// Disable pretty printing
    #[arg(long)]
    pub compact: bool,

    /// Emit the virtual DOM as JSON instead of HTML
    #[arg(long)]
    pub json: bool,

    /// Mark every section as already revealed
    #[arg(long)]
    pub revealed: bool,

    /// Extra stylesheet links for the head
    #[arg(long = "stylesheet")]
    pub stylesheets: Vec<String>,
}

pub fn render(args: RenderArgs, cwd: &Path, globals: &GlobalArgs) -> Result<()> {
    let session = Session::open(cwd, globals)?;
    let snapshot = session.store.snapshot();

    let page_id = if args.page.starts_with('?') {
        ViewRoute::from_query(&args.page).view.as_str().to_string()
    } else {
        args.page.clone()
    };

    let reveal = if args.revealed {
        match snapshot.page(&page_id) {
            Some(doc) => RevealTracker::all_visible(doc.sections.iter().map(|s| s.id.as_str())),
            None => RevealTracker::new(),
        }
    } else {
        RevealTracker::new()
    };

    let evaluator = Evaluator::with_options(session.config.render_options());
    let rendered = evaluator.render_page(snapshot, &page_id, &reveal)?;

    let output = if args.json {
        serde_json::to_string_pretty(&rendered)?
    } else {
        let options = CompileOptions {
            pretty: !args.compact,
            stylesheets: args.stylesheets,
            ..CompileOptions::default()
        };
        if args.fragment {
            compile_fragment(&rendered.nodes, options)?
        } else {
            compile_to_html(&rendered, options)?
        }
    };

    match args.out {
        Some(path) => {
            let path = cwd.join(path);
            fs::write(&path, output)?;
            eprintln!("  {} {} → {}", "✓".green(), page_id, path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}
