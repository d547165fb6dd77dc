use super::{GlobalArgs, Session};
use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use siteframe_editor::{Dialogs, ViewRoute};
use std::path::Path;

#[derive(Debug, Subcommand)]
pub enum SiteCommand {
    /// Show the colour theme, or flip it with --toggle
    Theme {
        #[arg(long)]
        toggle: bool,
    },

    /// Recent admin actions, newest first
    Activity,

    /// Resolve a "?view=..&type=.." query to a screen or page
    Route { query: String },

    /// Wipe the store and restore first-run content
    Reset,
}

pub fn site(command: SiteCommand, cwd: &Path, globals: &GlobalArgs) -> Result<()> {
    let Session {
        mut store,
        mut dialogs,
        ..
    } = Session::open(cwd, globals)?;

    match command {
        SiteCommand::Theme { toggle } => {
            let theme = if toggle { store.toggle_theme()? } else { store.theme() };
            println!("{}", serde_json::to_value(theme)?.as_str().unwrap_or_default());
        }

        SiteCommand::Activity => {
            for entry in &store.snapshot().activity {
                println!(
                    "{}  {:<12} {:<10} {}  {}",
                    entry.timestamp.dimmed(),
                    entry.action.bright_white(),
                    entry.module,
                    entry.details,
                    entry.user.dimmed()
                );
            }
        }

        SiteCommand::Route { query } => {
            let route = ViewRoute::from_query(&query);
            match route.resolve_page(store.snapshot()) {
                Some(doc) => println!("page {} ({} sections)", doc.id.bright_white(), doc.sections.len()),
                None => println!("screen {}", route.view.as_str().bright_white()),
            }
            for (key, value) in &route.params {
                println!("  {} = {}", key, value);
            }
        }

        SiteCommand::Reset => {
            if dialogs.confirm("Reset all content to first-run data?") {
                store.reset()?;
                println!("  {} Store reset", "✓".green());
            }
        }
    }

    Ok(())
}
