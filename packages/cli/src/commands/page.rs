use super::{print_json, GlobalArgs, Session};
use anyhow::{anyhow, Result};
use clap::Subcommand;
use colored::Colorize;
use siteframe_editor::{AdminSurface, EntityType, PageBuilder};
use std::path::Path;

#[derive(Debug, Subcommand)]
pub enum PageCommand {
    /// List page documents
    List,

    /// Print a page document as JSON
    Show { id: String },

    /// Create a custom page (prompts when no slug is given)
    Add { slug: Option<String> },

    /// Delete a custom page
    Delete { id: String },

    /// Set a meta field (title, description, ogImage)
    Meta { id: String, field: String, value: String },

    /// Publish the site
    Publish,
}

pub fn page(command: PageCommand, cwd: &Path, globals: &GlobalArgs) -> Result<()> {
    let Session {
        mut store,
        mut dialogs,
        ..
    } = Session::open(cwd, globals)?;
    let mut builder = PageBuilder::new();

    match command {
        PageCommand::List => {
            for doc in &store.snapshot().pages {
                let flag = if doc.is_system { "system".dimmed() } else { "custom".normal() };
                println!(
                    "{:<20} {:<30} {:>2} sections  {}",
                    doc.id.bright_white(),
                    doc.title,
                    doc.sections.len(),
                    flag
                );
            }
        }

        PageCommand::Show { id } => {
            let doc = store
                .snapshot()
                .page(&id)
                .ok_or_else(|| anyhow!("Page '{}' not found", id))?;
            print_json(doc)?;
        }

        PageCommand::Add { slug } => {
            let created = match slug {
                Some(slug) => Some(builder.add_page_with_slug(&mut store, &mut dialogs, &slug)?),
                None => builder.add_page(&mut store, &mut dialogs)?,
            };
            match created {
                Some(id) => println!("  {} Created page {}", "✓".green(), id.bright_white()),
                None => println!("  {} Cancelled", "-".dimmed()),
            }
        }

        PageCommand::Delete { id } => {
            let mut admin = AdminSurface::new();
            if admin.delete(&mut store, &mut dialogs, EntityType::Page, &id)? {
                println!("  {} Deleted page {}", "✓".green(), id);
            } else {
                println!("  {} Kept page {}", "-".dimmed(), id);
            }
        }

        PageCommand::Meta { id, field, value } => {
            builder.select_page(&store, &id)?;
            builder.set_meta_field(&mut store, &field, &value)?;
            println!("  {} {}.meta.{} updated", "✓".green(), id, field);
        }

        PageCommand::Publish => {
            builder.publish(&mut dialogs);
        }
    }

    Ok(())
}
