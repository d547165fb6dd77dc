use super::{apply_text_or_json, parse_value, GlobalArgs, Session};
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use siteframe_editor::{Direction, PageBuilder};
use siteframe_schema::SectionKind;
use std::path::Path;

#[derive(Debug, Args)]
pub struct SectionArgs {
    /// Page to edit
    pub page: String,

    #[command(subcommand)]
    pub command: SectionCommand,
}

#[derive(Debug, Subcommand)]
pub enum SectionCommand {
    /// List sections in order
    List,

    /// Append a section with its default content
    Add { kind: String },

    /// Move the section at INDEX one step up or down
    Move { index: usize, direction: String },

    /// Remove a section
    Remove { id: String },

    /// Set a content field (JSON values keep their type)
    Set { id: String, field: String, value: String },

    /// Set a style field
    Style { id: String, field: String, value: String },

    /// Use a media URL for a content field
    Media { id: String, field: String, url: String },

    /// Append to a list field (JSON object, or the type's template)
    ItemAdd {
        id: String,
        field: String,
        item: Option<String>,
    },

    /// Set one field of a list item
    ItemSet {
        id: String,
        field: String,
        index: usize,
        item_field: String,
        value: String,
    },

    /// Remove a list item
    ItemRemove { id: String, field: String, index: usize },
}

pub fn section(args: SectionArgs, cwd: &Path, globals: &GlobalArgs) -> Result<()> {
    let Session {
        mut store,
        mut dialogs,
        ..
    } = Session::open(cwd, globals)?;
    let mut builder = PageBuilder::new();
    builder.select_page(&store, &args.page)?;

    match args.command {
        SectionCommand::List => {
            let doc = builder.current_page(&store)?;
            for (index, section) in doc.sections.iter().enumerate() {
                println!(
                    "{:>2}  {:<16} {}",
                    index,
                    section.id.bright_white(),
                    section.body.type_name()
                );
            }
        }

        SectionCommand::Add { kind } => {
            let kind: SectionKind = kind.parse()?;
            let id = builder.add_section(&mut store, kind)?;
            println!("  {} Added {} section {}", "✓".green(), kind, id.bright_white());
        }

        SectionCommand::Move { index, direction } => {
            let direction: Direction = direction.parse()?;
            let result = builder.move_section(&mut store, index, direction)?;
            if result.changed {
                println!("  {} Moved section {}", "✓".green(), index);
            } else {
                println!("  {} Section {} is already at the edge", "-".dimmed(), index);
            }
        }

        SectionCommand::Remove { id } => {
            if builder.delete_section(&mut store, &mut dialogs, &id)? {
                println!("  {} Removed section {}", "✓".green(), id);
            }
        }

        SectionCommand::Set { id, field, value } => {
            builder.select_section(&store, Some(&id))?;
            apply_text_or_json(&value, |value| builder.set_content_field(&mut store, &field, value))?;
            println!("  {} {}.{} updated", "✓".green(), id, field);
        }

        SectionCommand::Style { id, field, value } => {
            builder.select_section(&store, Some(&id))?;
            apply_text_or_json(&value, |value| builder.set_style_field(&mut store, &field, value))?;
            println!("  {} {} style.{} updated", "✓".green(), id, field);
        }

        SectionCommand::Media { id, field, url } => {
            builder.select_section(&store, Some(&id))?;
            builder.select_media(&mut store, &field, &url)?;
            println!("  {} {}.{} uses {}", "✓".green(), id, field, url);
        }

        SectionCommand::ItemAdd { id, field, item } => {
            builder.select_section(&store, Some(&id))?;
            builder.add_list_item(&mut store, &field, item.as_deref().map(parse_value))?;
            println!("  {} Item added to {}.{}", "✓".green(), id, field);
        }

        SectionCommand::ItemSet {
            id,
            field,
            index,
            item_field,
            value,
        } => {
            builder.select_section(&store, Some(&id))?;
            apply_text_or_json(&value, |value| {
                builder.update_list_item(&mut store, &field, index, &item_field, value)
            })?;
            println!("  {} {}.{}[{}].{} updated", "✓".green(), id, field, index, item_field);
        }

        SectionCommand::ItemRemove { id, field, index } => {
            builder.select_section(&store, Some(&id))?;
            builder.remove_list_item(&mut store, &field, index)?;
            println!("  {} Removed {}.{}[{}]", "✓".green(), id, field, index);
        }
    }

    Ok(())
}
