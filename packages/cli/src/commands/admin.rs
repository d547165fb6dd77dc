use super::{parse_assignments_like, print_json, GlobalArgs, Session};
use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use clap::Subcommand;
use colored::Colorize;
use siteframe_editor::{AdminSurface, EntityType};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List records of an entity type (land, house, team, testimonial, partner, portfolio, stat, page)
    List { entity: String },

    /// Create or update a record from key=value pairs
    Save {
        entity: String,

        /// Existing record to update; omit to create
        #[arg(long)]
        id: Option<String>,

        /// Field assignments, e.g. title="Destiny Gardens"
        fields: Vec<String>,
    },

    /// Delete a record
    Delete { entity: String, id: String },

    /// Update contact details and hero copy
    SiteConfig { fields: Vec<String> },

    /// Update brand colours and typography
    Design { fields: Vec<String> },

    /// Import land listings from a CSV file
    ImportCsv { file: PathBuf },

    /// Add an assistant knowledge base entry
    KbAdd { topic: String, content: String },

    /// Replace the content of a knowledge base entry
    KbSet { id: String, content: String },
}

pub fn admin(command: AdminCommand, cwd: &Path, globals: &GlobalArgs) -> Result<()> {
    let Session {
        mut store,
        mut dialogs,
        ..
    } = Session::open(cwd, globals)?;
    let mut admin = AdminSurface::new();

    match command {
        AdminCommand::List { entity } => {
            let entity: EntityType = entity.parse()?;
            print_json(&admin.list(&store, entity)?)?;
        }

        AdminCommand::Save { entity, id, fields } => {
            let entity: EntityType = entity.parse()?;
            let form = admin.start_edit(&store, entity, id.as_deref())?.form.clone();
            let fields = parse_assignments_like(&fields, &form)?;
            for (field, value) in fields {
                admin.set_field(&field, value)?;
            }
            let id = admin.save(&mut store)?;
            println!("  {} Saved {} {}", "✓".green(), entity, id.bright_white());
        }

        AdminCommand::Delete { entity, id } => {
            let entity: EntityType = entity.parse()?;
            if admin.delete(&mut store, &mut dialogs, entity, &id)? {
                println!("  {} Deleted {} {}", "✓".green(), entity, id);
            }
        }

        AdminCommand::SiteConfig { fields } => {
            let current = as_form(&store.snapshot().site_config)?;
            admin.save_site_config(&mut store, &parse_assignments_like(&fields, &current)?)?;
            println!("  {} Site settings saved", "✓".green());
        }

        AdminCommand::Design { fields } => {
            let current = as_form(&store.snapshot().global_design)?;
            admin.save_global_design(&mut store, &parse_assignments_like(&fields, &current)?)?;
            println!("  {} Design saved", "✓".green());
        }

        AdminCommand::ImportCsv { file } => {
            let text = fs::read_to_string(cwd.join(file))?;
            admin.import_csv(&mut store, &mut dialogs, &text)?;
        }

        AdminCommand::KbAdd { topic, content } => {
            let id = store.add_knowledge(&topic, &content)?;
            println!("  {} Added knowledge entry {}", "✓".green(), id.bright_white());
        }

        AdminCommand::KbSet { id, content } => {
            store.update_knowledge(&id, &content)?;
            println!("  {} Updated knowledge entry {}", "✓".green(), id);
        }
    }

    Ok(())
}

fn as_form(value: &impl Serialize) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(form) => Ok(form),
        _ => Ok(Map::new()),
    }
}
