use super::{GlobalArgs, Session};
use anyhow::{anyhow, Result};
use clap::Subcommand;
use colored::Colorize;
use siteframe_editor::AdminSurface;
use siteframe_store::MediaUpload;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
pub enum MediaCommand {
    /// List the media library, newest first
    List,

    /// Upload a file as a data URL
    Upload {
        file: PathBuf,

        /// Display name (defaults to the file name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Remove a media item
    Delete { id: String },
}

pub fn media(command: MediaCommand, cwd: &Path, globals: &GlobalArgs) -> Result<()> {
    let Session {
        mut store,
        mut dialogs,
        ..
    } = Session::open(cwd, globals)?;
    let mut admin = AdminSurface::new();

    match command {
        MediaCommand::List => {
            for item in &store.snapshot().media {
                println!(
                    "{:<22} {:<30} {:>10}  {}",
                    item.id.bright_white(),
                    item.name,
                    item.size.as_deref().unwrap_or("-"),
                    item.date.dimmed()
                );
            }
        }

        MediaCommand::Upload { file, name } => {
            let path = cwd.join(&file);
            let name = match name {
                Some(name) => name,
                None => path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .ok_or_else(|| anyhow!("Not a file: {}", file.display()))?,
            };
            let bytes = fs::read(&path)?;
            let item = admin.upload_media(&mut store, &mut dialogs, MediaUpload::from_bytes(name, bytes))?;
            println!(
                "  {} Uploaded {} as {}",
                "✓".green(),
                item.name,
                item.id.bright_white()
            );
        }

        MediaCommand::Delete { id } => {
            admin.delete_media(&mut store, &id)?;
            println!("  {} Deleted media {}", "✓".green(), id);
        }
    }

    Ok(())
}
