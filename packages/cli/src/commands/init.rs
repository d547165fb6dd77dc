use super::{GlobalArgs, Session};
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Site name used in titles and copy
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Store directory
    #[arg(short, long, default_value = ".siteframe")]
    pub store_dir: String,

    /// Force overwrite existing config and reseed the store
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path, globals: &GlobalArgs) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing site...".bright_blue().bold());

    let mut config = Config {
        store_dir: args.store_dir.clone(),
        ..Config::default()
    };
    if let Some(brand) = args.brand {
        config.brand = brand;
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    // Materialize the seed content so every key exists on disk
    let mut session = Session::open(cwd, globals)?;
    session.store.reset()?;
    let snapshot = session.store.snapshot();
    println!(
        "  {} Seeded store in {}/ ({} pages, {} projects)",
        "✓".green(),
        args.store_dir,
        snapshot.pages.len(),
        snapshot.projects.len()
    );

    println!();
    println!("{}", "✅ Site initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: siteframe page list");
    println!("  2. Run: siteframe render home > index.html");

    Ok(())
}
