mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    admin, init, inquiry, media, page, render, section, site, AdminCommand, GlobalArgs, InitArgs,
    InquiryCommand, MediaCommand, PageCommand, RenderArgs, SectionArgs, SiteCommand,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Siteframe CLI - compose, edit and render marketing site pages
#[derive(Parser, Debug)]
#[command(name = "siteframe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Store directory (overrides storeDir in siteframe.config.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a config file and seed the store
    Init(InitArgs),

    /// Render a page to HTML
    Render(RenderArgs),

    /// Manage page documents
    #[command(subcommand)]
    Page(PageCommand),

    /// Edit the sections of a page
    Section(SectionArgs),

    /// Manage records, site settings and design
    #[command(subcommand)]
    Admin(AdminCommand),

    /// Manage the media library
    #[command(subcommand)]
    Media(MediaCommand),

    /// Capture and triage leads
    #[command(subcommand)]
    Inquiry(InquiryCommand),

    /// Theme, activity log, routing and reset
    #[command(subcommand)]
    Site(SiteCommand),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let globals = GlobalArgs {
        store: cli.store,
        yes: cli.yes,
    };

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Init(args) => init(args, &cwd, &globals),
            Command::Render(args) => render(args, &cwd, &globals),
            Command::Page(command) => page(command, &cwd, &globals),
            Command::Section(args) => section(args, &cwd, &globals),
            Command::Admin(command) => admin(command, &cwd, &globals),
            Command::Media(command) => media(command, &cwd, &globals),
            Command::Inquiry(command) => inquiry(command, &cwd, &globals),
            Command::Site(command) => site(command, &cwd, &globals),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
