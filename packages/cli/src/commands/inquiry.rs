use super::{GlobalArgs, Session};
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use siteframe_editor::AdminSurface;
use siteframe_schema::InquiryStatus;
use siteframe_store::{InquiryForm, InquiryError, StoreError};
use std::path::Path;

#[derive(Debug, Subcommand)]
pub enum InquiryCommand {
    /// List captured leads, newest first
    List,

    /// Submit the contact form
    Submit(SubmitArgs),

    /// Mark an inquiry as read
    Read { id: String },

    /// Set an inquiry's status (new, read, contacted)
    Status { id: String, status: String },
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub location: String,
    #[arg(long)]
    pub message: String,
    #[arg(long, default_value = "Site Visit")]
    pub purpose: String,
}

pub fn inquiry(command: InquiryCommand, cwd: &Path, globals: &GlobalArgs) -> Result<()> {
    let Session { mut store, .. } = Session::open(cwd, globals)?;

    match command {
        InquiryCommand::List => {
            for lead in &store.snapshot().inquiries {
                let status = match lead.status {
                    InquiryStatus::New => lead.status.to_string().green().bold(),
                    _ => lead.status.to_string().dimmed(),
                };
                println!(
                    "{:<16} {:<10} {:<20} {:<14} {}",
                    lead.id.bright_white(),
                    status,
                    lead.name,
                    lead.phone,
                    lead.purpose
                );
            }
        }

        InquiryCommand::Submit(args) => {
            let form = InquiryForm {
                name: args.name,
                email: args.email,
                phone: args.phone,
                location: args.location,
                purpose: args.purpose,
                message: args.message,
            };
            match store.submit_inquiry(form) {
                Ok(id) => println!("  {} Inquiry {} received", "✓".green(), id.bright_white()),
                Err(StoreError::Inquiry(InquiryError::Invalid(errors))) => {
                    for (field, message) in errors.iter() {
                        eprintln!("  {} {}: {}", "✗".red(), field, message);
                    }
                    return Err(InquiryError::Invalid(errors).into());
                }
                Err(err) => return Err(err.into()),
            }
        }

        InquiryCommand::Read { id } => {
            AdminSurface::new().mark_inquiry_read(&mut store, &id)?;
            println!("  {} Inquiry {} marked read", "✓".green(), id);
        }

        InquiryCommand::Status { id, status } => {
            let status: InquiryStatus = status.parse().map_err(anyhow::Error::msg)?;
            store.set_inquiry_status(&id, status)?;
            println!("  {} Inquiry {} is now {}", "✓".green(), id, status);
        }
    }

    Ok(())
}
