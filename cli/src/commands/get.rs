//! GET command - Retrieve a note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use notehub_client::{NoteClient, Transport};
use notehub_core::{NoteId, RetrievedNote};

use super::{HumanReadable, output};

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Note ID, e.g. 2014/1/26/test
    pub note_id: NoteId,
}

impl HumanReadable for RetrievedNote {
    fn print_human(&self) {
        if let Some(title) = &self.title {
            println!("{}", title.green().bold());
            println!("{}", "=".repeat(60));
        }
        println!();

        println!("  {} {}", "Long URL:".cyan(), self.long_url);
        println!("  {} {}", "Short URL:".cyan(), self.short_url);
        if let Some(stats) = &self.statistics {
            if let Some(published) = &stats.published {
                println!("  {} {}", "Published:".cyan(), published);
            }
            if let Some(edited) = &stats.edited {
                println!("  {} {}", "Edited:".cyan(), edited);
            }
            if let Some(views) = &stats.views {
                println!("  {} {}", "Views:".cyan(), views);
            }
        }

        println!();
        println!("{}", "Content:".yellow());
        println!("{}", "-".repeat(60));
        println!("{}", self.note);
        println!("{}", "-".repeat(60));
    }
}

/// Execute the get command.
pub fn execute<T: Transport>(client: &NoteClient<T>, human: bool, args: GetArgs) -> Result<()> {
    let response = client.retrieve_note(&args.note_id)?;

    output::<RetrievedNote>(response, human)
}
