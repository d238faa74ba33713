//! CREATE command - Publish a new note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use notehub_client::{NoteClient, Transport};
use notehub_core::{CreatedNote, DisplayOptions, NewNote};

use super::{HumanReadable, output, read_text, require_credentials};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Note text in Markdown (use @filename to read from file, or - for stdin)
    pub text: String,

    /// Password allowing later updates; without one the note is read-only
    #[arg(short, long)]
    pub password: Option<String>,

    /// Color theme, e.g. solarized-light
    #[arg(long)]
    pub theme: Option<String>,

    /// Font for body text
    #[arg(long)]
    pub text_font: Option<String>,

    /// Font for headers
    #[arg(long)]
    pub header_font: Option<String>,
}

impl HumanReadable for CreatedNote {
    fn print_human(&self) {
        println!("{}", "Note created successfully!".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.note_id);
        println!("  {} {}", "Long URL:".cyan(), self.long_url);
        println!("  {} {}", "Short URL:".cyan(), self.short_url);
    }
}

/// Execute the create command.
pub fn execute<T: Transport>(client: &NoteClient<T>, human: bool, args: CreateArgs) -> Result<()> {
    require_credentials(client)?;

    let mut builder = NewNote::builder()
        .text(read_text(args.text)?)
        .display(DisplayOptions {
            theme: args.theme,
            text_font: args.text_font,
            header_font: args.header_font,
        });
    if let Some(password) = args.password {
        builder = builder.password(password);
    }

    let response = client.create_note(&builder.build())?;

    output::<CreatedNote>(response, human)
}
