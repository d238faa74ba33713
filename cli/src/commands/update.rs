//! UPDATE command - Replace the text of an existing note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use notehub_client::{NoteClient, Transport};
use notehub_core::{NoteId, UpdatedNote};

use super::{HumanReadable, output, read_text, require_credentials};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Note ID to update
    pub note_id: NoteId,

    /// New note text (use @filename to read from file, or - for stdin)
    pub text: String,

    /// Password the note was created with
    #[arg(short, long)]
    pub password: String,
}

impl HumanReadable for UpdatedNote {
    fn print_human(&self) {
        println!("{}", "Note updated successfully!".green().bold());
        println!();
        println!("  {} {}", "Long URL:".cyan(), self.long_url);
        println!("  {} {}", "Short URL:".cyan(), self.short_url);
    }
}

/// Execute the update command.
pub fn execute<T: Transport>(client: &NoteClient<T>, human: bool, args: UpdateArgs) -> Result<()> {
    require_credentials(client)?;

    let text = read_text(args.text)?;
    let response = client.update_note(&args.note_id, &text, &args.password)?;

    output::<UpdatedNote>(response, human)
}
