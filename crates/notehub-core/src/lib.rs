//! notehub-core: Core types and signatures for the Notehub client
//!
//! This crate provides:
//! - Domain types (`Credentials`, `NoteId`, `NewNote`, response views)
//! - MD5 request signatures and password encoding
//!
//! It performs no I/O; `notehub-client` sends the requests.

pub mod signature;
pub mod types;

pub use types::{
    CreatedNote, Credentials, DEFAULT_API_VERSION, DisplayOptions, NewNote, NewNoteBuilder,
    NoteId, NoteStatistics, RetrievedNote, UpdatedNote,
};
