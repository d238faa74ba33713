//! notehub-client: Blocking client for the Notehub note service
//!
//! This crate provides:
//! - `NoteClient` with the retrieve, create and update operations
//! - Request signing and password hashing (via `notehub-core`)
//! - Uniform response validation into a single `ServiceError`
//! - A `Transport` seam with a blocking reqwest implementation
//!
//! # Usage
//!
//! ```rust,ignore
//! use notehub_client::{ClientConfig, response::into_typed};
//! use notehub_core::{CreatedNote, NewNote};
//!
//! let client = ClientConfig::from_env()?.into_client();
//!
//! let note = NewNote::builder().text("Hello").password("abc123").build();
//! let response = client.create_note(&note)?;
//! let created: CreatedNote = into_typed(response)?;
//! println!("{}", created.long_url);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod transport;

pub use client::NoteClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{ServiceError, ServiceResult};
pub use response::Response;
pub use transport::{ApiRequest, BASE_URL, HttpTransport, Method, RawResponse, Transport};

// Re-export notehub-core for downstream crates
pub use notehub_core;
