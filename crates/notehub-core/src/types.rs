//! Core data types for the Notehub client.
//!
//! - Publisher credentials used to sign requests
//! - Note identifiers assigned by the service
//! - The `NewNote` builder for note creation
//! - Typed views over the JSON objects the service returns

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// API version sent with every request unless the caller picks another.
pub const DEFAULT_API_VERSION: &str = "1.1";

// ============================================================================
// Credentials
// ============================================================================

/// Publisher credentials issued by the service.
///
/// The secret key never leaves the process; it only feeds the request
/// signature.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    publisher_id: String,
    secret_key: String,
}

impl Credentials {
    /// Creates credentials from a publisher ID and publisher secret key.
    pub fn new(publisher_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            publisher_id: publisher_id.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Returns the publisher ID.
    #[must_use]
    pub fn publisher_id(&self) -> &str {
        &self.publisher_id
    }

    /// Returns the publisher secret key.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("publisher_id", &self.publisher_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// ID Types
// ============================================================================

/// Identifier of a note, assigned by the service on creation.
///
/// IDs are date-partitioned paths such as `2014/1/26/test`. The client never
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Creates a NoteId from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NoteId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ============================================================================
// Note creation
// ============================================================================

/// Optional presentation settings for a created note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Color theme, e.g. `solarized-light`.
    pub theme: Option<String>,
    /// Font family for body text.
    pub text_font: Option<String>,
    /// Font family for headers.
    pub header_font: Option<String>,
}

impl DisplayOptions {
    /// Returns true if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.theme.is_none() && self.text_font.is_none() && self.header_font.is_none()
    }

    /// Returns the set options as `(wire name, value)` pairs.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        [
            ("theme", &self.theme),
            ("text-font", &self.text_font),
            ("header-font", &self.header_font),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (name, v.clone())))
        .collect()
    }
}

/// A note waiting to be created.
///
/// Built with [`NewNote::builder`] or [`NewNote::new`]:
///
/// ```
/// use notehub_core::NewNote;
///
/// let note = NewNote::builder()
///     .text("Test note 123.")
///     .password("abc123")
///     .theme("solarized-light")
///     .build();
///
/// assert_eq!(note.text(), "Test note 123.");
/// assert_eq!(note.password(), Some("abc123"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNote {
    text: String,
    password: Option<String>,
    display: DisplayOptions,
}

impl NewNote {
    /// Creates a note with only text set.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Creates a builder for a new note.
    #[must_use]
    pub fn builder() -> NewNoteBuilder {
        NewNoteBuilder::default()
    }

    /// Returns the note text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the password, if one is set.
    ///
    /// An empty password counts as no password: the note will not be
    /// editable later.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }

    /// Returns the display options.
    #[must_use]
    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }
}

/// Builder for [`NewNote`].
#[derive(Debug, Default)]
pub struct NewNoteBuilder {
    text: String,
    password: Option<String>,
    display: DisplayOptions,
}

impl NewNoteBuilder {
    /// Sets the note text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the password that allows later updates.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the theme.
    #[must_use]
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.display.theme = Some(theme.into());
        self
    }

    /// Sets the body text font.
    #[must_use]
    pub fn text_font(mut self, font: impl Into<String>) -> Self {
        self.display.text_font = Some(font.into());
        self
    }

    /// Sets the header font.
    #[must_use]
    pub fn header_font(mut self, font: impl Into<String>) -> Self {
        self.display.header_font = Some(font.into());
        self
    }

    /// Replaces all display options at once.
    #[must_use]
    pub fn display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    /// Builds the note.
    #[must_use]
    pub fn build(self) -> NewNote {
        NewNote {
            text: self.text,
            password: self.password,
            display: self.display,
        }
    }
}

// ============================================================================
// Response views
// ============================================================================

/// A note as returned by the retrieve operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedNote {
    /// Markdown source of the note.
    pub note: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(rename = "longURL")]
    pub long_url: String,
    #[serde(rename = "shortURL")]
    pub short_url: String,
    #[serde(default)]
    pub statistics: Option<NoteStatistics>,
}

/// Publication statistics attached to a retrieved note.
///
/// The service reports every field as a string, or null when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteStatistics {
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub edited: Option<String>,
    #[serde(default)]
    pub views: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
}

/// Result of the create operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedNote {
    #[serde(rename = "noteID")]
    pub note_id: NoteId,
    #[serde(rename = "longURL")]
    pub long_url: String,
    #[serde(rename = "shortURL")]
    pub short_url: String,
}

/// Result of the update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedNote {
    #[serde(rename = "longURL")]
    pub long_url: String,
    #[serde(rename = "shortURL")]
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credentials_debug_hides_secret() {
        let creds = Credentials::new("pid", "very-secret");
        let debug = format!("{:?}", creds);

        assert!(debug.contains("pid"));
        assert!(!debug.contains("very-secret"));
    }

    #[test]
    fn test_note_id_display_and_parse() {
        let id: NoteId = "2014/1/26/test".parse().unwrap();
        assert_eq!(id.to_string(), "2014/1/26/test");
        assert_eq!(id.as_str(), "2014/1/26/test");
    }

    #[test]
    fn test_note_id_serializes_as_plain_string() {
        let id = NoteId::new("2014/1/19/some-test-text-4");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"2014/1/19/some-test-text-4\"");
    }

    #[test]
    fn test_empty_password_counts_as_none() {
        let note = NewNote::builder().text("hello").password("").build();
        assert_eq!(note.password(), None);
    }

    #[test]
    fn test_display_fields_only_include_set_options() {
        let note = NewNote::builder()
            .text("hello")
            .theme("solarized-light")
            .header_font("Chau Philomene One")
            .build();

        let fields = note.display().fields();
        assert_eq!(
            fields,
            vec![
                ("theme", "solarized-light".to_string()),
                ("header-font", "Chau Philomene One".to_string()),
            ]
        );
    }

    #[test]
    fn test_new_notes_do_not_share_display_state() {
        let styled = NewNote::builder().text("a").theme("dark").build();
        let plain = NewNote::new("b");

        assert!(!styled.display().is_empty());
        assert!(plain.display().is_empty());
    }

    #[test]
    fn test_retrieved_note_from_service_json() {
        let value = json!({
            "title": "Test",
            "statistics": {
                "published": "Sun Jan 26 18:52:37 UTC 2014",
                "edited": null,
                "views": "34",
                "publisher": "NoteHub"
            },
            "publisher": "NoteHub",
            "note": "Test\r\n====\r\n\r\ntest test",
            "longURL": "http://notehub.org/2014/1/26/test",
            "shortURL": "http://notehub.org/vbbql"
        });

        let note: RetrievedNote = serde_json::from_value(value).unwrap();
        assert_eq!(note.title.as_deref(), Some("Test"));
        assert_eq!(note.short_url, "http://notehub.org/vbbql");

        let stats = note.statistics.unwrap();
        assert_eq!(stats.edited, None);
        assert_eq!(stats.views.as_deref(), Some("34"));
    }

    #[test]
    fn test_created_note_from_service_json() {
        let value = json!({
            "longURL": "http://notehub.org/2014/1/19/some-test-text-4",
            "shortURL": "http://notehub.org/uzdmy",
            "noteID": "2014/1/19/some-test-text-4"
        });

        let created: CreatedNote = serde_json::from_value(value).unwrap();
        assert_eq!(created.note_id, NoteId::new("2014/1/19/some-test-text-4"));
    }
}
