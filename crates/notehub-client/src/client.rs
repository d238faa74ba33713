//! The note service client.

use notehub_core::signature::{create_signature, encode_password, update_signature};
use notehub_core::{Credentials, DEFAULT_API_VERSION, NewNote, NoteId};
use tracing::debug;

use crate::error::{ServiceError, ServiceResult};
use crate::response::{Response, parse_response};
use crate::transport::{ApiRequest, HttpTransport, Method, Transport};

/// Client for the Notehub note API.
///
/// Holds the publisher credentials, the API version and a transport. All
/// three are fixed once built; use [`NoteClient::with_credentials`] to get a
/// client for other credentials.
///
/// ```no_run
/// use notehub_client::{NoteClient, ServiceError};
/// use notehub_core::{NewNote, NoteId};
///
/// let client = NoteClient::new("example_pid", "example_psk");
///
/// let note = client.retrieve_note(&NoteId::new("2014/1/26/test"))?;
/// println!("{}", note["note"]);
///
/// let note = NewNote::builder()
///     .text("Test note 123.")
///     .password("abc123")
///     .build();
/// let created = client.create_note(&note)?;
/// println!("{}", created["longURL"]);
/// # Ok::<(), ServiceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NoteClient<T = HttpTransport> {
    credentials: Credentials,
    version: String,
    transport: T,
}

impl NoteClient<HttpTransport> {
    /// Creates a client using the default API version.
    pub fn new(publisher_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self::with_version(publisher_id, secret_key, DEFAULT_API_VERSION)
    }

    /// Creates a client pinned to a specific API version.
    pub fn with_version(
        publisher_id: impl Into<String>,
        secret_key: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self::with_transport(
            Credentials::new(publisher_id, secret_key),
            version,
            HttpTransport::new(),
        )
    }
}

impl<T: Transport> NoteClient<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(
        credentials: Credentials,
        version: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            credentials,
            version: version.into(),
            transport,
        }
    }

    /// Returns the publisher credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API version sent with each request.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Consumes the client, returning one that signs with `credentials`.
    #[must_use]
    pub fn with_credentials(self, credentials: Credentials) -> Self {
        Self {
            credentials,
            ..self
        }
    }

    /// Retrieves a note.
    ///
    /// The response carries the note text and title, its URLs, and
    /// publication statistics.
    pub fn retrieve_note(&self, note_id: &NoteId) -> ServiceResult<Response> {
        let fields = vec![
            ("noteID", note_id.to_string()),
            ("version", self.version.clone()),
        ];
        self.request(Method::Get, fields)
    }

    /// Creates a note.
    ///
    /// A note created without a password can never be updated. The password,
    /// if any, is sent as its MD5 digest. The response carries the assigned
    /// `noteID` and the note's URLs.
    pub fn create_note(&self, note: &NewNote) -> ServiceResult<Response> {
        let mut fields = vec![
            ("note", note.text().to_string()),
            ("pid", self.credentials.publisher_id().to_string()),
            ("signature", create_signature(&self.credentials, note.text())),
            ("version", self.version.clone()),
        ];
        if let Some(password) = note.password() {
            fields.push(("password", encode_password(password)));
        }
        fields.extend(note.display().fields());

        self.request(Method::Post, fields)
    }

    /// Replaces the text of a note created with a password.
    ///
    /// An empty password is refused without contacting the service.
    pub fn update_note(
        &self,
        note_id: &NoteId,
        new_text: &str,
        password: &str,
    ) -> ServiceResult<Response> {
        if password.is_empty() {
            return Err(ServiceError::new("a password is required to update a note"));
        }

        let encoded_password = encode_password(password);
        let fields = vec![
            ("noteId", note_id.to_string()),
            ("note", new_text.to_string()),
            ("pid", self.credentials.publisher_id().to_string()),
            ("signature", update_signature(note_id, new_text, &encoded_password)),
            ("password", encoded_password),
            ("version", self.version.clone()),
        ];

        self.request(Method::Put, fields)
    }

    fn request(
        &self,
        method: Method,
        fields: Vec<(&'static str, String)>,
    ) -> ServiceResult<Response> {
        let request = ApiRequest::new(method, fields);
        // Values stay out of the log: they include signatures and password digests.
        debug!(
            method = %request.method,
            url = %request.url,
            fields = ?request.field_names(),
            "sending note service request"
        );

        let raw = self.transport.send(&request)?;
        debug!(status = raw.status, bytes = raw.body.len(), "received response");

        parse_response(raw)
    }
}
