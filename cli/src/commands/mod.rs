//! Command implementations for the notehub CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable formatting for its response view

pub mod create;
pub mod get;
pub mod update;

use anyhow::{Result, bail};
use notehub_client::response::into_typed;
use notehub_client::{NoteClient, Response, Transport};
use serde::de::DeserializeOwned;

/// Print a response as JSON, or through its typed view in human mode.
pub fn output<T: DeserializeOwned + HumanReadable>(response: Response, human: bool) -> Result<()> {
    if human {
        let view: T = into_typed(response)?;
        view.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Fail early when a signed operation has no credentials to sign with.
pub fn require_credentials<T: Transport>(client: &NoteClient<T>) -> Result<()> {
    let credentials = client.credentials();
    if credentials.publisher_id().is_empty() || credentials.secret_key().is_empty() {
        bail!("a publisher ID and secret key are required (set NOTEHUB_PID and NOTEHUB_PSK)");
    }
    Ok(())
}

/// Resolve note text: `-` reads stdin, `@path` reads a file, anything else is literal.
pub fn read_text(arg: String) -> Result<String> {
    if arg == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(path) = arg.strip_prefix('@') {
        Ok(std::fs::read_to_string(path)?)
    } else {
        Ok(arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notehub_client::{ApiRequest, RawResponse, ServiceResult};
    use notehub_core::Credentials;

    struct NoNetwork;

    impl Transport for NoNetwork {
        fn send(&self, _request: &ApiRequest) -> ServiceResult<RawResponse> {
            unreachable!("no request expected")
        }
    }

    #[test]
    fn test_read_text_literal() {
        assert_eq!(read_text("hello".to_string()).unwrap(), "hello");
    }

    #[test]
    fn test_read_text_from_file() {
        let path = std::env::temp_dir().join(format!("notehub-cli-{}.md", std::process::id()));
        std::fs::write(&path, "# From file").unwrap();

        let text = read_text(format!("@{}", path.display())).unwrap();
        assert_eq!(text, "# From file");

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_require_credentials() {
        let anonymous = NoteClient::with_transport(Credentials::new("", ""), "1.1", NoNetwork);
        assert!(require_credentials(&anonymous).is_err());

        let publisher =
            NoteClient::with_transport(Credentials::new("pid", "psk"), "1.1", NoNetwork);
        assert!(require_credentials(&publisher).is_ok());
    }
}
