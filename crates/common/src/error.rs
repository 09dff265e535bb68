//! Common error types shared across crates.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Top-level entrypoint error type.
///
/// Every variant is fatal. Variants map to `sysexits.h` codes so a container
/// orchestrator can tell configuration failures from server failures:
/// - [`EntrypointError::MissingConfiguration`] → 78 (`EX_CONFIG`)
/// - [`EntrypointError::TemplateRead`] → 66 (`EX_NOINPUT`)
/// - [`EntrypointError::WriteFailure`] → 73 (`EX_CANTCREAT`)
/// - [`EntrypointError::LaunchFailure`] → 69 (`EX_UNAVAILABLE`)
/// - [`EntrypointError::Render`] → 70 (`EX_SOFTWARE`)
#[derive(Debug, Error)]
pub enum EntrypointError {
    /// A required environment variable is unset or empty.
    #[error("missing configuration: {key} is required and must not be empty")]
    MissingConfiguration { key: &'static str },

    /// The server config template could not be opened or read.
    #[error("failed to read template {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The server executable could not be found or invoked.
    #[error("failed to launch `{command}`: {source}")]
    LaunchFailure {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The frontend config document could not be encoded.
    #[error("failed to encode frontend config: {0}")]
    Render(#[from] serde_json::Error),
}

impl EntrypointError {
    /// Returns the process exit status that should be used for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            EntrypointError::MissingConfiguration { .. } => 78,
            EntrypointError::TemplateRead { .. } => 66,
            EntrypointError::WriteFailure { .. } => 73,
            EntrypointError::LaunchFailure { .. } => 69,
            EntrypointError::Render(_) => 70,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_err() -> io::Error {
        io::Error::from(io::ErrorKind::PermissionDenied)
    }

    #[test]
    fn exit_codes() {
        assert_eq!(
            EntrypointError::MissingConfiguration { key: "FUM_BASEURL" }.exit_code(),
            78
        );
        assert_eq!(
            EntrypointError::TemplateRead {
                path: "/t".into(),
                source: io_err()
            }
            .exit_code(),
            66
        );
        assert_eq!(
            EntrypointError::WriteFailure {
                path: "/w".into(),
                source: io_err()
            }
            .exit_code(),
            73
        );
        assert_eq!(
            EntrypointError::LaunchFailure {
                command: "nginx".into(),
                source: io_err()
            }
            .exit_code(),
            69
        );
    }

    #[test]
    fn exit_codes_are_non_zero() {
        let e = EntrypointError::MissingConfiguration { key: "X" };
        assert_ne!(e.exit_code(), 0);
    }

    #[test]
    fn display_names_the_missing_key() {
        let e = EntrypointError::MissingConfiguration {
            key: "CONTACTS_BASEURL",
        };
        assert!(e.to_string().contains("CONTACTS_BASEURL"));
    }

    #[test]
    fn display_names_the_path() {
        let e = EntrypointError::WriteFailure {
            path: "/usr/share/nginx/html/config.json".into(),
            source: io_err(),
        };
        assert!(e.to_string().contains("/usr/share/nginx/html/config.json"));
    }

    #[test]
    fn display_names_the_command() {
        let e = EntrypointError::LaunchFailure {
            command: "nginx -g daemon off;".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(e.to_string().contains("nginx -g daemon off;"));
    }
}
