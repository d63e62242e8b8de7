//! Failure taxonomies for hardware probing and the model service client.
//!
//! Nothing here is fatal: detectors convert every `ProbeError` into a
//! documented sentinel value, and the CLI renders every `ServiceError` as a
//! diagnostic and moves on.

use thiserror::Error;

/// A hardware detection step failed.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The inventory command could not be spawned (missing binary, wrong OS).
    #[error("command `{command}` could not be run: {source}")]
    CommandUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The inventory command ran but exited non-zero.
    #[error("command `{command}` exited with {status}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
    },

    /// Command output did not contain what we expected.
    #[error("could not parse {what}")]
    Parse { what: &'static str },
}

/// A model service request failed.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} returned HTTP {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ServiceError {
    /// Classify a reqwest send/read error against the taxonomy.
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else if err.is_decode() {
            Self::Parse {
                url: url.to_string(),
                source: err,
            }
        } else {
            Self::Network {
                url: url.to_string(),
                source: err,
            }
        }
    }
}
