use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure to decode a single document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The document looked like JSON but did not parse as JSON, or did not
    /// fit the target type.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    /// The document did not parse as YAML, or did not fit the target type.
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Error returned by the multi-document entry points.
///
/// Every error is terminal for the call that produced it: there are no
/// retries and no partial-success signal. When an error is returned from a
/// function appending into a caller-supplied vector, the vector's trailing
/// contents are unspecified.
#[derive(Debug, Error)]
pub enum Error {
    /// The source bytes could not be read in full.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the resource that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A document could not be decoded into the target type.
    #[error("document {index}: {source}")]
    Decode {
        /// Zero-based position of the failing document in the stream, blank
        /// documents included.
        index: usize,
        /// The underlying JSON or YAML error.
        source: DecodeError,
    },
}
