//! Split and decode multi-document YAML/JSON streams.
//!
//! A stream is a sequence of documents separated by boundary lines: lines
//! whose trimmed form is `---`, optionally followed by a `#` comment. Each
//! non-blank document is decoded into a caller-supplied target type, in
//! input order. Documents may be YAML or JSON, and the two formats may be
//! mixed freely within one stream; for backward compatibility `---` is
//! accepted as a delimiter between JSON documents even though it is not
//! valid JSON syntax.
//!
//! The whole input is buffered; there is no incremental mode. The first
//! document that fails to decode aborts the call with an error, and the
//! caller must not rely on any partially appended results.
//!
//! # Examples
//!
//! ```
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, PartialEq)]
//! struct Release {
//!     name: String,
//!     replicas: u32,
//! }
//!
//! let stream = br#"name: api
//! replicas: 2
//! ---
//! {"name": "worker", "replicas": 4}
//! "#;
//!
//! let releases: Vec<Release> = multidoc::from_slice(stream)?;
//! assert_eq!(releases[0].name, "api");
//! assert_eq!(releases[1].replicas, 4);
//! # Ok::<(), multidoc::Error>(())
//! ```

mod decode;
mod error;
mod load;
mod separator;
mod split;

pub use decode::{decode_document, extend_from_slice, from_slice};
pub use error::{DecodeError, Error};
pub use load::{extend_from_path, from_path, json_from_path, yaml_from_path};
pub use separator::is_separator;
pub use split::{Documents, split};
