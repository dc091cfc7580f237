use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use crate::{
    decode::{extend_from_slice, from_slice},
    error::{DecodeError, Error},
};

/// Read the file at `path` in full and decode every non-blank document in it.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read, or [`Error::Decode`]
/// for the first document that fails to decode.
pub fn from_path<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, Error> {
    from_slice(&read_all(path.as_ref())?)
}

/// Read the file at `path` in full, appending every decoded document into
/// `out`.
///
/// # Errors
///
/// Same as [`from_path`]. On error, callers must not rely on the trailing
/// contents of `out`.
pub fn extend_from_path<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    out: &mut Vec<T>,
) -> Result<(), Error> {
    extend_from_slice(&read_all(path.as_ref())?, out)
}

/// Decode a single-document JSON file, strictly.
///
/// Unlike [`from_path`] this performs no document splitting and no YAML
/// fallback; the whole file must be one JSON value.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read, or [`Error::Decode`]
/// if it is not valid JSON for `T`.
pub fn json_from_path<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Error> {
    let data = read_all(path.as_ref())?;
    serde_json::from_slice(&data).map_err(|e| Error::Decode {
        index: 0,
        source: DecodeError::Json(e),
    })
}

/// Decode a single-document YAML file.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read, or [`Error::Decode`]
/// if it is not valid YAML for `T`.
pub fn yaml_from_path<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Error> {
    let data = read_all(path.as_ref())?;
    serde_yaml::from_slice(&data).map_err(|e| Error::Decode {
        index: 0,
        source: DecodeError::Yaml(e),
    })
}

fn read_all(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|source| Error::Read {
        path: PathBuf::from(path),
        source,
    })
}
