use bstr::ByteSlice;
use serde::de::DeserializeOwned;

use crate::{
    error::{DecodeError, Error},
    split::split,
};

/// Decode one document into `T`, accepting either JSON or YAML syntax.
///
/// A document whose first non-whitespace byte is `{` is decoded as JSON;
/// anything else is decoded as YAML. Sniffing on the opening brace rather
/// than attempting both parsers keeps error messages attached to the format
/// the document actually used.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the document does not parse, or parses but
/// does not fit the shape of `T`.
pub fn decode_document<T: DeserializeOwned>(doc: &[u8]) -> Result<T, DecodeError> {
    if has_json_prefix(doc) {
        Ok(serde_json::from_slice(doc)?)
    } else {
        Ok(serde_yaml::from_slice(doc)?)
    }
}

fn has_json_prefix(doc: &[u8]) -> bool {
    doc.trim_start().first() == Some(&b'{')
}

/// Decode every non-blank document in `data`, appending into `out`.
///
/// Documents are split at `---` boundary lines (see [`split`]); documents
/// whose trimmed content is empty are silently skipped. Decoding stops at
/// the first failure.
///
/// # Errors
///
/// Returns [`Error::Decode`] carrying the index of the first document that
/// failed. On error, values decoded before the failure may already have been
/// appended; callers must not rely on the trailing contents of `out`.
pub fn extend_from_slice<T: DeserializeOwned>(data: &[u8], out: &mut Vec<T>) -> Result<(), Error> {
    for (index, doc) in split(data).enumerate() {
        if doc.trim().is_empty() {
            continue;
        }
        let value = decode_document(doc).map_err(|source| Error::Decode { index, source })?;
        out.push(value);
    }
    Ok(())
}

/// Decode every non-blank document in `data` into a fresh vector.
///
/// # Errors
///
/// Returns [`Error::Decode`] for the first document that fails; no partial
/// results are returned.
///
/// # Examples
///
/// ```
/// let values: Vec<serde_json::Value> = multidoc::from_slice(b"a: 1\n---\n{\"b\": 2}\n")?;
/// assert_eq!(values.len(), 2);
/// # Ok::<(), multidoc::Error>(())
/// ```
pub fn from_slice<T: DeserializeOwned>(data: &[u8]) -> Result<Vec<T>, Error> {
    let mut out = Vec::new();
    extend_from_slice(data, &mut out)?;
    Ok(out)
}
