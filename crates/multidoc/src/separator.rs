use bstr::ByteSlice;

const MARKER: &[u8] = b"---";

/// Returns `true` if `line` is a document-boundary line.
///
/// A boundary line is `---` surrounded by optional whitespace, optionally
/// followed by a `#` comment. The rule is deliberately looser than strict
/// YAML document-start syntax: streams of JSON documents have historically
/// been delimited with `---` lines as well, and those streams must keep
/// splitting the same way.
///
/// A line whose marker is followed by anything else, such as `---foo`, is
/// ordinary content.
///
/// # Examples
///
/// ```
/// use multidoc::is_separator;
///
/// assert!(is_separator(b"---\n"));
/// assert!(is_separator(b"  ---  \r\n"));
/// assert!(is_separator(b"--- # manifests below\n"));
/// assert!(!is_separator(b"---foo\n"));
/// assert!(!is_separator(b"foo: bar\n"));
/// ```
#[must_use]
pub fn is_separator(line: &[u8]) -> bool {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(MARKER) else {
        return false;
    };
    rest.trim().first().is_none_or(|&b| b == b'#')
}
