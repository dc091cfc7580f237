use core::iter::FusedIterator;

use bstr::ByteSlice;

use crate::separator::is_separator;

/// Split `data` into documents at `---` boundary lines.
///
/// The returned iterator yields one subslice of `data` per non-empty
/// document, in input order. Boundary lines themselves are never part of a
/// document, consecutive or leading boundary lines yield nothing, and a
/// trailing document without a final boundary line (or even without a final
/// line terminator) is still yielded.
///
/// Blank documents are *not* filtered here: a document made only of blank
/// lines still occupies bytes and is yielded. Decoding entry points skip
/// those; see [`from_slice`](crate::from_slice).
///
/// # Examples
///
/// ```
/// let docs: Vec<&[u8]> = multidoc::split(b"a: 1\n---\nb: 2").collect();
/// assert_eq!(docs, [b"a: 1\n".as_slice(), b"b: 2".as_slice()]);
/// ```
#[must_use]
pub fn split(data: &[u8]) -> Documents<'_> {
    Documents {
        data,
        pos: 0,
        doc_start: 0,
        finished: false,
    }
}

/// Iterator over the non-empty documents of a multi-document stream.
///
/// Created by [`split`]. Each item borrows from the input, so closed
/// documents can never be mutated after the fact.
#[derive(Debug, Clone)]
pub struct Documents<'a> {
    data: &'a [u8],
    /// Scan cursor, always at the start of a line.
    pos: usize,
    /// Start of the active document span.
    doc_start: usize,
    finished: bool,
}

impl<'a> Iterator for Documents<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        while self.pos < self.data.len() {
            let line_start = self.pos;
            // A line runs through its `\n`; the final line may have none.
            let line_end = match self.data[line_start..].find_byte(b'\n') {
                Some(i) => line_start + i + 1,
                None => self.data.len(),
            };
            self.pos = line_end;
            if is_separator(&self.data[line_start..line_end]) {
                let doc = &self.data[self.doc_start..line_start];
                self.doc_start = line_end;
                if !doc.is_empty() {
                    return Some(doc);
                }
            }
        }
        self.finished = true;
        let tail = &self.data[self.doc_start..];
        if tail.is_empty() { None } else { Some(tail) }
    }
}

impl FusedIterator for Documents<'_> {}
