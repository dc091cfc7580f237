#![allow(missing_docs)]

use std::fmt::Write as _;

use quickcheck_macros::quickcheck;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Entry {
    value: u64,
}

fn yaml_stream(values: &[u64]) -> String {
    let mut stream = String::new();
    for v in values {
        let _ = writeln!(stream, "---\nvalue: {v}");
    }
    stream
}

fn json_stream(values: &[u64]) -> String {
    let mut stream = String::new();
    for v in values {
        let _ = writeln!(stream, "---\n{{\"value\": {v}}}");
    }
    stream
}

/// N non-blank documents always decode to exactly N values, in input order.
#[quickcheck]
fn every_document_survives(values: Vec<u64>) -> bool {
    let stream = yaml_stream(&values);
    let decoded: Vec<Entry> = multidoc::from_slice(stream.as_bytes()).unwrap();
    decoded.iter().map(|e| e.value).eq(values.iter().copied())
}

/// The `---` delimiter works for JSON documents as well, and the two
/// renderings of the same values decode identically.
#[quickcheck]
fn json_and_yaml_renderings_agree(values: Vec<u64>) -> bool {
    let from_yaml: Vec<Entry> = multidoc::from_slice(yaml_stream(&values).as_bytes()).unwrap();
    let from_json: Vec<Entry> = multidoc::from_slice(json_stream(&values).as_bytes()).unwrap();
    from_yaml == from_json
}

/// Re-running the pipeline over the same bytes yields an equal result.
#[quickcheck]
fn pipeline_is_idempotent(values: Vec<u64>) -> bool {
    let stream = yaml_stream(&values);
    let first: Vec<Entry> = multidoc::from_slice(stream.as_bytes()).unwrap();
    let second: Vec<Entry> = multidoc::from_slice(stream.as_bytes()).unwrap();
    first == second
}

/// Splitting never panics and never yields an empty document, whatever the
/// input bytes.
#[quickcheck]
fn split_never_yields_empty_documents(data: Vec<u8>) -> bool {
    multidoc::split(&data).all(|doc| !doc.is_empty())
}

/// Documents reassemble to the input minus its boundary lines, so no content
/// byte is ever lost or duplicated by splitting.
#[quickcheck]
fn split_preserves_content_bytes(values: Vec<u64>, blanks: bool) -> bool {
    let mut stream = String::new();
    for v in &values {
        let _ = writeln!(stream, "---");
        if blanks {
            let _ = writeln!(stream);
        }
        let _ = writeln!(stream, "value: {v}");
    }
    let joined: Vec<u8> = multidoc::split(stream.as_bytes()).fold(Vec::new(), |mut acc, doc| {
        acc.extend_from_slice(doc);
        acc
    });
    let expected: String = stream.lines().filter(|l| *l != "---").fold(
        String::new(),
        |mut acc, l| {
            acc.push_str(l);
            acc.push('\n');
            acc
        },
    );
    joined == expected.into_bytes()
}
