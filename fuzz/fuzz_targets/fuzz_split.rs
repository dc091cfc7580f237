#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Splitting must be total: no panics, no empty documents, and stable
    // across runs over the same bytes.
    let docs: Vec<&[u8]> = multidoc::split(data).collect();
    assert!(docs.iter().all(|doc| !doc.is_empty()));
    let again: Vec<&[u8]> = multidoc::split(data).collect();
    assert_eq!(docs, again);

    // No document may span a boundary line.
    for doc in &docs {
        assert!(multidoc::split(doc).eq([*doc]));
    }

    // Decoding arbitrary bytes may fail, but must never panic.
    let mut out: Vec<serde_json::Value> = Vec::new();
    let _ = multidoc::extend_from_slice(data, &mut out);
});
