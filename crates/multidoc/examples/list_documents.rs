//! List the documents of a multi-document YAML/JSON file.
//!
//! ```text
//! cargo run --example list_documents -- manifests.yaml
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: list_documents <file>");
        return ExitCode::FAILURE;
    };
    match multidoc::from_path::<serde_json::Value>(&path) {
        Ok(docs) => {
            for (i, doc) in docs.iter().enumerate() {
                println!("{i}: {doc}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{path}: {err}");
            ExitCode::FAILURE
        }
    }
}
