//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//! Useful for scripting the extractor from other tools.

use article_digest::{extract_bytes, summarize};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    title: String,
    main_text: String,
    images: Vec<String>,
    summary: String,
}

fn main() {
    // Read raw bytes so the declared charset can be honored
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let output = match extract_bytes(&html) {
        Ok(r) => Output {
            summary: summarize(&r.main_text),
            title: r.title,
            main_text: r.main_text,
            images: r.images,
        },
        Err(err) => {
            eprintln!("Extraction failed: {err}");
            Output {
                title: String::new(),
                main_text: String::new(),
                images: Vec::new(),
                summary: String::new(),
            }
        }
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
