//! Command-line summarizer.
//!
//! Summarizes literal text or the main article of a web page, prints the
//! summary, and optionally stores it as `.txt` or `.pdf`.

use std::io::{self, Write};
use std::path::PathBuf;

use article_digest::console::{is_positive_answer, read_input};
use article_digest::url_utils::{looks_like_url, normalize_input_url};
use article_digest::{Result, Summarizer};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Summarize a text or a web article, one sentence per paragraph", long_about = None)]
struct Cli {
    /// Text to summarize, or the URL of an article
    input: Option<String>,

    /// Store the summary at this path (.txt or .pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print length statistics after the summary
    #[arg(short, long)]
    info: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let raw = match cli.input {
        Some(value) if !value.trim().is_empty() => value,
        _ => read_input(&mut input, &mut out, "Enter a text or URL to summarize: ")?,
    };

    let mut session = if looks_like_url(&raw) {
        let url = normalize_input_url(&raw);
        debug!(%url, "treating input as a URL");
        Summarizer::from_url(url)
    } else {
        Summarizer::from_text(raw)
    };

    let summary = session.summarize()?;
    writeln!(out, "{summary}")?;

    if cli.info {
        write!(out, "{}", session.summary_info()?)?;
    }

    let path = match cli.output {
        Some(path) => Some(path),
        None => {
            let answer = read_input(&mut input, &mut out, "Store the summary to a file? (y/n): ")?;
            if is_positive_answer(&answer) {
                Some(PathBuf::from(read_input(&mut input, &mut out, "File path (.txt or .pdf): ")?))
            } else {
                None
            }
        }
    };

    if let Some(path) = path {
        session.store_to_file(&path)?;
        writeln!(out, "Summary stored to {}", path.display())?;
    }

    Ok(())
}
