//! The CLI binary for inspecting a token dump through the stream API.
use clap::{Parser, Subcommand};
use diagnostics::error::{report_diagnostic_to_term, Error};
use diagnostics::result::Result;
use log::debug;
use std::path::{Path, PathBuf};
use syntax::token::TokenKind;
use token_stream::raw::source_text;
use token_stream::{RawToken, TokenStream};

#[derive(Parser)]
#[command(name = "tokstream", about = "Search and splice token dumps")]
struct Opts {
    #[command(subcommand)]
    subcmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every token with its index, line and kind
    Dump(DumpOptions),
    /// Find the next (or previous) token of a kind
    Find(FindOptions),
    /// Find the first non-whitespace token after an index
    Skip(SkipOptions),
    /// Cut a closed range out of the stream and print both halves
    Extract(ExtractOptions),
}

#[derive(clap::Args)]
struct DumpOptions {
    #[arg(short, long)]
    path: PathBuf,
}

#[derive(clap::Args)]
struct FindOptions {
    #[arg(short, long)]
    path: PathBuf,
    #[arg(short, long)]
    from: usize,
    /// Canonical kind name, e.g. T_OPEN_ROUND
    #[arg(short, long)]
    kind: TokenKind,
    #[arg(short, long)]
    backward: bool,
}

#[derive(clap::Args)]
struct SkipOptions {
    #[arg(short, long)]
    path: PathBuf,
    #[arg(short, long)]
    from: usize,
}

#[derive(clap::Args)]
struct ExtractOptions {
    #[arg(short, long)]
    path: PathBuf,
    #[arg(short, long)]
    from: usize,
    #[arg(short, long)]
    to: usize,
}

fn read_raw(path: &Path) -> Result<Vec<RawToken>> {
    let path = std::fs::canonicalize(path)?;
    debug!("reading token dump {:?}", path);
    let text = std::fs::read_to_string(&path)?;
    serde_json::from_str(&text).map_err(|err| Error::Json(err.to_string()))
}

/// Builds the stream, rendering construction diagnostics against the
/// text the dump was tokenized from.
fn load(path: &Path) -> Result<TokenStream> {
    let raw = read_raw(path)?;
    let source = source_text(&raw);
    match TokenStream::from_raw(raw) {
        Err(Error::Diagnostic(diagnostic)) => {
            let path_str = path.to_str().unwrap_or("Unknown File");
            report_diagnostic_to_term(&diagnostic, path_str, &source)?;
            Err(Error::Diagnostic(diagnostic))
        }
        result => result,
    }
}

fn print_stream(stream: &TokenStream) {
    for (index, token) in stream.iter().enumerate() {
        println!(
            "{:>5} {:>5} {:<28} {:?}",
            index,
            token.line(),
            token.kind(),
            token.text()
        );
    }
}

fn print_found(found: Option<usize>) {
    match found {
        Some(index) => println!("{}", index),
        None => println!("not found"),
    }
}

fn run(opts: Opts) -> Result<()> {
    match opts.subcmd {
        Commands::Dump(options) => {
            let stream = load(&options.path)?;
            print_stream(&stream);
        }
        Commands::Find(options) => {
            let stream = load(&options.path)?;
            let found = if options.backward {
                stream.find_previous_token(options.from, options.kind)?
            } else {
                stream.find_next_token(options.from, options.kind)?
            };
            print_found(found);
        }
        Commands::Skip(options) => {
            let stream = load(&options.path)?;
            print_found(stream.skip_whitespace(options.from)?);
        }
        Commands::Extract(options) => {
            let mut stream = load(&options.path)?;
            let extracted = stream.extract_stream(options.from, options.to)?;
            println!("remaining ({} tokens):", stream.count());
            print_stream(&stream);
            println!("extracted ({} tokens):", extracted.count());
            print_stream(&extracted);
        }
    }
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    let opts = Opts::parse();
    if let Err(error) = run(opts) {
        // Diagnostics have already been rendered with their source.
        if !matches!(error, Error::Diagnostic(_)) {
            eprintln!("error: {}", error);
        }
        std::process::exit(1);
    }
}
