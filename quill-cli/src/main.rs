//! Quill CLI: run selector queries against JSON-encoded selector ASTs
//!
//! Selectors are read from JSON files (or inline JSON with `--inline`) in
//! the interchange format of `quill-selector`:
//! - quill superselector a.json b.json   # Is A a superselector of B?
//! - quill unify a.json b.json           # Merge two compounds
//! - quill render a.json                 # Print a selector list and its specificity
//!
//! Logging:
//! - `-v` enables debug output, `-vv` traces every verdict
//! - `RUST_LOG` overrides both

use std::fs;
use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use quill_common::warning::warn_once;
use quill_selector::{CommaSequence, SequenceMember, SimpleSequence};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

/// Quill: selector subsumption and unification queries
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Compare two selector lists stored as JSON
    quill superselector broad.json narrow.json

    # Same, with inline JSON: is `.foo` a superselector of `.foo.bar`?
    quill --inline superselector '[[[{"class":"foo"}]]]' '[[[{"class":"foo"},{"class":"bar"}]]]'

    # Unify two compounds
    quill --inline unify '[{"type":"a"}]' '[{"class":"x"}]'

    # Render a selector list with per-selector specificity
    quill -v render selectors.json
"#)]
struct Cli {
    /// Treat positional arguments as JSON text instead of file paths
    #[arg(long, global = true)]
    inline: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether selector list A matches every element selector list B matches
    Superselector {
        /// Selector list A (JSON)
        #[arg(value_name = "A")]
        ours: String,

        /// Selector list B (JSON)
        #[arg(value_name = "B")]
        theirs: String,
    },

    /// Merge two compound selectors into one matching their intersection
    Unify {
        /// Compound A (JSON)
        #[arg(value_name = "A")]
        ours: String,

        /// Compound B (JSON)
        #[arg(value_name = "B")]
        theirs: String,
    },

    /// Print a selector list and the specificity of each complex selector
    Render {
        /// Selector list (JSON)
        #[arg(value_name = "A")]
        selector: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Superselector { ours, theirs } => {
            let ours: CommaSequence = load(ours, cli.inline)?;
            let theirs: CommaSequence = load(theirs, cli.inline)?;
            superselector(&ours, &theirs);
        }
        Command::Unify { ours, theirs } => {
            let ours: SimpleSequence = load(ours, cli.inline)?;
            let theirs: SimpleSequence = load(theirs, cli.inline)?;
            unify(&ours, &theirs);
        }
        Command::Render { selector } => {
            let selector: CommaSequence = load(selector, cli.inline)?;
            render(&selector);
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Decode a selector node from a file path, or from the argument itself when
/// `inline` is set.
fn load<T: DeserializeOwned>(source: &str, inline: bool) -> Result<T> {
    if inline {
        return serde_json::from_str(source)
            .with_context(|| format!("Failed to decode inline selector JSON: {source}"));
    }

    let text = fs::read_to_string(source)
        .with_context(|| format!("Failed to read selector file: {source}"))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to decode selector JSON in {source}"))
}

fn superselector(ours: &CommaSequence, theirs: &CommaSequence) {
    let verdict = ours.is_superselector(theirs);
    tracing::debug!(%ours, %theirs, verdict, "superselector query");

    if verdict {
        println!("{} `{ours}` is a superselector of `{theirs}`", "yes".green().bold());
    } else {
        println!("{} `{ours}` is not a superselector of `{theirs}`", "no".red().bold());
    }
}

fn unify(ours: &SimpleSequence, theirs: &SimpleSequence) {
    match ours.unify(theirs) {
        Some(unified) => {
            println!("{}", unified.to_string().green());
            println!("  specificity {}", unified.specificity());
        }
        None => println!(
            "{} `{ours}` and `{theirs}` cannot match the same element",
            "conflict".yellow().bold()
        ),
    }
}

fn render(selector: &CommaSequence) {
    println!("{}", selector.to_string().bold());
    for sequence in selector.members() {
        let dangling = matches!(sequence.members().first(), Some(SequenceMember::Combinator(_)))
            || matches!(sequence.members().last(), Some(SequenceMember::Combinator(_)));
        if dangling {
            warn_once(
                "CLI",
                &format!("`{sequence}` starts or ends with a combinator and never compares"),
            );
        }
        println!("  {sequence}  {}", sequence.specificity().dimmed());
    }
}
