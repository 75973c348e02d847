use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use mvi_primer::config::Config;
use mvi_primer::immutable::{self, Value};
use mvi_primer::logging;
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mvi-primer",
    version,
    about = "Counter state loop and immutable updates with structural sharing"
)]
struct Cli {
    /// Config file (default: ~/.config/mvi-primer/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive counter in the terminal (default)
    Counter,
    /// Replace a nested field of a JSON record, leaving the input untouched
    Update {
        /// JSON object to update
        #[arg(long)]
        record: String,
        /// New value (JSON, or a plain string)
        #[arg(long)]
        value: String,
        /// Dotted path of the field to replace
        #[arg(long, default_value = "a.c")]
        path: String,
    },
    /// Append an element to a JSON array, leaving the input untouched
    Append {
        /// JSON array
        #[arg(long)]
        sequence: String,
        /// Element to append (JSON, or a plain string)
        #[arg(long)]
        element: String,
    },
    /// Replace the element at an index of a JSON array
    Replace {
        /// JSON array
        #[arg(long)]
        sequence: String,
        #[arg(long)]
        index: usize,
        /// Replacement element (JSON, or a plain string)
        #[arg(long)]
        element: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Command::Counter) {
        Command::Counter => {
            logging::init_tracing();
            let config = match &cli.config {
                Some(path) => Config::load_from(path),
                None => Config::load(),
            }
            .context("loading config")?;
            mvi_primer::ui::run(&config).context("terminal UI failed")
        }
        Command::Update {
            record,
            value,
            path,
        } => {
            logging::init_stderr_tracing();
            let before = parse_json(&record, "--record")?;
            let segments = parse_path(&path)?;
            let after = immutable::set_in(&before, &segments, parse_element(&value))?;
            print_json(&json!({
                "before": before,
                "after": after,
                "shared_fields": shared_fields(&before, &after),
            }))
        }
        Command::Append { sequence, element } => {
            logging::init_stderr_tracing();
            let before = parse_json(&sequence, "--sequence")?;
            let after = before.appended(parse_element(&element))?;
            print_json(&json!({ "before": before, "after": after }))
        }
        Command::Replace {
            sequence,
            index,
            element,
        } => {
            logging::init_stderr_tracing();
            let before = parse_json(&sequence, "--sequence")?;
            let after = before.replaced_at(index, parse_element(&element))?;
            print_json(&json!({ "before": before, "after": after }))
        }
    }
}

fn parse_json(raw: &str, flag: &str) -> Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("invalid JSON for {flag}"))
}

/// Split a dotted `--path`. Every segment must be non-empty.
fn parse_path(path: &str) -> Result<Vec<&str>> {
    let segments: Vec<&str> = path.split('.').collect();
    ensure!(
        segments.iter().all(|segment| !segment.is_empty()),
        "invalid --path '{path}': empty segment"
    );
    Ok(segments)
}

/// JSON when it parses, otherwise the raw text as a string.
fn parse_element(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw))
}

/// Top-level keys carried over from `before` into `after` untouched.
fn shared_fields(before: &Value, after: &Value) -> Vec<String> {
    let (Some(old), Some(new)) = (before.as_object(), after.as_object()) else {
        return Vec::new();
    };
    new.iter()
        .filter(|(key, value)| old.get(*key).is_some_and(|prev| prev.is_kept_in(value)))
        .map(|(key, _)| key.clone())
        .collect()
}

fn print_json(output: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(output).context("serializing output")?;
    println!("{text}");
    Ok(())
}
