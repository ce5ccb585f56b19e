//! Algorithm trace CLI.
//!
//! Provides the `algotrace` binary, a batch caller for the traced algorithm
//! catalog: list what is available, describe one algorithm, or run one and
//! print its complete trace as JSON on stdout.
//!
//! Exit codes: 0 = success, 1 = unknown algorithm or bad usage,
//! 2 = invalid input, 3 = I/O error.

mod config;
mod logging;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde_json::json;

use algotrace_core::{AlgorithmInput, ErrorKind, Limits, TraceError};
use algotrace_emitters::sample::random_input;
use algotrace_emitters::Catalog;

/// Step-by-step algorithm traces.
#[derive(Parser)]
#[command(name = "algotrace", about = "Step-by-step algorithm traces")]
struct Cli {
    /// Log at debug level to stderr (RUST_LOG still takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the array length cap (also: ALGOTRACE_MAX_ARRAY_LEN).
    #[arg(long, global = true)]
    max_array_len: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List every algorithm in the catalog.
    List,

    /// Show an algorithm's metadata, explanation, and default input.
    Describe {
        /// Algorithm id, e.g. `bfs` or `selection-sort`.
        id: String,
    },

    /// Run an algorithm and print its trace.
    Run {
        /// Algorithm id.
        id: String,

        /// JSON input file, or `-` for stdin (default: the algorithm's
        /// built-in input).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Generate a random input from this seed instead.
        #[arg(short, long, conflicts_with = "input")]
        seed: Option<u64>,

        /// Print only the result and summary counters, not the steps.
        #[arg(long)]
        summary: bool,

        /// Emit a playback bundle at this speed multiplier.
        #[arg(long, conflicts_with = "summary")]
        speed: Option<f64>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let limits = match config::limits_from_env(cli.max_array_len) {
        Ok(limits) => limits,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            process::exit(1);
        }
    };
    let catalog = Catalog::with_limits(limits);

    let exit_code = match cli.command {
        Commands::List => run_list(&catalog),
        Commands::Describe { id } => run_describe(&catalog, &id),
        Commands::Run {
            id,
            input,
            seed,
            summary,
            speed,
        } => run_algorithm(&catalog, &limits, &id, input, seed, summary, speed),
    };
    process::exit(exit_code);
}

/// Print `value` as pretty JSON on stdout.
fn emit(value: &impl serde::Serialize) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        format!("{{\"error\": \"failed to serialize result: {}\"}}", e)
    });
    println!("{}", json);
}

fn run_list(catalog: &Catalog) -> i32 {
    emit(&catalog.descriptors());
    0
}

fn run_describe(catalog: &Catalog, id: &str) -> i32 {
    let Some(algorithm) = catalog.get(id) else {
        return unknown(catalog, id);
    };
    emit(&json!({
        "descriptor": algorithm.descriptor(),
        "explanation": algorithm.explanation(),
        "default_input": algorithm.default_input(),
    }));
    0
}

/// Execute the run subcommand.
fn run_algorithm(
    catalog: &Catalog,
    limits: &Limits,
    id: &str,
    input_path: Option<PathBuf>,
    seed: Option<u64>,
    summary_only: bool,
    speed: Option<f64>,
) -> i32 {
    let Some(algorithm) = catalog.get(id) else {
        return unknown(catalog, id);
    };
    let descriptor = algorithm.descriptor();

    let input = match (input_path, seed) {
        (Some(path), _) => {
            tracing::debug!(path = %path.display(), "loading input");
            match load_input(&path) {
                Ok(input) => input,
                Err(code) => return code,
            }
        }
        (None, Some(seed)) => {
            tracing::debug!(seed, "sampling input");
            random_input(descriptor.input, limits, seed)
        }
        (None, None) => algorithm.default_input(),
    };

    let result = match algorithm.execute(&input) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_code(&e);
        }
    };

    if summary_only {
        emit(&json!({
            "algorithm": descriptor.id,
            "success": result.success,
            "result": result.result,
            "summary": result.summary,
        }));
        return 0;
    }

    match speed {
        Some(speed) => match result.playback(speed, descriptor.category.visual_kind()) {
            Ok(playback) => emit(&playback),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
        None => emit(&result),
    }
    0
}

/// Read and decode an input file; `-` reads stdin.
fn load_input(path: &Path) -> Result<AlgorithmInput, i32> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };
    let raw = raw.map_err(|e| {
        eprintln!("Error: failed to read input '{}': {}", path.display(), e);
        3
    })?;
    AlgorithmInput::from_json(&raw).map_err(|e| {
        eprintln!("Error: invalid input: {}", e);
        exit_code(&e)
    })
}

fn unknown(catalog: &Catalog, id: &str) -> i32 {
    let known: Vec<&str> = catalog.descriptors().iter().map(|d| d.id).collect();
    eprintln!(
        "Error: {}; available: {}",
        TraceError::UnknownAlgorithm { id: id.to_string() },
        known.join(", ")
    );
    1
}

/// Map a trace error to a process exit code.
fn exit_code(error: &TraceError) -> i32 {
    match (error, error.kind()) {
        (TraceError::UnknownAlgorithm { .. }, _) => 1,
        (_, ErrorKind::Shape | ErrorKind::Range) => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_flags_parse() {
        let cli =
            Cli::try_parse_from(["algotrace", "run", "gcd", "--seed", "9", "--summary"]).unwrap();
        match cli.command {
            Commands::Run {
                id, seed, summary, ..
            } => {
                assert_eq!(id, "gcd");
                assert_eq!(seed, Some(9));
                assert!(summary);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn input_and_seed_conflict() {
        let parsed =
            Cli::try_parse_from(["algotrace", "run", "bfs", "--seed", "1", "--input", "x.json"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code(&TraceError::UnknownAlgorithm { id: "x".into() }), 1);
        assert_eq!(
            exit_code(&TraceError::Malformed {
                reason: "bad".into()
            }),
            2
        );
        assert_eq!(
            exit_code(&TraceError::TooLarge {
                field: "values".into(),
                len: 13,
                max: 12
            }),
            2
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let code = load_input(Path::new("/nonexistent/algotrace-input.json")).unwrap_err();
        assert_eq!(code, 3);
    }

    #[test]
    fn seeded_run_succeeds_under_a_zero_array_cap() {
        let limits = Limits {
            max_array_len: 0,
            ..Limits::default()
        };
        let catalog = Catalog::with_limits(limits);
        assert_eq!(
            run_algorithm(&catalog, &limits, "selection-sort", None, Some(1), true, None),
            0
        );
    }

    #[test]
    fn unknown_id_is_usage_error() {
        let catalog = Catalog::new();
        assert_eq!(run_describe(&catalog, "nope"), 1);
        assert_eq!(
            run_algorithm(&catalog, &Limits::default(), "nope", None, None, false, None),
            1
        );
    }
}
