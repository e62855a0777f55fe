use clap::{Parser, Subcommand};
use formflow::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Compiles form designer snapshots into messaging-platform flow documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile an editor snapshot into a flow document
    Compile {
        /// Path to the editor snapshot JSON file
        input: String,
        /// Where to write the flow document (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON written to stdout
        #[arg(long)]
        pretty: bool,
        /// Validate the snapshot first and print the findings to stderr
        #[arg(long)]
        validate: bool,
        /// Optional JSON file overriding entries of the limit table
        #[arg(long)]
        limits: Option<String>,
    },
    /// Check an editor snapshot against the limit table
    Validate {
        /// Path to the editor snapshot JSON file
        input: String,
        /// Optional JSON file overriding entries of the limit table
        #[arg(long)]
        limits: Option<String>,
        /// Print the report as JSON instead of one finding per line
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Compile {
            input,
            output,
            pretty,
            validate,
            limits,
        } => run_compile(&input, output.as_deref(), pretty, validate, limits.as_deref()),
        Command::Validate {
            input,
            limits,
            json,
        } => run_validate(&input, limits.as_deref(), json),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_compile(
    input: &str,
    output: Option<&str>,
    pretty: bool,
    validate: bool,
    limits_path: Option<&str>,
) {
    let total_start = Instant::now();
    let screens = load_screens(input);
    let limits = load_limits(limits_path);

    let mut builder = Compiler::builder(screens).with_limits(limits);
    if validate {
        builder = builder.with_validation();
    }
    let compiler = builder.build();

    let artifacts = compiler
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)));

    if let Some(report) = &artifacts.report {
        print_findings(report);
    }

    match output {
        Some(path) => {
            artifacts.document.save(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write flow document: {}", e))
            });
            eprintln!(
                "Compiled {} screens into '{}' in {:?}",
                artifacts.document.screens.len(),
                path,
                total_start.elapsed()
            );
        }
        None => {
            let json = artifacts.document.to_json(pretty).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to serialize flow document: {}", e))
            });
            println!("{}", json);
        }
    }
}

fn run_validate(input: &str, limits_path: Option<&str>, json: bool) {
    let screens = load_screens(input);
    let validator = Validator::new(load_limits(limits_path));
    let report = validator.validate_document(&screens);

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize report: {}", e)));
        println!("{}", rendered);
    } else {
        print_findings(&report);
        println!(
            "{} errors, {} warnings across {} screens",
            report.errors.len(),
            report.warnings.len(),
            screens.len()
        );
    }

    if !report.is_valid() {
        std::process::exit(1);
    }
}

fn load_screens(path: &str) -> Vec<Screen> {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read editor snapshot '{}': {}", path, e))
    });
    parse_screens(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load screens: {}", e)))
}

fn load_limits(path: Option<&str>) -> Limits {
    match path {
        Some(path) => Limits::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load limits: {}", e))),
        None => Limits::default(),
    }
}

fn print_findings(report: &ValidationReport) {
    for finding in report.findings() {
        eprintln!("  -> {}", finding);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
