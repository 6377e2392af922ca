//! reqgen CLI - Command-line interface
//!
//! Commands:
//!   generate - Generate test cases from requirement files
//!   analyze  - Analyze a single requirement
//!   schema   - Print JSON schemas
//!   init     - Write a default .reqgen.yaml

mod cli;

use reqgen::VERSION;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    init_tracing(args.iter().any(|a| a == "--verbose"));

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "generate" => cli::cmd_generate(&args[2..]),
        "analyze" => cli::cmd_analyze(&args[2..]),
        "schema" => cli::cmd_schema(&args[2..]),
        "init" => cli::cmd_init(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("reqgen {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level
fn init_tracing(verbose: bool) {
    let filter = if verbose { "reqgen=debug" } else { "reqgen=warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_usage() {
    println!(
        r#"
reqgen - Requirement-driven test case generation

USAGE:
    reqgen <COMMAND> [OPTIONS]

COMMANDS:
    generate <file>...                Generate test cases from .csv/.json/.txt/.md files
    analyze "<requirement text>"      Analyze one requirement and show its test cases
    schema [name]                     Print JSON schema (config, test-case, requirement, analysis)
    init                              Write a default .reqgen.yaml
    version                           Print version

OPTIONS:
    --json                            JSON output (generate)
    --output <file>                   Output file (default: stdout)
    --config <file>                   Config file (default: ./.reqgen.yaml)
    --id <id>                         Requirement id (analyze, default: REQ001)
    --priority <High|Medium|Low>      Requirement priority (analyze)
    --verbose                         Debug logging (RUST_LOG overrides)

EXAMPLES:
    reqgen generate requirements.csv
    reqgen generate reqs.json notes.md --json --output suite.json
    reqgen analyze "Password must be at least 8 characters" --priority high
"#
    );
}
