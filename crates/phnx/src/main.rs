//! PhnxByte CLI.
//!
//! Generates a TypeScript client package (types, Zod schemas, fetch
//! client, React hooks, adapters) from an OpenAPI spec file.

use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use phnx_codegen::Generator;

#[derive(Parser, Debug)]
#[command(name = "phnx", about = "PhnxByte: type-safe API client generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a TypeScript client from an OpenAPI spec (JSON or YAML).
    Generate {
        /// Path to the OpenAPI spec.
        #[arg(short, long)]
        input: String,

        /// Output directory.
        #[arg(short, long, default_value = "generated")]
        output: String,
    },

    /// Parse and shallow-validate a spec without generating anything.
    Validate {
        /// Path to the OpenAPI spec.
        #[arg(short, long)]
        input: String,

        /// Output format (text or json).
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Validation result for one spec file.
#[derive(serde::Serialize)]
struct ValidationResult {
    file: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the generate command.
fn run_generate(input: &str, output: &str) -> ExitCode {
    let input_path = Path::new(input);
    if !input_path.exists() {
        eprintln!("error: spec file not found: {input}");
        return ExitCode::from(1);
    }

    let content = match std::fs::read_to_string(input_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: failed to read {input}: {e}");
            return ExitCode::from(1);
        }
    };

    eprintln!("reading spec from {input}...");

    let generation = match Generator::new().generate(content) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error: generation failed: {e}");
            return ExitCode::from(1);
        }
    };

    let output_dir = Path::new(output);
    if let Err(e) = std::fs::create_dir_all(output_dir) {
        eprintln!("error: failed to create {output}: {e}");
        return ExitCode::from(1);
    }

    for file in &generation.files {
        let path = output_dir.join(&file.file_name);
        if let Err(e) = std::fs::write(&path, &file.content) {
            eprintln!("error: failed to write {}: {e}", path.display());
            return ExitCode::from(1);
        }
        println!("  - wrote {}", file.file_name);
    }

    eprintln!(
        "generated {} file(s) for '{}' in {}",
        generation.files.len(),
        generation.project_name,
        output
    );
    ExitCode::SUCCESS
}

/// Run the validate command.
fn run_validate(input: &str, format: &str) -> ExitCode {
    if format != "text" && format != "json" {
        eprintln!("error: invalid format: {format} (expected text or json)");
        return ExitCode::from(1);
    }

    let result = match phnx_spec_parser::parse_spec_file(Path::new(input)) {
        Ok(doc) => {
            if phnx_spec_parser::validate(&doc) {
                ValidationResult {
                    file: input.to_string(),
                    valid: true,
                    error: None,
                }
            } else {
                ValidationResult {
                    file: input.to_string(),
                    valid: false,
                    error: Some("missing openapi version marker or paths".to_string()),
                }
            }
        }
        Err(e) => ValidationResult {
            file: input.to_string(),
            valid: false,
            error: Some(e.to_string()),
        },
    };

    if format == "json" {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize result: {e}");
                return ExitCode::from(1);
            }
        }
    } else if result.valid {
        eprintln!("✓ {} is valid", result.file);
    } else {
        eprintln!(
            "✗ {} is invalid: {}",
            result.file,
            result.error.as_deref().unwrap_or("unknown error")
        );
    }

    if result.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => run_generate(&input, &output),
        Commands::Validate { input, format } => run_validate(&input, &format),
    }
}
