use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use iris_transport_core::config::{Config, NamespacePolicy};
use iris_transport_core::validation::{
    DocumentError, ValidationReport, classify_root, load_document, validate_file,
};
use iris_transport_core::Shape;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "iris-transport", version)]
#[command(about = "Validate IRIS transport negotiation XML documents")]
struct Cli {
    /// Repeat for more verbose logs (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one or more documents against the transport schema.
    Validate {
        #[arg(long = "document", required = true, num_args = 1..)]
        documents: Vec<PathBuf>,
        #[arg(long, default_value = "lenient")]
        namespace_policy: NamespacePolicy,
        /// Print one JSON report per document instead of OK/FAIL lines.
        #[arg(long)]
        json: bool,
    },
    /// Print the shape of a document without validating it.
    Shape {
        #[arg(long)]
        document: PathBuf,
        #[arg(long, default_value = "lenient")]
        namespace_policy: NamespacePolicy,
    },
}

// 0: all documents conform, 1: at least one rejected, 2: a fatal schema mismatch
const EXIT_INVALID: u8 = 1;
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_format);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_INVALID)
        }
    }
}

fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Validate {
            documents,
            namespace_policy,
            json,
        } => validate(&documents, &Config::new(namespace_policy), json),
        Commands::Shape {
            document,
            namespace_policy,
        } => shape(&document, &Config::new(namespace_policy)),
    }
}

fn validate(documents: &[PathBuf], config: &Config, json: bool) -> Result<ExitCode> {
    let mut exit = 0;
    for path in documents {
        let outcome = validate_file(path, config);
        if json {
            let report = ValidationReport::new(path.display().to_string(), &outcome);
            let line = serde_json::to_string(&report).context("serialize validation report")?;
            println!("{line}");
        } else {
            match &outcome {
                Ok(shape) => println!("OK {} ({shape})", path.display()),
                Err(err) if err.is_fatal() => println!("FATAL {}: {}", path.display(), err.chain()),
                Err(err) => println!("FAIL {}: {}", path.display(), err.chain()),
            }
        }
        if let Err(err) = &outcome {
            exit = exit.max(exit_code(err));
        }
    }
    Ok(ExitCode::from(exit))
}

fn shape(path: &Path, config: &Config) -> Result<ExitCode> {
    let document = path.display().to_string();
    let detected: Result<Shape, DocumentError> = load_document(path).and_then(|doc| {
        let root = doc.get_root_element().ok_or_else(|| DocumentError::Access {
            document: document.clone(),
            reason: "document has no root element".to_string(),
        })?;
        classify_root(&root, &document, config)
    });
    match detected {
        Ok(shape) => {
            println!("{shape}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", err.chain());
            Ok(ExitCode::from(exit_code(&err)))
        }
    }
}

fn exit_code(err: &DocumentError) -> u8 {
    if err.is_fatal() { EXIT_FATAL } else { EXIT_INVALID }
}
