//! Artboard: design canvas to layout IR.
//!
//! Artboard reads the SVG a design tool exports for one artboard, together
//! with an optional JSON document of per-element attribute overrides, and
//! produces a typed, anchored layer tree that code emitters can turn into
//! platform UI code.
//!
//! # Pipeline
//!
//! 1. [`ir::io_svg`] walks the document into raw nodes.
//! 2. [`resolve`] completes each node's attributes (own, parent, override).
//! 3. [`layers`] classifies nodes into typed layer variants.
//! 4. [`anchor`] orders top-level layers and anchors each one to a sibling
//!    or to the container edge.
//!
//! # Modules
//!
//! - [`ir`]: Intermediate representation types (Screen, LayerNode, Anchor, etc.)
//! - [`validation`]: Screen validation and error reporting
//! - [`inspect`]: Terminal summary of a parsed screen
//! - [`error`]: Error types for artboard operations

pub mod anchor;
pub mod error;
pub mod inspect;
pub mod ir;
pub mod layers;
pub mod resolve;
pub mod validation;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

pub use error::ArtboardError;

/// The artboard CLI application.
#[derive(Parser)]
#[command(name = "artboard")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Parse a canvas SVG into IR JSON.
    Parse(ParseArgs),
    /// Validate an IR JSON screen for errors and warnings.
    Validate(ValidateArgs),
    /// Parse a canvas SVG and print a summary of its layers and anchors.
    Inspect(InspectArgs),
}

/// Arguments for the parse subcommand.
#[derive(clap::Args)]
struct ParseArgs {
    /// Canvas SVG to parse.
    svg: PathBuf,

    /// Override document (defaults to a sibling `<stem>.json` if present).
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Write IR JSON here instead of printing it.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Id of the artboard group to read (defaults to the first one).
    #[arg(long)]
    artboard: Option<String>,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// IR JSON file to validate.
    input: PathBuf,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the inspect subcommand.
#[derive(clap::Args)]
struct InspectArgs {
    /// Canvas SVG to inspect.
    svg: PathBuf,

    /// Override document (defaults to a sibling `<stem>.json` if present).
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Id of the artboard group to read (defaults to the first one).
    #[arg(long)]
    artboard: Option<String>,
}

/// Run the artboard CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ArtboardError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Parse(args)) => run_parse(args),
        Some(Commands::Validate(args)) => run_validate(args),
        Some(Commands::Inspect(args)) => run_inspect(args),
        None => {
            println!("artboard {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Design canvas to layout IR.");
            println!();
            println!("Run 'artboard --help' for usage information.");
            Ok(())
        }
    }
}

/// The explicit override document, or `<stem>.json` next to the SVG.
fn overrides_for(svg: &Path, explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        let sibling = svg.with_extension("json");
        sibling.is_file().then_some(sibling)
    })
}

fn load_screen(
    svg: &Path,
    overrides: Option<PathBuf>,
    artboard: Option<String>,
) -> Result<ir::Screen, ArtboardError> {
    let overrides = overrides_for(svg, overrides);
    match &overrides {
        Some(path) => log::info!("reading {} with overrides {}", svg.display(), path.display()),
        None => log::info!("reading {} without overrides", svg.display()),
    }
    let options = ir::ParseOptions { artboard };
    ir::io_svg::read_canvas(svg, overrides.as_deref(), &options)
}

/// Execute the parse subcommand.
fn run_parse(args: ParseArgs) -> Result<(), ArtboardError> {
    let screen = load_screen(&args.svg, args.overrides, args.artboard)?;
    log::info!("parsed {} top-level layer(s)", screen.layers.len());

    match &args.output {
        Some(path) => ir::io_json::write_ir_json(path, &screen),
        None => {
            let json = ir::io_json::to_json_string(&screen).map_err(|source| {
                ArtboardError::IrJsonWrite {
                    path: PathBuf::from("<stdout>"),
                    source,
                }
            })?;
            println!("{}", json);
            Ok(())
        }
    }
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), ArtboardError> {
    let screen = ir::io_json::read_ir_json(&args.input)?;

    let opts = validation::ValidateOptions {
        strict: args.strict,
    };
    let report = validation::validate_screen(&screen, &opts);

    // Output results
    match args.output.as_str() {
        "json" => {
            let json = serde_json::json!({
                "error_count": report.error_count(),
                "warning_count": report.warning_count(),
                "issues": &report.issues,
            });
            let text = serde_json::to_string_pretty(&json).map_err(|source| {
                ArtboardError::IrJsonWrite {
                    path: PathBuf::from("<stdout>"),
                    source,
                }
            })?;
            println!("{}", text);
        }
        "text" => print!("{}", report),
        other => {
            return Err(ArtboardError::UnsupportedFormat(format!(
                "'{}' (supported: text, json)",
                other
            )));
        }
    }

    // Determine exit status
    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(ArtboardError::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}

/// Execute the inspect subcommand.
fn run_inspect(args: InspectArgs) -> Result<(), ArtboardError> {
    let screen = load_screen(&args.svg, args.overrides, args.artboard)?;
    let report = inspect::inspect_screen(&screen, &inspect::InspectOptions::default());
    print!("{}", report);
    Ok(())
}
