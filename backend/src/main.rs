//! sku-export CLI - Prune and filter product spreadsheets
//!
//! # Commands
//!
//! ```bash
//! sku-export export products.csv          # Writes products-export.csv next to the input
//! sku-export export products.xlsx --json  # Prints the result as JSON
//! sku-export parse products.xlsx          # Dump the parsed table as JSON
//! sku-export prefixes                     # Show the removed column prefixes
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` (or put it in `.env`) to change the level.

use clap::{Parser, Subcommand};
use sku_export::{
    content_type_for, create_export, parse_table, ExportRequest, FileFormat, REMOVED_PREFIXES,
    SKU_COLUMN,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sku-export")]
#[command(about = "Prune and filter product spreadsheets (CSV / XLSX)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prune columns, keep rows with a Variant SKU, write <name>-export.<ext>
    Export {
        /// Input .csv or .xlsx file
        input: PathBuf,

        /// Output file (default: derived name next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the result as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Parse a CSV / XLSX file and output the raw table as JSON
    Parse {
        /// Input .csv or .xlsx file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the column prefixes that are removed
    Prefixes,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export {
            input,
            output,
            json,
        } => cmd_export(&input, output.as_deref(), json),

        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),

        Commands::Prefixes => cmd_prefixes(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn input_filename(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn cmd_export(
    input: &Path,
    output: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filename = input_filename(input);
    if !json {
        eprintln!("📄 Processing: {}", input.display());
    }

    let result = create_export(ExportRequest::new(input, filename));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    let (Some(name), Some(buffer)) = (result.filename.as_deref(), result.buffer.as_deref()) else {
        let message = result.error.unwrap_or_else(|| "Export failed".to_string());
        return Err(message.into());
    };

    let target = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_file_name(name),
    };
    fs::write(&target, buffer)?;

    if !json {
        eprintln!("   Rows kept: {}", result.row_count.unwrap_or(0));
        eprintln!("   Content type: {}", content_type_for(name));
        eprintln!("💾 Output written to: {}", target.display());
    }

    Ok(())
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let filename = input_filename(input);
    let format = FileFormat::detect(&filename).ok_or("Unsupported file format")?;

    eprintln!("📄 Parsing {:?}: {}", format, input.display());

    let bytes = fs::read(input)?;
    let table = parse_table(&bytes, format)?;

    if let Some(header) = table.first() {
        eprintln!("   Columns: {}", header.join(", "));
    }
    eprintln!("✅ Parsed {} rows", table.len());

    let json = serde_json::to_string_pretty(&table)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_prefixes() -> Result<(), Box<dyn std::error::Error>> {
    println!("Removed column prefixes (case-sensitive):");
    for prefix in REMOVED_PREFIXES {
        println!("  - {}", prefix);
    }
    println!();
    println!("Rows are kept when '{}' is not blank.", SKU_COLUMN);
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
