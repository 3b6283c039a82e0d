//! ds-rich - Rich terminal output for Death Star Pi scripts
//!
//! One-shot dispatcher: each invocation renders exactly one output shape
//! (header, section banner, status line, check line, table, summary,
//! progress bar, or disclaimer) to stdout and exits. The setup scripts
//! call it wherever they used to echo raw ANSI.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use deathstar_cli::Renderer;
use deathstar_core::error::exit_codes;
use deathstar_core::report::{RunSummary, StatusTier};

/// Rich terminal output helper for Death Star Pi scripts
#[derive(Parser)]
#[command(name = "ds-rich")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a boxed header
    Header {
        /// Title text
        #[arg(long, default_value = "Header")]
        title: String,

        /// Subtitle text
        #[arg(long, default_value = "")]
        subtitle: String,
    },

    /// Print a section banner
    Section {
        /// Section title
        #[arg(long, default_value = "Section")]
        title: String,
    },

    /// Print a status message
    Status {
        /// Message text
        #[arg(long, default_value = "Status")]
        message: String,

        /// Style (info, success, warning, error)
        #[arg(long, default_value = "info")]
        style: String,
    },

    /// Print a check result
    Check {
        /// Check name
        #[arg(long, default_value = "Check")]
        name: String,

        /// Status (PASS, FAIL, WARN, INFO)
        #[arg(long, default_value = "PASS")]
        status: String,

        /// Additional details
        #[arg(long, default_value = "")]
        details: String,
    },

    /// Print a formatted table
    Table {
        /// Table title
        #[arg(long, default_value = "")]
        title: String,

        /// Comma-delimited column headers
        #[arg(long)]
        headers: Option<String>,

        /// Comma-delimited row cells; repeat for more rows
        #[arg(long)]
        row: Vec<String>,
    },

    /// Print summary statistics with an overall status panel
    Summary {
        /// Total count
        #[arg(long, default_value_t = 0)]
        total: u32,

        /// Passed count
        #[arg(long, default_value_t = 0)]
        passed: u32,

        /// Warning count
        #[arg(long, default_value_t = 0)]
        warnings: u32,

        /// Failed count
        #[arg(long, default_value_t = 0)]
        failed: u32,

        /// Success rate percentage (derived from counts if omitted)
        #[arg(long)]
        rate: Option<u32>,

        /// Overall status (EXCELLENT, GOOD, NEEDS_ATTENTION)
        #[arg(long)]
        overall_status: Option<String>,
    },

    /// Show a progress bar
    Progress {
        /// Progress description
        #[arg(long, default_value = "Processing")]
        message: String,
    },

    /// Print a disclaimer box
    Disclaimer {
        /// Type (legal, removal, system_removal)
        #[arg(long = "type", default_value = "legal")]
        kind: String,
    },
}

fn split_cells(raw: &str) -> Vec<String> {
    raw.split(',').map(|cell| cell.trim().to_string()).collect()
}

/// An explicitly empty flag value falls back to the subcommand default,
/// same as an absent flag. The setup scripts pass flag values straight
/// from shell variables, which arrive empty when unset.
fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

fn run(command: Commands) -> deathstar_core::Result<()> {
    let mut renderer = Renderer::stdout();
    match command {
        Commands::Header { title, subtitle } => {
            renderer.header(&non_empty_or(title, "Header"), &subtitle)?;
        }
        Commands::Section { title } => renderer.section(&non_empty_or(title, "Section"))?,
        Commands::Status { message, style } => renderer.status(
            &non_empty_or(message, "Status"),
            &non_empty_or(style, "info"),
        )?,
        Commands::Check {
            name,
            status,
            details,
        } => renderer.check(
            &non_empty_or(name, "Check"),
            &non_empty_or(status, "PASS"),
            &details,
        )?,
        Commands::Table {
            title,
            headers,
            row,
        } => {
            let headers = headers
                .as_deref()
                .filter(|cells| !cells.is_empty())
                .map(split_cells)
                .unwrap_or_default();
            let rows: Vec<Vec<String>> = row.iter().map(|cells| split_cells(cells)).collect();
            renderer.table(&headers, &rows, &title)?;
        }
        Commands::Summary {
            total,
            passed,
            warnings,
            failed,
            rate,
            overall_status,
        } => {
            let mut summary = RunSummary::new(total, passed, warnings, failed);
            if let Some(rate) = rate {
                summary = summary.with_rate(rate);
            }
            if let Some(tag) = overall_status.filter(|tag| !tag.is_empty()) {
                summary = summary.with_overall(StatusTier::from_tag(&tag));
            }
            renderer.summary(&summary)?;
        }
        Commands::Progress { message } => {
            renderer.progress(&non_empty_or(message, "Processing"))?;
        }
        Commands::Disclaimer { kind } => renderer.disclaimer(&non_empty_or(kind, "legal"))?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("deathstar_cli=debug")
            .init();
    }

    let exit_code = match run(cli.command) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            exit_codes::FAILURE
        }
    };

    std::process::exit(exit_code);
}
