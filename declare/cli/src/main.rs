//! Declare CLI - generates TypeScript declarations for an apis document

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use declare_lib::loader::DEFAULT_APIS_PATH;
use declare_lib::{DeclareOptions, OverwritePolicy, WriteOutcome, generate_and_write};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "declare")]
#[command(author, version, about = "Generate .d.ts api declarations from an apis document", long_about = None)]
struct Cli {
    /// Apis JSON document, or a directory containing index.json
    #[arg(value_name = "APIS_PATH", default_value = DEFAULT_APIS_PATH)]
    apis_path: PathBuf,

    /// Declaration file to write [default: <APIS_DIR>/<NAME>.d.ts]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Overwrite an existing declaration file without asking
    #[arg(short, long, conflicts_with = "no_clobber")]
    force: bool,

    /// Never overwrite an existing declaration file
    #[arg(long)]
    no_clobber: bool,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overwrite_policy(&self) -> OverwritePolicy {
        if self.force {
            OverwritePolicy::Force
        } else if self.no_clobber {
            OverwritePolicy::Skip
        } else {
            OverwritePolicy::Prompt
        }
    }

    fn options(&self) -> DeclareOptions {
        DeclareOptions {
            source: self.apis_path.clone(),
            output: self.output.clone(),
            overwrite: self.overwrite_policy(),
            dry_run: self.dry_run,
        }
    }
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,declare_lib=info".to_string(),
            2 => "info,declare_lib=debug".to_string(),
            _ => "debug,declare_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

/// Asks before replacing an existing declaration file.
///
/// A cancelled or failed prompt counts as "no", and so does a non-interactive
/// stdin.
fn confirm_overwrite(target: &Path) -> bool {
    if !std::io::stdin().is_terminal() {
        tracing::warn!(target_path = %target.display(), "Target file exists and stdin is not a terminal; not overwriting.");
        return false;
    }

    inquire::Confirm::new("Target file exists. Continue?")
        .with_default(false)
        .with_help_message(&target.display().to_string())
        .prompt()
        .unwrap_or(false)
}

/// Path relative to the working directory when possible, for messages.
fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    let options = cli.options();
    tracing::debug!(?options, "Declare CLI starting");

    let generation = generate_and_write(&options, confirm_overwrite)
        .wrap_err_with(|| format!("Failed to generate api declarations from {}", options.source.display()))?;

    let target = display_path(&generation.target);
    match generation.outcome {
        None => println!("{}", generation.code),
        Some(WriteOutcome::Created) => println!("Generated api declarations -> {}", target),
        Some(WriteOutcome::Overwritten) => println!("Overwrote api declarations -> {}", target),
        Some(WriteOutcome::Skipped) => println!("Skipped existing api declarations -> {}", target),
    }

    Ok(())
}
