//! PDF Merger CLI tool
//!
//! Asks for a folder, lets the user reorder its PDFs with the arrow keys,
//! and merges them into a single file.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use pdf_merger::app::App;
use pdf_merger::console::Console;
use pdf_merger::discover::discover_files;
use pdf_merger::input::TerminalKeys;
use pdf_merger::render::TerminalRenderer;
use pdf_merger::viewer::SystemViewer;
use pdf_merger::Config;

/// PDF Merger - Order a folder of PDFs interactively and merge them
#[derive(Parser)]
#[command(name = "pdf-merger")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "KEYS (while reordering):
    Up/Down     move the selection, or the selected file in move mode
    Right       switch move mode on or off
    Enter/Esc   accept the current order

EXAMPLES:
    # Ask for the folder interactively
    pdf-merger

    # Start in a folder and include XPS files too
    pdf-merger ~/scans --ext pdf --ext xps")]
struct Cli {
    /// Folder containing the files to merge (asked for when missing or invalid)
    folder: Option<PathBuf>,

    /// File extension to include; repeat for more (default: pdf)
    #[arg(short, long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Do not open the merged file afterwards
    #[arg(long)]
    no_open: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            folder: self.folder,
            open_output: !self.no_open,
            ..Config::default()
        }
        .with_extensions(self.extensions)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.into_config()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut keys = TerminalKeys::new();
    let mut renderer = TerminalRenderer::new(io::stdout());
    let mut viewer = SystemViewer;

    let mut app = App {
        config: &config,
        discover: discover_files,
        console: Console::new(stdin.lock(), io::stdout()),
        keys: &mut keys,
        renderer: &mut renderer,
        viewer: &mut viewer,
    };

    let output = app.run(Utc::now()).context("merge session failed")?;
    tracing::debug!(output = %output.display(), "done");
    Ok(())
}
