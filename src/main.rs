use std::fs::File;
use std::path::PathBuf;

use booktrack::core::config::{self, BookTrackConfig, ResolvedConfig};
use booktrack::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "booktrack", about = "Track the book you are reading")]
struct Args {
    /// Config file to use instead of ~/.booktrack/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page count used to turn reading progress into a page number
    #[arg(short, long)]
    total_pages: Option<u32>,

    /// Log level for booktrack.log (error, warn, info, debug, trace, off)
    #[arg(long)]
    log_level: Option<LevelFilter>,

    /// Print the resolved catalog and exit
    #[arg(long)]
    print_catalog: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Level: CLI → env → default
    let level = args
        .log_level
        .or_else(|| {
            std::env::var("BOOKTRACK_LOG_LEVEL")
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .unwrap_or(LevelFilter::Debug);

    // Initialize file logger - writes to booktrack.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("booktrack.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Book tracker starting up");

    let resolved = load_resolved_config(&args);

    if args.print_catalog {
        print_catalog(&resolved);
        return Ok(());
    }

    tui::run(resolved)
}

/// Load and resolve config, falling back to built-in defaults on error.
fn load_resolved_config(args: &Args) -> ResolvedConfig {
    let file_config = config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        log::warn!("{e}; using defaults");
        eprintln!("booktrack: {e}; using defaults");
        BookTrackConfig::default()
    });

    match config::resolve(&file_config, args.total_pages) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::warn!("{e}; using defaults");
            eprintln!("booktrack: {e}; using defaults");
            ResolvedConfig::default()
        }
    }
}

fn print_catalog(resolved: &ResolvedConfig) {
    println!("Library:");
    for book in resolved.catalog.library() {
        println!("  {}", book.title());
    }
    println!("Recommended:");
    for book in resolved.catalog.recommended() {
        println!("  {}", book.title());
    }
    println!("Total pages: {}", resolved.total_pages);
}
