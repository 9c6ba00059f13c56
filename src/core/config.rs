//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.booktrack/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! A `[[library]]` or `[[recommended]]` list in the file replaces the
//! corresponding built-in list; leaving it out keeps the built-in titles.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::book::{Book, BookError, ImageRef};
use crate::core::catalog::{self, Catalog};
use crate::core::state::{DEFAULT_PROGRESS, DEFAULT_PROGRESS_STEP, DEFAULT_TOTAL_PAGES};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BookTrackConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub library: Vec<BookEntry>,
    #[serde(default)]
    pub recommended: Vec<BookEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub total_pages: Option<u32>,
    pub initial_progress: Option<f64>,
    pub progress_step: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookEntry {
    pub title: String,
    pub image: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub total_pages: u32,
    pub initial_progress: f64,
    pub progress_step: f64,
    pub catalog: Catalog,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            total_pages: DEFAULT_TOTAL_PAGES,
            initial_progress: DEFAULT_PROGRESS,
            progress_step: DEFAULT_PROGRESS_STEP,
            catalog: Catalog::builtin(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.booktrack/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".booktrack").join("config.toml"))
}

/// Load config from `~/.booktrack/config.toml`, or from `override_path`
/// when given.
///
/// A missing default file is generated and treated as empty. A missing
/// explicit file is an `Io` error.
pub fn load_config(override_path: Option<&Path>) -> Result<BookTrackConfig, ConfigError> {
    if let Some(path) = override_path {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BookTrackConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BookTrackConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<BookTrackConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BookTrackConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Book Tracker Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# total_pages = 480                  # Or set BOOKTRACK_TOTAL_PAGES env var
# initial_progress = 0.6             # Fraction in [0, 1]
# progress_step = 0.001              # Slider movement per arrow key

# Listing any [[library]] entry replaces the built-in library.
# [[library]]
# title = "The Bell Jar by Sylvia Plath"
# image = "belljar"

# Listing any [[recommended]] entry replaces the built-in recommendations.
# [[recommended]]
# title = "Persuasion by Jane Austen"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

const TOTAL_PAGES_ENV: &str = "BOOKTRACK_TOTAL_PAGES";

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_total_pages` is from the `--total-pages` flag (None = not specified).
pub fn resolve(
    config: &BookTrackConfig,
    cli_total_pages: Option<u32>,
) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli_total_pages, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with env var lookup supplied by the caller.
pub fn resolve_with_env(
    config: &BookTrackConfig,
    cli_total_pages: Option<u32>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Total pages: CLI → env → config → default
    let total_pages = cli_total_pages
        .or_else(|| env_total_pages(&env))
        .or(config.general.total_pages)
        .unwrap_or(DEFAULT_TOTAL_PAGES);
    if total_pages == 0 {
        return Err(ConfigError::Invalid("total_pages must be at least 1".to_string()));
    }

    let initial_progress = config.general.initial_progress.unwrap_or(DEFAULT_PROGRESS);
    if !(0.0..=1.0).contains(&initial_progress) {
        return Err(ConfigError::Invalid(format!(
            "initial_progress must be within [0, 1], got {initial_progress}"
        )));
    }

    let progress_step = config.general.progress_step.unwrap_or(DEFAULT_PROGRESS_STEP);
    if !(progress_step > 0.0 && progress_step <= 1.0) {
        return Err(ConfigError::Invalid(format!(
            "progress_step must be within (0, 1], got {progress_step}"
        )));
    }

    let library = if config.library.is_empty() {
        catalog::builtin_library()
    } else {
        books_from_entries("library", &config.library)?
    };
    let recommended = if config.recommended.is_empty() {
        catalog::builtin_recommended()
    } else {
        books_from_entries("recommended", &config.recommended)?
    };

    Ok(ResolvedConfig {
        total_pages,
        initial_progress,
        progress_step,
        catalog: Catalog::new(library, recommended),
    })
}

fn env_total_pages(env: impl Fn(&str) -> Option<String>) -> Option<u32> {
    let raw = env(TOTAL_PAGES_ENV)?;
    match raw.trim().parse() {
        Ok(pages) => Some(pages),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", TOTAL_PAGES_ENV, raw, e);
            None
        }
    }
}

fn books_from_entries(section: &str, entries: &[BookEntry]) -> Result<Vec<Book>, ConfigError> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Book::new(entry.title.clone(), entry.image.clone().map(ImageRef::new)).map_err(
                |e: BookError| ConfigError::Invalid(format!("{section} entry {}: {e}", i + 1)),
            )
        })
        .collect()
}
