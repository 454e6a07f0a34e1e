use clap::Parser;
use config::{
    Config as ConfigCrate, ConfigError as ConfigCrateError, Environment, File, Map, Source, Value,
};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::viewport::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, MAX_ZOOM_LIMIT};

const DEFAULT_ZOOM_STEP: f64 = 1.2;
const DEFAULT_SPAWN_WIDTH: f64 = 500.0;
const DEFAULT_SPAWN_HEIGHT: f64 = 500.0;
const DEFAULT_GRID_GAP: f64 = 25.0;
const DEFAULT_DOUBLE_CLICK_MS: u64 = 400;
const DEFAULT_LOG_LEVEL: &str = "info";

pub const ENV_PREFIX: &str = "CORKBOARD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    Validation(String),
}

// Values read from the config file and environment. Everything is optional
// so that each layer only overrides what it sets.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    min_zoom: Option<f64>,
    max_zoom: Option<f64>,
    zoom_step: Option<f64>,
    spawn_width: Option<f64>,
    spawn_height: Option<f64>,
    grid_gap: Option<f64>,
    show_grid: Option<bool>,
    show_minimap: Option<bool>,
    welcome_card: Option<bool>,
    double_click_ms: Option<u64>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "A bulletin board for the terminal", long_about = None)]
pub struct CliArgs {
    /// Path to a custom configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Smallest zoom factor the canvas allows
    #[arg(long)]
    pub min_zoom: Option<f64>,

    /// Largest zoom factor the canvas allows
    #[arg(long)]
    pub max_zoom: Option<f64>,

    /// Start with an empty board instead of the welcome card
    #[arg(long)]
    pub no_welcome: bool,

    /// Hide the minimap
    #[arg(long)]
    pub no_minimap: bool,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `corkboard=trace`
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    pub spawn_width: f64,
    pub spawn_height: f64,
    pub grid_gap: f64,
    pub show_grid: bool,
    pub show_minimap: bool,
    pub welcome_card: bool,
    pub double_click_ms: u64,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            spawn_width: DEFAULT_SPAWN_WIDTH,
            spawn_height: DEFAULT_SPAWN_HEIGHT,
            grid_gap: DEFAULT_GRID_GAP,
            show_grid: true,
            show_minimap: true,
            welcome_card: true,
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            return Err(ConfigError::Validation(format!(
                "min_zoom must be positive, got {}",
                self.min_zoom
            )));
        }
        if !(self.max_zoom.is_finite() && self.max_zoom <= MAX_ZOOM_LIMIT) {
            return Err(ConfigError::Validation(format!(
                "max_zoom must be at most {MAX_ZOOM_LIMIT}, got {}",
                self.max_zoom
            )));
        }
        if self.max_zoom < self.min_zoom {
            return Err(ConfigError::Validation(format!(
                "max_zoom ({}) is below min_zoom ({})",
                self.max_zoom, self.min_zoom
            )));
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(ConfigError::Validation(format!(
                "zoom_step must be a finite value greater than 1, got {}",
                self.zoom_step
            )));
        }
        let spawn_ok = [self.spawn_width, self.spawn_height]
            .iter()
            .all(|side| side.is_finite() && *side > 0.0);
        if !spawn_ok {
            return Err(ConfigError::Validation(format!(
                "spawn_width and spawn_height must be finite and positive, got {} x {}",
                self.spawn_width, self.spawn_height
            )));
        }
        if !(self.grid_gap.is_finite() && self.grid_gap > 0.0) {
            return Err(ConfigError::Validation(format!(
                "grid_gap must be finite and positive, got {}",
                self.grid_gap
            )));
        }
        if self.double_click_ms == 0 {
            return Err(ConfigError::Validation(
                "double_click_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "corkboard").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Resolves the configuration: CLI arguments over `CORKBOARD_*` environment
/// variables over the config file over built-in defaults.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_map: Map<String, Value> = Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .collect()?;
    build_config(args, Some(env_map))
}

fn build_config(
    args: &CliArgs,
    overrides: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigCrate::builder();

    if let Some(path) = args.config.clone().or_else(default_config_path) {
        // An explicitly requested file has to exist.
        let required = args.config.is_some();
        builder = builder.add_source(File::from(path).required(required));
    }

    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            builder = builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = builder.build()?.try_deserialize()?;
    let defaults = AppConfig::default();

    let config = AppConfig {
        min_zoom: args
            .min_zoom
            .or(loaded.min_zoom)
            .unwrap_or(defaults.min_zoom),
        max_zoom: args
            .max_zoom
            .or(loaded.max_zoom)
            .unwrap_or(defaults.max_zoom),
        zoom_step: loaded.zoom_step.unwrap_or(defaults.zoom_step),
        spawn_width: loaded.spawn_width.unwrap_or(defaults.spawn_width),
        spawn_height: loaded.spawn_height.unwrap_or(defaults.spawn_height),
        grid_gap: loaded.grid_gap.unwrap_or(defaults.grid_gap),
        show_grid: loaded.show_grid.unwrap_or(defaults.show_grid),
        show_minimap: !args.no_minimap && loaded.show_minimap.unwrap_or(defaults.show_minimap),
        welcome_card: !args.no_welcome && loaded.welcome_card.unwrap_or(defaults.welcome_card),
        double_click_ms: loaded.double_click_ms.unwrap_or(defaults.double_click_ms),
        log_file: args.log_file.clone().or(loaded.log_file),
        log_level: args
            .log_level
            .clone()
            .or(loaded.log_level)
            .unwrap_or(defaults.log_level),
    };

    config.validate()?;
    Ok(config)
}
