//! Configuration loading from Lua scripts.
//!
//! Loads `init.lua` from the project root (found by walking up from the executable),
//! or from an explicit path given on the command line.

use mlua::{Lua, Result as LuaResult};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Number of cards in the strip
    pub item_count: usize,
    /// Card width as a fraction of the viewport width
    pub item_width_ratio: f32,
    /// Card height in points
    pub item_height: f32,
    /// Gap between adjacent cards
    pub item_spacing: f32,
    /// Card corner radius
    pub corner_radius: f32,
    /// Gap between the strip and the page indicator
    pub indicator_spacing: f32,
    /// Seed for card colors; random when unset
    pub seed: Option<u64>,
    /// Initial window width
    pub window_width: f32,
    /// Initial window height
    pub window_height: f32,
    /// Seconds between frame stat logs (0 disables)
    pub perf_log_interval: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            item_count: 11,
            item_width_ratio: 0.8,
            item_height: 200.0,
            item_spacing: 5.0,
            corner_radius: 8.0,
            indicator_spacing: 20.0,
            seed: None,
            window_width: 375.0,
            window_height: 667.0,
            perf_log_interval: 0.0,
        }
    }
}

impl Config {
    /// Card width for a viewport of the given width.
    pub fn item_width(&self, viewport_width: f32) -> f32 {
        viewport_width * self.item_width_ratio
    }

    /// Check that the values describe a usable carousel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.item_count == 0 {
            return Err(ConfigError::NoItems);
        }
        if !(self.item_width_ratio > 0.0 && self.item_width_ratio <= 1.0) {
            return Err(ConfigError::WidthRatio(self.item_width_ratio));
        }
        if self.item_spacing < 0.0 || !self.item_spacing.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "item_spacing",
                value: self.item_spacing,
            });
        }
        check_positive("item_height", self.item_height)?;
        check_positive("window_width", self.window_width)?;
        check_positive("window_height", self.window_height)?;
        if self.perf_log_interval < 0.0 || !self.perf_log_interval.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "perf_log_interval",
                value: self.perf_log_interval,
            });
        }
        Ok(())
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value <= 0.0 || !value.is_finite() {
        return Err(ConfigError::OutOfRange { field, value });
    }
    Ok(())
}

/// A config value that cannot describe a usable carousel
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("item_count must be at least 1")]
    NoItems,

    #[error("item_width_ratio must be in (0, 1], got {0}")]
    WidthRatio(f32),

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: f32 },
}

/// Find the project root by walking up from the executable location.
/// Looks for `Cargo.toml` or `init.lua` as markers.
fn find_project_root() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let mut current = exe_path.parent()?;

    // Walk up directory tree looking for project markers
    for _ in 0..10 {
        if current.join("Cargo.toml").exists() || current.join("init.lua").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }

    None
}

/// Load configuration from `path`, or from `init.lua` in the project root.
/// Returns default config if no config file exists or on any error.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let Some(project_root) = find_project_root() else {
                log::debug!("Could not find project root, using default config");
                return Config::default();
            };
            project_root.join("init.lua")
        }
    };

    if !config_path.exists() {
        log::debug!("No config found at {}, using default config", config_path.display());
        return Config::default();
    }

    match load_config_from_file(&config_path) {
        Ok(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Err(e) => {
            log::error!("Failed to load config from {}: {}", config_path.display(), e);
            Config::default()
        }
    }
}

/// Load configuration from a specific Lua file.
fn load_config_from_file(path: &Path) -> LuaResult<Config> {
    let script = std::fs::read_to_string(path)
        .map_err(|e| mlua::Error::runtime(format!("Failed to read config file: {}", e)))?;
    load_config_from_str(&script)
}

/// Run a Lua config script against the defaults and read the result back.
pub fn load_config_from_str(script: &str) -> LuaResult<Config> {
    let lua = Lua::new();

    // Create config table with defaults
    let defaults = Config::default();
    lua.load(&format!(
        r#"
        config = {{
            item_count = {item_count},
            item_width_ratio = {item_width_ratio},
            item_height = {item_height},
            item_spacing = {item_spacing},
            corner_radius = {corner_radius},
            indicator_spacing = {indicator_spacing},
            seed = nil,
            window_width = {window_width},
            window_height = {window_height},
            perf_log_interval = {perf_log_interval},
        }}
        "#,
        item_count = defaults.item_count,
        item_width_ratio = defaults.item_width_ratio,
        item_height = defaults.item_height,
        item_spacing = defaults.item_spacing,
        corner_radius = defaults.corner_radius,
        indicator_spacing = defaults.indicator_spacing,
        window_width = defaults.window_width,
        window_height = defaults.window_height,
        perf_log_interval = defaults.perf_log_interval,
    ))
    .exec()?;

    // Execute user script
    lua.load(script).exec()?;

    // Read values back from the table
    let globals = lua.globals();
    let config_table: mlua::Table = globals.get("config")?;

    let config = Config {
        item_count: config_table.get("item_count")?,
        item_width_ratio: config_table.get("item_width_ratio")?,
        item_height: config_table.get("item_height")?,
        item_spacing: config_table.get("item_spacing")?,
        corner_radius: config_table.get("corner_radius")?,
        indicator_spacing: config_table.get("indicator_spacing")?,
        seed: config_table.get("seed")?,
        window_width: config_table.get("window_width")?,
        window_height: config_table.get("window_height")?,
        perf_log_interval: config_table.get("perf_log_interval")?,
    };

    config.validate().map_err(mlua::Error::external)?;

    Ok(config)
}
