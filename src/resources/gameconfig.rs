//! Runtime configuration resource.
//!
//! Manages loop settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [loop]
//! fixed_dt = 0.016
//! max_frames = 600
//! time_scale = 1.0
//!
//! [stack]
//! initial_state = title
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_FIXED_DT: f32 = 1.0 / 60.0;
const DEFAULT_MAX_FRAMES: u64 = 600;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_INITIAL_STATE: &str = "title";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Runtime configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Seconds advanced per tick.
    pub fixed_dt: f32,
    /// Hard stop for the main loop. Zero means run until the stack empties.
    pub max_frames: u64,
    /// Multiplier applied to `fixed_dt`.
    pub time_scale: f32,
    /// Registry name of the state installed at startup.
    pub initial_state: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            fixed_dt: DEFAULT_FIXED_DT,
            max_frames: DEFAULT_MAX_FRAMES,
            time_scale: DEFAULT_TIME_SCALE,
            initial_state: DEFAULT_INITIAL_STATE.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or a value is malformed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [loop] section
        if let Some(dt) = config
            .getfloat("loop", "fixed_dt")
            .map_err(|e| format!("Invalid loop.fixed_dt: {}", e))?
        {
            if !dt.is_finite() || dt <= 0.0 {
                return Err(format!("loop.fixed_dt must be positive, got {}", dt));
            }
            self.fixed_dt = dt as f32;
        }
        if let Some(frames) = config
            .getuint("loop", "max_frames")
            .map_err(|e| format!("Invalid loop.max_frames: {}", e))?
        {
            self.max_frames = frames;
        }
        if let Some(scale) = config
            .getfloat("loop", "time_scale")
            .map_err(|e| format!("Invalid loop.time_scale: {}", e))?
        {
            if !scale.is_finite() || scale < 0.0 {
                return Err(format!("loop.time_scale must be zero or positive, got {}", scale));
            }
            self.time_scale = scale as f32;
        }

        // [stack] section
        if let Some(name) = config.get("stack", "initial_state") {
            self.initial_state = name;
        }

        info!(
            "Loaded config: fixed_dt={}, max_frames={}, time_scale={}, initial_state={}",
            self.fixed_dt, self.max_frames, self.time_scale, self.initial_state
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [loop] section
        config.set("loop", "fixed_dt", Some(self.fixed_dt.to_string()));
        config.set("loop", "max_frames", Some(self.max_frames.to_string()));
        config.set("loop", "time_scale", Some(self.time_scale.to_string()));

        // [stack] section
        config.set("stack", "initial_state", Some(self.initial_state.clone()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
