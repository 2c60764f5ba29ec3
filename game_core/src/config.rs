use std::fmt;
use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::Deserialize;

use crate::components::Player;
use crate::geometry::{Bounds, Rect};
use crate::params::Params;

/// Errors raised while loading a [`Config`]
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config: {e}"),
            Self::Parse(e) => write!(f, "failed to parse config: {e}"),
            Self::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

/// Game configuration, fixed for the lifetime of a court
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub wall_size: f32,
    pub court_margin_x: f32,
    pub court_margin_y: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_acceleration: f32,
    pub ai_reaction_distance: f32,
    pub ai_tolerance: f32,
    pub ai_step: f32,
    pub win_score: u32,
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::COURT_WIDTH,
            height: Params::COURT_HEIGHT,
            wall_size: Params::WALL_SIZE,
            court_margin_x: Params::COURT_MARGIN_X,
            court_margin_y: Params::COURT_MARGIN_Y,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_acceleration: Params::BALL_ACCELERATION,
            ai_reaction_distance: Params::AI_REACTION_DISTANCE,
            ai_tolerance: Params::AI_TOLERANCE,
            ai_step: Params::AI_STEP,
            win_score: Params::WIN_SCORE,
            fps: Params::FPS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration resized to the given canvas
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) TOML document and validate the result
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load a config file, falling back to defaults when it cannot be used
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("ball_acceleration", self.ball_acceleration),
            ("ai_step", self.ai_step),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("wall_size", self.wall_size),
            ("court_margin_x", self.court_margin_x),
            ("court_margin_y", self.court_margin_y),
            ("ai_reaction_distance", self.ai_reaction_distance),
            ("ai_tolerance", self.ai_tolerance),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if self.win_score == 0 {
            return Err(ConfigError::Invalid("win_score must be at least 1".into()));
        }
        if !(1..=240).contains(&self.fps) {
            return Err(ConfigError::Invalid(format!(
                "fps must be within 1..=240, got {}",
                self.fps
            )));
        }

        let walls = 2.0 * (self.court_margin_y + self.wall_size);
        if self.height <= walls + self.paddle_height {
            return Err(ConfigError::Invalid(format!(
                "height {} leaves no room for a paddle between the walls",
                self.height
            )));
        }

        Ok(())
    }

    /// Tick period for the configured frame rate
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    /// Playable edges derived from the canvas size and the walls
    pub fn bounds(&self) -> Bounds {
        let wall_edge = self.court_margin_y + self.wall_size;
        Bounds {
            upper: wall_edge,
            lower: self.height - wall_edge,
            left: 0.0,
            right: self.width,
        }
    }

    /// Centre of the canvas, where the ball is served from
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top-left start position of a player's paddle
    pub fn paddle_spawn(&self, player: Player) -> Vec2 {
        let y = self.height / 2.0 - self.paddle_height / 2.0;
        match player {
            Player::One => Vec2::new(self.paddle_width, y),
            Player::Two => Vec2::new(self.width - 2.0 * self.paddle_width, y),
        }
    }

    /// The "Start Match" control, centred on the canvas
    pub fn start_button(&self) -> Rect {
        Rect::new(
            self.width / 2.0 - Params::BUTTON_WIDTH / 2.0,
            self.height / 2.0 - Params::BUTTON_HEIGHT / 2.0,
            Params::BUTTON_WIDTH,
            Params::BUTTON_HEIGHT,
        )
    }
}
