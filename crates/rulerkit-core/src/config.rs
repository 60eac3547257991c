use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::kinematics::{Deceleration, Physics};
use crate::mapping::LayoutDirection;
use crate::policy::{SnapPolicy, TickPolicy};
use crate::range::Bounds;
use crate::gesture::Axis;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ruler: RulerConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log files live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// What the ruler edits and how it reacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulerConfig {
    /// Lower bound, unbounded when absent
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper bound, unbounded when absent
    #[serde(default)]
    pub max: Option<f64>,
    /// Value change per cell
    #[serde(default = "default_step")]
    pub step: f64,
    /// Initial value
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub snap: SnapPolicy,
    #[serde(default)]
    pub tick: TickPolicy,
    #[serde(default)]
    pub axis: Axis,
    #[serde(default)]
    pub direction: LayoutDirection,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            step: default_step(),
            value: 0.0,
            snap: SnapPolicy::default(),
            tick: TickPolicy::default(),
            axis: Axis::default(),
            direction: LayoutDirection::default(),
        }
    }
}

impl RulerConfig {
    /// Bounds built from `min`/`max`, missing sides are infinite.
    pub fn bounds(&self) -> crate::Result<Bounds> {
        Bounds::new(
            self.min.unwrap_or(f64::NEG_INFINITY),
            self.max.unwrap_or(f64::INFINITY),
        )
    }
}

/// Scale metrics shared by every skin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Width of one cell in virtual pixels
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,
    /// Graduations per cell
    #[serde(default = "default_fractions")]
    pub fractions: u32,
    /// Extra cells rendered past each edge
    #[serde(default = "default_cell_overflow")]
    pub cell_overflow: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            fractions: default_fractions(),
            cell_overflow: default_cell_overflow(),
        }
    }
}

/// Easing curve for short programmatic animations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump to the end value
    None,
    Linear,
    Cubic,
    Quintic,
    /// Exponential ease-out
    #[default]
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fraction of flick velocity kept per millisecond
    #[serde(default = "default_deceleration_rate")]
    pub deceleration_rate: f64,
    /// Release speed (px/s) above which a drag turns into a flick
    #[serde(default = "default_flick_velocity_threshold")]
    pub flick_velocity_threshold: f64,
    /// Rubber band stiffness, smaller stretches further
    #[serde(default = "default_rubber_coefficient")]
    pub rubber_coefficient: f64,
    #[serde(default = "default_snap_duration_ms")]
    pub snap_duration_ms: u64,
    #[serde(default)]
    pub snap_easing: EasingType,
    /// Speed (px/s) at which a flick is considered stopped
    #[serde(default = "default_inertia_stop_velocity")]
    pub inertia_stop_velocity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            deceleration_rate: default_deceleration_rate(),
            flick_velocity_threshold: default_flick_velocity_threshold(),
            rubber_coefficient: default_rubber_coefficient(),
            snap_duration_ms: default_snap_duration_ms(),
            snap_easing: EasingType::default(),
            inertia_stop_velocity: default_inertia_stop_velocity(),
        }
    }
}

impl PhysicsConfig {
    /// Validate and convert into engine tunables.
    pub fn physics(&self) -> crate::Result<Physics> {
        let deceleration = Deceleration::new(self.deceleration_rate)?
            .with_stop_velocity(self.inertia_stop_velocity)?;
        Physics::new(
            deceleration,
            self.flick_velocity_threshold,
            self.rubber_coefficient,
            Duration::from_millis(self.snap_duration_ms),
            self.snap_easing,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Virtual pixels covered by one terminal column
    #[serde(default = "default_pixels_per_column")]
    pub pixels_per_column: f64,
    /// Virtual pixels covered by one terminal row
    #[serde(default = "default_pixels_per_row")]
    pub pixels_per_row: f64,
    /// Ring the terminal bell when the ruler hits a bound
    #[serde(default)]
    pub bell_on_boundary: bool,
    /// Skin name: "primary", "centered" or "blank"
    #[serde(default = "default_skin")]
    pub skin: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            pixels_per_column: default_pixels_per_column(),
            pixels_per_row: default_pixels_per_row(),
            bell_on_boundary: false,
            skin: default_skin(),
        }
    }
}

impl UiConfig {
    /// Frame interval while animating.
    pub fn frame_interval(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rulerkit")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_step() -> f64 {
    1.0
}

fn default_cell_width() -> f64 {
    120.0
}

fn default_fractions() -> u32 {
    10
}

fn default_cell_overflow() -> u32 {
    3
}

fn default_deceleration_rate() -> f64 {
    crate::kinematics::inertia::RULER_DECELERATION_RATE
}

fn default_flick_velocity_threshold() -> f64 {
    crate::kinematics::FLICK_VELOCITY_THRESHOLD
}

fn default_rubber_coefficient() -> f64 {
    crate::kinematics::RUBBER_COEFFICIENT
}

fn default_snap_duration_ms() -> u64 {
    100
}

fn default_inertia_stop_velocity() -> f64 {
    crate::kinematics::inertia::DEFAULT_STOP_VELOCITY
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_pixels_per_column() -> f64 {
    12.0
}

fn default_pixels_per_row() -> f64 {
    24.0
}

fn default_skin() -> String {
    "primary".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path (~/.config/rulerkit/config.toml)
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("rulerkit")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used while the terminal UI owns stdout
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("rulerkit.log")
    }
}
