//! Configuration system
//!
//! Gizmo defaults (colors, annotation capability, log filter) can be
//! loaded from TOML or RON files through the [`Config`] trait.

pub use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec4;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        let config: Self = if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        config.validate()?;
        Ok(config)
    }

    /// Check loaded values; called by [`load_from_file`](Self::load_from_file)
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A loaded value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Per-axis colors used by the axis marker
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisColors {
    /// Color of the X axis line
    pub x: Vec4,
    /// Color of the Y axis line
    pub y: Vec4,
    /// Color of the Z axis line
    pub z: Vec4,
}

impl AxisColors {
    /// Color for the axis with the given index (0 = X, 1 = Y, 2 = Z)
    pub fn get(&self, index: usize) -> Vec4 {
        match index {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }
}

impl Default for AxisColors {
    fn default() -> Self {
        Self {
            x: Vec4::new(1.0, 0.0, 0.0, 1.0), // Red
            y: Vec4::new(0.0, 1.0, 0.0, 1.0), // Green
            z: Vec4::new(0.0, 0.0, 1.0, 1.0), // Blue
        }
    }
}

/// # Gizmo Configuration
///
/// Defaults applied to a [`Gizmos`](crate::draw::Gizmos) context when it is
/// built with [`Gizmos::with_config`](crate::draw::Gizmos::with_config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GizmoConfig {
    /// Log filter passed to [`logging::init_with_filter`](crate::foundation::logging::init_with_filter).
    ///
    /// Comma-separated directives, each a bare level (`info`) or
    /// `module=level` (`wire_gizmos=trace`).
    pub log_level: String,
    /// Whether the host can show text annotations (labels are dropped otherwise)
    pub annotations: bool,
    /// Color lines are drawn with until the caller changes it
    pub default_color: Vec4,
    /// Colors of the colored axis marker. Must stay the last field for TOML output.
    pub axis_colors: AxisColors,
}

impl GizmoConfig {
    /// Create a new gizmo configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            annotations: cfg!(debug_assertions),
            default_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            axis_colors: AxisColors::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable or disable text annotations
    pub fn with_annotations(mut self, enabled: bool) -> Self {
        self.annotations = enabled;
        self
    }

    /// Set the default line color
    pub fn with_default_color(mut self, color: Vec4) -> Self {
        self.default_color = color;
        self
    }
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for GizmoConfig {
    /// Reject unknown log levels and non-finite colors
    fn validate(&self) -> Result<(), ConfigError> {
        validate_log_filter(&self.log_level)?;

        let colors = [
            ("default_color", &self.default_color),
            ("axis_colors.x", &self.axis_colors.x),
            ("axis_colors.y", &self.axis_colors.y),
            ("axis_colors.z", &self.axis_colors.z),
        ];
        for (name, color) in colors {
            if color.iter().any(|c| !c.is_finite()) {
                return Err(ConfigError::Invalid(format!("{name} has a non-finite component")));
            }
        }

        Ok(())
    }
}

/// Check an `env_logger` style filter: `level` or `module=level` directives
/// separated by commas, optionally followed by `/regex`.
fn validate_log_filter(filter: &str) -> Result<(), ConfigError> {
    let directives = filter.split('/').next().unwrap_or_default();
    if directives.trim().is_empty() {
        return Err(ConfigError::Invalid("log filter is empty".to_string()));
    }

    for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let (module, level) = match directive.split_once('=') {
            Some((module, level)) => (Some(module.trim()), level.trim()),
            None => (None, directive),
        };
        if module.is_some_and(str::is_empty) {
            return Err(ConfigError::Invalid(format!(
                "log directive '{directive}' has no module"
            )));
        }
        if level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{level}' in '{filter}'"
            )));
        }
    }

    Ok(())
}
