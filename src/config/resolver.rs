//! Precedence resolution for diagram configuration.
//!
//! ## Config file location (first match wins)
//!
//! 1. `--config <FILE>` flag or `MINDMAP_CONFIG` environment variable
//! 2. `$MINDMAP_CONFIG_DIR/config.kdl`
//! 3. `~/.config/mindmap/config.kdl` (platform config directory)
//!
//! An explicitly named file must exist. The implicit locations are optional.
//!
//! ## Value precedence (highest to lowest)
//!
//! 1. CLI flags (passed at runtime)
//! 2. config.kdl
//! 3. Built-in defaults

use super::schema::{MindmapConfig, OutputFormat};
use crate::diagram::DiagramConfig;
use crate::{Error, Result};
use kdl::KdlDocument;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the config file.
pub const MINDMAP_CONFIG_ENV: &str = "MINDMAP_CONFIG";

/// Environment variable overriding the config directory.
pub const MINDMAP_CONFIG_DIR_ENV: &str = "MINDMAP_CONFIG_DIR";

/// Tracks where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Value from CLI flag
    CliFlag,
    /// Value from a config file
    ConfigFile(String),
    /// Built-in default value
    Default,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::CliFlag => write!(f, "cli"),
            ValueSource::ConfigFile(path) => write!(f, "file:{}", path),
            ValueSource::Default => write!(f, "default"),
        }
    }
}

/// A resolved value with its source.
#[derive(Debug, Clone)]
pub struct Resolved<T> {
    /// The resolved value
    pub value: T,
    /// Where the value came from
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    /// Create a new resolved value.
    pub fn new(value: T, source: ValueSource) -> Self {
        Self { value, source }
    }
}

/// Fully resolved configuration with source tracking.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Config file that was consulted, if any existed
    pub path: Option<PathBuf>,
    pub radius: Resolved<f64>,
    pub child_node_size: Resolved<f64>,
    pub center_node_size: Resolved<f64>,
    pub surface_width: Resolved<f64>,
    pub surface_height: Resolved<f64>,
    pub output_format: Resolved<OutputFormat>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let defaults = DiagramConfig::default();
        Self {
            path: None,
            radius: Resolved::new(defaults.radius, ValueSource::Default),
            child_node_size: Resolved::new(defaults.child_node_size, ValueSource::Default),
            center_node_size: Resolved::new(defaults.center_node_size, ValueSource::Default),
            surface_width: Resolved::new(defaults.surface_width, ValueSource::Default),
            surface_height: Resolved::new(defaults.surface_height, ValueSource::Default),
            output_format: Resolved::new(OutputFormat::Json, ValueSource::Default),
        }
    }
}

impl ResolvedConfig {
    /// The diagram geometry described by this configuration.
    pub fn diagram_config(&self) -> DiagramConfig {
        DiagramConfig {
            radius: self.radius.value,
            child_node_size: self.child_node_size.value,
            center_node_size: self.center_node_size.value,
            surface_width: self.surface_width.value,
            surface_height: self.surface_height.value,
        }
    }

    /// Get the output format value.
    pub fn output_format(&self) -> &OutputFormat {
        &self.output_format.value
    }

    /// Geometry settings as `(kdl key, value)` pairs in schema order.
    pub fn geometry(&self) -> [(&'static str, &Resolved<f64>); 5] {
        [
            ("radius", &self.radius),
            ("child-node-size", &self.child_node_size),
            ("center-node-size", &self.center_node_size),
            ("surface-width", &self.surface_width),
            ("surface-height", &self.surface_height),
        ]
    }
}

/// CLI overrides for configuration resolution.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub radius: Option<f64>,
    pub child_node_size: Option<f64>,
    pub center_node_size: Option<f64>,
    pub surface_width: Option<f64>,
    pub surface_height: Option<f64>,
    pub output_format: Option<OutputFormat>,
}

impl ConfigOverrides {
    /// Create empty overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set radius override.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Set surface size override.
    pub fn with_surface(mut self, width: f64, height: f64) -> Self {
        self.surface_width = Some(width);
        self.surface_height = Some(height);
        self
    }

    /// Set output format override.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    fn as_config(&self) -> MindmapConfig {
        MindmapConfig {
            radius: self.radius,
            child_node_size: self.child_node_size,
            center_node_size: self.center_node_size,
            surface_width: self.surface_width,
            surface_height: self.surface_height,
            output_format: self.output_format,
        }
    }
}

/// Locate the config file.
///
/// Returns the explicit path when given, otherwise the implicit location
/// (which may not exist).
pub fn config_file_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(MINDMAP_CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join("config.kdl"));
    }
    dirs::config_dir().map(|d| d.join("mindmap").join("config.kdl"))
}

/// Read, parse and validate a config file.
pub fn load_config_file(path: &Path) -> Result<MindmapConfig> {
    let content = std::fs::read_to_string(path)?;

    let doc: KdlDocument = content.parse().map_err(|e| {
        Error::Config(format!("Failed to parse KDL in {}: {}", path.display(), e))
    })?;

    let config = MindmapConfig::from_kdl(&doc);
    config
        .validate()
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(config)
}

fn pick<T>(
    cli: Option<T>,
    file: Option<T>,
    file_source: &ValueSource,
    default: Resolved<T>,
) -> Resolved<T> {
    if let Some(value) = cli {
        Resolved::new(value, ValueSource::CliFlag)
    } else if let Some(value) = file {
        Resolved::new(value, file_source.clone())
    } else {
        default
    }
}

/// Resolve configuration with full precedence chain.
///
/// Precedence (highest to lowest):
/// 1. CLI flags (from `overrides`)
/// 2. config.kdl (from `explicit`, or the implicit location)
/// 3. Built-in defaults
pub fn resolve_config(
    explicit: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<ResolvedConfig> {
    overrides.as_config().validate().map_err(Error::Config)?;

    let mut result = ResolvedConfig::default();

    let file_config = match config_file_path(explicit) {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "loading config file");
            let config = load_config_file(&path)?;
            result.path = Some(path);
            config
        }
        Some(path) if explicit.is_some() => {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        _ => MindmapConfig::default(),
    };

    let file_source = ValueSource::ConfigFile(
        result
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
    );

    result.radius = pick(
        overrides.radius,
        file_config.radius,
        &file_source,
        result.radius,
    );
    result.child_node_size = pick(
        overrides.child_node_size,
        file_config.child_node_size,
        &file_source,
        result.child_node_size,
    );
    result.center_node_size = pick(
        overrides.center_node_size,
        file_config.center_node_size,
        &file_source,
        result.center_node_size,
    );
    result.surface_width = pick(
        overrides.surface_width,
        file_config.surface_width,
        &file_source,
        result.surface_width,
    );
    result.surface_height = pick(
        overrides.surface_height,
        file_config.surface_height,
        &file_source,
        result.surface_height,
    );
    result.output_format = pick(
        overrides.output_format,
        file_config.output_format,
        &file_source,
        result.output_format,
    );

    Ok(result)
}
