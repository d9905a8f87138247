//! Typed view of `config.kdl`.
//!
//! Numeric settings are read leniently: an entry of the wrong type is
//! skipped with a warning, and range checks happen in
//! [`MindmapConfig::validate`].

use kdl::{KdlDocument, KdlValue};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Human,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Human => "human",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else if s.eq_ignore_ascii_case("human") {
            Ok(Self::Human)
        } else {
            Err(format!("unknown output format `{}` (expected json or human)", s))
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagram preferences stored in config.kdl.
///
/// Every field is optional; unset fields fall through to the next layer of
/// the precedence chain (see [`super::resolver`]).
///
/// # KDL Schema
///
/// ```kdl
/// radius 200
/// child-node-size 60
/// center-node-size 80
/// surface-width 800
/// surface-height 600
/// output-format "human"  // or "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MindmapConfig {
    /// Radius of the ring children are placed on
    pub radius: Option<f64>,

    /// Radius of each child circle
    pub child_node_size: Option<f64>,

    /// Radius of the center circle
    pub center_node_size: Option<f64>,

    /// Surface width in drawing units
    pub surface_width: Option<f64>,

    /// Surface height in drawing units
    pub surface_height: Option<f64>,

    /// Default output format for CLI commands
    pub output_format: Option<OutputFormat>,
}

/// KDL node names of the numeric geometry settings, in schema order.
pub const GEOMETRY_KEYS: [&str; 5] = [
    "radius",
    "child-node-size",
    "center-node-size",
    "surface-width",
    "surface-height",
];

impl MindmapConfig {
    fn geometry(&self) -> [Option<f64>; 5] {
        [
            self.radius,
            self.child_node_size,
            self.center_node_size,
            self.surface_width,
            self.surface_height,
        ]
    }

    fn geometry_mut(&mut self) -> [&mut Option<f64>; 5] {
        [
            &mut self.radius,
            &mut self.child_node_size,
            &mut self.center_node_size,
            &mut self.surface_width,
            &mut self.surface_height,
        ]
    }

    /// Check that every geometry value is a positive finite number.
    pub fn validate(&self) -> Result<(), String> {
        for (key, value) in GEOMETRY_KEYS.iter().zip(self.geometry()) {
            if let Some(v) = value {
                if !(v.is_finite() && v > 0.0) {
                    return Err(format!("{} must be a positive number, got {}", key, v));
                }
            }
        }
        Ok(())
    }

    /// Read the recognised settings out of `doc`. Unknown nodes are ignored.
    pub fn from_kdl(doc: &KdlDocument) -> Self {
        let mut config = Self::default();

        for (key, slot) in GEOMETRY_KEYS.iter().zip(config.geometry_mut()) {
            if let Some(node) = doc.get(key) {
                if let Some(entry) = node.entries().first() {
                    match number_of(entry.value()) {
                        Some(n) => *slot = Some(n),
                        None => warn!(key = *key, "ignoring non-numeric config value"),
                    }
                }
            }
        }

        let format = doc
            .get("output-format")
            .and_then(|node| node.entries().first())
            .map(|entry| entry.value());
        match format.map(|v| v.as_string().map(str::parse::<OutputFormat>)) {
            Some(Some(Ok(format))) => config.output_format = Some(format),
            Some(Some(Err(e))) => warn!("ignoring output-format: {}", e),
            Some(None) => warn!(key = "output-format", "ignoring non-string config value"),
            None => {}
        }

        config
    }
}

fn number_of(value: &KdlValue) -> Option<f64> {
    match value {
        KdlValue::Integer(i) => Some(*i as f64),
        KdlValue::Float(f) => Some(*f),
        _ => None,
    }
}
