//! Configuration for Mindmap.
//!
//! ## config.kdl - Diagram preferences
//!
//! Located at (first match wins):
//! - `--config <FILE>` / `MINDMAP_CONFIG`
//! - `$MINDMAP_CONFIG_DIR/config.kdl`
//! - `~/.config/mindmap/config.kdl`
//!
//! Contains:
//! - `radius` - Radius of the ring children sit on (default 200)
//! - `child-node-size` - Radius of child circles (default 60)
//! - `center-node-size` - Radius of the center circle (default 80)
//! - `surface-width` / `surface-height` - Surface size (default 800x600)
//! - `output-format` - "json" or "human"
//!
//! ## Precedence
//!
//! CLI flag > config.kdl > defaults
//!
//! Use the [`resolver`] module for unified precedence resolution.

pub mod resolver;
pub mod schema;

pub use resolver::{
    ConfigOverrides, MINDMAP_CONFIG_DIR_ENV, MINDMAP_CONFIG_ENV, Resolved, ResolvedConfig,
    ValueSource, config_file_path, load_config_file, resolve_config,
};
pub use schema::{MindmapConfig, OutputFormat};
