//! CLI argument definitions for Mindmap.

use crate::config::{ConfigOverrides, MINDMAP_CONFIG_ENV};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Mindmap - Render topic/concept analysis results as radial diagrams.
///
/// Feed the JSON tree returned by the analysis service to `mindmap render`.
#[derive(Parser, Debug)]
#[command(name = "mindmap")]
#[command(author, version, about = "Render topic/concept analysis results as radial mind-map diagrams", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    /// Read configuration from this KDL file instead of the default location.
    /// Can also be set via MINDMAP_CONFIG environment variable.
    #[arg(long = "config", global = true, env = MINDMAP_CONFIG_ENV)]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a tree to an SVG diagram
    ///
    /// The tree is the analysis service's JSON response, e.g.
    /// {"name": "Topic", "children": [{"name": "A"}, {"name": "B"}]}.
    Render {
        /// JSON tree file ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Write the SVG here instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        geometry: GeometryArgs,
    },

    /// Print the computed positions of the root's children
    Layout {
        /// JSON tree file ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        #[command(flatten)]
        geometry: GeometryArgs,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Geometry overrides shared by `render` and `layout`
#[derive(Args, Debug, Clone, Default)]
pub struct GeometryArgs {
    /// Radius of the ring children are placed on
    #[arg(long)]
    pub radius: Option<f64>,

    /// Surface width
    #[arg(long)]
    pub width: Option<f64>,

    /// Surface height
    #[arg(long)]
    pub height: Option<f64>,

    /// Radius of each child circle
    #[arg(long = "child-size")]
    pub child_size: Option<f64>,

    /// Radius of the center circle
    #[arg(long = "center-size")]
    pub center_size: Option<f64>,
}

impl GeometryArgs {
    /// Convert the flags into config overrides.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            radius: self.radius,
            child_node_size: self.child_size,
            center_node_size: self.center_size,
            surface_width: self.width,
            surface_height: self.height,
            output_format: None,
        }
    }
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the resolved configuration and where each value came from
    Show,

    /// Print the config file location
    Path,
}
