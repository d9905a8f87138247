//! Command implementations for the Mindmap CLI.
//!
//! Each command returns a result type implementing [`CommandResult`], which
//! `main` prints as JSON (the default) or human-readable text.
//! - `render` - Lay out a tree and write it as SVG
//! - `layout` - Report the computed child positions
//! - `config` - Inspect the resolved configuration

use crate::config::{ResolvedConfig, config_file_path};
use crate::diagram::{Position, Scene, draw_diagram, to_svg, write_svg};
use crate::models::{Node, PositionedNode};
use crate::Result;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Command results that can be serialized to JSON or formatted for humans.
pub trait CommandResult {
    /// Serialize to JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// Read a tree document from `input`, or from stdin when `input` is `None` or `-`.
pub fn read_tree(input: Option<&Path>) -> Result<Node> {
    let content = match input {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading tree");
            std::fs::read_to_string(path)?
        }
        _ => {
            debug!("reading tree from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Node::from_json_str(&content)
}

// === Render ===

/// Summary of a render written to a file.
#[derive(Debug, Serialize)]
pub struct RenderResult {
    /// Where the SVG went; `None` means stdout
    pub output: Option<String>,
    pub root: String,
    pub width: f64,
    pub height: f64,
    pub nodes: usize,
    pub links: usize,
}

impl CommandResult for RenderResult {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn to_human(&self) -> String {
        format!(
            "Rendered \"{}\" ({} nodes, {} links, {}x{}) to {}",
            self.root,
            self.nodes,
            self.links,
            self.width,
            self.height,
            self.output.as_deref().unwrap_or("stdout")
        )
    }
}

/// Lay out and render `tree`, writing the SVG to `output` (stdout when `None`).
pub fn render(tree: &Node, output: Option<&Path>, config: &ResolvedConfig) -> Result<RenderResult> {
    let diagram = config.diagram_config();
    let mut scene = Scene::new(diagram.surface_width, diagram.surface_height);
    draw_diagram(&mut scene, tree, &diagram)?;

    write_svg(&to_svg(&scene), output)?;

    Ok(RenderResult {
        output: output.map(|p| p.display().to_string()),
        root: tree.name.clone(),
        width: diagram.surface_width,
        height: diagram.surface_height,
        nodes: scene.node_count(),
        links: scene.link_count(),
    })
}

// === Layout ===

/// Computed positions for a tree.
#[derive(Debug, Serialize)]
pub struct LayoutResult {
    pub root: String,
    pub center: Position,
    pub radius: f64,
    pub children: Vec<PositionedNode>,
}

impl CommandResult for LayoutResult {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "{} at ({:.1}, {:.1}), radius {}",
            self.root, self.center.x, self.center.y, self.radius
        )];
        if self.children.is_empty() {
            lines.push("  (no children)".to_string());
        }
        for child in &self.children {
            lines.push(format!("  {} at ({:.1}, {:.1})", child.name, child.x, child.y));
        }
        lines.join("\n")
    }
}

/// Compute the radial layout of `tree` using the resolved geometry.
pub fn layout(tree: &Node, config: &ResolvedConfig) -> Result<LayoutResult> {
    let diagram = config.diagram_config();
    let children = crate::diagram::layout_with(tree, &diagram)?;
    Ok(LayoutResult {
        root: tree.name.clone(),
        center: diagram.center(),
        radius: diagram.radius,
        children,
    })
}

// === Config ===

/// One resolved setting and where it came from.
#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: serde_json::Value,
    pub source: String,
}

/// The resolved configuration.
#[derive(Debug, Serialize)]
pub struct ConfigShow {
    pub path: Option<String>,
    pub settings: Vec<ConfigEntry>,
}

impl CommandResult for ConfigShow {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn to_human(&self) -> String {
        let mut lines = vec![match &self.path {
            Some(path) => format!("Config file: {}", path),
            None => "Config file: (none)".to_string(),
        }];
        for entry in &self.settings {
            let value = match &entry.value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            lines.push(format!("  {} = {} ({})", entry.key, value, entry.source));
        }
        lines.join("\n")
    }
}

/// Show every setting with its value and source.
pub fn config_show(config: &ResolvedConfig) -> ConfigShow {
    let mut settings: Vec<ConfigEntry> = config
        .geometry()
        .iter()
        .map(|(key, resolved)| ConfigEntry {
            key: key.to_string(),
            value: serde_json::json!(resolved.value),
            source: resolved.source.to_string(),
        })
        .collect();
    settings.push(ConfigEntry {
        key: "output-format".to_string(),
        value: serde_json::json!(config.output_format.value.as_str()),
        source: config.output_format.source.to_string(),
    });

    ConfigShow {
        path: config.path.as_ref().map(|p| p.display().to_string()),
        settings,
    }
}

/// Location of the config file.
#[derive(Debug, Serialize)]
pub struct ConfigPathResult {
    pub path: Option<String>,
    pub exists: bool,
}

impl CommandResult for ConfigPathResult {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn to_human(&self) -> String {
        match &self.path {
            Some(path) if self.exists => path.clone(),
            Some(path) => format!("{} (not created)", path),
            None => "No config directory available on this platform".to_string(),
        }
    }
}

/// Report where the config file is (or would be) read from.
pub fn config_path(explicit: Option<&Path>) -> ConfigPathResult {
    let path: Option<PathBuf> = config_file_path(explicit);
    ConfigPathResult {
        exists: path.as_ref().is_some_and(|p| p.exists()),
        path: path.map(|p| p.display().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigOverrides, ValueSource, resolve_config};
    use tempfile::TempDir;

    fn topic() -> Node {
        Node::with_children(
            "Topic",
            vec![
                Node::leaf("A"),
                Node::leaf("B"),
                Node::leaf("C"),
                Node::leaf("D"),
            ],
        )
    }

    #[test]
    fn test_read_tree_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tree.json");
        std::fs::write(&path, r#"{"name": "Topic", "children": [{"name": "A"}]}"#).unwrap();

        let tree = read_tree(Some(&path)).unwrap();
        assert_eq!(tree.name, "Topic");
        assert_eq!(tree.children().len(), 1);
    }

    #[test]
    fn test_read_tree_missing_file() {
        let err = read_tree(Some(Path::new("/nonexistent/tree.json"))).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn test_render_to_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("map.svg");

        let result = render(&topic(), Some(&out), &ResolvedConfig::default()).unwrap();
        assert_eq!(result.nodes, 5);
        assert_eq!(result.links, 4);
        assert_eq!(result.output, Some(out.display().to_string()));

        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.contains("translate(600, 300)"));
        assert_eq!(svg.matches("<line class=\"link\"").count(), 4);
    }

    #[test]
    fn test_render_rejects_tree_without_children() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("map.svg");

        let err = render(&Node::leaf("Topic"), Some(&out), &ResolvedConfig::default()).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidTree(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_layout_result_json() {
        let result = layout(&topic(), &ResolvedConfig::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();

        assert_eq!(json["root"], "Topic");
        assert_eq!(json["center"]["x"], 400.0);
        assert_eq!(json["center"]["y"], 300.0);
        assert_eq!(json["children"].as_array().unwrap().len(), 4);
        assert_eq!(json["children"][0]["name"], "A");
        assert_eq!(json["children"][0]["x"], 600.0);
    }

    #[test]
    fn test_layout_result_human() {
        let result = layout(&topic(), &ResolvedConfig::default()).unwrap();
        let human = result.to_human();
        assert!(human.starts_with("Topic at (400.0, 300.0), radius 200"));
        assert!(human.contains("  B at (400.0, 500.0)"));
        assert!(human.contains("  D at (400.0, 100.0)"));
    }

    #[test]
    fn test_layout_human_no_children() {
        let tree = Node::with_children("Topic", vec![]);
        let result = layout(&tree, &ResolvedConfig::default()).unwrap();
        assert!(result.to_human().contains("(no children)"));
    }

    #[test]
    fn test_config_show_defaults() {
        let show = config_show(&ResolvedConfig::default());
        assert_eq!(show.path, None);
        assert_eq!(show.settings.len(), 6);
        assert_eq!(show.settings[0].key, "radius");
        assert_eq!(show.settings[0].value, serde_json::json!(200.0));
        assert_eq!(show.settings[0].source, "default");
        assert_eq!(show.settings[5].key, "output-format");
        assert_eq!(show.settings[5].value, serde_json::json!("json"));
    }

    #[test]
    fn test_config_show_human_reports_sources() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.kdl");
        std::fs::write(&path, "radius 150\n").unwrap();

        let overrides = ConfigOverrides::new().with_surface(1000.0, 700.0);
        let resolved = resolve_config(Some(&path), &overrides).unwrap();
        assert_eq!(
            resolved.radius.source,
            ValueSource::ConfigFile(path.display().to_string())
        );

        let human = config_show(&resolved).to_human();
        assert!(human.contains(&format!("  radius = 150.0 (file:{})", path.display())));
        assert!(human.contains("  surface-width = 1000.0 (cli)"));
        assert!(human.contains("  output-format = json (default)"));
    }

    #[test]
    fn test_config_path_explicit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.kdl");

        let result = config_path(Some(&path));
        assert_eq!(result.path, Some(path.display().to_string()));
        assert!(!result.exists);
        assert!(result.to_human().ends_with("(not created)"));

        std::fs::write(&path, "").unwrap();
        assert!(config_path(Some(&path)).exists);
    }
}
