//! Radial layout for mind-map trees.
//!
//! Places the direct children of the root at equal angular intervals on a
//! circle around the surface center:
//!
//! - center = `(width / 2, height / 2)`
//! - angle of child `i` of `n` = `(i / n) * 2π`, in insertion order
//! - position = `center + radius * (cos(angle), sin(angle))`
//!
//! Angles grow clockwise on screen because surface `y` grows downward. The
//! root itself is never positioned here; the renderer pins it to the center.

use crate::models::{Node, PositionedNode};
use crate::{Error, Result};
use serde::Serialize;
use std::f64::consts::PI;
use tracing::debug;

/// 2D position/vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a new position
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<&PositionedNode> for Position {
    fn from(node: &PositionedNode) -> Self {
        Position::new(node.x, node.y)
    }
}

/// Geometry and surface configuration for a diagram.
///
/// Default values match the observed diagram: an 800x600 surface, children
/// on a 200-unit ring, 60-unit child circles and an 80-unit center circle.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramConfig {
    /// Radius of the ring the children sit on
    pub radius: f64,
    /// Radius of each child circle
    pub child_node_size: f64,
    /// Radius of the center circle
    pub center_node_size: f64,
    /// Surface width in drawing units
    pub surface_width: f64,
    /// Surface height in drawing units
    pub surface_height: f64,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            radius: 200.0,
            child_node_size: 60.0,
            center_node_size: 80.0,
            surface_width: 800.0,
            surface_height: 600.0,
        }
    }
}

impl DiagramConfig {
    /// Check that every dimension is a positive finite number.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("radius", self.radius),
            ("child-node-size", self.child_node_size),
            ("center-node-size", self.center_node_size),
            ("surface-width", self.surface_width),
            ("surface-height", self.surface_height),
        ];
        for (key, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Config(format!(
                    "{} must be a positive number, got {}",
                    key, value
                )));
            }
        }
        Ok(())
    }

    /// Center point of the configured surface.
    pub fn center(&self) -> Position {
        center(self.surface_width, self.surface_height)
    }
}

/// Center point of a surface with the given dimensions.
pub fn center(width: f64, height: f64) -> Position {
    Position::new(width / 2.0, height / 2.0)
}

/// Angle assigned to child `index` out of `count` siblings.
pub fn child_angle(index: usize, count: usize) -> f64 {
    (index as f64 / count as f64) * 2.0 * PI
}

/// Compute positions for the direct children of `tree`.
///
/// Returns one [`PositionedNode`] per child, in input order. The tree is not
/// modified. Fails with [`Error::InvalidTree`] if the root has no `children`
/// key at all; an empty list is fine and yields an empty layout.
pub fn layout(tree: &Node, width: f64, height: f64, radius: f64) -> Result<Vec<PositionedNode>> {
    let children = tree.children.as_deref().ok_or_else(|| {
        Error::InvalidTree(format!("root `{}` has no `children` sequence", tree.name))
    })?;

    let center = center(width, height);
    let count = children.len();

    let positioned: Vec<PositionedNode> = children
        .iter()
        .enumerate()
        .map(|(i, child)| {
            if !child.children().is_empty() {
                debug!(
                    child = %child.name,
                    dropped = child.children().len(),
                    "ignoring grandchildren; only one level is laid out"
                );
            }
            let angle = child_angle(i, count);
            PositionedNode::new(
                child.name.clone(),
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect();

    debug!(
        root = %tree.name,
        children = count,
        radius,
        "computed radial layout"
    );
    Ok(positioned)
}

/// Compute positions using the dimensions and radius from `config`.
///
/// Fails with [`Error::Config`] if any geometry value is not a positive
/// finite number.
pub fn layout_with(tree: &Node, config: &DiagramConfig) -> Result<Vec<PositionedNode>> {
    config.validate()?;
    layout(
        tree,
        config.surface_width,
        config.surface_height,
        config.radius,
    )
}
