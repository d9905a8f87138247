//! Abstract rendering commands for mindmap diagrams.
//!
//! The renderer turns a root node and its positioned children into
//! platform-agnostic primitives and draws them onto a [`Surface`]. A render
//! call always starts by clearing the surface, then draws:
//!
//! 1. one link per child, from the center to the child
//! 2. one child node group per child (circle + centered label)
//! 3. the center node group (larger circle + centered label)
//!
//! Labels are never truncated, wrapped or shrunk, so long names may overflow
//! their circle. Child circles may overlap when there are many children.

use super::layout::{self, DiagramConfig, Position};
use super::scene::{NodeGroup, NodeRole, SceneItem, Surface};
use super::theme;
use crate::models::{Node, PositionedNode};
use crate::{Error, Result};
use tracing::debug;

/// A render command that can be executed on any rendering backend
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw a filled circle
    FillCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: String,
    },
    /// Draw a stroked circle
    StrokeCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: String,
        line_width: f64,
    },
    /// Draw a line
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
        line_width: f64,
    },
    /// Draw text centered horizontally and vertically on `(x, y)`
    Text {
        x: f64,
        y: f64,
        text: String,
        color: String,
        font_size: f64,
        font_weight: FontWeight,
    },
}

/// Font weight for text rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Node circle and label styling
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    /// Circle radius
    pub radius: f64,
    /// Fill color
    pub fill: String,
    /// Border color and width, if the circle has a border
    pub stroke: Option<(String, f64)>,
    /// Label color
    pub text_color: String,
    /// Label font size
    pub font_size: f64,
    /// Label font weight
    pub font_weight: FontWeight,
}

/// Link styling
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStyle {
    pub color: String,
    pub line_width: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            color: theme::link::COLOR.to_string(),
            line_width: theme::link::WIDTH,
        }
    }
}

/// Complete styling for one diagram
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub child: NodeStyle,
    pub center: NodeStyle,
    pub link: EdgeStyle,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_config(&DiagramConfig::default())
    }
}

impl RenderStyle {
    /// Theme styling with node sizes taken from `config`.
    pub fn from_config(config: &DiagramConfig) -> Self {
        Self {
            child: NodeStyle {
                radius: config.child_node_size,
                fill: theme::child::FILL.to_string(),
                stroke: Some((
                    theme::child::STROKE.to_string(),
                    theme::child::STROKE_WIDTH,
                )),
                text_color: theme::text::COLOR.to_string(),
                font_size: theme::text::FONT_SIZE,
                font_weight: FontWeight::Bold,
            },
            center: NodeStyle {
                radius: config.center_node_size,
                fill: theme::center::FILL.to_string(),
                stroke: None,
                text_color: theme::text::COLOR.to_string(),
                font_size: theme::text::FONT_SIZE,
                font_weight: FontWeight::Normal,
            },
            link: EdgeStyle::default(),
        }
    }
}

/// Generate the render command for a link between two points
pub fn render_link(from: Position, to: Position, style: &EdgeStyle) -> RenderCommand {
    RenderCommand::Line {
        x1: from.x,
        y1: from.y,
        x2: to.x,
        y2: to.y,
        color: style.color.clone(),
        line_width: style.line_width,
    }
}

/// Generate the node group (circle and label) for a node at `position`
pub fn render_node(role: NodeRole, label: &str, position: Position, style: &NodeStyle) -> NodeGroup {
    let mut commands = Vec::with_capacity(3);

    commands.push(RenderCommand::FillCircle {
        cx: position.x,
        cy: position.y,
        radius: style.radius,
        color: style.fill.clone(),
    });

    if let Some((color, line_width)) = &style.stroke {
        commands.push(RenderCommand::StrokeCircle {
            cx: position.x,
            cy: position.y,
            radius: style.radius,
            color: color.clone(),
            line_width: *line_width,
        });
    }

    commands.push(RenderCommand::Text {
        x: position.x,
        y: position.y,
        text: label.to_string(),
        color: style.text_color.clone(),
        font_size: style.font_size,
        font_weight: style.font_weight,
    });

    NodeGroup {
        role,
        position,
        commands,
    }
}

/// Clear `surface` and draw the diagram for `root` and its positioned children.
///
/// The center node is pinned to the middle of the surface. Fails with
/// [`Error::Surface`] without touching the surface if its dimensions are not
/// positive finite numbers; errors from the surface itself propagate as-is.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    root: &Node,
    children: &[PositionedNode],
    style: &RenderStyle,
) -> Result<()> {
    let (width, height) = (surface.width(), surface.height());
    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
        return Err(Error::Surface(format!(
            "surface dimensions must be positive, got {}x{}",
            width, height
        )));
    }

    surface.clear()?;
    let center = layout::center(width, height);

    for child in children {
        surface.draw(SceneItem::Link(render_link(
            center,
            Position::from(child),
            &style.link,
        )))?;
    }

    for child in children {
        surface.draw(SceneItem::Node(render_node(
            NodeRole::Child,
            &child.name,
            Position::from(child),
            &style.child,
        )))?;
    }

    surface.draw(SceneItem::Node(render_node(
        NodeRole::Center,
        &root.name,
        center,
        &style.center,
    )))?;

    debug!(
        root = %root.name,
        children = children.len(),
        width,
        height,
        "rendered diagram"
    );
    Ok(())
}
