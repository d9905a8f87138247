//! Drawing surfaces and the in-memory scene graph.

use super::layout::Position;
use super::render::RenderCommand;
use crate::Result;

/// Which node of the diagram a group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// One of the concepts on the ring
    Child,
    /// The central topic
    Center,
}

impl NodeRole {
    /// CSS-style class name used by the SVG backend.
    pub fn class_name(&self) -> &'static str {
        match self {
            NodeRole::Child => "node child",
            NodeRole::Center => "node center",
        }
    }
}

/// The primitives that make up one drawn node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeGroup {
    pub role: NodeRole,
    /// Anchor of the group (the circle center)
    pub position: Position,
    /// Commands in absolute surface coordinates
    pub commands: Vec<RenderCommand>,
}

/// One top-level element of a drawn diagram.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneItem {
    /// A center-to-child link (always a `RenderCommand::Line`)
    Link(RenderCommand),
    /// A node circle with its label
    Node(NodeGroup),
}

/// A fixed-size drawing area the renderer repaints on every call.
///
/// A render call holds `&mut` access for its whole clear-and-redraw cycle.
pub trait Surface {
    /// Width in drawing units.
    fn width(&self) -> f64;

    /// Height in drawing units.
    fn height(&self) -> f64;

    /// Remove everything drawn so far.
    fn clear(&mut self) -> Result<()>;

    /// Append one element on top of what is already drawn.
    fn draw(&mut self, item: SceneItem) -> Result<()>;
}

/// In-memory surface that records the scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    width: f64,
    height: f64,
    items: Vec<SceneItem>,
}

impl Scene {
    /// Create an empty scene with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            items: Vec::new(),
        }
    }

    /// All elements in draw order.
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    /// Link commands in draw order.
    pub fn links(&self) -> impl Iterator<Item = &RenderCommand> {
        self.items.iter().filter_map(|item| match item {
            SceneItem::Link(command) => Some(command),
            SceneItem::Node(_) => None,
        })
    }

    /// Node groups in draw order.
    pub fn node_groups(&self) -> impl Iterator<Item = &NodeGroup> {
        self.items.iter().filter_map(|item| match item {
            SceneItem::Node(group) => Some(group),
            SceneItem::Link(_) => None,
        })
    }

    pub fn link_count(&self) -> usize {
        self.links().count()
    }

    pub fn node_count(&self) -> usize {
        self.node_groups().count()
    }

    /// The center node group, if the scene has been rendered.
    pub fn center_group(&self) -> Option<&NodeGroup> {
        self.node_groups().find(|g| g.role == NodeRole::Center)
    }
}

impl Surface for Scene {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) -> Result<()> {
        self.items.clear();
        Ok(())
    }

    fn draw(&mut self, item: SceneItem) -> Result<()> {
        self.items.push(item);
        Ok(())
    }
}
