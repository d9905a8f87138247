//! Radial diagram engine.
//!
//! This module contains the platform-agnostic layout and rendering logic.
//!
//! # Modules
//!
//! - `layout`: Radial placement of the root's children
//! - `render`: Abstract rendering commands for links and nodes
//! - `scene`: The `Surface` trait and the in-memory `Scene`
//! - `svg`: SVG serialization of a rendered scene
//! - `theme`: Color scheme and type sizes as Rust constants

pub mod layout;
pub mod render;
pub mod scene;
pub mod svg;
pub mod theme;

pub use layout::*;
pub use render::*;
pub use scene::*;
pub use svg::{to_svg, write_svg};

use crate::Result;
use crate::models::{Node, PositionedNode};

/// Lay out `tree` and render it onto `surface` in one call.
///
/// Call this every time a new tree becomes available; each call fully
/// rebuilds the surface, so nothing from an earlier tree survives. The
/// surface's own dimensions determine the center; `config` supplies the ring
/// radius and node sizes. Returns the positioned children.
///
/// An invalid `config` fails with [`crate::Error::Config`] before the surface
/// is touched.
pub fn draw_diagram<S: Surface + ?Sized>(
    surface: &mut S,
    tree: &Node,
    config: &DiagramConfig,
) -> Result<Vec<PositionedNode>> {
    config.validate()?;
    let positioned = layout::layout(tree, surface.width(), surface.height(), config.radius)?;
    render::render(surface, tree, &positioned, &RenderStyle::from_config(config))?;
    Ok(positioned)
}
