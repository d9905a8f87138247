//! Theme constants for mindmap diagrams.
//!
//! Defines the fixed color scheme and type sizes used by the renderer.

/// Link colors
pub mod link {
    /// Stroke color of center-to-child links
    pub const COLOR: &str = "#555";
    /// Stroke width of center-to-child links
    pub const WIDTH: f64 = 2.0;
}

/// Child node colors
pub mod child {
    /// Fill color (light blue)
    pub const FILL: &str = "#03A9F4";
    /// Border color (dark blue)
    pub const STROKE: &str = "#0288D1";
    /// Border width
    pub const STROKE_WIDTH: f64 = 2.0;
}

/// Center node colors
pub mod center {
    /// Fill color (dark blue)
    pub const FILL: &str = "#0288D1";
}

/// Label text
pub mod text {
    /// Label color
    pub const COLOR: &str = "white";
    /// Label font size in drawing units
    pub const FONT_SIZE: f64 = 14.0;
}
