//! SVG backend for rendered scenes.
//!
//! Links become `<line class="link">` elements. Each node group becomes a
//! `<g class="node child">` (or `node center`) translated to its anchor, with
//! its circle and label drawn relative to that anchor.

use super::layout::Position;
use super::render::{FontWeight, RenderCommand};
use super::scene::{NodeGroup, Scene, SceneItem, Surface};
use crate::Result;
use std::fmt::Write as _;
use std::path::Path;

/// Serialize a scene to a standalone SVG document.
pub fn to_svg(scene: &Scene) -> String {
    let width = num(scene.width());
    let height = num(scene.height());
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );

    for item in scene.items() {
        match item {
            SceneItem::Link(command) => {
                svg.push_str("  ");
                push_command(&mut svg, command, Position::default(), Some("link"));
                svg.push('\n');
            }
            SceneItem::Node(group) => push_group(&mut svg, group),
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_group(svg: &mut String, group: &NodeGroup) {
    let _ = writeln!(
        svg,
        "  <g class=\"{}\" transform=\"translate({}, {})\">",
        group.role.class_name(),
        num(group.position.x),
        num(group.position.y)
    );
    for command in &group.commands {
        svg.push_str("    ");
        push_command(svg, command, group.position, None);
        svg.push('\n');
    }
    svg.push_str("  </g>\n");
}

fn push_command(svg: &mut String, command: &RenderCommand, origin: Position, class: Option<&str>) {
    let class_attr = class
        .map(|c| format!(" class=\"{}\"", c))
        .unwrap_or_default();

    match command {
        RenderCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            line_width,
        } => {
            let _ = write!(
                svg,
                "<line{} x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                class_attr,
                num(x1 - origin.x),
                num(y1 - origin.y),
                num(x2 - origin.x),
                num(y2 - origin.y),
                escape_xml(color),
                num(*line_width)
            );
        }
        RenderCommand::FillCircle {
            cx,
            cy,
            radius,
            color,
        } => {
            let _ = write!(
                svg,
                "<circle{}{} r=\"{}\" fill=\"{}\"/>",
                class_attr,
                offset_attrs("cx", "cy", *cx - origin.x, *cy - origin.y),
                num(*radius),
                escape_xml(color)
            );
        }
        RenderCommand::StrokeCircle {
            cx,
            cy,
            radius,
            color,
            line_width,
        } => {
            let _ = write!(
                svg,
                "<circle{}{} r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
                class_attr,
                offset_attrs("cx", "cy", *cx - origin.x, *cy - origin.y),
                num(*radius),
                escape_xml(color),
                num(*line_width)
            );
        }
        RenderCommand::Text {
            x,
            y,
            text,
            color,
            font_size,
            font_weight,
        } => {
            let weight = match font_weight {
                FontWeight::Normal => "",
                FontWeight::Bold => " font-weight=\"bold\"",
            };
            let _ = write!(
                svg,
                "<text{}{} text-anchor=\"middle\" dominant-baseline=\"middle\" fill=\"{}\" font-size=\"{}\"{}>{}</text>",
                class_attr,
                offset_attrs("x", "y", *x - origin.x, *y - origin.y),
                escape_xml(color),
                num(*font_size),
                weight,
                escape_xml(text)
            );
        }
    }
}

/// Coordinate attributes, omitted when the element sits on its group anchor.
fn offset_attrs(x_name: &str, y_name: &str, x: f64, y: f64) -> String {
    let mut attrs = String::new();
    if num(x) != "0" {
        let _ = write!(attrs, " {}=\"{}\"", x_name, num(x));
    }
    if num(y) != "0" {
        let _ = write!(attrs, " {}=\"{}\"", y_name, num(y));
    }
    attrs
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Write an SVG document to `output`, or to stdout when `output` is `None`.
pub fn write_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}
