//! Data models for Mindmap trees.
//!
//! This module defines the core data structures:
//! - `Node` - A labeled topic or concept, with an optional list of children
//! - `PositionedNode` - A direct child of the root placed on the surface
//!
//! Trees usually arrive as JSON produced by the analysis service, shaped like
//! `{"name": "Topic", "children": [{"name": "A"}, {"name": "B"}]}`.
//! [`Node::from_json_str`] validates that shape and reports problems as
//! [`Error::InvalidTree`] or [`Error::InvalidNode`] instead of failing later
//! on a half-formed value.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A labeled point in the analysis tree.
///
/// The root is the central topic. Its children are the sub-concepts drawn on
/// the ring. Deeper levels are kept in the model but never positioned or drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Display label
    pub name: String,

    /// Ordered child concepts; `None` when the `children` key is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// Create a leaf node (no `children` key).
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: None,
        }
    }

    /// Create a node with the given children.
    pub fn with_children(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            children: Some(children),
        }
    }

    /// Children of this node, or an empty slice if the key was absent.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Parse and validate a tree from JSON text.
    ///
    /// Markdown code fences around the document (as emitted by language
    /// models) are stripped first.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(strip_code_fence(input))?;
        Self::from_value(&value)
    }

    /// Build a tree from an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self> {
        if let Some(err) = service_error(value) {
            return Err(err);
        }
        node_from_value(value, "root")
    }
}

fn node_from_value(value: &Value, path: &str) -> Result<Node> {
    let object = value.as_object().ok_or_else(|| {
        Error::InvalidTree(format!("{} must be an object, got {}", path, kind(value)))
    })?;

    let name = match object.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(other) => {
            return Err(Error::InvalidNode(format!(
                "{}.name must be a string, got {}",
                path,
                kind(other)
            )));
        }
        None => return Err(Error::InvalidNode(format!("{} is missing `name`", path))),
    };

    let children = match object.get("children") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| node_from_value(item, &format!("{}.children[{}]", path, i)))
                .collect::<Result<Vec<_>>>()?,
        ),
        Some(other) => {
            return Err(Error::InvalidTree(format!(
                "{}.children must be an array, got {}",
                path,
                kind(other)
            )));
        }
    };

    Ok(Node { name, children })
}

/// Detect the `{"error": ..., "details": ...}` body the analysis service
/// returns when it fails. Backends that echo the unparsable model output as
/// `raw_output` have it carried as the details.
fn service_error(value: &Value) -> Option<Error> {
    let object = value.as_object()?;
    if object.contains_key("name") {
        return None;
    }
    let message = object.get("error")?;
    Some(Error::Service {
        message: text_of(message),
        details: object
            .get("details")
            .or_else(|| object.get("raw_output"))
            .map(text_of),
    })
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Remove a surrounding Markdown code fence (```` ``` ```` or ```` ```json ````).
pub fn strip_code_fence(input: &str) -> &str {
    let trimmed = input.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }
    let body = match trimmed.find('\n') {
        Some(idx) => &trimmed[idx + 1..],
        None => return trimmed.trim_matches('`').trim(),
    };
    body.trim_end().trim_end_matches("```").trim()
}

/// A direct child of the root with its absolute surface coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    /// Display label
    pub name: String,
    /// X coordinate in surface space
    pub x: f64,
    /// Y coordinate in surface space (grows downward)
    pub y: f64,
}

impl PositionedNode {
    /// Create a positioned node.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}
