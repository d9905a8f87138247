//! Mindmap - radial layout and rendering for topic/concept analysis results.
//!
//! This library provides the core functionality for the `mindmap` CLI tool:
//! parsing an analysis tree, placing its concepts on a ring around the topic,
//! and drawing the result onto a surface that can be exported as SVG.

pub mod cli;
pub mod commands;
pub mod config;
pub mod diagram;
pub mod models;

/// Library-level error type for Mindmap operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid tree: {0}")]
    InvalidTree(String),

    #[error("Invalid node: {0}")]
    InvalidNode(String),

    #[error("Surface unavailable: {0}")]
    Surface(String),

    #[error("Analysis service error: {message}{}", service_details(.details))]
    Service {
        message: String,
        details: Option<String>,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

fn service_details(details: &Option<String>) -> String {
    details
        .as_deref()
        .map(|d| format!(" ({})", d))
        .unwrap_or_default()
}

/// Result type alias for Mindmap operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display_with_details() {
        let err = Error::Service {
            message: "Internal Server Error".to_string(),
            details: Some("model timeout".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Analysis service error: Internal Server Error (model timeout)"
        );
    }

    #[test]
    fn test_service_error_display_without_details() {
        let err = Error::Service {
            message: "Internal Server Error".to_string(),
            details: None,
        };
        assert_eq!(err.to_string(), "Analysis service error: Internal Server Error");
    }
}
