//! Core error types for automaton processing
//!
//! This module defines the common error types used throughout the
//! parse/render pipeline.

use thiserror::Error;

/// Core error types for automaton processing
#[derive(Error, Debug)]
pub enum AutomatonError {
    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Missing element: expected <{element}> in <{parent}>")]
    MissingElement { element: String, parent: String },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl AutomatonError {
    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Create a new missing-element error
    pub fn missing_element(element: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::MissingElement {
            element: element.into(),
            parent: parent.into(),
        }
    }

    /// Create a new render error
    pub fn render_error(message: impl Into<String>) -> Self {
        Self::RenderError {
            message: message.into(),
        }
    }
}

impl From<roxmltree::Error> for AutomatonError {
    fn from(err: roxmltree::Error) -> Self {
        Self::ParseError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let error = AutomatonError::parse_error("unexpected token");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Parse error"));
        assert!(error_msg.contains("unexpected token"));
    }

    #[test]
    fn test_missing_element_error() {
        let error = AutomatonError::missing_element("move", "transition");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Missing element"));
        assert!(error_msg.contains("<move>"));
        assert!(error_msg.contains("<transition>"));
    }

    #[test]
    fn test_render_error() {
        let error = AutomatonError::render_error("bad label");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Render error"));
        assert!(error_msg.contains("bad label"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: AutomatonError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }

    #[test]
    fn test_xml_error_conversion() {
        let xml_err = roxmltree::Document::parse("<open>").unwrap_err();
        let error: AutomatonError = xml_err.into();
        assert!(format!("{}", error).contains("Parse error"));
    }
}
