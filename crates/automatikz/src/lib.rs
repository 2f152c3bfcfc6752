//! Automatikz - Convert JFLAP automaton files to TikZ/LaTeX diagrams
//!
//! A library for parsing JFLAP `.jff` automaton descriptions and rendering
//! them as standalone LaTeX documents using the TikZ `automata` library.
//!
//! # Quick Start
//!
//! ```rust
//! use automatikz::convert;
//!
//! let input = r#"<structure><automaton>
//!     <state id="0" name="q0"><x>0</x><y>0</y><initial/></state>
//! </automaton></structure>"#;
//! let latex = convert(input).unwrap();
//! assert!(latex.contains("\\begin{tikzpicture}"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use automatikz::prelude::*;
//!
//! let input = r#"<structure><automaton>
//!     <state id="0" name="q0"><x>50</x><y>100</y></state>
//! </automaton></structure>"#;
//!
//! // Parse into the in-memory model
//! let automaton = JflapParser::new().parse(input).unwrap();
//! assert_eq!(automaton.state_count(), 1);
//!
//! // Render to LaTeX
//! let renderer = TikzRenderer::new();
//! let latex = renderer.render(&automaton).unwrap();
//! ```

pub mod core;
pub mod jflap;
pub mod tikz;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Automaton, AutomatonError, State, Transition, BLANK, SCALE};
    pub use crate::jflap::JflapParser;
    pub use crate::tikz::{EdgeRouting, TikzRenderer};
}

/// Convert a JFLAP document to a LaTeX/TikZ document
///
/// This is the simplest way to convert an automaton: parse, then render.
///
/// # Arguments
/// * `input` - JFLAP XML source (the contents of a `.jff` file)
///
/// # Returns
/// * `Ok(String)` - The LaTeX document source
/// * `Err` - If the input is not valid JFLAP XML
pub fn convert(input: &str) -> anyhow::Result<String> {
    use crate::jflap::JflapParser;
    use crate::tikz::TikzRenderer;

    let automaton = JflapParser::new().parse(input)?;
    let latex = TikzRenderer::new().render(&automaton)?;
    Ok(latex)
}

/// Parse a JFLAP document into an [`Automaton`] without rendering
///
/// Useful when you need to inspect the states and transitions.
///
/// # Example
/// ```rust
/// let input = r#"<structure><automaton>
///     <state id="0" name="q0"><x>0</x><y>0</y></state>
///     <state id="1" name="q1"><x>100</x><y>0</y></state>
///     <transition><from>0</from><to>1</to><move>R</move></transition>
/// </automaton></structure>"#;
///
/// let automaton = automatikz::parse(input).unwrap();
/// assert_eq!(automaton.state_count(), 2);
/// assert_eq!(automaton.transition_count(), 1);
/// ```
pub fn parse(input: &str) -> anyhow::Result<Automaton> {
    use crate::jflap::JflapParser;

    Ok(JflapParser::new().parse(input)?)
}
