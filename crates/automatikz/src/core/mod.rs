//! Core abstractions for automaton processing
//!
//! This module defines the data model and shared infrastructure used by the
//! JFLAP parser and the TikZ renderer.

mod error;
pub mod logging;
mod types;

pub use error::*;
pub use logging::*;
pub use types::*;
