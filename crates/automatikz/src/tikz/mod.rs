//! TikZ output support
//!
//! Renders a parsed [`Automaton`](crate::core::Automaton) as a standalone
//! LaTeX document using the TikZ `automata` library.

mod renderer;
mod routing;

pub use renderer::TikzRenderer;
pub use routing::EdgeRouting;
