//! JFLAP input format support
//!
//! JFLAP saves automata as XML (`.jff` files); this module parses that
//! schema into the core [`Automaton`](crate::core::Automaton) model.

mod parser;

pub use parser::JflapParser;
