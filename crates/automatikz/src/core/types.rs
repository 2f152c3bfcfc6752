//! Core type definitions for automaton processing
//!
//! This module contains the fundamental types used throughout Automatikz:
//! states, transitions, and the automaton database they live in.

/// Scale factor from JFLAP pixel coordinates to TikZ diagram units.
///
/// JFLAP stores state positions in screen pixels; dividing by 50 keeps
/// typical diagrams within a page.
pub const SCALE: f64 = 0.02;

/// Placeholder macro for an empty tape cell.
///
/// Substituted whenever a transition's read or write symbol is absent, so
/// that blanks render as `\square` via the document preamble.
pub const BLANK: &str = "\\blank";

/// A single automaton state with its diagram position and markers
///
/// Coordinates are stored post-transform: scaled by [`SCALE`] and with the
/// Y axis flipped, since JFLAP uses top-left screen coordinates while TikZ
/// uses bottom-left Cartesian coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// Unique identifier from the source file, used as the TikZ node name
    pub id: String,
    /// Display label, rendered in math mode
    pub name: String,
    /// Horizontal position in diagram units
    pub x: f64,
    /// Vertical position in diagram units (flipped from the source)
    pub y: f64,
    /// True if the state carries an `<initial/>` marker
    pub initial: bool,
    /// True if the state carries a `<final/>` marker
    pub accepting: bool,
}

impl State {
    pub fn new(id: impl Into<String>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            x,
            y,
            initial: false,
            accepting: false,
        }
    }

    /// Builder-style setter for the initial marker
    pub fn with_initial(mut self, initial: bool) -> Self {
        self.initial = initial;
        self
    }

    /// Builder-style setter for the accepting marker
    pub fn with_accepting(mut self, accepting: bool) -> Self {
        self.accepting = accepting;
        self
    }
}

/// A tape transition between two states
///
/// `from` and `to` reference states by id; they may be equal (a self-loop)
/// and are not validated against the state set. Dangling references pass
/// through to the emitted document uninterpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: String,
    pub to: String,
    /// Symbol read from the tape, [`BLANK`] when the source omits it
    pub read: String,
    /// Symbol written to the tape, [`BLANK`] when the source omits it
    pub write: String,
    /// Tape-head movement token, taken verbatim (e.g. `L`, `R`, `S`)
    pub movement: String,
}

impl Transition {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        read: impl Into<String>,
        write: impl Into<String>,
        movement: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            read: read.into(),
            write: write.into(),
            movement: movement.into(),
        }
    }

    /// True if this transition starts and ends on the same state
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Parsed automaton: states and transitions in source-document order
///
/// Built once by the parser and never mutated afterwards. State iteration
/// order matches the order of `<state>` elements in the input, transition
/// order matches the order of `<transition>` elements.
#[derive(Debug, Clone, Default)]
pub struct Automaton {
    states: Vec<State>,
    transitions: Vec<Transition>,
}

impl Automaton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state, keeping the first occurrence on duplicate ids
    pub fn add_state(&mut self, state: State) {
        if !self.states.iter().any(|s| s.id == state.id) {
            self.states.push(state);
        }
    }

    /// Add a transition (no validation against the state set)
    pub fn add_transition(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    /// Look up a state by id
    pub fn get_state(&self, id: &str) -> Option<&State> {
        self.states.iter().find(|s| s.id == id)
    }

    /// All states in source order
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// All transitions in source order
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// The state marked `<initial/>`, if any
    pub fn initial_state(&self) -> Option<&State> {
        self.states.iter().find(|s| s.initial)
    }
}
