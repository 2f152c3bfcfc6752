//! LaTeX/TikZ document renderer
//!
//! Builds the output document as an ordered sequence of lines: preamble,
//! one node per state, then one `\path` block with one edge per grouped
//! `(from, to)` transition pair.

use super::routing::EdgeRouting;
use crate::core::{Automaton, AutomatonError, State, Transition};
use tracing::{debug, span, Level};

/// Fixed document preamble, up to and including the tikzpicture open
const PREAMBLE: &[&str] = &[
    r"\documentclass{article}",
    r"\usepackage[utf8]{inputenc}",
    r"\usepackage{tikz}",
    r"\usepackage{amssymb}",
    r"\usetikzlibrary{automata, positioning, arrows}",
    r"\newcommand{\blank}{\square}",
    r"\begin{document}",
    r"\begin{center}",
    r"\begin{tikzpicture}[>=stealth, auto, node distance=2cm, thick]",
];

/// Fixed document closing, from the tikzpicture close onward
const CLOSING: &[&str] = &[r"\end{tikzpicture}", r"\end{center}", r"\end{document}"];

/// Renders an automaton as a standalone LaTeX document
pub struct TikzRenderer;

impl TikzRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the full document
    ///
    /// States appear in parser order; edges appear in first-occurrence
    /// order of their `(from, to)` pair. Output is deterministic for a
    /// given automaton.
    pub fn render(&self, automaton: &Automaton) -> Result<String, AutomatonError> {
        let render_span = span!(
            Level::INFO,
            "render_tikz",
            states = automaton.state_count(),
            transitions = automaton.transition_count()
        );
        let _enter = render_span.enter();

        let groups = Self::group_transitions(automaton.transitions());
        debug!(edges = groups.len(), "Grouped transitions");

        let mut lines: Vec<String> = PREAMBLE.iter().map(|s| s.to_string()).collect();

        for state in automaton.states() {
            lines.push(Self::node_line(state));
        }

        lines.push(String::new());

        lines.push(r"    \path[->]".to_string());
        for ((from, to), labels) in &groups {
            let has_reverse = groups.iter().any(|((f, t), _)| f == to && t == from);
            let routing = EdgeRouting::choose(from, to, has_reverse);
            lines.push(Self::edge_line(from, to, routing, labels));
        }
        lines.push("    ;".to_string());

        lines.extend(CLOSING.iter().map(|s| s.to_string()));

        Ok(lines.join("\n"))
    }

    /// Node declaration for one state, positioned absolutely
    fn node_line(state: &State) -> String {
        let mut style = String::from("state");
        if state.initial {
            style.push_str(", initial");
        }
        if state.accepting {
            style.push_str(", accepting");
        }

        format!(
            "    \\node[{}] ({}) at ({:.2}, {:.2}) {{${}$}};",
            style, state.id, state.x, state.y, state.name
        )
    }

    /// Edge declaration for one grouped pair, labels stacked with `\\`
    fn edge_line(from: &str, to: &str, routing: EdgeRouting, labels: &[String]) -> String {
        format!(
            "        ({}) edge[{}] node[align=center] {{{}}} ({})",
            from,
            routing.tikz_options(),
            labels.join(r" \\ "),
            to
        )
    }

    /// Label for a single transition: read/write in math mode so the blank
    /// placeholder renders as a symbol, movement appended as plain text
    fn transition_label(transition: &Transition) -> String {
        format!(
            "${}$/${}$ {}",
            transition.read, transition.write, transition.movement
        )
    }

    /// Group transitions by their ordered `(from, to)` pair
    ///
    /// Groups keep first-occurrence order, labels within a group keep
    /// source order. A→B and B→A are distinct groups.
    fn group_transitions(transitions: &[Transition]) -> Vec<((String, String), Vec<String>)> {
        let mut groups: Vec<((String, String), Vec<String>)> = Vec::new();

        for transition in transitions {
            let label = Self::transition_label(transition);
            match groups
                .iter_mut()
                .find(|((f, t), _)| *f == transition.from && *t == transition.to)
            {
                Some((_, labels)) => labels.push(label),
                None => groups.push((
                    (transition.from.clone(), transition.to.clone()),
                    vec![label],
                )),
            }
        }

        groups
    }
}

impl Default for TikzRenderer {
    fn default() -> Self {
        Self::new()
    }
}
