//! JFLAP XML parser
//!
//! Parses the fixed JFLAP schema (`<structure><automaton>...`) into an
//! [`Automaton`]. State coordinates are converted from JFLAP's pixel-scaled,
//! top-left-origin system into diagram units with a Cartesian Y axis.

use crate::core::{Automaton, AutomatonError, State, Transition, BLANK, SCALE};
use roxmltree::{Document, Node};
use tracing::{debug, span, trace, Level};

/// Parser for JFLAP `.jff` automaton files
pub struct JflapParser;

impl JflapParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a JFLAP document into an automaton
    ///
    /// Fails on malformed XML, a missing `<automaton>` element, or a state
    /// or transition missing a required sub-element. No recovery is
    /// attempted and no partial result is returned.
    pub fn parse(&self, input: &str) -> Result<Automaton, AutomatonError> {
        let parse_span = span!(Level::INFO, "parse_jflap", input_len = input.len());
        let _enter = parse_span.enter();

        trace!("Parsing XML document");
        let doc = Document::parse(input)?;

        let automaton_node = doc
            .root_element()
            .children()
            .find(|n| n.has_tag_name("automaton"))
            .ok_or_else(|| AutomatonError::missing_element("automaton", "structure"))?;

        let mut automaton = Automaton::new();

        for node in automaton_node.children().filter(Node::is_element) {
            match node.tag_name().name() {
                "state" => automaton.add_state(Self::parse_state(node)?),
                "transition" => automaton.add_transition(Self::parse_transition(node)?),
                _ => {}
            }
        }

        debug!(
            states = automaton.state_count(),
            transitions = automaton.transition_count(),
            "Parsed automaton"
        );
        Ok(automaton)
    }

    fn parse_state(node: Node) -> Result<State, AutomatonError> {
        let id = node
            .attribute("id")
            .ok_or_else(|| AutomatonError::parse_error("state missing 'id' attribute"))?;
        // JFLAP always writes a name, but fall back to the id if absent
        let name = node.attribute("name").unwrap_or(id);

        let raw_x = Self::required_float(node, "x")?;
        let raw_y = Self::required_float(node, "y")?;

        // Scale down from pixels; flip Y so the layout keeps its on-screen
        // shape under TikZ's bottom-left origin
        let state = State::new(id, name, raw_x * SCALE, -(raw_y * SCALE))
            .with_initial(Self::has_child(node, "initial"))
            .with_accepting(Self::has_child(node, "final"));

        trace!(id = %state.id, x = state.x, y = state.y, "Parsed state");
        Ok(state)
    }

    fn parse_transition(node: Node) -> Result<Transition, AutomatonError> {
        let from = Self::required_text(node, "from")?;
        let to = Self::required_text(node, "to")?;
        let movement = Self::required_text(node, "move")?;
        let read = Self::symbol_or_blank(node, "read");
        let write = Self::symbol_or_blank(node, "write");

        Ok(Transition::new(from, to, read, write, movement))
    }

    /// Text content of a named child element, if present and non-empty
    fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
        node.children()
            .find(|n| n.has_tag_name(name))
            .and_then(|n| n.text())
            .filter(|s| !s.is_empty())
    }

    fn has_child(node: Node, name: &str) -> bool {
        node.children().any(|n| n.has_tag_name(name))
    }

    fn required_text(node: Node, name: &str) -> Result<String, AutomatonError> {
        Self::child_text(node, name)
            .map(str::to_string)
            .ok_or_else(|| AutomatonError::missing_element(name, node.tag_name().name()))
    }

    fn required_float(node: Node, name: &str) -> Result<f64, AutomatonError> {
        let text = Self::child_text(node, name)
            .ok_or_else(|| AutomatonError::missing_element(name, node.tag_name().name()))?;
        text.trim().parse().map_err(|_| {
            AutomatonError::parse_error(format!("invalid float in <{}>: '{}'", name, text))
        })
    }

    /// Read/write symbol, substituting the blank-tape placeholder when the
    /// element is absent or empty
    fn symbol_or_blank(node: Node, name: &str) -> String {
        Self::child_text(node, name)
            .unwrap_or(BLANK)
            .to_string()
    }
}

impl Default for JflapParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<structure>
<automaton>
    <state id="0" name="q0">
        <x>50.0</x>
        <y>100.0</y>
        <initial/>
    </state>
    <state id="1" name="q1">
        <x>250.0</x>
        <y>100.0</y>
        <final/>
    </state>
    <transition>
        <from>0</from>
        <to>1</to>
        <read>a</read>
        <write>b</write>
        <move>R</move>
    </transition>
</automaton>
</structure>"#;

    #[test]
    fn test_parse_sample() {
        let automaton = JflapParser::new().parse(SAMPLE).unwrap();
        assert_eq!(automaton.state_count(), 2);
        assert_eq!(automaton.transition_count(), 1);

        let q0 = automaton.get_state("0").unwrap();
        assert_eq!(q0.name, "q0");
        assert!(q0.initial);
        assert!(!q0.accepting);

        let q1 = automaton.get_state("1").unwrap();
        assert!(q1.accepting);

        let t = &automaton.transitions()[0];
        assert_eq!(t.from, "0");
        assert_eq!(t.to, "1");
        assert_eq!(t.read, "a");
        assert_eq!(t.write, "b");
        assert_eq!(t.movement, "R");
    }

    #[test]
    fn test_coordinate_transform() {
        let automaton = JflapParser::new().parse(SAMPLE).unwrap();
        let q0 = automaton.get_state("0").unwrap();
        assert!((q0.x - 1.0).abs() < 1e-9);
        assert!((q0.y - (-2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_missing_read_write_defaults_to_blank() {
        let input = r#"<structure><automaton>
            <transition>
                <from>0</from><to>1</to>
                <read/><write></write>
                <move>L</move>
            </transition>
        </automaton></structure>"#;
        let automaton = JflapParser::new().parse(input).unwrap();
        let t = &automaton.transitions()[0];
        assert_eq!(t.read, BLANK);
        assert_eq!(t.write, BLANK);
    }

    #[test]
    fn test_absent_read_write_defaults_to_blank() {
        let input = r#"<structure><automaton>
            <transition>
                <from>0</from><to>1</to>
                <move>S</move>
            </transition>
        </automaton></structure>"#;
        let automaton = JflapParser::new().parse(input).unwrap();
        let t = &automaton.transitions()[0];
        assert_eq!(t.read, BLANK);
        assert_eq!(t.write, BLANK);
    }

    #[test]
    fn test_missing_move_is_error() {
        let input = r#"<structure><automaton>
            <transition><from>0</from><to>1</to></transition>
        </automaton></structure>"#;
        let err = JflapParser::new().parse(input).unwrap_err();
        assert!(format!("{}", err).contains("<move>"));
    }

    #[test]
    fn test_missing_coordinate_is_error() {
        let input = r#"<structure><automaton>
            <state id="0" name="q0"><x>10</x></state>
        </automaton></structure>"#;
        let err = JflapParser::new().parse(input).unwrap_err();
        assert!(format!("{}", err).contains("<y>"));
    }

    #[test]
    fn test_invalid_coordinate_is_error() {
        let input = r#"<structure><automaton>
            <state id="0" name="q0"><x>ten</x><y>5</y></state>
        </automaton></structure>"#;
        let err = JflapParser::new().parse(input).unwrap_err();
        assert!(format!("{}", err).contains("invalid float"));
    }

    #[test]
    fn test_missing_automaton_is_error() {
        let err = JflapParser::new().parse("<structure></structure>").unwrap_err();
        assert!(format!("{}", err).contains("<automaton>"));
    }

    #[test]
    fn test_malformed_xml_is_error() {
        assert!(JflapParser::new().parse("<structure><automaton>").is_err());
    }

    #[test]
    fn test_state_name_falls_back_to_id() {
        let input = r#"<structure><automaton>
            <state id="3"><x>0</x><y>0</y></state>
        </automaton></structure>"#;
        let automaton = JflapParser::new().parse(input).unwrap();
        assert_eq!(automaton.get_state("3").unwrap().name, "3");
    }

    #[test]
    fn test_transition_order_preserved() {
        let input = r#"<structure><automaton>
            <transition><from>1</from><to>0</to><move>L</move></transition>
            <transition><from>0</from><to>1</to><move>R</move></transition>
            <transition><from>0</from><to>0</to><move>S</move></transition>
        </automaton></structure>"#;
        let automaton = JflapParser::new().parse(input).unwrap();
        let moves: Vec<&str> = automaton
            .transitions()
            .iter()
            .map(|t| t.movement.as_str())
            .collect();
        assert_eq!(moves, vec!["L", "R", "S"]);
    }
}
