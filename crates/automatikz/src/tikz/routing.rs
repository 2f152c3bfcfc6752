//! Edge routing heuristic
//!
//! Decides how each grouped edge is drawn so that overlapping arrows stay
//! readable: self-loops arc above their node, and bidirectional pairs bend
//! apart instead of overlapping.

/// How a grouped edge is routed between its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRouting {
    /// Self-loop drawn above the node
    LoopAbove,
    /// Curved edge, used when the reverse edge also exists
    BendRight,
    /// Plain straight edge
    Straight,
}

impl EdgeRouting {
    /// Pick a routing for the `(from, to)` pair
    ///
    /// `has_reverse` reports whether a `(to, from)` group also exists.
    /// Self-loops win over bends: a loop is never bent.
    pub fn choose(from: &str, to: &str, has_reverse: bool) -> Self {
        if from == to {
            EdgeRouting::LoopAbove
        } else if has_reverse {
            EdgeRouting::BendRight
        } else {
            EdgeRouting::Straight
        }
    }

    /// TikZ option string for this routing
    pub fn tikz_options(&self) -> &'static str {
        match self {
            EdgeRouting::LoopAbove => "loop above",
            EdgeRouting::BendRight => "bend right",
            EdgeRouting::Straight => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_loop_routing() {
        assert_eq!(EdgeRouting::choose("0", "0", false), EdgeRouting::LoopAbove);
        // A self-loop stays a loop even if a "reverse" exists
        assert_eq!(EdgeRouting::choose("0", "0", true), EdgeRouting::LoopAbove);
    }

    #[test]
    fn test_bidirectional_routing() {
        assert_eq!(EdgeRouting::choose("0", "1", true), EdgeRouting::BendRight);
    }

    #[test]
    fn test_straight_routing() {
        assert_eq!(EdgeRouting::choose("0", "1", false), EdgeRouting::Straight);
    }

    #[test]
    fn test_tikz_options() {
        assert_eq!(EdgeRouting::LoopAbove.tikz_options(), "loop above");
        assert_eq!(EdgeRouting::BendRight.tikz_options(), "bend right");
        assert_eq!(EdgeRouting::Straight.tikz_options(), "");
    }
}
