//! Pluggable node and arc selection rules for [`PushRelabel`].
//!
//! The rule for choosing the next active node is the main lever on the
//! algorithm's running time; the admissible-arc rule decides which
//! residual arc receives a push.

use crate::node::Node;
use crate::push_relabel::PushRelabel;

/// Chooses which active node to discharge next.
pub trait ActiveNodeStrategy<N: Node> {
    /// Returns one of `solver.active_nodes()`, or `None` if there is none.
    fn select(&self, solver: &PushRelabel<N>) -> Option<N>;
}

/// Chooses the arc to push along when discharging `tail`.
///
/// An arc `(i, j)` is admissible when it has residual capacity and
/// `distance(i) == distance(j) + 1`. The distance function satisfies
/// `distance(sink) == 0` and `distance(i) <= distance(j) + 1` for every
/// residual arc, so an admissible arc steps exactly one level closer to
/// the sink.
pub trait AdmissibleArcStrategy<N: Node> {
    /// Returns the head of an admissible arc leaving `tail`, or `None`
    /// if `tail` needs a relabel.
    fn admissible_head(&self, solver: &PushRelabel<N>, tail: &N) -> Option<N>;
}

/// Picks the active node with the highest distance label.
///
/// Unlabelled nodes rank below every labelled one. Among equal labels the
/// node that entered the excess table last wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestLabel;

impl<N: Node> ActiveNodeStrategy<N> for HighestLabel {
    fn select(&self, solver: &PushRelabel<N>) -> Option<N> {
        solver
            .active_nodes()
            .max_by_key(|node| solver.node_distance(node))
            .cloned()
    }
}

/// Picks the active node that has held excess the longest.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstActive;

impl<N: Node> ActiveNodeStrategy<N> for FirstActive {
    fn select(&self, solver: &PushRelabel<N>) -> Option<N> {
        solver.active_nodes().next().cloned()
    }
}

/// Returns the first admissible successor in network order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAdmissible;

impl<N: Node> AdmissibleArcStrategy<N> for FirstAdmissible {
    fn admissible_head(&self, solver: &PushRelabel<N>, tail: &N) -> Option<N> {
        solver
            .successors(tail)
            .find(|head| solver.is_arc_admissible(tail, head))
            .cloned()
    }
}
