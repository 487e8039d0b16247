use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::network::FlowNetwork;
use crate::node::Node;

/// Distance labels: lower bounds on each node's distance to the sink in
/// the residual graph.
///
/// Nodes that cannot reach the sink carry no label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceLabels<N: Node> {
    labels: IndexMap<N, usize>,
}

impl<N: Node> DistanceLabels<N> {
    pub fn new() -> Self {
        DistanceLabels {
            labels: IndexMap::new(),
        }
    }

    /// Labels computed from scratch over the current arcs of `network`.
    pub fn compute(network: &FlowNetwork<N>) -> Self {
        let mut labels = DistanceLabels::new();
        labels.recompute(network);
        labels
    }

    /// Drops every label and runs a breadth-first search from the sink
    /// against arc direction.
    ///
    /// The sink gets 0 and the source gets the node count, which exceeds
    /// any real distance. The source is labelled up front and therefore
    /// never expanded.
    pub fn recompute(&mut self, network: &FlowNetwork<N>) {
        self.labels.clear();
        self.labels
            .insert(network.source().clone(), network.number_of_nodes());
        self.labels.insert(network.sink().clone(), 0);

        let mut frontier = VecDeque::new();
        frontier.push_back((network.sink().clone(), 0));
        while let Some((node, level)) = frontier.pop_front() {
            for pred in network.predecessors(&node) {
                if !self.labels.contains_key(pred) {
                    self.labels.insert(pred.clone(), level + 1);
                    frontier.push_back((pred.clone(), level + 1));
                }
            }
        }
    }

    pub fn get(&self, node: &N) -> Option<usize> {
        self.labels.get(node).copied()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.labels.contains_key(node)
    }

    pub(crate) fn set(&mut self, node: N, label: usize) {
        self.labels.insert(node, label);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, usize)> + '_ {
        self.labels.iter().map(|(node, label)| (node, *label))
    }
}
