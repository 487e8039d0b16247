//! Goldberg-Tarjan push-relabel (preflow-push) maximum flow.
//!
//! For arc `(i, j)` node `i` is the tail and node `j` the head.
//! See chapter 7 of Ahuja, Magnanti and Orlin, *Network Flows: Theory,
//! Algorithms, and Applications*.

use std::cmp;
use std::time::Instant;

use indexmap::IndexMap;
use log::{debug, info, log_enabled, Level};

use crate::error::{Capacity, FlowError, Result};
use crate::labeling::DistanceLabels;
use crate::network::{FlowNetwork, NetworkState};
use crate::node::Node;
use crate::strategy::{ActiveNodeStrategy, AdmissibleArcStrategy, FirstAdmissible, HighestLabel};
use crate::utils;

/// Outcome of a single [`PushRelabel::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<N> {
    Push { tail: N, head: N, amount: Capacity },
    /// `from` is `None` when the node had no label yet.
    Relabel {
        node: N,
        from: Option<usize>,
        to: usize,
    },
}

/// Push-relabel solver owning the network it mutates.
///
/// The solver keeps a distance label and an excess per node. Excess is
/// only ever stored for strictly positive values; the source is an
/// unbounded supply and never appears in the excess table.
pub struct PushRelabel<N: Node> {
    network: FlowNetwork<N>,
    labels: DistanceLabels<N>,
    excess: IndexMap<N, Capacity>,
    active_strategy: Box<dyn ActiveNodeStrategy<N>>,
    admissible_strategy: Box<dyn AdmissibleArcStrategy<N>>,
    pushes: usize,
    relabels: usize,
}

impl<N: Node> PushRelabel<N> {
    /// Solver with [`HighestLabel`] and [`FirstAdmissible`] selection.
    pub fn new(network: FlowNetwork<N>) -> Self {
        PushRelabel::builder(network).build()
    }

    pub fn builder(network: FlowNetwork<N>) -> PushRelabelBuilder<N> {
        PushRelabelBuilder {
            network,
            active_strategy: Box::new(HighestLabel),
            admissible_strategy: Box::new(FirstAdmissible),
        }
    }

    pub fn source(&self) -> &N {
        self.network.source()
    }

    pub fn sink(&self) -> &N {
        self.network.sink()
    }

    pub fn network(&self) -> &FlowNetwork<N> {
        &self.network
    }

    /// Direct access for capacity edits between runs. Editing while
    /// active nodes remain leaves labels stale until the next
    /// [`preprocess`](Self::preprocess).
    pub fn network_mut(&mut self) -> &mut FlowNetwork<N> {
        &mut self.network
    }

    pub fn into_network(self) -> FlowNetwork<N> {
        self.network
    }

    pub fn arc_capacity(&self, tail: &N, head: &N) -> Capacity {
        self.network.arc_capacity(tail, head)
    }

    /// Successors of `tail` that currently carry a distance label.
    pub fn successors<'a>(&'a self, tail: &N) -> impl Iterator<Item = &'a N> + 'a {
        self.network
            .successors(tail)
            .filter(move |head| self.labels.contains(head))
    }

    pub fn labels(&self) -> &DistanceLabels<N> {
        &self.labels
    }

    pub fn node_distance(&self, node: &N) -> Option<usize> {
        self.labels.get(node)
    }

    pub fn node_excess(&self, node: &N) -> Capacity {
        self.excess.get(node).copied().unwrap_or(0)
    }

    /// Flow that has reached the sink. After [`preflow_push`](Self::preflow_push)
    /// this is the maximum flow value.
    pub fn flow_amount(&self) -> Capacity {
        self.node_excess(self.sink())
    }

    /// Nodes other than the source and the sink holding positive excess,
    /// in the order they entered the excess table.
    pub fn active_nodes(&self) -> impl Iterator<Item = &N> + '_ {
        let (source, sink) = (self.source(), self.sink());
        self.excess
            .keys()
            .filter(move |node| *node != source && *node != sink)
    }

    pub fn is_active(&self, node: &N) -> bool {
        node != self.source() && node != self.sink() && self.excess.contains_key(node)
    }

    pub fn has_active_nodes(&self) -> bool {
        self.active_nodes().next().is_some()
    }

    /// Pure label test: `distance(tail) == distance(head) + 1`. Whether the
    /// arc exists is not checked; unlabelled nodes are never admissible.
    pub fn is_arc_admissible(&self, tail: &N, head: &N) -> bool {
        match (self.labels.get(tail), self.labels.get(head)) {
            (Some(t), Some(h)) => t == h + 1,
            _ => false,
        }
    }

    /// Number of pushes performed by `step` since the last `preflow_push`.
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn relabels(&self) -> usize {
        self.relabels
    }

    pub fn calculate_distances(&mut self) {
        self.labels.recompute(&self.network);
        debug!(
            "labelled {} of {} nodes",
            self.labels.len(),
            self.network.number_of_nodes()
        );
    }

    /// Relabels every node and floods all arcs leaving the source.
    ///
    /// This creates the first set of active nodes. Running it again after
    /// capacity edits re-labels and re-floods from the source's current
    /// successors; excess already held by nodes is kept.
    pub fn preprocess(&mut self) -> Result<()> {
        self.calculate_distances();

        if log_enabled!(Level::Debug) {
            let total_capacity: u128 = self.network.arcs().map(|(_, _, cap)| cap as u128).sum();
            debug!("number of nodes: {}", self.network.number_of_nodes());
            debug!("number of arcs: {}", self.network.number_of_arcs());
            debug!("sum of capacities: {}", total_capacity);
        }

        let source = self.source().clone();
        let heads: Vec<N> = self.network.successors(&source).cloned().collect();
        for head in heads {
            let capacity = self.network.arc_capacity(&source, &head);
            self.push_flow(source.clone(), head, capacity)?;
        }
        Ok(())
    }

    /// Pushes `amount` along `(tail, head)`.
    ///
    /// The amount may not exceed the residual capacity of the arc nor,
    /// unless `tail` is the source, the excess of `tail`. On error nothing
    /// is changed.
    pub fn push_flow(&mut self, tail: N, head: N, amount: Capacity) -> Result<()> {
        if amount == 0 {
            return Err(FlowError::NonPositiveAmount);
        }
        let is_source = &tail == self.source();
        let excess = self.node_excess(&tail);
        if !is_source && amount > excess {
            return Err(FlowError::ExcessExceeded {
                tail: format!("{tail:?}"),
                amount,
                excess,
            });
        }
        let capacity = self.network.arc_capacity(&tail, &head);
        if amount > capacity {
            return Err(FlowError::CapacityExceeded {
                tail: format!("{tail:?}"),
                head: format!("{head:?}"),
                amount,
                capacity,
            });
        }
        let reverse = self
            .network
            .arc_capacity(&head, &tail)
            .checked_add(amount)
            .ok_or_else(|| FlowError::overflow(&head, &tail))?;
        let head_excess = if &head == self.source() {
            None
        } else {
            Some(
                self.node_excess(&head)
                    .checked_add(amount)
                    .ok_or_else(|| FlowError::ExcessOverflow {
                        node: format!("{head:?}"),
                    })?,
            )
        };

        self.network
            .set_arc_capacity(tail.clone(), head.clone(), capacity - amount)?;
        self.network
            .set_arc_capacity(head.clone(), tail.clone(), reverse)?;
        if let Some(head_excess) = head_excess {
            self.excess.insert(head, head_excess);
        }
        if !is_source {
            self.reduce_excess(&tail, amount);
        }
        Ok(())
    }

    fn reduce_excess(&mut self, node: &N, amount: Capacity) {
        match self.excess.get_mut(node) {
            Some(excess) if *excess > amount => *excess -= amount,
            Some(_) => {
                self.excess.shift_remove(node);
            }
            None => unreachable!("reducing excess of {node:?} which has none"),
        }
    }

    /// Discharges one active node: pushes along an admissible arc if there
    /// is one, relabels the node otherwise.
    ///
    /// Returns `None` once no active node is left. Callers that need to
    /// bound or cancel a run can drive the solver through this method.
    ///
    /// # Panics
    ///
    /// If an active node has no labelled successor. Every node that
    /// received flow gained a residual arc back towards its sender, so this
    /// only happens when the network was edited mid-run.
    pub fn step(&mut self) -> Result<Option<Step<N>>> {
        if !self.has_active_nodes() {
            return Ok(None);
        }
        let Some(node) = self.active_strategy.select(self) else {
            panic!("active node strategy selected nothing while active nodes remain");
        };
        assert!(
            self.is_active(&node),
            "active node strategy selected inactive node {node:?}"
        );

        if let Some(head) = self.admissible_strategy.admissible_head(self, &node) {
            let amount = cmp::min(
                self.node_excess(&node),
                self.network.arc_capacity(&node, &head),
            );
            self.push_flow(node.clone(), head.clone(), amount)?;
            self.pushes += 1;
            return Ok(Some(Step::Push {
                tail: node,
                head,
                amount,
            }));
        }

        let min_distance = self
            .successors(&node)
            .filter_map(|succ| self.labels.get(succ))
            .min();
        let Some(min_distance) = min_distance else {
            panic!(
                "active node {:?} with excess {} has no labelled successors",
                node,
                self.node_excess(&node)
            );
        };
        let from = self.labels.get(&node);
        let to = min_distance + 1;
        self.labels.set(node.clone(), to);
        self.relabels += 1;
        debug!("relabel {:?}: {:?} -> {}", node, from, to);
        Ok(Some(Step::Relabel { node, from, to }))
    }

    /// Runs [`preprocess`](Self::preprocess) and then discharges active
    /// nodes until none is left. Returns the maximum flow value.
    pub fn preflow_push(&mut self) -> Result<Capacity> {
        let profiling_start = Instant::now();
        self.pushes = 0;
        self.relabels = 0;

        self.preprocess()?;
        while self.step()?.is_some() {}

        info!(
            "preflow_push: flow {} after {} pushes and {} relabels in {:.6}s",
            self.flow_amount(),
            self.pushes,
            self.relabels,
            utils::elapsed_secs(profiling_start)
        );
        Ok(self.flow_amount())
    }

    /// Captures capacities, labels and excess as one unit.
    pub fn state(&self) -> SolverState<N> {
        SolverState {
            network: self.network.state(),
            labels: self.labels.clone(),
            excess: self.excess.clone(),
        }
    }

    /// Restores capacities, labels and excess captured by [`state`](Self::state).
    ///
    /// Fails without changing anything if the state belongs to another
    /// network instance.
    pub fn restore(&mut self, state: &SolverState<N>) -> Result<()> {
        self.network.restore(&state.network)?;
        self.labels = state.labels.clone();
        self.excess = state.excess.clone();
        Ok(())
    }
}

/// Configures the selection strategies of a [`PushRelabel`] solver.
pub struct PushRelabelBuilder<N: Node> {
    network: FlowNetwork<N>,
    active_strategy: Box<dyn ActiveNodeStrategy<N>>,
    admissible_strategy: Box<dyn AdmissibleArcStrategy<N>>,
}

impl<N: Node> PushRelabelBuilder<N> {
    pub fn active_node_strategy<S>(mut self, strategy: S) -> Self
    where
        S: ActiveNodeStrategy<N> + 'static,
    {
        self.active_strategy = Box::new(strategy);
        self
    }

    pub fn admissible_arc_strategy<S>(mut self, strategy: S) -> Self
    where
        S: AdmissibleArcStrategy<N> + 'static,
    {
        self.admissible_strategy = Box::new(strategy);
        self
    }

    pub fn build(self) -> PushRelabel<N> {
        PushRelabel {
            network: self.network,
            labels: DistanceLabels::new(),
            excess: IndexMap::new(),
            active_strategy: self.active_strategy,
            admissible_strategy: self.admissible_strategy,
            pushes: 0,
            relabels: 0,
        }
    }
}

/// Immutable capture of a solver: the network's capacities together with
/// all distance labels and excesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverState<N: Node> {
    network: NetworkState<N>,
    labels: DistanceLabels<N>,
    excess: IndexMap<N, Capacity>,
}

impl<N: Node> SolverState<N> {
    pub fn network(&self) -> &NetworkState<N> {
        &self.network
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "source";
    const SINK: &str = "sink";

    fn solver() -> PushRelabel<&'static str> {
        let network = FlowNetwork::from_arcs(
            SOURCE,
            SINK,
            [
                (SOURCE, "A", 3),
                (SOURCE, "B", 2),
                ("A", "D", 2),
                ("B", "A", 3),
                ("B", "C", 2),
                ("C", "D", 3),
                ("C", SINK, 2),
                ("D", "B", 1),
                ("D", SINK, 3),
            ],
        )
        .unwrap();
        PushRelabel::new(network)
    }

    #[test]
    fn push_from_source() {
        let mut solver = solver();
        solver.push_flow(SOURCE, "B", 1).unwrap();

        assert_eq!(solver.arc_capacity(&SOURCE, &"B"), 1);
        assert_eq!(solver.arc_capacity(&"B", &SOURCE), 1);
        assert_eq!(solver.node_excess(&"B"), 1);
        assert_eq!(solver.node_excess(&SOURCE), 0);
    }

    #[test]
    fn push_from_intermediate_nodes() {
        let mut solver = solver();
        solver.push_flow(SOURCE, "A", 3).unwrap();
        solver.push_flow("A", "D", 2).unwrap();
        solver.push_flow("D", SINK, 1).unwrap();

        assert_eq!(solver.arc_capacity(&SOURCE, &"A"), 0);
        assert_eq!(solver.arc_capacity(&"A", &SOURCE), 3);
        assert_eq!(solver.arc_capacity(&"A", &"D"), 0);
        assert_eq!(solver.arc_capacity(&"D", &"A"), 2);
        assert_eq!(solver.arc_capacity(&"D", &SINK), 2);
        assert_eq!(solver.arc_capacity(&SINK, &"D"), 1);

        assert_eq!(solver.node_excess(&"A"), 1);
        assert_eq!(solver.node_excess(&"D"), 1);
        assert_eq!(solver.node_excess(&SINK), 1);
    }

    #[test]
    fn push_rejects_invalid_amounts() {
        let mut solver = solver();
        assert_eq!(
            solver.push_flow(SOURCE, "A", 0),
            Err(FlowError::NonPositiveAmount)
        );
        assert!(matches!(
            solver.push_flow(SOURCE, "A", 4),
            Err(FlowError::CapacityExceeded { capacity: 3, .. })
        ));
        assert!(matches!(
            solver.push_flow("A", "D", 1),
            Err(FlowError::ExcessExceeded { excess: 0, .. })
        ));

        solver.push_flow(SOURCE, "A", 1).unwrap();
        assert!(matches!(
            solver.push_flow("A", "D", 2),
            Err(FlowError::ExcessExceeded { excess: 1, .. })
        ));
        assert_eq!(solver.arc_capacity(&"A", &"D"), 2);
        assert_eq!(solver.arc_capacity(&"D", &"A"), 0);
        assert_eq!(solver.node_excess(&"A"), 1);
        assert_eq!(solver.node_excess(&"D"), 0);
    }

    #[test]
    fn flow_amount() {
        let mut solver = solver();
        assert_eq!(solver.flow_amount(), 0);

        solver.push_flow(SOURCE, "A", 2).unwrap();
        solver.push_flow("A", "D", 2).unwrap();
        solver.push_flow("D", SINK, 2).unwrap();
        solver.push_flow(SOURCE, "B", 1).unwrap();
        solver.push_flow("B", "C", 1).unwrap();
        solver.push_flow("C", SINK, 1).unwrap();

        assert_eq!(solver.flow_amount(), 3);
        assert!(!solver.has_active_nodes());
    }

    #[test]
    fn preprocess() {
        let mut solver = solver();
        solver.preprocess().unwrap();

        assert_eq!(solver.arc_capacity(&SOURCE, &"A"), 0);
        assert_eq!(solver.arc_capacity(&SOURCE, &"B"), 0);
        assert_eq!(solver.node_excess(&"A"), 3);
        assert_eq!(solver.node_excess(&"B"), 2);
        assert_eq!(solver.arc_capacity(&"A", &SOURCE), 3);
        assert_eq!(solver.arc_capacity(&"B", &SOURCE), 2);

        assert_eq!(solver.node_distance(&SINK), Some(0));
        assert_eq!(solver.node_distance(&SOURCE), Some(6));
        assert_eq!(solver.node_distance(&"C"), Some(1));
        assert_eq!(solver.node_distance(&"D"), Some(1));
        assert_eq!(solver.node_distance(&"A"), Some(2));
        assert_eq!(solver.node_distance(&"B"), Some(2));
    }

    #[test]
    fn preprocess_more_than_once() {
        let mut solver = solver();
        solver.preprocess().unwrap();
        solver.push_flow("B", "C", 2).unwrap();
        solver.push_flow("C", SINK, 2).unwrap();

        solver.preprocess().unwrap();

        assert_eq!(solver.node_distance(&SINK), Some(0));
        assert_eq!(solver.node_distance(&SOURCE), Some(6));
        assert_eq!(solver.node_distance(&"C"), Some(2));
        assert_eq!(solver.node_distance(&"D"), Some(1));
        assert_eq!(solver.node_distance(&"A"), Some(2));
        assert_eq!(solver.node_distance(&"B"), Some(3));
        assert_eq!(solver.flow_amount(), 2);
        assert_eq!(solver.node_excess(&"A"), 3);
    }

    #[test]
    fn active_nodes() {
        let mut solver = solver();
        solver.push_flow(SOURCE, "A", 2).unwrap();
        solver.push_flow("A", "D", 1).unwrap();
        solver.push_flow("D", SINK, 1).unwrap();
        solver.push_flow(SOURCE, "B", 1).unwrap();

        let active: Vec<_> = solver.active_nodes().copied().collect();
        assert_eq!(active, vec!["A", "B"]);
        assert!(solver.is_active(&"A"));
        assert!(!solver.is_active(&"D"));
        assert!(!solver.is_active(&SINK));
    }

    #[test]
    fn admissibility_is_a_label_comparison() {
        let mut solver = solver();
        solver.calculate_distances();

        // A = 2, D = 1, C = 1, B = 2
        assert!(solver.is_arc_admissible(&"A", &"D"));
        assert!(solver.is_arc_admissible(&"A", &"C"));
        assert_eq!(solver.arc_capacity(&"A", &"C"), 0);
        assert!(!solver.is_arc_admissible(&"B", &"A"));
        assert!(!solver.is_arc_admissible(&"D", &"A"));
        assert!(!solver.is_arc_admissible(&"X", &SINK));
    }

    #[test]
    fn successors_skip_unlabelled_nodes() {
        let network =
            FlowNetwork::from_arcs("s", "t", [("s", "a", 1), ("a", "t", 1), ("a", "x", 1)])
                .unwrap();
        let mut solver = PushRelabel::new(network);
        assert_eq!(solver.successors(&"a").count(), 0);

        solver.calculate_distances();
        let succs: Vec<_> = solver.successors(&"a").copied().collect();
        assert_eq!(succs, vec!["t"]);
    }

    #[test]
    fn find_maximum_flow() {
        let network = FlowNetwork::from_arcs(
            1u32,
            4u32,
            [(1, 2, 2), (1, 3, 4), (2, 3, 3), (3, 4, 5), (2, 4, 1)],
        )
        .unwrap();
        let mut solver = PushRelabel::new(network);

        assert_eq!(solver.preflow_push().unwrap(), 6);
        assert_eq!(solver.flow_amount(), 6);
        assert!(!solver.has_active_nodes());
    }

    #[test]
    fn push_excess_back_to_source() {
        let network = FlowNetwork::from_arcs(
            SOURCE,
            SINK,
            [
                (SOURCE, "A", 1),
                (SOURCE, "C", 1),
                ("A", "B", 1),
                ("C", "B", 1),
                ("B", SINK, 1),
            ],
        )
        .unwrap();
        let mut solver = PushRelabel::new(network);
        solver.push_flow(SOURCE, "A", 1).unwrap();
        solver.push_flow("A", "B", 1).unwrap();
        solver.push_flow("B", SINK, 1).unwrap();

        solver.preflow_push().unwrap();

        assert_eq!(solver.flow_amount(), 1);
        assert_eq!(solver.arc_capacity(&"A", &SOURCE), 1);
        assert_eq!(solver.arc_capacity(&SOURCE, &"C"), 1);
        assert_eq!(solver.node_excess(&"C"), 0);
        assert_eq!(solver.node_excess(&SOURCE), 0);
        assert_eq!(solver.relabels(), 1);
    }

    #[test]
    fn step_reports_pushes_and_relabels() {
        let network = FlowNetwork::from_arcs("s", "t", [("s", "x", 2)]).unwrap();
        let mut solver = PushRelabel::new(network);
        solver.preprocess().unwrap();

        // x can't reach the sink, so it is unlabelled until relabelled
        assert_eq!(
            solver.step().unwrap(),
            Some(Step::Relabel {
                node: "x",
                from: None,
                to: 4,
            })
        );
        assert_eq!(
            solver.step().unwrap(),
            Some(Step::Push {
                tail: "x",
                head: "s",
                amount: 2,
            })
        );
        assert_eq!(solver.step().unwrap(), None);
        assert_eq!(solver.arc_capacity(&"s", &"x"), 2);
        assert_eq!(solver.flow_amount(), 0);
    }

    #[test]
    #[should_panic(expected = "has no labelled successors")]
    fn active_node_without_successors_is_fatal() {
        let network = FlowNetwork::from_arcs("s", "t", [("s", "x", 2), ("s", "t", 1)]).unwrap();
        let mut solver = PushRelabel::new(network);
        solver.push_flow("s", "x", 2).unwrap();
        solver.network_mut().set_arc_capacity("x", "s", 0).unwrap();

        let _ = solver.preflow_push();
    }

    #[test]
    fn state_round_trip() {
        let mut solver = solver();
        solver.preprocess().unwrap();
        let state = solver.state();
        let labels = solver.labels().clone();
        assert_eq!(state.network().origin(), solver.network().id());

        solver.preflow_push().unwrap();
        assert_eq!(solver.flow_amount(), 4);

        solver.restore(&state).unwrap();
        assert_eq!(solver.labels(), &labels);
        assert_eq!(solver.node_excess(&"A"), 3);
        assert_eq!(solver.node_excess(&"B"), 2);
        assert_eq!(solver.flow_amount(), 0);
        assert_eq!(solver.arc_capacity(&SOURCE, &"A"), 0);
        assert_eq!(solver.arc_capacity(&"A", &SOURCE), 3);
        assert_eq!(solver.arc_capacity(&"C", &SINK), 2);
        assert_eq!(solver.state(), state);
    }

    #[test]
    fn restore_rejects_state_of_other_solver() {
        let mut solver = solver();
        let mut other = PushRelabel::new(solver.network().clone());
        other.preflow_push().unwrap();
        let foreign = other.state();

        solver.push_flow(SOURCE, "A", 1).unwrap();
        let before = solver.state();
        assert_ne!(foreign.network().origin(), solver.network().id());

        assert!(matches!(
            solver.restore(&foreign),
            Err(FlowError::ForeignState { .. })
        ));
        assert_eq!(solver.state(), before);
    }

    fn saturated() -> PushRelabel<&'static str> {
        let network = FlowNetwork::from_arcs(
            "s",
            "t",
            [("s", "t", Capacity::MAX), ("s", "a", Capacity::MAX), ("a", "t", Capacity::MAX)],
        )
        .unwrap();
        PushRelabel::new(network)
    }

    #[test]
    fn push_rejects_excess_overflow() {
        let mut solver = saturated();
        solver.push_flow("s", "t", Capacity::MAX).unwrap();
        solver.push_flow("s", "a", Capacity::MAX).unwrap();
        let before = solver.state();

        assert!(matches!(
            solver.push_flow("a", "t", 1),
            Err(FlowError::ExcessOverflow { node }) if node == "\"t\""
        ));
        assert_eq!(solver.state(), before);
        assert_eq!(solver.node_excess(&"a"), Capacity::MAX);
        assert_eq!(solver.arc_capacity(&"a", &"t"), Capacity::MAX);
        assert_eq!(solver.arc_capacity(&"t", &"a"), 0);
    }

    #[test]
    fn preflow_push_reports_excess_overflow() {
        let mut solver = saturated();
        assert!(matches!(
            solver.preflow_push(),
            Err(FlowError::ExcessOverflow { .. })
        ));
        assert_eq!(solver.flow_amount(), Capacity::MAX);
        assert_eq!(solver.node_excess(&"a"), Capacity::MAX);
    }

    #[test]
    fn push_rejects_reverse_arc_overflow() {
        let network = FlowNetwork::from_arcs(
            "s",
            "t",
            [("s", "a", 1), ("a", "s", Capacity::MAX), ("a", "t", 1)],
        )
        .unwrap();
        let mut solver = PushRelabel::new(network);
        let before = solver.state();

        assert!(matches!(
            solver.push_flow("s", "a", 1),
            Err(FlowError::CapacityOverflow { .. })
        ));
        assert_eq!(solver.state(), before);
        assert_eq!(solver.node_excess(&"a"), 0);
        assert_eq!(solver.arc_capacity(&"s", &"a"), 1);
    }
}
