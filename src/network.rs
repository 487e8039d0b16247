use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::error::{Capacity, FlowError, Result};
use crate::node::Node;

static NEXT_NETWORK_ID: AtomicU64 = AtomicU64::new(0);

fn next_network_id() -> u64 {
    NEXT_NETWORK_ID.fetch_add(1, Ordering::Relaxed)
}

/// A directed graph where every arc carries a positive integer capacity.
///
/// Forward and residual arcs share one table: pushing flow along `(u, v)`
/// lowers the capacity of `(u, v)` and raises the capacity of `(v, u)`.
/// An arc whose capacity drops to zero is removed, so successors and
/// predecessors only ever name arcs that can still carry flow.
///
/// Successors and predecessors are enumerated in insertion order.
#[derive(Debug)]
pub struct FlowNetwork<N: Node> {
    id: u64,
    source: N,
    sink: N,
    succs: IndexMap<N, IndexMap<N, Capacity>>,
    preds: IndexMap<N, IndexSet<N>>,
}

impl<N: Node> FlowNetwork<N> {
    /// Empty network. Fails if `source` and `sink` are the same node.
    pub fn new(source: N, sink: N) -> Result<Self> {
        if source == sink {
            return Err(FlowError::SourceIsSink {
                node: format!("{source:?}"),
            });
        }
        Ok(FlowNetwork {
            id: next_network_id(),
            source,
            sink,
            succs: IndexMap::new(),
            preds: IndexMap::new(),
        })
    }

    /// Builds a network from `(tail, head, capacity)` triples, later
    /// triples overwriting earlier ones for the same arc.
    pub fn from_arcs<I>(source: N, sink: N, arcs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, Capacity)>,
    {
        let mut network = FlowNetwork::new(source, sink)?;
        for (tail, head, capacity) in arcs {
            network.set_arc_capacity(tail, head, capacity)?;
        }
        Ok(network)
    }

    pub fn source(&self) -> &N {
        &self.source
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Process-unique identity of this network instance.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Stored capacity of `(tail, head)`, or 0 if there is no such arc.
    pub fn arc_capacity(&self, tail: &N, head: &N) -> Capacity {
        self.succs
            .get(tail)
            .and_then(|heads| heads.get(head))
            .copied()
            .unwrap_or(0)
    }

    /// Sets the capacity of `(tail, head)`. Zero removes the arc.
    /// The reverse arc is left untouched.
    pub fn set_arc_capacity(&mut self, tail: N, head: N, capacity: Capacity) -> Result<()> {
        if tail == head {
            return Err(FlowError::self_arc(&tail));
        }
        if capacity == 0 {
            self.remove_arc(&tail, &head);
        } else {
            self.preds
                .entry(head.clone())
                .or_default()
                .insert(tail.clone());
            self.succs.entry(tail).or_default().insert(head, capacity);
        }
        Ok(())
    }

    /// Adds `delta` to the current capacity of `(tail, head)`.
    pub fn increase_arc_capacity(&mut self, tail: N, head: N, delta: Capacity) -> Result<()> {
        if delta == 0 {
            return Err(FlowError::NonPositiveDelta);
        }
        let capacity = self
            .arc_capacity(&tail, &head)
            .checked_add(delta)
            .ok_or_else(|| FlowError::overflow(&tail, &head))?;
        self.set_arc_capacity(tail, head, capacity)
    }

    fn remove_arc(&mut self, tail: &N, head: &N) {
        if let Some(heads) = self.succs.get_mut(tail) {
            heads.shift_remove(head);
            if heads.is_empty() {
                self.succs.shift_remove(tail);
            }
        }
        if let Some(tails) = self.preds.get_mut(head) {
            tails.shift_remove(tail);
            if tails.is_empty() {
                self.preds.shift_remove(head);
            }
        }
    }

    /// Heads of the arcs leaving `tail`.
    pub fn successors<'a>(&'a self, tail: &N) -> impl Iterator<Item = &'a N> + 'a {
        self.succs.get(tail).into_iter().flat_map(|heads| heads.keys())
    }

    /// Tails of the arcs entering `head`.
    pub fn predecessors<'a>(&'a self, head: &N) -> impl Iterator<Item = &'a N> + 'a {
        self.preds.get(head).into_iter().flat_map(|tails| tails.iter())
    }

    /// Distinct arc endpoints together with the source and the sink.
    pub fn number_of_nodes(&self) -> usize {
        let mut nodes: IndexSet<&N> = self.succs.keys().chain(self.preds.keys()).collect();
        nodes.insert(&self.source);
        nodes.insert(&self.sink);
        nodes.len()
    }

    pub fn number_of_arcs(&self) -> usize {
        self.succs.values().map(|heads| heads.len()).sum()
    }

    /// All stored arcs as `(tail, head, capacity)`.
    pub fn arcs(&self) -> impl Iterator<Item = (&N, &N, Capacity)> + '_ {
        self.succs
            .iter()
            .flat_map(|(tail, heads)| heads.iter().map(move |(head, cap)| (tail, head, *cap)))
    }

    /// Captures the full capacity table.
    pub fn state(&self) -> NetworkState<N> {
        NetworkState {
            origin: self.id,
            arcs: self
                .arcs()
                .map(|(tail, head, cap)| (tail.clone(), head.clone(), cap))
                .collect(),
        }
    }

    /// Replaces the capacity table with the one captured in `state`.
    ///
    /// Fails without touching the network if `state` was taken from
    /// another instance.
    pub fn restore(&mut self, state: &NetworkState<N>) -> Result<()> {
        if state.origin != self.id {
            return Err(FlowError::ForeignState {
                origin: state.origin,
                target: self.id,
            });
        }
        self.succs.clear();
        self.preds.clear();
        for (tail, head, cap) in state.arcs.iter() {
            self.preds
                .entry(head.clone())
                .or_default()
                .insert(tail.clone());
            self.succs
                .entry(tail.clone())
                .or_default()
                .insert(head.clone(), *cap);
        }
        debug!(
            "restored network #{} to {} arcs",
            self.id,
            state.arcs.len()
        );
        Ok(())
    }
}

/// A clone is a separate network instance with its own identity.
impl<N: Node> Clone for FlowNetwork<N> {
    fn clone(&self) -> Self {
        FlowNetwork {
            id: next_network_id(),
            source: self.source.clone(),
            sink: self.sink.clone(),
            succs: self.succs.clone(),
            preds: self.preds.clone(),
        }
    }
}

/// Immutable copy of a [`FlowNetwork`]'s capacity table, tied to the
/// network it was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkState<N: Node> {
    origin: u64,
    arcs: Vec<(N, N, Capacity)>,
}

impl<N: Node> NetworkState<N> {
    /// Identity of the network this state was taken from.
    pub fn origin(&self) -> u64 {
        self.origin
    }
}
