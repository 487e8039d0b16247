use thiserror::Error;

/// Capacity and flow amounts carried by arcs and nodes.
pub type Capacity = u64;

pub type Result<T> = std::result::Result<T, FlowError>;

/// Input validation failures. None of them leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("self-arc on node {node} is not allowed")]
    SelfArc { node: String },

    #[error("capacity increase must be positive")]
    NonPositiveDelta,

    #[error("amount of flow must be greater than 0")]
    NonPositiveAmount,

    #[error("can't push {amount} from {tail}: excess is only {excess}")]
    ExcessExceeded {
        tail: String,
        amount: Capacity,
        excess: Capacity,
    },

    #[error("can't push {amount} along ({tail}, {head}): residual capacity is only {capacity}")]
    CapacityExceeded {
        tail: String,
        head: String,
        amount: Capacity,
        capacity: Capacity,
    },

    #[error("state was taken from network #{origin}, not from network #{target}")]
    ForeignState { origin: u64, target: u64 },

    #[error("excess of node {node} would overflow")]
    ExcessOverflow { node: String },

    #[error("source and sink must differ, both are {node}")]
    SourceIsSink { node: String },

    #[error("capacity of arc ({tail}, {head}) would overflow")]
    CapacityOverflow { tail: String, head: String },
}

impl FlowError {
    pub(crate) fn self_arc<N: std::fmt::Debug>(node: &N) -> Self {
        FlowError::SelfArc {
            node: format!("{node:?}"),
        }
    }

    pub(crate) fn overflow<N: std::fmt::Debug>(tail: &N, head: &N) -> Self {
        FlowError::CapacityOverflow {
            tail: format!("{tail:?}"),
            head: format!("{head:?}"),
        }
    }
}
