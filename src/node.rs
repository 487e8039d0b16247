use std::fmt::Debug;
use std::hash::Hash;

/// Identity of a node in a [`FlowNetwork`](crate::FlowNetwork).
///
/// The algorithm only compares and hashes nodes; `Debug` is used to name
/// nodes in errors and logs. Any value type satisfying these bounds is a
/// node, e.g. `u32`, `&'static str`, `String` or a caller-defined newtype.
pub trait Node: Clone + Eq + Hash + Debug {}

impl<T> Node for T where T: Clone + Eq + Hash + Debug {}
