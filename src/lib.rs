//! Maximum flow between a source and a sink of a capacitated directed graph,
//! computed with the push-relabel (preflow-push) method.
//!
//! Build a [`FlowNetwork`], hand it to a [`PushRelabel`] solver and read
//! the flow back:
//!
//! ```
//! use preflow::{FlowNetwork, PushRelabel};
//!
//! let network = FlowNetwork::from_arcs(
//!     1,
//!     4,
//!     [(1, 2, 2), (1, 3, 4), (2, 3, 3), (3, 4, 5), (2, 4, 1)],
//! )?;
//! let mut solver = PushRelabel::new(network);
//! assert_eq!(solver.preflow_push()?, 6);
//! # Ok::<(), preflow::FlowError>(())
//! ```
//!
//! Active nodes are discharged highest label first and pushed along the
//! first admissible arc. Both rules can be replaced through
//! [`PushRelabel::builder`]. Solver and network state can be captured and
//! restored to rerun experiments from a common baseline.

mod error;
mod labeling;
mod network;
mod node;
mod push_relabel;
pub mod strategy;
mod utils;

#[cfg(feature = "python")]
mod python;

pub use error::{Capacity, FlowError, Result};
pub use labeling::DistanceLabels;
pub use network::{FlowNetwork, NetworkState};
pub use node::Node;
pub use push_relabel::{PushRelabel, PushRelabelBuilder, SolverState, Step};
pub use strategy::{ActiveNodeStrategy, AdmissibleArcStrategy, FirstActive, FirstAdmissible, HighestLabel};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn preflow(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();  // send Rust logs to Python logger
    m.add_class::<python::PyPushRelabel>()?;
    Ok(())
}
