use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::{Capacity, FlowError};
use crate::network::FlowNetwork;
use crate::push_relabel::PushRelabel;

impl From<FlowError> for PyErr {
    fn from(err: FlowError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Push-relabel solver over integer node ids, exposed to Python.
#[pyclass(unsendable, name = "PushRelabelMaxFlow")]
pub struct PyPushRelabel {
    solver: PushRelabel<u32>,
}

#[pymethods]
impl PyPushRelabel {
    #[new]
    fn new(source: u32, sink: u32, arcs: Vec<((u32, u32), Capacity)>) -> PyResult<Self> {
        let network = FlowNetwork::from_arcs(
            source,
            sink,
            arcs.into_iter().map(|((tail, head), cap)| (tail, head, cap)),
        )?;
        Ok(PyPushRelabel {
            solver: PushRelabel::new(network),
        })
    }

    fn set_arc_capacity(&mut self, tail: u32, head: u32, capacity: Capacity) -> PyResult<()> {
        Ok(self.solver.network_mut().set_arc_capacity(tail, head, capacity)?)
    }

    fn increase_arc_capacity(&mut self, tail: u32, head: u32, delta: Capacity) -> PyResult<()> {
        Ok(self.solver.network_mut().increase_arc_capacity(tail, head, delta)?)
    }

    fn arc_capacity(&self, tail: u32, head: u32) -> Capacity {
        self.solver.arc_capacity(&tail, &head)
    }

    fn number_of_nodes(&self) -> usize {
        self.solver.network().number_of_nodes()
    }

    fn arcs(&self) -> Vec<((u32, u32), Capacity)> {
        self.solver
            .network()
            .arcs()
            .map(|(tail, head, cap)| ((*tail, *head), cap))
            .collect()
    }

    fn preprocess(&mut self) -> PyResult<()> {
        Ok(self.solver.preprocess()?)
    }

    fn preflow_push(&mut self) -> PyResult<Capacity> {
        Ok(self.solver.preflow_push()?)
    }

    fn push_flow(&mut self, tail: u32, head: u32, amount: Capacity) -> PyResult<()> {
        Ok(self.solver.push_flow(tail, head, amount)?)
    }

    fn flow_amount(&self) -> Capacity {
        self.solver.flow_amount()
    }

    fn node_excess(&self, node: u32) -> Capacity {
        self.solver.node_excess(&node)
    }

    fn node_distance(&self, node: u32) -> Option<usize> {
        self.solver.node_distance(&node)
    }

    fn active_nodes(&self) -> Vec<u32> {
        self.solver.active_nodes().copied().collect()
    }

    fn is_arc_admissible(&self, tail: u32, head: u32) -> bool {
        self.solver.is_arc_admissible(&tail, &head)
    }
}
