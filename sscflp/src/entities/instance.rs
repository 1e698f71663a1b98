use ndarray::Array2;

use crate::util::assertions;

/// Static representation of a (single-source capacitated) facility location instance.
///
/// Facilities are indexed `0..n_facilities` and customers `0..n_customers`.
/// An instance is never modified after creation: generation and conversion both produce new instances.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Number of facility sites (n)
    pub n_facilities: usize,
    /// Number of customers (m)
    pub n_customers: usize,
    /// `assignment_costs[[i, j]]` is the cost of serving customer `j` from facility `i` (n x m)
    pub assignment_costs: Array2<u64>,
    /// `fixed_costs[i]` is the cost of opening facility `i`
    pub fixed_costs: Vec<u64>,
    /// `demands[j]` is the demand of customer `j`
    pub demands: Vec<u64>,
    /// `capacities[i]` is the capacity of facility `i`
    pub capacities: Vec<u64>,
    /// Sum of all demands
    pub total_demand: u64,
    /// Capacity/demand ratio the capacities were scaled towards, if known.
    /// Not part of the text format.
    pub capacity_ratio: Option<f64>,
}

impl Instance {
    /// Instance without any facilities or customers
    pub fn empty() -> Self {
        Self {
            n_facilities: 0,
            n_customers: 0,
            assignment_costs: Array2::zeros((0, 0)),
            fixed_costs: vec![],
            demands: vec![],
            capacities: vec![],
            total_demand: 0,
            capacity_ratio: None,
        }
    }

    pub fn new(
        assignment_costs: Array2<u64>,
        fixed_costs: Vec<u64>,
        demands: Vec<u64>,
        capacities: Vec<u64>,
        capacity_ratio: Option<f64>,
    ) -> Self {
        let (n_facilities, n_customers) = assignment_costs.dim();
        let total_demand = demands.iter().sum();
        let instance = Self {
            n_facilities,
            n_customers,
            assignment_costs,
            fixed_costs,
            demands,
            capacities,
            total_demand,
            capacity_ratio,
        };
        debug_assert!(assertions::instance_is_consistent(&instance));
        instance
    }

    pub fn is_empty(&self) -> bool {
        self.n_facilities == 0 && self.n_customers == 0
    }

    pub fn total_capacity(&self) -> u64 {
        self.capacities.iter().sum()
    }

    /// Cost of serving customer `customer` from facility `facility`
    pub fn assignment_cost(&self, facility: usize, customer: usize) -> u64 {
        self.assignment_costs[[facility, customer]]
    }

    /// Realized ratio between the total capacity and the total demand
    pub fn realized_capacity_ratio(&self) -> Option<f64> {
        match self.total_demand {
            0 => None,
            td => Some(self.total_capacity() as f64 / td as f64),
        }
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::empty()
    }
}
