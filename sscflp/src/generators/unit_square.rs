use anyhow::{Result, ensure};
use rand::Rng;
use rand::distr::Distribution;
use serde::{Deserialize, Serialize};

use crate::entities::Instance;
use crate::generators::{
    GenerationMethod, assignment_cost_matrix, sample_demands, sample_points, scale_capacities,
};
use crate::util::{CanonicalUniform, IntervalUniform};

/// Interval of the constant term of the fixed costs
pub const FIXED_COST_BASE_INTERVAL: (f64, f64) = (0.0, 90.0);

/// Interval of the factor applied to the square root of the capacity in the fixed costs
pub const FIXED_COST_SLOPE_INTERVAL: (f64, f64) = (100.0, 110.0);

/// Parameters of the unit square generation method of Cornuejols, Sridharan & Thizy (1991).
///
/// Facilities and customers are placed uniformly in the unit square.
/// The fixed costs reflect economies of scale: `f[i] = floor(U[0,90] + U[100,110] * sqrt(s[i]))`,
/// with `s[i]` the capacity before scaling.
/// The capacities are scaled towards the supplied `ratio`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitSquareParams {
    /// Number of facilities (n)
    pub n_facilities: usize,
    /// Number of customers (m)
    pub n_customers: usize,
    /// Smallest demand a customer can have
    pub demand_low: u64,
    /// Largest demand a customer can have
    pub demand_high: u64,
    /// Smallest capacity a facility can have, before scaling
    pub capacity_low: u64,
    /// Largest capacity a facility can have, before scaling
    pub capacity_high: u64,
    /// Targeted ratio between the total capacity and the total demand
    pub ratio: f64,
    /// Seed for the PRNG
    pub seed: u64,
}

impl UnitSquareParams {
    /// Checks the preconditions of the method. Generation itself does not perform these checks.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.n_facilities > 0, "at least one facility is required");
        ensure!(self.n_customers > 0, "at least one customer is required");
        ensure!(
            0 < self.demand_low && self.demand_low <= self.demand_high,
            "invalid demand interval: [{}, {}]",
            self.demand_low,
            self.demand_high
        );
        ensure!(
            0 < self.capacity_low && self.capacity_low <= self.capacity_high,
            "invalid capacity interval: [{}, {}]",
            self.capacity_low,
            self.capacity_high
        );
        ensure!(
            self.ratio.is_finite() && self.ratio > 0.0,
            "invalid capacity ratio: {}",
            self.ratio
        );
        Ok(())
    }
}

impl GenerationMethod for UnitSquareParams {
    const NAME: &'static str = "unit square";

    fn seed(&self) -> u64 {
        self.seed
    }

    fn generate_with_rng(&self, rng: impl Rng) -> Result<Instance> {
        generate(self, rng)
    }
}

/// Generates an instance with the unit square method.
///
/// Stream order: facility positions, customer positions, capacities,
/// the two fixed cost terms of every facility and finally the demands.
pub fn generate(params: &UnitSquareParams, mut rng: impl Rng) -> Result<Instance> {
    let position_distr = CanonicalUniform::new(0.0, 1.0);
    let capacity_distr = IntervalUniform::new_inclusive(params.capacity_low, params.capacity_high);
    let demand_distr = IntervalUniform::new_inclusive(params.demand_low, params.demand_high);
    let base_distr = CanonicalUniform::new(FIXED_COST_BASE_INTERVAL.0, FIXED_COST_BASE_INTERVAL.1);
    let slope_distr =
        CanonicalUniform::new(FIXED_COST_SLOPE_INTERVAL.0, FIXED_COST_SLOPE_INTERVAL.1);

    let facilities = sample_points(&position_distr, params.n_facilities, &mut rng);
    let customers = sample_points(&position_distr, params.n_customers, &mut rng);

    let assignment_costs = assignment_cost_matrix(&facilities, &customers);

    let mut capacities = (0..params.n_facilities)
        .map(|_| capacity_distr.sample(&mut rng))
        .collect::<Vec<u64>>();

    let fixed_costs = capacities
        .iter()
        .map(|&s| {
            let base = base_distr.sample(&mut rng);
            let slope = slope_distr.sample(&mut rng);
            (base + slope * (s as f64).sqrt()) as u64
        })
        .collect::<Vec<u64>>();

    let (demands, total_demand) = sample_demands(&demand_distr, params.n_customers, &mut rng)?;

    scale_capacities(&mut capacities, total_demand, params.ratio)?;

    Ok(Instance::new(
        assignment_costs,
        fixed_costs,
        demands,
        capacities,
        Some(params.ratio),
    ))
}
