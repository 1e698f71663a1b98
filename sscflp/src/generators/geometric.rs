use anyhow::{Context, Result, ensure};
use rand::Rng;
use rand::distr::Distribution;
use serde::{Deserialize, Serialize};

use crate::entities::Instance;
use crate::generators::{
    GenerationMethod, assignment_cost_matrix, sample_demands, sample_points, scale_capacities,
};
use crate::util::{CanonicalUniform, IntervalUniform};

/// Interval from which the capacity/demand ratio is drawn
pub const RATIO_INTERVAL: (f64, f64) = (1.5, 4.0);

/// Parameters of the geometric generation method, as described in
/// Stidsen, Andersen & Dammann, "A Branch and Bound Algorithm for a Class of Biobjective Mixed Integer Programs",
/// Management Science (2014).
///
/// Facilities and customers are placed uniformly in the box `[box_low, box_high]²`.
/// Assignment costs are the scaled [`euclidean_distance`](crate::generators::euclidean_distance)s and the fixed cost
/// of a facility is derived from its nearest customer: `f[i] = (min_j c[i][j] + 1) * 10`.
/// Finally, the capacities are scaled towards a ratio drawn from [`RATIO_INTERVAL`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometricParams {
    /// Number of facilities (n)
    pub n_facilities: usize,
    /// Number of customers (m)
    pub n_customers: usize,
    /// Lower bound of both coordinates
    pub box_low: f64,
    /// Upper bound of both coordinates
    pub box_high: f64,
    /// Smallest demand a customer can have
    pub demand_low: u64,
    /// Largest demand a customer can have
    pub demand_high: u64,
    /// Smallest capacity a facility can have, before scaling
    pub capacity_low: u64,
    /// Largest capacity a facility can have, before scaling
    pub capacity_high: u64,
    /// Seed for the PRNG
    pub seed: u64,
}

impl GeometricParams {
    /// Checks the preconditions of the method. Generation itself does not perform these checks.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.n_facilities > 0, "at least one facility is required");
        ensure!(self.n_customers > 0, "at least one customer is required");
        ensure!(
            self.box_low < self.box_high,
            "invalid box: [{}, {}]",
            self.box_low,
            self.box_high
        );
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
        Ok(())
    }
}

impl GenerationMethod for GeometricParams {
    const NAME: &'static str = "geometric";

    fn seed(&self) -> u64 {
        self.seed
    }

    fn generate_with_rng(&self, rng: impl Rng) -> Result<Instance> {
        generate(self, rng)
    }
}

/// Generates an instance with the geometric method.
///
/// The stream is consumed in a fixed order: facility positions, customer positions, capacities, demands and
/// finally the ratio. Together with [`MtRng`](crate::util::MtRng) this yields reproducible instances.
pub fn generate(params: &GeometricParams, mut rng: impl Rng) -> Result<Instance> {
    let position_distr = CanonicalUniform::new(params.box_low, params.box_high);
    let capacity_distr = IntervalUniform::new_inclusive(params.capacity_low, params.capacity_high);
    let demand_distr = IntervalUniform::new_inclusive(params.demand_low, params.demand_high);
    let ratio_distr = CanonicalUniform::new(RATIO_INTERVAL.0, RATIO_INTERVAL.1);

    let facilities = sample_points(&position_distr, params.n_facilities, &mut rng);
    let customers = sample_points(&position_distr, params.n_customers, &mut rng);

    let assignment_costs = assignment_cost_matrix(&facilities, &customers);

    let fixed_costs = assignment_costs
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let c_min = row.iter().min().with_context(|| {
                format!("facility {i} has no customer to derive its fixed cost from")
            })?;
            c_min
                .checked_add(1)
                .and_then(|c| c.checked_mul(10))
                .with_context(|| {
                    format!("fixed cost of facility {i} overflows (nearest customer at cost {c_min})")
                })
        })
        .collect::<Result<Vec<u64>>>()?;

    let mut capacities = (0..params.n_facilities)
        .map(|_| capacity_distr.sample(&mut rng))
        .collect::<Vec<u64>>();

    let (demands, total_demand) = sample_demands(&demand_distr, params.n_customers, &mut rng)?;

    let ratio = ratio_distr.sample(&mut rng);
    scale_capacities(&mut capacities, total_demand, ratio)?;

    Ok(Instance::new(
        assignment_costs,
        fixed_costs,
        demands,
        capacities,
        Some(ratio),
    ))
}
