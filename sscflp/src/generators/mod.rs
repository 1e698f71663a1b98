/// Euclidean box method of Stidsen, Andersen & Dammann
pub mod geometric;

/// Conversion to the Uncapacitated Facility Location Problem
pub mod uflp;

/// Unit square method of Cornuejols et al.
pub mod unit_square;

use anyhow::{Context, Result, ensure};
use log::{debug, info};
use ndarray::Array2;
use rand::distr::Distribution;
use rand::{Rng, SeedableRng};

use crate::entities::{Instance, Point};
use crate::util::MtRng;

#[doc(inline)]
pub use geometric::GeometricParams;
#[doc(inline)]
pub use unit_square::UnitSquareParams;

/// A method to generate [`Instance`]s from a seeded pseudo-random stream.
pub trait GenerationMethod {
    /// Short name of the method, used in logging
    const NAME: &'static str;

    /// Seed from which the pseudo-random stream is initialized
    fn seed(&self) -> u64;

    /// Generates a new instance, consuming the given pseudo-random stream.
    fn generate_with_rng(&self, rng: impl Rng) -> Result<Instance>;

    /// Generates a new instance from a fresh [`MtRng`] seeded with [`GenerationMethod::seed`].
    fn generate(&self) -> Result<Instance> {
        self.generate_with_rng(MtRng::seed_from_u64(self.seed()))
    }
}

/// Scaled Euclidean distance between two points, used as assignment cost.
/// Computed as `round(10 * dist(p1, p2))`, with halves rounded up.
pub fn euclidean_distance(p1: Point, p2: Point) -> u64 {
    (10.0 * p1.distance(&p2) + 0.5) as u64
}

/// Matrix of [`euclidean_distance`]s, with a row for every facility and a column for every customer.
pub fn assignment_cost_matrix(facilities: &[Point], customers: &[Point]) -> Array2<u64> {
    Array2::from_shape_fn((facilities.len(), customers.len()), |(i, j)| {
        euclidean_distance(facilities[i], customers[j])
    })
}

/// Rescales the capacities such that `sum(capacities) / total_demand` approximates `ratio`.
/// Every capacity is multiplied by the same factor and rounded (halves up).
///
/// Returns the applied scaling factor.
pub fn scale_capacities(capacities: &mut [u64], total_demand: u64, ratio: f64) -> Result<f64> {
    let total_capacity = capacities.iter().map(|&s| s as f64).sum::<f64>();
    let scale = ratio * (total_demand as f64 / total_capacity);
    ensure!(
        scale.is_finite(),
        "cannot scale a total capacity of {total_capacity} to ratio {ratio}"
    );
    capacities
        .iter_mut()
        .for_each(|s| *s = (scale * *s as f64 + 0.5) as u64);
    debug!("[GEN] scaled capacities by {scale:.6} to reach ratio {ratio:.6}");
    Ok(scale)
}

/// Samples `n` points, drawing the x and then the y coordinate of each point from `distr`.
pub(crate) fn sample_points(
    distr: &impl Distribution<f64>,
    n: usize,
    rng: &mut impl Rng,
) -> Vec<Point> {
    (0..n)
        .map(|_| {
            let x = distr.sample(rng);
            let y = distr.sample(rng);
            Point(x, y)
        })
        .collect()
}

/// Draws `m` demands from `distr` and returns them together with their sum.
pub(crate) fn sample_demands(
    distr: &impl Distribution<u64>,
    m: usize,
    rng: &mut impl Rng,
) -> Result<(Vec<u64>, u64)> {
    let mut total_demand = 0u64;
    let mut demands = Vec::with_capacity(m);
    for j in 0..m {
        let d = distr.sample(rng);
        total_demand = total_demand
            .checked_add(d)
            .with_context(|| format!("total demand overflows at customer {j}"))?;
        demands.push(d);
    }
    Ok((demands, total_demand))
}

/// Holds the instance currently being built.
///
/// Every generation call replaces the held instance with a newly generated one.
/// A failing call leaves the previously held instance untouched.
#[derive(Debug, Clone, Default)]
pub struct InstanceGenerator {
    instance: Instance,
}

impl InstanceGenerator {
    pub fn new() -> Self {
        Self {
            instance: Instance::empty(),
        }
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Generates a new instance with `method` and holds on to it.
    pub fn generate<M: GenerationMethod>(&mut self, method: &M) -> Result<&Instance> {
        let instance = method.generate()?;
        info!(
            "[GEN] generated {} instance with {} facilities and {} customers (seed: {})",
            M::NAME,
            instance.n_facilities,
            instance.n_customers,
            method.seed()
        );
        if let Some(ratio) = instance.capacity_ratio {
            debug!(
                "[GEN] target capacity ratio {ratio:.4}, realized {:.4}",
                instance.realized_capacity_ratio().unwrap_or(f64::NAN)
            );
        }
        self.instance = instance;
        Ok(&self.instance)
    }

    pub fn generate_geometric(&mut self, params: &GeometricParams) -> Result<&Instance> {
        self.generate(params)
    }

    pub fn generate_unit_square(&mut self, params: &UnitSquareParams) -> Result<&Instance> {
        self.generate(params)
    }

    /// Replaces the held instance by its uncapacitated counterpart, see [`uflp::convert`].
    pub fn convert_to_uncapacitated(&mut self) -> Result<&Instance> {
        self.instance = uflp::convert(&self.instance)?;
        Ok(&self.instance)
    }

    /// Clears the held instance
    pub fn reset(&mut self) {
        self.instance = Instance::empty();
    }
}
