use rand::Rng;
use rand::distr::Distribution;

const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Largest `f64` strictly below 1.0
const ONE_BELOW: f64 = 1.0 - f64::EPSILON / 2.0;

/// Draws a real number in [0, 1) from a single 64-bit output of `rng`.
pub fn canonical<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u = rng.next_u64() as f64 / TWO_POW_64;
    // rounding of the conversion can yield exactly 1.0
    if u >= 1.0 { ONE_BELOW } else { u }
}

/// Uniform distribution over the real interval [low, high).
///
/// Unlike [`rand::distr::Uniform`], every sample consumes exactly one 64-bit draw and is computed as
/// `canonical * (high - low) + low`. Fed with an [`MtRng`](crate::util::MtRng) this reproduces the
/// samples of the reference `mt19937_64` based generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalUniform {
    low: f64,
    high: f64,
}

impl CanonicalUniform {
    pub fn new(low: f64, high: f64) -> Self {
        debug_assert!(low <= high, "invalid interval: [{low}, {high})");
        Self { low, high }
    }
}

impl Distribution<f64> for CanonicalUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        canonical(rng) * (self.high - self.low) + self.low
    }
}

/// Uniform distribution over the integers in the closed interval [low, high].
///
/// Uses Lemire's nearly divisionless method: a 64-bit draw is multiplied by the size of the interval
/// into a 128-bit product whose upper half is the sample. Draws are rejected only to remove bias.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalUniform {
    low: u64,
    /// Number of integers in the interval, 0 encodes the full `u64` range
    range: u64,
}

impl IntervalUniform {
    pub fn new_inclusive(low: u64, high: u64) -> Self {
        debug_assert!(low <= high, "invalid interval: [{low}, {high}]");
        Self {
            low,
            range: high.wrapping_sub(low).wrapping_add(1),
        }
    }
}

impl Distribution<u64> for IntervalUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let range = self.range;
        if range == 0 {
            return rng.next_u64();
        }
        let mut product = rng.next_u64() as u128 * range as u128;
        let mut low_bits = product as u64;
        if low_bits < range {
            let threshold = range.wrapping_neg() % range;
            while low_bits < threshold {
                product = rng.next_u64() as u128 * range as u128;
                low_bits = product as u64;
            }
        }
        self.low + (product >> 64) as u64
    }
}
