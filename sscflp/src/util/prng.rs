use rand::{RngCore, SeedableRng};
use rand_mt::Mt64;

/// 64-bit Mersenne Twister (Matsumoto & Nishimura, 2000).
///
/// Seeding through [`SeedableRng::seed_from_u64`] follows the reference initialization,
/// so the produced stream is identical to that of any conforming `mt19937_64` seeded with the same value.
#[derive(Clone, Debug)]
pub struct MtRng(Mt64);

impl MtRng {
    pub fn new(seed: u64) -> Self {
        Self(Mt64::new(seed))
    }
}

impl RngCore for MtRng {
    fn next_u32(&mut self) -> u32 {
        (self.0.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for MtRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
