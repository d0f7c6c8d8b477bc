//! Deterministic pseudo-random source
//!
//! Benchmarks that consume randomness must see identical sequences on every
//! run, otherwise timing results are not comparable across runs. The runner
//! reseeds this generator with a fixed seed before each suite run.

/// Reseedable deterministic generator
///
/// Six rounds of 32-bit add/xor/shift mixing over a single u32 state. The
/// formula is preserved bit-for-bit from the original harness so numeric
/// sequences reproduce exactly across reimplementations.
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    seed: u32,
}

impl DeterministicRng {
    /// The fixed seed every suite run starts from
    pub const DEFAULT_SEED: u32 = 49_734_321;

    /// Create a generator positioned at the fixed seed
    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
        }
    }

    /// Restore the fixed seed, replaying the sequence from the start
    pub fn reseed(&mut self) {
        self.seed = Self::DEFAULT_SEED;
    }

    /// Next value in [0, 1)
    ///
    /// All intermediate arithmetic wraps at 32 bits; `>>` here is the
    /// unsigned shift. Output keeps the low 28 bits of the state.
    pub fn next_f64(&mut self) -> f64 {
        let mut s = self.seed;
        s = s.wrapping_add(0x7ed5_5d16).wrapping_add(s << 12);
        s = (s ^ 0xc761_c23c) ^ (s >> 19);
        s = s.wrapping_add(0x1656_67b1).wrapping_add(s << 5);
        s = s.wrapping_add(0xd3a2_646c) ^ (s << 9);
        s = s.wrapping_add(0xfd70_46c5).wrapping_add(s << 3);
        s = (s ^ 0xb55a_4f09) ^ (s >> 16);
        self.seed = s;
        (s & 0x0fff_ffff) as f64 / 0x1000_0000 as f64
    }

    /// Current internal state (for reproducibility checks)
    pub fn state(&self) -> u32 {
        self.seed
    }
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new()
    }
}
