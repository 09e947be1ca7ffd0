//! Seeded random streams.
//!
//! Every guest draws relocation decisions from its own [`GuestRng`], keyed by
//! the run seed and the guest's id, so adding or removing a guest never
//! changes what another guest does.  Building-level draws (arrival gaps,
//! target floors, car assignment) use [`SimRng`] streams split off one master
//! stream with [`SimRng::child`].

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::GuestId;

/// Golden-ratio fraction; spreads consecutive ids over the seed space.
const SEED_SPREAD: u64 = 0x9e37_79b9_7f4a_7c15;

fn spread(seed: u64, key: u64) -> u64 {
    seed ^ key.wrapping_mul(SEED_SPREAD)
}

// ── GuestRng ──────────────────────────────────────────────────────────────────

/// One guest's private stream.
pub struct GuestRng(SmallRng);

impl GuestRng {
    pub fn new(run_seed: u64, guest: GuestId) -> Self {
        GuestRng(SmallRng::seed_from_u64(spread(run_seed, guest.0 as u64)))
    }

    /// One Bernoulli trial; `p` outside [0, 1] is clamped.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform pick, `None` when `items` is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// A building-level stream.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off an independent stream.  The same `offset` drawn from the
    /// same master always yields the same child.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let base: u64 = self.0.r#gen();
        SimRng(SmallRng::seed_from_u64(spread(base, offset)))
    }

    /// The underlying generator, for sampling `rand_distr` distributions.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.0)
    }
}
