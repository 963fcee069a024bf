//! Deterministic random generator
//!
//! Subtractive lagged-Fibonacci generator bit-compatible with the game
//! runtime's `System.Random`, so a seeded `rand` stream replays exactly.
//!
//! Unseeded generators draw their seed from a [`SeedContext`], an explicit
//! holder of the root generator that replaces a process-wide singleton.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// Exclusive upper bound of every draw, `2^31 - 1`
pub const MBIG: i32 = i32::MAX;

const MSEED: i32 = 161_803_398;

/// Slot 0 is never addressed by the cursors
const SLOTS: usize = 56;

const INITIAL_INEXTP: usize = 21;

/// Rejected generator snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("generator snapshot has {0} slots, expected 56")]
    SlotCount(usize),

    #[error("generator cursor {0} is outside 0..56")]
    Cursor(usize),
}

/// Seeded generator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RandomSnapshot")]
pub struct Random {
    seed: i32,
    inext: usize,
    inextp: usize,
    slots: Vec<i32>,
    times_sampled: u64,
}

#[derive(Deserialize)]
struct RandomSnapshot {
    seed: i32,
    inext: usize,
    inextp: usize,
    slots: Vec<i32>,
    times_sampled: u64,
}

impl TryFrom<RandomSnapshot> for Random {
    type Error = SnapshotError;

    fn try_from(snapshot: RandomSnapshot) -> Result<Self, Self::Error> {
        if snapshot.slots.len() != SLOTS {
            return Err(SnapshotError::SlotCount(snapshot.slots.len()));
        }
        for cursor in [snapshot.inext, snapshot.inextp] {
            if cursor >= SLOTS {
                return Err(SnapshotError::Cursor(cursor));
            }
        }
        Ok(Self {
            seed: snapshot.seed,
            inext: snapshot.inext,
            inextp: snapshot.inextp,
            slots: snapshot.slots,
            times_sampled: snapshot.times_sampled,
        })
    }
}

impl Random {
    /// Create a generator from a register value.
    ///
    /// The seed is clamped into the signed 32-bit range and truncated toward
    /// zero; NaN seeds as 0. Construction never fails.
    pub fn new(seed: f64) -> Self {
        Self::from_seed(seed as i32)
    }

    /// Create a generator seeded by the next draw of `context`'s root
    /// generator.
    pub fn from_context(context: &mut SeedContext) -> Self {
        Self::from_seed(context.next_seed())
    }

    /// Create a generator from an exact 32-bit seed
    pub fn from_seed(seed: i32) -> Self {
        let subtraction = if seed == i32::MIN {
            MBIG
        } else {
            seed.wrapping_abs()
        };

        let mut slots = vec![0i32; SLOTS];
        let mut mj = MSEED.wrapping_sub(subtraction);
        slots[SLOTS - 1] = mj;

        let mut mk: i32 = 1;
        let mut ii = 0;
        for _ in 1..SLOTS - 1 {
            ii = (ii + 21) % (SLOTS - 1);
            slots[ii] = mk;
            mk = mj.wrapping_sub(mk);
            if mk < 0 {
                mk = mk.wrapping_add(MBIG);
            }
            mj = slots[ii];
        }

        for _ in 0..4 {
            for k in 1..SLOTS {
                let neighbour = slots[1 + (k + 30) % (SLOTS - 1)];
                let mut value = slots[k].wrapping_sub(neighbour);
                if value < 0 {
                    value = value.wrapping_add(MBIG);
                }
                slots[k] = value;
            }
        }

        trace!(seed, "seeded random generator");

        Self {
            seed,
            inext: 0,
            inextp: INITIAL_INEXTP,
            slots,
            times_sampled: 0,
        }
    }

    /// The clamped seed this generator was built from
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Number of draws taken so far
    pub fn times_sampled(&self) -> u64 {
        self.times_sampled
    }

    /// Next integer in `[0, 2^31 - 1)`
    pub fn next_int(&mut self) -> i32 {
        self.times_sampled += 1;

        self.inext += 1;
        if self.inext >= SLOTS {
            self.inext = 1;
        }
        self.inextp += 1;
        if self.inextp >= SLOTS {
            self.inextp = 1;
        }

        let mut value = self.slots[self.inext].wrapping_sub(self.slots[self.inextp]);
        if value == MBIG {
            value -= 1;
        }
        if value < 0 {
            value = value.wrapping_add(MBIG);
        }
        self.slots[self.inext] = value;
        value
    }

    /// Next fraction in `[0, 1)`
    pub fn next_fraction(&mut self) -> f64 {
        f64::from(self.next_int()) / f64::from(MBIG)
    }
}

/// Holder of the root generator that seeds unseeded [`Random`] instances.
///
/// The root is created lazily from the thread RNG on first use. Resetting it
/// never affects generators already built from it.
#[derive(Debug, Clone, Default)]
pub struct SeedContext {
    root: Option<Random>,
}

impl SeedContext {
    /// Empty context; the root is created on first use
    pub fn new() -> Self {
        Self::default()
    }

    /// Context whose root generator is seeded with `seed`
    pub fn seeded(seed: f64) -> Self {
        let mut context = Self::new();
        context.reset(Some(seed));
        context
    }

    /// Draw the seed for a new generator from the root
    pub fn next_seed(&mut self) -> i32 {
        let root = self.root.get_or_insert_with(|| {
            let seed = (rand::rng().random::<u32>() >> 1) as i32;
            trace!(seed, "created root generator");
            Random::from_seed(seed)
        });
        root.next_int()
    }

    /// Replace the root generator with one seeded from `seed`, or discard it
    pub fn reset(&mut self, seed: Option<f64>) {
        trace!(?seed, "reset root generator");
        self.root = seed.map(Random::new);
    }

    /// Seed of the current root generator, if one exists
    pub fn root_seed(&self) -> Option<i32> {
        self.root.as_ref().map(Random::seed)
    }
}
