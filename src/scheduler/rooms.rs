//! Room selection for placed meetings.
//!
//! One picker lives for one generation run, so room occupancy and the
//! random stream never leak between runs.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::RoomPolicy;
use crate::models::{BlockId, Weekday};

/// Attaches rooms to meetings according to a [`RoomPolicy`].
#[derive(Debug, Clone)]
pub struct RoomPicker {
    policy: RoomPolicy,
    pool: Vec<String>,
    rng: StdRng,
    /// (pool index, day, block) cells already holding a meeting.
    occupied: HashSet<(usize, Weekday, BlockId)>,
}

impl RoomPicker {
    /// Creates a picker over `pool`.
    pub fn new(policy: RoomPolicy, pool: Vec<String>, seed: u64) -> Self {
        Self {
            policy,
            pool,
            rng: StdRng::seed_from_u64(seed),
            occupied: HashSet::new(),
        }
    }

    /// Picks a room for a meeting at `(day, block)`.
    ///
    /// Returns `None` for an empty pool, for [`RoomPolicy::Omit`], and for
    /// [`RoomPolicy::ConflictFree`] when every room is taken.
    pub fn pick(&mut self, day: Weekday, block: BlockId) -> Option<String> {
        match self.policy {
            RoomPolicy::Omit => None,
            RoomPolicy::Random => self.pool.choose(&mut self.rng).cloned(),
            RoomPolicy::ConflictFree => {
                let idx = (0..self.pool.len())
                    .find(|i| !self.occupied.contains(&(*i, day, block)))?;
                self.occupied.insert((idx, day, block));
                Some(self.pool[idx].clone())
            }
        }
    }
}
