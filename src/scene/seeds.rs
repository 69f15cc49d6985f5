use rand::SeedableRng as _;
use rand::rngs::StdRng;

use crate::foundation::math::Fnv1a64;

/// Per-event seeds, derived from a stable hash of the event id and a base seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventSeeds {
    /// Background grain noise seed.
    pub grain: i64,
    /// Ember spark noise seed.
    pub embers: i64,
    /// Dust speck noise seed.
    pub dust: i64,
    /// Seed of the shape placement RNG.
    pub shapes: u64,
}

impl EventSeeds {
    /// Derive seeds for `event_id`. Identical inputs always give identical seeds.
    pub fn derive(event_id: &str, base_seed: u64) -> Self {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(event_id.as_bytes());
        h.write_bytes(&base_seed.to_le_bytes());
        let h = h.finish();
        Self {
            grain: (h % 2000) as i64 + 17,
            embers: 711 + (h % 400) as i64,
            dust: 433 + (h % 170) as i64,
            shapes: h,
        }
    }

    /// Fresh shape RNG for one layer; `stream` separates layers of the same event.
    pub fn rng(&self, stream: u64) -> StdRng {
        StdRng::seed_from_u64(self.shapes ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/seeds.rs"]
mod tests;
