//! Seeded integer hash noise.
//!
//! The mix is evaluated in `i128` so intermediate products never wrap: for any `i64` inputs the
//! sum stays below `2^96` and the second multiply below `2^127`. Shifts are arithmetic, which
//! keeps negative coordinates consistent with floor semantics.

const X_MUL: i128 = 374_761_393;
const Y_MUL: i128 = 668_265_263;
const SEED_MUL: i128 = 2_147_483_647;
const MIX_MUL: i128 = 1_274_126_177;
const MASK: i128 = 0xFFFF_FFFF;

/// Low 32 bits of the mixed hash for `(x, y, seed)`.
pub fn hash_bits(x: i64, y: i64, seed: i64) -> u32 {
    let mut n = i128::from(x) * X_MUL + i128::from(y) * Y_MUL + i128::from(seed) * SEED_MUL;
    n = (n ^ (n >> 13)) * MIX_MUL;
    n ^= n >> 16;
    (n & MASK) as u32
}

/// Deterministic pseudo-random value in `[0, 1)` for integer coordinates and a seed.
///
/// Pure: identical inputs give identical outputs on every call and from any thread.
pub fn hash_noise(x: i64, y: i64, seed: i64) -> f64 {
    let bits = hash_bits(x, y, seed);
    if bits == u32::MAX {
        // bits / (2^32 - 1) would be exactly 1.0 here.
        return 1.0f64.next_down();
    }
    f64::from(bits) / f64::from(u32::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/noise.rs"]
mod tests;
