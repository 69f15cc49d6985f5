#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// `x * y / 255` with truncating division.
pub(crate) fn mul_div255_floor(x: u16, y: u16) -> u16 {
    ((u32::from(x) * u32::from(y)) / 255) as u16
}

/// Saturate a float channel value into `[0, 255]`, truncating toward zero in range.
pub(crate) fn clamp_channel(v: f64) -> u8 {
    if v.is_nan() || v < 0.0 {
        0
    } else if v > 255.0 {
        255
    } else {
        v as u8
    }
}

/// Saturating `channel + delta`.
pub(crate) fn offset_channel(c: u8, delta: i32) -> u8 {
    (i32::from(c) + delta).clamp(0, 255) as u8
}

/// Coverage for `alpha * factor`, truncated and kept in `[0, 255]`.
pub(crate) fn scale_coverage(alpha: u8, factor: f64) -> u8 {
    clamp_channel(f64::from(alpha) * factor)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
