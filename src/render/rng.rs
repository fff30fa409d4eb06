//! Deterministic per-slug randomness for the sketch style.
//!
//! Jitter must be reproducible so that re-running the batch produces
//! byte-identical PNGs. Each slug seeds its own generator from a SHA-256
//! prefix of the slug string; no global or time-based randomness exists
//! anywhere in the render path.

use sha2::{Digest, Sha256};

/// SplitMix64 stream seeded from a slug.
///
/// Statistical quality far exceeds what decorative wobble needs; the
/// property that matters is that the stream is a pure function of the
/// slug.
#[derive(Debug, Clone)]
pub struct SlugRng {
    state: u64,
}

impl SlugRng {
    pub fn for_slug(slug: &str) -> SlugRng {
        let digest = Sha256::digest(slug.as_bytes());
        let mut seed = [0u8; 8];
        seed.copy_from_slice(&digest[..8]);
        SlugRng {
            state: u64::from_le_bytes(seed),
        }
    }

    #[cfg(test)]
    pub fn from_seed(seed: u64) -> SlugRng {
        SlugRng { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)` with 24 bits of precision.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in `[lo, hi)`.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    /// Symmetric jitter in `[-scale, scale)`, the shape rough strokes use.
    pub fn offset(&mut self, scale: f32) -> f32 {
        self.range(-scale, scale)
    }
}
