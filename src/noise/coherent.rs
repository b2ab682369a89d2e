//! Runtime choice between simplex and Perlin noise

use crate::noise::Noise2D;
use ::noise::{NoiseFn, Perlin, Simplex};
use clap::ValueEnum;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Selectable noise algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NoiseKind {
    /// Simplex noise
    Simplex,
    /// Perlin noise
    Perlin,
}

/// Seeded noise generator chosen at runtime
#[derive(Debug, Clone)]
pub enum CoherentNoise {
    /// Simplex noise generator
    Simplex(Simplex),
    /// Perlin noise generator
    Perlin(Perlin),
}

impl CoherentNoise {
    /// Build a seeded generator of the requested kind
    pub fn new(kind: NoiseKind, seed: u64) -> Self {
        let seed = noise_seed(seed);
        match kind {
            NoiseKind::Simplex => Self::Simplex(Simplex::new(seed)),
            NoiseKind::Perlin => Self::Perlin(Perlin::new(seed)),
        }
    }

    /// Seeded simplex generator
    pub fn simplex(seed: u64) -> Self {
        Self::new(NoiseKind::Simplex, seed)
    }

    /// Seeded Perlin generator
    pub fn perlin(seed: u64) -> Self {
        Self::new(NoiseKind::Perlin, seed)
    }

    /// Algorithm behind this generator
    pub const fn kind(&self) -> NoiseKind {
        match self {
            Self::Simplex(_) => NoiseKind::Simplex,
            Self::Perlin(_) => NoiseKind::Perlin,
        }
    }
}

impl Noise2D for CoherentNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        match self {
            Self::Simplex(noise) => noise.get([x, y]),
            Self::Perlin(noise) => noise.get([x, y]),
        }
    }
}

/// Derive the generator seed from a 64-bit user seed
///
/// Distinct user seeds above `u32::MAX` still give distinct fields with
/// overwhelming probability instead of wrapping onto small seeds.
pub fn noise_seed(seed: u64) -> u32 {
    StdRng::seed_from_u64(seed).random()
}
