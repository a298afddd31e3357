//! Fractal combinators layering [`Simplex`] noise over several octaves.

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::{NoiseError, Simplex};

/// Fractal Brownian motion: the signed sum of `octaves` layers of noise.
///
/// Each layer samples at `frequency` with weight `amplitude` (starting at 1),
/// after which the frequency is multiplied by `lacunarity` and the amplitude
/// by `gain`. Zero octaves yield `0.0`.
pub fn fbm(
    noise: &Simplex,
    x: f64,
    y: f64,
    frequency: f64,
    lacunarity: f64,
    gain: f64,
    octaves: u32,
) -> f64 {
    let mut sum = 0.0;
    let mut frequency = frequency;
    let mut amplitude = 1.0;
    for _ in 0..octaves {
        sum += noise.noise2(x * frequency, y * frequency) * amplitude;
        frequency *= lacunarity;
        amplitude *= gain;
    }
    sum
}

/// Same accumulation as [`fbm`] but every layer contributes its absolute
/// value, so the result is never negative.
pub fn turbulence(
    noise: &Simplex,
    x: f64,
    y: f64,
    frequency: f64,
    lacunarity: f64,
    gain: f64,
    octaves: u32,
) -> f64 {
    let mut sum = 0.0;
    let mut frequency = frequency;
    let mut amplitude = 1.0;
    for _ in 0..octaves {
        sum += (noise.noise2(x * frequency, y * frequency) * amplitude).abs();
        frequency *= lacunarity;
        amplitude *= gain;
    }
    sum
}

/// Parameters shared by both combinators.
///
/// Only `octaves` is validated. Frequency, lacunarity and gain accept any
/// value, including ones that flatten the field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct FractalParams {
    pub frequency: f64,
    pub lacunarity: f64,
    pub gain: f64,
    pub octaves: u32,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            frequency: 0.01,
            lacunarity: 3.0,
            gain: 0.2,
            octaves: 3,
        }
    }
}

/// A tunable member of [`FractalParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Frequency,
    Lacunarity,
    Gain,
    Octaves,
}

impl Param {
    /// Amount a single [`FractalParams::nudge`] moves this parameter.
    pub fn step(&self) -> f64 {
        match self {
            Param::Frequency => 0.001,
            Param::Lacunarity => 0.1,
            Param::Gain => 0.1,
            Param::Octaves => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn sign(&self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }
}

impl FractalParams {
    pub fn new(
        frequency: f64,
        lacunarity: f64,
        gain: f64,
        octaves: u32,
    ) -> Result<Self, NoiseError> {
        if octaves == 0 {
            return Err(NoiseError::InvalidOctaves);
        }
        Ok(Self {
            frequency,
            lacunarity,
            gain,
            octaves,
        })
    }

    /// Move one parameter by its fixed step. Octaves never drop below 1.
    pub fn nudge(&mut self, param: Param, direction: Direction) {
        let delta = param.step() * direction.sign();
        match param {
            Param::Frequency => self.frequency += delta,
            Param::Lacunarity => self.lacunarity += delta,
            Param::Gain => self.gain += delta,
            Param::Octaves => {
                self.octaves = match direction {
                    Direction::Up => self.octaves.saturating_add(1),
                    Direction::Down => self.octaves.saturating_sub(1).max(1),
                }
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Which combinator a field is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Fractal {
    #[default]
    Fbm,
    Turbulence,
}

impl Fractal {
    pub fn sample(&self, noise: &Simplex, x: f64, y: f64, params: &FractalParams) -> f64 {
        let FractalParams {
            frequency,
            lacunarity,
            gain,
            octaves,
        } = *params;
        match self {
            Fractal::Fbm => fbm(noise, x, y, frequency, lacunarity, gain, octaves),
            Fractal::Turbulence => turbulence(noise, x, y, frequency, lacunarity, gain, octaves),
        }
    }
}
