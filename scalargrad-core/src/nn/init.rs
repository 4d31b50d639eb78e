//! Sources of initial parameter values.
//!
//! Initialization is an injected collaborator: layers ask a [`ParamInit`]
//! for each weight and bias instead of reaching for global randomness, so a
//! fixed seed (or a fixed list of values) reproduces a network exactly.

use crate::error::ScalarGradError;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Normal;

/// Produces initial scalars for parameters.
pub trait ParamInit {
    /// Returns the next initial value for a parameter of a unit with
    /// `fan_in` inputs.
    fn sample(&mut self, fan_in: usize) -> Result<f64, ScalarGradError>;
}

impl<T: ParamInit + ?Sized> ParamInit for &mut T {
    fn sample(&mut self, fan_in: usize) -> Result<f64, ScalarGradError> {
        (**self).sample(fan_in)
    }
}

/// Seeded uniform initialization, `[-1, 1)` by default.
#[derive(Debug, Clone)]
pub struct UniformInit {
    rng: StdRng,
    dist: Uniform<f64>,
}

impl UniformInit {
    pub fn new(seed: u64) -> Self {
        UniformInit {
            rng: StdRng::seed_from_u64(seed),
            dist: Uniform::new(-1.0, 1.0),
        }
    }

    /// Uniform initialization over `[low, high)`.
    ///
    /// # Errors
    /// `InvalidConfig` unless both bounds are finite and `low < high`.
    pub fn with_range(seed: u64, low: f64, high: f64) -> Result<Self, ScalarGradError> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "uniform init range [{}, {}) is empty or not finite",
                low, high
            )));
        }
        Ok(UniformInit {
            rng: StdRng::seed_from_u64(seed),
            dist: Uniform::new(low, high),
        })
    }
}

impl ParamInit for UniformInit {
    fn sample(&mut self, _fan_in: usize) -> Result<f64, ScalarGradError> {
        Ok(self.dist.sample(&mut self.rng))
    }
}

/// Seeded normal initialization with standard deviation `sqrt(gain / fan_in)`.
///
/// A gain of 2 is the usual choice in front of rectifying units, 1 in front
/// of tanh or linear outputs.
#[derive(Debug, Clone)]
pub struct ScaledNormalInit {
    rng: StdRng,
    gain: f64,
}

impl ScaledNormalInit {
    /// # Errors
    /// `InvalidConfig` unless `gain` is finite and positive.
    pub fn new(seed: u64, gain: f64) -> Result<Self, ScalarGradError> {
        if !(gain.is_finite() && gain > 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "normal init gain must be finite and > 0, got {}",
                gain
            )));
        }
        Ok(ScaledNormalInit {
            rng: StdRng::seed_from_u64(seed),
            gain,
        })
    }
}

impl ParamInit for ScaledNormalInit {
    fn sample(&mut self, fan_in: usize) -> Result<f64, ScalarGradError> {
        if fan_in == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "normal init needs a fan-in of at least 1".to_string(),
            ));
        }
        let std_dev = (self.gain / fan_in as f64).sqrt();
        let normal = Normal::new(0.0, std_dev)
            .map_err(|e| ScalarGradError::InvalidConfig(format!("normal init: {}", e)))?;
        Ok(normal.sample(&mut self.rng))
    }
}

/// Every parameter starts at the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantInit(pub f64);

impl ParamInit for ConstantInit {
    fn sample(&mut self, _fan_in: usize) -> Result<f64, ScalarGradError> {
        Ok(self.0)
    }
}

/// Replays a fixed list of values, in order.
///
/// Layers draw a neuron's weights first, then its bias, neuron by neuron,
/// layer by layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceInit {
    values: Vec<f64>,
    next: usize,
}

impl SequenceInit {
    pub fn new(values: Vec<f64>) -> Self {
        SequenceInit { values, next: 0 }
    }

    /// Number of values not yet handed out.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.next
    }
}

impl ParamInit for SequenceInit {
    fn sample(&mut self, _fan_in: usize) -> Result<f64, ScalarGradError> {
        let value = self
            .values
            .get(self.next)
            .copied()
            .ok_or(ScalarGradError::InitExhausted {
                provided: self.values.len(),
            })?;
        self.next += 1;
        Ok(value)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
