use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

/// Strategy for generating the initial weight matrices handed to
/// `Network::new`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WeightInit {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Xavier (Glorot): N(0, sqrt(1 / fan_in)), where fan_in counts the bias.
    Xavier,
    /// Every weight set to the same value.
    Constant { value: f64 },
}

impl Default for WeightInit {
    fn default() -> Self {
        WeightInit::Uniform { low: -1.0, high: 1.0 }
    }
}

impl WeightInit {
    /// A `rows × cols` matrix; `cols` is the fan-in of each row's unit.
    pub fn matrix<R: Rng>(&self, rows: usize, cols: usize, rng: &mut R) -> Vec<Vec<f64>> {
        (0..rows)
            .map(|_| (0..cols).map(|_| self.sample(cols, rng)).collect())
            .collect()
    }

    /// `(hidden_weights, output_weights)` shaped for a network with the given
    /// layer sizes (bias columns included). The same seed always yields the
    /// same matrices.
    pub fn network_weights(
        &self,
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        seed: u64,
    ) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let hidden = self.matrix(hidden_count, input_count + 1, &mut rng);
        let output = self.matrix(output_count, hidden_count + 1, &mut rng);
        (hidden, output)
    }

    fn sample<R: Rng>(&self, fan_in: usize, rng: &mut R) -> f64 {
        match *self {
            WeightInit::Uniform { low, high } => low + rng.gen::<f64>() * (high - low),
            WeightInit::Xavier => sample_standard_normal(rng) * (1.0 / fan_in.max(1) as f64).sqrt(),
            WeightInit::Constant { value } => value,
        }
    }
}

/// Samples N(0, 1) with the Box-Muller transform.
fn sample_standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // (0, 1] keeps ln() finite.
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = 1.0 - rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
