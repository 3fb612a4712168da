use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::network::init::WeightInit;

/// A serializable description of a network's architecture: everything needed
/// to build one except the dataset (which fixes the input and output sizes)
/// and the weights themselves.
///
/// Fields:
/// - `hidden_count`: hidden units, bias excluded
/// - `activation`: applied at every hidden and output unit
/// - `init`: how the initial weights are drawn
/// - `seed`: RNG seed for `init`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub hidden_count: usize,
    #[serde(default)]
    pub activation: ActivationFunction,
    #[serde(default)]
    pub init: WeightInit,
    #[serde(default)]
    pub seed: u64,
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec {
            hidden_count: 4,
            activation: ActivationFunction::default(),
            init: WeightInit::default(),
            seed: 0,
        }
    }
}

impl NetworkSpec {
    /// Initial `(hidden_weights, output_weights)` for the given layer sizes.
    pub fn initial_weights(&self, input_count: usize, output_count: usize) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        self.init.network_weights(input_count, self.hidden_count, output_count, self.seed)
    }
}
