use serde::{Serialize, Deserialize};

use crate::error::TrainError;

/// Configuration for a `train_network` run.
///
/// # Fields
/// - `learning_rate`: step size applied to every weight update; finite, > 0
/// - `epochs`: full passes over the dataset; at least 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig { learning_rate: 0.1, epochs: 100 }
    }
}

impl TrainConfig {
    pub fn new(learning_rate: f64, epochs: usize) -> Self {
        TrainConfig { learning_rate, epochs }
    }

    pub fn validate(&self) -> Result<(), TrainError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(TrainError::InvalidConfig(format!(
                "learning rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(TrainError::InvalidConfig("epochs must be at least 1".into()));
        }
        Ok(())
    }
}
