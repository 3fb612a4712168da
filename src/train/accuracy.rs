use crate::data::record::Dataset;
use crate::error::NetworkError;
use crate::network::network::Network;

/// Fraction of records whose predicted class matches the index of their
/// largest target. Returns `0.0` for an empty dataset.
///
/// Evaluation overwrites unit outputs, hence `&mut`; weights are untouched.
pub fn accuracy(network: &mut Network, dataset: &Dataset) -> Result<f64, NetworkError> {
    if dataset.is_empty() {
        return Ok(0.0);
    }
    let mut correct = 0usize;
    for record in dataset {
        if network.evaluate(record)? == record.target_class() {
            correct += 1;
        }
    }
    Ok(correct as f64 / dataset.len() as f64)
}
