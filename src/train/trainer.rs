use tracing::{debug, trace};

use crate::data::record::{Dataset, Record};
use crate::error::{NetworkError, TrainError};
use crate::network::network::Network;
use crate::network::unit::Unit;
use crate::train::train_config::TrainConfig;

/// Trains `network` in place for exactly `config.epochs` passes over
/// `dataset`.
///
/// Records are visited in dataset order and each one is fully applied
/// (forward pass, output and hidden deltas, hidden then output weight
/// updates) before the next begins. There is no shuffling, batching or early
/// stopping.
///
/// The error signals carry no activation-derivative factor: an output unit's
/// delta is `output - target` and a hidden unit's delta is the weighted sum
/// of the output deltas, except that a unit whose output is exactly `0.0`
/// gets a delta of `0.0`.
///
/// # Errors
/// The configuration and every record's shape are checked up front, so an
/// error means no weight has changed.
pub fn train_network(
    network: &mut Network,
    dataset: &Dataset,
    config: &TrainConfig,
) -> Result<(), TrainError> {
    config.validate()?;
    check_records(network, dataset)?;

    for epoch in 1..=config.epochs {
        for (index, record) in dataset.iter().enumerate() {
            train_record(network, record, config.learning_rate)?;
            trace!(epoch, record = index, "record applied");
        }
        debug!(epoch, total_epochs = config.epochs, "epoch complete");
    }

    Ok(())
}

fn check_records(network: &Network, dataset: &Dataset) -> Result<(), TrainError> {
    for (index, record) in dataset.iter().enumerate() {
        if record.attributes.len() != network.input_count() {
            return Err(NetworkError::AttributeCount {
                expected: network.input_count(),
                actual: record.attributes.len(),
            }
            .into());
        }
        if record.targets.len() != network.output_count() {
            return Err(TrainError::TargetCount {
                record: index,
                expected: network.output_count(),
                actual: record.targets.len(),
            });
        }
    }
    Ok(())
}

/// One online update for a single record.
fn train_record(network: &mut Network, record: &Record, learning_rate: f64) -> Result<(), NetworkError> {
    network.evaluate(record)?;

    let delta_out = output_deltas(&network.output_layer, &record.targets);
    // Reads the output weights before `update_layer` touches them.
    let delta_hid = hidden_deltas(&network.hidden_layer, &network.output_layer, &delta_out);

    update_layer(&mut network.hidden_layer, &network.input_layer, &delta_hid, learning_rate);
    update_layer(&mut network.output_layer, &network.hidden_layer, &delta_out, learning_rate);

    Ok(())
}

fn output_deltas(output_layer: &[Unit], targets: &[f64]) -> Vec<f64> {
    output_layer.iter()
        .zip(targets)
        .map(|(unit, &actual)| if unit.output == 0.0 { 0.0 } else { unit.output - actual })
        .collect()
}

/// One delta per hidden-layer unit, bias included. The bias delta is never
/// applied because the bias owns no incoming edges.
fn hidden_deltas(hidden_layer: &[Unit], output_layer: &[Unit], delta_out: &[f64]) -> Vec<f64> {
    hidden_layer.iter()
        .enumerate()
        .map(|(h, unit)| {
            let mut sum = 0.0;
            for (c, output) in output_layer.iter().enumerate() {
                sum += output.incoming[h].weight() * delta_out[c];
            }
            if unit.output == 0.0 { 0.0 } else { sum }
        })
        .collect()
}

/// `weight -= learning_rate * delta * source.output` for every incoming edge
/// of every unit in `layer`. Units without edges are left alone.
fn update_layer(layer: &mut [Unit], sources: &[Unit], deltas: &[f64], learning_rate: f64) {
    for (unit, &delta) in layer.iter_mut().zip(deltas) {
        for edge in unit.incoming.iter_mut() {
            let source_output = sources[edge.source().index].output;
            *edge = edge.with_weight(edge.weight() - learning_rate * delta * source_output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;

    fn one_record(attributes: Vec<f64>, targets: Vec<f64>) -> Dataset {
        Dataset::new(vec![Record::new(attributes, targets)]).unwrap()
    }

    #[test]
    fn zero_output_unit_keeps_its_weights() {
        // ReLU drives output 1 and hidden unit 1 to exactly 0.0.
        let ds = one_record(vec![2.0, 1.0], vec![1.0, 0.0]);
        let mut net = Network::with_activation(
            &ds,
            2,
            &[vec![0.5, -0.25, 0.0], vec![-1.0, 0.0, 0.5]],
            &[vec![0.25, 0.5, 0.0], vec![-0.5, 0.25, 0.0]],
            ActivationFunction::ReLU,
        )
        .unwrap();

        train_network(&mut net, &ds, &TrainConfig::new(0.5, 1)).unwrap();

        assert_eq!(net.outputs(), [0.1875, 0.0]);
        assert_eq!(
            net.output_weights(),
            vec![vec![0.5546875, 0.5, 0.40625], vec![-0.5, 0.25, 0.0]]
        );
        assert_eq!(
            net.hidden_weights(),
            vec![vec![0.703125, -0.1484375, 0.1015625], vec![-1.0, 0.0, 0.5]]
        );
    }

    #[test]
    fn zero_output_delta_ignores_the_target() {
        let ds = one_record(vec![1.0], vec![0.0, 1.0]);
        let mut net = Network::with_activation(&ds, 0, &[], &[vec![0.0], vec![0.0]], ActivationFunction::Identity)
            .unwrap();
        net.evaluate(&ds.records()[0]).unwrap();
        assert_eq!(output_deltas(&net.output_layer, &[0.0, 1.0]), [0.0, 0.0]);
    }

    #[test]
    fn output_matching_its_target_changes_nothing() {
        let ds = one_record(vec![1.0], vec![0.75]);
        let mut net = Network::with_activation(
            &ds,
            1,
            &[vec![0.5, 0.25]],
            &[vec![1.0, 0.0]],
            ActivationFunction::Identity,
        )
        .unwrap();

        train_network(&mut net, &ds, &TrainConfig::new(1.0, 3)).unwrap();

        assert_eq!(net.hidden_weights(), vec![vec![0.5, 0.25]]);
        assert_eq!(net.output_weights(), vec![vec![1.0, 0.0]]);
    }

    #[test]
    fn hidden_deltas_use_pre_update_output_weights() {
        let ds = one_record(vec![1.0], vec![0.0]);
        let mut net = Network::with_activation(
            &ds,
            1,
            &[vec![1.0, 0.0]],
            &[vec![2.0, 0.0]],
            ActivationFunction::Identity,
        )
        .unwrap();

        train_network(&mut net, &ds, &TrainConfig::new(0.25, 1)).unwrap();

        // hidden = 1, output = 2, delta_out = 2, delta_hid = 2 * 2 = 4
        // (with the updated output weight 1.5 it would have been 3).
        assert_eq!(net.hidden_weights(), vec![vec![0.0, -1.0]]);
        assert_eq!(net.output_weights(), vec![vec![1.5, -0.5]]);
    }

    #[test]
    fn invalid_config_is_rejected_before_training() {
        let ds = one_record(vec![1.0], vec![1.0]);
        let mut net = Network::new(&ds, 1, &[vec![0.5, 0.5]], &[vec![0.5, 0.5]]).unwrap();
        let err = train_network(&mut net, &ds, &TrainConfig::new(0.0, 1)).unwrap_err();
        assert!(matches!(err, TrainError::InvalidConfig(_)));
        assert_eq!(net.hidden_weights(), vec![vec![0.5, 0.5]]);
    }

    #[test]
    fn mismatched_dataset_is_rejected_before_training() {
        let sizing = one_record(vec![1.0], vec![1.0]);
        let mut net = Network::new(&sizing, 1, &[vec![0.5, 0.5]], &[vec![0.5, 0.5]]).unwrap();

        let wide = one_record(vec![1.0, 2.0], vec![1.0]);
        assert_eq!(
            train_network(&mut net, &wide, &TrainConfig::default()).unwrap_err(),
            TrainError::Network(NetworkError::AttributeCount { expected: 1, actual: 2 })
        );

        let two_targets = one_record(vec![1.0], vec![1.0, 0.0]);
        assert_eq!(
            train_network(&mut net, &two_targets, &TrainConfig::default()).unwrap_err(),
            TrainError::TargetCount { record: 0, expected: 1, actual: 2 }
        );
        assert_eq!(net.output_weights(), vec![vec![0.5, 0.5]]);
    }
}
