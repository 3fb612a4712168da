use tracing::debug;

use crate::activation::activation::ActivationFunction;
use crate::data::record::{argmax, Dataset, Record};
use crate::error::{NetworkError, WeightMatrix};
use crate::network::unit::{Edge, SourceLayer, Unit, UnitKind, UnitRef};

/// A fixed input → hidden → output perceptron with a bias unit closing the
/// input and hidden layers.
///
/// Units live in one arena per layer and edges point back into the previous
/// layer by `(layer, index)`. The network is mutated only through
/// `evaluate` (unit outputs) and training (edge weights); callers read
/// results back through the shared accessors.
#[derive(Debug)]
pub struct Network {
    pub(crate) input_layer: Vec<Unit>,
    pub(crate) hidden_layer: Vec<Unit>,
    pub(crate) output_layer: Vec<Unit>,
    activation: ActivationFunction,
}

impl Network {
    /// Builds a sigmoid network sized from the dataset's first record.
    ///
    /// `hidden_weights[h]` holds one weight per input unit followed by the
    /// input bias weight; `output_weights[o]` holds one weight per hidden unit
    /// followed by the hidden bias weight.
    pub fn new(
        dataset: &Dataset,
        hidden_count: usize,
        hidden_weights: &[Vec<f64>],
        output_weights: &[Vec<f64>],
    ) -> Result<Network, NetworkError> {
        Network::with_activation(
            dataset,
            hidden_count,
            hidden_weights,
            output_weights,
            ActivationFunction::default(),
        )
    }

    pub fn with_activation(
        dataset: &Dataset,
        hidden_count: usize,
        hidden_weights: &[Vec<f64>],
        output_weights: &[Vec<f64>],
        activation: ActivationFunction,
    ) -> Result<Network, NetworkError> {
        let first = dataset.first().ok_or(NetworkError::EmptyDataset)?;
        let input_count = first.attributes.len();
        let output_count = first.targets.len();
        if output_count == 0 {
            return Err(NetworkError::NoOutputs);
        }

        check_shape(WeightMatrix::Hidden, hidden_weights, hidden_count, input_count + 1)?;
        check_shape(WeightMatrix::Output, output_weights, output_count, hidden_count + 1)?;

        let mut input_layer: Vec<Unit> = (0..input_count).map(|_| Unit::input()).collect();
        input_layer.push(Unit::bias(UnitKind::BiasToHidden));

        let mut hidden_layer: Vec<Unit> = hidden_weights.iter()
            .map(|row| Unit::computed(UnitKind::Hidden, wire(SourceLayer::Input, row)))
            .collect();
        hidden_layer.push(Unit::bias(UnitKind::BiasToOutput));

        let output_layer: Vec<Unit> = output_weights.iter()
            .map(|row| Unit::computed(UnitKind::Output, wire(SourceLayer::Hidden, row)))
            .collect();

        debug!(
            inputs = input_count,
            hidden = hidden_count,
            outputs = output_count,
            %activation,
            "network wired"
        );

        Ok(Network { input_layer, hidden_layer, output_layer, activation })
    }

    /// Forward pass for one record. Returns the index of the output unit with
    /// the largest output; the earliest unit wins a tie.
    ///
    /// The attribute count is checked before any unit is touched, so a
    /// rejected record leaves every output as it was.
    pub fn evaluate(&mut self, record: &Record) -> Result<usize, NetworkError> {
        self.evaluate_attributes(&record.attributes)
    }

    /// Same as `evaluate`, for an unlabeled attribute vector.
    pub fn evaluate_attributes(&mut self, attributes: &[f64]) -> Result<usize, NetworkError> {
        let expected = self.input_count();
        if attributes.len() != expected {
            return Err(NetworkError::AttributeCount { expected, actual: attributes.len() });
        }

        // Input layer: pass-through; the bias unit stays at 1.0.
        for (unit, &value) in self.input_layer.iter_mut().zip(attributes) {
            unit.output = value;
        }

        // Each layer reads only the layer before it, so the layers are split
        // off and filled one at a time.
        let activation = self.activation;
        forward_layer(&mut self.hidden_layer, &self.input_layer, activation);
        forward_layer(&mut self.output_layer, &self.hidden_layer, activation);

        Ok(argmax(&self.outputs()))
    }

    /// Current output of every output unit.
    pub fn outputs(&self) -> Vec<f64> {
        self.output_layer.iter().map(Unit::output).collect()
    }

    /// Output of the unit an edge points back to, or `None` if `source`
    /// names a unit this network does not have.
    pub fn source_output(&self, source: UnitRef) -> Option<f64> {
        let layer = match source.layer {
            SourceLayer::Input => &self.input_layer,
            SourceLayer::Hidden => &self.hidden_layer,
        };
        layer.get(source.index).map(Unit::output)
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    /// Input units followed by the input bias unit.
    pub fn input_layer(&self) -> &[Unit] {
        &self.input_layer
    }

    /// Hidden units followed by the hidden bias unit.
    pub fn hidden_layer(&self) -> &[Unit] {
        &self.hidden_layer
    }

    pub fn output_layer(&self) -> &[Unit] {
        &self.output_layer
    }

    /// Number of attribute-carrying input units (bias excluded).
    pub fn input_count(&self) -> usize {
        self.input_layer.len() - 1
    }

    /// Number of hidden units (bias excluded).
    pub fn hidden_count(&self) -> usize {
        self.hidden_layer.len() - 1
    }

    pub fn output_count(&self) -> usize {
        self.output_layer.len()
    }

    /// Current input → hidden weights, laid out like the constructor's
    /// `hidden_weights` argument.
    pub fn hidden_weights(&self) -> Vec<Vec<f64>> {
        self.hidden_layer.iter()
            .filter(|u| u.kind().has_incoming())
            .map(Unit::weights)
            .collect()
    }

    /// Current hidden → output weights, laid out like the constructor's
    /// `output_weights` argument.
    pub fn output_weights(&self) -> Vec<Vec<f64>> {
        self.output_layer.iter().map(Unit::weights).collect()
    }
}

/// Recomputes every non-bias unit in `layer` from the outputs of `sources`.
fn forward_layer(layer: &mut [Unit], sources: &[Unit], activation: ActivationFunction) {
    for unit in layer.iter_mut() {
        match unit.kind() {
            UnitKind::Hidden | UnitKind::Output => {
                let mut sum = 0.0;
                for edge in &unit.incoming {
                    sum += edge.weight() * sources[edge.source().index].output;
                }
                unit.output = activation.function(sum);
            }
            UnitKind::BiasToHidden | UnitKind::BiasToOutput => unit.output = 1.0,
            UnitKind::Input => {}
        }
    }
}

/// One edge per weight, pointing at consecutive units of `layer`.
fn wire(layer: SourceLayer, row: &[f64]) -> Vec<Edge> {
    row.iter()
        .enumerate()
        .map(|(index, &weight)| Edge::new(UnitRef::new(layer, index), weight))
        .collect()
}

fn check_shape(
    matrix: WeightMatrix,
    weights: &[Vec<f64>],
    rows: usize,
    cols: usize,
) -> Result<(), NetworkError> {
    if weights.len() != rows {
        return Err(NetworkError::WeightRows { matrix, expected: rows, actual: weights.len() });
    }
    for (row, w) in weights.iter().enumerate() {
        if w.len() != cols {
            return Err(NetworkError::WeightColumns { matrix, row, expected: cols, actual: w.len() });
        }
    }
    Ok(())
}
