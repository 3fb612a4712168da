use thiserror::Error;

/// Which of the two caller-supplied weight matrices a shape error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightMatrix {
    /// `hidden_weights[h][i]`: hidden units × (inputs + bias).
    Hidden,
    /// `output_weights[o][h]`: output units × (hidden units + bias).
    Output,
}

impl std::fmt::Display for WeightMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightMatrix::Hidden => f.write_str("hidden"),
            WeightMatrix::Output => f.write_str("output"),
        }
    }
}

/// Errors raised while building or evaluating a `Network`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("cannot size a network from an empty dataset")]
    EmptyDataset,

    #[error("records have no targets, so the network would have no output units")]
    NoOutputs,

    #[error("{matrix} weight matrix has {actual} rows, expected {expected}")]
    WeightRows {
        matrix: WeightMatrix,
        expected: usize,
        actual: usize,
    },

    #[error("row {row} of the {matrix} weight matrix has {actual} columns, expected {expected}")]
    WeightColumns {
        matrix: WeightMatrix,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("record has {actual} attributes, network expects {expected}")]
    AttributeCount { expected: usize, actual: usize },
}

/// Errors raised while assembling or loading a `Dataset`.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("dataset contains no records")]
    Empty,

    #[error("record {index} has {actual} {field}, first record has {expected}")]
    InconsistentRecord {
        index: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by `train_network`. All of them are detected before the
/// first weight changes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainError {
    #[error("invalid training configuration: {0}")]
    InvalidConfig(String),

    #[error("record {record} has {actual} targets, network has {expected} output units")]
    TargetCount { record: usize, expected: usize, actual: usize },

    #[error(transparent)]
    Network(#[from] NetworkError),
}
