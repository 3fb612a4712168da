use serde::{Serialize, Deserialize};

use crate::error::DatasetError;

/// One labeled data point: an attribute vector fed to the input layer and a
/// target vector with one scalar per output unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub attributes: Vec<f64>,
    pub targets: Vec<f64>,
}

impl Record {
    pub fn new(attributes: Vec<f64>, targets: Vec<f64>) -> Record {
        Record { attributes, targets }
    }

    /// Index of the largest target. Ties go to the earliest index, the same
    /// rule `Network::evaluate` uses for its prediction.
    pub fn target_class(&self) -> usize {
        argmax(&self.targets)
    }
}

/// An ordered, fixed collection of records that agree on attribute and
/// target lengths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Builds a dataset, rejecting any record whose attribute or target
    /// length differs from the first record's.
    pub fn new(records: Vec<Record>) -> Result<Dataset, DatasetError> {
        if let Some(first) = records.first() {
            let n_attrs = first.attributes.len();
            let n_targets = first.targets.len();
            for (index, record) in records.iter().enumerate().skip(1) {
                if record.attributes.len() != n_attrs {
                    return Err(DatasetError::InconsistentRecord {
                        index,
                        field: "attributes",
                        expected: n_attrs,
                        actual: record.attributes.len(),
                    });
                }
                if record.targets.len() != n_targets {
                    return Err(DatasetError::InconsistentRecord {
                        index,
                        field: "targets",
                        expected: n_targets,
                        actual: record.targets.len(),
                    });
                }
            }
        }
        Ok(Dataset { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    /// Attribute length shared by every record, or `None` when empty.
    pub fn attribute_count(&self) -> Option<usize> {
        self.first().map(|r| r.attributes.len())
    }

    /// Target length shared by every record, or `None` when empty.
    pub fn target_count(&self) -> Option<usize> {
        self.first().map(|r| r.targets.len())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Earliest index of the maximum value; a later value must be strictly
/// greater to win. NaN never wins. Returns 0 for an empty slice.
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] || (values[best].is_nan() && !v.is_nan()) {
            best = i;
        }
    }
    best
}
