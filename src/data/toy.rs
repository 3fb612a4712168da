use crate::data::record::{Dataset, Record};

/// The XOR problem: 4 records, 2 attributes, 2 one-hot classes
/// (class 1 when exactly one attribute is set).
pub fn xor() -> Dataset {
    let rows = [
        ([0.0, 0.0], [1.0, 0.0]),
        ([0.0, 1.0], [0.0, 1.0]),
        ([1.0, 0.0], [0.0, 1.0]),
        ([1.0, 1.0], [1.0, 0.0]),
    ];
    let records = rows.iter()
        .map(|(a, t)| Record::new(a.to_vec(), t.to_vec()))
        .collect();
    Dataset::new(records).unwrap_or_default()
}

/// `n` records of 2-D "two blobs" data with one-hot classes.
///
/// Class 0 clusters around (0.3, 0.3), class 1 around (0.7, 0.7). The spread
/// comes from sin/cos of the record index, so the data is identical on every
/// call.
pub fn blobs(n: usize) -> Dataset {
    let centers = [(0.3f64, 0.3f64), (0.7f64, 0.7f64)];
    let records = (0..n)
        .map(|i| {
            let class = i % 2;
            let (cx, cy) = centers[class];
            let angle = i as f64 * 2.399;
            let r = 0.12 * (i as f64 * 0.31).sin().abs();
            let x = (cx + r * angle.cos()).clamp(0.0, 1.0);
            let y = (cy + r * angle.sin()).clamp(0.0, 1.0);
            let mut targets = vec![0.0, 0.0];
            targets[class] = 1.0;
            Record::new(vec![x, y], targets)
        })
        .collect();
    Dataset::new(records).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_has_four_records() {
        let ds = xor();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.attribute_count(), Some(2));
        assert_eq!(ds.target_count(), Some(2));
        assert_eq!(ds.records()[3].target_class(), 0);
    }

    #[test]
    fn blobs_alternate_classes_and_stay_in_the_unit_square() {
        let ds = blobs(20);
        assert_eq!(ds.len(), 20);
        for (i, r) in ds.iter().enumerate() {
            assert_eq!(r.target_class(), i % 2);
            assert!(r.attributes.iter().all(|v| (0.0..=1.0).contains(v)));
        }
        assert_eq!(blobs(20), ds);
    }
}
