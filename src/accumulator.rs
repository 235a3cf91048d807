//! # Vote Accumulator
//! Per-row running weight totals for the two classes, plus the final
//! majority decision. Pure arithmetic, no I/O, suitable for unit tests.
//!
//! Alignment is positional: row `i` of every file votes into row `i` of the
//! accumulator. The reference file fixes the row count; a file with more
//! rows only votes over the overlap.

/// Running class-1/class-0 weight totals, one pair per identifier row.
#[derive(Debug, Clone)]
pub struct VoteAccumulator {
    class_one: Vec<f64>,
    class_zero: Vec<f64>,
}

impl VoteAccumulator {
    /// Zeroed accumulator for `rows` identifier rows.
    pub fn new(rows: usize) -> Self {
        Self {
            class_one: vec![0.0; rows],
            class_zero: vec![0.0; rows],
        }
    }

    pub fn len(&self) -> usize {
        self.class_one.len()
    }

    pub fn is_empty(&self) -> bool {
        self.class_one.is_empty()
    }

    /// Add one file's votes. A `Some(1)` adds `weight` to the row's class-1
    /// total, a `Some(0)` to its class-0 total, `None` to neither.
    pub fn apply(&mut self, predictions: &[Option<u8>], weight: f64) {
        let n = self.class_one.len().min(predictions.len());
        for (i, prediction) in predictions.iter().take(n).enumerate() {
            match prediction {
                Some(1) => self.class_one[i] += weight,
                Some(0) => self.class_zero[i] += weight,
                _ => {}
            }
        }
    }

    /// The two running totals for one row (class-1, class-0).
    pub fn totals(&self, row: usize) -> (f64, f64) {
        (self.class_one[row], self.class_zero[row])
    }

    /// Final consensus: 1 where the class-1 total strictly exceeds the
    /// class-0 total, 0 otherwise (ties included).
    pub fn decide(&self) -> Vec<u8> {
        self.class_one
            .iter()
            .zip(&self.class_zero)
            .map(|(one, zero)| u8::from(one > zero))
            .collect()
    }
}
