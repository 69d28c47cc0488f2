use serde::{Deserialize, Serialize};

use crate::constants::{is_undefined, IDENTICAL_SIMILARITY};

/// A `rows × cols` similarity matrix with a parallel definedness mask.
///
/// Invariant: wherever the mask is `false` the value is exactly `0.0`, so
/// reductions can sum rows without special-casing undefined entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
    mask: Vec<bool>,
}

impl SimilarityMatrix {
    /// All-ones matrix with a fully defined mask.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![IDENTICAL_SIMILARITY; rows * cols],
            mask: vec![true; rows * cols],
        }
    }

    /// Build from a score function that may return the undefined sentinel.
    ///
    /// Sentinel entries are masked out and stored as `0.0`.
    pub fn from_scores<F>(rows: usize, cols: usize, mut score: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut values = Vec::with_capacity(rows * cols);
        let mut mask = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let s = score(i, j);
                if is_undefined(s) {
                    values.push(0.0);
                    mask.push(false);
                } else {
                    values.push(s);
                    mask.push(true);
                }
            }
        }
        Self {
            rows,
            cols,
            values,
            mask,
        }
    }

    /// Build from raw row-major values and per-row / per-column validity.
    ///
    /// `mask[i][j] = row_valid[i] && col_valid[j]`; masked values are zeroed.
    pub fn from_outer_mask(
        rows: usize,
        cols: usize,
        mut values: Vec<f64>,
        row_valid: &[bool],
        col_valid: &[bool],
    ) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        debug_assert_eq!(row_valid.len(), rows);
        debug_assert_eq!(col_valid.len(), cols);
        let mut mask = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let defined = row_valid[i] && col_valid[j];
                if !defined {
                    values[i * cols + j] = 0.0;
                }
                mask.push(defined);
            }
        }
        Self {
            rows,
            cols,
            values,
            mask,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.cols + j]
    }

    pub fn is_defined(&self, i: usize, j: usize) -> bool {
        self.mask[i * self.cols + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_mask(&self, i: usize) -> &[bool] {
        &self.mask[i * self.cols..(i + 1) * self.cols]
    }

    /// Number of defined entries in row `i`.
    pub fn valid_count(&self, i: usize) -> usize {
        self.row_mask(i).iter().filter(|&&m| m).count()
    }

    /// Mean over the defined entries of row `i`; `0.0` when none are defined.
    pub fn row_mean(&self, i: usize) -> f64 {
        let valid = self.valid_count(i);
        if valid == 0 {
            return 0.0;
        }
        self.row(i).iter().sum::<f64>() / valid as f64
    }

    /// Max over the defined entries of row `i`; `0.0` when none are defined.
    pub fn row_max(&self, i: usize) -> f64 {
        self.row(i)
            .iter()
            .zip(self.row_mask(i))
            .filter(|(_, &m)| m)
            .map(|(&v, _)| v)
            .fold(0.0, f64::max)
    }

    /// Total number of defined entries.
    pub fn defined_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }
}
