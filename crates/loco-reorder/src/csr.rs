//! Compressed sparse row storage for symmetric interaction graphs.

use serde::{Deserialize, Serialize};

use crate::error::{ReorderError, ReorderResult};

/// A sparse matrix in compressed sparse row form.
///
/// Three flat arrays: `values` holds the stored entries, `col_indices` the
/// column of each entry, and `row_ptr` (length `num_rows + 1`) the offsets
/// such that row `i` occupies `[row_ptr[i], row_ptr[i + 1])` in the other
/// two arrays.
///
/// Every producer in this crate (the graph builder and the permuter) emits
/// rows with column indices sorted ascending; [`CsrMatrix::new`] does not
/// require it, and consumers only rely on it where their docs say so.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrMatrix {
    num_rows: usize,
    values: Vec<u32>,
    col_indices: Vec<usize>,
    row_ptr: Vec<usize>,
}

impl CsrMatrix {
    /// Create a matrix from raw CSR arrays, validating their invariants.
    pub fn new(
        num_rows: usize,
        values: Vec<u32>,
        col_indices: Vec<usize>,
        row_ptr: Vec<usize>,
    ) -> ReorderResult<Self> {
        if row_ptr.len() != num_rows + 1 {
            return Err(ReorderError::InvalidCsr {
                reason: format!(
                    "row_ptr length {} does not match num_rows {} + 1",
                    row_ptr.len(),
                    num_rows
                ),
            });
        }
        if row_ptr[0] != 0 {
            return Err(ReorderError::InvalidCsr {
                reason: format!("row_ptr must start at 0, got {}", row_ptr[0]),
            });
        }
        if row_ptr.windows(2).any(|w| w[0] > w[1]) {
            return Err(ReorderError::InvalidCsr {
                reason: "row_ptr must be non-decreasing".into(),
            });
        }
        let nnz = row_ptr[num_rows];
        if values.len() != nnz || col_indices.len() != nnz {
            return Err(ReorderError::InvalidCsr {
                reason: format!(
                    "expected {} entries, got {} values and {} column indices",
                    nnz,
                    values.len(),
                    col_indices.len()
                ),
            });
        }
        if let Some(&col) = col_indices.iter().find(|&&c| c >= num_rows) {
            return Err(ReorderError::InvalidCsr {
                reason: format!("column index {col} out of range for {num_rows} columns"),
            });
        }
        Ok(Self {
            num_rows,
            values,
            col_indices,
            row_ptr,
        })
    }

    /// Create an empty matrix with the given number of rows.
    pub fn empty(num_rows: usize) -> Self {
        Self {
            num_rows,
            values: vec![],
            col_indices: vec![],
            row_ptr: vec![0; num_rows + 1],
        }
    }

    /// Number of rows (and columns, the matrix is square).
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// All stored values.
    #[inline]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// All stored column indices.
    #[inline]
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// The row offset array (length `num_rows + 1`).
    #[inline]
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// Column indices of the stored entries in row `i`.
    #[inline]
    pub fn row_cols(&self, i: usize) -> &[usize] {
        &self.col_indices[self.row_ptr[i]..self.row_ptr[i + 1]]
    }

    /// Values of the stored entries in row `i`.
    #[inline]
    pub fn row_values(&self, i: usize) -> &[u32] {
        &self.values[self.row_ptr[i]..self.row_ptr[i + 1]]
    }

    /// Number of stored entries in row `i` (the structural degree of
    /// vertex `i` for a zero-diagonal symmetric matrix).
    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.row_ptr[i + 1] - self.row_ptr[i]
    }

    /// Sum of all stored values.
    pub fn total_weight(&self) -> u64 {
        self.values.iter().map(|&v| u64::from(v)).sum()
    }
}
