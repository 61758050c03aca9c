//! Bandwidth and weighted-profile measurement.

use serde::{Deserialize, Serialize};

use crate::csr::CsrMatrix;
use crate::error::{ReorderError, ReorderResult};

/// Locality measurements of a sparse symmetric matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Maximum `|i - j|` over stored entries.
    pub bandwidth: usize,
    /// Sum over rows of each entry's weight times the row's distance to
    /// its leading (minimum-column) entry.
    pub profile: u64,
}

impl Metrics {
    /// Measure a matrix.
    ///
    /// Read-only. Rows with no entries contribute zero to the profile, as
    /// do rows whose leading entry lies above the diagonal (the leading
    /// distance is clamped at zero).
    ///
    /// # Errors
    ///
    /// [`ReorderError::EmptyGraph`] if the matrix has no stored entries,
    /// since both measurements are meaningless for an edgeless graph.
    pub fn measure(matrix: &CsrMatrix) -> ReorderResult<Self> {
        if matrix.nnz() == 0 {
            return Err(ReorderError::EmptyGraph);
        }

        let mut bandwidth = 0usize;
        let mut profile = 0u64;
        for i in 0..matrix.num_rows() {
            let cols = matrix.row_cols(i);
            if cols.is_empty() {
                continue;
            }
            let min_col = cols.iter().copied().min().unwrap_or(i);
            for (&j, &w) in cols.iter().zip(matrix.row_values(i)) {
                bandwidth = bandwidth.max(i.abs_diff(j));
                profile += u64::from(w) * (i.saturating_sub(min_col)) as u64;
            }
        }
        Ok(Self { bandwidth, profile })
    }
}
