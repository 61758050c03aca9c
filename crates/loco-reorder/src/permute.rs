//! Structural permutation of compressed sparse matrices.

use crate::csr::CsrMatrix;
use crate::error::{ReorderError, ReorderResult};

/// Apply row and column permutations to a square sparse matrix.
///
/// Both permutations map new indices to old: new row `r` holds exactly
/// the entries of old row `row_perm[r]`, with each column index `c`
/// remapped to the position of `c` in `col_perm` (the inverse
/// permutation). For a symmetric matrix permuted with the same
/// permutation on both sides, symmetry is preserved.
///
/// This is a pure structural relabeling: the output has the same shape,
/// the same number of stored entries, and the same total weight as the
/// input. Input rows may hold columns in any order; output rows are
/// sorted ascending by column. Runs in O(nnz log max-row-length).
///
/// # Errors
///
/// [`ReorderError::InvalidPermutation`] if either permutation is not a
/// bijection on `0..n`.
pub fn sparse_permute(
    matrix: &CsrMatrix,
    row_perm: &[usize],
    col_perm: &[usize],
) -> ReorderResult<CsrMatrix> {
    let n = matrix.num_rows();
    validate_permutation(row_perm, n)?;
    validate_permutation(col_perm, n)?;
    let col_inverse = invert_permutation(col_perm);

    let mut row_ptr = vec![0usize; n + 1];
    for r in 0..n {
        row_ptr[r + 1] = row_ptr[r] + matrix.degree(row_perm[r]);
    }

    let nnz = matrix.nnz();
    let mut values = Vec::with_capacity(nnz);
    let mut col_indices = Vec::with_capacity(nnz);
    let mut row_buf: Vec<(usize, u32)> = Vec::new();
    for r in 0..n {
        let old = row_perm[r];
        row_buf.clear();
        for (&c, &v) in matrix.row_cols(old).iter().zip(matrix.row_values(old)) {
            row_buf.push((col_inverse[c], v));
        }
        row_buf.sort_unstable_by_key(|&(c, _)| c);
        for &(c, v) in &row_buf {
            col_indices.push(c);
            values.push(v);
        }
    }

    CsrMatrix::new(n, values, col_indices, row_ptr)
}

/// Invert a permutation: `result[perm[i]] = i`.
///
/// The input must be a bijection on `0..n`; callers validate first.
pub fn invert_permutation(perm: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0usize; perm.len()];
    for (new, &old) in perm.iter().enumerate() {
        inverse[old] = new;
    }
    inverse
}

fn validate_permutation(perm: &[usize], n: usize) -> ReorderResult<()> {
    if perm.len() != n {
        return Err(ReorderError::InvalidPermutation {
            reason: format!("length {} does not match matrix size {n}", perm.len()),
        });
    }
    let mut seen = vec![false; n];
    for &p in perm {
        if p >= n {
            return Err(ReorderError::InvalidPermutation {
                reason: format!("index {p} out of range for size {n}"),
            });
        }
        if seen[p] {
            return Err(ReorderError::InvalidPermutation {
                reason: format!("index {p} appears more than once"),
            });
        }
        seen[p] = true;
    }
    Ok(())
}
