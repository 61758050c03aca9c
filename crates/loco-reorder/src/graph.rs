//! Interaction-graph construction from a circuit.

use rustc_hash::FxHashMap;

use loco_ir::Circuit;

use crate::csr::CsrMatrix;
use crate::error::{ReorderError, ReorderResult};

/// Build the weighted interaction graph of a circuit.
///
/// Every two-qubit gate contributes weight 1 to the undirected edge
/// between its operands, accumulated across repeated occurrences.
/// Structural operations (barrier, measure, reset, snapshot) and
/// single-qubit gates contribute nothing. The result is a symmetric
/// `n x n` [`CsrMatrix`] with zero diagonal and rows sorted by column.
///
/// # Errors
///
/// - [`ReorderError::MultipleRegisters`] if the circuit does not have
///   exactly one quantum register.
/// - [`ReorderError::UnsupportedGateArity`] if a computational operation
///   acts on more than two qubits.
pub fn interaction_graph(circuit: &Circuit) -> ReorderResult<CsrMatrix> {
    let num_regs = circuit.num_qregs();
    if num_regs != 1 {
        return Err(ReorderError::MultipleRegisters { got: num_regs });
    }
    let n = circuit.num_qubits();

    let mut weights: FxHashMap<(u32, u32), u32> = FxHashMap::default();
    for inst in circuit.instructions() {
        if inst.is_structural() {
            continue;
        }
        match inst.qubits.len() {
            0 | 1 => {}
            2 => {
                let (a, b) = (inst.qubits[0].0, inst.qubits[1].0);
                let key = if a < b { (a, b) } else { (b, a) };
                *weights.entry(key).or_insert(0) += 1;
            }
            arity => {
                return Err(ReorderError::UnsupportedGateArity {
                    gate: inst.name().to_string(),
                    arity,
                });
            }
        }
    }

    // Mirror each undirected edge into both rows, then assemble CSR by
    // counting sort over the (row, col) entry list.
    let mut entries: Vec<(usize, usize, u32)> = Vec::with_capacity(weights.len() * 2);
    for (&(a, b), &w) in &weights {
        entries.push((a as usize, b as usize, w));
        entries.push((b as usize, a as usize, w));
    }
    entries.sort_unstable_by_key(|&(row, col, _)| (row, col));

    let mut row_ptr = vec![0usize; n + 1];
    for &(row, _, _) in &entries {
        row_ptr[row + 1] += 1;
    }
    for i in 1..=n {
        row_ptr[i] += row_ptr[i - 1];
    }
    let col_indices: Vec<usize> = entries.iter().map(|&(_, col, _)| col).collect();
    let values: Vec<u32> = entries.iter().map(|&(_, _, w)| w).collect();

    CsrMatrix::new(n, values, col_indices, row_ptr)
}

/// Count the connected components of a symmetric sparse graph.
///
/// Isolated vertices (empty rows) each count as their own component.
pub fn connected_components(matrix: &CsrMatrix) -> usize {
    let n = matrix.num_rows();
    let mut visited = vec![false; n];
    let mut queue = Vec::new();
    let mut components = 0;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        components += 1;
        visited[start] = true;
        queue.push(start);
        while let Some(v) = queue.pop() {
            for &u in matrix.row_cols(v) {
                if !visited[u] {
                    visited[u] = true;
                    queue.push(u);
                }
            }
        }
    }
    components
}
