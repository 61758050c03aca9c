//! Error types for the reordering engine.

use thiserror::Error;

/// Errors that can occur while reordering a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReorderError {
    /// Circuit does not have exactly one quantum register.
    #[error("Circuit must have a single quantum register, got {got}")]
    MultipleRegisters {
        /// Number of quantum registers found.
        got: usize,
    },

    /// A computational operation acts on more than two qubits.
    #[error("Entangling gates must be 2Q gates only, '{gate}' acts on {arity} qubits")]
    UnsupportedGateArity {
        /// Name of the offending gate.
        gate: String,
        /// Number of qubits the gate acts on.
        arity: usize,
    },

    /// The interaction graph has no edges, so bandwidth and profile
    /// reductions are undefined.
    #[error("Interaction graph has no edges (circuit has no two-qubit gates)")]
    EmptyGraph,

    /// A permutation argument is not a bijection on the matrix indices.
    #[error("Invalid permutation: {reason}")]
    InvalidPermutation {
        /// What made the permutation invalid.
        reason: String,
    },

    /// Malformed compressed sparse matrix arrays.
    #[error("Invalid CSR structure: {reason}")]
    InvalidCsr {
        /// What made the arrays inconsistent.
        reason: String,
    },

    /// Error from the circuit representation.
    #[error(transparent)]
    Ir(#[from] loco_ir::IrError),
}

/// Result type for reordering operations.
pub type ReorderResult<T> = Result<T, ReorderError>;
