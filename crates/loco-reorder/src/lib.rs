//! Loco Qubit Reordering Engine
//!
//! This crate permutes the qubit labels of a quantum circuit so that
//! interacting qubits end up as close together in linear index as
//! possible. Locality is measured on the circuit's two-qubit interaction
//! graph via matrix bandwidth and weighted profile, and the permutation
//! is computed with the Reverse Cuthill-McKee heuristic (or its weighted
//! variant).
//!
//! # Pipeline
//!
//! ```text
//! Circuit
//!    │
//!    ▼
//! interaction_graph ──► CsrMatrix (symmetric, weighted)
//!    │
//!    ├── Metrics::measure          (bandwidth, weighted profile)
//!    ├── reverse_cuthill_mckee /
//!    │   weighted_reverse_cuthill_mckee ──► permutation
//!    └── sparse_permute ──► permuted CsrMatrix ──► Metrics::measure
//!                                                     │
//!                                                     ▼
//!                                        Reordering (perm + reductions)
//! ```
//!
//! Each stage produces a new structure; nothing is mutated in place and
//! no state persists across calls. RCM is a heuristic: it tends to
//! minimize bandwidth but does not guarantee an optimal labeling, and
//! the reduction percentages can be negative.
//!
//! # Example
//!
//! ```rust
//! use loco_ir::{Circuit, QubitId};
//! use loco_reorder::{OrderingStrategy, local_ordering};
//!
//! // Entangling gates (0,3), (3,1), (1,2): a path graph labeled badly.
//! let mut circuit = Circuit::with_size("demo", 4, 0);
//! circuit.cx(QubitId(0), QubitId(3)).unwrap();
//! circuit.cx(QubitId(3), QubitId(1)).unwrap();
//! circuit.cx(QubitId(1), QubitId(2)).unwrap();
//!
//! let result = local_ordering(&circuit, OrderingStrategy::Weighted).unwrap();
//! assert_eq!(result.before.bandwidth, 3);
//! assert!(result.bandwidth_reduction >= 0.0);
//! ```

pub mod analyze;
pub mod csr;
pub mod error;
pub mod graph;
pub mod ordering;
pub mod permute;
pub mod reorder;

pub use analyze::Metrics;
pub use csr::CsrMatrix;
pub use error::{ReorderError, ReorderResult};
pub use graph::{connected_components, interaction_graph};
pub use ordering::{reverse_cuthill_mckee, weighted_reverse_cuthill_mckee};
pub use permute::{invert_permutation, sparse_permute};
pub use reorder::{
    NoopObserver, OrderingStrategy, ReorderObserver, Reordering, Stage, local_ordering,
    local_ordering_with,
};
