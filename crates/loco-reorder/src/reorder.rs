//! Qubit-locality reordering orchestration.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use loco_ir::Circuit;

use crate::analyze::Metrics;
use crate::csr::CsrMatrix;
use crate::error::{ReorderError, ReorderResult};
use crate::graph::{connected_components, interaction_graph};
use crate::ordering::{reverse_cuthill_mckee, weighted_reverse_cuthill_mckee};
use crate::permute::sparse_permute;

/// Which neighbor-ranking rule the ordering uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderingStrategy {
    /// Rank neighbors by descending edge weight (targets weighted profile).
    #[default]
    Weighted,
    /// Rank neighbors by ascending degree only (targets bandwidth).
    Unweighted,
}

/// Pipeline stage handed to a [`ReorderObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The interaction graph as built from the circuit.
    Input,
    /// The graph after the permutation has been applied.
    Permuted,
}

/// Diagnostic hook receiving the sparse structures and their measurements.
///
/// External renderers (spy plots, dashboards) attach here; the engine's
/// behavior does not depend on whether an observer is present.
pub trait ReorderObserver {
    /// Called once per [`Stage`] with the graph and its metrics.
    fn on_graph(&mut self, stage: Stage, graph: &CsrMatrix, metrics: &Metrics);
}

/// Observer that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ReorderObserver for NoopObserver {
    fn on_graph(&mut self, _stage: Stage, _graph: &CsrMatrix, _metrics: &Metrics) {}
}

/// Outcome of a reordering request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reordering {
    /// Permutation of qubit labels, `permutation[new_index] = old_index`.
    pub permutation: Vec<usize>,
    /// Bandwidth reduction in percent, rounded to two decimals. Negative
    /// when the heuristic worsened the bandwidth.
    pub bandwidth_reduction: f64,
    /// Weighted-profile reduction in percent, rounded to two decimals.
    pub profile_reduction: f64,
    /// Measurements of the input interaction graph.
    pub before: Metrics,
    /// Measurements after applying the permutation.
    pub after: Metrics,
    /// Number of connected components in the interaction graph. More than
    /// one means locality gains are bounded by component size.
    pub num_components: usize,
}

/// Permute qubit labels so two-qubit gates act on nearby labels.
///
/// Builds the circuit's weighted interaction graph, measures its
/// bandwidth and weighted profile, computes a (weighted or unweighted)
/// Reverse Cuthill-McKee permutation, applies it symmetrically, and
/// re-measures. Pure function of its inputs.
///
/// # Errors
///
/// - [`ReorderError::MultipleRegisters`] for circuits with other than one
///   quantum register.
/// - [`ReorderError::UnsupportedGateArity`] for gates on more than two
///   qubits.
/// - [`ReorderError::EmptyGraph`] when the circuit has no two-qubit
///   gates, since the reduction percentages would divide by zero.
pub fn local_ordering(circuit: &Circuit, strategy: OrderingStrategy) -> ReorderResult<Reordering> {
    local_ordering_with(circuit, strategy, &mut NoopObserver)
}

/// [`local_ordering`] with a diagnostic observer attached.
#[instrument(skip_all, fields(circuit = circuit.name(), strategy = ?strategy))]
pub fn local_ordering_with(
    circuit: &Circuit,
    strategy: OrderingStrategy,
    observer: &mut dyn ReorderObserver,
) -> ReorderResult<Reordering> {
    let graph = interaction_graph(circuit)?;
    if graph.nnz() == 0 {
        return Err(ReorderError::EmptyGraph);
    }

    let before = Metrics::measure(&graph)?;
    debug!(
        bandwidth = before.bandwidth,
        profile = before.profile,
        "measured input interaction graph"
    );
    observer.on_graph(Stage::Input, &graph, &before);

    let num_components = connected_components(&graph);
    if num_components > 1 {
        warn!(
            num_components,
            "interaction graph is disconnected, locality gains are bounded by component size"
        );
    }

    let permutation = match strategy {
        OrderingStrategy::Weighted => weighted_reverse_cuthill_mckee(&graph),
        OrderingStrategy::Unweighted => reverse_cuthill_mckee(&graph),
    };

    let permuted = sparse_permute(&graph, &permutation, &permutation)?;
    let after = Metrics::measure(&permuted)?;
    debug!(
        bandwidth = after.bandwidth,
        profile = after.profile,
        "measured permuted interaction graph"
    );
    observer.on_graph(Stage::Permuted, &permuted, &after);

    Ok(Reordering {
        permutation,
        bandwidth_reduction: reduction_percent(before.bandwidth as f64, after.bandwidth as f64),
        profile_reduction: reduction_percent(before.profile as f64, after.profile as f64),
        before,
        after,
        num_components,
    })
}

/// `(old - new) / old * 100`, rounded to two decimal places.
fn reduction_percent(old: f64, new: f64) -> f64 {
    ((old - new) / old * 100.0 * 100.0).round() / 100.0
}
