//! End-to-end tests for the qubit reordering pipeline.

use loco_ir::{Circuit, QubitId};
use loco_reorder::{
    CsrMatrix, Metrics, OrderingStrategy, ReorderError, ReorderObserver, Stage, local_ordering,
    local_ordering_with, reverse_cuthill_mckee, sparse_permute,
};

fn scrambled_path_circuit() -> Circuit {
    let mut circuit = Circuit::with_size("scrambled_path", 4, 0);
    circuit.cx(QubitId(0), QubitId(3)).unwrap();
    circuit.cx(QubitId(3), QubitId(1)).unwrap();
    circuit.cx(QubitId(1), QubitId(2)).unwrap();
    circuit
}

#[test]
fn scrambled_path_improves_for_both_strategies() {
    for strategy in [OrderingStrategy::Unweighted, OrderingStrategy::Weighted] {
        let result = local_ordering(&scrambled_path_circuit(), strategy).unwrap();
        assert_eq!(result.before.bandwidth, 3);
        assert!(result.after.bandwidth <= 3);
        assert!(result.bandwidth_reduction >= 0.0);
        assert_eq!(result.num_components, 1);

        // The permutation must be a bijection on the qubit labels.
        let mut sorted = result.permutation.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }
}

#[test]
fn linear_entangler_is_already_optimal() {
    // GHZ-style CNOT chain: bandwidth 1 cannot be improved, and RCM must
    // not make it worse.
    let mut circuit = Circuit::with_size("chain", 5, 0);
    for i in 0..4u32 {
        circuit.cx(QubitId(i), QubitId(i + 1)).unwrap();
    }
    let result = local_ordering(&circuit, OrderingStrategy::Unweighted).unwrap();
    assert_eq!(result.before.bandwidth, 1);
    assert_eq!(result.after.bandwidth, 1);
    assert_eq!(result.bandwidth_reduction, 0.0);
}

#[test]
fn complete_interaction_keeps_full_bandwidth() {
    // All-to-all entangling: every labeling has bandwidth n - 1.
    let n = 5u32;
    let mut circuit = Circuit::with_size("all_to_all", n, 0);
    for a in 0..n {
        for b in (a + 1)..n {
            circuit.cz(QubitId(a), QubitId(b)).unwrap();
        }
    }
    let result = local_ordering(&circuit, OrderingStrategy::Unweighted).unwrap();
    assert_eq!(result.before.bandwidth, n as usize - 1);
    assert_eq!(result.after.bandwidth, n as usize - 1);
    assert_eq!(result.bandwidth_reduction, 0.0);
}

#[test]
fn heavy_edges_pull_qubits_together() {
    // Qubits 0 and 4 interact nine times, the rest once; the weighted
    // strategy must not end up with a worse profile than the input.
    let mut circuit = Circuit::with_size("heavy", 5, 0);
    for _ in 0..9 {
        circuit.cx(QubitId(0), QubitId(4)).unwrap();
    }
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    circuit.cx(QubitId(1), QubitId(2)).unwrap();
    circuit.cx(QubitId(2), QubitId(3)).unwrap();
    circuit.cx(QubitId(3), QubitId(4)).unwrap();

    let result = local_ordering(&circuit, OrderingStrategy::Weighted).unwrap();
    assert!(result.profile_reduction >= 0.0);

    let old0 = result.permutation.iter().position(|&q| q == 0).unwrap();
    let old4 = result.permutation.iter().position(|&q| q == 4).unwrap();
    assert_eq!(old0.abs_diff(old4), 1, "heavy pair should become adjacent");
}

#[test]
fn disconnected_circuit_reports_components() {
    let mut circuit = Circuit::with_size("islands", 6, 0);
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    circuit.cx(QubitId(4), QubitId(5)).unwrap();

    let result = local_ordering(&circuit, OrderingStrategy::Unweighted).unwrap();
    // Two entangled pairs plus isolated qubits 2 and 3.
    assert_eq!(result.num_components, 4);
    assert_eq!(result.permutation.len(), 6);
}

#[test]
fn empty_interaction_graph_is_an_error() {
    let mut circuit = Circuit::with_size("no_entanglers", 3, 3);
    circuit.h(QubitId(0)).unwrap();
    circuit.x(QubitId(1)).unwrap();
    circuit.measure_all().unwrap();

    let err = local_ordering(&circuit, OrderingStrategy::Weighted).unwrap_err();
    assert!(matches!(err, ReorderError::EmptyGraph));
}

#[test]
fn multiple_registers_are_an_error() {
    let mut circuit = Circuit::new("two_regs");
    let a = circuit.add_qreg("a", 2);
    let b = circuit.add_qreg("b", 2);
    circuit.cx(a[0], b[1]).unwrap();

    let err = local_ordering(&circuit, OrderingStrategy::Weighted).unwrap_err();
    assert!(matches!(err, ReorderError::MultipleRegisters { got: 2 }));
}

#[test]
fn three_qubit_gate_is_an_error() {
    let mut circuit = Circuit::with_size("toffoli", 3, 0);
    circuit.ccx(QubitId(0), QubitId(1), QubitId(2)).unwrap();

    let err = local_ordering(&circuit, OrderingStrategy::Unweighted).unwrap_err();
    assert!(matches!(
        err,
        ReorderError::UnsupportedGateArity { arity: 3, .. }
    ));
}

#[test]
fn structural_operations_do_not_affect_result() {
    let bare = scrambled_path_circuit();
    let mut noisy = scrambled_path_circuit();
    noisy.barrier_all().unwrap();
    noisy.snapshot_all().unwrap();
    noisy.measure_all().unwrap();

    let a = local_ordering(&bare, OrderingStrategy::Weighted).unwrap();
    let b = local_ordering(&noisy, OrderingStrategy::Weighted).unwrap();
    assert_eq!(a, b);
}

#[test]
fn qft_reordering_returns_valid_permutation() {
    let circuit = Circuit::qft(6).unwrap();
    let result = local_ordering(&circuit, OrderingStrategy::Weighted).unwrap();

    let mut sorted = result.permutation.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..6).collect::<Vec<_>>());
    // QFT entangles all pairs, so the bandwidth stays maximal.
    assert_eq!(result.after.bandwidth, 5);
}

/// Observer recording the stages it saw.
#[derive(Default)]
struct RecordingObserver {
    stages: Vec<(Stage, usize, Metrics)>,
}

impl ReorderObserver for RecordingObserver {
    fn on_graph(&mut self, stage: Stage, graph: &CsrMatrix, metrics: &Metrics) {
        self.stages.push((stage, graph.nnz(), *metrics));
    }
}

#[test]
fn observer_sees_both_stages() {
    let mut observer = RecordingObserver::default();
    let result = local_ordering_with(
        &scrambled_path_circuit(),
        OrderingStrategy::Unweighted,
        &mut observer,
    )
    .unwrap();

    assert_eq!(observer.stages.len(), 2);
    let (input_stage, input_nnz, input_metrics) = &observer.stages[0];
    let (permuted_stage, permuted_nnz, permuted_metrics) = &observer.stages[1];
    assert_eq!(*input_stage, Stage::Input);
    assert_eq!(*permuted_stage, Stage::Permuted);
    assert_eq!(input_nnz, permuted_nnz);
    assert_eq!(*input_metrics, result.before);
    assert_eq!(*permuted_metrics, result.after);
}

#[test]
fn observer_does_not_change_result() {
    let circuit = scrambled_path_circuit();
    let plain = local_ordering(&circuit, OrderingStrategy::Weighted).unwrap();
    let mut observer = RecordingObserver::default();
    let observed =
        local_ordering_with(&circuit, OrderingStrategy::Weighted, &mut observer).unwrap();
    assert_eq!(plain, observed);
}

#[test]
fn report_round_trips_through_json() {
    let result = local_ordering(&scrambled_path_circuit(), OrderingStrategy::Weighted).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: loco_reorder::Reordering = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}

#[test]
fn manual_rcm_on_built_graph_matches_pipeline() {
    let circuit = scrambled_path_circuit();
    let graph = loco_reorder::interaction_graph(&circuit).unwrap();
    let perm = reverse_cuthill_mckee(&graph);
    let permuted = sparse_permute(&graph, &perm, &perm).unwrap();

    let result = local_ordering(&circuit, OrderingStrategy::Unweighted).unwrap();
    assert_eq!(result.permutation, perm);
    assert_eq!(
        result.after,
        loco_reorder::Metrics::measure(&permuted).unwrap()
    );
}
