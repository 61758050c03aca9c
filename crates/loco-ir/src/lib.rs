//! Loco Circuit Representation
//!
//! This crate provides the circuit data structures consumed by the loco
//! qubit-reordering engine. Circuits are stored as an ordered instruction
//! sequence; the reordering engine only inspects which qubits each
//! operation touches, so no DAG machinery is carried here.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] plus the
//!   [`QuantumRegister`] / [`ClassicalRegister`] grouping they live in
//! - **Gates**: [`StandardGate`] for built-in gates (H, X, CX, RZZ, etc.)
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] high-level builder API
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use loco_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_qregs(), 1);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClassicalRegister, ClbitId, QuantumRegister, QubitId};
