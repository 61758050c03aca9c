//! Qubit and classical bit types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a qubit within a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// Unique identifier for a classical bit within a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClbitId(pub u32);

impl fmt::Display for ClbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl From<u32> for ClbitId {
    fn from(id: u32) -> Self {
        ClbitId(id)
    }
}

/// A named quantum register holding a contiguous block of qubits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantumRegister {
    /// Register name.
    pub name: String,
    /// Id of the first qubit in the register.
    pub start: QubitId,
    /// Number of qubits in the register.
    pub size: u32,
}

impl QuantumRegister {
    /// Check whether the register contains the given qubit.
    pub fn contains(&self, qubit: QubitId) -> bool {
        qubit.0 >= self.start.0 && qubit.0 < self.start.0 + self.size
    }

    /// Iterate over the qubit ids in this register.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + use<> {
        (self.start.0..self.start.0 + self.size).map(QubitId)
    }
}

/// A named classical register holding a contiguous block of bits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicalRegister {
    /// Register name.
    pub name: String,
    /// Id of the first bit in the register.
    pub start: ClbitId,
    /// Number of bits in the register.
    pub size: u32,
}
