//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in circuit.
    #[error("Qubit {qubit} out of range (circuit has {num_qubits} qubits)")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: u32,
    },

    /// Classical bit not found in circuit.
    #[error("Classical bit {clbit} out of range (circuit has {num_clbits} bits)")]
    ClbitOutOfRange {
        /// The offending classical bit.
        clbit: ClbitId,
        /// Number of classical bits in the circuit.
        num_clbits: u32,
    },

    /// Gate applied to a repeated qubit.
    #[error("Gate '{gate_name}' applied to duplicate qubit {qubit}")]
    DuplicateQubit {
        /// Name of the gate.
        gate_name: String,
        /// The repeated qubit.
        qubit: QubitId,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
