//! Backend capability introspection.

use serde::{Deserialize, Serialize};

/// Hardware capabilities of a quantum backend.
///
/// Describes what a backend can do: qubit count, shot limits, and
/// whether it is a simulator. Callers use this for display and for
/// validating circuits before submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Maximum number of shots per job.
    pub max_shots: u32,
    /// Whether this is a simulator (`true`) vs real hardware (`false`).
    /// MUST be set from authoritative source data, not string heuristics.
    pub is_simulator: bool,
}

impl Capabilities {
    /// Create capabilities for a local simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            num_qubits,
            max_shots: 100_000,
            is_simulator: true,
        }
    }

    /// Create capabilities for a named hardware device.
    pub fn device(name: impl Into<String>, num_qubits: u32, max_shots: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            max_shots,
            is_simulator: false,
        }
    }
}
