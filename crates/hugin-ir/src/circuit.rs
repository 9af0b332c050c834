//! High-level circuit builder API.

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit.
///
/// This provides a high-level API for building quantum circuits as an
/// ordered instruction list, with convenient methods for common gates.
/// Gate methods return `IrResult<&mut Self>` so calls chain with `?`:
///
/// ```
/// use hugin_ir::Circuit;
///
/// let mut circuit = Circuit::with_size("echo", 1, 1);
/// let q = circuit.qubit(0);
/// circuit.x(q)?.x(q)?.measure_all()?;
/// # Ok::<(), hugin_ir::IrError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Number of classical bits.
    num_clbits: u32,
    /// Instructions in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_qubits: 0,
            num_clbits: 0,
            instructions: vec![],
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            instructions: vec![],
        }
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.num_qubits);
        self.num_qubits += 1;
        id
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.num_clbits);
        self.num_clbits += 1;
        id
    }

    /// Get the handle for an existing qubit by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Use [`Circuit::num_qubits`]
    /// to check bounds first.
    pub fn qubit(&self, index: u32) -> QubitId {
        assert!(index < self.num_qubits, "qubit index out of range");
        QubitId(index)
    }

    /// Get the handle for an existing classical bit by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn clbit(&self, index: u32) -> ClbitId {
        assert!(index < self.num_clbits, "clbit index out of range");
        ClbitId(index)
    }

    fn check_qubit(&self, qubit: QubitId) -> IrResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(IrError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn check_clbit(&self, clbit: ClbitId) -> IrResult<()> {
        if clbit.0 >= self.num_clbits {
            return Err(IrError::ClbitOutOfRange {
                clbit,
                num_clbits: self.num_clbits,
            });
        }
        Ok(())
    }

    fn apply_single(&mut self, gate: StandardGate, qubit: QubitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit)?;
        self.instructions
            .push(Instruction::single_qubit_gate(gate, qubit));
        Ok(self)
    }

    fn apply_pair(
        &mut self,
        gate: StandardGate,
        q1: QubitId,
        q2: QubitId,
    ) -> IrResult<&mut Self> {
        self.check_qubit(q1)?;
        self.check_qubit(q2)?;
        if q1 == q2 {
            return Err(IrError::DuplicateQubit {
                gate_name: gate.name().to_string(),
                qubit: q1,
            });
        }
        self.instructions.push(Instruction::two_qubit_gate(gate, q1, q2));
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply identity gate.
    pub fn i(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::I, qubit)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::X, qubit)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::Y, qubit)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::Z, qubit)
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::H, qubit)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::S, qubit)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::Sdg, qubit)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::T, qubit)
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::Tdg, qubit)
    }

    /// Apply rotation around X axis.
    pub fn rx(&mut self, qubit: QubitId, theta: f64) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::Rx(theta), qubit)
    }

    /// Apply rotation around Y axis.
    pub fn ry(&mut self, qubit: QubitId, theta: f64) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::Ry(theta), qubit)
    }

    /// Apply rotation around Z axis.
    pub fn rz(&mut self, qubit: QubitId, theta: f64) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::Rz(theta), qubit)
    }

    /// Apply phase gate.
    pub fn p(&mut self, qubit: QubitId, theta: f64) -> IrResult<&mut Self> {
        self.apply_single(StandardGate::P(theta), qubit)
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply controlled-X (CNOT) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply_pair(StandardGate::CX, control, target)
    }

    /// Apply controlled-Z gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply_pair(StandardGate::CZ, control, target)
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.apply_pair(StandardGate::Swap, q1, q2)
    }

    // =========================================================================
    // Non-unitary operations
    // =========================================================================

    /// Measure a qubit into a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit)?;
        self.check_clbit(clbit)?;
        self.instructions.push(Instruction::measure(qubit, clbit));
        Ok(self)
    }

    /// Measure every qubit into the classical bit with the same index.
    ///
    /// Adds classical bits as needed so that each qubit has one.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        if self.num_clbits < self.num_qubits {
            self.num_clbits = self.num_qubits;
        }
        for i in 0..self.num_qubits {
            self.instructions
                .push(Instruction::measure(QubitId(i), ClbitId(i)));
        }
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of qubits in the circuit.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Number of classical bits in the circuit.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of gate operations (measurements excluded).
    pub fn num_ops(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_gate()).count()
    }

    /// Circuit depth: the longest chain of gates over any qubit.
    ///
    /// Identity gates and measurements do not contribute.
    pub fn depth(&self) -> usize {
        let mut front = vec![0usize; self.num_qubits as usize];
        for inst in &self.instructions {
            if !inst.is_gate() || matches!(inst.kind, InstructionKind::Gate(StandardGate::I)) {
                continue;
            }
            let layer = inst
                .qubits
                .iter()
                .map(|q| front[q.0 as usize])
                .max()
                .unwrap_or(0)
                + 1;
            for q in &inst.qubits {
                front[q.0 as usize] = layer;
            }
        }
        front.into_iter().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chaining() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        let q0 = circuit.qubit(0);
        let q1 = circuit.qubit(1);
        circuit
            .h(q0)
            .unwrap()
            .cx(q0, q1)
            .unwrap()
            .measure_all()
            .unwrap();

        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_ops(), 2);
        assert_eq!(circuit.instructions().len(), 4);
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        let err = circuit.x(QubitId(3)).unwrap_err();
        assert!(matches!(err, IrError::QubitOutOfRange { .. }));
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let q0 = circuit.qubit(0);
        let err = circuit.cx(q0, q0).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_depth_serial_vs_parallel() {
        // Two gates on the same qubit stack; on different qubits they don't.
        let mut serial = Circuit::with_size("serial", 1, 0);
        let q = serial.qubit(0);
        serial.x(q).unwrap().x(q).unwrap();
        assert_eq!(serial.depth(), 2);

        let mut parallel = Circuit::with_size("parallel", 2, 0);
        let q0 = parallel.qubit(0);
        let q1 = parallel.qubit(1);
        parallel.x(q0).unwrap().x(q1).unwrap();
        assert_eq!(parallel.depth(), 1);
    }

    #[test]
    fn test_incremental_construction() {
        let mut circuit = Circuit::new("grown");
        let q0 = circuit.add_qubit();
        let q1 = circuit.add_qubit();
        let c0 = circuit.add_clbit();
        circuit.h(q0).unwrap().cx(q0, q1).unwrap();
        circuit.measure(q0, c0).unwrap();

        assert_eq!(circuit.name(), "grown");
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 1);
        assert_eq!(circuit.num_ops(), 2);
    }

    #[test]
    fn test_measure_all_extends_clbits() {
        let mut circuit = Circuit::with_size("m", 3, 0);
        circuit.measure_all().unwrap();
        assert_eq!(circuit.num_clbits(), 3);
        assert_eq!(circuit.instructions().len(), 3);
    }
}
