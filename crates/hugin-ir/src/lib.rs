//! Hugin circuit intermediate representation.
//!
//! A deliberately small IR: a circuit is an ordered list of gate and
//! measurement instructions over typed qubit/classical-bit handles.
//! The [`Circuit`] builder is the only way to construct one, so every
//! instruction is bounds-checked at insertion time.

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
