//! Local statevector simulator backend for Hugin.
//!
//! Provides [`SimulatorBackend`], an exact in-process simulator
//! implementing the HAL [`Backend`](hugin_hal::Backend) trait, and the
//! underlying [`Statevector`] engine.

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
pub use statevector::Statevector;
