//! Hugin Hardware Abstraction Layer
//!
//! This crate provides a unified interface for interacting with quantum
//! backends, so the rest of the workspace works the same way against a
//! local simulator as it would against hardware.
//!
//! # Overview
//!
//! - A common [`Backend`] trait for job submission and management
//! - [`Capabilities`] to describe hardware features and constraints
//! - [`BackendAvailability`] for liveness and queue-depth reporting
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//!
//! # Example: Running a Circuit
//!
//! ```ignore
//! use hugin_hal::Backend;
//! use hugin_adapter_sim::SimulatorBackend;
//! use hugin_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut circuit = Circuit::with_size("echo", 1, 1);
//!     let q = circuit.qubit(0);
//!     circuit.x(q)?.x(q)?.measure_all()?;
//!
//!     let backend = SimulatorBackend::new();
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     if let Some((bitstring, count)) = result.counts.most_frequent() {
//!         println!("Most frequent: {} ({} times)", bitstring, count);
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod result;

pub use backend::{Backend, BackendAvailability};
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{Counts, ExecutionResult};
