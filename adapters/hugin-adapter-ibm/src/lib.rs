//! IBM Quantum cloud status client for Hugin.
//!
//! A read-only client for the IBM Quantum Cloud REST API: device
//! discovery plus per-device configuration and status (qubit count,
//! operational flag, queue depth). Authentication is an IAM API-key
//! exchange with the bearer token cached on disk between runs.
//!
//! # Example
//!
//! ```ignore
//! use hugin_adapter_ibm::IbmClient;
//!
//! let client = IbmClient::connect().await?;
//! for backend in client.list_backends().await? {
//!     println!("{}: {} qubits", backend.name, backend.num_qubits);
//! }
//! ```

pub mod api;
pub mod auth;
pub mod error;

pub use api::{BackendInfo, BackendStatus, DEFAULT_ENDPOINT, IbmClient};
pub use auth::{CachedToken, Credentials, IamAuth};
pub use error::{IbmError, IbmResult};
