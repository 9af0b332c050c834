//! Simulator backend implementation.

use async_trait::async_trait;
use num_complex::Complex64;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

use hugin_hal::{
    Backend, BackendAvailability, Capabilities, Counts, ExecutionResult, HalError, HalResult, Job,
    JobId, JobStatus,
};
use hugin_ir::Circuit;

use crate::statevector::Statevector;

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local simulator backend.
///
/// Simulates quantum circuits with an exact statevector; supports
/// circuits up to ~20 qubits (limited by memory).
pub struct SimulatorBackend {
    /// Cached capabilities (sync introspection).
    capabilities: Capabilities,
    /// Active jobs.
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
    /// Maximum number of qubits supported.
    max_qubits: u32,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(20)
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            max_qubits,
        }
    }

    fn check_circuit(&self, circuit: &Circuit) -> HalResult<()> {
        if circuit.num_qubits() > self.max_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.max_qubits
            )));
        }
        Ok(())
    }

    /// Run the unitary part of a circuit and return the exact final
    /// statevector.
    ///
    /// This bypasses sampling entirely: the echo demo prints amplitudes,
    /// not counts.
    pub fn run_statevector(&self, circuit: &Circuit) -> HalResult<Vec<Complex64>> {
        self.check_circuit(circuit)?;

        let mut sv = Statevector::new(circuit.num_qubits());
        for inst in circuit.instructions() {
            sv.apply(inst);
        }
        Ok(sv.amplitudes().to_vec())
    }

    /// Run simulation synchronously.
    #[instrument(skip(self, circuit))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        debug!("Starting simulation: {} qubits, {} shots", num_qubits, shots);

        // The unitary part is shot-independent; evolve once and sample
        // the final distribution per shot.
        let mut sv = Statevector::new(num_qubits);
        for inst in circuit.instructions() {
            sv.apply(inst);
        }

        let mut counts = Counts::new();
        for _ in 0..shots {
            let outcome = sv.sample();
            counts.insert(sv.outcome_to_bitstring(outcome), 1);
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.capabilities.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn availability(&self) -> HalResult<BackendAvailability> {
        Ok(BackendAvailability::always_available())
    }

    #[instrument(skip(self, circuit))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        if shots == 0 {
            return Err(HalError::InvalidShots("shots must be at least 1".into()));
        }
        if shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{} shots exceeds simulator limit of {}",
                shots, self.capabilities.max_shots
            )));
        }
        self.check_circuit(circuit)?;

        let job_id = JobId::new(Uuid::new_v4().to_string());
        let job = Job::new(job_id.clone(), shots).with_backend("simulator");

        {
            let mut jobs = self
                .jobs
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            jobs.insert(job_id.0.clone(), SimJob { job, result: None });
        }

        debug!("Submitted job: {}", job_id);

        // Local simulation completes inline; the job is terminal by the
        // time submit() returns.
        let result = self.run_simulation(circuit, shots);

        {
            let mut jobs = self
                .jobs
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(sim_job) = jobs.get_mut(&job_id.0) {
                sim_job.result = Some(result);
                sim_job.job = sim_job.job.clone().with_status(JobStatus::Completed);
            }
        }

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .map(|sim_job| sim_job.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let sim_job = jobs
            .get(&job_id.0)
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))?;
        sim_job
            .result
            .clone()
            .ok_or_else(|| HalError::Backend(format!("job {} has no result yet", job_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_circuit() -> Circuit {
        let mut circuit = Circuit::with_size("echo", 1, 1);
        let q = circuit.qubit(0);
        circuit.x(q).unwrap().x(q).unwrap().measure_all().unwrap();
        circuit
    }

    #[tokio::test]
    async fn test_submit_and_wait() {
        let backend = SimulatorBackend::new();
        let circuit = echo_circuit();

        let job_id = backend.submit(&circuit, 100).await.unwrap();
        let status = backend.status(&job_id).await.unwrap();
        assert_eq!(status, JobStatus::Completed);

        let result = backend.wait(&job_id).await.unwrap();
        assert_eq!(result.shots, 100);
        // X·X = I: every shot lands on |0⟩.
        assert_eq!(result.counts.get("0"), 100);
    }

    #[tokio::test]
    async fn test_zero_shots_rejected() {
        let backend = SimulatorBackend::new();
        let err = backend.submit(&echo_circuit(), 0).await.unwrap_err();
        assert!(matches!(err, HalError::InvalidShots(_)));
    }

    #[tokio::test]
    async fn test_oversized_circuit_rejected() {
        let backend = SimulatorBackend::with_max_qubits(2);
        let circuit = Circuit::with_size("big", 3, 0);
        let err = backend.submit(&circuit, 10).await.unwrap_err();
        assert!(matches!(err, HalError::CircuitTooLarge(_)));
    }

    #[tokio::test]
    async fn test_unknown_job() {
        let backend = SimulatorBackend::new();
        let err = backend.status(&JobId::new("nope")).await.unwrap_err();
        assert!(matches!(err, HalError::JobNotFound(_)));
    }

    #[test]
    fn test_run_statevector_echo() {
        let backend = SimulatorBackend::new();
        let amplitudes = backend.run_statevector(&echo_circuit()).unwrap();

        assert_eq!(amplitudes.len(), 2);
        assert!((amplitudes[0] - Complex64::new(1.0, 0.0)).norm() < 1e-12);
        assert!(amplitudes[1].norm() < 1e-12);
    }

    #[tokio::test]
    async fn test_availability() {
        let backend = SimulatorBackend::new();
        let avail = backend.availability().await.unwrap();
        assert!(avail.is_available);
        assert_eq!(avail.queue_depth, Some(0));
    }
}
