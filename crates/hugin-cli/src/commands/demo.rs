//! Concept demonstrator: quantum mechanics in small matrices.
//!
//! Five independent demonstrations, each a handful of closed-form
//! computations printed (or charted) immediately. Nothing passes data
//! between them.

use anyhow::Result;
use ndarray::Array2;
use num_complex::Complex64;

use hugin_adapter_sim::SimulatorBackend;
use hugin_hal::Backend;
use hugin_ir::Circuit;
use hugin_math::{density, ops, thermal};

use super::chart::{self, Series};
use super::common::{print_header, print_result, print_section, print_success};

/// Visibility values swept by the mixing demo.
const VISIBILITIES: [f64; 4] = [1.0, 0.8, 0.6, 0.2];

/// Temperatures of the three thermal curves, with their legend labels.
const TEMPERATURES: [(f64, &str); 3] = [(0.5, "T₁"), (1.0, "T₂"), (2.0, "T₃")];

/// Points in the thermal energy grid.
const ENERGY_LEVELS: usize = 40;

/// Top of the energy grid.
const MAX_ENERGY: f64 = 4.0;

/// Shots for the echo circuit.
const ECHO_SHOTS: u32 = 1024;

/// Execute the demo command.
pub async fn execute(which: &str) -> Result<()> {
    print_header("Quantum Concepts in Small Matrices");

    match which {
        "unitarity" => demo_unitarity(),
        "norm" => demo_norm()?,
        "echo" => demo_echo().await?,
        "mixing" => demo_mixing()?,
        "thermal" => demo_thermal()?,
        "all" => {
            demo_unitarity();
            demo_norm()?;
            demo_echo().await?;
            demo_mixing()?;
            demo_thermal()?;
        }
        other => {
            anyhow::bail!(
                "Unknown demo: '{other}'. Use unitarity, norm, echo, mixing, thermal, or all."
            );
        }
    }

    println!();
    print_success("Demo complete!");
    Ok(())
}

// ============================================================================
// Unitarity
// ============================================================================

fn demo_unitarity() {
    print_section("Unitarity: M·Mᴴ = Mᴴ·M = I");

    println!("  A unitary operator's conjugate transpose is its inverse,");
    println!("  so evolution under it is reversible. For the bit-flip");
    println!("  operator, verify by inspection that both products below");
    println!("  are the identity.");

    let m = ops::bit_flip();
    println!();
    println!("  M:");
    print_complex_matrix(&m);

    let (left, right) = ops::unitarity_products(&m);
    println!("  M·Mᴴ:");
    print_complex_matrix(&left);
    println!("  Mᴴ·M:");
    print_complex_matrix(&right);
}

// ============================================================================
// Norm preservation
// ============================================================================

fn demo_norm() -> Result<()> {
    print_section("Norm preservation");

    let m = ops::bit_flip();
    let e0 = ops::basis_state(2, 0)?;
    let flipped = ops::apply(&m, &e0);

    print_result("‖ψ‖ before", format!("{:.6}", ops::norm(&e0)));
    print_result("‖Mψ‖ after", format!("{:.6}", ops::norm(&flipped)));
    println!("  Total probability is conserved: the state just moved");
    println!("  from |0⟩ to |1⟩.");
    Ok(())
}

// ============================================================================
// Two-gate echo
// ============================================================================

async fn demo_echo() -> Result<()> {
    print_section("Two-gate echo on the local simulator");

    let mut circuit = Circuit::with_size("echo", 1, 1);
    let q = circuit.qubit(0);
    circuit.x(q)?.x(q)?.measure_all()?;

    print_result("Qubits", circuit.num_qubits());
    print_result("Depth", circuit.depth());
    print_result("Gate count", circuit.num_ops());

    let backend = SimulatorBackend::new();
    let caps = backend.capabilities();
    let avail = backend.availability().await?;
    print_result(
        "Backend",
        format!(
            "{} ({} qubits, {}, queue depth {})",
            backend.name(),
            caps.num_qubits,
            if caps.is_simulator {
                "simulator"
            } else {
                "hardware"
            },
            avail.queue_depth.unwrap_or(0)
        ),
    );

    let amplitudes = backend.run_statevector(&circuit)?;
    println!();
    println!("  Final statevector:");
    for (i, amp) in amplitudes.iter().enumerate() {
        println!("    |{i}⟩  {}", format_complex(*amp));
    }

    let job_id = backend.submit(&circuit, ECHO_SHOTS).await?;
    let result = backend.wait(&job_id).await?;

    println!();
    let mut outcomes: Vec<_> = result.counts.iter().collect();
    outcomes.sort();
    for (bitstring, count) in outcomes {
        print_result(
            &format!("counts[{bitstring}]"),
            format!("{count}/{}", result.shots),
        );
    }
    println!("  Two bit-flips compose to the identity: |0⟩ is recovered.");
    Ok(())
}

// ============================================================================
// Visibility mixing
// ============================================================================

fn demo_mixing() -> Result<()> {
    print_section("Decoherence: visibility mixing of a Bell pair");

    println!("  ρ(v) = v·|ψ⟩⟨ψ| + (1−v)·I/4   with |ψ⟩ = (|00⟩+|11⟩)/√2");

    let psi = density::bell_pair();
    for v in VISIBILITIES {
        let rho = density::mixed_state(&psi, v)?;
        println!();
        print_result("Visibility", format!("{v:.1}"));
        print_result("Trace", format!("{:.3}", density::trace(&rho).re));
        print_real_matrix(&rho);
    }

    println!();
    println!("  As v falls the off-diagonal coherences fade while the");
    println!("  diagonal approaches the uniform mixture.");
    Ok(())
}

// ============================================================================
// Thermal distributions
// ============================================================================

fn demo_thermal() -> Result<()> {
    print_section("Thermal states: Boltzmann distributions");

    let grid = thermal::energy_grid(ENERGY_LEVELS, MAX_ENERGY)?;

    let mut series = Vec::with_capacity(TEMPERATURES.len());
    for (t, label) in TEMPERATURES {
        let p = thermal::boltzmann_distribution(&grid, t)?;
        print_result(
            &format!("{label} = {t:.1}"),
            format!("ground-state weight {:.4}", p[0]),
        );
        series.push(Series {
            label: label.to_string(),
            points: grid.iter().zip(p.iter()).map(|(&e, &w)| (e, w)).collect(),
        });
    }

    println!();
    chart::render_overlaid("p(E) ∝ exp(−E/T)", &series)?;
    println!("  Hotter ensembles spread probability toward higher energies;");
    println!("  in the infinite-temperature limit the curve is flat.");
    Ok(())
}

// ============================================================================
// Matrix formatting helpers
// ============================================================================

fn format_complex(z: Complex64) -> String {
    format!("{:>7.4}{:+.4}i", z.re, z.im)
}

fn print_complex_matrix(m: &Array2<Complex64>) {
    for row in m.outer_iter() {
        let cells: Vec<String> = row.iter().map(|z| format_complex(*z)).collect();
        println!("    [ {} ]", cells.join("  "));
    }
    println!();
}

/// Print only the real parts.
///
/// Every matrix in the mixing demo is real (the Bell projector has no
/// imaginary components), so the imaginary columns would be noise.
fn print_real_matrix(m: &Array2<Complex64>) {
    for row in m.outer_iter() {
        let cells: Vec<String> = row.iter().map(|z| format!("{:>6.3}", z.re)).collect();
        println!("    [ {} ]", cells.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_complex_alignment() {
        let s = format_complex(Complex64::new(1.0, 0.0));
        assert_eq!(s, " 1.0000+0.0000i");
        let s = format_complex(Complex64::new(-0.5, -0.25));
        assert_eq!(s, "-0.5000-0.2500i");
    }

    #[test]
    fn test_echo_circuit_shape() {
        let mut circuit = Circuit::with_size("echo", 1, 1);
        let q = circuit.qubit(0);
        circuit.x(q).unwrap().x(q).unwrap().measure_all().unwrap();

        assert_eq!(circuit.num_qubits(), 1);
        assert_eq!(circuit.depth(), 2);
        assert_eq!(circuit.num_ops(), 2);
    }
}
