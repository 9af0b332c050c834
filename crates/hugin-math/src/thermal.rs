//! Thermal (Boltzmann) distributions over a fixed energy grid.

use ndarray::Array1;

use crate::error::{MathError, MathResult};

/// Evenly spaced energy grid from 0 to `max_energy` with `levels` points.
pub fn energy_grid(levels: usize, max_energy: f64) -> MathResult<Array1<f64>> {
    if levels == 0 {
        return Err(MathError::ZeroDimension);
    }
    Ok(Array1::linspace(0.0, max_energy, levels))
}

/// Boltzmann probability distribution `p(E) ∝ exp(−E/T)` over the grid.
///
/// The weights are normalized to sum to 1. Temperature must be
/// positive and finite.
pub fn boltzmann_distribution(
    energies: &Array1<f64>,
    temperature: f64,
) -> MathResult<Array1<f64>> {
    if energies.is_empty() {
        return Err(MathError::ZeroDimension);
    }
    if !(temperature.is_finite() && temperature > 0.0) {
        return Err(MathError::InvalidTemperature(temperature));
    }

    // Shift by the ground energy; the normalized result is unchanged
    // and the largest exponent is exactly 0, so nothing overflows.
    let ground = energies.iter().copied().fold(f64::INFINITY, f64::min);
    let weights = energies.mapv(|e| (-(e - ground) / temperature).exp());
    let partition: f64 = weights.sum();
    Ok(weights / partition)
}
