//! Density matrices and visibility mixing.
//!
//! A density matrix is Hermitian, trace-1, and positive semidefinite.
//! [`mixed_state`] interpolates between a pure state's projector and
//! the maximally mixed state:
//!
//! ```text
//!   ρ(v) = v·|ψ⟩⟨ψ| + (1−v)·I/d,   v ∈ [0, 1]
//! ```
//!
//! At `v = 1` the state is pure; at `v = 0` all coherence is gone and
//! only uniform classical noise remains.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::error::{MathError, MathResult};
use crate::ops::norm;

/// Tolerance for the normalization check on input states.
const NORM_TOL: f64 = 1e-9;

/// Outer product `|ψ⟩⟨ψ|` of a state vector with itself.
pub fn outer_product(psi: &Array1<Complex64>) -> Array2<Complex64> {
    let dim = psi.len();
    Array2::from_shape_fn((dim, dim), |(i, j)| psi[i] * psi[j].conj())
}

/// The maximally mixed state `I/d` on a `dim`-dimensional space.
pub fn maximally_mixed(dim: usize) -> MathResult<Array2<Complex64>> {
    if dim == 0 {
        return Err(MathError::ZeroDimension);
    }
    let eye: Array2<Complex64> = Array2::eye(dim);
    Ok(eye / Complex64::new(dim as f64, 0.0))
}

/// The Bell pair `(|00⟩ + |11⟩)/√2` as a 4-component state vector.
pub fn bell_pair() -> Array1<Complex64> {
    let amp = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
    let zero = Complex64::new(0.0, 0.0);
    ndarray::array![amp, zero, zero, amp]
}

/// Mix a pure state with uniform noise at the given visibility.
///
/// Returns `v·|ψ⟩⟨ψ| + (1−v)·I/d`. The input must be normalized and
/// `visibility` must lie in `[0, 1]`.
pub fn mixed_state(psi: &Array1<Complex64>, visibility: f64) -> MathResult<Array2<Complex64>> {
    if !(0.0..=1.0).contains(&visibility) || !visibility.is_finite() {
        return Err(MathError::InvalidVisibility(visibility));
    }
    let psi_norm = norm(psi);
    if (psi_norm - 1.0).abs() > NORM_TOL {
        return Err(MathError::NotNormalized { norm: psi_norm });
    }

    let pure = outer_product(psi);
    let noise = maximally_mixed(psi.len())?;
    let v = Complex64::new(visibility, 0.0);
    let w = Complex64::new(1.0 - visibility, 0.0);
    Ok(pure * v + noise * w)
}

/// Trace of a square matrix.
pub fn trace(rho: &Array2<Complex64>) -> Complex64 {
    rho.diag().sum()
}

/// Whether a matrix equals its own conjugate transpose within `tol`.
pub fn is_hermitian(rho: &Array2<Complex64>, tol: f64) -> bool {
    let (rows, cols) = rho.dim();
    if rows != cols {
        return false;
    }
    for i in 0..rows {
        for j in 0..cols {
            if (rho[[i, j]] - rho[[j, i]].conj()).norm() > tol {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_visibility_is_pure_projector() {
        let psi = bell_pair();
        let rho = mixed_state(&psi, 1.0).unwrap();
        let pure = outer_product(&psi);
        // v = 1.0: the noise term has exactly zero weight.
        for (a, b) in rho.iter().zip(pure.iter()) {
            assert!((a - b).norm() < 1e-15);
        }
    }

    #[test]
    fn test_zero_visibility_is_uniform_noise() {
        // Independent of the pure state, v = 0.0 must give I/4 exactly.
        let psi = bell_pair();
        let rho = mixed_state(&psi, 0.0).unwrap();
        let noise = maximally_mixed(4).unwrap();
        for (a, b) in rho.iter().zip(noise.iter()) {
            assert!((a - b).norm() < 1e-15);
        }

        let e2 = crate::ops::basis_state(4, 2).unwrap();
        let rho2 = mixed_state(&e2, 0.0).unwrap();
        for (a, b) in rho2.iter().zip(noise.iter()) {
            assert!((a - b).norm() < 1e-15);
        }
    }

    #[test]
    fn test_trace_one_at_representative_visibilities() {
        let psi = bell_pair();
        for v in [1.0, 0.8, 0.6, 0.2] {
            let rho = mixed_state(&psi, v).unwrap();
            let tr = trace(&rho);
            assert!((tr.re - 1.0).abs() < 1e-12);
            assert!(tr.im.abs() < 1e-12);
            assert!(is_hermitian(&rho, 1e-12));
        }
    }

    #[test]
    fn test_visibility_domain() {
        let psi = bell_pair();
        assert!(matches!(
            mixed_state(&psi, 1.5),
            Err(MathError::InvalidVisibility(_))
        ));
        assert!(matches!(
            mixed_state(&psi, -0.1),
            Err(MathError::InvalidVisibility(_))
        ));
        assert!(matches!(
            mixed_state(&psi, f64::NAN),
            Err(MathError::InvalidVisibility(_))
        ));
    }

    #[test]
    fn test_unnormalized_state_rejected() {
        let psi = bell_pair() * Complex64::new(2.0, 0.0);
        assert!(matches!(
            mixed_state(&psi, 0.5),
            Err(MathError::NotNormalized { .. })
        ));
    }

    #[test]
    fn test_bell_projector_entries() {
        // ⟨00|ρ|11⟩ coherence of the Bell projector is exactly 1/2.
        let rho = outer_product(&bell_pair());
        assert!((rho[[0, 0]].re - 0.5).abs() < 1e-15);
        assert!((rho[[0, 3]].re - 0.5).abs() < 1e-15);
        assert!((rho[[3, 0]].re - 0.5).abs() < 1e-15);
        assert!((rho[[1, 1]].norm()) < 1e-15);
    }

    proptest! {
        #[test]
        fn prop_mixed_state_is_valid_density_matrix(v in 0.0f64..=1.0) {
            let rho = mixed_state(&bell_pair(), v).unwrap();
            let tr = trace(&rho);
            prop_assert!((tr.re - 1.0).abs() < 1e-10);
            prop_assert!(tr.im.abs() < 1e-10);
            prop_assert!(is_hermitian(&rho, 1e-10));
        }
    }
}
