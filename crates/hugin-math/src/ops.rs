//! Operator algebra: unitarity and norm-preservation witnesses.
//!
//! Everything here is a dense computation over `Complex64` arrays.
//! The matrices involved are 2×2 literals; no decompositions, no
//! numerical linear algebra beyond matrix products.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::error::{MathError, MathResult};

/// The bit-flip (Pauli-X) operator as a 2×2 complex matrix.
pub fn bit_flip() -> Array2<Complex64> {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    ndarray::array![[zero, one], [one, zero]]
}

/// The identity operator on a `dim`-dimensional space.
pub fn identity(dim: usize) -> MathResult<Array2<Complex64>> {
    if dim == 0 {
        return Err(MathError::ZeroDimension);
    }
    Ok(Array2::eye(dim))
}

/// Conjugate transpose of a matrix.
pub fn dagger(m: &Array2<Complex64>) -> Array2<Complex64> {
    m.t().mapv(|z| z.conj())
}

/// The pair `(M·Mᴴ, Mᴴ·M)`.
///
/// For a unitary `M` both products equal the identity; callers print
/// them side by side as a unitarity witness.
pub fn unitarity_products(m: &Array2<Complex64>) -> (Array2<Complex64>, Array2<Complex64>) {
    let md = dagger(m);
    (m.dot(&md), md.dot(m))
}

/// The computational basis state `e_index` in a `dim`-dimensional space.
pub fn basis_state(dim: usize, index: usize) -> MathResult<Array1<Complex64>> {
    if dim == 0 {
        return Err(MathError::ZeroDimension);
    }
    if index >= dim {
        return Err(MathError::InvalidBasisIndex { index, dim });
    }
    let mut v = Array1::from_elem(dim, Complex64::new(0.0, 0.0));
    v[index] = Complex64::new(1.0, 0.0);
    Ok(v)
}

/// Euclidean norm of a state vector.
pub fn norm(v: &Array1<Complex64>) -> f64 {
    v.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt()
}

/// Apply an operator to a state vector.
pub fn apply(m: &Array2<Complex64>, v: &Array1<Complex64>) -> Array1<Complex64> {
    m.dot(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-12
    }

    #[test]
    fn test_bit_flip_is_unitary_exactly() {
        // Integer entries: both products equal I with no rounding at all.
        let x = bit_flip();
        let (left, right) = unitarity_products(&x);
        let eye = identity(2).unwrap();
        assert_eq!(left, eye);
        assert_eq!(right, eye);
    }

    #[test]
    fn test_norm_preserved_exactly() {
        let x = bit_flip();
        let e0 = basis_state(2, 0).unwrap();
        assert_eq!(norm(&e0), 1.0);
        assert_eq!(norm(&apply(&x, &e0)), 1.0);
    }

    #[test]
    fn test_double_flip_recovers_basis_state() {
        let x = bit_flip();
        let e0 = basis_state(2, 0).unwrap();
        let twice = apply(&x, &apply(&x, &e0));
        assert!(approx_eq(twice[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(twice[1], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_dagger_of_phase_matrix() {
        let i = Complex64::new(0.0, 1.0);
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        // S gate: diag(1, i); dagger is diag(1, -i).
        let s = ndarray::array![[one, zero], [zero, i]];
        let sd = dagger(&s);
        assert_eq!(sd[[0, 0]], one);
        assert_eq!(sd[[1, 1]], -i);
    }

    #[test]
    fn test_basis_state_bounds() {
        assert!(matches!(
            basis_state(2, 2),
            Err(MathError::InvalidBasisIndex { index: 2, dim: 2 })
        ));
        assert_eq!(basis_state(0, 0), Err(MathError::ZeroDimension));
    }
}
