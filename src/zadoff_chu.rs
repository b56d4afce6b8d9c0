//! Zadoff-Chu sequence generation.
//!
//! Zadoff-Chu (ZC) sequences are constant-amplitude complex sequences with
//! near-ideal periodic autocorrelation, used for timing synchronization in
//! LTE/5G (PRACH, PSS) and as reference signals for correlation tests.
//!
//! For root `r`, cyclic shift `q` and length `N`:
//!
//! ```text
//! ZC[k] = exp(-j * (pi/N) * r * ((k % N) + N % 2 + 2*(q % N)) * (k % N))
//! ```
//!
//! The `N % 2` term selects the odd/even-length root formula; the sequence
//! is periodic in `q` with period `N`.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{CorrError, CorrResult};

/// Generates a Zadoff-Chu sequence of length `length`.
///
/// # Arguments
///
/// * `root` - Root index `r`, must satisfy `1 <= root <= length`
/// * `shift` - Cyclic shift `q` (taken modulo `length`)
/// * `length` - Sequence length `N`, must be >= 1 (prime lengths give the
///   best cross-correlation properties between different roots)
///
/// # Errors
///
/// Returns [`CorrError::InvalidParameter`] naming the violated constraint.
///
/// # Example
///
/// ```
/// use cyclic_corr::zadoff_chu;
///
/// let zc = zadoff_chu(1, 0, 7).unwrap();
/// assert_eq!(zc.len(), 7);
/// // Constant amplitude
/// for x in &zc {
///     assert!((x.norm() - 1.0).abs() < 1e-12);
/// }
/// ```
pub fn zadoff_chu(root: usize, shift: usize, length: usize) -> CorrResult<Vec<Complex64>> {
    if length < 1 {
        return Err(CorrError::InvalidParameter(
            "length must be >= 1".to_string(),
        ));
    }
    if root < 1 || root > length {
        return Err(CorrError::InvalidParameter(format!(
            "root must satisfy 1 <= root <= length, got root={root} for length={length}"
        )));
    }

    let n = length as f64;
    let cf = (length % 2) as f64;
    let q = (shift % length) as f64;
    let r = root as f64;

    Ok((0..length)
        .map(|k| {
            let k = (k % length) as f64;
            let exponent = -(PI / n) * r * (k + cf + 2.0 * q) * k;
            Complex64::new(0.0, exponent).exp()
        })
        .collect())
}

/// Lifts a real-valued signal into the complex plane (zero imaginary part).
pub fn real_to_complex(xs: &[f64]) -> Vec<Complex64> {
    xs.iter().map(|&x| Complex64::new(x, 0.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn first_sample_is_one() {
        let zc = zadoff_chu(3, 0, 11).unwrap();
        assert!((zc[0].re - 1.0).abs() < EPSILON);
        assert!(zc[0].im.abs() < EPSILON);
    }

    #[test]
    fn root_zero_rejected() {
        let err = zadoff_chu(0, 0, 5).unwrap_err();
        assert!(matches!(err, CorrError::InvalidParameter(_)));
    }

    #[test]
    fn root_above_length_rejected() {
        let err = zadoff_chu(6, 0, 5).unwrap_err();
        assert!(matches!(err, CorrError::InvalidParameter(_)));
    }

    #[test]
    fn zero_length_rejected() {
        let err = zadoff_chu(1, 0, 0).unwrap_err();
        assert!(matches!(err, CorrError::InvalidParameter(_)));
    }

    #[test]
    fn length_one() {
        let zc = zadoff_chu(1, 0, 1).unwrap();
        assert_eq!(zc.len(), 1);
        assert!((zc[0].re - 1.0).abs() < EPSILON);
    }

    #[test]
    fn shift_is_periodic_in_length() {
        let n = 13;
        let a = zadoff_chu(3, 4, n).unwrap();
        let b = zadoff_chu(3, 4 + n, n).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).norm() < EPSILON);
        }
    }

    #[test]
    fn real_to_complex_zero_imag() {
        let xs = real_to_complex(&[1.0, -2.5, 0.0]);
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[1], Complex64::new(-2.5, 0.0));
    }
}
