//! Cyclic cross-correlation engine.
//!
//! Computes the cyclic cross-correlation of two reconciled signals with one
//! of two algorithms and derives peak statistics from the result:
//!
//! * **FFT** — forward-transform both signals, multiply pointwise with the
//!   conjugate, inverse-transform (convolution theorem), O(n log n).
//! * **Analytic** — for every shift `t`, the product of two independent
//!   cyclic sums `Zk(t) * Zl(t)`, O(n²). This bilinear-product definition
//!   is not the textbook single-sum correlation and is kept exactly as
//!   defined.
//!
//! The two methods use different normalization divisors (`n` for FFT,
//! `n²` for analytic), so their magnitude scales are not comparable.

use num_complex::Complex64;
use rustfft::FftPlanner;

use crate::error::CorrResult;
use crate::reconcile::{reconcile, Diagnostic, Method};

/// Options for [`cyclic_corr`]. `Default` supplies the standard arguments:
/// FFT method, padding enabled, short window, normalized output.
///
/// `method` and `window` are matched case-insensitively against
/// `{"fft", "analytic"}` and `{"short", "long"}`; see
/// [`Method`](crate::reconcile::Method) for the analytic-selection rule.
#[derive(Debug, Clone)]
pub struct CorrOptions {
    pub method: String,
    pub window: String,
    pub padded: bool,
    pub normalized: bool,
}

impl Default for CorrOptions {
    fn default() -> Self {
        Self {
            method: "fft".to_string(),
            window: "short".to_string(),
            padded: true,
            normalized: true,
        }
    }
}

/// Correlation sequence plus summary statistics.
#[derive(Debug, Clone)]
pub struct CorrOutput {
    /// Cyclic cross-correlation, one entry per shift in `0..n`.
    pub z: Vec<Complex64>,
    /// Maximum of `|z|`.
    pub max_val: f64,
    /// Smallest index attaining `max_val`.
    pub t_max: usize,
    /// Minimum of `|z|`.
    pub min_val: f64,
    /// Reconciliation notices passed through from preprocessing.
    pub diagnostics: Vec<Diagnostic>,
}

/// Computes the cyclic cross-correlation of `s1` and `s2`.
///
/// Signals are validated and length-reconciled first (see
/// [`reconcile`](crate::reconcile::reconcile)); validation failures
/// propagate unchanged. The engine itself introduces no new errors.
///
/// # Example
///
/// ```
/// use cyclic_corr::{cyclic_corr, zadoff_chu, CorrOptions};
///
/// let s = zadoff_chu(1, 0, 7).unwrap();
/// let out = cyclic_corr(&s, &s, &CorrOptions::default()).unwrap();
/// assert_eq!(out.t_max, 0); // self-correlation peaks at zero lag
/// ```
pub fn cyclic_corr(
    s1: &[Complex64],
    s2: &[Complex64],
    opts: &CorrOptions,
) -> CorrResult<CorrOutput> {
    let rec = reconcile(s1, s2, &opts.method, &opts.window, opts.padded)?;

    // The common length is bound here, before any branch, so the analytic
    // path has it regardless of the `normalized` flag.
    let n = rec.s1.len();

    let mut z = match rec.method {
        Method::Analytic => analytic_corr(&rec.s1, &rec.s2),
        Method::Fft => fft_corr(&rec.s1, &rec.s2),
    };

    if opts.normalized {
        let divisor = match rec.method {
            Method::Analytic => (n * n) as f64,
            Method::Fft => n as f64,
        };
        for v in z.iter_mut() {
            *v /= divisor;
        }
    }

    let (max_val, t_max, min_val) = peak_stats(&z);

    Ok(CorrOutput {
        z,
        max_val,
        t_max,
        min_val,
        diagnostics: rec.diagnostics,
    })
}

/// Direct double-summation correlation: `Z[t] = Zk(t) * Zl(t)`.
fn analytic_corr(s1: &[Complex64], s2: &[Complex64]) -> Vec<Complex64> {
    let n = s1.len();
    (0..n)
        .map(|t| {
            let zk: Complex64 = (0..n).map(|k| s1[k] * s2[(k + t) % n].conj()).sum();
            let zl: Complex64 = (0..n).map(|l| s1[l].conj() * s2[(l + t) % n]).sum();
            zk * zl
        })
        .collect()
}

/// Frequency-domain correlation: `ifft(fft(s1) * conj(fft(s2)))`.
///
/// rustfft's inverse transform is unnormalized, so the result is scaled by
/// `1/n` to match the usual inverse-DFT convention.
fn fft_corr(s1: &[Complex64], s2: &[Complex64]) -> Vec<Complex64> {
    let n = s1.len();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    let ifft = planner.plan_fft_inverse(n);

    let mut x = s1.to_vec();
    fft.process(&mut x);
    let mut y = s2.to_vec();
    fft.process(&mut y);

    for (w, s) in x.iter_mut().zip(y.iter()) {
        *w *= s.conj();
    }
    ifft.process(&mut x);

    for v in x.iter_mut() {
        *v /= n as f64;
    }
    x
}

/// Scans `|z|` for its maximum (first occurrence wins) and minimum.
fn peak_stats(z: &[Complex64]) -> (f64, usize, f64) {
    let mut max_val = f64::NEG_INFINITY;
    let mut min_val = f64::INFINITY;
    let mut t_max = 0;

    for (i, v) in z.iter().enumerate() {
        let mag = v.norm();
        if mag > max_val {
            max_val = mag;
            t_max = i;
        }
        if mag < min_val {
            min_val = mag;
        }
    }

    (max_val, t_max, min_val)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn sig(xs: &[f64]) -> Vec<Complex64> {
        xs.iter().map(|&x| Complex64::new(x, 0.0)).collect()
    }

    fn opts(method: &str, normalized: bool) -> CorrOptions {
        CorrOptions {
            method: method.to_string(),
            normalized,
            ..CorrOptions::default()
        }
    }

    #[test]
    fn result_length_matches_common_length() {
        let a = sig(&[1.0, 2.0, 3.0]);
        let out = cyclic_corr(&a, &a, &CorrOptions::default()).unwrap();
        assert_eq!(out.z.len(), 3);
    }

    #[test]
    fn divisor_asymmetry_is_preserved() {
        // Unit impulse against itself, n = 2. The unnormalized value at
        // lag 0 is 1.0 for both methods; normalization divides the FFT
        // result by n and the analytic result by n^2.
        let a = sig(&[1.0, 0.0]);

        let fft = cyclic_corr(&a, &a, &opts("fft", true)).unwrap();
        assert!((fft.z[0].re - 0.5).abs() < EPSILON);
        assert!(fft.z[0].im.abs() < EPSILON);

        let analytic = cyclic_corr(&a, &a, &opts("analytic", true)).unwrap();
        assert!((analytic.z[0].re - 0.25).abs() < EPSILON);
        assert!(analytic.z[0].im.abs() < EPSILON);
    }

    #[test]
    fn unnormalized_methods_agree_on_impulse() {
        let a = sig(&[1.0, 0.0]);
        let fft = cyclic_corr(&a, &a, &opts("fft", false)).unwrap();
        let analytic = cyclic_corr(&a, &a, &opts("analytic", false)).unwrap();
        for (x, y) in fft.z.iter().zip(analytic.z.iter()) {
            assert!((x - y).norm() < EPSILON);
        }
    }

    #[test]
    fn analytic_output_is_squared_single_sum() {
        // Zl(t) = conj(Zk(t)), so Z[t] = |Zk(t)|^2 is real and
        // non-negative for every input.
        let a = sig(&[1.0, -2.0, 0.5, 3.0]);
        let b = sig(&[0.5, 1.5, -1.0, 2.0]);
        let out = cyclic_corr(&a, &b, &opts("analytic", false)).unwrap();
        for v in &out.z {
            assert!(v.im.abs() < EPSILON);
            assert!(v.re >= -EPSILON);
        }
    }

    #[test]
    fn peak_stats_first_occurrence_tie_break() {
        let z = sig(&[2.0, 5.0, 5.0, 1.0]);
        let (max_val, t_max, min_val) = peak_stats(&z);
        assert!((max_val - 5.0).abs() < EPSILON);
        assert_eq!(t_max, 1);
        assert!((min_val - 1.0).abs() < EPSILON);
    }

    #[test]
    fn fft_handles_non_power_of_two_lengths() {
        for n in [3usize, 6, 7, 139] {
            let a: Vec<Complex64> = (0..n).map(|k| Complex64::new(k as f64, 0.0)).collect();
            let out = cyclic_corr(&a, &a, &CorrOptions::default()).unwrap();
            assert_eq!(out.z.len(), n);
            assert_eq!(out.t_max, 0);
        }
    }
}
