//! Cyclic cross-correlation of complex signals.
//!
//! Estimates the relative cyclic time-shift (lag) and synchronization
//! quality between two finite discrete signals. Three pieces:
//!
//! * [`zadoff_chu`] — deterministic constant-amplitude test sequences with
//!   near-ideal cyclic autocorrelation.
//! * [`reconcile`] — validation and policy-driven length matching of two
//!   arbitrary signals, with explicit diagnostics when caller data is
//!   silently altered.
//! * [`cyclic_corr`] — the correlation engine: an O(n log n) FFT method
//!   and an O(n²) analytic double-summation method, plus peak statistics.
//!
//! ```
//! use cyclic_corr::{cyclic_corr, zadoff_chu, CorrOptions};
//!
//! // A Zadoff-Chu sequence correlated against a cyclically shifted copy
//! // of itself peaks at the shift.
//! let n = 31;
//! let zc = zadoff_chu(1, 0, n).unwrap();
//! let shifted: Vec<_> = (0..n).map(|k| zc[(k + 5) % n]).collect();
//!
//! let out = cyclic_corr(&zc, &shifted, &CorrOptions::default()).unwrap();
//! assert_eq!(out.t_max, 5);
//! ```

pub mod correlate;
pub mod error;
pub mod reconcile;
pub mod zadoff_chu;

pub use correlate::{cyclic_corr, CorrOptions, CorrOutput};
pub use error::{CorrError, CorrResult};
pub use reconcile::{reconcile, Diagnostic, Method, Reconciled, Window};
pub use zadoff_chu::{real_to_complex, zadoff_chu};
