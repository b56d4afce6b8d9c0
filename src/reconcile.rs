//! Input validation and signal length reconciliation.
//!
//! Two signals enter a correlation with whatever lengths the caller has;
//! this module validates them, parses the method/window selectors and
//! brings both signals to a common length under a configurable policy.
//! A length mismatch is never an error: the applied modification is
//! reported back as a [`Diagnostic`] (and logged) so callers can detect
//! silent data alteration.

use log::warn;
use num_complex::Complex64;

use crate::error::{CorrError, CorrResult};

/// Correlation algorithm, parsed from the caller-supplied method string.
///
/// Parsing accepts `"fft"` and `"analytic"` case-insensitively, but the
/// analytic branch is selected only for the exact lower-case literal
/// `"analytic"`; any other accepted spelling (`"Analytic"`, `"FFT"`, ...)
/// selects the FFT branch. This mirrors the historical contract where
/// validation lower-cased the string while branch selection did not, and
/// keeps that quirk in one place: downstream code branches on this enum
/// and never re-inspects the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Frequency-domain correlation via the convolution theorem.
    Fft,
    /// Direct bilinear double-summation.
    Analytic,
}

impl Method {
    fn parse(raw: &str) -> CorrResult<Self> {
        match raw.to_lowercase().as_str() {
            "fft" | "analytic" => {}
            other => {
                return Err(CorrError::InvalidInput(format!(
                    "invalid method '{other}', supported methods are \"fft\" and \"analytic\""
                )))
            }
        }
        // Case-sensitive branch selection, see the enum docs.
        if raw == "analytic" {
            Ok(Method::Analytic)
        } else {
            Ok(Method::Fft)
        }
    }
}

/// Reconciliation window, parsed case-insensitively from the caller-supplied
/// window string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Resolve a length mismatch towards the shorter signal.
    Short,
    /// Resolve a length mismatch towards the longer signal.
    Long,
}

impl Window {
    fn parse(raw: &str) -> CorrResult<Self> {
        match raw.to_lowercase().as_str() {
            "short" => Ok(Window::Short),
            "long" => Ok(Window::Long),
            other => Err(CorrError::InvalidInput(format!(
                "invalid window '{other}', supported windows are \"short\" and \"long\""
            ))),
        }
    }
}

/// Non-fatal notice that reconciliation modified caller data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The shorter signal was zero-padded on the right.
    ShorterPadded,
    /// The longer signal's tail was dropped.
    TruncatedToShorter,
    /// Both signals were cyclically tiled up to the longer length.
    TiledToLonger,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Diagnostic::ShorterPadded => "shorter signal padded to match longer",
            Diagnostic::TruncatedToShorter => "signals truncated to shorter length",
            Diagnostic::TiledToLonger => "signals resized to longer length via cyclic tiling",
        };
        f.write_str(msg)
    }
}

/// Output of [`reconcile`]: two length-equal signals, the canonical parsed
/// selectors and any diagnostics produced along the way.
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub s1: Vec<Complex64>,
    pub s2: Vec<Complex64>,
    pub method: Method,
    pub window: Window,
    pub diagnostics: Vec<Diagnostic>,
}

/// Validates two signals and brings them to a common length.
///
/// When `s1` and `s2` already have equal lengths they pass through
/// unchanged. Otherwise the policy applies:
///
/// * `padded == true` — zero-pad the shorter signal on the right,
/// * `padded == false`, window `"short"` — truncate the longer signal,
/// * `padded == false`, window `"long"` — cyclically tile both signals up
///   to the longer length (`out[i] = orig[i % orig_len]`).
///
/// # Errors
///
/// [`CorrError::InvalidInput`] when either signal is empty or when
/// `method`/`window` is not one of the accepted strings (checked
/// case-insensitively). A length mismatch is never an error.
pub fn reconcile(
    s1: &[Complex64],
    s2: &[Complex64],
    method: &str,
    window: &str,
    padded: bool,
) -> CorrResult<Reconciled> {
    if s1.is_empty() || s2.is_empty() {
        return Err(CorrError::InvalidInput(
            "input signals must be non-empty".to_string(),
        ));
    }

    let method = Method::parse(method)?;
    let window = Window::parse(window)?;

    let mut diagnostics = Vec::new();
    let (s1, s2) = if s1.len() == s2.len() {
        (s1.to_vec(), s2.to_vec())
    } else if padded {
        diagnostics.push(Diagnostic::ShorterPadded);
        let target = s1.len().max(s2.len());
        (zero_pad(s1, target), zero_pad(s2, target))
    } else {
        match window {
            Window::Short => {
                diagnostics.push(Diagnostic::TruncatedToShorter);
                let target = s1.len().min(s2.len());
                (s1[..target].to_vec(), s2[..target].to_vec())
            }
            Window::Long => {
                diagnostics.push(Diagnostic::TiledToLonger);
                let target = s1.len().max(s2.len());
                (cyclic_tile(s1, target), cyclic_tile(s2, target))
            }
        }
    };

    for d in &diagnostics {
        warn!("{d}");
    }

    Ok(Reconciled {
        s1,
        s2,
        method,
        window,
        diagnostics,
    })
}

fn zero_pad(s: &[Complex64], target: usize) -> Vec<Complex64> {
    let mut out = s.to_vec();
    out.resize(target, Complex64::new(0.0, 0.0));
    out
}

fn cyclic_tile(s: &[Complex64], target: usize) -> Vec<Complex64> {
    (0..target).map(|i| s[i % s.len()]).collect()
}
