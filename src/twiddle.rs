// src/twiddle.rs

use crate::common::{ConfigError, validate_size};
use crate::types::{Q8_8, TwiddleCoefficient};
use alloc::vec::Vec;
use core::f64::consts::PI;
use log::warn;
use num_complex::Complex64;

/// W_n^k = e^(-2*pi*i*k/n) in the float domain, before encoding.
pub(crate) fn unit_twiddle(k: usize, n: usize) -> Complex64 {
    let angle = -2.0 * PI * (k as f64) / (n as f64);
    let (sin, cos) = sin_cos(angle);
    Complex64::new(cos, sin)
}

/// Helper function agnostic to std/no_std for sin/cos
fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

/// Computes the rotation coefficients for a radix-2 network of size `n`.
///
/// Only n/2 coefficients are generated, as required for radix-2: entry `k`
/// holds W_n^k = cos(2*pi*k/n) - i*sin(2*pi*k/n) encoded in Q8.8. A part
/// whose scaled value falls outside the 16-bit range wraps and is reported
/// with a warning; unit-circle inputs never take that path, but the encoding
/// keeps the hardware's wraparound semantics for any input.
pub fn table(n: usize) -> Result<Vec<TwiddleCoefficient>, ConfigError> {
    validate_size(n)?;

    let mut coefficients = Vec::with_capacity(n / 2);
    for k in 0..n / 2 {
        let w = unit_twiddle(k, n);
        if !Q8_8::fits(w.re) || !Q8_8::fits(w.im) {
            warn!("twiddle {k} of {n} exceeds the Q8.8 range and wraps");
        }
        coefficients.push(TwiddleCoefficient::encode(w));
    }
    Ok(coefficients)
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;
