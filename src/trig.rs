//! Taylor-series sine and cosine
//!
//! This module approximates sine and cosine with a truncated Maclaurin
//! series evaluated after angle normalization, so the library stays
//! independent of the platform's trigonometric functions.

#![allow(unused_imports)]

#[cfg(feature = "std")]
use std::f64::consts::PI;

#[cfg(not(feature = "std"))]
use core::f64::consts::PI;

use num_traits::Float;
use num_traits::FromPrimitive;

use crate::common::{factorial, int_power, normalize_angle};

/// Default number of series terms.
///
/// Ten terms keep the error around 1e-9 over most of `[-π, π]`, rising to
/// a few 1e-9 at the interval edges. More terms tighten the edges at the
/// cost of extra factorial/power evaluations per call.
pub const DEFAULT_TERMS: usize = 10;

/// Sine/cosine evaluator with a fixed number of Taylor terms.
///
/// Angles are reduced to `[-π, π]` before the series is summed, which is
/// what keeps the truncated expansion convergent. No convergence check is
/// performed at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaylorTrig {
    terms: usize,
}

impl TaylorTrig {
    /// Create an evaluator with the default term count.
    pub fn new() -> Self {
        Self::with_terms(DEFAULT_TERMS)
    }

    /// Create an evaluator with a specific term count.
    pub fn with_terms(terms: usize) -> Self {
        Self { terms }
    }

    /// The number of series terms per evaluation.
    pub fn terms(&self) -> usize {
        self.terms
    }

    /// Sine of `x` (radians, any finite value).
    pub fn sin<T: Float + FromPrimitive>(&self, x: T) -> T {
        let x = normalize_angle(x);
        let mut sum = T::zero();

        for n in 0..self.terms {
            let k = 2 * n + 1;
            let term = int_power(-T::one(), n as i32) * int_power(x, k as i32)
                / factorial(k);
            sum = sum + term;
        }

        sum
    }

    /// Cosine of `x` (radians, any finite value).
    pub fn cos<T: Float + FromPrimitive>(&self, x: T) -> T {
        let x = normalize_angle(x);
        let mut sum = T::zero();

        for n in 0..self.terms {
            let k = 2 * n;
            let term = int_power(-T::one(), n as i32) * int_power(x, k as i32)
                / factorial(k);
            sum = sum + term;
        }

        sum
    }
}

impl Default for TaylorTrig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_sin_known_values() {
        let trig = TaylorTrig::new();
        assert!(trig.sin(0.0f64).abs() < 1e-12);
        assert!((trig.sin(PI / 4.0) - (PI / 4.0).sin()).abs() < 1e-9);
        assert!((trig.sin(PI / 2.0) - 1.0).abs() < 1e-9);
        assert!((trig.sin(-PI / 2.0) + 1.0).abs() < 1e-9);
        // Truncation error grows toward the edge of the reduced range.
        assert!(trig.sin(PI).abs() < 1e-8);
    }

    #[test]
    fn test_cos_known_values() {
        let trig = TaylorTrig::new();
        assert!((trig.cos(0.0f64) - 1.0).abs() < 1e-12);
        assert!((trig.cos(PI / 4.0) - (PI / 4.0).cos()).abs() < 1e-9);
        assert!(trig.cos(PI / 2.0).abs() < 1e-9);
        assert!((trig.cos(-PI / 2.0)).abs() < 1e-9);
        assert!((trig.cos(PI) + 1.0).abs() < 1e-8);
    }

    #[test]
    fn test_sweep_against_platform_trig() {
        let trig = TaylorTrig::new();
        let steps = 64;
        for i in 0..=steps {
            let x = -PI + 2.0 * PI * i as f64 / steps as f64;
            assert!(
                (trig.sin(x) - x.sin()).abs() < 1e-8,
                "sin({}) off by {}",
                x,
                (trig.sin(x) - x.sin()).abs()
            );
            assert!(
                (trig.cos(x) - x.cos()).abs() < 1e-8,
                "cos({}) off by {}",
                x,
                (trig.cos(x) - x.cos()).abs()
            );
        }
    }

    #[test]
    fn test_out_of_range_angles_are_reduced() {
        let trig = TaylorTrig::new();
        // sin and cos are 2π-periodic, so wrapped angles must agree.
        let x = 1.25f64;
        assert!((trig.sin(x + 2.0 * PI) - trig.sin(x)).abs() < 1e-9);
        assert!((trig.cos(x - 2.0 * PI) - trig.cos(x)).abs() < 1e-9);
    }

    #[test]
    fn test_term_count_tunes_accuracy() {
        let coarse = TaylorTrig::with_terms(4);
        let fine = TaylorTrig::with_terms(12);
        let x = 3.0f64;

        let coarse_err = (coarse.sin(x) - x.sin()).abs();
        let fine_err = (fine.sin(x) - x.sin()).abs();
        assert!(fine_err < coarse_err);
        assert!(fine_err < 1e-10);
    }

    #[test]
    fn test_f32_evaluation() {
        let trig = TaylorTrig::new();
        let x = 0.75f32;
        assert!((trig.sin(x) - x.sin()).abs() < 1e-5);
        assert!((trig.cos(x) - x.cos()).abs() < 1e-5);
    }
}
