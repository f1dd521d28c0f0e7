//! Fast Fourier Transform implementation
//!
//! This module provides a recursive radix-2 decimation-in-time transform
//! for power-of-two lengths. Twiddle factors are built with the crate's own
//! Taylor-series trigonometry, so no platform sine/cosine is involved.

#![allow(unused_imports)]

#[cfg(feature = "std")]
use std::{f64::consts::PI, vec::Vec};

#[cfg(not(feature = "std"))]
use core::f64::consts::PI;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use num_complex::Complex;
use num_traits::Float;
use num_traits::FromPrimitive;

use crate::trig::TaylorTrig;

/// Helper functions for the complex arithmetic in the merge step
mod helpers {
    use super::*;

    /// Complex multiplication with the products written out.
    ///
    /// Skips the NaN/infinity edge-case handling of the `Mul` operator,
    /// which also keeps the butterfly loop auto-vectorizable.
    #[inline]
    pub fn complex_mul<T: Float>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
        Complex::new(
            a.re * b.re - a.im * b.im,
            a.im * b.re + a.re * b.im,
        )
    }
}

/// A power-of-two FFT whose twiddle factors come from [`TaylorTrig`].
///
/// The plan owns its twiddle table and scratch buffers; `transform`
/// overwrites the caller's buffer with the frequency-domain coefficients
/// in natural bin order.
pub struct TaylorFft<T: Float> {
    trig: TaylorTrig,
    twiddles: Vec<Complex<T>>,
    input: Vec<Complex<T>>,
    working: Vec<Complex<T>>,
}

impl<T: Float + FromPrimitive> TaylorFft<T> {
    /// Create a plan for the given transform size, with the default
    /// Taylor term count.
    pub fn new(size: usize) -> Self {
        let mut result = Self {
            trig: TaylorTrig::new(),
            twiddles: Vec::new(),
            input: Vec::new(),
            working: Vec::new(),
        };
        result.resize(size);
        result
    }

    /// Create a plan with a specific Taylor term count for the twiddle
    /// factors.
    pub fn with_terms(size: usize, terms: usize) -> Self {
        let mut result = Self {
            trig: TaylorTrig::with_terms(terms),
            twiddles: Vec::new(),
            input: Vec::new(),
            working: Vec::new(),
        };
        result.resize(size);
        result
    }

    /// The transform size this plan is currently set up for.
    pub fn size(&self) -> usize {
        self.working.len()
    }

    /// Resize the plan to handle a different transform size.
    ///
    /// Rebuilds the twiddle table `(cos(-2πk/size), sin(-2πk/size))` for
    /// `k` in `[0, size/2)` through the Taylor engine.
    pub fn resize(&mut self, size: usize) {
        self.twiddles.clear();
        self.twiddles.reserve(size / 2);
        for k in 0..size / 2 {
            let angle = T::from_f64(-2.0 * PI).unwrap()
                * T::from_usize(k).unwrap()
                / T::from_usize(size).unwrap();
            self.twiddles
                .push(Complex::new(self.trig.cos(angle), self.trig.sin(angle)));
        }
        self.input
            .resize(size, Complex::new(T::zero(), T::zero()));
        self.working
            .resize(size, Complex::new(T::zero(), T::zero()));
    }

    /// Transform `signal` in place into its frequency-domain coefficients.
    ///
    /// Lengths of zero or one are returned unchanged. The length must be a
    /// power of two; for any other length the numeric results are
    /// unspecified (the recursive halving splits unevenly), though memory
    /// safety is unaffected. A plan sized for a different length resizes
    /// itself first.
    pub fn transform(&mut self, signal: &mut [Complex<T>]) {
        let size = signal.len();
        if size <= 1 {
            return;
        }
        if size != self.working.len() {
            self.resize(size);
        }

        self.input.clear();
        self.input.extend_from_slice(signal);
        fft_pass(&self.twiddles, size, 1, &self.input, signal, &mut self.working);
    }
}

// Recursive decimation-in-time pass over `stride` interleaved streams.
//
// All three buffers keep the full transform length at every level; the
// stride selects the stream. Bin `k` of stream `s` lands at
// `output[k * stride + s]`, so the top-level call (stride 1) leaves the
// spectrum in natural order. Output and working swap roles on each level
// of the recursion.
fn fft_pass<T: Float>(
    twiddles: &[Complex<T>],
    size: usize,
    stride: usize,
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    working: &mut [Complex<T>],
) {
    if size > 2 {
        // Half-size transforms of the even and odd elements of each stream
        fft_pass(twiddles, size / 2, stride * 2, input, working, output);
        combine2(twiddles, size, stride, working, output);
    } else {
        // 2-point transform per stream
        for s in 0..stride {
            let a = input[s];
            let b = input[s + stride];
            output[s] = a + b;
            output[s + stride] = a - b;
        }
    }
}

// Butterfly merge of the half-size spectra into a full spectrum.
fn combine2<T: Float>(
    twiddles: &[Complex<T>],
    size: usize,
    stride: usize,
    input: &[Complex<T>],
    output: &mut [Complex<T>],
) {
    let twiddle_step = twiddles.len() * 2 / size;

    for k in 0..size / 2 {
        let twiddle = twiddles[k * twiddle_step];

        for s in 0..stride {
            let even = input[2 * k * stride + s];
            let odd = input[(2 * k + 1) * stride + s];

            let t = helpers::complex_mul(twiddle, odd);
            output[k * stride + s] = even + t;
            output[(k + size / 2) * stride + s] = even - t;
        }
    }
}
