//! # Taylor FFT
//!
//! A self-contained radix-2 Cooley-Tukey FFT whose twiddle factors come from
//! a built-in Taylor-series sine/cosine engine, so the transform never calls
//! the platform math library's trigonometric functions.
//!
//! ## Features
//!
//! - **FFT**: Recursive radix-2 decimation-in-time transform for
//!   power-of-two lengths, producing natural frequency-bin order
//! - **Trig**: Truncated Taylor-series sine/cosine with a tunable term count
//! - **Common**: Angle normalization and the factorial/power helpers that
//!   build the series terms
//! - **no_std Support**: Can be used in environments without the standard
//!   library

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export modules
pub mod common;
pub mod fft;
pub mod trig;

#[cfg(feature = "wasm")]
pub mod wasm_bindings;
