//! WebAssembly bindings for the FFT and trig functionality
//!
//! This module provides WASM-compatible wrappers using concrete `f64`
//! types instead of generics.

use wasm_bindgen::prelude::*;

use num_complex::Complex;

use crate::fft::TaylorFft;
use crate::trig::TaylorTrig;

/// FFT plan exposed to JavaScript, operating on split real/imag arrays
#[wasm_bindgen]
pub struct WasmTaylorFft {
    fft: TaylorFft<f64>,
}

#[wasm_bindgen]
impl WasmTaylorFft {
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> WasmTaylorFft {
        WasmTaylorFft {
            fft: TaylorFft::new(size),
        }
    }

    /// Create a plan with a specific Taylor term count.
    #[wasm_bindgen]
    pub fn with_terms(size: usize, terms: usize) -> WasmTaylorFft {
        WasmTaylorFft {
            fft: TaylorFft::with_terms(size, terms),
        }
    }

    /// Transform the signal in place. `real` and `imag` must have the same
    /// power-of-two length.
    #[wasm_bindgen]
    pub fn transform(&mut self, real: &mut [f64], imag: &mut [f64]) {
        let mut signal: Vec<Complex<f64>> = real
            .iter()
            .zip(imag.iter())
            .map(|(&r, &i)| Complex::new(r, i))
            .collect();

        self.fft.transform(&mut signal);

        for (i, &c) in signal.iter().enumerate() {
            real[i] = c.re;
            imag[i] = c.im;
        }
    }

    #[wasm_bindgen]
    pub fn size(&self) -> usize {
        self.fft.size()
    }
}

/// Taylor-series sine with the default term count
#[wasm_bindgen]
pub fn taylor_sin(x: f64) -> f64 {
    TaylorTrig::new().sin(x)
}

/// Taylor-series cosine with the default term count
#[wasm_bindgen]
pub fn taylor_cos(x: f64) -> f64 {
    TaylorTrig::new().cos(x)
}
