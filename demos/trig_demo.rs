//! Trig Demo
//!
//! Compares the Taylor-series sine/cosine against the platform math
//! library across [-π, π] at a few term counts.

use std::f64::consts::PI;
use taylor_fft::trig::TaylorTrig;

fn main() {
    println!("Taylor Trig Demo");
    println!("================");

    for &terms in &[4, 6, 10, 14] {
        let trig = TaylorTrig::with_terms(terms);

        let mut max_sin_error: f64 = 0.0;
        let mut max_cos_error: f64 = 0.0;
        let steps = 256;
        for i in 0..=steps {
            let x = -PI + 2.0 * PI * i as f64 / steps as f64;
            max_sin_error = max_sin_error.max((trig.sin(x) - x.sin()).abs());
            max_cos_error = max_cos_error.max((trig.cos(x) - x.cos()).abs());
        }

        println!(
            "{:2} terms: max sine error {:.3e}, max cosine error {:.3e}",
            terms, max_sin_error, max_cos_error
        );
    }

    let trig = TaylorTrig::new();
    println!("\nSample values (default terms):");
    for &x in &[0.0, PI / 4.0, PI / 2.0, PI] {
        println!(
            "x = {:.6}: sin = {:.9} (libm {:.9}), cos = {:.9} (libm {:.9})",
            x,
            trig.sin(x),
            x.sin(),
            trig.cos(x),
            x.cos()
        );
    }
}
