//! FFT Demo
//!
//! Transforms the classic 8-sample test signal in place and prints the
//! frequency-domain coefficients per bin.

use num_complex::Complex;
use taylor_fft::fft::TaylorFft;

fn main() {
    println!("Taylor FFT Demo");
    println!("===============");

    // 8 real-valued samples, zero imaginary parts
    let samples = [1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0];
    let mut signal: Vec<Complex<f64>> =
        samples.iter().map(|&v| Complex::new(v, 0.0)).collect();

    println!("\nTime domain:");
    for (i, c) in signal.iter().enumerate() {
        println!("x[{}] = ({:.6}, {:.6})", i, c.re, c.im);
    }

    let mut fft = TaylorFft::new(signal.len());
    fft.transform(&mut signal);

    println!("\nFrequency domain:");
    for (i, c) in signal.iter().enumerate() {
        println!("X[{}] = ({:.6}, {:.6})", i, c.re, c.im);
    }
}
