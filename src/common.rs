//! Common helper functions used by the rest of the library
//!
//! This module provides the angle reduction and series-building primitives
//! (floating modulo, factorial, integer power) that the trig engine is made
//! of. None of them touch the platform math library.

#![allow(unused_imports)]

#[cfg(feature = "std")]
use std::f64::consts::PI;

#[cfg(not(feature = "std"))]
use core::f64::consts::PI;

use num_traits::Float;
use num_traits::FromPrimitive;

/// Floating-point modulo by repeated subtraction.
///
/// Returns the remainder of `x / y` in `[0, y)` for `y > 0`. A zero divisor
/// returns zero rather than NaN, unlike IEEE `fmod`.
///
/// Runs in O(|x| / y) steps, so large-magnitude `x` with a small `y` is
/// expensive; callers must not assume constant time.
pub fn float_mod<T: Float>(x: T, y: T) -> T {
    if y == T::zero() {
        return T::zero();
    }

    let mut result = x;
    while result >= y {
        result = result - y;
    }
    while result < T::zero() {
        result = result + y;
    }

    result
}

/// Reduces an arbitrary angle in radians to the range `[-π, π]`.
///
/// Always returns a finite value for finite input.
pub fn normalize_angle<T: Float + FromPrimitive>(x: T) -> T {
    let pi = T::from_f64(PI).unwrap();
    let two_pi = T::from_f64(2.0 * PI).unwrap();

    let mut x = float_mod(x, two_pi);
    if x < -pi {
        x = x + two_pi;
    } else if x > pi {
        x = x - two_pi;
    }
    x
}

/// Iterative factorial, computed in the float type.
///
/// `factorial(0)` is 1.
pub fn factorial<T: Float + FromPrimitive>(n: usize) -> T {
    let mut result = T::one();
    for i in 1..=n {
        result = result * T::from_usize(i).unwrap();
    }
    result
}

/// Iterative integer power: `base` multiplied together `exp` times.
///
/// `int_power(x, 0)` is 1 for any finite `x`. Exponents below zero also
/// return 1; callers in this crate only pass non-negative exponents.
pub fn int_power<T: Float>(base: T, exp: i32) -> T {
    let mut result = T::one();
    let mut exp = exp;
    while exp > 0 {
        result = result * base;
        exp -= 1;
    }
    result
}
