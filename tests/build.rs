//! Build and Feature Tests
//!
//! Tests that verify the crate builds with the expected feature set and
//! exposes its public surface.

#[test]
fn test_build_configuration() {
    #[cfg(feature = "std")]
    assert!(true, "std feature enabled");

    let version = env!("CARGO_PKG_VERSION");
    assert!(!version.is_empty());
    assert!(version.split('.').count() >= 2);
}

#[test]
fn test_public_surface() {
    use taylor_fft::common;
    use taylor_fft::fft::TaylorFft;
    use taylor_fft::trig::{TaylorTrig, DEFAULT_TERMS};

    let trig = TaylorTrig::new();
    assert_eq!(trig.terms(), DEFAULT_TERMS);

    let fft = TaylorFft::<f64>::new(8);
    assert_eq!(fft.size(), 8);

    assert_eq!(common::factorial::<f64>(0), 1.0);
    assert_eq!(common::int_power(2.0f64, 10), 1024.0);
}
