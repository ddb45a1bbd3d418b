// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn sampling_fits_the_analyser() {
    // frequencyBinCount is half the FFT size
    assert_eq!(ANALYSER_FFT_SIZE as usize / 2, FREQ_BINS);
    assert!(BAR_COUNT <= FREQ_BINS);
    assert!(WAVE_POINTS <= FREQ_BINS);
    assert_eq!(FREQ_BINS % BAR_COUNT, 0);
    assert!(SCRIPT_PROCESSOR_BUFFER.is_power_of_two());
    assert!(SIMULATED_INTERVAL_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visual_constants_are_within_reasonable_bounds() {
    assert!(BAR_MIN_HEIGHT > 0.0 && BAR_MIN_HEIGHT < BAR_HEIGHT_SCALE);
    assert!(BAR_HUE_MAX > 0.0 && BAR_HUE_MAX < 1.0);
    assert!(PARTICLE_MIN_RADIUS > 0.0 && PARTICLE_SHELL_DEPTH > 0.0);
    assert!(SPHERE_RADIUS > 0.0);
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY <= 1.0);
    assert!(SPHERE_WIRE_OPACITY > 0.0 && SPHERE_WIRE_OPACITY <= 1.0);
    assert!(FOG_DENSITY > 0.0);
    for c in FOG_COLOR.iter().chain(AMBIENT_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frames_the_scene() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    let eye = glam::Vec3::from(CAMERA_EYE);
    // the outermost particle shell is in view without clipping
    assert!(eye.length() > PARTICLE_MIN_RADIUS + PARTICLE_SHELL_DEPTH);
    assert!(eye.length() < CAMERA_FAR);
    assert_eq!(DEFAULT_SENSITIVITY / SENSITIVITY_DIVISOR, 1.0);
}
