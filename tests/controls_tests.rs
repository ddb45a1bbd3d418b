// Host-side tests for user parameters, mode parsing, status text and colors.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod viz {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod mode {
        include!("../src/core/mode.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
    pub mod status {
        include!("../src/core/status.rs");
    }
}

use viz::color::hsl_to_rgb;
use viz::mode::{UnknownMode, VizMode};
use viz::params::{raw_or_default, UserParams};
use viz::status::{SourceState, StartDecision, Status};

fn approx(a: [f32; 3], b: [f32; 3]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
}

#[test]
fn default_params_match_control_defaults() {
    let p = UserParams::default();
    assert_eq!(p.sensitivity, 1.0);
    assert!((p.rotation_speed - 0.03).abs() < 1e-7);
    assert_eq!(UserParams::from_raw("100", "30"), p);
}

#[test]
fn raw_values_scale_into_effective_units() {
    let p = UserParams::from_raw("250", "50");
    assert_eq!(p.sensitivity, 2.5);
    assert!((p.rotation_speed - 0.05).abs() < 1e-7);
    let p = UserParams::from_raw(" 10 ", "1");
    assert_eq!(p.sensitivity, 0.1);
    assert!((p.rotation_speed - 0.001).abs() < 1e-7);
}

#[test]
fn unusable_raw_values_fall_back_independently() {
    for bad in ["", "abc", "0", "NaN", "inf", "-inf"] {
        assert_eq!(raw_or_default(bad, 30.0), 30.0, "{bad:?}");
    }
    let p = UserParams::from_raw("", "80");
    assert_eq!(p.sensitivity, 1.0);
    assert!((p.rotation_speed - 0.08).abs() < 1e-7);
    // negative values are taken as-is
    assert_eq!(raw_or_default("-100", 100.0), -100.0);
}

#[test]
fn modes_parse_from_select_values() {
    for mode in VizMode::ALL {
        assert_eq!(mode.as_str().parse::<VizMode>(), Ok(mode));
        assert_eq!(VizMode::from_select_value(mode.as_str()), mode);
    }
    assert_eq!(" Sphere ".parse::<VizMode>(), Ok(VizMode::Sphere));
    assert_eq!(
        "tunnel".parse::<VizMode>(),
        Err(UnknownMode("tunnel".to_string()))
    );
    assert_eq!(VizMode::from_select_value("tunnel"), VizMode::Bars);
    assert_eq!(VizMode::default(), VizMode::Bars);
    assert_eq!(VizMode::Particles.to_string(), "Particles");
}

#[test]
fn status_lines_and_recording_flag() {
    assert_eq!(Status::Ready.text(), "Ready: click Start");
    assert!(!Status::Ready.recording());
    assert!(Status::Listening.recording());
    assert!(Status::Simulating.recording());
    assert!(Status::AlreadyRunning.recording());
    assert_eq!(Status::Mode(VizMode::Wave).text(), "Mode: Wave");
    assert!(!Status::Mode(VizMode::Wave).recording());
    assert!(Status::Simulating.text().contains("simulating"));
}

#[test]
fn start_is_idempotent() {
    let mut state = SourceState::default();
    assert!(!state.is_active());
    assert_eq!(state.begin_start(), StartDecision::Begin);
    assert_eq!(state, SourceState::Acquiring);
    // a second click while the permission prompt is open
    assert_eq!(state.begin_start(), StartDecision::AlreadyRunning);
    assert!(!state.is_active());
    assert_eq!(state.settled_status(), None);

    for settled in [SourceState::Live, SourceState::Simulated] {
        let mut s = settled;
        assert!(s.is_active());
        assert_eq!(s.begin_start(), StartDecision::AlreadyRunning);
        assert_eq!(s, settled);
    }
    assert_eq!(SourceState::Live.settled_status(), Some(Status::Listening));
    assert_eq!(
        SourceState::Simulated.settled_status(),
        Some(Status::Simulating)
    );
}

#[test]
fn ready_status_only_while_idle() {
    let mut state = SourceState::default();
    assert_eq!(state.ready_status(), Some(Status::Ready));
    // Start pressed before startup finished
    state.begin_start();
    assert_eq!(state.ready_status(), None);
    assert_eq!(SourceState::Live.ready_status(), None);
    assert_eq!(SourceState::Simulated.ready_status(), None);
}

#[test]
fn hsl_primaries_and_grays() {
    assert!(approx(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
    assert!(approx(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
    assert!(approx(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0.0, 0.0, 1.0]));
    assert!(approx(hsl_to_rgb(0.3, 0.0, 0.25), [0.25, 0.25, 0.25]));
    assert!(approx(hsl_to_rgb(0.5, 1.0, 1.0), [1.0, 1.0, 1.0]));
}

#[test]
fn hsl_hue_wraps_around() {
    assert!(approx(hsl_to_rgb(1.25, 0.9, 0.5), hsl_to_rgb(0.25, 0.9, 0.5)));
    assert!(approx(hsl_to_rgb(-0.25, 0.9, 0.5), hsl_to_rgb(0.75, 0.9, 0.5)));
    for i in 0..100 {
        let rgb = hsl_to_rgb(i as f32 * 0.037, 0.85, 0.5);
        assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)));
    }
}
