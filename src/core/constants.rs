// Shared visualization tuning constants. Platform independent so the host
// tests can include this file directly.

// Sample frames
pub const FREQ_BINS: usize = 256; // length of both frequency and time arrays
pub const BYTE_MAX: f32 = 255.0;
pub const TIME_CENTER: f32 = 128.0; // unsigned waveform midpoint

// Bars
pub const BAR_COUNT: usize = 64;
pub const BAR_WIDTH: f32 = 0.45;
pub const BAR_GAP: f32 = 0.12;
pub const BAR_MIN_HEIGHT: f32 = 0.08; // keeps silent bars visible
pub const BAR_HEIGHT_SCALE: f32 = 10.0;
pub const BAR_HUE_MAX: f32 = 0.9;
pub const BAR_BUILD_SATURATION: f32 = 0.9;
pub const BAR_BUILD_LIGHTNESS: f32 = 0.55;
pub const BAR_SATURATION: f32 = 0.9;
pub const BAR_LIGHTNESS: f32 = 0.5;

// Wave
pub const WAVE_POINTS: usize = 128;
pub const WAVE_SPACING: f32 = 0.12;
pub const WAVE_POINT_RADIUS: f32 = 0.08;
pub const WAVE_POINT_SEGMENTS: u32 = 10;
pub const WAVE_AMPLITUDE: f32 = 5.0;
pub const WAVE_DEPTH: f32 = 2.0; // z oscillation, independent of audio
pub const WAVE_DEPTH_PERIOD: f32 = 10.0; // index divisor for the z oscillation
pub const WAVE_BUILD_SATURATION: f32 = 0.8;
pub const WAVE_BUILD_LIGHTNESS: f32 = 0.5;
pub const WAVE_SATURATION: f32 = 0.85;
pub const WAVE_LIGHTNESS: f32 = 0.5;

// Particles
pub const PARTICLE_COUNT: usize = 700;
pub const PARTICLE_MIN_RADIUS: f32 = 4.0;
pub const PARTICLE_SHELL_DEPTH: f32 = 6.0; // max radius = min + depth
pub const PARTICLE_PUSH: f32 = 2.0; // radial push per unit amplitude

// Sphere
pub const SPHERE_RADIUS: f32 = 5.0;
pub const SPHERE_DETAIL: u32 = 3;
pub const SPHERE_DISPLACEMENT: f32 = 1.8;

// User parameters (raw control units)
pub const DEFAULT_SENSITIVITY: f32 = 100.0;
pub const SENSITIVITY_DIVISOR: f32 = 100.0;
pub const DEFAULT_ROTATION: f32 = 30.0;
pub const ROTATION_DIVISOR: f32 = 1000.0;

// Audio refresh
pub const SIMULATED_INTERVAL_MS: i32 = 50; // 20 Hz synthetic refresh
pub const ANALYSER_FFT_SIZE: u32 = 512; // yields FREQ_BINS frequency bins
pub const SCRIPT_PROCESSOR_BUFFER: u32 = 2048;
