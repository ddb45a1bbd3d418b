use super::color::hsl_to_rgb;
use super::constants::*;
use super::geometry::recompute_flat_normals;
use super::params::UserParams;
use super::scene::{Bar, GeometrySet, ParticleCloud, Scene, SphereMesh, WavePoint};
use super::signal::SampleFrame;
use std::f32::consts::TAU;

/// Advance the scene by one rendered frame.
///
/// Rotation always advances and is kept in `[0, 2π)`. Geometry is mutated in place; when no geometry
/// for the active mode exists the mapping is skipped for this frame.
pub fn update(scene: &mut Scene, frame: &SampleFrame, params: &UserParams, elapsed_sec: f32) {
    scene.rotation_y = (scene.rotation_y + params.rotation_speed).rem_euclid(TAU);
    let mode = scene.mode();
    let Some(geometry) = scene.geometry_mut() else {
        return;
    };
    if geometry.mode() != mode {
        return;
    }
    let k = params.sensitivity;
    match geometry {
        GeometrySet::Bars(bars) => map_bars(bars, &frame.frequency, k),
        GeometrySet::Wave(points) => map_wave(points, &frame.time, k, elapsed_sec),
        GeometrySet::Particles(cloud) => map_particles(cloud, &frame.frequency, k),
        GeometrySet::Sphere(sphere) => map_sphere(sphere, &frame.frequency, k),
    }
}

/// Height before the visibility floor; also drives hue.
#[inline]
pub fn bar_height(sample: u8, sensitivity: f32) -> f32 {
    (sample as f32 / BYTE_MAX) * BAR_HEIGHT_SCALE * sensitivity
}

/// Centered waveform amplitude, roughly \[-1, 1\].
#[inline]
pub fn wave_amplitude(sample: u8) -> f32 {
    (sample as f32 - TIME_CENTER) / TIME_CENTER
}

pub fn map_bars(bars: &mut [Bar], freq: &[u8; FREQ_BINS], sensitivity: f32) {
    let n = bars.len();
    for (i, bar) in bars.iter_mut().enumerate() {
        let idx = i * FREQ_BINS / n;
        let h = bar_height(freq[idx], sensitivity);
        bar.scale_y = h.max(BAR_MIN_HEIGHT);
        bar.position.y = bar.scale_y / 2.0;
        bar.color = hsl_to_rgb(
            (h / BAR_HEIGHT_SCALE).min(BAR_HUE_MAX),
            BAR_SATURATION,
            BAR_LIGHTNESS,
        );
    }
}

pub fn map_wave(points: &mut [WavePoint], time: &[u8; FREQ_BINS], sensitivity: f32, elapsed_sec: f32) {
    for (i, p) in points.iter_mut().enumerate() {
        let amp = wave_amplitude(time[i % FREQ_BINS]);
        p.position.y = amp * WAVE_AMPLITUDE * sensitivity;
        p.position.z = (i as f32 / WAVE_DEPTH_PERIOD + elapsed_sec).sin() * WAVE_DEPTH;
        p.color = hsl_to_rgb(
            (p.position.y + WAVE_AMPLITUDE) / (2.0 * WAVE_AMPLITUDE),
            WAVE_SATURATION,
            WAVE_LIGHTNESS,
        );
    }
}

/// Push every point radially from its current radius. The radius is a
/// running sum of amplitude-driven pushes; nothing pulls points back.
pub fn map_particles(cloud: &mut ParticleCloud, freq: &[u8; FREQ_BINS], sensitivity: f32) {
    for (i, p) in cloud.positions.iter_mut().enumerate() {
        let amp = freq[i % FREQ_BINS] as f32 / BYTE_MAX;
        let len = match p.length() {
            l if l > 0.0 => l,
            _ => 1.0,
        };
        let new_r = len + amp * PARTICLE_PUSH * sensitivity;
        *p = *p / len * new_r;
    }
}

/// Displace every vertex from its cached original along its direction, then
/// refresh the flat normals.
pub fn map_sphere(sphere: &mut SphereMesh, freq: &[u8; FREQ_BINS], sensitivity: f32) {
    for (i, (p, orig)) in sphere
        .positions
        .iter_mut()
        .zip(sphere.original.iter())
        .enumerate()
    {
        let amp = freq[i % FREQ_BINS] as f32 / BYTE_MAX;
        let len = match orig.length() {
            l if l > 0.0 => l,
            _ => 1.0,
        };
        let disp = amp * SPHERE_DISPLACEMENT * sensitivity;
        *p = *orig / len * (SPHERE_RADIUS + disp);
    }
    recompute_flat_normals(&sphere.positions, &mut sphere.normals);
}
