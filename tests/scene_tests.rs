// Host-side tests for scene building, mode switching and mesh generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod viz {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod mode {
        include!("../src/core/mode.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use glam::Vec3;
use rand::prelude::*;
use viz::constants::*;
use viz::geometry::*;
use viz::mode::VizMode;
use viz::scene::*;

#[test]
fn each_mode_builds_its_object_count() {
    let expected = [
        (VizMode::Bars, 64),
        (VizMode::Wave, 128),
        (VizMode::Particles, 1),
        (VizMode::Sphere, 1),
    ];
    let mut scene = Scene::with_seed(1);
    assert_eq!(scene.object_count(), 0);
    for (mode, count) in expected {
        scene.set_mode(mode);
        assert_eq!(scene.mode(), mode);
        assert_eq!(scene.object_count(), count, "{mode}");
        assert_eq!(scene.geometry().map(GeometrySet::mode), Some(mode));
    }
}

#[test]
fn switching_back_and_forth_never_accumulates_objects() {
    let mut scene = Scene::with_seed(2);
    for _ in 0..10 {
        for mode in VizMode::ALL {
            scene.set_mode(mode);
        }
        scene.set_mode(VizMode::Bars);
        assert_eq!(scene.object_count(), BAR_COUNT);
    }
}

#[test]
fn every_rebuild_and_clear_bumps_generation() {
    let mut scene = Scene::with_seed(3);
    let g0 = scene.generation();
    scene.set_mode(VizMode::Wave);
    let g1 = scene.generation();
    assert!(g1 > g0);
    scene.set_mode(VizMode::Wave);
    assert!(scene.generation() > g1);
    let g2 = scene.generation();
    scene.clear();
    assert!(scene.generation() > g2);
    assert!(scene.geometry().is_none());
    assert_eq!(scene.mode(), VizMode::Wave);
}

#[test]
fn bars_are_centered_row_with_unit_scale() {
    let bars = build_bars();
    assert_eq!(bars.len(), BAR_COUNT);
    let step = BAR_WIDTH + BAR_GAP;
    assert!((bars[0].position.x - (-32.0 * step)).abs() < 1e-5);
    assert!((bars[63].position.x - (31.0 * step)).abs() < 1e-5);
    for pair in bars.windows(2) {
        assert!((pair[1].position.x - pair[0].position.x - step).abs() < 1e-5);
    }
    assert!(bars.iter().all(|b| b.scale_y == 1.0 && b.position.y == 0.0));
    // rainbow across the row
    assert_ne!(bars[0].color, bars[32].color);
}

#[test]
fn wave_points_span_x_at_rest() {
    let points = build_wave();
    assert_eq!(points.len(), WAVE_POINTS);
    assert!((points[0].position.x - (-64.0 * WAVE_SPACING)).abs() < 1e-5);
    assert!(points
        .iter()
        .all(|p| p.position.y == 0.0 && p.position.z == 0.0));
}

#[test]
fn particles_sit_on_the_initial_shell() {
    let mut rng = StdRng::seed_from_u64(42);
    let cloud = build_particles(&mut rng);
    assert_eq!(cloud.positions.len(), PARTICLE_COUNT);
    assert_eq!(cloud.colors.len(), PARTICLE_COUNT);
    let max = PARTICLE_MIN_RADIUS + PARTICLE_SHELL_DEPTH;
    for p in &cloud.positions {
        let r = p.length();
        assert!(r >= PARTICLE_MIN_RADIUS - 1e-4 && r <= max + 1e-4, "radius {r}");
    }
    for c in &cloud.colors {
        assert!(c.iter().all(|v| (0.0..1.0).contains(v)));
    }
}

#[test]
fn particle_directions_cover_both_hemispheres() {
    let mut rng = StdRng::seed_from_u64(5);
    let cloud = build_particles(&mut rng);
    let up = cloud.positions.iter().filter(|p| p.z > 0.0).count();
    // uniform on the sphere, so roughly half above the equator
    assert!(up > 250 && up < 450, "upper hemisphere count {up}");
}

#[test]
fn returning_to_particles_rerandomizes_the_cloud() {
    let mut scene = Scene::with_seed(9);
    scene.set_mode(VizMode::Particles);
    let Some(GeometrySet::Particles(first)) = scene.geometry().cloned() else {
        panic!("expected particles");
    };
    scene.set_mode(VizMode::Sphere);
    assert_eq!(scene.object_count(), 1);
    scene.set_mode(VizMode::Particles);
    let Some(GeometrySet::Particles(second)) = scene.geometry() else {
        panic!("expected particles");
    };
    assert_ne!(first.positions, second.positions);
}

#[test]
fn sphere_captures_its_original_positions() {
    let sphere = build_sphere();
    assert_eq!(sphere.positions.len(), 960);
    assert_eq!(sphere.original, sphere.positions);
    assert_eq!(sphere.normals.len(), sphere.positions.len());
    for p in &sphere.original {
        assert!((p.length() - SPHERE_RADIUS).abs() < 1e-4);
    }
}

#[test]
fn sphere_normals_point_outward() {
    let sphere = build_sphere();
    for (tri, n) in sphere
        .positions
        .chunks_exact(3)
        .zip(sphere.normals.chunks_exact(3))
    {
        let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
        assert!(n[0].dot(centroid) > 0.0);
        assert!((n[0].length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn icosphere_vertex_count_grows_with_detail() {
    for detail in 0..4 {
        let cols = (detail + 1) as usize;
        assert_eq!(icosphere_positions(1.0, detail).len(), 20 * cols * cols * 3);
    }
}

#[test]
fn box_mesh_has_four_vertices_per_face() {
    let mesh = box_mesh(BAR_WIDTH, 1.0, BAR_WIDTH);
    assert_eq!(mesh.positions.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    for p in &mesh.positions {
        assert!((p.y.abs() - 0.5).abs() < 1e-6);
        assert!((p.x.abs() - BAR_WIDTH / 2.0).abs() < 1e-6);
    }
    // counter-clockwise when seen from outside
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [0, 1, 2].map(|k| mesh.positions[tri[k] as usize]);
        let n = (b - a).cross(c - a);
        assert!(n.dot(mesh.normals[tri[0] as usize]) > 0.0);
    }
}

#[test]
fn uv_sphere_matches_expected_topology() {
    let mesh = uv_sphere_mesh(WAVE_POINT_RADIUS, WAVE_POINT_SEGMENTS, WAVE_POINT_SEGMENTS);
    assert_eq!(mesh.positions.len(), 121);
    assert_eq!(mesh.indices.len(), 540);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.positions.len()));
    for p in &mesh.positions {
        assert!((p.length() - WAVE_POINT_RADIUS).abs() < 1e-5);
    }
}

#[test]
fn flat_normals_ignore_trailing_partial_triangle() {
    let positions = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
    let mut normals = [Vec3::ONE; 4];
    recompute_flat_normals(&positions, &mut normals);
    assert_eq!(normals[0], Vec3::Z);
    assert_eq!(normals[2], Vec3::Z);
    assert_eq!(normals[3], Vec3::ONE);
}

#[test]
fn wire_edges_trace_every_triangle() {
    let edges = triangle_edge_indices(960);
    assert_eq!(edges.len(), 320 * 6);
    assert!(edges.iter().all(|&i| i < 960));
    assert_eq!(&edges[6..12], &[3, 4, 4, 5, 5, 3]);
}
