use super::color::hsl_to_rgb;
use super::constants::*;
use super::geometry::{icosphere_positions, recompute_flat_normals};
use super::mode::VizMode;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::PI;

/// One bar of the spectrum: a box scaled along Y, base kept at y = 0.
#[derive(Clone, Debug)]
pub struct Bar {
    pub position: Vec3,
    pub scale_y: f32,
    pub color: [f32; 3],
}

/// One small sphere of the waveform line.
#[derive(Clone, Debug)]
pub struct WavePoint {
    pub position: Vec3,
    pub color: [f32; 3],
}

/// Single point cloud with parallel position and color buffers.
#[derive(Clone, Debug)]
pub struct ParticleCloud {
    pub positions: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
}

/// Displaced geodesic sphere.
///
/// `original` is captured once at construction and is the baseline every
/// displacement is computed from, so the surface never drifts.
#[derive(Clone, Debug)]
pub struct SphereMesh {
    pub original: Vec<Vec3>,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
}

/// Everything drawable for one mode.
#[derive(Clone, Debug)]
pub enum GeometrySet {
    Bars(Vec<Bar>),
    Wave(Vec<WavePoint>),
    Particles(ParticleCloud),
    Sphere(SphereMesh),
}

impl GeometrySet {
    pub fn mode(&self) -> VizMode {
        match self {
            GeometrySet::Bars(_) => VizMode::Bars,
            GeometrySet::Wave(_) => VizMode::Wave,
            GeometrySet::Particles(_) => VizMode::Particles,
            GeometrySet::Sphere(_) => VizMode::Sphere,
        }
    }

    /// Number of scene objects: one per bar / wave point, one for the
    /// cloud, one for the sphere mesh.
    pub fn object_count(&self) -> usize {
        match self {
            GeometrySet::Bars(bars) => bars.len(),
            GeometrySet::Wave(points) => points.len(),
            GeometrySet::Particles(_) | GeometrySet::Sphere(_) => 1,
        }
    }
}

pub fn build_bars() -> Vec<Bar> {
    let n = BAR_COUNT;
    (0..n)
        .map(|i| Bar {
            position: Vec3::new(
                (i as f32 - n as f32 / 2.0) * (BAR_WIDTH + BAR_GAP),
                0.0,
                0.0,
            ),
            scale_y: 1.0,
            color: hsl_to_rgb(
                i as f32 / n as f32,
                BAR_BUILD_SATURATION,
                BAR_BUILD_LIGHTNESS,
            ),
        })
        .collect()
}

pub fn build_wave() -> Vec<WavePoint> {
    let n = WAVE_POINTS;
    (0..n)
        .map(|i| WavePoint {
            position: Vec3::new((i as f32 - n as f32 / 2.0) * WAVE_SPACING, 0.0, 0.0),
            color: hsl_to_rgb(
                i as f32 / n as f32,
                WAVE_BUILD_SATURATION,
                WAVE_BUILD_LIGHTNESS,
            ),
        })
        .collect()
}

/// Uniform solid-angle sampling on a shell between the min radius and
/// min + depth; the polar angle comes from `acos` of a uniform variable so
/// points do not bunch at the poles.
pub fn build_particles<R: Rng + ?Sized>(rng: &mut R) -> ParticleCloud {
    let mut positions = Vec::with_capacity(PARTICLE_COUNT);
    let mut colors = Vec::with_capacity(PARTICLE_COUNT);
    for _ in 0..PARTICLE_COUNT {
        let r = PARTICLE_MIN_RADIUS + rng.gen::<f32>() * PARTICLE_SHELL_DEPTH;
        let theta = rng.gen::<f32>() * PI * 2.0;
        let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
        positions.push(Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        ));
        colors.push([rng.gen(), rng.gen(), rng.gen()]);
    }
    ParticleCloud { positions, colors }
}

pub fn build_sphere() -> SphereMesh {
    let positions = icosphere_positions(SPHERE_RADIUS, SPHERE_DETAIL);
    let mut normals = vec![Vec3::ZERO; positions.len()];
    recompute_flat_normals(&positions, &mut normals);
    SphereMesh {
        original: positions.clone(),
        positions,
        normals,
    }
}

/// Scene graph for the visualizer: active mode, its geometry, and the
/// whole-scene rotation.
pub struct Scene {
    mode: VizMode,
    geometry: Option<GeometrySet>,
    /// Accumulated rotation around Y, radians, wrapped to one turn.
    pub rotation_y: f32,
    generation: u64,
    rng: StdRng,
}

impl Scene {
    /// Empty scene in the default mode; call `set_mode` to build geometry.
    pub fn new(rng: StdRng) -> Self {
        Self {
            mode: VizMode::default(),
            geometry: None,
            rotation_y: 0.0,
            generation: 0,
            rng,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn mode(&self) -> VizMode {
        self.mode
    }

    /// Bumped on every rebuild or clear so renderers can drop stale buffers.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn geometry(&self) -> Option<&GeometrySet> {
        self.geometry.as_ref()
    }

    pub fn geometry_mut(&mut self) -> Option<&mut GeometrySet> {
        self.geometry.as_mut()
    }

    /// Live scene objects; zero when nothing is built.
    pub fn object_count(&self) -> usize {
        self.geometry.as_ref().map_or(0, GeometrySet::object_count)
    }

    /// Tear down the current geometry and build a fresh set for `mode`.
    /// Rebuilds even when `mode` is already active.
    pub fn set_mode(&mut self, mode: VizMode) {
        self.clear();
        self.mode = mode;
        self.geometry = Some(match mode {
            VizMode::Bars => GeometrySet::Bars(build_bars()),
            VizMode::Wave => GeometrySet::Wave(build_wave()),
            VizMode::Particles => GeometrySet::Particles(build_particles(&mut self.rng)),
            VizMode::Sphere => GeometrySet::Sphere(build_sphere()),
        });
    }

    /// Drop all geometry; the mode is kept.
    pub fn clear(&mut self) {
        self.geometry = None;
        self.generation += 1;
    }
}
