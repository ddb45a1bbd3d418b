// Renderer, camera and lighting constants for the web frontend.
//
// Visualization tuning (counts, radii, multipliers) lives in
// `core::constants`; this file only covers how the scene is looked at and lit.

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 4.0, 18.0];
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Fog (exponential squared)
pub const FOG_COLOR: [f32; 3] = [0.027, 0.063, 0.153]; // #071027
pub const FOG_DENSITY: f32 = 0.03;

// Lights
pub const AMBIENT_COLOR: [f32; 3] = [0.267, 0.333, 0.4]; // #445566
pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const DIRECTIONAL_INTENSITY: f32 = 0.9;
pub const DIRECTIONAL_POSITION: [f32; 3] = [5.0, 10.0, 7.0];

// Materials
pub const PARTICLE_SIZE: f32 = 0.07; // world-space quad edge
pub const PARTICLE_OPACITY: f32 = 0.95;
pub const SPHERE_WIRE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const SPHERE_WIRE_OPACITY: f32 = 0.85;

// Targets
pub const MSAA_SAMPLES: u32 = 4;
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

// UI
pub const PANEL_HIDDEN_TRANSFORM: &str = "translateX(-420px)";
pub const PANEL_SHOWN_TRANSFORM: &str = "translateX(0)";
