pub mod color;
pub mod constants;
pub mod geometry;
pub mod mapper;
pub mod mode;
pub mod orbit;
pub mod params;
pub mod scene;
pub mod signal;
pub mod status;

pub use mode::VizMode;
pub use orbit::OrbitCamera;
pub use params::UserParams;
pub use scene::{GeometrySet, Scene};
pub use signal::{sample_channel, SampleFrame, SampleReader, SampleWriter};
pub use status::{SourceState, StartDecision, Status};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
