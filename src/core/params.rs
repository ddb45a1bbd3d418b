use super::constants::{
    DEFAULT_ROTATION, DEFAULT_SENSITIVITY, ROTATION_DIVISOR, SENSITIVITY_DIVISOR,
};

/// Per-frame user parameters in effective units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UserParams {
    /// Amplitude multiplier (1.0 = raw control value 100).
    pub sensitivity: f32,
    /// Scene rotation added every frame, in radians (0.03 = raw control value 30).
    pub rotation_speed: f32,
}

impl Default for UserParams {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY / SENSITIVITY_DIVISOR,
            rotation_speed: DEFAULT_ROTATION / ROTATION_DIVISOR,
        }
    }
}

impl UserParams {
    /// Build from the raw slider strings. Each value falls back to its default
    /// independently when empty, non-numeric, zero or non-finite.
    pub fn from_raw(sensitivity: &str, rotation: &str) -> Self {
        Self {
            sensitivity: raw_or_default(sensitivity, DEFAULT_SENSITIVITY) / SENSITIVITY_DIVISOR,
            rotation_speed: raw_or_default(rotation, DEFAULT_ROTATION) / ROTATION_DIVISOR,
        }
    }
}

/// Parse a control value; zero counts as unset.
pub fn raw_or_default(raw: &str, default: f32) -> f32 {
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v != 0.0 => v,
        _ => default,
    }
}
