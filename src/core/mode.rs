use std::fmt;
use std::str::FromStr;

/// Visualization style. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VizMode {
    #[default]
    Bars,
    Wave,
    Particles,
    Sphere,
}

impl VizMode {
    pub const ALL: [VizMode; 4] = [
        VizMode::Bars,
        VizMode::Wave,
        VizMode::Particles,
        VizMode::Sphere,
    ];

    /// Value used by the mode `<select>` options.
    pub fn as_str(self) -> &'static str {
        match self {
            VizMode::Bars => "bars",
            VizMode::Wave => "wave",
            VizMode::Particles => "particles",
            VizMode::Sphere => "sphere",
        }
    }

    /// Human-readable label for the status line.
    pub fn label(self) -> &'static str {
        match self {
            VizMode::Bars => "Bars",
            VizMode::Wave => "Wave",
            VizMode::Particles => "Particles",
            VizMode::Sphere => "Sphere",
        }
    }

    /// Parse a select value, falling back to the default mode for anything unknown.
    pub fn from_select_value(value: &str) -> VizMode {
        value.parse().unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown visualization mode '{}'", self.0)
    }
}

impl FromStr for VizMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bars" => Ok(VizMode::Bars),
            "wave" => Ok(VizMode::Wave),
            "particles" => Ok(VizMode::Particles),
            "sphere" => Ok(VizMode::Sphere),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for VizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
