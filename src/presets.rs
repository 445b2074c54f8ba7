//! Named parameter presets
//!
//! Each preset fixes point count, angle multiplier and radius; color scheme
//! and frame count keep their defaults.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::GenerationParams;
use crate::error::{PhyllotaxisError, Result};

/// Built-in parameter presets
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// 1000 points, true golden angle, radius 10
    Classic,
    /// 2000 points packed on a smaller sphere, radius 8
    Dense,
    /// 1500 points with the angle detuned to 1.2x, radius 12
    Spiral,
    /// 800 points with the angle detuned to 0.8x, radius 6
    Tight,
}

impl Preset {
    /// Every preset, in listing order
    pub const ALL: [Preset; 4] = [Preset::Classic, Preset::Dense, Preset::Spiral, Preset::Tight];

    /// Lookup name of the preset
    pub fn name(self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Dense => "dense",
            Preset::Spiral => "spiral",
            Preset::Tight => "tight",
        }
    }

    /// Generation parameters for this preset
    pub fn params(self) -> GenerationParams {
        let (point_count, angle_multiplier, radius) = match self {
            Preset::Classic => (1000, 1.0, 10.0),
            Preset::Dense => (2000, 1.0, 8.0),
            Preset::Spiral => (1500, 1.2, 12.0),
            Preset::Tight => (800, 0.8, 6.0),
        };
        GenerationParams {
            point_count,
            angle_multiplier,
            radius,
            ..GenerationParams::default()
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PhyllotaxisError;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| PhyllotaxisError::NotFound(s.to_string()))
    }
}

/// Look up a preset's parameters by name
///
/// # Errors
///
/// Returns `NotFound` for an unknown preset name
///
/// # Example
///
/// ```rust
/// use sunflower_cloud::*;
///
/// let params = preset("dense").unwrap();
/// assert_eq!(params.point_count, 2000);
/// assert!(matches!(preset("huge"), Err(PhyllotaxisError::NotFound(_))));
/// ```
pub fn preset(name: &str) -> Result<GenerationParams> {
    name.parse::<Preset>().map(Preset::params)
}

/// Names of all presets, in listing order
pub fn preset_names() -> Vec<&'static str> {
    Preset::ALL.iter().map(|p| p.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorScheme;

    #[test]
    fn test_preset_values() {
        let classic = preset("classic").unwrap();
        assert_eq!(
            (classic.point_count, classic.angle_multiplier, classic.radius),
            (1000, 1.0, 10.0)
        );

        let dense = preset("dense").unwrap();
        assert_eq!((dense.point_count, dense.angle_multiplier, dense.radius), (2000, 1.0, 8.0));

        let spiral = preset("spiral").unwrap();
        assert_eq!(
            (spiral.point_count, spiral.angle_multiplier, spiral.radius),
            (1500, 1.2, 12.0)
        );

        let tight = preset("tight").unwrap();
        assert_eq!((tight.point_count, tight.angle_multiplier, tight.radius), (800, 0.8, 6.0));
    }

    #[test]
    fn test_presets_keep_defaults() {
        for p in Preset::ALL {
            let params = p.params();
            assert_eq!(params.color_scheme, ColorScheme::BlueToRed);
            assert_eq!(params.frame_count, 100);
            assert!(params.validate().is_ok());
        }
    }

    #[test]
    fn test_unknown_preset() {
        let err = preset("sunflower").unwrap_err();
        assert_eq!(err, PhyllotaxisError::NotFound("sunflower".to_string()));
        assert!(preset("Classic").is_err());
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(preset_names(), vec!["classic", "dense", "spiral", "tight"]);
        for name in preset_names() {
            assert_eq!(name.parse::<Preset>().unwrap().to_string(), name);
        }
    }
}
