//! Generation parameters, color schemes and request limits
//!
//! A [`GenerationParams`] fully determines a point cloud: the same parameters
//! always produce the identical cloud and camera path.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PhyllotaxisError, Result};

/// Default number of points in a cloud
pub const DEFAULT_POINT_COUNT: usize = 1000;
/// Default golden angle multiplier (1.0 = true phyllotaxis packing)
pub const DEFAULT_ANGLE_MULTIPLIER: f32 = 1.0;
/// Default sphere radius in world units
pub const DEFAULT_RADIUS: f32 = 10.0;
/// Default number of camera frames per rotation
pub const DEFAULT_FRAME_COUNT: usize = 100;

/// Selectable per-point color scheme
///
/// Colors are driven by each point's normalized position `t` in the
/// generation sequence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    /// Blue at the first point, red at the last
    #[default]
    BlueToRed,
    /// Full hue sweep, red through the spectrum and back to red
    Rainbow,
    /// Green at the first point, purple at the last
    GreenToPurple,
}

impl ColorScheme {
    /// Every scheme, in display order
    pub const ALL: [ColorScheme; 3] = [
        ColorScheme::BlueToRed,
        ColorScheme::Rainbow,
        ColorScheme::GreenToPurple,
    ];

    /// Wire name of the scheme (`blue_to_red`, `rainbow`, `green_to_purple`)
    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::BlueToRed => "blue_to_red",
            ColorScheme::Rainbow => "rainbow",
            ColorScheme::GreenToPurple => "green_to_purple",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = PhyllotaxisError;

    fn from_str(s: &str) -> Result<Self> {
        ColorScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| {
                PhyllotaxisError::invalid(
                    "color_scheme",
                    format!(
                        "unknown color scheme '{}' (expected one of blue_to_red, rainbow, green_to_purple)",
                        s
                    ),
                )
            })
    }
}

/// Parameters for a single point cloud generation
///
/// Fields are public so front-ends can deserialize or tweak them directly;
/// [`GenerationParams::validate`] is run by every generation entry point
/// before any computation starts.
///
/// # Example
///
/// ```rust
/// use sunflower_cloud::*;
///
/// let params = GenerationParamsBuilder::new()
///     .point_count(500)
///     .unwrap()
///     .color_scheme(ColorScheme::Rainbow)
///     .build()
///     .unwrap();
///
/// assert_eq!(params.point_count, 500);
/// assert_eq!(params.radius, 10.0);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Number of points to place (at least 1)
    pub point_count: usize,

    /// Scale applied to the canonical golden angle
    ///
    /// - 1.0: true sunflower packing
    /// - other values: detuned spirals with visible arms
    pub angle_multiplier: f32,

    /// Sphere radius in world units
    pub radius: f32,

    /// Per-point color scheme
    pub color_scheme: ColorScheme,

    /// Number of camera frames for one rotation of the animation
    pub frame_count: usize,
}

impl GenerationParams {
    /// Check every field, naming the first offending one
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `point_count` or `frame_count` is zero,
    /// if `angle_multiplier` is not a positive finite number, or if `radius`
    /// is not a positive normal `f32` (subnormal radii collapse the cloud).
    pub fn validate(&self) -> Result<()> {
        check_count("point_count", self.point_count)?;
        check_positive("angle_multiplier", self.angle_multiplier)?;
        check_radius(self.radius)?;
        check_count("frame_count", self.frame_count)?;
        Ok(())
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            angle_multiplier: DEFAULT_ANGLE_MULTIPLIER,
            radius: DEFAULT_RADIUS,
            color_scheme: ColorScheme::default(),
            frame_count: DEFAULT_FRAME_COUNT,
        }
    }
}

fn check_count(field: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(PhyllotaxisError::invalid(field, "must be at least 1 (got 0)"));
    }
    Ok(())
}

fn check_radius(radius: f32) -> Result<()> {
    check_positive("radius", radius)?;
    if !radius.is_normal() {
        return Err(PhyllotaxisError::invalid(
            "radius",
            format!("must be at least {:e} (got {:e})", f32::MIN_POSITIVE, radius),
        ));
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PhyllotaxisError::invalid(
            field,
            format!("must be a positive finite number (got {})", value),
        ));
    }
    Ok(())
}

/// Builder for creating GenerationParams with validation
///
/// Setters for checked fields return `Result<Self>` so a bad value is
/// reported at the point it is supplied.
///
/// # Example
///
/// ```rust
/// use sunflower_cloud::*;
///
/// let params = GenerationParamsBuilder::new()
///     .point_count(1500)
///     .unwrap()
///     .angle_multiplier(1.2)
///     .unwrap()
///     .radius(12.0)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert!(GenerationParamsBuilder::new().radius(0.0).is_err());
/// # let _ = params;
/// ```
#[derive(Debug, Clone)]
pub struct GenerationParamsBuilder {
    params: GenerationParams,
}

impl GenerationParamsBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - point_count: 1000
    /// - angle_multiplier: 1.0
    /// - radius: 10.0
    /// - color_scheme: blue_to_red
    /// - frame_count: 100
    pub fn new() -> Self {
        Self {
            params: GenerationParams::default(),
        }
    }

    /// Start from existing parameters (e.g. a preset)
    pub fn from_params(params: GenerationParams) -> Self {
        Self { params }
    }

    /// Set the number of points
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `count` is 0
    pub fn point_count(mut self, count: usize) -> Result<Self> {
        check_count("point_count", count)?;
        self.params.point_count = count;
        Ok(self)
    }

    /// Set the golden angle multiplier
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `multiplier` is not positive and finite
    pub fn angle_multiplier(mut self, multiplier: f32) -> Result<Self> {
        check_positive("angle_multiplier", multiplier)?;
        self.params.angle_multiplier = multiplier;
        Ok(self)
    }

    /// Set the sphere radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `radius` is not a positive normal number
    pub fn radius(mut self, radius: f32) -> Result<Self> {
        check_radius(radius)?;
        self.params.radius = radius;
        Ok(self)
    }

    /// Set the color scheme
    pub fn color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.params.color_scheme = scheme;
        self
    }

    /// Set the color scheme by its wire name
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an unknown scheme name
    pub fn color_scheme_name(self, name: &str) -> Result<Self> {
        Ok(self.color_scheme(name.parse()?))
    }

    /// Set the number of camera frames per rotation
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `count` is 0
    pub fn frame_count(mut self, count: usize) -> Result<Self> {
        check_count("frame_count", count)?;
        self.params.frame_count = count;
        Ok(self)
    }

    /// Build the parameters
    pub fn build(self) -> Result<GenerationParams> {
        self.params.validate()?;
        Ok(self.params)
    }
}

impl Default for GenerationParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper bounds a presenter places on request cost
///
/// Generation time grows linearly with `point_count` and `frame_count`;
/// network front-ends should check incoming parameters against these
/// before generating.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationLimits {
    /// Largest accepted point count
    pub max_point_count: usize,
    /// Largest accepted camera frame count
    pub max_frame_count: usize,
}

impl GenerationLimits {
    /// Check parameters against these limits
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the field that exceeds its bound
    pub fn check(&self, params: &GenerationParams) -> Result<()> {
        if params.point_count > self.max_point_count {
            return Err(PhyllotaxisError::invalid(
                "point_count",
                format!(
                    "must be <= {} (got {})",
                    self.max_point_count, params.point_count
                ),
            ));
        }
        if params.frame_count > self.max_frame_count {
            return Err(PhyllotaxisError::invalid(
                "frame_count",
                format!(
                    "must be <= {} (got {})",
                    self.max_frame_count, params.frame_count
                ),
            ));
        }
        Ok(())
    }
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_point_count: 10_000,
            max_frame_count: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let params = GenerationParamsBuilder::new().build().unwrap();
        assert_eq!(params.point_count, 1000);
        assert_eq!(params.angle_multiplier, 1.0);
        assert_eq!(params.radius, 10.0);
        assert_eq!(params.color_scheme, ColorScheme::BlueToRed);
        assert_eq!(params.frame_count, 100);
        assert_eq!(params, GenerationParams::default());
    }

    #[test]
    fn test_builder_custom() {
        let params = GenerationParamsBuilder::new()
            .point_count(42)
            .unwrap()
            .angle_multiplier(0.8)
            .unwrap()
            .radius(6.0)
            .unwrap()
            .color_scheme_name("green_to_purple")
            .unwrap()
            .frame_count(12)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(params.point_count, 42);
        assert_eq!(params.angle_multiplier, 0.8);
        assert_eq!(params.radius, 6.0);
        assert_eq!(params.color_scheme, ColorScheme::GreenToPurple);
        assert_eq!(params.frame_count, 12);
    }

    #[test]
    fn test_builder_rejects_zero_points() {
        let err = GenerationParamsBuilder::new().point_count(0).unwrap_err();
        assert_eq!(err.field(), Some("point_count"));
    }

    #[test]
    fn test_builder_invalid_radius() {
        for radius in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let err = GenerationParamsBuilder::new().radius(radius).unwrap_err();
            assert_eq!(err.field(), Some("radius"));
        }
    }

    #[test]
    fn test_subnormal_radius_rejected() {
        for radius in [1e-45, f32::MIN_POSITIVE / 2.0] {
            let err = GenerationParamsBuilder::new().radius(radius).unwrap_err();
            assert_eq!(err.field(), Some("radius"));

            let params = GenerationParams {
                radius,
                ..Default::default()
            };
            assert_eq!(params.validate().unwrap_err().field(), Some("radius"));
        }
        assert!(GenerationParamsBuilder::new().radius(f32::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn test_builder_invalid_angle_multiplier() {
        let err = GenerationParamsBuilder::new()
            .angle_multiplier(0.0)
            .unwrap_err();
        assert_eq!(err.field(), Some("angle_multiplier"));
    }

    #[test]
    fn test_builder_rejects_zero_frames() {
        let err = GenerationParamsBuilder::new().frame_count(0).unwrap_err();
        assert_eq!(err.field(), Some("frame_count"));
    }

    #[test]
    fn test_validate_catches_direct_field_edits() {
        let params = GenerationParams {
            radius: -1.0,
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap_err().field(), Some("radius"));

        let params = GenerationParams {
            point_count: 0,
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap_err().field(), Some("point_count"));
    }

    #[test]
    fn test_color_scheme_names_round_trip() {
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.name().parse::<ColorScheme>().unwrap(), scheme);
            assert_eq!(scheme.to_string(), scheme.name());
        }
    }

    #[test]
    fn test_unknown_color_scheme() {
        let err = "plasma".parse::<ColorScheme>().unwrap_err();
        assert!(matches!(
            err,
            PhyllotaxisError::InvalidParameter { field: "color_scheme", .. }
        ));
        assert!(GenerationParamsBuilder::new()
            .color_scheme_name("Rainbow")
            .is_err());
    }

    #[test]
    fn test_limits() {
        let limits = GenerationLimits {
            max_point_count: 3000,
            max_frame_count: 500,
        };
        assert!(limits.check(&GenerationParams::default()).is_ok());

        let too_many_points = GenerationParams {
            point_count: 3001,
            ..Default::default()
        };
        assert_eq!(
            limits.check(&too_many_points).unwrap_err().field(),
            Some("point_count")
        );

        let too_many_frames = GenerationParams {
            frame_count: 501,
            ..Default::default()
        };
        assert_eq!(
            limits.check(&too_many_frames).unwrap_err().field(),
            Some("frame_count")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_params_serialization() {
        let params = GenerationParamsBuilder::new()
            .color_scheme(ColorScheme::Rainbow)
            .build()
            .unwrap();

        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"rainbow\""));
        let restored: GenerationParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, restored);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_params_partial_json_uses_defaults() {
        let params: GenerationParams = serde_json::from_str(r#"{"radius": 4.5}"#).unwrap();
        assert_eq!(params.radius, 4.5);
        assert_eq!(params.point_count, DEFAULT_POINT_COUNT);
    }
}
