//! Generation requests as received from a front-end
//!
//! Every field is optional; missing fields take the documented defaults.
//! Values arrive unchecked (negative counts, unknown scheme names) and are
//! validated by [`GenerationRequest::into_params`] so the caller learns which
//! field was wrong.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{GenerationParams, GenerationParamsBuilder};
use crate::error::{PhyllotaxisError, Result};

/// Loosely typed generation request
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationRequest {
    pub point_count: Option<i64>,
    pub angle_multiplier: Option<f32>,
    pub radius: Option<f32>,
    pub color_scheme: Option<String>,
    pub frame_count: Option<i64>,
}

impl GenerationRequest {
    /// Validate the request and fill in defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first field that fails
    /// validation, including unknown color scheme names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sunflower_cloud::*;
    ///
    /// let request = GenerationRequest {
    ///     radius: Some(4.0),
    ///     color_scheme: Some("rainbow".into()),
    ///     ..Default::default()
    /// };
    /// let params = request.into_params().unwrap();
    /// assert_eq!(params.point_count, 1000);
    /// assert_eq!(params.color_scheme, ColorScheme::Rainbow);
    /// ```
    pub fn into_params(self) -> Result<GenerationParams> {
        let mut builder = GenerationParamsBuilder::new();

        if let Some(count) = self.point_count {
            builder = builder.point_count(to_count("point_count", count)?)?;
        }
        if let Some(multiplier) = self.angle_multiplier {
            builder = builder.angle_multiplier(multiplier)?;
        }
        if let Some(radius) = self.radius {
            builder = builder.radius(radius)?;
        }
        if let Some(name) = self.color_scheme.as_deref() {
            builder = builder.color_scheme_name(name)?;
        }
        if let Some(count) = self.frame_count {
            builder = builder.frame_count(to_count("frame_count", count)?)?;
        }

        builder.build()
    }
}

impl From<GenerationParams> for GenerationRequest {
    fn from(params: GenerationParams) -> Self {
        Self {
            point_count: Some(params.point_count as i64),
            angle_multiplier: Some(params.angle_multiplier),
            radius: Some(params.radius),
            color_scheme: Some(params.color_scheme.name().to_string()),
            frame_count: Some(params.frame_count as i64),
        }
    }
}

fn to_count(field: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        PhyllotaxisError::invalid(field, format!("must be at least 1 (got {})", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorScheme;

    #[test]
    fn test_empty_request_uses_defaults() {
        let params = GenerationRequest::default().into_params().unwrap();
        assert_eq!(params, GenerationParams::default());
    }

    #[test]
    fn test_full_request() {
        let request = GenerationRequest {
            point_count: Some(1500),
            angle_multiplier: Some(1.2),
            radius: Some(12.0),
            color_scheme: Some("green_to_purple".to_string()),
            frame_count: Some(60),
        };
        let params = request.into_params().unwrap();
        assert_eq!(params.point_count, 1500);
        assert_eq!(params.angle_multiplier, 1.2);
        assert_eq!(params.radius, 12.0);
        assert_eq!(params.color_scheme, ColorScheme::GreenToPurple);
        assert_eq!(params.frame_count, 60);
    }

    #[test]
    fn test_negative_and_zero_counts() {
        for count in [-1, 0] {
            let request = GenerationRequest {
                point_count: Some(count),
                ..Default::default()
            };
            assert_eq!(request.into_params().unwrap_err().field(), Some("point_count"));
        }

        let request = GenerationRequest {
            frame_count: Some(-20),
            ..Default::default()
        };
        assert_eq!(request.into_params().unwrap_err().field(), Some("frame_count"));
    }

    #[test]
    fn test_bad_radius() {
        let request = GenerationRequest {
            radius: Some(-3.0),
            ..Default::default()
        };
        assert_eq!(request.into_params().unwrap_err().field(), Some("radius"));
    }

    #[test]
    fn test_unknown_color_scheme() {
        let request = GenerationRequest {
            color_scheme: Some("viridis".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            request.into_params(),
            Err(PhyllotaxisError::InvalidParameter { field: "color_scheme", .. })
        ));
    }

    #[test]
    fn test_params_round_trip_through_request() {
        let params = crate::presets::Preset::Spiral.params();
        let request = GenerationRequest::from(params);
        assert_eq!(request.into_params().unwrap(), params);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_request_from_json() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"point_count": 300, "color_scheme": "rainbow", "extra": 1}"#)
                .unwrap();
        let params = request.into_params().unwrap();
        assert_eq!(params.point_count, 300);
        assert_eq!(params.color_scheme, ColorScheme::Rainbow);
        assert_eq!(params.radius, 10.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_unknown_scheme_from_json_reaches_validator() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"color_scheme": "magma"}"#).unwrap();
        assert_eq!(request.into_params().unwrap_err().field(), Some("color_scheme"));
    }
}
