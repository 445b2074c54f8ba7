//! Scene assembly for plotting front-ends
//!
//! Turns a point cloud and a camera path into the flat, column-oriented data
//! a 3D scatter plot consumes.

mod colors;

pub use colors::{ColorMapper, GradientColorMapper, Rgba, POINT_ALPHA};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::camera::{generate_camera_path, CameraOrbit};
use crate::cloud::PointCloud;
use crate::config::GenerationParams;
use crate::error::{PhyllotaxisError, Result};

/// Renderer-agnostic generation response
///
/// Point data is stored as parallel columns of length `point_count`:
/// - Plotly-style front-ends: pass `x`, `y`, `z` and `colors` straight through
/// - GPU renderers: zip the columns into vertex buffers
///
/// `camera_eyes` holds one eye position per animation frame.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneData {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
    /// Sequence position of each point
    pub t: Vec<f32>,
    /// Point colors as CSS `rgba(r,g,b,a)` strings
    pub colors: Vec<String>,
    /// Camera eye `[x, y, z]` per animation frame
    pub camera_eyes: Vec<[f32; 3]>,
}

impl SceneData {
    /// Assemble scene data from a generated cloud and camera orbit
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an invalid orbit and
    /// `InternalComputation` if any produced number is not finite.
    pub fn from_cloud(cloud: &PointCloud, orbit: &CameraOrbit) -> Result<Self> {
        let frames = generate_camera_path(cloud.params().frame_count, orbit)?;

        let n = cloud.len();
        let mut scene = SceneData {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
            t: Vec::with_capacity(n),
            colors: Vec::with_capacity(n),
            camera_eyes: frames.iter().map(|f| f.eye.to_array()).collect(),
        };

        for point in cloud.points() {
            scene.x.push(point.position.x);
            scene.y.push(point.position.y);
            scene.z.push(point.position.z);
            scene.t.push(point.t);
            scene.colors.push(point.color.to_string());
        }

        scene.check_finite()?;
        Ok(scene)
    }

    /// Generate the scene for a named preset over a single revolution
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown preset name
    pub fn from_preset(name: &str) -> Result<Self> {
        generate_scene(crate::presets::preset(name)?)
    }

    /// Get the number of points
    pub fn point_count(&self) -> usize {
        self.x.len()
    }

    /// Get the number of camera frames
    pub fn frame_count(&self) -> usize {
        self.camera_eyes.len()
    }

    /// Check if scene has no points
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    fn check_finite(&self) -> Result<()> {
        let columns = [("x", &self.x), ("y", &self.y), ("z", &self.z), ("t", &self.t)];
        for (name, column) in columns {
            if let Some(i) = column.iter().position(|v| !v.is_finite()) {
                log::warn!("Scene column {} has non-finite value at {}", name, i);
                return Err(PhyllotaxisError::InternalComputation(format!(
                    "non-finite {} at point {}",
                    name, i
                )));
            }
        }
        if let Some(i) = self
            .camera_eyes
            .iter()
            .position(|eye| eye.iter().any(|v| !v.is_finite()))
        {
            log::warn!("Camera frame {} is not finite", i);
            return Err(PhyllotaxisError::InternalComputation(format!(
                "non-finite camera eye at frame {}",
                i
            )));
        }
        Ok(())
    }
}

/// Generate a full scene with the camera making one revolution
///
/// The camera path has `params.frame_count` frames.
///
/// # Example
///
/// ```rust
/// use sunflower_cloud::*;
///
/// let scene = generate_scene(GenerationParams::default()).unwrap();
/// assert_eq!(scene.point_count(), 1000);
/// assert_eq!(scene.frame_count(), 100);
/// assert_eq!(scene.colors[0], "rgba(0,100,255,0.9)");
/// ```
pub fn generate_scene(params: GenerationParams) -> Result<SceneData> {
    generate_scene_with_orbit(params, &CameraOrbit::single_revolution())
}

/// Generate a full scene with an explicit camera orbit
pub fn generate_scene_with_orbit(params: GenerationParams, orbit: &CameraOrbit) -> Result<SceneData> {
    let cloud = PointCloud::generate(params)?;
    SceneData::from_cloud(&cloud, orbit)
}
