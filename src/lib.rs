//! Phyllotaxis point cloud generation
//!
//! Lays points out on a sphere in the sunflower-seed spiral, colors them by
//! their position in the sequence, and produces an orbiting camera path for a
//! looping rotation animation. Rendering is left to the caller; the output is
//! plain data for any plotting library or engine.
//!
//! # Quick Start
//!
//! ```rust
//! use sunflower_cloud::*;
//!
//! let params = GenerationParamsBuilder::new()
//!     .point_count(1500)
//!     .unwrap()
//!     .color_scheme(ColorScheme::Rainbow)
//!     .build()
//!     .unwrap();
//!
//! // Points and camera frames as flat columns for a scatter plot
//! let scene = generate_scene(params).unwrap();
//! println!("{} points, {} frames", scene.point_count(), scene.frame_count());
//!
//! // Or start from a preset
//! let scene = SceneData::from_preset("dense").unwrap();
//! assert_eq!(scene.point_count(), 2000);
//! ```
//!
//! All generation is pure and deterministic: identical parameters produce
//! identical output, and nothing is shared between calls.
//!
//! # Features
//!
//! - `spatial-index` (default): Enables O(log n) position-to-point lookups using KD-tree
//! - `serde`: Enables serialization support for parameters, requests and scenes

// Modules
pub mod error;
pub mod config;
pub mod generation;
pub mod cloud;
pub mod camera;
pub mod presets;
pub mod request;
pub mod scene;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{PhyllotaxisError, Result};
pub use config::{ColorScheme, GenerationLimits, GenerationParams, GenerationParamsBuilder};
pub use cloud::{Point, PointCloud};
pub use camera::{generate_camera_path, CameraFrame, CameraOrbit};
pub use presets::{preset, preset_names, Preset};
pub use request::GenerationRequest;
pub use scene::{
    generate_scene, generate_scene_with_orbit, ColorMapper, GradientColorMapper, Rgba, SceneData,
};

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;
