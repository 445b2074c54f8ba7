//! Core point placement algorithm
//!
//! Places points on a sphere surface along the golden-angle spiral.

mod phyllotaxis;

pub use phyllotaxis::{generate_phyllotaxis_points, golden_angle, sequence_position, GOLDEN_ANGLE};
