//! Core data structures for meshweld
//!
//! This crate provides the types shared by the loader and element-rendering
//! crates: points, geometry buffers, material descriptors, scene-graph nodes,
//! transforms, and the parse/merge operation that flattens a loaded scene
//! into a single material-grouped geometry.

pub mod point;
pub mod geometry;
pub mod material;
pub mod scene;
pub mod transform;
pub mod parsed;
pub mod error;

pub use point::*;
pub use geometry::*;
pub use material::*;
pub use scene::*;
pub use transform::*;
pub use parsed::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix4, UnitQuaternion};

/// Common result type for meshweld operations
pub type Result<T> = std::result::Result<T, Error>;
