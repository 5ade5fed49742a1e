//! # meshweld
//!
//! An adapter between loaded 3D scene graphs and declarative component
//! trees: load a model from glTF or OBJ, normalize its orientation and
//! scale, merge its mesh geometries into one material-grouped buffer, and
//! render its materials as UI elements.
//!
//! This is the umbrella crate that re-exports the member crates. Use it to
//! get everything in one place, or depend on the individual crates for more
//! granular control over dependencies.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use meshweld::prelude::*;
//!
//! # fn main() -> meshweld::Result<()> {
//! let parsed = load_parsed("assets/robot.gltf", &ParseSettings::default())?;
//! for material in &parsed.materials {
//!     if let Some(element) = create_material(material) {
//!         println!("{element}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: enables `io` and `elements`
//! - `io`: file loading (glTF/GLB, OBJ)
//! - `elements`: material-to-element rendering

// Re-export core functionality
pub use meshweld_core::*;

// Re-export sub-crates
#[cfg(feature = "io")]
pub use meshweld_io as io;

#[cfg(feature = "elements")]
pub use meshweld_elements as elements;

/// Convenient imports for common use cases
pub mod prelude {
    pub use meshweld_core::*;

    #[cfg(feature = "io")]
    pub use meshweld_io::*;

    #[cfg(feature = "elements")]
    pub use meshweld_elements::*;
}
