//! Scene model and deterministic grid generation for PBR calibration assets
//!
//! This crate provides the data side of the asset pipeline:
//! - Scene: an explicit, owned container of generated objects
//! - PbrMaterial: per-object roughness/metallic factors
//! - generate_grid / populate: deterministic square-grid generation where
//!   roughness ramps along the z axis and metallic ramps along the x axis
//!
//! The generator is pure: it returns objects rather than mutating ambient
//! state, so it can be tested without any host renderer or file output.

pub mod error;
pub mod generate;
pub mod material;
pub mod params;
pub mod scene;

pub use error::GridError;
pub use generate::{generate_grid, populate};
pub use material::{metallic_for_column, roughness_for_row, PbrMaterial};
pub use params::GridParams;
pub use scene::{Primitive, Scene, SceneObject};
