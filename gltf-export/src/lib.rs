//! glTF 2.0 document construction and file output
//!
//! Builder-pattern APIs for turning a generated [`grid_scene::Scene`] into
//! glTF files:
//! - [`BufferBuilder`]: pack binary attribute data with automatic alignment
//! - [`TriangleMesh`] and the primitive constructors [`uv_sphere`] / [`cube`]
//! - [`GltfBuilder`]: top-level document construction (nodes, meshes,
//!   materials, scenes)
//! - [`write_scene`] / [`export_document`]: `.glb` and `.gltf` + `.bin`
//!   output, including the `Test` name-prefix dual-export rule
//!
//! # Example
//!
//! ```no_run
//! use grid_scene::{populate, GridParams, Primitive, Scene};
//! use gltf_export::export_document;
//!
//! let mut scene = Scene::new();
//! populate(&mut scene, &[GridParams::new(Primitive::Sphere, 0.0)])?;
//! let written = export_document(&scene, std::path::Path::new("."), "PBR_Spheres")?;
//! # anyhow::Ok(())
//! ```

pub mod buffer;
pub mod document;
pub mod glb;
pub mod primitives;
pub mod writer;

pub use buffer::{AccessorIndex, BufferBuilder, MeshAccessors};
pub use document::GltfBuilder;
pub use glb::{align_buffer, assemble_glb, compute_bounds};
pub use primitives::{cube, uv_sphere, TriangleMesh};
pub use writer::{export_document, write_scene, ExportFormat};

// Re-export commonly used gltf-json types
pub use gltf_json as json;
pub use gltf_json::validation::Checked::Valid;
