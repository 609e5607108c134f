//! Explicit scene container for generated objects
//!
//! The original tooling mutated an implicit global document; here the scene
//! is an owned value threaded through generation and export.

use glam::Vec3;

use crate::material::PbrMaterial;

/// Primitive shape instantiated per grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// UV sphere, 16x16 segments, radius 1
    Sphere,
    /// Unit cube
    Cube,
}

impl Primitive {
    /// Object name prefix for this shape
    pub fn name_prefix(&self) -> &'static str {
        match self {
            Primitive::Sphere => "Sphere",
            Primitive::Cube => "Cube",
        }
    }
}

/// One generated object: a named, positioned primitive owning its material.
///
/// Created during generation and replaced wholesale by the next clear step;
/// never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub primitive: Primitive,
    pub translation: Vec3,
    pub material: PbrMaterial,
    /// Subdivision refinement was requested (cosmetic, honored by consumers)
    pub subdivided: bool,
    /// Smooth shading was requested (cosmetic, honored by consumers)
    pub smooth_shaded: bool,
}

/// Owned scene content, exclusively mutated by the generator for one run
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all objects and their materials wholesale
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn extend(&mut self, objects: impl IntoIterator<Item = SceneObject>) {
        self.objects.extend(objects);
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
