//! glTF document construction

use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use std::collections::BTreeMap;

use crate::buffer::MeshAccessors;

/// Builder for complete glTF documents.
///
/// Collects nodes, meshes, materials, and scenes, then assembles the final
/// `Root` together with the buffer views and accessors produced by a
/// `BufferBuilder`.
pub struct GltfBuilder {
    nodes: Vec<json::Node>,
    meshes: Vec<json::Mesh>,
    materials: Vec<json::Material>,
    scenes: Vec<json::Scene>,
    buffer_byte_length: u64,
    buffer_uri: Option<String>,
}

impl GltfBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            meshes: Vec::new(),
            materials: Vec::new(),
            scenes: Vec::new(),
            buffer_byte_length: 0,
            buffer_uri: None,
        }
    }

    /// Set buffer byte length (required before building)
    pub fn buffer_byte_length(mut self, length: u64) -> Self {
        self.buffer_byte_length = length;
        self
    }

    /// Reference an external `.bin` file instead of an embedded GLB chunk
    pub fn buffer_uri(mut self, uri: impl Into<String>) -> Self {
        self.buffer_uri = Some(uri.into());
        self
    }

    pub fn node_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    /// Add a factor-only PBR material and return its index
    pub fn add_material(
        &mut self,
        name: &str,
        roughness: f32,
        metallic: f32,
    ) -> json::Index<json::Material> {
        self.materials.push(json::Material {
            name: Some(name.to_string()),
            pbr_metallic_roughness: json::material::PbrMetallicRoughness {
                roughness_factor: json::material::StrengthFactor(roughness),
                metallic_factor: json::material::StrengthFactor(metallic),
                ..Default::default()
            },
            ..Default::default()
        });
        json::Index::new(self.materials.len() as u32 - 1)
    }

    /// Add a mesh whose primitive references already-packed accessors.
    ///
    /// Multiple meshes may share the same accessors; each still carries its
    /// own name and material.
    pub fn add_mesh(
        &mut self,
        name: &str,
        accessors: &MeshAccessors,
        material: json::Index<json::Material>,
    ) -> json::Index<json::Mesh> {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            Valid(json::mesh::Semantic::Positions),
            accessors.positions.as_json_index(),
        );
        attributes.insert(
            Valid(json::mesh::Semantic::Normals),
            accessors.normals.as_json_index(),
        );

        let primitive = json::mesh::Primitive {
            attributes,
            extensions: Default::default(),
            extras: Default::default(),
            indices: Some(accessors.indices.as_json_index()),
            material: Some(material),
            mode: Valid(json::mesh::Mode::Triangles),
            targets: None,
        };

        self.meshes.push(json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            primitives: vec![primitive],
            weights: None,
        });
        json::Index::new(self.meshes.len() as u32 - 1)
    }

    /// Add a translated leaf node referencing a mesh, returning its index
    pub fn add_mesh_node(
        &mut self,
        name: &str,
        mesh: json::Index<json::Mesh>,
        translation: [f32; 3],
    ) -> u32 {
        self.nodes.push(json::Node {
            camera: None,
            children: None,
            extensions: Default::default(),
            extras: Default::default(),
            matrix: None,
            mesh: Some(mesh),
            name: Some(name.to_string()),
            rotation: None,
            scale: None,
            skin: None,
            translation: Some(translation),
            weights: None,
        });
        self.nodes.len() as u32 - 1
    }

    /// Add a scene listing its root nodes
    pub fn add_scene(mut self, name: &str, root_nodes: &[u32]) -> Self {
        self.scenes.push(json::Scene {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            nodes: root_nodes.iter().map(|n| json::Index::new(*n)).collect(),
        });
        self
    }

    /// Build the final glTF root from this document plus the packed buffer
    /// views and accessors
    pub fn build(
        self,
        buffer_views: &[json::buffer::View],
        accessors: &[json::Accessor],
        generator: &str,
    ) -> json::Root {
        let buffers = vec![json::Buffer {
            byte_length: self.buffer_byte_length.into(),
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            uri: self.buffer_uri,
        }];

        json::Root {
            accessors: accessors.to_vec(),
            animations: Vec::new(),
            asset: json::Asset {
                copyright: None,
                extensions: Default::default(),
                extras: Default::default(),
                generator: Some(generator.to_string()),
                min_version: None,
                version: "2.0".to_string(),
            },
            buffers,
            buffer_views: buffer_views.to_vec(),
            cameras: Vec::new(),
            extensions: Default::default(),
            extensions_required: Vec::new(),
            extensions_used: Vec::new(),
            extras: Default::default(),
            images: Vec::new(),
            materials: self.materials,
            meshes: self.meshes,
            nodes: self.nodes,
            samplers: Vec::new(),
            scene: if self.scenes.is_empty() {
                None
            } else {
                Some(json::Index::new(0))
            },
            scenes: self.scenes,
            skins: Vec::new(),
            textures: Vec::new(),
        }
    }
}

impl Default for GltfBuilder {
    fn default() -> Self {
        Self::new()
    }
}
