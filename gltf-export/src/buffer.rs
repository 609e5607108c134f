//! Low-level buffer packing with automatic alignment and accessor creation

use gltf_json as json;
use gltf_json::validation::Checked::Valid;

use crate::glb::{align_buffer, compute_bounds};

/// Accessor index returned by buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Accessor indices for one packed triangle mesh
#[derive(Debug, Clone, Copy)]
pub struct MeshAccessors {
    pub positions: AccessorIndex,
    pub normals: AccessorIndex,
    pub indices: AccessorIndex,
}

/// Builder for the single binary buffer backing all mesh data.
///
/// Every pack call appends a 4-byte-aligned buffer view and one accessor
/// describing it.
pub struct BufferBuilder {
    buffer: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl BufferBuilder {
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            views: Vec::new(),
            accessors: Vec::new(),
        }
    }

    /// Binary buffer contents packed so far
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    pub fn accessor_count(&self) -> u32 {
        self.accessors.len() as u32
    }

    /// Pack Vec3 positions with min/max bounds on the accessor
    pub fn pack_positions(&mut self, positions: &[[f32; 3]]) -> AccessorIndex {
        let view = self.push_view(
            bytemuck::cast_slice(positions),
            json::buffer::Target::ArrayBuffer,
        );

        let (min, max) = compute_bounds(positions);
        self.push_accessor(json::Accessor {
            buffer_view: Some(view),
            byte_offset: Some(0u64.into()),
            count: positions.len().into(),
            component_type: Valid(json::accessor::GenericComponentType(
                json::accessor::ComponentType::F32,
            )),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(json::accessor::Type::Vec3),
            min: Some(json::Value::Array(
                min.into_iter().map(json::Value::from).collect(),
            )),
            max: Some(json::Value::Array(
                max.into_iter().map(json::Value::from).collect(),
            )),
            name: None,
            normalized: false,
            sparse: None,
        })
    }

    /// Pack Vec3 attribute data without bounds (normals)
    pub fn pack_vec3(&mut self, data: &[[f32; 3]]) -> AccessorIndex {
        let view = self.push_view(
            bytemuck::cast_slice(data),
            json::buffer::Target::ArrayBuffer,
        );

        self.push_accessor(json::Accessor {
            buffer_view: Some(view),
            byte_offset: Some(0u64.into()),
            count: data.len().into(),
            component_type: Valid(json::accessor::GenericComponentType(
                json::accessor::ComponentType::F32,
            )),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(json::accessor::Type::Vec3),
            min: None,
            max: None,
            name: None,
            normalized: false,
            sparse: None,
        })
    }

    /// Pack u16 triangle indices
    pub fn pack_indices_u16(&mut self, indices: &[u16]) -> AccessorIndex {
        let view = self.push_view(
            bytemuck::cast_slice(indices),
            json::buffer::Target::ElementArrayBuffer,
        );

        self.push_accessor(json::Accessor {
            buffer_view: Some(view),
            byte_offset: Some(0u64.into()),
            count: indices.len().into(),
            component_type: Valid(json::accessor::GenericComponentType(
                json::accessor::ComponentType::U16,
            )),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(json::accessor::Type::Scalar),
            min: None,
            max: None,
            name: None,
            normalized: false,
            sparse: None,
        })
    }

    fn push_view(
        &mut self,
        bytes: &[u8],
        target: json::buffer::Target,
    ) -> json::Index<json::buffer::View> {
        let offset = self.buffer.len();
        self.buffer.extend_from_slice(bytes);

        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: (bytes.len() as u64).into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(target)),
        });

        align_buffer(&mut self.buffer);
        json::Index::new(self.views.len() as u32 - 1)
    }

    fn push_accessor(&mut self, accessor: json::Accessor) -> AccessorIndex {
        let index = AccessorIndex(self.accessors.len() as u32);
        self.accessors.push(accessor);
        index
    }
}

impl Default for BufferBuilder {
    fn default() -> Self {
        Self::new()
    }
}
