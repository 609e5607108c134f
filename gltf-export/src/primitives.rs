//! Procedural primitive meshes for export
//!
//! Triangle meshes with positions, normals, and u16 indices. No UVs: the
//! generated objects carry factor-only materials, so texture coordinates
//! would be dead weight in the output files.

use glam::Vec3;
use std::f32::consts::PI;
use tracing::warn;

use crate::buffer::{BufferBuilder, MeshAccessors};

/// Unpacked triangle mesh data ready for buffer packing
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
}

impl TriangleMesh {
    fn add_vertex(&mut self, position: Vec3, normal: Vec3) -> u16 {
        let index = self.positions.len() as u16;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        index
    }

    fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Pack this mesh's attributes into the shared binary buffer
    pub fn pack(&self, buffer: &mut BufferBuilder) -> MeshAccessors {
        MeshAccessors {
            positions: buffer.pack_positions(&self.positions),
            normals: buffer.pack_vec3(&self.normals),
            indices: buffer.pack_indices_u16(&self.indices),
        }
    }
}

/// Generate a UV sphere with smooth normals.
///
/// `segments` is the longitudinal division count, `rings` the latitudinal
/// one. Produces `(rings + 1) * segments` vertices. Out-of-range parameters
/// are clamped with a warning rather than rejected.
pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> TriangleMesh {
    let radius = if radius <= 0.0 {
        warn!("uv_sphere: radius must be > 0.0, clamping to 0.001");
        0.001
    } else {
        radius
    };

    let segments = segments.clamp(3, 256);
    let rings = rings.clamp(2, 256);

    let mut mesh = TriangleMesh::default();

    for ring in 0..=rings {
        let phi = (ring as f32 / rings as f32) * PI;
        let y = radius * phi.cos();
        let ring_radius = radius * phi.sin();

        for seg in 0..segments {
            let theta = (seg as f32 / segments as f32) * 2.0 * PI;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();

            let position = Vec3::new(x, y, z);
            // Smooth normals point away from the center
            let normal = position.normalize_or(Vec3::Y);
            mesh.add_vertex(position, normal);
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let next_seg = (seg + 1) % segments;

            let i0 = (ring * segments + seg) as u16;
            let i1 = (ring * segments + next_seg) as u16;
            let i2 = ((ring + 1) * segments + seg) as u16;
            let i3 = ((ring + 1) * segments + next_seg) as u16;

            // CCW winding viewed from outside
            mesh.add_triangle(i0, i1, i3);
            mesh.add_triangle(i0, i3, i2);
        }
    }

    mesh
}

/// Generate an axis-aligned cube with flat normals (24 vertices, 12
/// triangles). `half_extent` is half the edge length; `cube(0.5)` is the
/// unit cube.
pub fn cube(half_extent: f32) -> TriangleMesh {
    let h = if half_extent <= 0.0 {
        warn!("cube: half_extent must be > 0.0, clamping to 0.001");
        0.001
    } else {
        half_extent
    };

    let mut mesh = TriangleMesh::default();

    let mut add_quad = |v0: Vec3, v1: Vec3, v2: Vec3, v3: Vec3, normal: Vec3| {
        let i0 = mesh.add_vertex(v0, normal);
        let i1 = mesh.add_vertex(v1, normal);
        let i2 = mesh.add_vertex(v2, normal);
        let i3 = mesh.add_vertex(v3, normal);

        // Two CCW triangles: v0=BL, v1=BR, v2=TR, v3=TL
        mesh.add_triangle(i0, i1, i2);
        mesh.add_triangle(i0, i2, i3);
    };

    // +Z
    add_quad(
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
        Vec3::Z,
    );
    // -Z
    add_quad(
        Vec3::new(h, -h, -h),
        Vec3::new(-h, -h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(h, h, -h),
        Vec3::NEG_Z,
    );
    // +Y
    add_quad(
        Vec3::new(-h, h, h),
        Vec3::new(h, h, h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::Y,
    );
    // -Y
    add_quad(
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, -h, h),
        Vec3::new(-h, -h, h),
        Vec3::NEG_Y,
    );
    // +X
    add_quad(
        Vec3::new(h, -h, h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(h, h, h),
        Vec3::X,
    );
    // -X
    add_quad(
        Vec3::new(-h, -h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(-h, h, h),
        Vec3::new(-h, h, -h),
        Vec3::NEG_X,
    );

    mesh
}
