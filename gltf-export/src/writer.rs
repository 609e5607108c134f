//! Scene export to GLB and GLTF-separate files
//!
//! Path derivation and the dual-export rule: a document always exports as
//! `<dir>/<name>.glb`; documents whose name starts with `Test` additionally
//! export as `<dir>/<name>.gltf` with a `<name>.bin` sidecar.

use anyhow::{Context, Result};
use gltf_json as json;
use std::fs;
use std::path::{Path, PathBuf};

use grid_scene::{Primitive, Scene};

use crate::buffer::{BufferBuilder, MeshAccessors};
use crate::document::GltfBuilder;
use crate::glb::assemble_glb;
use crate::primitives::{cube, uv_sphere};

/// Output form of one export operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Single binary `.glb` container
    Glb,
    /// JSON `.gltf` plus external `.bin` buffer
    GltfSeparate,
}

/// Document names with this prefix export in both formats
const DUAL_EXPORT_PREFIX: &str = "Test";

/// Sphere tessellation used for every generated sphere object
const SPHERE_SEGMENTS: u32 = 16;
const SPHERE_RINGS: u32 = 16;
const SPHERE_RADIUS: f32 = 1.0;
const CUBE_HALF_EXTENT: f32 = 0.5;

/// Build the glTF document and binary buffer for a scene.
///
/// Geometry is packed once per primitive kind; every object gets its own
/// uniquely named mesh, node, and material referencing the shared accessors.
fn build_document(scene: &Scene, bin_uri: Option<&str>) -> (json::Root, Vec<u8>) {
    let mut buffer = BufferBuilder::new();
    let mut sphere_accessors: Option<MeshAccessors> = None;
    let mut cube_accessors: Option<MeshAccessors> = None;

    let mut gltf = GltfBuilder::new();
    let mut root_nodes = Vec::with_capacity(scene.len());

    for object in scene.objects() {
        let accessors = match object.primitive {
            Primitive::Sphere => *sphere_accessors.get_or_insert_with(|| {
                uv_sphere(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_RINGS).pack(&mut buffer)
            }),
            Primitive::Cube => *cube_accessors
                .get_or_insert_with(|| cube(CUBE_HALF_EXTENT).pack(&mut buffer)),
        };

        let material = gltf.add_material(
            &object.material.name,
            object.material.roughness,
            object.material.metallic,
        );
        let mesh = gltf.add_mesh(&object.name, &accessors, material);
        let node = gltf.add_mesh_node(&object.name, mesh, object.translation.to_array());
        root_nodes.push(node);
    }

    let gltf = gltf
        .buffer_byte_length(buffer.data().len() as u64)
        .add_scene("Scene", &root_nodes);
    let gltf = match bin_uri {
        Some(uri) => gltf.buffer_uri(uri),
        None => gltf,
    };

    let root = gltf.build(buffer.views(), buffer.accessors(), env!("CARGO_PKG_NAME"));
    let data = buffer.data().to_vec();
    (root, data)
}

/// Write a scene to `path` in the requested format.
///
/// Returns the paths written: one for GLB, the `.gltf` and its `.bin`
/// sidecar for the separate form. Failures are fatal; nothing is retried or
/// rolled back.
pub fn write_scene(scene: &Scene, path: &Path, format: ExportFormat) -> Result<Vec<PathBuf>> {
    match format {
        ExportFormat::Glb => {
            let (root, data) = build_document(scene, None);
            let glb = assemble_glb(&root, &data)?;
            fs::write(path, &glb)
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(vec![path.to_path_buf()])
        }
        ExportFormat::GltfSeparate => {
            let bin_path = path.with_extension("bin");
            let bin_name = bin_path
                .file_name()
                .context("export path has no file name")?
                .to_string_lossy()
                .into_owned();

            let (root, data) = build_document(scene, Some(&bin_name));
            let gltf_text = json::serialize::to_string_pretty(&root)
                .context("failed to serialize glTF JSON")?;

            fs::write(path, gltf_text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            fs::write(&bin_path, &data)
                .with_context(|| format!("failed to write {}", bin_path.display()))?;
            Ok(vec![path.to_path_buf(), bin_path])
        }
    }
}

/// Export a named document into `output_dir` using the deterministic path
/// rule: always `<name>.glb`; when `name` starts with `Test`, additionally
/// `<name>.gltf` + `<name>.bin`.
pub fn export_document(
    scene: &Scene,
    output_dir: &Path,
    document_name: &str,
) -> Result<Vec<PathBuf>> {
    let mut written =
        write_scene(scene, &output_dir.join(format!("{document_name}.glb")), ExportFormat::Glb)?;

    if document_name.starts_with(DUAL_EXPORT_PREFIX) {
        written.extend(write_scene(
            scene,
            &output_dir.join(format!("{document_name}.gltf")),
            ExportFormat::GltfSeparate,
        )?);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_scene::{populate, GridParams};
    use tempfile::TempDir;

    fn dual_grid_scene() -> Scene {
        let mut scene = Scene::new();
        populate(
            &mut scene,
            &[
                GridParams::new(Primitive::Sphere, 5.0),
                GridParams::new(Primitive::Cube, -5.0),
            ],
        )
        .unwrap();
        scene
    }

    fn sphere_scene() -> Scene {
        let mut scene = Scene::new();
        populate(&mut scene, &[GridParams::new(Primitive::Sphere, 0.0)]).unwrap();
        scene
    }

    #[test]
    fn glb_reparses_with_expected_counts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("PBR_Grid.glb");
        write_scene(&dual_grid_scene(), &path, ExportFormat::Glb).unwrap();

        let gltf = gltf::Gltf::open(&path).unwrap();
        let doc = gltf.document;
        assert_eq!(doc.nodes().count(), 242);
        assert_eq!(doc.meshes().count(), 242);
        assert_eq!(doc.materials().count(), 242);
        assert_eq!(doc.scenes().count(), 1);
        // One accessor triple per primitive kind, shared across meshes
        assert_eq!(doc.accessors().count(), 6);
    }

    #[test]
    fn material_factors_survive_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("PBR_Spheres.glb");
        write_scene(&sphere_scene(), &path, ExportFormat::Glb).unwrap();

        let gltf = gltf::Gltf::open(&path).unwrap();
        let corner = gltf
            .document
            .materials()
            .find(|m| m.name() == Some("Material_Sphere_x0_z0"))
            .expect("corner material");
        let pbr = corner.pbr_metallic_roughness();
        assert_eq!(pbr.roughness_factor(), 0.0);
        assert_eq!(pbr.metallic_factor(), 1.0);

        let far = gltf
            .document
            .materials()
            .find(|m| m.name() == Some("Material_Sphere_x10_z10"))
            .expect("far corner material");
        let pbr = far.pbr_metallic_roughness();
        assert_eq!(pbr.roughness_factor(), 1.0);
        assert_eq!(pbr.metallic_factor(), 0.0);
    }

    #[test]
    fn node_translations_match_scene_objects() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("PBR_Spheres.glb");
        let scene = sphere_scene();
        write_scene(&scene, &path, ExportFormat::Glb).unwrap();

        let gltf = gltf::Gltf::open(&path).unwrap();
        let node = gltf
            .document
            .nodes()
            .find(|n| n.name() == Some("Sphere_x0_z0"))
            .expect("corner node");
        let (translation, _, _) = node.transform().decomposed();
        assert_eq!(translation, [-12.5, 0.0, -12.5]);
    }

    #[test]
    fn separate_export_writes_json_and_sidecar() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("TestScene.gltf");
        let written =
            write_scene(&sphere_scene(), &path, ExportFormat::GltfSeparate).unwrap();

        assert_eq!(written.len(), 2);
        assert!(path.exists());
        assert!(dir.path().join("TestScene.bin").exists());

        // Full import resolves the external buffer
        let (doc, buffers, _) = gltf::import(&path).unwrap();
        assert_eq!(doc.nodes().count(), 121);
        assert!(!buffers.is_empty());
    }

    #[test]
    fn test_prefix_triggers_dual_export() {
        let dir = TempDir::new().unwrap();
        let written = export_document(&sphere_scene(), dir.path(), "TestScene").unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["TestScene.glb", "TestScene.gltf", "TestScene.bin"]);
        assert!(written.iter().all(|p| p.exists()));
    }

    #[test]
    fn plain_names_export_binary_only() {
        let dir = TempDir::new().unwrap();
        let written = export_document(&sphere_scene(), dir.path(), "Level01").unwrap();

        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("Level01.glb"));
        assert!(!dir.path().join("Level01.gltf").exists());
    }

    fn json_chunk(glb: &[u8]) -> Option<&[u8]> {
        if glb.len() < 12 || &glb[0..4] != b"glTF" {
            return None;
        }
        let mut offset = 12;
        while offset + 8 <= glb.len() {
            let chunk_len = u32::from_le_bytes([
                glb[offset],
                glb[offset + 1],
                glb[offset + 2],
                glb[offset + 3],
            ]) as usize;
            let chunk_type = &glb[offset + 4..offset + 8];
            offset += 8;

            if offset + chunk_len > glb.len() {
                return None;
            }
            if chunk_type == b"JSON" {
                return Some(&glb[offset..offset + chunk_len]);
            }
            offset += chunk_len;
        }
        None
    }

    #[test]
    fn empty_scene_still_produces_a_wellformed_container() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Empty.glb");
        write_scene(&Scene::new(), &path, ExportFormat::Glb).unwrap();

        let glb = std::fs::read(&path).unwrap();
        let json_bytes = json_chunk(&glb).expect("JSON chunk");
        let text = String::from_utf8_lossy(json_bytes);
        assert!(text.contains("\"version\":\"2.0\""));
        assert!(!text.contains("Sphere_"));
    }

    #[test]
    fn write_failure_is_fatal() {
        let missing = Path::new("/nonexistent-dir/PBR_Grid.glb");
        let err = write_scene(&sphere_scene(), missing, ExportFormat::Glb).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }
}
