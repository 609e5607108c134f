//! Deterministic grid generation
//!
//! Cells are visited z-outer, x-inner (row-major raster order). The ordering
//! has no behavioral consequence since objects are independent, but it is
//! kept fixed so object lists compare equal across runs.

use glam::Vec3;

use crate::error::GridError;
use crate::material::{metallic_for_column, roughness_for_row, PbrMaterial};
use crate::params::GridParams;
use crate::scene::{Scene, SceneObject};

/// Generate one grid layer.
///
/// Returns `entries_per_axis²` objects centered on the origin in x/z, all at
/// `offset_y`. Object names are `{prefix}_x{x}_z{z}` and material names are
/// derived from them, so names stay unique across layers of different
/// primitives.
pub fn generate_grid(params: &GridParams) -> Result<Vec<SceneObject>, GridError> {
    params.validate()?;

    let n = params.entries_per_axis;
    let half_extent = n as f32 / 2.0;
    let mut objects = Vec::with_capacity((n * n) as usize);

    for z in 0..n {
        for x in 0..n {
            let name = format!("{}_x{x}_z{z}", params.primitive.name_prefix());
            let material = PbrMaterial {
                name: format!("Material_{name}"),
                roughness: roughness_for_row(z, n),
                metallic: metallic_for_column(x, n),
            };

            // Centering: shift by half the grid extent, then half a cell so
            // cell centers straddle the origin symmetrically.
            let translation = Vec3::new(
                (x as f32 - half_extent) * params.spacing + params.spacing / 2.0,
                params.offset_y,
                (z as f32 - half_extent) * params.spacing + params.spacing / 2.0,
            );

            objects.push(SceneObject {
                name,
                primitive: params.primitive,
                translation,
                material,
                subdivided: true,
                smooth_shaded: true,
            });
        }
    }

    Ok(objects)
}

/// Clear the scene and regenerate it from the given layers.
///
/// This unifies the original's single-grid and dual-grid scripts: pass one
/// layer or several. Returns the total object count. On error the scene is
/// left cleared; regeneration is idempotent, so callers simply re-run.
pub fn populate(scene: &mut Scene, layers: &[GridParams]) -> Result<usize, GridError> {
    scene.clear();
    for params in layers {
        scene.extend(generate_grid(params)?);
    }
    Ok(scene.len())
}
