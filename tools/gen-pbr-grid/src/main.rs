//! Generate PBR calibration-grid scenes and export them to glTF
//!
//! The default run reproduces the classic dual-grid layout: an 11x11 sphere
//! grid at y = 5 and an 11x11 cube grid at y = -5, with roughness sweeping
//! 0 -> 1 along z and metallic sweeping 1 -> 0 along x, exported as
//! `PBR_Grid.glb` in the current directory. Document names starting with
//! `Test` additionally export the JSON `.gltf` form with a `.bin` sidecar.
//!
//! Usage:
//!   cargo run -p gen-pbr-grid
//!   cargo run -p gen-pbr-grid -- --single
//!   cargo run -p gen-pbr-grid -- --name TestScene --output-dir out/

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use gltf_export::export_document;
use grid_scene::{populate, GridParams, Primitive, Scene};

/// Vertical offset of the sphere layer in the dual-grid layout
const SPHERE_OFFSET_Y: f32 = 5.0;
/// Vertical offset of the cube layer in the dual-grid layout
const CUBE_OFFSET_Y: f32 = -5.0;

#[derive(Parser)]
#[command(about = "Generate PBR calibration grids and export them to GLB/GLTF")]
struct Args {
    /// Directory the exported files are written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Document base name; names starting with "Test" also export .gltf
    #[arg(long)]
    name: Option<String>,

    /// Generate only the sphere grid at y = 0 instead of the dual layout
    #[arg(long)]
    single: bool,
}

/// Grid layers and default document name for the chosen layout
fn layout(single: bool) -> (Vec<GridParams>, &'static str) {
    if single {
        (vec![GridParams::new(Primitive::Sphere, 0.0)], "PBR_Spheres")
    } else {
        (
            vec![
                GridParams::new(Primitive::Sphere, SPHERE_OFFSET_Y),
                GridParams::new(Primitive::Cube, CUBE_OFFSET_Y),
            ],
            "PBR_Grid",
        )
    }
}

fn run(output_dir: &Path, name: Option<&str>, single: bool) -> Result<Vec<PathBuf>> {
    let (layers, default_name) = layout(single);
    let document_name = name.unwrap_or(default_name);

    let mut scene = Scene::new();
    let count = populate(&mut scene, &layers).context("grid generation failed")?;
    println!("Generated {count} objects in {} layer(s)", layers.len());

    export_document(&scene, output_dir, document_name)
        .with_context(|| format!("export of {document_name} failed"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("### START ###");

    let written = run(&args.output_dir, args.name.as_deref(), args.single)?;
    for path in &written {
        println!("Output File: {}", path.display());
    }

    println!("### FINISHED ###");
    Ok(())
}
