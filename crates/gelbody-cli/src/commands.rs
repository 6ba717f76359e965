//! CLI command implementations.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use gelbody_io::tetgen::{load_tetgen, write_tetgen};
use gelbody_io::{
    load_config, load_input, validate_config, validate_input, SimulationInput, SimulationMetrics,
};
use gelbody_math::{Transform, Vec3};
use gelbody_mesh::generators::tet_box;
use gelbody_mesh::{TetMesh, TetTopology, TriangleMesh};
use gelbody_solver::{ElasticBody, Scene, SimulationConfig};
use gelbody_types::GelError;
use tracing::info;

type CliResult = Result<(), Box<dyn Error>>;

fn is_node_file(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "node")
}

fn base_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("."))
}

fn load_node_pair(node: &Path) -> Result<TetMesh, GelError> {
    load_tetgen(node, &node.with_extension("ele"))
}

/// Run a simulation from an input file.
pub fn simulate(input_path: &Path, frames: Option<u32>, output: Option<&Path>) -> CliResult {
    let mut input = load_input(input_path)?;
    if let Some(frames) = frames {
        input.frames = frames;
    }
    validate_input(&input)?;

    let mesh = input.mesh.load(base_dir(input_path))?;
    let timestep = input.config.timestep;
    let mut render = TriangleMesh::default();
    let mut body = ElasticBody::new(
        &mesh,
        &render,
        input.transform,
        input.config,
        input.scene,
    )?;

    info!(
        input = %input_path.display(),
        frames = input.frames,
        method = body.integrator_name(),
        "starting simulation"
    );

    let start = Instant::now();
    let mut metrics = SimulationMetrics::default();
    for frame in 0..input.frames {
        let time = frame as f32 * timestep;
        let report = body.fixed_update(time)?;
        body.frame_update(time, &mut render);
        metrics.total_contacts += u64::from(report.contacts);
        metrics.degenerate_tetrahedra = report.degenerate_tetrahedra;
        metrics.fixed_updates += 1;
    }

    metrics.wall_time_seconds = start.elapsed().as_secs_f64();
    metrics.simulated_time = metrics.fixed_updates as f32 * timestep;
    metrics.final_kinetic_energy = body.kinetic_energy();
    metrics.final_potential_energy = body.potential_energy();
    if let Some((min, max)) = body.state().bounds() {
        metrics.bounds_min = min;
        metrics.bounds_max = max;
    }

    info!(
        wall_time = metrics.wall_time_seconds,
        contacts = metrics.total_contacts,
        "simulation finished"
    );

    let json = serde_json::to_string_pretty(&metrics)?;
    match output {
        Some(path) => {
            fs::write(path, &json)?;
            println!("Metrics written to: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Validate a simulation input, a config file or a TetGen mesh.
pub fn validate(path: &Path) -> CliResult {
    println!("gelbody Validator");
    println!("─────────────────");
    println!();

    if is_node_file(path) {
        println!("Validating mesh: {}", path.display());
        let mesh = load_node_pair(path)?;
        println!(
            "✅ Mesh is valid ({} nodes, {} tetrahedra).",
            mesh.node_count(),
            mesh.tetrahedron_count()
        );
        return Ok(());
    }

    match load_input(path) {
        Ok(input) => {
            println!("Validating simulation input: {}", path.display());
            validate_input(&input)?;
            let mesh = input.mesh.load(base_dir(path))?;
            mesh.validate()?;
            println!(
                "✅ Input is valid ({} nodes, {} tetrahedra, {} frames).",
                mesh.node_count(),
                mesh.tetrahedron_count(),
                input.frames
            );
        }
        // Not an input document; try it as a bare config.
        Err(GelError::Serialization(input_err)) => {
            let config = load_config(path)
                .map_err(|_| GelError::Serialization(input_err))?;
            println!("Validating config: {}", path.display());
            validate_config(&config)?;
            println!("✅ Config is valid.");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Print proxy mesh statistics.
pub fn inspect(path: &Path) -> CliResult {
    let (mesh, transform, config) = if is_node_file(path) {
        (load_node_pair(path)?, Transform::IDENTITY, SimulationConfig::default())
    } else {
        let SimulationInput {
            mesh,
            transform,
            config,
            ..
        } = load_input(path)?;
        (mesh.load(base_dir(path))?, transform, config)
    };

    let world = mesh.transformed(&transform);
    let topology = TetTopology::build(&world);
    let body = ElasticBody::new(
        &mesh,
        &TriangleMesh::default(),
        transform,
        config,
        Scene::default(),
    )?;
    let degenerate = body.tetrahedra().iter().filter(|t| t.is_degenerate()).count();

    println!("gelbody Mesh Inspector");
    println!("──────────────────────");
    println!();
    println!("Nodes:          {}", world.node_count());
    println!("Tetrahedra:     {}", world.tetrahedron_count());
    println!("Springs:        {}", body.springs().len());
    println!("Shared edges:   {}", topology.shared_edge_count());
    println!("Surface faces:  {}", topology.surface_faces.len());
    println!("Closed surface: {}", topology.is_closed());
    println!("Degenerate:     {degenerate}");
    println!("Total volume:   {:.6}", world.total_volume());
    println!("Total mass:     {:.6}", body.state().total_mass());
    if let Some((min, max)) = body.state().bounds() {
        println!(
            "Bounds:         [{:.4}, {:.4}, {:.4}] .. [{:.4}, {:.4}, {:.4}]",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }
    Ok(())
}

/// Write a subdivided box as a TetGen pair.
pub fn generate(output: &Path, cells: &[usize], size: &[f32]) -> CliResult {
    let (&[nx, ny, nz], &[sx, sy, sz]) = (cells, size) else {
        return Err("expected three cell counts and three sizes".into());
    };
    if nx == 0 || ny == 0 || nz == 0 {
        return Err("cell counts must be non-zero".into());
    }

    let mesh = tet_box(nx, ny, nz, Vec3::new(sx, sy, sz));
    mesh.validate()?;
    let (node_text, ele_text) = write_tetgen(&mesh);

    let node_path = with_suffix(output, "node");
    let ele_path = with_suffix(output, "ele");
    fs::write(&node_path, node_text)?;
    fs::write(&ele_path, ele_text)?;

    println!(
        "Wrote {} nodes to {} and {} tetrahedra to {}",
        mesh.node_count(),
        node_path.display(),
        mesh.tetrahedron_count(),
        ele_path.display()
    );
    Ok(())
}

fn with_suffix(stem: &Path, extension: &str) -> PathBuf {
    let mut name = stem.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
