//! Configuration and input validation.
//!
//! Validates simulation inputs before a body is built, catching data-level
//! errors early with clear diagnostics.

use gelbody_contact::Collider;
use gelbody_solver::SimulationConfig;
use gelbody_types::{GelError, GelResult};

use crate::contract::{MeshSource, SimulationInput};

fn invalid(message: impl Into<String>) -> GelError {
    GelError::InvalidConfig(message.into())
}

/// Validates simulation parameters.
///
/// Checks:
/// - Timestep is positive and substeps >= 1
/// - Density, damping and stiffness are non-negative
/// - Wind friction lies in `[0, 1]`
/// - Penalty stiffness and collision offset are non-negative
/// - Gravity is finite
pub fn validate_config(config: &SimulationConfig) -> GelResult<()> {
    if !(config.timestep.is_finite() && config.timestep > 0.0) {
        return Err(invalid("Timestep must be positive"));
    }
    if config.substeps == 0 {
        return Err(invalid("Substeps must be >= 1"));
    }
    if !config.gravity.is_finite() {
        return Err(invalid("Gravity must be finite"));
    }

    let non_negative = [
        ("Density", config.density),
        ("Node damping", config.node_damping),
        ("Spring damping", config.spring_damping),
        ("Stiffness", config.stiffness),
        ("Penalty stiffness", config.collision.penalty_stiffness),
        ("Collision offset", config.collision.offset),
    ];
    for (name, value) in non_negative {
        if !(value.is_finite() && value >= 0.0) {
            return Err(invalid(format!("{name} must be non-negative, got {value}")));
        }
    }

    if !(0.0..=1.0).contains(&config.wind.friction) {
        return Err(invalid(format!(
            "Wind friction must lie in [0, 1], got {}",
            config.wind.friction
        )));
    }

    Ok(())
}

/// Validates a complete simulation input.
///
/// Checks:
/// - Simulation parameters (see [`validate_config`])
/// - At least one frame is requested
/// - Procedural box meshes have cells and size on every axis
/// - Collider and fixer dimensions are positive
/// - Body transform has non-zero scale
pub fn validate_input(input: &SimulationInput) -> GelResult<()> {
    validate_config(&input.config)?;

    if input.frames == 0 {
        return Err(invalid("Frame count must be >= 1"));
    }
    if let MeshSource::Box { cells, size } = &input.mesh {
        if cells.contains(&0) || size.min_element() <= 0.0 {
            return Err(invalid("Box mesh needs at least one cell and a positive size per axis"));
        }
    }
    if input.transform.scale.abs().min_element() <= 0.0 {
        return Err(invalid("Body transform scale must be non-zero"));
    }

    for (i, collider) in input.scene.colliders.iter().enumerate() {
        let ok = match collider {
            Collider::Sphere(s) => s.radius > 0.0,
            Collider::Plane(p) => p.half_extents.min_element() > 0.0 && p.normal.length() > 0.0,
            Collider::Box(b) => b.half_extents.min_element() > 0.0,
        };
        if !ok {
            return Err(invalid(format!("Collider {i} has a non-positive dimension")));
        }
    }

    for (i, fixer) in input.scene.fixers.iter().enumerate() {
        if fixer.half_extents.min_element() < 0.0 {
            return Err(invalid(format!("Fixer {i} has negative half extents")));
        }
    }

    for (i, source) in input.scene.wind_sources.iter().enumerate() {
        if !source.direction.is_finite() || !source.main.is_finite() {
            return Err(invalid(format!("Wind source {i} is not finite")));
        }
    }

    Ok(())
}
