//! Simulation configuration.
//!
//! Parameters that control the integrator and the force model: step size,
//! substeps, physical coefficients, wind and collision settings. Every
//! field may be changed between fixed updates.

use gelbody_math::Vec3;
use gelbody_types::constants;
use serde::{Deserialize, Serialize};

/// Time integration scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMethod {
    /// Forward Euler: position from the old velocity.
    Explicit,
    /// Semi-implicit Euler: position from the new velocity.
    #[default]
    Symplectic,
    /// Two-stage midpoint (RK2).
    Midpoint,
    /// Symplectic Euler with a per-node implicit penalty solve.
    SymplecticImplicitCollisions,
}

/// How often wind forces are recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindPrecision {
    /// Every substep.
    #[default]
    High,
    /// Once per fixed update.
    Medium,
    /// Once per frame update.
    Low,
}

/// Wind loading over the surface faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindSettings {
    /// Whether wind forces are applied.
    pub enabled: bool,
    /// Drag coefficient in `[0, 1]`.
    pub friction: f32,
    /// Recompute frequency.
    pub precision: WindPrecision,
}

impl Default for WindSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            friction: constants::DEFAULT_WIND_FRICTION,
            precision: WindPrecision::High,
        }
    }
}

/// Penalty collision response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionSettings {
    /// Whether colliders are queried.
    pub enabled: bool,
    /// Penalty spring stiffness `k`.
    pub penalty_stiffness: f32,
    /// Skin distance added to every collider surface.
    pub offset: f32,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            penalty_stiffness: constants::DEFAULT_PENALTY_STIFFNESS,
            offset: constants::DEFAULT_COLLISION_OFFSET,
        }
    }
}

/// Configuration for the soft body simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Integration scheme.
    pub method: IntegrationMethod,

    /// Fixed update interval in seconds.
    pub timestep: f32,

    /// Substeps per fixed update; each advances `timestep / substeps`.
    pub substeps: u32,

    /// When set, fixed updates are skipped.
    pub paused: bool,

    /// Gravity vector in m/s².
    pub gravity: Vec3,

    /// Mass per unit volume.
    pub density: f32,

    /// Velocity damping applied per node.
    pub node_damping: f32,

    /// Damping along each spring.
    pub spring_damping: f32,

    /// Spring stiffness coefficient.
    pub stiffness: f32,

    /// Wind settings.
    pub wind: WindSettings,

    /// Collision settings.
    pub collision: CollisionSettings,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            method: IntegrationMethod::default(),
            timestep: constants::DEFAULT_TIMESTEP,
            substeps: constants::DEFAULT_SUBSTEPS,
            paused: false,
            gravity: Vec3::new(0.0, -constants::GRAVITY, 0.0),
            density: constants::DEFAULT_DENSITY,
            node_damping: constants::DEFAULT_NODE_DAMPING,
            spring_damping: constants::DEFAULT_SPRING_DAMPING,
            stiffness: constants::DEFAULT_STIFFNESS,
            wind: WindSettings::default(),
            collision: CollisionSettings::default(),
        }
    }
}

impl SimulationConfig {
    /// Creates a config for debugging (single substep, explicit Euler).
    pub fn debug() -> Self {
        Self {
            method: IntegrationMethod::Explicit,
            substeps: 1,
            ..Default::default()
        }
    }

    /// Creates a high-quality config (more substeps, implicit collisions).
    pub fn high_quality() -> Self {
        Self {
            method: IntegrationMethod::SymplecticImplicitCollisions,
            substeps: 20,
            ..Default::default()
        }
    }

    /// Step size of one substep.
    #[inline]
    pub fn substep_dt(&self) -> f32 {
        self.timestep / self.substeps.max(1) as f32
    }
}
