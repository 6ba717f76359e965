//! Integration strategy trait, the core abstraction for time stepping.
//!
//! Every integrator implements this trait, enabling the body to swap
//! between explicit, symplectic, midpoint or implicit-collision stepping
//! at runtime. Each strategy starts with the shared force pass
//! ([`compute_forces`]) and then advances every free node.

use gelbody_contact::{explicit_penalty, Collider};
use gelbody_math::Vec3;
use gelbody_types::GelResult;

use crate::config::{IntegrationMethod, SimulationConfig};
use crate::explicit::ExplicitEuler;
use crate::implicit_collisions::SymplecticImplicitCollisions;
use crate::midpoint::Midpoint;
use crate::spring::SpringNetwork;
use crate::state::SimulationState;
use crate::symplectic::SymplecticEuler;
use crate::tetrahedron::Tetrahedron;

/// Everything a substep reads or writes.
pub struct StepContext<'a> {
    pub state: &'a mut SimulationState,
    pub springs: &'a mut SpringNetwork,
    pub tetrahedra: &'a [Tetrahedron],
    pub colliders: &'a [Collider],
    pub config: &'a SimulationConfig,
}

/// Result of one substep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResult {
    /// Node/collider contacts detected during the substep.
    pub contacts: u32,
}

/// Trait for time integration schemes.
///
/// The body calls, once per substep and after refreshing element volumes
/// and node masses:
///
/// ```text
/// strategy.step(&mut ctx, dt)?;
/// ```
///
/// # Implementations
///
/// - [`ExplicitEuler`]
/// - [`SymplecticEuler`]
/// - [`Midpoint`]
/// - [`SymplecticImplicitCollisions`]
pub trait IntegrationStrategy: Send {
    /// Advance every free node by `dt`.
    fn step(&mut self, ctx: &mut StepContext<'_>, dt: f32) -> GelResult<StepResult>;

    /// Returns the strategy name.
    fn name(&self) -> &str;
}

/// Creates the strategy for `method`.
pub fn strategy_for(method: IntegrationMethod) -> Box<dyn IntegrationStrategy> {
    match method {
        IntegrationMethod::Explicit => Box::new(ExplicitEuler),
        IntegrationMethod::Symplectic => Box::new(SymplecticEuler),
        IntegrationMethod::Midpoint => Box::new(Midpoint::default()),
        IntegrationMethod::SymplecticImplicitCollisions => Box::new(SymplecticImplicitCollisions),
    }
}

/// Shared force pass: every node force, then every spring force.
pub fn compute_forces(ctx: &mut StepContext<'_>) {
    ctx.state.accumulate_node_forces(ctx.config);
    ctx.springs.apply_forces(
        ctx.state,
        ctx.tetrahedra,
        ctx.config.stiffness,
        ctx.config.spring_damping,
    );
}

/// Sum of explicit penalty forces on a node at `position`.
///
/// Returns the summed force and the number of colliders touched. Yields
/// nothing when collisions are disabled.
pub fn explicit_contact_forces(
    colliders: &[Collider],
    config: &SimulationConfig,
    position: Vec3,
) -> GelResult<(Vec3, u32)> {
    let settings = &config.collision;
    if !settings.enabled {
        return Ok((Vec3::ZERO, 0));
    }

    let mut total = Vec3::ZERO;
    let mut count = 0;
    for collider in colliders {
        if let Some(contact) = collider.probe(position, settings.offset)? {
            total += explicit_penalty(position, contact.point, settings.penalty_stiffness);
            count += 1;
        }
    }
    Ok((total, count))
}
