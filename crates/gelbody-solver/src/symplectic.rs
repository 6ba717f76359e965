//! Semi-implicit (symplectic) Euler.

use gelbody_types::GelResult;

use crate::strategy::{compute_forces, explicit_contact_forces, IntegrationStrategy, StepContext, StepResult};

/// Velocity advances first and the new velocity moves the position.
/// Energy stays bounded for unforced oscillation. The default scheme.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymplecticEuler;

impl IntegrationStrategy for SymplecticEuler {
    fn step(&mut self, ctx: &mut StepContext<'_>, dt: f32) -> GelResult<StepResult> {
        compute_forces(ctx);

        let mut contacts = 0;
        for i in 0..ctx.state.node_count {
            if ctx.state.is_fixed(i) {
                continue;
            }
            let (penalty, hits) = explicit_contact_forces(ctx.colliders, ctx.config, ctx.state.positions[i])?;
            contacts += hits;

            let state = &mut *ctx.state;
            let inv_m = state.inverse_mass(i);
            state.penalty_forces[i] = penalty;
            state.forces[i] += penalty;

            state.velocities[i] += dt * inv_m * state.forces[i];
            state.positions[i] += dt * state.velocities[i];
        }

        Ok(StepResult { contacts })
    }

    fn name(&self) -> &str {
        "symplectic"
    }
}
