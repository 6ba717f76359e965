//! Forward Euler.

use gelbody_types::GelResult;

use crate::strategy::{compute_forces, explicit_contact_forces, IntegrationStrategy, StepContext, StepResult};

/// Position advances with the velocity from the start of the step, then
/// velocity advances with the force. Cheapest and least stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExplicitEuler;

impl IntegrationStrategy for ExplicitEuler {
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

            state.positions[i] += dt * state.velocities[i];
            state.velocities[i] += dt * inv_m * state.forces[i];
        }

        Ok(StepResult { contacts })
    }

    fn name(&self) -> &str {
        "explicit"
    }
}
