//! Midpoint method (RK2).

use gelbody_math::Vec3;
use gelbody_types::GelResult;

use crate::strategy::{compute_forces, explicit_contact_forces, IntegrationStrategy, StepContext, StepResult};

/// Evaluates forces at the start of the step, moves half a step to the
/// midpoint, re-evaluates forces there (including collision penalties) and
/// takes the full step from the saved start state with the midpoint force.
#[derive(Debug, Default, Clone)]
pub struct Midpoint {
    start_positions: Vec<Vec3>,
    start_velocities: Vec<Vec3>,
}

impl IntegrationStrategy for Midpoint {
    fn step(&mut self, ctx: &mut StepContext<'_>, dt: f32) -> GelResult<StepResult> {
        self.start_positions.clone_from(&ctx.state.positions);
        self.start_velocities.clone_from(&ctx.state.velocities);

        // Half step to the midpoint.
        compute_forces(ctx);
        let half = 0.5 * dt;
        {
            let state = &mut *ctx.state;
            for i in 0..state.node_count {
                if state.is_fixed(i) {
                    continue;
                }
                let v_half = self.start_velocities[i] + half * state.inverse_mass(i) * state.forces[i];
                state.velocities[i] = v_half;
                state.positions[i] = self.start_positions[i] + half * v_half;
            }
        }

        // Full step with the midpoint force.
        compute_forces(ctx);
        let mut contacts = 0;
        for i in 0..ctx.state.node_count {
            if ctx.state.is_fixed(i) {
                continue;
            }
            let (penalty, hits) = explicit_contact_forces(ctx.colliders, ctx.config, ctx.state.positions[i])?;
            contacts += hits;

            let state = &mut *ctx.state;
            state.penalty_forces[i] = penalty;
            state.forces[i] += penalty;

            let v1 = self.start_velocities[i] + dt * state.inverse_mass(i) * state.forces[i];
            state.velocities[i] = v1;
            state.positions[i] = self.start_positions[i] + dt * v1;
        }

        Ok(StepResult { contacts })
    }

    fn name(&self) -> &str {
        "midpoint"
    }
}
