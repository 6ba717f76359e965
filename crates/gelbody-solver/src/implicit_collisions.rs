//! Symplectic Euler with implicit penalty collisions.

use gelbody_contact::implicit_penalty;
use gelbody_math::{solve_3x3, Mat3};
use gelbody_types::{GelError, GelResult};

use crate::strategy::{compute_forces, IntegrationStrategy, StepContext, StepResult};

/// Like [`SymplecticEuler`](crate::symplectic::SymplecticEuler), but a
/// colliding node solves
///
/// ```text
/// (I − (dt² / m) · K) · v' = v + (dt / m) · (F + F_pen)
/// ```
///
/// with the penalty Jacobian `K`, which keeps stiff contacts stable. When
/// several colliders touch the node the last one determines the system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymplecticImplicitCollisions;

impl IntegrationStrategy for SymplecticImplicitCollisions {
    fn step(&mut self, ctx: &mut StepContext<'_>, dt: f32) -> GelResult<StepResult> {
        compute_forces(ctx);

        let settings = ctx.config.collision;
        let mut contacts = 0;
        for i in 0..ctx.state.node_count {
            if ctx.state.is_fixed(i) {
                continue;
            }
            let position = ctx.state.positions[i];

            let mut penalty = None;
            if settings.enabled {
                for collider in ctx.colliders {
                    if let Some(contact) = collider.probe(position, settings.offset)? {
                        penalty = Some(implicit_penalty(position, contact.point, settings.penalty_stiffness));
                        contacts += 1;
                    }
                }
            }

            let state = &mut *ctx.state;
            let inv_m = state.inverse_mass(i);
            let velocity = match penalty {
                Some(pen) => {
                    state.penalty_forces[i] = pen.force;
                    let lhs = Mat3::IDENTITY - pen.jacobian * (dt * dt * inv_m);
                    let rhs = state.velocities[i] + dt * inv_m * (state.forces[i] + pen.force);
                    solve_3x3(&lhs, rhs).ok_or(GelError::SingularSystem { node: i as u32 })?
                }
                None => state.velocities[i] + dt * inv_m * state.forces[i],
            };

            state.velocities[i] = velocity;
            state.positions[i] += dt * velocity;
        }

        Ok(StepResult { contacts })
    }

    fn name(&self) -> &str {
        "symplectic_implicit_collisions"
    }
}
