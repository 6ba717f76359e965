//! Wind loading.
//!
//! Wind sources produce a pulsing directional velocity. Their average acts
//! on every surface face as a drag force proportional to face area and to
//! the wind speed relative to the face along its normal. Each face splits
//! its force equally among its three nodes.

use gelbody_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::state::SimulationState;

/// A directional wind emitter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindSource {
    /// Blowing direction (normalized on use).
    pub direction: Vec3,
    /// Base wind speed.
    pub main: f32,
    /// Pulse amplitude as a fraction of `main`.
    pub pulse_magnitude: f32,
    /// Pulse frequency.
    pub pulse_frequency: f32,
    /// Inactive sources still count toward the averaging denominator.
    pub active: bool,
}

impl Default for WindSource {
    fn default() -> Self {
        Self {
            direction: Vec3::Z,
            main: 1.0,
            pulse_magnitude: 0.5,
            pulse_frequency: 0.01,
            active: true,
        }
    }
}

impl WindSource {
    /// Wind velocity at `time` seconds:
    /// `dir · (main + pulse · main · |sin(time · frequency · 10)|)`.
    pub fn velocity(&self, time: f32) -> Vec3 {
        let pulse = self.pulse_magnitude * self.main * (time * self.pulse_frequency * 10.0).sin().abs();
        self.direction.normalize_or_zero() * (self.main + pulse)
    }
}

/// Sum of the active source velocities divided by the number of sources.
pub fn average_wind_velocity(sources: &[WindSource], time: f32) -> Vec3 {
    if sources.is_empty() {
        return Vec3::ZERO;
    }
    let sum: Vec3 = sources
        .iter()
        .filter(|s| s.active)
        .map(|s| s.velocity(time))
        .sum();
    sum / sources.len() as f32
}

/// Recomputes per-node wind forces from the surface faces.
///
/// For face `(A, B, C)`: `cross = −(B − A) × (C − A)`, `area = |cross| / 2`,
/// `n = cross / |cross|`, and
/// `force = friction · area · (n · (wind − v_face)) · n`, where `v_face` is
/// the mean node velocity. A third of the force goes to each node; nodes on
/// several faces sum their contributions.
pub fn apply_wind_forces(
    state: &mut SimulationState,
    surface_faces: &[[u32; 3]],
    wind_velocity: Vec3,
    friction: f32,
) {
    state.wind_forces.fill(Vec3::ZERO);

    for face in surface_faces {
        let [a, b, c] = face.map(|i| i as usize);
        let (pa, pb, pc) = (state.positions[a], state.positions[b], state.positions[c]);

        let cross = -(pb - pa).cross(pc - pa);
        let twice_area = cross.length();
        if twice_area <= f32::EPSILON {
            continue;
        }
        let normal = cross / twice_area;
        let area = 0.5 * twice_area;

        let face_velocity = (state.velocities[a] + state.velocities[b] + state.velocities[c]) / 3.0;
        let relative = normal.dot(wind_velocity - face_velocity);
        let share = friction * area * relative * normal / 3.0;

        state.wind_forces[a] += share;
        state.wind_forces[b] += share;
        state.wind_forces[c] += share;
    }
}
