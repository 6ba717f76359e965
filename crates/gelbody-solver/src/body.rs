//! The soft body orchestrator.
//!
//! `ElasticBody` owns the proxy simulation and its environment. The host
//! drives it with two calls:
//!
//! ```text
//! loop {
//!     body.fixed_update(time)?;          // physics, fixed interval
//!     body.frame_update(time, &mut mesh); // render mesh write-back
//! }
//! ```

use std::time::Instant;

use gelbody_contact::{Collider, Fixer};
use gelbody_math::{Transform, Vec3};
use gelbody_mesh::normals::compute_vertex_normals;
use gelbody_mesh::{TetMesh, TetTopology, TriangleMesh};
use gelbody_types::{GelResult, TetraId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{IntegrationMethod, SimulationConfig, WindPrecision};
use crate::deformation::DeformationMapper;
use crate::node::Anchor;
use crate::spring::SpringNetwork;
use crate::state::SimulationState;
use crate::strategy::{strategy_for, IntegrationStrategy, StepContext};
use crate::tetrahedron::Tetrahedron;
use crate::wind::{apply_wind_forces, average_wind_velocity, WindSource};

/// Objects the body interacts with, injected at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// Pinning volumes, claimed at setup.
    pub fixers: Vec<Fixer>,
    /// Collision surfaces.
    pub colliders: Vec<Collider>,
    /// Wind emitters.
    pub wind_sources: Vec<WindSource>,
}

/// Outcome of one fixed update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UpdateReport {
    /// Substeps actually run (zero when paused).
    pub substeps: u32,
    /// Node/collider contacts summed over all substeps.
    pub contacts: u32,
    /// Degenerate elements after the last substep.
    pub degenerate_tetrahedra: usize,
    /// Wall-clock time for this update (seconds).
    pub wall_time: f64,
}

/// A tetrahedral mass-spring soft body.
pub struct ElasticBody {
    config: SimulationConfig,
    transform: Transform,
    state: SimulationState,
    tetrahedra: Vec<Tetrahedron>,
    springs: SpringNetwork,
    surface_faces: Vec<[u32; 3]>,
    mapper: DeformationMapper,
    scene: Scene,
    wind_velocity: Vec3,
    strategy: Box<dyn IntegrationStrategy>,
    strategy_method: IntegrationMethod,
    last_degenerate: usize,
}

impl ElasticBody {
    /// Sets up a body from its proxy mesh and render mesh.
    ///
    /// Both meshes are given in the body's local frame and placed in the
    /// world with `transform`. Setup builds nodes, elements, springs and
    /// surface faces, pins nodes inside fixers and binds render vertices.
    ///
    /// # Errors
    /// `InvalidMesh` if the proxy fails validation.
    pub fn new(
        mesh: &TetMesh,
        render: &TriangleMesh,
        transform: Transform,
        config: SimulationConfig,
        scene: Scene,
    ) -> GelResult<Self> {
        mesh.validate()?;
        let world = mesh.transformed(&transform);

        let mut state = SimulationState::from_positions(world.positions.clone());
        let mut tetrahedra: Vec<Tetrahedron> = world
            .tetrahedra
            .iter()
            .enumerate()
            .map(|(t, &nodes)| Tetrahedron::new(TetraId(t as u32), nodes, &state.positions))
            .collect();
        let degenerate = state.update_geometry(&mut tetrahedra, config.density);
        if degenerate > 0 {
            warn!(degenerate, "proxy mesh contains degenerate tetrahedra");
        }

        let topology = TetTopology::build(&world);
        let springs = SpringNetwork::build(&topology, &state.positions, &tetrahedra);

        let fixed = claim_fixed_nodes(&mut state, &scene.fixers);

        let mapper = DeformationMapper::build(render, &transform, &tetrahedra, &state.positions);
        if mapper.unmapped_count() > 0 {
            warn!(
                unmapped = mapper.unmapped_count(),
                "render vertices outside the proxy mesh keep their rest position"
            );
        }

        info!(
            nodes = state.node_count,
            tetrahedra = tetrahedra.len(),
            springs = springs.len(),
            surface_faces = topology.surface_faces.len(),
            fixed,
            mapped_vertices = mapper.mapped_count(),
            "elastic body ready"
        );

        let wind_velocity = average_wind_velocity(&scene.wind_sources, 0.0);
        let strategy_method = config.method;

        let mut body = Self {
            strategy: strategy_for(strategy_method),
            strategy_method,
            config,
            transform,
            state,
            tetrahedra,
            springs,
            surface_faces: topology.surface_faces,
            mapper,
            scene,
            wind_velocity,
            last_degenerate: degenerate,
        };
        body.pin_fixed_nodes();
        Ok(body)
    }

    // ─── Accessors ────────────────────────────────────────────

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Live configuration; changes apply from the next fixed update.
    pub fn config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.config.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.config.paused
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable node buffers, e.g. to apply an impulse.
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn tetrahedra(&self) -> &[Tetrahedron] {
        &self.tetrahedra
    }

    pub fn springs(&self) -> &SpringNetwork {
        &self.springs
    }

    pub fn surface_faces(&self) -> &[[u32; 3]] {
        &self.surface_faces
    }

    pub fn mapper(&self) -> &DeformationMapper {
        &self.mapper
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Fixers may be moved between updates; pinned nodes follow.
    pub fn fixers_mut(&mut self) -> &mut [Fixer] {
        &mut self.scene.fixers
    }

    /// Name of the integrator used by the last fixed update.
    pub fn integrator_name(&self) -> &str {
        self.strategy.name()
    }

    /// Average wind velocity from the last recompute.
    pub fn wind_velocity(&self) -> Vec3 {
        self.wind_velocity
    }

    // ─── Diagnostics ──────────────────────────────────────────

    /// Kinetic energy of free nodes.
    pub fn kinetic_energy(&self) -> f64 {
        self.state.kinetic_energy()
    }

    /// Elastic energy stored in the springs at the current positions.
    pub fn potential_energy(&self) -> f64 {
        self.springs
            .potential_energy_at(&self.state.positions, &self.tetrahedra, self.config.stiffness)
    }

    /// Kinetic plus elastic energy.
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    // ─── Update loop ──────────────────────────────────────────

    /// Advances the simulation by one fixed interval.
    ///
    /// Skipped while paused. On error the body pauses itself and returns the
    /// error; call [`set_paused`](Self::set_paused) to resume.
    pub fn fixed_update(&mut self, time: f32) -> GelResult<UpdateReport> {
        if self.config.paused {
            return Ok(UpdateReport::default());
        }

        match self.run_substeps(time) {
            Ok(report) => Ok(report),
            Err(e) => {
                warn!(error = %e, "fixed update failed, pausing body");
                self.config.paused = true;
                Err(e)
            }
        }
    }

    fn run_substeps(&mut self, time: f32) -> GelResult<UpdateReport> {
        let start = Instant::now();

        if self.strategy_method != self.config.method {
            debug!(from = self.strategy.name(), to = ?self.config.method, "switching integrator");
            self.strategy = strategy_for(self.config.method);
            self.strategy_method = self.config.method;
        }

        self.pin_fixed_nodes();

        let substeps = self.config.substeps.max(1);
        let dt = self.config.substep_dt();
        let wind = self.config.wind;

        if wind.enabled && wind.precision == WindPrecision::Medium {
            self.update_wind_forces();
        }

        let mut report = UpdateReport {
            substeps,
            ..Default::default()
        };

        for _ in 0..substeps {
            if wind.enabled && wind.precision == WindPrecision::High {
                self.update_wind_forces();
            }

            report.degenerate_tetrahedra = self
                .state
                .update_geometry(&mut self.tetrahedra, self.config.density);

            let mut ctx = StepContext {
                state: &mut self.state,
                springs: &mut self.springs,
                tetrahedra: &self.tetrahedra,
                colliders: &self.scene.colliders,
                config: &self.config,
            };
            report.contacts += self.strategy.step(&mut ctx, dt)?.contacts;
        }

        if report.degenerate_tetrahedra != self.last_degenerate {
            if report.degenerate_tetrahedra > 0 {
                warn!(
                    degenerate = report.degenerate_tetrahedra,
                    "tetrahedra collapsed to zero volume"
                );
            }
            self.last_degenerate = report.degenerate_tetrahedra;
        }

        report.wall_time = start.elapsed().as_secs_f64();
        debug!(
            time,
            method = self.strategy.name(),
            substeps = report.substeps,
            contacts = report.contacts,
            wall_time = report.wall_time,
            "fixed update"
        );
        Ok(report)
    }

    /// Per-frame work: wind sampling, fixer tracking and render write-back.
    ///
    /// Bound vertices of `render` are overwritten with the deformed proxy
    /// (in the body's local frame) and normals are recomputed.
    pub fn frame_update(&mut self, time: f32, render: &mut TriangleMesh) {
        let wind = self.config.wind;
        if wind.enabled {
            self.wind_velocity = average_wind_velocity(&self.scene.wind_sources, time);
            if wind.precision == WindPrecision::Low {
                self.update_wind_forces();
            }
        }

        self.pin_fixed_nodes();

        self.mapper
            .apply(render, &self.transform, &self.tetrahedra, &self.state.positions);
        compute_vertex_normals(render);
    }

    fn update_wind_forces(&mut self) {
        apply_wind_forces(
            &mut self.state,
            &self.surface_faces,
            self.wind_velocity,
            self.config.wind.friction,
        );
    }

    /// Moves every fixed node to its anchor in the current fixer frame.
    fn pin_fixed_nodes(&mut self) {
        for i in 0..self.state.node_count {
            if let Some(anchor) = self.state.anchors[i] {
                if let Some(fixer) = self.scene.fixers.get(anchor.fixer) {
                    self.state.positions[i] = fixer.to_world(anchor.offset);
                    self.state.velocities[i] = Vec3::ZERO;
                }
            }
        }
    }
}

/// Pins every node inside a fixer. Returns the number of pinned nodes.
///
/// A node inside several fixers stays with the first one.
fn claim_fixed_nodes(state: &mut SimulationState, fixers: &[Fixer]) -> usize {
    let mut fixed = 0;
    for i in 0..state.node_count {
        let p = state.positions[i];
        for (f, fixer) in fixers.iter().enumerate() {
            if !fixer.contains(p) {
                continue;
            }
            match state.anchors[i] {
                Some(anchor) => warn!(
                    node = i,
                    kept = anchor.fixer,
                    ignored = f,
                    "node claimed by more than one fixer"
                ),
                None => {
                    state.anchors[i] = Some(Anchor {
                        fixer: f,
                        offset: fixer.to_local(p),
                    });
                    fixed += 1;
                }
            }
        }
    }
    fixed
}
