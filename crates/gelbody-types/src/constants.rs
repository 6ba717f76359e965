//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Default fixed update interval (seconds).
pub const DEFAULT_TIMESTEP: f32 = 0.004;

/// Default number of substeps per fixed update.
pub const DEFAULT_SUBSTEPS: u32 = 5;

/// Default mesh density (kg/m³ in scene units).
pub const DEFAULT_DENSITY: f32 = 3.63;

/// Default per-node velocity damping coefficient.
pub const DEFAULT_NODE_DAMPING: f32 = 0.3;

/// Default spring damping coefficient.
pub const DEFAULT_SPRING_DAMPING: f32 = 0.3;

/// Default spring stiffness coefficient.
pub const DEFAULT_STIFFNESS: f32 = 20.0;

/// Default aerodynamic friction coefficient for wind loading.
pub const DEFAULT_WIND_FRICTION: f32 = 0.5;

/// Default penalty stiffness for collision response.
pub const DEFAULT_PENALTY_STIFFNESS: f32 = 10.0;

/// Default skin distance kept between nodes and collider surfaces.
pub const DEFAULT_COLLISION_OFFSET: f32 = 0.3;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;

/// Tolerance of the point-in-tetrahedron test, relative to the tetrahedron volume.
pub const INSIDE_TOLERANCE: f32 = 1.0e-6;

/// Volume below which a tetrahedron is considered degenerate.
pub const DEGENERATE_VOLUME_THRESHOLD: f32 = 1.0e-12;
