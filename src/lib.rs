//! Liquidbox - interactive driver for a 2D grid liquid solver
//!
//! Core modules:
//! - `sim`: Deterministic simulation driver (boundary distance fields,
//!   particle seeding, pointer interaction, per-frame sequencing)
//! - `config`: Startup configuration and scenario catalogue
//!
//! The pressure-projection solver itself is an external collaborator reached
//! through the [`sim::FluidSolver`] trait; this crate owns everything around
//! it: the signed-distance boundary model, reproducible particle seeding,
//! pointer-to-impulse mapping, and the frame loop that ties them together.

pub mod config;
pub mod sim;

pub use config::{Scenario, SimConfig};
pub use sim::{Boundary, FluidSolver, FrameDriver};

/// Driver configuration constants
pub mod consts {
    /// Display timestep used when no wall-clock source is wired up (60 Hz,
    /// matching the reference demo cadence).
    pub const DEFAULT_TIMESTEP: f32 = 1.0 / 60.0;

    /// Default grid resolution per axis.
    pub const GRID_RESOLUTION: usize = 25;

    /// Default domain width in world units (unit square).
    pub const DOMAIN_WIDTH: f32 = 1.0;

    /// Gain applied to pointer displacement when injecting velocity.
    /// The impulse is per drag event, not per unit time.
    pub const DRAG_GAIN: f32 = 25.0;

    /// Default window dimensions used to map pixels into the domain.
    pub const WINDOW_WIDTH: f32 = 720.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;
}
