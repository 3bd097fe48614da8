//! Deterministic simulation driver
//!
//! Everything here is pure and deterministic:
//! - Seeded/index-keyed RNG only
//! - Single-threaded, strictly serialized per frame
//! - No rendering or platform dependencies
//!
//! The solver behind [`FluidSolver`] is the only external collaborator.

pub mod boundary;
pub mod driver;
pub mod interact;
pub mod sdf;
pub mod seed;
pub mod solver;

pub use boundary::{Boundary, ShapeError};
pub use driver::{CellSample, FrameDriver, FrameSnapshot, JetConfig};
pub use interact::{PointerTracker, VelocityImpulse};
pub use sdf::{circle_phi, sector_squircle_phi, sector_threshold};
pub use seed::{PlacementPolicy, seed_particles};
pub use solver::{FluidSolver, PassiveSolver};
