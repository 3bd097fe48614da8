//! Per-frame driver
//!
//! Owns the session context: the solver, the boundary, the pointer tracker
//! and the scenario's fixed jet. One tick is the fixed sequence
//! inject-then-advance; querying for display goes through [`FrameDriver::snapshot`]
//! and never mutates simulation state, so the core can be driven and
//! asserted on without a graphics context.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::boundary::Boundary;
use super::interact::PointerTracker;
use super::seed::seed_particles;
use super::solver::FluidSolver;
use crate::config::{ConfigError, SimConfig};

/// A fixed per-frame velocity injection, used to drive a jet continuously
/// regardless of pointer interaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JetConfig {
    pub position: Vec2,
    pub delta: Vec2,
}

/// Velocity sample at a cell center, for display.
#[derive(Debug, Clone, Copy)]
pub struct CellSample {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Read-only view of solver state for a display frame.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub particles: Vec<Vec2>,
    /// One sample per cell center, row-major from the lower-left.
    pub cells: Vec<CellSample>,
    pub cols: usize,
    pub rows: usize,
    pub dx: f32,
    pub particle_radius: f32,
}

/// The interactive session: seeded solver plus interaction state.
pub struct FrameDriver<S: FluidSolver> {
    solver: S,
    boundary: Boundary,
    pointer: PointerTracker,
    jet: Option<JetConfig>,
    seeded: usize,
    frame: u64,
}

impl<S: FluidSolver> FrameDriver<S> {
    /// Validate the configuration, set up the solver (initialize, then
    /// boundary, then bulk seeding) and return the ready-to-tick session.
    pub fn new(config: &SimConfig, mut solver: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let boundary = config.boundary();
        let extent = config.domain_extent();

        solver.initialize(config.domain_width, config.grid_resolution, config.grid_resolution);
        solver.set_boundary(boundary.clone());

        let points = seed_particles(&config.placement(), extent, &boundary, config.seed);
        let seeded = points.len();
        for p in &points {
            solver.add_particle(*p);
        }
        log::info!(
            "seeded {} particles ({} requested) on a {}x{} grid",
            seeded,
            config.placement().requested(),
            config.grid_resolution,
            config.grid_resolution,
        );

        let pointer = PointerTracker::new(
            Vec2::new(config.window_width, config.window_height),
            extent,
            config.drag_gain,
        );

        Ok(Self {
            solver,
            boundary,
            pointer,
            jet: config.jet(),
            seeded,
            frame: 0,
        })
    }

    /// Particles actually placed at setup. Rejection sampling can land below
    /// the requested count.
    pub fn seeded_particles(&self) -> usize {
        self.seeded
    }

    /// Display frames advanced so far (degenerate ticks excluded).
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// The installed boundary predicate.
    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// Borrow the solver for read-only queries.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Pointer pressed at pixel coordinates: resets the drag reference.
    pub fn pointer_pressed(&mut self, px: f32, py: f32) {
        self.pointer.press(px, py);
    }

    /// Pointer dragged: forwards the resulting impulse to the solver.
    pub fn pointer_dragged(&mut self, px: f32, py: f32) {
        if let Some(impulse) = self.pointer.drag(px, py) {
            self.solver.add_velocity(impulse.position, impulse.delta);
        }
    }

    /// Window resized: update the pixel-to-domain mapping.
    pub fn window_resized(&mut self, width: f32, height: f32) {
        self.pointer.set_window_size(width, height);
    }

    /// Advance one display frame.
    ///
    /// Degenerate timesteps (zero, negative, non-finite) are absorbed as
    /// no-ops rather than handed to the solver; they stem from harmless
    /// timing-source artifacts. Otherwise the jet, if configured, fires
    /// first, then the solver advances.
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            log::debug!("skipping degenerate timestep dt={dt}");
            return;
        }
        if let Some(jet) = self.jet {
            self.solver.add_velocity(jet.position, jet.delta);
        }
        self.solver.advance(dt);
        self.frame += 1;
    }

    /// Sample solver state for display: particles plus the velocity field at
    /// every cell center. Read-only.
    pub fn snapshot(&self) -> FrameSnapshot {
        let cols = self.solver.cols();
        let rows = self.solver.rows();
        let dx = self.solver.dx();

        let mut cells = Vec::with_capacity(cols * rows);
        for j in 0..rows {
            for i in 0..cols {
                let position = Vec2::new((i as f32 + 0.5) * dx, (j as f32 + 0.5) * dx);
                cells.push(CellSample {
                    position,
                    velocity: self.solver.get_velocity(position),
                });
            }
        }

        FrameSnapshot {
            particles: self.solver.particles().to_vec(),
            cells,
            cols,
            rows,
            dx,
            particle_radius: self.solver.particle_radius(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Scenario;
    use crate::sim::solver::PassiveSolver;

    /// Records calls so tick sequencing can be asserted without a real
    /// solver.
    #[derive(Default)]
    struct RecordingSolver {
        advanced: Vec<f32>,
        impulses: Vec<(Vec2, Vec2)>,
        particles: Vec<Vec2>,
        initialized: bool,
        boundary_set: bool,
        cols: usize,
        rows: usize,
        dx: f32,
    }

    impl FluidSolver for RecordingSolver {
        fn initialize(&mut self, domain_width: f32, cols: usize, rows: usize) {
            assert!(!self.initialized, "initialize called twice");
            self.initialized = true;
            self.cols = cols;
            self.rows = rows;
            self.dx = domain_width / cols as f32;
        }
        fn set_boundary(&mut self, _boundary: Boundary) {
            assert!(self.initialized, "set_boundary before initialize");
            self.boundary_set = true;
        }
        fn add_particle(&mut self, position: Vec2) {
            self.particles.push(position);
        }
        fn add_velocity(&mut self, position: Vec2, delta: Vec2) {
            self.impulses.push((position, delta));
        }
        fn advance(&mut self, dt: f32) {
            self.advanced.push(dt);
        }
        fn get_velocity(&self, _position: Vec2) -> Vec2 {
            Vec2::ZERO
        }
        fn particles(&self) -> &[Vec2] {
            &self.particles
        }
        fn dx(&self) -> f32 {
            self.dx
        }
        fn cols(&self) -> usize {
            self.cols
        }
        fn rows(&self) -> usize {
            self.rows
        }
        fn particle_radius(&self) -> f32 {
            self.dx / std::f32::consts::SQRT_2
        }
    }

    #[test]
    fn test_setup_order_and_seeding() {
        let driver = FrameDriver::new(&SimConfig::default(), RecordingSolver::default())
            .expect("default config must build");
        assert!(driver.solver().initialized);
        assert!(driver.solver().boundary_set);
        assert_eq!(driver.seeded_particles(), driver.solver().particles.len());
        assert!(driver.seeded_particles() > 0);
        assert!(driver.seeded_particles() <= 625);
    }

    #[test]
    fn test_degenerate_dt_is_a_no_op() {
        let mut driver = FrameDriver::new(&SimConfig::default(), RecordingSolver::default())
            .expect("default config must build");
        driver.tick(0.0);
        driver.tick(-1.0 / 60.0);
        driver.tick(f32::NAN);
        assert!(driver.solver().advanced.is_empty());
        assert_eq!(driver.frames(), 0);

        driver.tick(1.0 / 60.0);
        assert_eq!(driver.solver().advanced.len(), 1);
        assert_eq!(driver.frames(), 1);
    }

    #[test]
    fn test_drag_forwards_impulse_to_solver() {
        let mut driver = FrameDriver::new(&SimConfig::default(), RecordingSolver::default())
            .expect("default config must build");
        driver.pointer_pressed(360.0, 360.0);
        driver.pointer_dragged(396.0, 360.0);
        assert_eq!(driver.solver().impulses.len(), 1);
        let (pos, delta) = driver.solver().impulses[0];
        assert!(delta.x > 0.0);
        assert!(pos.x > 0.5);
    }

    #[test]
    fn test_jet_fires_every_live_tick() {
        let config = SimConfig {
            scenario: Scenario::inlet_jet_default(),
            ..SimConfig::default()
        };
        let mut driver = FrameDriver::new(&config, RecordingSolver::default())
            .expect("inlet jet config must build");
        driver.tick(1.0 / 60.0);
        driver.tick(0.0); // absorbed, no injection either
        driver.tick(1.0 / 60.0);
        assert_eq!(driver.solver().impulses.len(), 2);
        assert_eq!(driver.solver().advanced.len(), 2);
    }

    #[test]
    fn test_snapshot_covers_every_cell_center() {
        let driver = FrameDriver::new(&SimConfig::default(), PassiveSolver::new())
            .expect("default config must build");
        let snap = driver.snapshot();
        assert_eq!(snap.cells.len(), snap.cols * snap.rows);
        assert_eq!(snap.particles.len(), driver.seeded_particles());
        let first = snap.cells[0].position;
        assert!((first - Vec2::new(0.5 * snap.dx, 0.5 * snap.dx)).length() < 1e-6);
    }

    #[test]
    fn test_jet_momentum_visible_in_passive_field() {
        let config = SimConfig {
            scenario: Scenario::inlet_jet_default(),
            ..SimConfig::default()
        };
        let jet = config.jet().expect("inlet jet scenario has a jet");
        let mut driver =
            FrameDriver::new(&config, PassiveSolver::new()).expect("inlet jet config must build");
        driver.tick(1.0 / 60.0);
        let v = driver.solver().get_velocity(jet.position);
        assert!(v.length() > 0.0);
    }
}
