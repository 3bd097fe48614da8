//! External solver contract
//!
//! The pressure-projection solver is an external collaborator; the driver
//! only ever touches it through [`FluidSolver`]. [`PassiveSolver`] is a
//! grid-backed stand-in with no pressure solve, used by the demo binary and
//! the driver tests.

use glam::Vec2;

use super::boundary::Boundary;

/// Contract the frame driver expects from the fluid solver.
///
/// Call ordering: `initialize` exactly once, then `set_boundary`, then any
/// number of `add_particle` calls before the first `advance`. `add_velocity`
/// is safe zero or many times per frame. `get_velocity` and the read-only
/// accessors are valid any time after `initialize` and have no side effects.
/// `advance` requires a finite, positive `dt`; the driver guards this.
pub trait FluidSolver {
    /// One-time grid setup. Calling twice is a contract violation.
    fn initialize(&mut self, domain_width: f32, cols: usize, rows: usize);

    /// Install the boundary predicate. Must land between `initialize` and
    /// the first `advance`.
    fn set_boundary(&mut self, boundary: Boundary);

    /// Append one particle.
    fn add_particle(&mut self, position: Vec2);

    /// Inject a velocity impulse at a domain position.
    fn add_velocity(&mut self, position: Vec2, delta: Vec2);

    /// Step the simulation by `dt` seconds.
    fn advance(&mut self, dt: f32);

    /// Sample the velocity field at an arbitrary domain position.
    fn get_velocity(&self, position: Vec2) -> Vec2;

    /// Current particle positions.
    fn particles(&self) -> &[Vec2];

    /// Grid cell spacing.
    fn dx(&self) -> f32;

    /// Grid column count.
    fn cols(&self) -> usize;

    /// Grid row count.
    fn rows(&self) -> usize;

    /// Display radius for particles.
    fn particle_radius(&self) -> f32;
}

/// Minimal grid-backed solver stand-in.
///
/// Keeps a cell-centered velocity grid fed only by `add_velocity`, samples
/// it bilinearly, and advects particles through the installed boundary.
/// No pressure projection, no advection of the field itself, no level-set
/// work. Enough to drive the interaction loop end to end.
#[derive(Debug, Default)]
pub struct PassiveSolver {
    cols: usize,
    rows: usize,
    dx: f32,
    particle_radius: f32,
    velocity: Vec<Vec2>,
    particles: Vec<Vec2>,
    boundary: Option<Boundary>,
}

impl PassiveSolver {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn cell_index(&self, i: usize, j: usize) -> usize {
        j * self.cols + i
    }

    /// Cell containing `p`, clamped to the grid.
    fn cell_at(&self, p: Vec2) -> (usize, usize) {
        let i = ((p.x / self.dx) as isize).clamp(0, self.cols as isize - 1) as usize;
        let j = ((p.y / self.dx) as isize).clamp(0, self.rows as isize - 1) as usize;
        (i, j)
    }
}

impl FluidSolver for PassiveSolver {
    fn initialize(&mut self, domain_width: f32, cols: usize, rows: usize) {
        if !self.velocity.is_empty() {
            log::warn!("solver already initialized, ignoring repeat call");
            return;
        }
        self.cols = cols;
        self.rows = rows;
        self.dx = domain_width / cols as f32;
        self.particle_radius = self.dx / std::f32::consts::SQRT_2;
        self.velocity = vec![Vec2::ZERO; cols * rows];
    }

    fn set_boundary(&mut self, boundary: Boundary) {
        self.boundary = Some(boundary);
    }

    fn add_particle(&mut self, position: Vec2) {
        self.particles.push(position);
    }

    fn add_velocity(&mut self, position: Vec2, delta: Vec2) {
        let (i, j) = self.cell_at(position);
        let idx = self.cell_index(i, j);
        self.velocity[idx] += delta;
    }

    fn advance(&mut self, dt: f32) {
        for p in 0..self.particles.len() {
            let pos = self.particles[p];
            let candidate = pos + self.get_velocity(pos) * dt;
            let permitted = self
                .boundary
                .as_ref()
                .is_none_or(|b| b.phi(candidate) > 0.0);
            if permitted {
                self.particles[p] = candidate;
            }
        }
    }

    fn get_velocity(&self, position: Vec2) -> Vec2 {
        if self.velocity.is_empty() {
            return Vec2::ZERO;
        }
        // Bilinear interpolation over cell centers at ((i+0.5)dx, (j+0.5)dx)
        let gx = (position.x / self.dx - 0.5).clamp(0.0, (self.cols - 1) as f32);
        let gy = (position.y / self.dx - 0.5).clamp(0.0, (self.rows - 1) as f32);
        let i0 = gx.floor() as usize;
        let j0 = gy.floor() as usize;
        let i1 = (i0 + 1).min(self.cols - 1);
        let j1 = (j0 + 1).min(self.rows - 1);
        let fx = gx - i0 as f32;
        let fy = gy - j0 as f32;

        let v00 = self.velocity[self.cell_index(i0, j0)];
        let v10 = self.velocity[self.cell_index(i1, j0)];
        let v01 = self.velocity[self.cell_index(i0, j1)];
        let v11 = self.velocity[self.cell_index(i1, j1)];

        v00.lerp(v10, fx).lerp(v01.lerp(v11, fx), fy)
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
        self.particle_radius
    }
}
