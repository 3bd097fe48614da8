//! One-time particle seeding
//!
//! Seeding must be reproducible: candidate coordinates come from a Pcg32
//! keyed by the candidate index, so the same key and boundary always yield
//! the same particle set, in the same order.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boundary::Boundary;

/// Deterministic unit-interval draw keyed by an integer index.
#[inline]
fn hash_unit(index: u64) -> f32 {
    let mut rng = Pcg32::seed_from_u64(index);
    rng.random()
}

/// How initial particles are placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlacementPolicy {
    /// One candidate per index over the full domain, accepted only where the
    /// boundary reads fluid (and, optionally, left of `max_x`). No retry, so
    /// the final count can be smaller than `candidates`.
    Rejection {
        candidates: usize,
        max_x: Option<f32>,
    },
    /// Closed-form placement of `count` points uniformly inside an
    /// axis-aligned rectangle known to lie in the fluid region (thin inlet
    /// strips). Bypasses boundary testing entirely.
    Parametric {
        centre: Vec2,
        half_width: f32,
        half_height: f32,
        count: usize,
    },
}

impl PlacementPolicy {
    /// Number of points asked for: the candidate budget under rejection,
    /// the exact count under parametric placement.
    pub fn requested(&self) -> usize {
        match self {
            PlacementPolicy::Rejection { candidates, .. } => *candidates,
            PlacementPolicy::Parametric { count, .. } => *count,
        }
    }
}

/// Populate the initial particle set.
///
/// Points are returned in generation order. With the rejection policy the
/// returned length is the achieved count, which may be less than requested;
/// callers that care must read it rather than assume.
pub fn seed_particles(
    policy: &PlacementPolicy,
    extent: Vec2,
    boundary: &Boundary,
    key: u64,
) -> Vec<Vec2> {
    match *policy {
        PlacementPolicy::Rejection { candidates, max_x } => {
            let mut points = Vec::new();
            for i in 0..candidates as u64 {
                let p = Vec2::new(
                    hash_unit(key + 2 * i) * extent.x,
                    hash_unit(key + 2 * i + 1) * extent.y,
                );
                let in_filter = max_x.is_none_or(|mx| p.x < mx);
                if boundary.phi(p) > 0.0 && in_filter {
                    points.push(p);
                }
            }
            points
        }
        PlacementPolicy::Parametric {
            centre,
            half_width,
            half_height,
            count,
        } => {
            let mut rng = Pcg32::seed_from_u64(key);
            (0..count)
                .map(|_| {
                    let u: f32 = rng.random();
                    let v: f32 = rng.random();
                    centre
                        + Vec2::new(
                            (u * 2.0 - 1.0) * half_width,
                            (v * 2.0 - 1.0) * half_height,
                        )
                })
                .collect()
        }
    }
}
