//! Composite boundary predicate
//!
//! A boundary is a closed algebra over the distance primitives: leaf shapes,
//! sign inversion, and pointwise min/max composition. The driver installs one
//! boundary per session; the solver and the particle seeder both query it at
//! arbitrary real positions (sub-cell localization needs more than grid
//! points).
//!
//! Sign convention: `phi(p) > 0` means `p` is in the fluid-permitted region,
//! `phi(p) <= 0` means solid obstacle or outside the domain.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::sdf::{circle_phi, sector_squircle_phi};

/// Setup-time shape validation failure
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("shape radius must be finite and positive, got {0}")]
    Radius(f32),
    #[error("shape centre must be finite, got ({0}, {1})")]
    Centre(f32, f32),
    #[error("min/max composition needs at least one member")]
    EmptyComposition,
}

/// Signed-distance boundary predicate, fixed at setup and immutable for the
/// run.
///
/// Leaf shapes keep the primitives' native positive-outside sign, so a raw
/// `Circle` reads as an obstacle (fluid everywhere outside it). Containers
/// are expressed with [`Boundary::Invert`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Boundary {
    /// Circular obstacle: positive outside the circle.
    Circle { centre: Vec2, radius: f32 },
    /// Sector-blended box obstacle: positive outside the squircle.
    /// `major_radius` is the half-extent along x, `minor_radius` along y.
    SectorBox {
        centre: Vec2,
        major_radius: f32,
        minor_radius: f32,
    },
    /// Flips the solid/fluid sense of the inner boundary.
    Invert(Box<Boundary>),
    /// Pointwise minimum: fluid only where every member reads fluid. An
    /// inverted container composed with raw obstacles carves the union of
    /// the obstacles out of the container.
    MinOf(Vec<Boundary>),
    /// Pointwise maximum: fluid where any member reads fluid (dual of
    /// `MinOf`).
    MaxOf(Vec<Boundary>),
}

impl Boundary {
    /// Circle with the sign flipped so the interior is fluid-permitted.
    pub fn container_circle(centre: Vec2, radius: f32) -> Self {
        Boundary::Invert(Box::new(Boundary::Circle { centre, radius }))
    }

    /// Sector box with the sign flipped so the interior is fluid-permitted.
    pub fn container_box(centre: Vec2, major_radius: f32, minor_radius: f32) -> Self {
        Boundary::Invert(Box::new(Boundary::SectorBox {
            centre,
            major_radius,
            minor_radius,
        }))
    }

    /// Container with a set of obstacles carved out of it.
    pub fn with_obstacles(container: Boundary, obstacles: Vec<Boundary>) -> Self {
        let mut members = Vec::with_capacity(obstacles.len() + 1);
        members.push(container);
        members.extend(obstacles);
        Boundary::MinOf(members)
    }

    /// Evaluate the signed distance at `p`.
    ///
    /// Non-finite positions read as deep inside solid so they can never be
    /// accepted by rejection sampling or destabilize the solver.
    pub fn phi(&self, p: Vec2) -> f32 {
        if !p.x.is_finite() || !p.y.is_finite() {
            return f32::MIN;
        }
        self.eval(p)
    }

    fn eval(&self, p: Vec2) -> f32 {
        match self {
            Boundary::Circle { centre, radius } => circle_phi(p, *centre, *radius),
            Boundary::SectorBox {
                centre,
                major_radius,
                minor_radius,
            } => sector_squircle_phi(p, *centre, *major_radius, *minor_radius),
            Boundary::Invert(inner) => -inner.eval(p),
            Boundary::MinOf(members) => members
                .iter()
                .map(|m| m.eval(p))
                .fold(f32::INFINITY, f32::min),
            Boundary::MaxOf(members) => members
                .iter()
                .map(|m| m.eval(p))
                .fold(f32::NEG_INFINITY, f32::max),
        }
    }

    /// Reject malformed shape parameters before the run starts. Radii must
    /// be finite and positive, centres finite, compositions non-empty.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Boundary::Circle { centre, radius } => {
                check_centre(*centre)?;
                check_radius(*radius)
            }
            Boundary::SectorBox {
                centre,
                major_radius,
                minor_radius,
            } => {
                check_centre(*centre)?;
                check_radius(*major_radius)?;
                check_radius(*minor_radius)
            }
            Boundary::Invert(inner) => inner.validate(),
            Boundary::MinOf(members) | Boundary::MaxOf(members) => {
                if members.is_empty() {
                    return Err(ShapeError::EmptyComposition);
                }
                members.iter().try_for_each(Boundary::validate)
            }
        }
    }
}

fn check_radius(radius: f32) -> Result<(), ShapeError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::Radius(radius))
    }
}

fn check_centre(centre: Vec2) -> Result<(), ShapeError> {
    if centre.x.is_finite() && centre.y.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::Centre(centre.x, centre.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_circle_interior_is_fluid() {
        let b = Boundary::container_circle(Vec2::new(0.5, 0.5), 0.4);
        assert!(b.phi(Vec2::new(0.5, 0.6)) > 0.0);
        assert!(b.phi(Vec2::new(0.95, 0.5)) < 0.0);
    }

    #[test]
    fn test_invert_negates_exactly() {
        let raw = Boundary::Circle {
            centre: Vec2::new(0.5, 0.5),
            radius: 0.4,
        };
        let flipped = Boundary::Invert(Box::new(raw.clone()));
        let p = Vec2::new(0.7, 0.3);
        assert_eq!(raw.phi(p), -flipped.phi(p));
    }

    #[test]
    fn test_min_carves_pillar_out_of_container() {
        let b = Boundary::with_obstacles(
            Boundary::container_box(Vec2::new(0.5, 0.5), 0.4, 0.4),
            vec![Boundary::Circle {
                centre: Vec2::new(0.7, 0.5),
                radius: 0.1,
            }],
        );
        // Open water well away from the pillar
        assert!(b.phi(Vec2::new(0.3, 0.5)) > 0.0);
        // Inside the pillar
        assert!(b.phi(Vec2::new(0.7, 0.5)) < 0.0);
        // Outside the container
        assert!(b.phi(Vec2::new(0.95, 0.95)) < 0.0);
    }

    #[test]
    fn test_max_is_union_of_fluid() {
        let left = Boundary::container_circle(Vec2::new(0.3, 0.5), 0.2);
        let right = Boundary::container_circle(Vec2::new(0.7, 0.5), 0.2);
        let b = Boundary::MaxOf(vec![left, right]);
        assert!(b.phi(Vec2::new(0.3, 0.5)) > 0.0);
        assert!(b.phi(Vec2::new(0.7, 0.5)) > 0.0);
        // Between the two discs, outside both
        assert!(b.phi(Vec2::new(0.5, 0.9)) < 0.0);
    }

    #[test]
    fn test_non_finite_positions_read_as_solid() {
        let b = Boundary::container_circle(Vec2::new(0.5, 0.5), 0.4);
        assert_eq!(b.phi(Vec2::new(f32::NAN, 0.5)), f32::MIN);
        assert_eq!(b.phi(Vec2::new(0.5, f32::INFINITY)), f32::MIN);
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        let b = Boundary::Circle {
            centre: Vec2::new(0.5, 0.5),
            radius: -0.4,
        };
        assert!(matches!(b.validate(), Err(ShapeError::Radius(_))));

        let nested = Boundary::Invert(Box::new(Boundary::SectorBox {
            centre: Vec2::new(0.5, 0.5),
            major_radius: 0.5,
            minor_radius: f32::NAN,
        }));
        assert!(nested.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_composition() {
        assert!(matches!(
            Boundary::MinOf(vec![]).validate(),
            Err(ShapeError::EmptyComposition)
        ));
    }

    #[test]
    fn test_taller_than_wide_box_accepts_minor_over_major() {
        // minor > major is a legal tall tank, not a configuration error
        let b = Boundary::container_box(Vec2::new(0.5, 0.75), 0.5, 0.75);
        assert!(b.validate().is_ok());
        // Centre query: atan2(0,0) lands in the horizontal sector, so the
        // inverted value is the major radius.
        assert!((b.phi(Vec2::new(0.5, 0.75)) - 0.5).abs() < 1e-6);
    }
}
