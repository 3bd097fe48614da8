//! Signed distance primitives for the boundary model
//!
//! Both primitives return positive values outside the shape, negative inside
//! and zero on the surface. Container call sites invert the sign so that
//! "inside the tank" reads as fluid-permitted.

use glam::Vec2;
use std::f32::consts::PI;

/// Signed distance to a circle
#[inline]
pub fn circle_phi(p: Vec2, centre: Vec2, radius: f32) -> f32 {
    (p - centre).length() - radius
}

/// Angular threshold separating the horizontal and vertical sectors of the
/// squircle blend. Equal radii give the classic `0.25 * PI` split.
#[inline]
pub fn sector_threshold(major_radius: f32, minor_radius: f32) -> f32 {
    minor_radius.atan2(major_radius)
}

/// Sector-blended signed distance to an axis-aligned box-like shape
/// ("squircle"). `major_radius` is the half-extent along x, `minor_radius`
/// along y.
///
/// The query direction picks a trig scaling: directions within
/// `sector_threshold` of the x axis compare `h * |cos a|` against the major
/// radius, the remaining directions compare `h * |sin a|` against the minor
/// radius. This is an angular-sector approximation, not an exact rectangle
/// metric: it is accurate near the axis-aligned edges and distorted at the
/// corners. That behavior is intentional and relied upon by the boundary
/// variants, so it must not be replaced with a true box distance.
///
/// At the exact centre `h == 0` and `atan2(0, 0) == 0`, so the horizontal
/// sector is taken and the result is `-major_radius`.
pub fn sector_squircle_phi(p: Vec2, centre: Vec2, major_radius: f32, minor_radius: f32) -> f32 {
    let d = p - centre;
    let a = d.y.atan2(d.x);
    let h = d.length();
    let a0 = sector_threshold(major_radius, minor_radius);

    if a.abs() < a0 || a.abs() > PI - a0 {
        h * a.cos().abs() - major_radius
    } else {
        h * a.sin().abs() - minor_radius
    }
}
