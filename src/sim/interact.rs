//! Pointer interaction
//!
//! Maps pixel-space pointer events into domain-space velocity impulses. The
//! tracker is plain state owned by the frame driver; there are no globals.

use glam::Vec2;

/// A velocity injection request produced by a drag event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityImpulse {
    /// Where to inject, in domain coordinates.
    pub position: Vec2,
    /// Velocity delta in domain units. Per drag event, not dt-normalized:
    /// injected momentum is frame-rate dependent, same as the reference
    /// behavior. Intentional, do not "fix" by dividing by dt.
    pub delta: Vec2,
}

/// Tracks the pointer reference position between events.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    window_size: Vec2,
    extent: Vec2,
    gain: f32,
    /// Last observed pointer position in domain coordinates. Reset on each
    /// press; left stale after a release (there is no release transition).
    last: Option<Vec2>,
}

impl PointerTracker {
    pub fn new(window_size: Vec2, extent: Vec2, gain: f32) -> Self {
        Self {
            window_size,
            extent,
            gain,
            last: None,
        }
    }

    /// Update the pixel dimensions used for the pixel-to-domain mapping
    /// (window resize).
    pub fn set_window_size(&mut self, width: f32, height: f32) {
        self.window_size = Vec2::new(width, height);
    }

    /// Pixel to domain coordinates. Pixel y grows downward, domain y grows
    /// upward, so the vertical axis flips.
    fn to_domain(&self, px: f32, py: f32) -> Vec2 {
        Vec2::new(
            px / self.window_size.x * self.extent.x,
            (1.0 - py / self.window_size.y) * self.extent.y,
        )
    }

    /// Pointer press: record the new reference position, emit nothing.
    pub fn press(&mut self, px: f32, py: f32) {
        self.last = Some(self.to_domain(px, py));
    }

    /// Pointer drag: compute the gained displacement from the reference
    /// position, advance the reference, and return the impulse to forward to
    /// the solver. A drag with no prior press only records the position.
    pub fn drag(&mut self, px: f32, py: f32) -> Option<VelocityImpulse> {
        let p = self.to_domain(px, py);
        let impulse = self.last.map(|prev| VelocityImpulse {
            position: p,
            delta: (p - prev) * self.gain,
        });
        self.last = Some(p);
        impulse
    }
}
