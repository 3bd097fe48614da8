//! Startup configuration
//!
//! The reference scenarios hard-coded grid resolution, particle counts and
//! shape radii; here they are explicit configuration, loadable from a JSON
//! file and validated before the session starts.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::consts;
use crate::sim::boundary::{Boundary, ShapeError};
use crate::sim::driver::JetConfig;
use crate::sim::seed::PlacementPolicy;

/// Configuration rejected at setup time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid resolution must be at least 2, got {0}")]
    GridResolution(usize),
    #[error("domain width must be finite and positive, got {0}")]
    DomainWidth(f32),
    #[error("window dimensions must be positive, got {0}x{1}")]
    WindowSize(f32, f32),
    #[error("drag gain must be finite, got {0}")]
    DragGain(f32),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Named boundary/seeding variants.
///
/// Each scenario fixes one boundary composition and one placement policy,
/// mirroring the reference configurations: exactly one composition path is
/// active per scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Scenario {
    /// Inverted circle container, rejection-seeded (optionally only left of
    /// `max_x`).
    CircleTank {
        centre: Vec2,
        radius: f32,
        candidates: usize,
        max_x: Option<f32>,
    },
    /// Inverted sector-box container, rejection-seeded over the full domain.
    BoxTank {
        centre: Vec2,
        major_radius: f32,
        minor_radius: f32,
        candidates: usize,
    },
    /// Sector-box container with circular pillars carved out (min
    /// composition), rejection-seeded.
    PillarTank {
        centre: Vec2,
        major_radius: f32,
        minor_radius: f32,
        pillars: Vec<(Vec2, f32)>,
        candidates: usize,
    },
    /// Circle container with a thin rectangular inlet seeded parametrically
    /// and a fixed jet driven every frame.
    InletJet {
        centre: Vec2,
        radius: f32,
        inlet_centre: Vec2,
        inlet_half_width: f32,
        inlet_half_height: f32,
        count: usize,
        jet: JetConfig,
    },
}

impl Scenario {
    /// The reference demo: circle container at (0.5, 0.5), radius 0.4, one
    /// candidate per grid cell, liquid seeded in the left half.
    pub fn circle_tank_default() -> Self {
        Scenario::CircleTank {
            centre: Vec2::new(0.5, 0.5),
            radius: 0.4,
            candidates: consts::GRID_RESOLUTION * consts::GRID_RESOLUTION,
            max_x: Some(0.5),
        }
    }

    /// Inlet strip on the left of a circular tank, with a rightward jet at
    /// the inlet mouth.
    pub fn inlet_jet_default() -> Self {
        Scenario::InletJet {
            centre: Vec2::new(0.5, 0.5),
            radius: 0.4,
            inlet_centre: Vec2::new(0.2, 0.5),
            inlet_half_width: 0.03,
            inlet_half_height: 0.15,
            count: 400,
            jet: JetConfig {
                position: Vec2::new(0.25, 0.5),
                delta: Vec2::new(0.5, 0.0),
            },
        }
    }

    /// Boundary predicate for this scenario.
    pub fn boundary(&self) -> Boundary {
        match self {
            Scenario::CircleTank { centre, radius, .. }
            | Scenario::InletJet { centre, radius, .. } => {
                Boundary::container_circle(*centre, *radius)
            }
            Scenario::BoxTank {
                centre,
                major_radius,
                minor_radius,
                ..
            } => Boundary::container_box(*centre, *major_radius, *minor_radius),
            Scenario::PillarTank {
                centre,
                major_radius,
                minor_radius,
                pillars,
                ..
            } => Boundary::with_obstacles(
                Boundary::container_box(*centre, *major_radius, *minor_radius),
                pillars
                    .iter()
                    .map(|(c, r)| Boundary::Circle {
                        centre: *c,
                        radius: *r,
                    })
                    .collect(),
            ),
        }
    }

    /// Placement policy for this scenario.
    pub fn placement(&self) -> PlacementPolicy {
        match self {
            Scenario::CircleTank {
                candidates, max_x, ..
            } => PlacementPolicy::Rejection {
                candidates: *candidates,
                max_x: *max_x,
            },
            Scenario::BoxTank { candidates, .. } | Scenario::PillarTank { candidates, .. } => {
                PlacementPolicy::Rejection {
                    candidates: *candidates,
                    max_x: None,
                }
            }
            Scenario::InletJet {
                inlet_centre,
                inlet_half_width,
                inlet_half_height,
                count,
                ..
            } => PlacementPolicy::Parametric {
                centre: *inlet_centre,
                half_width: *inlet_half_width,
                half_height: *inlet_half_height,
                count: *count,
            },
        }
    }

    /// Fixed per-frame injection, if the scenario drives one.
    pub fn jet(&self) -> Option<JetConfig> {
        match self {
            Scenario::InletJet { jet, .. } => Some(*jet),
            _ => None,
        }
    }
}

/// Full startup configuration for one interactive session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Grid cells per axis.
    pub grid_resolution: usize,
    /// Domain width in world units; cell spacing is width / resolution.
    pub domain_width: f32,
    /// Key for the deterministic seeding hash.
    pub seed: u64,
    /// Boundary and seeding variant.
    pub scenario: Scenario,
    /// Window dimensions for the pixel-to-domain mapping.
    pub window_width: f32,
    pub window_height: f32,
    /// Pointer drag gain (per event, not per second).
    pub drag_gain: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_resolution: consts::GRID_RESOLUTION,
            domain_width: consts::DOMAIN_WIDTH,
            seed: 0,
            scenario: Scenario::circle_tank_default(),
            window_width: consts::WINDOW_WIDTH,
            window_height: consts::WINDOW_HEIGHT,
            drag_gain: consts::DRAG_GAIN,
        }
    }
}

impl SimConfig {
    /// Load from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().display().to_string();
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path_str.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path_str,
            source,
        })
    }

    /// Reject malformed configuration before the session starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_resolution < 2 {
            return Err(ConfigError::GridResolution(self.grid_resolution));
        }
        if !self.domain_width.is_finite() || self.domain_width <= 0.0 {
            return Err(ConfigError::DomainWidth(self.domain_width));
        }
        if !(self.window_width > 0.0 && self.window_width.is_finite())
            || !(self.window_height > 0.0 && self.window_height.is_finite())
        {
            return Err(ConfigError::WindowSize(self.window_width, self.window_height));
        }
        if !self.drag_gain.is_finite() {
            return Err(ConfigError::DragGain(self.drag_gain));
        }
        self.boundary().validate()?;
        Ok(())
    }

    /// Domain extent; square when rows equal columns.
    pub fn domain_extent(&self) -> Vec2 {
        Vec2::splat(self.domain_width)
    }

    pub fn boundary(&self) -> Boundary {
        self.scenario.boundary()
    }

    pub fn placement(&self) -> PlacementPolicy {
        self.scenario.placement()
    }

    pub fn jet(&self) -> Option<JetConfig> {
        self.scenario.jet()
    }
}
