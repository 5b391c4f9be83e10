//! Orbit camera for viewing normalized clouds
//!
//! Orthographic projection around the origin, which is where the
//! normalized cloud's robust center lands. Yaw turns about the world Y
//! axis, pitch about the camera's X axis.

use cloudnorm_io::Point;
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

const MIN_ZOOM: f64 = 0.05;
const MAX_ZOOM: f64 = 100.0;

/// Keyboard-driven orbit camera
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitCamera {
    /// Rotation about world Y in radians
    pub yaw: f64,
    /// Rotation about camera X in radians, kept within (-pi/2, pi/2)
    pub pitch: f64,
    /// Multiplier applied after rotation
    pub zoom: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
        }
    }
}

/// A point projected onto the view plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Distance along the view direction; larger is nearer
    pub depth: f64,
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn by `dyaw` and tilt by `dpitch` radians
    pub fn orbit(&mut self, dyaw: f64, dpitch: f64) {
        self.yaw = (self.yaw + dyaw).rem_euclid(std::f64::consts::TAU);
        let limit = FRAC_PI_2 - 1e-3;
        self.pitch = (self.pitch + dpitch).clamp(-limit, limit);
    }

    /// Zoom by a factor
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Return to the default view
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn rotation(&self) -> Rotation3<f64> {
        let yaw = Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw);
        let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), self.pitch);
        pitch * yaw
    }

    /// Project a point onto the view plane
    pub fn project(&self, point: &Point) -> Projected {
        self.project_with(&self.rotation(), point)
    }

    /// Project many points at once
    pub fn project_all(&self, points: &[Point]) -> Vec<Projected> {
        let rotation = self.rotation();
        points
            .iter()
            .map(|p| self.project_with(&rotation, p))
            .collect()
    }

    fn project_with(&self, rotation: &Rotation3<f64>, point: &Point) -> Projected {
        let v = rotation * point.coords;
        Projected {
            x: v.x * self.zoom,
            y: v.y * self.zoom,
            depth: v.z,
        }
    }
}
