//! Perspective camera with an optional time-driven orbit.

use tracing::trace;
use xform_math::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Time scale applied to milliseconds before evaluating the orbit.
pub const ORBIT_TIME_SCALE: f64 = 0.0001;
/// Horizontal orbit radius.
pub const ORBIT_RADIUS: f32 = 50.0;
/// Vertical bob amplitude.
pub const ORBIT_HEIGHT: f32 = 5.0;

/// Camera state and its cached view and projection matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// World up.
    pub up: Vec3,
    /// Vertical field of view, degrees.
    pub fov_degrees: f32,
    /// Width / height.
    pub aspect: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Whether [`Camera::update`] moves the eye along the orbit.
    pub orbit: bool,
    view: Mat4,
    projection: Mat4,
}

impl Camera {
    /// Creates a camera and computes its initial matrices.
    pub fn new(config: &CameraConfig) -> Self {
        let mut camera = Self {
            position: Vec3::from_array(config.position),
            target: Vec3::from_array(config.target),
            up: Vec3::from_array(config.up),
            fov_degrees: config.fov_degrees,
            aspect: config.aspect,
            near: config.near,
            far: config.far,
            orbit: config.orbit,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.refresh();
        camera
    }

    /// Eye position on the orbit at `time_ms`.
    pub fn orbit_position(time_ms: f64) -> Vec3 {
        let t = time_ms * ORBIT_TIME_SCALE;
        Vec3::new(
            t.sin() as f32 * ORBIT_RADIUS,
            (-t / 2.0).sin() as f32 * ORBIT_HEIGHT,
            (t / 3.0).cos() as f32 * ORBIT_RADIUS,
        )
    }

    /// Advances the orbit (when enabled) and recomputes both matrices.
    pub fn update(&mut self, time_ms: f64) {
        if self.orbit {
            self.position = Self::orbit_position(time_ms);
        }
        self.refresh();
        trace!(time_ms, position = ?self.position, "camera updated");
    }

    /// Changes the aspect ratio, e.g. after a viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        Mat4::perspective_into(self.fov_degrees, self.aspect, self.near, self.far, &mut self.projection);
    }

    /// Recomputes view and projection from the current fields.
    pub fn refresh(&mut self) {
        Mat4::look_at_into(self.position, self.target, self.up, &mut self.view);
        Mat4::perspective_into(self.fov_degrees, self.aspect, self.near, self.far, &mut self.projection);
    }

    /// World-to-camera matrix.
    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    /// Camera-to-clip matrix.
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// `projection * view`.
    pub fn view_projection(&self) -> Mat4 {
        Mat4::multiply(&self.projection, &self.view)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}
