//! Moving scene entities.

use rand::Rng;
use xform_math::{Mat4, Vec3};

use crate::config::EntityRanges;

/// Default per-frame velocity damping.
pub const DEFAULT_DAMPING: f32 = 0.99;

/// A transformed object with simple linear and angular kinematics.
///
/// `model` is recomposed in place by [`Entity::step`], so an entity never
/// allocates after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    /// World position.
    pub position: Vec3,
    /// Euler angles, radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Position change per step.
    pub velocity: Vec3,
    /// Rotation change per step.
    pub angular_velocity: Vec3,
    /// RGB color.
    pub color: Vec3,
    /// Model matrix as of the last [`Entity::step`] or [`Entity::recompose`].
    pub model: Mat4,
}

impl Entity {
    /// Creates a resting entity with its model matrix composed.
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        let mut entity = Self {
            position,
            rotation,
            scale,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            color: Vec3::ONE,
            model: Mat4::IDENTITY,
        };
        entity.recompose();
        entity
    }

    /// Sets linear and angular velocity.
    pub fn with_velocity(mut self, velocity: Vec3, angular_velocity: Vec3) -> Self {
        self.velocity = velocity;
        self.angular_velocity = angular_velocity;
        self
    }

    /// Sets the color.
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    /// Draws every attribute uniformly from `ranges`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, ranges: &EntityRanges) -> Self {
        let position = random_vec3(rng, ranges.position);
        let scale = random_vec3(rng, ranges.scale);
        let rotation = random_vec3(rng, ranges.rotation);
        let angular_velocity = random_vec3(rng, ranges.angular_velocity);
        let velocity = random_vec3(rng, ranges.velocity);
        let color = random_vec3(rng, ranges.color);

        Self::new(position, rotation, scale)
            .with_velocity(velocity, angular_velocity)
            .with_color(color)
    }

    /// Advances one frame: damp, integrate, recompose.
    pub fn step(&mut self, damping: f32) {
        Vec3::multiply_scalar_into(self.velocity, damping, &mut self.velocity);
        Vec3::multiply_scalar_into(self.angular_velocity, damping, &mut self.angular_velocity);
        Vec3::add_into(self.position, self.velocity, &mut self.position);
        Vec3::add_into(self.rotation, self.angular_velocity, &mut self.rotation);
        self.recompose();
    }

    /// Rebuilds `model` from position, rotation and scale.
    pub fn recompose(&mut self) {
        self.model.compose(self.position, self.rotation, self.scale);
    }
}

fn random_vec3<R: Rng + ?Sized>(rng: &mut R, [min, max]: [f32; 2]) -> Vec3 {
    Vec3::new(
        rng.gen_range(min..=max),
        rng.gen_range(min..=max),
        rng.gen_range(min..=max),
    )
}
