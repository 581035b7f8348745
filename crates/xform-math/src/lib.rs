//! # xform-math
//!
//! Dense linear algebra for a real-time transform pipeline:
//! model/view/projection composition, entity kinematics, camera
//! construction and normal matrices.
//!
//! - [`Vec3`] - 3-component vector (positions, velocities, Euler angles)
//! - [`Mat4`] - 4x4 matrix, column-major, upload-ready
//! - [`EulerOrder`] - rotation order policy for [`Mat4::compose`]
//! - [`simd`] - `wide`-based batch paths
//!
//! # Design
//!
//! Storage is **column-major** and vectors are **column vectors**:
//!
//! ```text
//! clip = projection * view * model * point
//! ```
//!
//! Every producing operation has a destination form (`*_into`) so a render
//! loop can update the same matrices every frame without allocating.
//! Only inversion reports errors; everything else follows IEEE-754.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Mat4, Vec3};
//!
//! let model = Mat4::from_transform(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::ONE);
//! let view = Mat4::look_at(Vec3::new(0.0, 2.0, 10.0), Vec3::ZERO, Vec3::Y);
//! let proj = Mat4::perspective(70.0, 16.0 / 9.0, 0.1, 1000.0);
//!
//! let mvp = proj * view * model;
//! let uniform: &[f32; 16] = mvp.as_array();
//! assert_eq!(uniform.len(), 16);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop and cross-checking
//! - [`wide`] - portable SIMD
//! - [`bytemuck`] - byte views for buffer uploads
//! - [`approx`] - float comparisons
//! - `xform-core` - errors and layout

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod euler;
mod mat4;
mod projection;
pub mod simd;
mod vec3;

pub use euler::EulerOrder;
pub use mat4::*;
pub use vec3::*;
pub use xform_core::{Error, Result};

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Quat as GlamQuat, Vec3 as GlamVec3};
}
