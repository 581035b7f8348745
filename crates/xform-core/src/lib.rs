//! # xform-core
//!
//! Core types shared by the xform transform kernel.
//!
//! - [`Error`], [`Result`] - the kernel's error taxonomy
//! - [`offset`], [`row_col`] - column-major 4x4 layout mapping
//! - [`deg_to_rad`], [`half_fov_rad`] - angle unit helpers
//!
//! ## Crate Structure
//!
//! ```text
//! xform-core (this crate)
//!    ^
//!    |
//!    +-- xform-math (Vec3, Mat4)
//!          ^
//!          +-- xform-scene (camera, entities, per-frame uniforms)
//!                ^
//!                +-- xform-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod angle;
pub mod error;
pub mod layout;

pub use angle::*;
pub use error::*;
pub use layout::*;
