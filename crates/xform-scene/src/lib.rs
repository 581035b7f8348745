//! Per-frame transform driver built on `xform-math`.
//!
//! This crate reproduces the update half of a small real-time renderer,
//! with no graphics API attached: an orbiting perspective camera, a set
//! of entities with damped linear and angular velocity, and the uniform
//! blocks (model, normal, view, projection matrices) a renderer uploads
//! each frame.
//!
//! # Quick Start
//!
//! ```rust
//! use xform_scene::{Scene, SceneConfig};
//!
//! let config = SceneConfig {
//!     seed: Some(1),
//!     entity_count: 8,
//!     ..SceneConfig::default()
//! };
//! let mut scene = Scene::from_config(&config).unwrap();
//!
//! let mut time = 0.0;
//! for _ in 0..3 {
//!     time += 16.0;
//!     scene.update(time, 16.0).unwrap();
//! }
//!
//! let frame = scene.frame_uniforms();
//! assert!(frame.view.is_finite());
//! assert_eq!(scene.entity_uniforms().len(), 8);
//! ```
//!
//! # Configuration
//!
//! Scenes are usually described in YAML, see [`config`] for the format:
//!
//! ```ignore
//! let config = SceneConfig::from_file("scene.yaml")?;
//! ```

#![warn(missing_docs)]

pub mod camera;
pub mod config;
pub mod entity;
pub mod error;
pub mod scene;
pub mod timer;
pub mod uniform;

pub use camera::Camera;
pub use config::{CameraConfig, EntityRanges, SceneConfig};
pub use entity::{DEFAULT_DAMPING, Entity};
pub use error::{SceneError, SceneResult};
pub use scene::Scene;
pub use timer::{FPS_WINDOW, FrameTimer};
pub use uniform::{EntityUniforms, FrameUniforms};
