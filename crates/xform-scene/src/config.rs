//! Scene configuration loaded from YAML.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```yaml
//! seed: 42
//! entity_count: 500
//! damping: 0.99
//! camera:
//!   fov_degrees: 70
//!   aspect: 1.777
//!   position: [0, 30, 30]
//!   orbit: true
//! ranges:
//!   scale: [1, 3]
//!   velocity: [-1, 1]
//! ```
//!
//! # Example
//!
//! ```rust
//! use xform_scene::SceneConfig;
//!
//! let config = SceneConfig::from_yaml_str("entity_count: 12\n").unwrap();
//! assert_eq!(config.entity_count, 12);
//! assert_eq!(config.camera.fov_degrees, 70.0);
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{SceneError, SceneResult};

/// Top-level scene configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// RNG seed for entity placement; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Number of entities created up front.
    pub entity_count: usize,
    /// Per-frame multiplier applied to linear and angular velocity.
    pub damping: f32,
    /// Camera parameters.
    pub camera: CameraConfig,
    /// Sampling ranges for new entities.
    pub ranges: EntityRanges,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: None,
            entity_count: 100,
            damping: 0.99,
            camera: CameraConfig::default(),
            ranges: EntityRanges::default(),
        }
    }
}

/// Camera parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Viewport width / height.
    pub aspect: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Initial eye position.
    pub position: [f32; 3],
    /// Look-at target.
    pub target: [f32; 3],
    /// World up vector.
    pub up: [f32; 3],
    /// Move the eye along the built-in orbit every frame.
    pub orbit: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 70.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 30.0, 30.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            orbit: true,
        }
    }
}

/// Inclusive `[min, max]` ranges each entity attribute is drawn from.
///
/// Every component of a vector attribute is sampled independently from
/// the same range.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntityRanges {
    /// Initial position.
    pub position: [f32; 2],
    /// Per-axis scale.
    pub scale: [f32; 2],
    /// Initial Euler angles, radians.
    pub rotation: [f32; 2],
    /// Euler angle change per frame, radians.
    pub angular_velocity: [f32; 2],
    /// Position change per frame.
    pub velocity: [f32; 2],
    /// RGB color.
    pub color: [f32; 2],
}

impl Default for EntityRanges {
    fn default() -> Self {
        Self {
            position: [-10.0, 10.0],
            scale: [1.0, 3.0],
            rotation: [-4.0, 4.0],
            angular_velocity: [-0.3, 0.3],
            velocity: [-1.0, 1.0],
            color: [0.0, 1.0],
        }
    }
}

impl EntityRanges {
    fn named(&self) -> [(&'static str, [f32; 2]); 6] {
        [
            ("ranges.position", self.position),
            ("ranges.scale", self.scale),
            ("ranges.rotation", self.rotation),
            ("ranges.angular_velocity", self.angular_velocity),
            ("ranges.velocity", self.velocity),
            ("ranges.color", self.color),
        ]
    }
}

impl SceneConfig {
    /// Loads and validates a config file.
    pub fn from_file(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SceneError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), "loading scene config");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parses and validates a config from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> SceneResult<Self> {
        // An empty document deserializes as unit, not as a map
        let config: SceneConfig = if yaml.trim().is_empty() {
            SceneConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects camera and range values that would produce NaN or
    /// degenerate matrices.
    pub fn validate(&self) -> SceneResult<()> {
        let cam = &self.camera;
        if !(cam.near > 0.0) {
            return Err(SceneError::invalid_config("camera.near", "must be > 0"));
        }
        if !(cam.far > cam.near) {
            return Err(SceneError::invalid_config("camera.far", "must be > camera.near"));
        }
        if !(cam.aspect > 0.0) || !cam.aspect.is_finite() {
            return Err(SceneError::invalid_config("camera.aspect", "must be finite and > 0"));
        }
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            return Err(SceneError::invalid_config(
                "camera.fov_degrees",
                "must be in (0, 180)",
            ));
        }
        let vectors = [
            ("camera.position", cam.position),
            ("camera.target", cam.target),
            ("camera.up", cam.up),
        ];
        for (field, v) in vectors {
            if !v.iter().all(|c| c.is_finite()) {
                return Err(SceneError::invalid_config(field, "must be finite"));
            }
        }
        if !self.damping.is_finite() {
            return Err(SceneError::invalid_config("damping", "must be finite"));
        }
        for (field, [min, max]) in self.ranges.named() {
            if !(min.is_finite() && max.is_finite()) {
                return Err(SceneError::invalid_config(field, "bounds must be finite"));
            }
            if min > max {
                return Err(SceneError::invalid_config(
                    field,
                    format!("min {} is greater than max {}", min, max),
                ));
            }
        }
        Ok(())
    }
}
