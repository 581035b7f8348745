//! The per-frame driver tying camera, entities and uniforms together.
//!
//! One [`Scene::update`] call does what a render loop needs before
//! issuing draw calls:
//!
//! 1. Move the camera and rebuild view/projection.
//! 2. Feed the frame time to the fps averager.
//! 3. Step every entity (damping, integration, model recompose).
//! 4. Refresh each entity's uniform block, including its normal matrix.
//!
//! Steps 3 and 4 run on the rayon pool. Every entity owns its matrices
//! and no step reads another entity, so the parallel result is identical
//! to a sequential pass.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use tracing::{debug, trace};
use xform_math::Mat4;

use crate::camera::Camera;
use crate::config::{EntityRanges, SceneConfig};
use crate::entity::Entity;
use crate::error::{SceneError, SceneResult};
use crate::timer::FrameTimer;
use crate::uniform::{EntityUniforms, FrameUniforms};

/// A camera plus a set of moving entities.
#[derive(Debug, Clone)]
pub struct Scene {
    /// The viewing camera.
    pub camera: Camera,
    entities: Vec<Entity>,
    uniforms: Vec<EntityUniforms>,
    /// Fps averager fed by [`Scene::update`].
    pub timer: FrameTimer,
    damping: f32,
    ranges: EntityRanges,
    rng: StdRng,
}

impl Scene {
    /// Builds a scene with `config.entity_count` random entities.
    ///
    /// The config is validated first. A fixed `seed` makes the initial
    /// entity set reproducible.
    pub fn from_config(config: &SceneConfig) -> SceneResult<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut scene = Self {
            camera: Camera::new(&config.camera),
            entities: Vec::with_capacity(config.entity_count),
            uniforms: Vec::with_capacity(config.entity_count),
            timer: FrameTimer::new(),
            damping: config.damping,
            ranges: config.ranges.clone(),
            rng,
        };
        for _ in 0..config.entity_count {
            scene.add_random_entity()?;
        }

        debug!(
            entities = scene.entities.len(),
            seed = ?config.seed,
            damping = scene.damping,
            "scene created"
        );
        Ok(scene)
    }

    /// Adds an entity and computes its uniforms right away.
    ///
    /// Fails with [`SceneError::NormalMatrix`] if the entity's model matrix
    /// is singular (e.g. a zero scale component); the entity is not added.
    pub fn add_entity(&mut self, entity: Entity) -> SceneResult<usize> {
        let index = self.entities.len();
        let mut uniforms = EntityUniforms::default();
        fill_uniforms(index, &entity, &mut uniforms)?;
        self.entities.push(entity);
        self.uniforms.push(uniforms);
        trace!(index, "entity added");
        Ok(index)
    }

    /// Adds an entity drawn from the configured ranges.
    pub fn add_random_entity(&mut self) -> SceneResult<usize> {
        let entity = Entity::random(&mut self.rng, &self.ranges);
        self.add_entity(entity)
    }

    /// Advances one frame.
    ///
    /// `time_ms` is the absolute clock driving the camera orbit,
    /// `elapsed_ms` the duration of the previous frame.
    ///
    /// A [`SceneError::NormalMatrix`] failure still leaves the camera moved,
    /// every entity stepped and the frame time recorded; only the uniform
    /// blocks are partially refreshed.
    pub fn update(&mut self, time_ms: f64, elapsed_ms: f64) -> SceneResult<()> {
        self.camera.update(time_ms);
        self.timer.record(elapsed_ms);

        let damping = self.damping;
        self.entities.par_iter_mut().for_each(|entity| entity.step(damping));
        self.refresh_uniforms()?;

        trace!(time_ms, entities = self.entities.len(), "frame updated");
        Ok(())
    }

    /// Recomputes every entity's uniform block from its current state.
    ///
    /// Blocks of entities processed before a failure are updated; on error
    /// the reported index is one of the entities with a singular model.
    pub fn refresh_uniforms(&mut self) -> SceneResult<()> {
        self.entities
            .par_iter()
            .zip(self.uniforms.par_iter_mut())
            .enumerate()
            .try_for_each(|(index, (entity, uniforms))| fill_uniforms(index, entity, uniforms))
    }

    /// Camera uniforms for the current frame.
    pub fn frame_uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            view: *self.camera.view(),
            projection: *self.camera.projection(),
        }
    }

    /// Entity uniforms in entity order.
    pub fn entity_uniforms(&self) -> &[EntityUniforms] {
        &self.uniforms
    }

    /// Entities in insertion order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Mutable access to the entities.
    ///
    /// Uniforms are stale until the next [`Scene::update`] or
    /// [`Scene::refresh_uniforms`].
    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True if the scene has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Per-frame velocity damping.
    pub fn damping(&self) -> f32 {
        self.damping
    }
}

fn fill_uniforms(index: usize, entity: &Entity, uniforms: &mut EntityUniforms) -> SceneResult<()> {
    uniforms.model = entity.model;
    uniforms.color = entity.color;
    Mat4::normal_matrix_into(&entity.model, &mut uniforms.normal)
        .map_err(|source| SceneError::NormalMatrix { index, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use xform_math::Vec3;

    fn seeded(count: usize) -> SceneConfig {
        SceneConfig {
            seed: Some(42),
            entity_count: count,
            ..SceneConfig::default()
        }
    }

    #[test]
    fn test_from_config_builds_entities() {
        let scene = Scene::from_config(&seeded(25)).unwrap();
        assert_eq!(scene.len(), 25);
        assert_eq!(scene.entity_uniforms().len(), 25);
        for (e, u) in scene.entities().iter().zip(scene.entity_uniforms()) {
            assert_eq!(u.model, e.model);
            assert_eq!(u.color, e.color);
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = Scene::from_config(&seeded(10)).unwrap();
        let b = Scene::from_config(&seeded(10)).unwrap();
        assert_eq!(a.entities(), b.entities());
    }

    #[test]
    fn test_update_matches_sequential_step() {
        let mut scene = Scene::from_config(&seeded(40)).unwrap();
        let mut expected: Vec<Entity> = scene.entities().to_vec();
        for e in &mut expected {
            e.step(scene.damping());
        }

        scene.update(16.0, 16.0).unwrap();
        assert_eq!(scene.entities(), expected.as_slice());
    }

    #[test]
    fn test_normal_matrix_is_inverse_transpose() {
        let mut scene = Scene::from_config(&seeded(5)).unwrap();
        scene.update(0.0, 16.0).unwrap();
        for u in scene.entity_uniforms() {
            // N^T * M = I
            let product = Mat4::multiply(&u.normal.transposed(), &u.model);
            assert_abs_diff_eq!(product, Mat4::IDENTITY, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_frame_uniforms_follow_camera() {
        let mut scene = Scene::from_config(&seeded(0)).unwrap();
        assert!(scene.is_empty());
        scene.update(5_000.0, 16.0).unwrap();
        let frame = scene.frame_uniforms();
        assert_eq!(frame.view, *scene.camera.view());
        assert_eq!(frame.projection, *scene.camera.projection());
    }

    #[test]
    fn test_singular_entity_rejected() {
        let mut scene = Scene::from_config(&seeded(3)).unwrap();
        let flat = Entity::new(Vec3::ZERO, Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0));
        let err = scene.add_entity(flat).unwrap_err();
        assert!(matches!(err, SceneError::NormalMatrix { index: 3, .. }));
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn test_update_reports_collapsed_entity() {
        let mut scene = Scene::from_config(&seeded(4)).unwrap();
        scene.entities_mut()[2].scale = Vec3::ZERO;
        let err = scene.update(0.0, 16.0).unwrap_err();
        assert!(matches!(err, SceneError::NormalMatrix { index: 2, .. }));
    }

    #[test]
    fn test_failed_frame_still_counted() {
        let mut scene = Scene::from_config(&seeded(3)).unwrap();
        let before: Vec<Entity> = scene.entities().to_vec();
        scene.entities_mut()[0].scale = Vec3::ZERO;

        assert!(scene.update(16.0, 16.0).is_err());
        assert_eq!(scene.timer.frames(), 1);
        // Healthy entities were stepped anyway
        assert_ne!(scene.entities()[1].position, before[1].position);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = seeded(1);
        config.camera.near = -1.0;
        assert!(matches!(
            Scene::from_config(&config),
            Err(SceneError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_timer_fed_by_update() {
        let mut scene = Scene::from_config(&seeded(1)).unwrap();
        for frame in 0..60 {
            scene.update(frame as f64 * 25.0, 25.0).unwrap();
        }
        assert_eq!(scene.timer.last_fps(), Some(40.0));
    }
}
