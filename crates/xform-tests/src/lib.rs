//! Integration tests for xform-rs crates.
//!
//! Algebraic properties of the kernel checked over randomized inputs, the
//! fixed scenarios the kernel is expected to reproduce, and end-to-end
//! scene runs driven from YAML files.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use xform_core::Error;
    use xform_math::{EulerOrder, Mat4, Vec3};

    const SAMPLES: usize = 200;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn random_vec3(rng: &mut StdRng, min: f32, max: f32) -> Vec3 {
        Vec3::new(
            rng.gen_range(min..max),
            rng.gen_range(min..max),
            rng.gen_range(min..max),
        )
    }

    /// Random affine transform with scale bounded away from zero.
    fn random_transform(rng: &mut StdRng) -> Mat4 {
        Mat4::from_transform(
            random_vec3(rng, -10.0, 10.0),
            random_vec3(rng, -4.0, 4.0),
            random_vec3(rng, 0.5, 2.0),
        )
    }

    /// Random dense matrix, diagonally dominant so it is well conditioned.
    fn random_dense(rng: &mut StdRng) -> Mat4 {
        let mut m = Mat4::ZERO;
        for v in m.elements.iter_mut() {
            *v = rng.gen_range(-1.0..1.0);
        }
        for i in 0..4 {
            m[(i, i)] += 4.0;
        }
        m
    }

    // ---- Identity laws ----

    #[test]
    fn test_matrix_identity_law() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let m = random_dense(&mut rng);
            assert_eq!(Mat4::multiply(&m, &Mat4::IDENTITY), m);
            assert_eq!(Mat4::multiply(&Mat4::IDENTITY, &m), m);
        }
    }

    #[test]
    fn test_vector_identity_law() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let v = random_vec3(&mut rng, -100.0, 100.0);
            assert_eq!(Vec3::add(v, Vec3::ZERO), v);
            assert_eq!(Vec3::multiply_scalar(v, 1.0), v);
            assert_eq!(Vec3::multiply(v, Vec3::ONE), v);
        }
    }

    // ---- Inverse ----

    #[test]
    fn test_inverse_round_trip() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            for m in [random_transform(&mut rng), random_dense(&mut rng)] {
                let inv = m.inverse().unwrap();
                assert_abs_diff_eq!(Mat4::multiply(&m, &inv), Mat4::IDENTITY, epsilon = 1e-4);
                assert_abs_diff_eq!(Mat4::multiply(&inv, &m), Mat4::IDENTITY, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_inverse_of_camera_matrices() {
        let view = Mat4::look_at(Vec3::new(3.0, 4.0, 5.0), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective(70.0, 1.5, 0.1, 100.0);
        for m in [view, proj, Mat4::multiply(&proj, &view)] {
            let inv = m.inverse().unwrap();
            assert_abs_diff_eq!(Mat4::multiply(&m, &inv), Mat4::IDENTITY, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_inverse_matches_glam() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let m = random_dense(&mut rng);
            let ours = m.inverse().unwrap();
            let theirs = Mat4::from_glam(m.to_glam().inverse());
            assert_abs_diff_eq!(ours, theirs, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_zero_matrix_is_singular() {
        let err = Mat4::ZERO.inverse().unwrap_err();
        assert!(err.is_singular());
        assert_eq!(err, Error::SingularMatrix { determinant: 0.0 });
    }

    #[test]
    fn test_rank_deficient_is_singular() {
        let identical_rows = Mat4::new(
            1.0, 2.0, 3.0, 4.0,
            1.0, 2.0, 3.0, 4.0,
            0.0, 1.0, 0.0, 2.0,
            5.0, 0.0, 1.0, 1.0,
        );
        assert!(identical_rows.inverse().unwrap_err().is_singular());

        let flat = Mat4::scale(1.0, 0.0, 1.0);
        assert!(flat.inverse().unwrap_err().is_singular());
        assert!(flat.normal_matrix().unwrap_err().is_singular());
    }

    #[test]
    fn test_failed_inverse_leaves_destination() {
        let mut dst = Mat4::translation(Vec3::ONE);
        let before = dst;
        assert!(Mat4::inverse_into(&Mat4::ZERO, &mut dst).is_err());
        assert_eq!(dst, before);
    }

    // ---- Transpose, cross, normalize ----

    #[test]
    fn test_transpose_involution() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let m = random_dense(&mut rng);
            let mut t = m;
            t.transpose().transpose();
            assert_eq!(t, m);
        }
    }

    #[test]
    fn test_cross_antisymmetry() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let a = random_vec3(&mut rng, -10.0, 10.0);
            let b = random_vec3(&mut rng, -10.0, 10.0);
            assert_eq!(a.cross(b), -b.cross(a));
        }
    }

    #[test]
    fn test_normalize_unit_length() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let mut v = random_vec3(&mut rng, -50.0, 50.0);
            if v.length() < 1e-3 {
                continue;
            }
            assert_abs_diff_eq!(v.normalize().length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let mut v = Vec3::ZERO;
        v.normalize();
        assert!(v.is_nan());
    }

    // ---- Fixed scenarios ----

    #[test]
    fn test_translation_moves_origin() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_vec4([0.0, 0.0, 0.0, 1.0]), [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let m = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);
        assert_abs_diff_eq!(m.transform_vector(Vec3::X), Vec3::Y, epsilon = 1e-6);
    }

    #[test]
    fn test_compose_pure_scale() {
        let mut m = Mat4::IDENTITY;
        m.compose(Vec3::ZERO, Vec3::ZERO, Vec3::splat(2.0));
        assert_eq!(m, Mat4::scale(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_multiply_associative() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let a = random_transform(&mut rng);
            let b = random_dense(&mut rng);
            let c = random_transform(&mut rng);
            let left = Mat4::multiply(&a, &Mat4::multiply(&b, &c));
            let right = Mat4::multiply(&Mat4::multiply(&a, &b), &c);
            assert_abs_diff_eq!(left, right, epsilon = 1e-2);
        }
    }

    // ---- Layout and conventions ----

    #[test]
    fn test_storage_is_column_major() {
        let m = Mat4::new(
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        );
        assert_eq!(
            m.to_cols_array(),
            [1.0, 5.0, 9.0, 13.0, 2.0, 6.0, 10.0, 14.0, 3.0, 7.0, 11.0, 15.0, 4.0, 8.0, 12.0, 16.0]
        );
        assert_eq!(m.to_glam(), glam::Mat4::from_cols_array(&m.to_cols_array()));
    }

    #[test]
    fn test_self_multiply_is_safe() {
        let mut rng = rng();
        let m = random_transform(&mut rng);
        let mut squared = m;
        let copy = squared;
        squared.multiply_assign(&copy);
        assert_eq!(squared, Mat4::multiply(&m, &m));
    }

    #[test]
    fn test_compose_matches_glam_for_every_order() {
        let pos = Vec3::new(1.0, -2.0, 0.5);
        let rot = Vec3::new(0.4, -1.1, 2.3);
        let scale = Vec3::new(1.5, 0.5, 2.0);
        let (rx, ry, rz) = (
            glam::Mat4::from_rotation_x(rot.x),
            glam::Mat4::from_rotation_y(rot.y),
            glam::Mat4::from_rotation_z(rot.z),
        );
        for order in EulerOrder::ALL {
            let axes = order.axes().map(|a| [rx, ry, rz][a]);
            let expected = glam::Mat4::from_translation(pos.to_glam())
                * axes[0]
                * axes[1]
                * axes[2]
                * glam::Mat4::from_scale(scale.to_glam());

            let mut m = Mat4::IDENTITY;
            m.compose_with_order(pos, rot, scale, order);
            assert_abs_diff_eq!(m, Mat4::from_glam(expected), epsilon = 1e-5);
        }
    }

    #[test]
    fn test_display_form() {
        let text = Mat4::IDENTITY.to_string();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "      1.0000      0.0000      0.0000      0.0000");
        for line in &lines[1..] {
            assert_eq!(line.len(), 48);
        }
    }

    // ---- Scene ----

    mod scene {
        use approx::assert_abs_diff_eq;
        use std::io::Write;
        use xform_math::Mat4;
        use xform_scene::{Scene, SceneConfig, SceneError, uniform};

        const YAML: &str = "\
seed: 1234
entity_count: 32
damping: 0.95
camera:
  fov_degrees: 60
  aspect: 1.5
  orbit: true
ranges:
  scale: [0.5, 1.5]
";

        #[test]
        fn test_scene_from_yaml_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("scene.yaml");
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(YAML.as_bytes()).unwrap();

            let config = SceneConfig::from_file(&path).unwrap();
            let mut scene = Scene::from_config(&config).unwrap();
            assert_eq!(scene.len(), 32);
            assert_eq!(scene.damping(), 0.95);

            let mut time = 0.0;
            for _ in 0..120 {
                time += 16.0;
                scene.update(time, 16.0).unwrap();
            }
            assert_abs_diff_eq!(scene.timer.last_fps().unwrap(), 62.5, epsilon = 1e-9);

            let frame = scene.frame_uniforms();
            assert_eq!(frame.projection, Mat4::perspective(60.0, 1.5, 0.1, 1000.0));

            for (e, u) in scene.entities().iter().zip(scene.entity_uniforms()) {
                assert_eq!(u.model, e.model);
                let expected = Mat4::from_glam(e.model.to_glam().inverse().transpose());
                assert_abs_diff_eq!(u.normal, expected, epsilon = 1e-3);
            }
        }

        #[test]
        fn test_same_seed_same_frames() {
            let config = SceneConfig::from_yaml_str(YAML).unwrap();
            let mut a = Scene::from_config(&config).unwrap();
            let mut b = Scene::from_config(&config).unwrap();
            for frame in 1..=10 {
                a.update(frame as f64 * 16.0, 16.0).unwrap();
                b.update(frame as f64 * 16.0, 16.0).unwrap();
            }
            assert_eq!(
                uniform::entity_bytes(a.entity_uniforms()),
                uniform::entity_bytes(b.entity_uniforms())
            );
        }

        #[test]
        fn test_bad_config_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("bad.yaml");
            std::fs::write(&path, "camera:\n  near: 5\n  far: 1\n").unwrap();
            assert!(matches!(
                SceneConfig::from_file(&path),
                Err(SceneError::InvalidConfig { .. })
            ));

            std::fs::write(&path, "entity_count: [1, 2]\n").unwrap();
            assert!(matches!(SceneConfig::from_file(&path), Err(SceneError::Yaml(_))));
        }
    }
}
