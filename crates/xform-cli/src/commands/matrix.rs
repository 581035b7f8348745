//! Matrix command: build one factory matrix and print it.

use crate::{MatrixArgs, MatrixKind};
use anyhow::{Context, Result, bail};
use tracing::debug;
use xform_core::deg_to_rad;
use xform_math::{EulerOrder, Mat4, Vec3};

/// Runs the matrix command.
pub fn run(args: MatrixArgs, verbose: bool) -> Result<()> {
    let mut m = build(args.kind, &args.values, args.degrees, args.order)?;
    debug!(kind = ?args.kind, values = ?args.values, "built matrix");

    if args.invert {
        m.invert().context("--invert failed")?;
    }
    if args.normal {
        m = m.normal_matrix().context("--normal failed")?;
    }
    if args.transpose {
        m.transpose();
    }

    if args.flat {
        println!("{}", super::format_flat(&m));
    } else {
        println!("{m}");
    }

    if verbose {
        eprintln!("determinant: {}", m.determinant());
    }
    Ok(())
}

/// Number of positional values each kind takes; `None` for a variable count.
fn arity(kind: MatrixKind) -> Option<usize> {
    match kind {
        MatrixKind::Identity => Some(0),
        MatrixKind::Translation | MatrixKind::Scale => Some(3),
        MatrixKind::RotationX | MatrixKind::RotationY | MatrixKind::RotationZ => Some(1),
        MatrixKind::Frustum => Some(6),
        MatrixKind::Perspective => Some(4),
        MatrixKind::LookAt | MatrixKind::Compose => Some(9),
        MatrixKind::Raw => None,
    }
}

/// Builds the matrix for `kind` from positional values.
fn build(kind: MatrixKind, values: &[f32], degrees: bool, order: EulerOrder) -> Result<Mat4> {
    if let Some(n) = arity(kind) {
        if values.len() != n {
            bail!("{:?} takes {} value(s), got {}", kind, n, values.len());
        }
    }

    let angle = |v: f32| if degrees { deg_to_rad(v) } else { v };
    let v = values;
    let vec3 = |i: usize| Vec3::new(v[i], v[i + 1], v[i + 2]);

    let m = match kind {
        MatrixKind::Identity => Mat4::IDENTITY,
        MatrixKind::Translation => Mat4::translation(vec3(0)),
        MatrixKind::RotationX => Mat4::rotation_x(angle(v[0])),
        MatrixKind::RotationY => Mat4::rotation_y(angle(v[0])),
        MatrixKind::RotationZ => Mat4::rotation_z(angle(v[0])),
        MatrixKind::Scale => Mat4::scale(v[0], v[1], v[2]),
        MatrixKind::Frustum => Mat4::frustum(v[0], v[1], v[2], v[3], v[4], v[5]),
        MatrixKind::Perspective => Mat4::perspective(v[0], v[1], v[2], v[3]),
        MatrixKind::LookAt => Mat4::look_at(vec3(0), vec3(3), vec3(6)),
        MatrixKind::Compose => {
            let r = vec3(3);
            let rotation = Vec3::new(angle(r.x), angle(r.y), angle(r.z));
            let mut m = Mat4::IDENTITY;
            m.compose_with_order(vec3(0), rotation, vec3(6), order);
            m
        }
        MatrixKind::Raw => Mat4::from_row_major_prefix(v)?,
    };
    Ok(m)
}
