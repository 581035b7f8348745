//! Euler-angle conventions used by [`Mat4::compose`](crate::Mat4::compose).
//!
//! Angles are radians, stored in a [`Vec3`] as `(x, y, z)` regardless of
//! the order they are applied in. The order names the intrinsic rotation
//! sequence: [`EulerOrder::Xyz`] rotates about X, then the new Y, then the
//! new Z, which as a matrix is `Rx * Ry * Rz`.
//!
//! Conversion goes through a unit quaternion built from half-angle sines
//! and cosines, then expanded to a 3x3 rotation block.

use crate::Vec3;

/// Intrinsic Tait-Bryan rotation order.
///
/// Order `ABC` produces the rotation matrix `R_A * R_B * R_C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EulerOrder {
    /// X, then Y, then Z. The default used by `compose`.
    #[default]
    Xyz,
    /// Y, then X, then Z.
    Yxz,
    /// Z, then X, then Y.
    Zxy,
    /// Z, then Y, then X.
    Zyx,
    /// Y, then Z, then X.
    Yzx,
    /// X, then Z, then Y.
    Xzy,
}

impl EulerOrder {
    /// All supported orders.
    pub const ALL: [EulerOrder; 6] = [
        EulerOrder::Xyz,
        EulerOrder::Yxz,
        EulerOrder::Zxy,
        EulerOrder::Zyx,
        EulerOrder::Yzx,
        EulerOrder::Xzy,
    ];

    /// Axis indices (0 = X, 1 = Y, 2 = Z) in application order.
    pub const fn axes(self) -> [usize; 3] {
        match self {
            EulerOrder::Xyz => [0, 1, 2],
            EulerOrder::Yxz => [1, 0, 2],
            EulerOrder::Zxy => [2, 0, 1],
            EulerOrder::Zyx => [2, 1, 0],
            EulerOrder::Yzx => [1, 2, 0],
            EulerOrder::Xzy => [0, 2, 1],
        }
    }

    /// Lowercase name, e.g. `"xyz"`.
    pub const fn name(self) -> &'static str {
        match self {
            EulerOrder::Xyz => "xyz",
            EulerOrder::Yxz => "yxz",
            EulerOrder::Zxy => "zxy",
            EulerOrder::Zyx => "zyx",
            EulerOrder::Yzx => "yzx",
            EulerOrder::Xzy => "xzy",
        }
    }
}

impl std::str::FromStr for EulerOrder {
    type Err = xform_core::Error;

    fn from_str(s: &str) -> xform_core::Result<Self> {
        EulerOrder::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| xform_core::Error::invalid_argument(format!("unknown Euler order '{s}'")))
    }
}

/// Unit quaternion `(x, y, z, w)` for the given Euler angles.
pub fn quaternion(rotation: Vec3, order: EulerOrder) -> [f32; 4] {
    let (s1, c1) = (rotation.x / 2.0).sin_cos();
    let (s2, c2) = (rotation.y / 2.0).sin_cos();
    let (s3, c3) = (rotation.z / 2.0).sin_cos();

    match order {
        EulerOrder::Xyz => [
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
            c1 * c2 * s3 + s1 * s2 * c3,
            c1 * c2 * c3 - s1 * s2 * s3,
        ],
        EulerOrder::Yxz => [
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
            c1 * c2 * s3 - s1 * s2 * c3,
            c1 * c2 * c3 + s1 * s2 * s3,
        ],
        EulerOrder::Zxy => [
            s1 * c2 * c3 - c1 * s2 * s3,
            c1 * s2 * c3 + s1 * c2 * s3,
            c1 * c2 * s3 + s1 * s2 * c3,
            c1 * c2 * c3 - s1 * s2 * s3,
        ],
        EulerOrder::Zyx => [
            s1 * c2 * c3 - c1 * s2 * s3,
            c1 * s2 * c3 + s1 * c2 * s3,
            c1 * c2 * s3 - s1 * s2 * c3,
            c1 * c2 * c3 + s1 * s2 * s3,
        ],
        EulerOrder::Yzx => [
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 + s1 * c2 * s3,
            c1 * c2 * s3 - s1 * s2 * c3,
            c1 * c2 * c3 - s1 * s2 * s3,
        ],
        EulerOrder::Xzy => [
            s1 * c2 * c3 - c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
            c1 * c2 * s3 + s1 * s2 * c3,
            c1 * c2 * c3 + s1 * s2 * s3,
        ],
    }
}

/// Expands a unit quaternion into a row-major 3x3 rotation block.
pub fn rotation_block(q: [f32; 4]) -> [[f32; 3]; 3] {
    let [x, y, z, w] = q;

    let (x2, y2, z2) = (x + x, y + y, z + z);
    let (xx, xy, xz) = (x * x2, x * y2, x * z2);
    let (yy, yz, zz) = (y * y2, y * z2, z * z2);
    let (wx, wy, wz) = (w * x2, w * y2, w * z2);

    [
        [1.0 - (yy + zz), xy - wz, xz + wy],
        [xy + wz, 1.0 - (xx + zz), yz - wx],
        [xz - wy, yz + wx, 1.0 - (xx + yy)],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_angles_identity_quaternion() {
        for order in EulerOrder::ALL {
            assert_eq!(quaternion(Vec3::ZERO, order), [0.0, 0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_quaternion_is_unit() {
        let r = Vec3::new(0.7, -1.3, 2.1);
        for order in EulerOrder::ALL {
            let [x, y, z, w] = quaternion(r, order);
            let len = (x * x + y * y + z * z + w * w).sqrt();
            assert!((len - 1.0).abs() < 1e-6, "{order:?}: {len}");
        }
    }

    #[test]
    fn test_single_axis_orders_agree() {
        // A rotation about one axis only cannot depend on the order
        let r = Vec3::new(0.0, 0.9, 0.0);
        let q = quaternion(r, EulerOrder::Xyz);
        for order in EulerOrder::ALL {
            let o = quaternion(r, order);
            for i in 0..4 {
                assert!((o[i] - q[i]).abs() < 1e-7);
            }
        }
    }

    #[test]
    fn test_rotation_block_identity() {
        let m = rotation_block([0.0, 0.0, 0.0, 1.0]);
        assert_eq!(m, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    }

    #[test]
    fn test_order_from_str() {
        assert_eq!("XYZ".parse::<EulerOrder>().unwrap(), EulerOrder::Xyz);
        assert_eq!("zyx".parse::<EulerOrder>().unwrap(), EulerOrder::Zyx);
        assert!("xyx".parse::<EulerOrder>().is_err());
        assert_eq!(EulerOrder::default(), EulerOrder::Xyz);
    }

    #[test]
    fn test_axes_are_permutations() {
        for order in EulerOrder::ALL {
            let mut axes = order.axes();
            axes.sort_unstable();
            assert_eq!(axes, [0, 1, 2]);
        }
    }
}
