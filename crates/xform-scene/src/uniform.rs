//! Plain-old-data uniform blocks, ready to be uploaded as raw bytes.
//!
//! Matrices keep their column-major layout, so the bytes match what a
//! shader expects for an untransposed `mat4`.

use bytemuck::{Pod, Zeroable};
use xform_math::{Mat4, Vec3};

/// Per-frame camera uniforms.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct FrameUniforms {
    /// World-to-camera.
    pub view: Mat4,
    /// Camera-to-clip.
    pub projection: Mat4,
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }
}

/// Per-entity uniforms.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct EntityUniforms {
    /// Object-to-world.
    pub model: Mat4,
    /// Inverse-transpose of `model`, for transforming normals.
    pub normal: Mat4,
    /// RGB color.
    pub color: Vec3,
}

impl Default for EntityUniforms {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
            normal: Mat4::IDENTITY,
            color: Vec3::ONE,
        }
    }
}

impl FrameUniforms {
    /// Raw bytes of the block.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl EntityUniforms {
    /// Raw bytes of the block.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Raw bytes of a contiguous uniform array.
pub fn entity_bytes(uniforms: &[EntityUniforms]) -> &[u8] {
    bytemuck::cast_slice(uniforms)
}
