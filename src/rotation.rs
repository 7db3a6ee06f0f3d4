/*

    Rotations that align an arbitrary direction with a reference axis.

    Slice range computation only needs "rotate this direction onto +X
    and apply the result to points", so that is the whole capability
    exposed by AxisAligner.

    Convention used by ArcAligner:
        - n = unit_direction(direction), (u, v) = n.any_orthonormal_pair( ),
          with v flipped if needed so that (n, u, v) is right handed
        - the rotation is B_axis * B_n^T where B_x has columns (x, u_x, v_x),
          so for the default +X axis the rows are exactly n, u, v and the
          rotated x coordinate of a point p is n . p
        - deterministic for every direction, including parallel and
          anti-parallel ones
        - no translation, no scale

    @date: Oct, 2025
    @author: bartu
*/

use crate::prelude::*;
use crate::error::SliceRangeError;

pub trait AxisAligner {
    /// Rigid rotation taking `direction` onto the aligner's axis
    fn align_to_axis(&self, direction: Vector3) -> Result<Matrix4, SliceRangeError>;
}

/// Normalize without going through x^2 + y^2 + z^2 of the raw components,
/// which overflows above ~1e154 and underflows below ~1e-162.
/// NaN components are let through and give a NaN direction.
pub fn unit_direction(direction: Vector3) -> Result<Vector3, SliceRangeError> {
    if direction == Vector3::ZERO {
        return Err(SliceRangeError::InvalidDirection(direction));
    }
    let scale = direction.abs().max_element();
    Ok((direction / scale).normalize())
}

/// Columns (n, u, v), a right handed orthonormal basis with n first
fn basis_from(n: Vector3) -> Matrix3 {
    let (u, mut v) = n.any_orthonormal_pair();
    if Matrix3::from_cols(n, u, v).determinant() < 0.0 {
        v = -v;
    }
    Matrix3::from_cols(n, u, v)
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(SmartDefault)]
pub struct ArcAligner {
    #[default(Vector3::X)]
    axis: Vector3,
}

impl ArcAligner {
    pub fn towards(axis: Vector3) -> Result<Self, SliceRangeError> {
        Ok(Self { axis: unit_direction(axis)? })
    }

    pub fn axis(&self) -> Vector3 {
        self.axis
    }
}

impl AxisAligner for ArcAligner {
    fn align_to_axis(&self, direction: Vector3) -> Result<Matrix4, SliceRangeError> {
        let n = unit_direction(direction)?;
        let rotation = basis_from(self.axis) * basis_from(n).transpose();
        Ok(Matrix4::from_mat3(rotation))
    }
}
