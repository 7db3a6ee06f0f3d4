/*

    Declare numeric types used throughout this repo.

    Everything runs in double precision. Slice positions are
    compared against each other by callers (slider steps etc.),
    so f32 error along long view axes is not acceptable here.

    @date: 2 Oct, 2025
    @author: Bartu
*/

use bevy_math::{DMat3, DMat4, DVec3, DVec4};
pub type Float = f64; // WARNING: If you want to change it to f32, don't forget to update the vector and matrix types
pub type Vector3 = DVec3;
pub type Vector4 = DVec4;
pub type Matrix3 = DMat3;
pub type Matrix4 = DMat4;

pub fn approx_zero(x: Float) -> bool {
    x.abs() < 1e-8
}

pub fn transform_point(mat: &Matrix4, v: &Vector3) -> Vector3 {
    let v4 = Vector4::new(v.x, v.y, v.z, 1.0);
    let r = *mat * v4;
    Vector3::new(r.x, r.y, r.z)
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn approx_zero_uses_tight_tolerance() {
        assert!(approx_zero(0.0));
        assert!(approx_zero(-5e-9));
        assert!(!approx_zero(1e-6));
    }

    #[test]
    fn transform_point_applies_translation() {
        let mat = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let p = transform_point(&mat, &Vector3::new(1.0, 1.0, 1.0));

        assert_abs_diff_eq!(p.x, 2.0);
        assert_abs_diff_eq!(p.y, 3.0);
        assert_abs_diff_eq!(p.z, 4.0);
    }

    #[test]
    fn transform_point_applies_rotation_block() {
        let mat = Matrix4::from_mat3(Matrix3::from_rotation_z(std::f64::consts::FRAC_PI_2));
        let p = transform_point(&mat, &Vector3::X);

        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(p.z, 0.0);
    }
}
