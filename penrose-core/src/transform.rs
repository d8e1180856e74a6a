//! Point rotations about an arbitrary origin.
//!
//! Angles are in degrees and follow the right-handed convention: positive
//! angles rotate counter-clockwise when looking down the rotation axis.
use nalgebra::{Point3, Rotation2, Rotation3, Unit, Vector2, Vector3};

/// Axis choices for [`rotate_about_axis`]. Diagonal axes are normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    X,
    Y,
    Z,
    XY,
    XZ,
    YZ,
}

impl RotationAxis {
    pub fn unit_vector(self) -> Unit<Vector3<f32>> {
        let axis = match self {
            RotationAxis::X => Vector3::x(),
            RotationAxis::Y => Vector3::y(),
            RotationAxis::Z => Vector3::z(),
            RotationAxis::XY => Vector3::new(1.0, 1.0, 0.0),
            RotationAxis::XZ => Vector3::new(1.0, 0.0, 1.0),
            RotationAxis::YZ => Vector3::new(0.0, 1.0, 1.0),
        };
        Unit::new_normalize(axis)
    }
}

/// Rotate `point` about `origin` in the XY plane. The result has `z = 0`.
pub fn rotate_about(origin: &Point3<f32>, angle_degrees: f32, point: &Point3<f32>) -> Point3<f32> {
    let rotation = Rotation2::new(angle_degrees.to_radians());
    let offset = Vector2::new(point.x - origin.x, point.y - origin.y);
    let rotated = rotation * offset;

    Point3::new(rotated.x + origin.x, rotated.y + origin.y, 0.0)
}

/// Rotate `point` about the line through `origin` along `axis`.
pub fn rotate_about_axis(
    origin: &Point3<f32>,
    angle_degrees: f32,
    point: &Point3<f32>,
    axis: RotationAxis,
) -> Point3<f32> {
    let rotation = Rotation3::from_axis_angle(&axis.unit_vector(), angle_degrees.to_radians());
    origin + rotation * (point - origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &Point3<f32>, b: &Point3<f32>) {
        assert!(
            nalgebra::distance(a, b) < 1e-5,
            "expected {:?} to be close to {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_quarter_turn_is_counter_clockwise() {
        let origin = Point3::origin();
        let rotated = rotate_about(&origin, 90.0, &Point3::new(1.0, 0.0, 0.0));
        assert_close(&rotated, &Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotation_about_offset_origin() {
        let origin = Point3::new(1.0, 1.0, 0.0);
        let rotated = rotate_about(&origin, 180.0, &Point3::new(2.0, 1.0, 0.0));
        assert_close(&rotated, &Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_planar_rotation_drops_z() {
        let rotated = rotate_about(&Point3::origin(), 45.0, &Point3::new(1.0, 0.0, 3.0));
        assert_eq!(rotated.z, 0.0);
        assert!((rotated.coords.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_axis_rotation_matches_planar_for_z() {
        let origin = Point3::new(0.5, -0.25, 0.0);
        let p = Point3::new(2.0, 1.0, 0.0);
        let planar = rotate_about(&origin, 36.0, &p);
        let spatial = rotate_about_axis(&origin, 36.0, &p, RotationAxis::Z);
        assert_close(&planar, &spatial);
    }

    #[test]
    fn test_axis_rotation_is_right_handed() {
        let origin = Point3::origin();
        let y = Point3::new(0.0, 1.0, 0.0);
        let about_x = rotate_about_axis(&origin, 90.0, &y, RotationAxis::X);
        assert_close(&about_x, &Point3::new(0.0, 0.0, 1.0));

        let z = Point3::new(0.0, 0.0, 1.0);
        let about_y = rotate_about_axis(&origin, 90.0, &z, RotationAxis::Y);
        assert_close(&about_y, &Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_axis_rotation_preserves_distance() {
        let origin = Point3::new(1.0, 2.0, 3.0);
        let p = Point3::new(-1.0, 0.5, 4.0);
        for axis in [
            RotationAxis::X,
            RotationAxis::Y,
            RotationAxis::XY,
            RotationAxis::XZ,
            RotationAxis::YZ,
        ] {
            let rotated = rotate_about_axis(&origin, 72.0, &p, axis);
            let before = nalgebra::distance(&origin, &p);
            let after = nalgebra::distance(&origin, &rotated);
            assert!((before - after).abs() < 1e-5);
        }
    }
}
