//! Rotations about the principal axes.
//! This module is private but reexported by its parent.

use core::ops::Mul;

use crate::math::{Axis, FreeCoordinate, FreePoint, FreeVector, vec3};

/// A 3×3 orthonormal matrix which rotates [`FreeVector`]s and [`FreePoint`]s about the
/// origin.
///
/// Construct it with [`rotation()`] and combine rotations with `*`; as with all
/// matrices, `a * b` applies `b` first.
//---
// Design note: `euclid::Rotation3D` is a quaternion, and we want the exact matrix
// arithmetic that the twist engine's geometry is defined in terms of.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix {
    /// First column; the image of `(1, 0, 0)`.
    pub x: FreeVector,
    /// Second column; the image of `(0, 1, 0)`.
    pub y: FreeVector,
    /// Third column; the image of `(0, 0, 1)`.
    pub z: FreeVector,
}

/// Returns the matrix which rotates by `theta` radians about `axis`.
///
/// Positive angles turn clockwise as seen from the positive end of the axis looking
/// toward the origin. For example, a quarter turn about [`Axis::Y`] carries `(1, 0, 0)`
/// onto `(0, 0, 1)`:
///
/// ```
/// # extern crate ascii_rubik_base as ascii_rubik;
/// use std::f64::consts::FRAC_PI_2;
/// use ascii_rubik::math::{Axis, rotation, vec3};
///
/// let turned = rotation(Axis::Y, FRAC_PI_2).transform_vector(vec3(1.0, 0.0, 0.0));
/// assert!((turned - vec3(0.0, 0.0, 1.0)).length() < 1e-15);
/// ```
#[inline]
pub fn rotation(axis: Axis, theta: FreeCoordinate) -> RotationMatrix {
    let (s, c) = theta.sin_cos();
    match axis {
        Axis::X => RotationMatrix {
            x: vec3(1., 0., 0.),
            y: vec3(0., c, -s),
            z: vec3(0., s, c),
        },
        Axis::Y => RotationMatrix {
            x: vec3(c, 0., s),
            y: vec3(0., 1., 0.),
            z: vec3(-s, 0., c),
        },
        Axis::Z => RotationMatrix {
            x: vec3(c, -s, 0.),
            y: vec3(s, c, 0.),
            z: vec3(0., 0., 1.),
        },
    }
}

impl RotationMatrix {
    /// Rotates a vector.
    #[inline]
    pub fn transform_vector(&self, v: FreeVector) -> FreeVector {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Rotates a point about the origin.
    #[inline]
    pub fn transform_point(&self, p: FreePoint) -> FreePoint {
        self.transform_vector(p.to_vector()).to_point()
    }
}

impl Mul for RotationMatrix {
    type Output = Self;

    /// Composes rotations; the right-hand side is applied first.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.transform_vector(rhs.x),
            y: self.transform_vector(rhs.y),
            z: self.transform_vector(rhs.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const EPSILON: f64 = 1e-12;

    const IDENTITY: RotationMatrix = RotationMatrix {
        x: FreeVector::new(1., 0., 0.),
        y: FreeVector::new(0., 1., 0.),
        z: FreeVector::new(0., 0., 1.),
    };

    fn assert_close(a: FreeVector, b: FreeVector) {
        assert!((a - b).length() < EPSILON, "{a:?} != {b:?}");
    }

    fn assert_matrix_close(a: RotationMatrix, b: RotationMatrix) {
        assert_close(a.x, b.x);
        assert_close(a.y, b.y);
        assert_close(a.z, b.z);
    }

    fn rows(m: RotationMatrix) -> [[FreeCoordinate; 3]; 3] {
        [
            [m.x.x, m.y.x, m.z.x],
            [m.x.y, m.y.y, m.z.y],
            [m.x.z, m.y.z, m.z.z],
        ]
    }

    #[rstest]
    fn zero_angle_is_identity(#[values(Axis::X, Axis::Y, Axis::Z)] axis: Axis) {
        assert_eq!(rotation(axis, 0.0), IDENTITY);
    }

    #[test]
    fn row_layout() {
        let (s, c) = 0.3f64.sin_cos();
        assert_eq!(
            rows(rotation(Axis::X, 0.3)),
            [[1., 0., 0.], [0., c, s], [0., -s, c]]
        );
        assert_eq!(
            rows(rotation(Axis::Y, 0.3)),
            [[c, 0., -s], [0., 1., 0.], [s, 0., c]]
        );
        assert_eq!(
            rows(rotation(Axis::Z, 0.3)),
            [[c, s, 0.], [-s, c, 0.], [0., 0., 1.]]
        );
    }

    /// A positive quarter turn is clockwise seen from the positive end of the axis.
    #[rstest]
    #[case(Axis::X, vec3(0., 1., 0.), vec3(0., 0., -1.))]
    #[case(Axis::Y, vec3(1., 0., 0.), vec3(0., 0., 1.))]
    #[case(Axis::Z, vec3(1., 0., 0.), vec3(0., -1., 0.))]
    fn quarter_turn_direction(
        #[case] axis: Axis,
        #[case] input: FreeVector,
        #[case] expected: FreeVector,
    ) {
        assert_close(rotation(axis, FRAC_PI_2).transform_vector(input), expected);
    }

    #[rstest]
    fn axis_is_fixed(#[values(Axis::X, Axis::Y, Axis::Z)] axis: Axis) {
        let v = axis.unit_vector() * 2.5;
        assert_close(rotation(axis, 1.234).transform_vector(v), v);
    }

    #[rstest]
    fn negative_angle_is_inverse(#[values(Axis::X, Axis::Y, Axis::Z)] axis: Axis) {
        let theta = 0.7;
        assert_matrix_close(
            rotation(axis, theta) * rotation(axis, -theta),
            IDENTITY,
        );
        // The inverse of a rotation is its transpose.
        let (inverse, forward) = (rows(rotation(axis, -theta)), rows(rotation(axis, theta)));
        for r in 0..3 {
            for c in 0..3 {
                assert!((inverse[r][c] - forward[c][r]).abs() < EPSILON);
            }
        }
    }

    #[rstest]
    fn angles_add(#[values(Axis::X, Axis::Y, Axis::Z)] axis: Axis) {
        assert_matrix_close(
            rotation(axis, 0.4) * rotation(axis, 0.9),
            rotation(axis, 1.3),
        );
        assert_matrix_close(
            rotation(axis, PI) * rotation(axis, PI),
            IDENTITY,
        );
    }

    #[test]
    fn composition_order_matters() {
        let a = rotation(Axis::Y, FRAC_PI_2);
        let b = rotation(Axis::X, FRAC_PI_2);
        let v = vec3(0., 0., 1.);
        // b first: +Z goes to +Y, which a leaves alone.
        assert_close((a * b).transform_vector(v), vec3(0., 1., 0.));
        // a first: +Z goes to -X, which b leaves alone.
        assert_close((b * a).transform_vector(v), vec3(-1., 0., 0.));
    }

    #[test]
    fn columns_stay_orthonormal() {
        let m = rotation(Axis::Y, 0.5236) * rotation(Axis::X, -1.1) * rotation(Axis::Z, 2.0);
        for (a, b) in [(m.x, m.y), (m.y, m.z), (m.z, m.x)] {
            assert!(a.dot(b).abs() < EPSILON);
        }
        for c in [m.x, m.y, m.z] {
            assert!((c.length() - 1.0).abs() < EPSILON);
        }
        assert_close(m.x.cross(m.y), m.z);
    }

    #[test]
    fn transform_point_matches_vector() {
        let m = rotation(Axis::Z, 0.25);
        let p = FreePoint::new(1., 2., 3.);
        assert_eq!(m.transform_point(p), m.transform_vector(p.to_vector()).to_point());
    }
}
