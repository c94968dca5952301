use core::{fmt, ops};

use crate::math::FreeVector;

/// Enumeration of the axes of three-dimensional space.
///
/// Can be used to infallibly index vectors.
///
/// See also:
///
/// * [`Face`](crate::math::Face) names one side of the cube, and thus an axis and a direction on it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All three axes in the standard order, [X, Y, Z].
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Convert the axis to a number for indexing 3-element arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the unit vector along the positive direction of this axis.
    #[inline]
    pub fn unit_vector(self) -> FreeVector {
        let mut v = FreeVector::zero();
        v[self] = 1.0;
        v
    }
}

/// Format the axis as one of the strings "X", "Y", or "Z" (uppercase).
impl fmt::UpperHex for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        })
    }
}

impl<T, U> ops::Index<Axis> for euclid::Vector3D<T, U> {
    type Output = T;

    #[inline]
    fn index(&self, index: Axis) -> &Self::Output {
        match index {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl<T, U> ops::IndexMut<Axis> for euclid::Vector3D<T, U> {
    #[inline]
    fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
        match index {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}
