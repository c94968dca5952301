//! The six sides of a cube: the [`Face`] type and the [`FaceMap`] container.
//! This module is private but reexported by its parent.

use core::fmt;
use core::ops;

use crate::math::{Axis, FreeVector};

/// Identifies a side of a cubelet or of the whole cube, by its outward direction in the
/// unrotated scene.
///
/// The variant order is significant: it is the order of [`Face::ALL`], of iteration over
/// a [`FaceMap`], and thus the tie-breaking order wherever “the first face that
/// maximizes something” is chosen.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, exhaust::Exhaust)]
#[repr(u8)]
pub enum Face {
    /// The face whose normal vector is `(0, 0, 1)`, toward the default viewer.
    Front = 0,
    /// The face whose normal vector is `(0, 0, -1)`.
    Back = 1,
    /// The face whose normal vector is `(-1, 0, 0)`.
    Left = 2,
    /// The face whose normal vector is `(1, 0, 0)`.
    Right = 3,
    /// The face whose normal vector is `(0, 1, 0)`; upward.
    Top = 4,
    /// The face whose normal vector is `(0, -1, 0)`; downward.
    Bottom = 5,
}

impl Face {
    /// All the values of [`Face`], in declaration order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// Returns which axis this face's normal vector is parallel to.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::X,
            Self::Top | Self::Bottom => Axis::Y,
            Self::Front | Self::Back => Axis::Z,
        }
    }

    /// Returns whether this face's normal points along the positive direction of its axis.
    #[inline]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Front | Self::Right | Self::Top)
    }

    /// Returns the face on the other side of the cube.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
        }
    }

    /// Returns the outward unit normal of this face in the unrotated scene.
    #[inline]
    pub fn normal_vector(self) -> FreeVector {
        let unit = self.axis().unit_vector();
        if self.is_positive() { unit } else { -unit }
    }

    /// Single-letter abbreviation, as used in cube notation
    /// (`F B L R U D`, except that the top is `T`).
    pub const fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Top => 'T',
            Face::Bottom => 'D',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
        })
    }
}

/// Container for values keyed by [`Face`]s. Always holds exactly six elements.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[allow(missing_docs)]
pub struct FaceMap<V> {
    pub front: V,
    pub back: V,
    pub left: V,
    pub right: V,
    pub top: V,
    pub bottom: V,
}

impl<V> FaceMap<V> {
    /// Constructs a [`FaceMap`] by using the provided function to compute
    /// a value for each [`Face`] enum variant.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(Face) -> V) -> Self {
        Self {
            front: f(Face::Front),
            back: f(Face::Back),
            left: f(Face::Left),
            right: f(Face::Right),
            top: f(Face::Top),
            bottom: f(Face::Bottom),
        }
    }

    /// Iterate over the map's key-value pairs by reference, in the same order as [`Face::ALL`].
    pub fn iter(&self) -> impl Iterator<Item = (Face, &V)> {
        Face::ALL.iter().copied().map(move |f| (f, &self[f]))
    }

    /// Iterate over the map's key-value pairs by mutable reference, in the same order as [`Face::ALL`].
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Face, &mut V)> {
        [
            (Face::Front, &mut self.front),
            (Face::Back, &mut self.back),
            (Face::Left, &mut self.left),
            (Face::Right, &mut self.right),
            (Face::Top, &mut self.top),
            (Face::Bottom, &mut self.bottom),
        ]
        .into_iter()
    }
}

impl<V> ops::Index<Face> for FaceMap<V> {
    type Output = V;
    #[inline]
    fn index(&self, face: Face) -> &V {
        match face {
            Face::Front => &self.front,
            Face::Back => &self.back,
            Face::Left => &self.left,
            Face::Right => &self.right,
            Face::Top => &self.top,
            Face::Bottom => &self.bottom,
        }
    }
}

impl<V> ops::IndexMut<Face> for FaceMap<V> {
    #[inline]
    fn index_mut(&mut self, face: Face) -> &mut V {
        match face {
            Face::Front => &mut self.front,
            Face::Back => &mut self.back,
            Face::Left => &mut self.left,
            Face::Right => &mut self.right,
            Face::Top => &mut self.top,
            Face::Bottom => &mut self.bottom,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for FaceMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dm = f.debug_map();
        for (face, value) in self.iter() {
            dm.entry(&format_args!("{face}"), value);
        }
        dm.finish()
    }
}
