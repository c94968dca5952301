//! [`Cubelet`], one of the 27 small cubes which make up the puzzle.

use crate::StickerColor;
use crate::math::{Face, FaceMap, FreePoint, FreeVector, RotationMatrix, point3};

/// One unit cube of the assembly, with its current geometry and its sticker colors.
///
/// A cubelet's stickers are permanently attached to its face labels: rotating the
/// cubelet rotates its corners, normals and position, and the colors follow the
/// normals. Thus the question “what color is showing on the top of this cubelet” is
/// always answered from the current normals ([`Cubelet::dominant_face_color()`]) without
/// any separate bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct Cubelet {
    position: FreePoint,
    /// Starting at the top left and going clockwise, as seen from in front.
    front_corners: [FreePoint; 4],
    /// Same x/y order as `front_corners`.
    back_corners: [FreePoint; 4],
    face_normals: FaceMap<FreeVector>,
    face_colors: FaceMap<StickerColor>,
}

impl Cubelet {
    /// Constructs an unrotated cubelet with side length 1, centered on `position`.
    pub fn new(position: FreePoint) -> Self {
        let offset = position.to_vector();
        let corner = |x: f64, y: f64, z: f64| point3(x, y, z) * 0.5 + offset;
        Self {
            position,
            front_corners: [
                corner(-1., 1., 1.),
                corner(1., 1., 1.),
                corner(1., -1., 1.),
                corner(-1., -1., 1.),
            ],
            back_corners: [
                corner(-1., 1., -1.),
                corner(1., 1., -1.),
                corner(1., -1., -1.),
                corner(-1., -1., -1.),
            ],
            face_normals: FaceMap::from_fn(Face::normal_vector),
            face_colors: FaceMap::from_fn(StickerColor::for_face),
        }
    }

    /// Applies the rotation to every corner, every face normal, and the position.
    ///
    /// The rotation is about the scene origin, not the cubelet's own center.
    pub fn rotate_in_place(&mut self, rotation: RotationMatrix) {
        for corner in self
            .front_corners
            .iter_mut()
            .chain(self.back_corners.iter_mut())
        {
            *corner = rotation.transform_point(*corner);
        }
        for (_, normal) in self.face_normals.iter_mut() {
            *normal = rotation.transform_vector(*normal);
        }
        self.position = rotation.transform_point(self.position);
    }

    /// Returns the face whose normal is best aligned with `direction`.
    ///
    /// Ties go to whichever face comes first in [`Face::ALL`].
    pub fn dominant_face(&self, direction: FreeVector) -> Face {
        let mut best = Face::Front;
        let mut best_alignment = f64::NEG_INFINITY;
        for (face, normal) in self.face_normals.iter() {
            let alignment = normal.dot(direction);
            if alignment > best_alignment {
                best = face;
                best_alignment = alignment;
            }
        }
        best
    }

    /// Returns the sticker color showing toward `direction`.
    ///
    /// For example, with `direction = (0, 1, 0)` this is the color seen when looking at
    /// the cubelet from above.
    pub fn dominant_face_color(&self, direction: FreeVector) -> StickerColor {
        self.face_colors[self.dominant_face(direction)]
    }

    /// Returns the faces which should be drawn for a viewer in `camera_direction`: those
    /// whose normal has a positive inner product with it.
    ///
    /// This is a whole-cube approximation: the same direction is used for every
    /// cubelet, rather than the direction from each face to the eye.
    pub fn visible_faces(&self, camera_direction: FreeVector) -> impl Iterator<Item = Face> + '_ {
        self.face_normals
            .iter()
            .filter(move |(_, normal)| camera_direction.dot(**normal) > 0.0)
            .map(|(face, _)| face)
    }

    /// Returns the corners of the given face, in order around its perimeter.
    pub fn face_polygon(&self, face: Face) -> [FreePoint; 4] {
        let [f0, f1, f2, f3] = self.front_corners;
        let [b0, b1, b2, b3] = self.back_corners;
        match face {
            Face::Front => [f0, f1, f2, f3],
            Face::Back => [b3, b2, b1, b0],
            Face::Left => [f0, b0, b3, f3],
            Face::Right => [f1, f2, b2, b1],
            Face::Top => [f0, f1, b1, b0],
            Face::Bottom => [f2, f3, b3, b2],
        }
    }

    /// Returns the 12 edges of the cubelet, for drawing it as a wireframe.
    pub fn edges(&self) -> impl Iterator<Item = [FreePoint; 2]> + '_ {
        let ring =
            |corners: [FreePoint; 4]| (0..4).map(move |i| [corners[i], corners[(i + 1) % 4]]);
        ring(self.front_corners)
            .chain(ring(self.back_corners))
            .chain(
                self.front_corners
                    .iter()
                    .zip(&self.back_corners)
                    .map(|(&f, &b)| [f, b]),
            )
    }

    /// Center of the cubelet.
    pub fn position(&self) -> FreePoint {
        self.position
    }

    /// The corners on the face labeled [`Face::Front`].
    pub fn front_corners(&self) -> [FreePoint; 4] {
        self.front_corners
    }

    /// The corners on the face labeled [`Face::Back`].
    pub fn back_corners(&self) -> [FreePoint; 4] {
        self.back_corners
    }

    /// Current outward normals of each labeled face.
    pub fn face_normals(&self) -> &FaceMap<FreeVector> {
        &self.face_normals
    }

    /// Sticker colors of each labeled face. These never change.
    pub fn face_colors(&self) -> &FaceMap<StickerColor> {
        &self.face_colors
    }
}
