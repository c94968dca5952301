//! [`CubeAssembly`], the whole puzzle, and [`Layer`]s of it which can be twisted.

use core::f64::consts::FRAC_PI_2;
use core::fmt;

use crate::StickerColor;
use crate::cubelet::Cubelet;
use crate::math::{Axis, Face, FreePoint, point3, rotation};

/// Index into the 3×3×3 grid of a [`CubeAssembly`].
///
/// `[i, j, k]` is the slot for the cubelet at lattice position `(i − 1, 1 − j, 1 − k)`:
/// the first index runs left to right, the second top to bottom, and the third front to
/// back.
pub type GridIndex = [usize; 3];

/// Nine cubelets sharing one grid coordinate along one axis; the unit of a twist.
///
/// Every `(axis, index)` pair with `index < 3` is a valid layer. Seven of them have
/// names and key bindings; the two middle slices along X and Y do not.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Layer {
    axis: Axis,
    index: usize,
}

impl Layer {
    /// The face nearest the default viewer.
    pub const FRONT: Self = Self { axis: Axis::Z, index: 0 };
    /// The slice between [`Layer::FRONT`] and [`Layer::BACK`].
    pub const MIDDLE: Self = Self { axis: Axis::Z, index: 1 };
    #[allow(missing_docs)]
    pub const BACK: Self = Self { axis: Axis::Z, index: 2 };
    #[allow(missing_docs)]
    pub const TOP: Self = Self { axis: Axis::Y, index: 0 };
    #[allow(missing_docs)]
    pub const BOTTOM: Self = Self { axis: Axis::Y, index: 2 };
    #[allow(missing_docs)]
    pub const LEFT: Self = Self { axis: Axis::X, index: 0 };
    #[allow(missing_docs)]
    pub const RIGHT: Self = Self { axis: Axis::X, index: 2 };

    /// All nine layers, ordered by axis and then index.
    pub const ALL: [Self; 9] = [
        Self::LEFT,
        Self { axis: Axis::X, index: 1 },
        Self::RIGHT,
        Self::TOP,
        Self { axis: Axis::Y, index: 1 },
        Self::BOTTOM,
        Self::FRONT,
        Self::MIDDLE,
        Self::BACK,
    ];

    /// Returns the layer at `index` along `axis`, or [`None`] if `index` is out of
    /// range.
    pub const fn new(axis: Axis, index: usize) -> Option<Self> {
        if index < 3 {
            Some(Self { axis, index })
        } else {
            None
        }
    }

    /// The axis which the layer turns about.
    pub const fn axis(self) -> Axis {
        self.axis
    }

    /// Position of the layer along its axis, in grid index order (see [`GridIndex`]).
    pub const fn index(self) -> usize {
        self.index
    }

    /// Returns the grid slot of the cubelet at `(row, col)` of this layer's 3×3 slice.
    ///
    /// The two in-layer coordinates are the remaining grid axes in X, Y, Z order.
    #[inline]
    pub const fn slot(self, row: usize, col: usize) -> GridIndex {
        match self.axis {
            Axis::X => [self.index, row, col],
            Axis::Y => [row, self.index, col],
            Axis::Z => [row, col, self.index],
        }
    }

    /// Returns whether the grid slot belongs to this layer.
    pub const fn contains(self, slot: GridIndex) -> bool {
        slot[self.axis.index()] == self.index
    }

    /// Name used in key binding descriptions and logs, if this layer has one.
    pub const fn name(self) -> Option<&'static str> {
        match (self.axis, self.index) {
            (Axis::Z, 0) => Some("front"),
            (Axis::Z, 1) => Some("middle"),
            (Axis::Z, 2) => Some("back"),
            (Axis::Y, 0) => Some("top"),
            (Axis::Y, 2) => Some("bottom"),
            (Axis::X, 0) => Some("left"),
            (Axis::X, 2) => Some("right"),
            _ => None,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.pad(name),
            None => write!(f, "{:X} slice {}", self.axis, self.index),
        }
    }
}

/// The whole puzzle: 27 [`Cubelet`]s in a 3×3×3 grid.
///
/// The grid slot of each cubelet always corresponds to its current position, as
/// described at [`GridIndex`].
#[derive(Clone, Debug, PartialEq)]
pub struct CubeAssembly {
    grid: [[[Cubelet; 3]; 3]; 3],
}

impl CubeAssembly {
    /// Constructs a solved cube with no rotations applied.
    pub fn new() -> Self {
        Self {
            grid: core::array::from_fn(|i| {
                core::array::from_fn(|j| {
                    core::array::from_fn(|k| Cubelet::new(lattice_position([i, j, k])))
                })
            }),
        }
    }

    /// Returns the cubelet in the given slot.
    ///
    /// Panics if any index is 3 or more.
    pub fn get(&self, [i, j, k]: GridIndex) -> &Cubelet {
        &self.grid[i][j][k]
    }

    fn get_mut(&mut self, [i, j, k]: GridIndex) -> &mut Cubelet {
        &mut self.grid[i][j][k]
    }

    /// Returns the nine cubelets in `layer`, arranged as described at [`Layer::slot()`].
    pub fn layer(&self, layer: Layer) -> [[&Cubelet; 3]; 3] {
        core::array::from_fn(|row| core::array::from_fn(|col| self.get(layer.slot(row, col))))
    }

    /// Iterates over all 27 cubelets in grid order.
    pub fn cubelets(&self) -> impl Iterator<Item = &Cubelet> {
        self.grid.iter().flatten().flatten()
    }

    /// Iterates over all 27 cubelets together with their grid slots.
    pub fn indexed_cubelets(&self) -> impl Iterator<Item = (GridIndex, &Cubelet)> {
        (0..27).map(|n| {
            let slot = [n / 9, (n / 3) % 3, n % 3];
            (slot, self.get(slot))
        })
    }

    /// Turns `layer` by a quarter turn.
    ///
    /// `clockwise` is as seen from the positive end of the layer's axis, that is, from
    /// the right, the top, or the front.
    pub fn twist(&mut self, layer: Layer, clockwise: bool) {
        let mut direction: i8 = if clockwise { 1 } else { -1 };
        let r = rotation(layer.axis(), f64::from(direction) * FRAC_PI_2);
        for row in 0..3 {
            for col in 0..3 {
                self.get_mut(layer.slot(row, col)).rotate_in_place(r);
            }
        }

        // Z slices have rows along +X and columns along -Y, which is left-handed about
        // their axis, unlike X and Y slices; so their slots permute the other way.
        if layer.axis() == Axis::Z {
            direction = -direction;
        }

        let old: [[Cubelet; 3]; 3] = core::array::from_fn(|row| {
            core::array::from_fn(|col| self.get(layer.slot(row, col)).clone())
        });
        for row in 0..3 {
            for col in 0..3 {
                let (from_row, from_col) = if direction < 0 {
                    (col, 2 - row)
                } else {
                    (2 - col, row)
                };
                *self.get_mut(layer.slot(row, col)) = old[from_row][from_col].clone();
            }
        }

        log::trace!("twisted {layer} {}", if clockwise { "clockwise" } else { "counterclockwise" });
        debug_assert!(
            self.grid_matches_positions(),
            "grid out of sync after twisting {layer}"
        );
    }

    /// Returns the colors showing on one side of the cube, as a 3×3 piece of the
    /// cross-shaped net
    ///
    /// ```text
    ///       T
    ///     L F R
    ///       D
    ///       B
    /// ```
    ///
    /// That is: the top is seen from above with the back edge at row 0; the front,
    /// left and right are seen from outside with the top edge at row 0; the bottom is
    /// seen from below with the front edge at row 0; and the back continues below the
    /// bottom, upside down.
    pub fn facelets(&self, face: Face) -> [[StickerColor; 3]; 3] {
        let direction = face.normal_vector();
        core::array::from_fn(|row| {
            core::array::from_fn(|col| {
                let slot = match face {
                    Face::Top => [col, 0, 2 - row],
                    Face::Front => [col, row, 0],
                    Face::Bottom => [col, 2, row],
                    Face::Back => [col, 2 - row, 2],
                    Face::Left => [0, row, 2 - col],
                    Face::Right => [2, row, col],
                };
                self.get(slot).dominant_face_color(direction)
            })
        })
    }

    /// Returns whether every side of the cube shows a single color.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let facelets = self.facelets(face);
            let first = facelets[0][0];
            facelets.iter().flatten().all(|&color| color == first)
        })
    }

    /// Returns whether every cubelet's grid slot matches its position.
    pub fn grid_matches_positions(&self) -> bool {
        self.indexed_cubelets()
            .all(|(slot, cubelet)| grid_index_of(cubelet.position()) == Some(slot))
    }
}

impl Default for CubeAssembly {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the position at which the cubelet in `slot` belongs.
pub fn lattice_position([i, j, k]: GridIndex) -> FreePoint {
    point3(i as f64 - 1.0, 1.0 - j as f64, 1.0 - k as f64)
}

/// Returns the grid slot for a cubelet at `position`, after rounding off accumulated
/// floating-point error, or [`None`] if it is outside the lattice.
pub fn grid_index_of(position: FreePoint) -> Option<GridIndex> {
    let to_index = |c: f64| {
        let c = c.round();
        if (0.0..=2.0).contains(&c) {
            Some(c as usize)
        } else {
            None
        }
    };
    Some([
        to_index(position.x + 1.0)?,
        to_index(1.0 - position.y)?,
        to_index(1.0 - position.z)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FaceMap;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    fn assert_cubelet_close(a: &Cubelet, b: &Cubelet) {
        assert!((a.position() - b.position()).length() < TOLERANCE, "{a:?}\n{b:?}");
        for (x, y) in a
            .front_corners()
            .iter()
            .chain(&a.back_corners())
            .zip(b.front_corners().iter().chain(&b.back_corners()))
        {
            assert!((*x - *y).length() < TOLERANCE, "{a:?}\n{b:?}");
        }
        for face in Face::ALL {
            assert!(
                (a.face_normals()[face] - b.face_normals()[face]).length() < TOLERANCE,
                "{a:?}\n{b:?}"
            );
        }
        assert_eq!(a.face_colors(), b.face_colors());
    }

    fn assert_assembly_close(a: &CubeAssembly, b: &CubeAssembly) {
        for ((slot, x), y) in a.indexed_cubelets().zip(b.cubelets()) {
            assert_eq!(x.face_colors(), y.face_colors(), "at {slot:?}");
            assert_cubelet_close(x, y);
        }
    }

    /// An arbitrary but fixed sequence touching every axis.
    fn scramble(cube: &mut CubeAssembly) {
        for (layer, clockwise) in [
            (Layer::FRONT, true),
            (Layer::RIGHT, false),
            (Layer::TOP, true),
            (Layer::ALL[1], true),
            (Layer::BACK, false),
            (Layer::BOTTOM, true),
            (Layer::MIDDLE, true),
            (Layer::LEFT, false),
            (Layer::ALL[4], false),
        ] {
            cube.twist(layer, clockwise);
        }
    }

    #[test]
    fn layer_constructor() {
        assert_eq!(Layer::new(Axis::Z, 0), Some(Layer::FRONT));
        assert_eq!(Layer::new(Axis::X, 2), Some(Layer::RIGHT));
        assert_eq!(Layer::new(Axis::Y, 3), None);
        for layer in Layer::ALL {
            assert_eq!(Layer::new(layer.axis(), layer.index()), Some(layer));
        }
    }

    #[test]
    fn layer_display() {
        assert_eq!(
            Layer::ALL.map(|layer| layer.to_string()),
            [
                "left", "X slice 1", "right", "top", "Y slice 1", "bottom", "front",
                "middle", "back"
            ]
        );
    }

    #[rstest]
    fn layer_selects_nine_sharing_coordinate(#[values(0, 1, 2, 3, 4, 5, 6, 7, 8)] n: usize) {
        let layer = Layer::ALL[n];
        let cube = CubeAssembly::new();
        let axis = layer.axis();
        let expected_coordinate = lattice_position(layer.slot(0, 0)).to_vector()[axis];
        let mut count = 0;
        for row in cube.layer(layer) {
            for cubelet in row {
                assert_eq!(cubelet.position().to_vector()[axis], expected_coordinate);
                count += 1;
            }
        }
        assert_eq!(count, 9);
    }

    #[test]
    fn fresh_grid_matches_positions() {
        let cube = CubeAssembly::new();
        assert!(cube.grid_matches_positions());
        assert_eq!(cube.get([0, 0, 0]).position(), point3(-1., 1., 1.));
        assert_eq!(cube.get([2, 2, 2]).position(), point3(1., -1., -1.));
        assert_eq!(cube.cubelets().count(), 27);
    }

    #[rstest]
    fn four_twists_restore(
        #[values(0, 1, 2, 3, 4, 5, 6, 7, 8)] n: usize,
        #[values(false, true)] clockwise: bool,
    ) {
        let layer = Layer::ALL[n];
        let original = CubeAssembly::new();
        let mut cube = original.clone();
        for _ in 0..4 {
            cube.twist(layer, clockwise);
            assert!(cube.grid_matches_positions());
        }
        assert_assembly_close(&cube, &original);
    }

    #[rstest]
    fn twist_and_inverse_restore(#[values(0, 1, 2, 3, 4, 5, 6, 7, 8)] n: usize) {
        let layer = Layer::ALL[n];
        let mut original = CubeAssembly::new();
        scramble(&mut original);
        let mut cube = original.clone();
        cube.twist(layer, true);
        cube.twist(layer, false);
        assert_assembly_close(&cube, &original);
    }

    #[rstest]
    fn twist_touches_only_its_layer(
        #[values(0, 1, 2, 3, 4, 5, 6, 7, 8)] n: usize,
        #[values(false, true)] clockwise: bool,
        #[values(false, true)] scrambled: bool,
    ) {
        let layer = Layer::ALL[n];
        let mut before = CubeAssembly::new();
        if scrambled {
            scramble(&mut before);
        }
        let mut after = before.clone();
        after.twist(layer, clockwise);

        let mut changed = 0;
        for ((slot, old), new) in before.indexed_cubelets().zip(after.cubelets()) {
            if old != new {
                assert!(layer.contains(slot), "{slot:?} should be untouched");
                changed += 1;
            }
        }
        if scrambled {
            assert!(changed <= 9);
        } else {
            assert_eq!(changed, 9);
        }
    }

    #[test]
    fn normals_stay_orthonormal_after_scramble() {
        let mut cube = CubeAssembly::new();
        for _ in 0..5 {
            scramble(&mut cube);
        }
        assert!(cube.grid_matches_positions());
        for cubelet in cube.cubelets() {
            let normals = cubelet.face_normals();
            for (a, na) in normals.iter() {
                assert!((na.length() - 1.0).abs() < TOLERANCE);
                for (b, nb) in normals.iter() {
                    if a != b && a != b.opposite() {
                        assert!(na.dot(*nb).abs() < TOLERANCE, "{a} · {b}");
                    }
                }
            }
        }
    }

    #[test]
    fn fresh_facelets() {
        let cube = CubeAssembly::new();
        for face in Face::ALL {
            assert_eq!(cube.facelets(face), [[StickerColor::for_face(face); 3]; 3]);
        }
        assert!(cube.is_solved());
    }

    /// Turning the front clockwise, as seen from the front, carries the left side's
    /// stickers onto the front row of the top.
    #[test]
    fn front_clockwise_facelets() {
        use StickerColor::*;
        let mut cube = CubeAssembly::new();
        cube.twist(Layer::FRONT, true);
        assert_eq!(
            cube.facelets(Face::Top),
            [[Green, Green, Green], [Green, Green, Green], [Yellow, Yellow, Yellow]]
        );
        assert_eq!(
            cube.facelets(Face::Right),
            [[Green, White, White], [Green, White, White], [Green, White, White]]
        );
        assert_eq!(cube.facelets(Face::Front), [[Red; 3]; 3]);
        assert_eq!(cube.facelets(Face::Back), [[Magenta; 3]; 3]);
    }

    /// Turning the right clockwise, as seen from the right, carries the front
    /// stickers up.
    #[test]
    fn right_clockwise_facelets() {
        use StickerColor::*;
        let mut cube = CubeAssembly::new();
        cube.twist(Layer::RIGHT, true);
        assert_eq!(cube.facelets(Face::Top), [[Green, Green, Red]; 3]);
        assert_eq!(cube.facelets(Face::Front), [[Red, Red, Blue]; 3]);
    }

    /// Turning the top clockwise, as seen from above, carries the front stickers to
    /// the left.
    #[test]
    fn top_clockwise_facelets() {
        use StickerColor::*;
        let mut cube = CubeAssembly::new();
        cube.twist(Layer::TOP, true);
        assert_eq!(cube.facelets(Face::Left)[0], [Red; 3]);
        assert_eq!(cube.facelets(Face::Front)[0], [White; 3]);
        assert_eq!(cube.facelets(Face::Front)[1], [Red; 3]);
    }

    #[rstest]
    fn single_twist_unsolves_and_inverse_resolves(#[values(0, 1, 2, 3, 4, 5, 6, 7, 8)] n: usize) {
        let layer = Layer::ALL[n];
        let mut cube = CubeAssembly::new();
        cube.twist(layer, false);
        assert!(!cube.is_solved());
        cube.twist(layer, true);
        assert!(cube.is_solved());
    }

    #[test]
    fn facelet_counts_are_preserved() {
        let mut cube = CubeAssembly::new();
        scramble(&mut cube);
        let mut counts = FaceMap::<usize>::default();
        for face in Face::ALL {
            for color in cube.facelets(face).into_iter().flatten() {
                let home = Face::ALL
                    .into_iter()
                    .find(|&f| StickerColor::for_face(f) == color)
                    .unwrap();
                counts[home] += 1;
            }
        }
        assert_eq!(counts, FaceMap::from_fn(|_| 9));
    }

    #[test]
    fn grid_index_of_rounds_and_rejects() {
        assert_eq!(grid_index_of(point3(-1.0000001, 0.9999999, 1e-12)), Some([0, 0, 1]));
        assert_eq!(grid_index_of(point3(2., 0., 0.)), None);
        for slot in CubeAssembly::new().indexed_cubelets().map(|(slot, _)| slot) {
            assert_eq!(grid_index_of(lattice_position(slot)), Some(slot));
        }
    }
}
