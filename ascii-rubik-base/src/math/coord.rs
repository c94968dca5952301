//! Numeric types used for coordinates and related quantities.

use euclid::{Point2D, Point3D, Size2D, Vector2D, Vector3D};

/// Unit-of-measure type for the 3D scene the cube sits in.
///
/// One unit is the edge length of one cubelet; the whole cube spans `-1.5..=1.5` on
/// each axis and is centered on the origin.
#[derive(Debug)]
pub enum Scene {}

/// Unit-of-measure type for positions on the character-cell display surface.
///
/// The origin is the top left corner; *y* increases downward.
#[derive(Debug)]
pub enum ScreenPixel {}

/// Coordinates in the scene. Not locked to any grid.
pub type FreeCoordinate = f64;

/// Positions in the scene.
pub type FreePoint = Point3D<FreeCoordinate, Scene>;

/// Vectors in the scene.
pub type FreeVector = Vector3D<FreeCoordinate, Scene>;

/// Positions on the display surface, in (fractional) character cells.
pub type ScreenPoint = Point2D<f64, ScreenPixel>;

/// Offsets on the display surface, such as accumulated mouse drags.
pub type ScreenVector = Vector2D<f64, ScreenPixel>;

/// Sizes of the display surface in character cells.
pub type ScreenSize = Size2D<u16, ScreenPixel>;
