//! Mathematical utilities and decisions.

pub use euclid::{Point2D, Point3D, Size2D, Vector2D, Vector3D, point2, point3, size2, vec2, vec3};

mod axis;
pub use axis::*;
mod coord;
pub use coord::*;
mod face;
pub use face::*;
mod rotation;
pub use rotation::*;
