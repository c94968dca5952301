//! Projection and view matrices, viewport and aspect ratio, etc.

use core::f64::consts::{FRAC_PI_6, PI};

use crate::math::{
    Axis, FreeCoordinate, FreePoint, FreeVector, RotationMatrix, ScreenPoint, ScreenSize,
    ScreenVector, point2, point3, rotation, vec3,
};

/// Distance from the camera to the center of the cube, unless configured otherwise.
pub const DISTANCE_TO_CAMERA: FreeCoordinate = 6.0;

/// Denominators of smaller magnitude than this make [`Camera::project()`] fail.
const DEGENERATE_EPSILON: FreeCoordinate = 1e-6;

/// A pinhole camera which always looks at the origin from a fixed distance, and converts
/// scene points to screen points.
///
/// The camera frame (`right`, `up`, `forward`) is always orthonormal, with
/// `forward == -(right × up)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    position: FreePoint,
    right: FreeVector,
    up: FreeVector,
    forward: FreeVector,
    distance: FreeCoordinate,
    viewport: ScreenSize,
}

impl Camera {
    /// Creates a camera in the canonical orbit pose (see [`Camera::reset()`]) at the
    /// given distance from the origin.
    pub fn new(viewport: ScreenSize, distance: FreeCoordinate) -> Self {
        let mut camera = Self {
            position: point3(0., 0., distance),
            right: vec3(1., 0., 0.),
            up: vec3(0., 1., 0.),
            forward: vec3(0., 0., -1.),
            distance,
            viewport,
        };
        camera.reset();
        camera
    }

    /// Creates a camera with an explicitly specified position and frame.
    ///
    /// `right` and `up` must be orthogonal unit vectors; `forward` is derived from them.
    /// The distance used by later re-orientations is the distance of `position` from the
    /// origin.
    pub fn from_frame(
        position: FreePoint,
        right: FreeVector,
        up: FreeVector,
        viewport: ScreenSize,
    ) -> Self {
        Self {
            position,
            right,
            up,
            forward: -right.cross(up),
            distance: position.to_vector().length(),
            viewport,
        }
    }

    /// Returns the camera to the canonical orbit: the base frame turned 30° about the
    /// X axis and then 30° about the Y axis, so that the cube is seen from above one of
    /// its corners.
    pub fn reset(&mut self) {
        self.set_orientation(rotation(Axis::Y, FRAC_PI_6) * rotation(Axis::X, FRAC_PI_6));
    }

    /// Re-derives the camera frame from the total mouse drag since the base frame.
    ///
    /// A drag across the whole width of `extent` turns the camera by half a revolution
    /// about the Y axis, and similarly for the height and the X axis. This is not
    /// incremental: callers must pass the running total of all drags.
    pub fn update_from_drag(&mut self, accumulated_drag: ScreenVector, extent: ScreenSize) {
        let alpha = accumulated_drag.x / FreeCoordinate::from(extent.width.max(1)) * PI;
        let beta = accumulated_drag.y / FreeCoordinate::from(extent.height.max(1)) * PI;
        self.set_orientation(rotation(Axis::Y, alpha) * rotation(Axis::X, beta));
    }

    fn set_orientation(&mut self, r: RotationMatrix) {
        self.right = r.x;
        self.up = r.y;
        self.forward = -r.z;
        self.position = (-self.forward * self.distance).to_point();
    }

    /// Projects a point in the scene onto the screen.
    ///
    /// The point is moved along the line through it and the camera position until it
    /// lies on the image plane one unit in front of the camera, and its coordinates in
    /// that plane are scaled so that `[-1, 1]` covers the viewport.
    ///
    /// Fails if the point lies in (or extremely close to) the plane through the camera
    /// perpendicular to the view direction, where there is no such intersection.
    pub fn project(&self, point: FreePoint) -> Result<ScreenPoint, ProjectionDegenerate> {
        let offset = point - self.position;
        let denominator = self.forward.dot(offset);
        if denominator.abs() < DEGENERATE_EPSILON {
            return Err(ProjectionDegenerate);
        }
        let on_plane = self.position + offset / denominator;
        let x = on_plane.to_vector().dot(self.right);
        let y = on_plane.to_vector().dot(self.up);

        let center_x = FreeCoordinate::from(self.viewport.width) / 2.0;
        let center_y = FreeCoordinate::from(self.viewport.height) / 2.0;
        Ok(point2(center_x * (1.0 + x), center_y * (1.0 - y)))
    }

    /// Changes the size of the screen that [`Camera::project()`] maps onto.
    pub fn set_viewport(&mut self, viewport: ScreenSize) {
        self.viewport = viewport;
    }

    /// Returns the size of the screen that [`Camera::project()`] maps onto.
    pub fn viewport(&self) -> ScreenSize {
        self.viewport
    }

    /// Position of the eye in the scene.
    pub fn position(&self) -> FreePoint {
        self.position
    }

    /// Unit vector pointing to the right on the screen.
    pub fn right(&self) -> FreeVector {
        self.right
    }

    /// Unit vector pointing up on the screen.
    pub fn up(&self) -> FreeVector {
        self.up
    }

    /// Unit vector pointing into the screen.
    pub fn forward(&self) -> FreeVector {
        self.forward
    }

    /// Distance from the origin at which the camera orbits.
    pub fn distance(&self) -> FreeCoordinate {
        self.distance
    }

    /// The camera position as a vector from the origin.
    ///
    /// Since the camera always looks at the origin, this is used as an approximate
    /// “toward the viewer” direction when deciding which faces are visible.
    pub fn view_direction(&self) -> FreeVector {
        self.position.to_vector()
    }

    /// Euclidean distance from the eye to `point`.
    pub fn distance_to(&self, point: FreePoint) -> FreeCoordinate {
        (point - self.position).length()
    }
}

/// The point lies in the plane of the camera and cannot be projected.
///
/// This is not a fault of the caller; it arises naturally when a part of the scene passes
/// beside the eye. The primitive being drawn should be skipped for the current frame.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, displaydoc::Display)]
#[displaydoc("point lies in the plane of the camera and cannot be projected")]
pub struct ProjectionDegenerate;

impl core::error::Error for ProjectionDegenerate {}
