//! Drawing the cube: depth ordering, projection, and draw calls to a [`Canvas`].

use std::io;

use crate::StickerColor;
use crate::assembly::CubeAssembly;
use crate::camera::{Camera, ProjectionDegenerate};
use crate::cubelet::Cubelet;
use crate::math::{Face, FreePoint, ScreenPoint, ScreenSize};

/// A two-dimensional drawing surface, such as a grid of terminal character cells.
///
/// Coordinates are in cells, with `(0, 0)` at the top left; points may be fractional or
/// lie outside the surface, and implementations must clip rather than fail.
pub trait Canvas {
    /// Size of the surface in cells.
    fn size(&self) -> ScreenSize;

    /// Erases everything drawn since the last call.
    fn clear_frame(&mut self);

    /// Sets the starting point for the next [`Canvas::draw_line_to()`].
    fn move_to(&mut self, point: ScreenPoint);

    /// Draws a line from the current point to `point`, which becomes the new current
    /// point.
    fn draw_line_to(&mut self, point: ScreenPoint);

    /// Fills the polygon with the given vertices, in order, with a solid color.
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: StickerColor);

    /// Writes a single line of text with its first character at `(x, y)`.
    fn print_text(&mut self, text: &str, x: u16, y: u16, color: Option<StickerColor>);

    /// Delivers the finished frame to wherever it is displayed.
    fn refresh(&mut self) -> io::Result<()>;
}

/// Choices about what to draw, other than the camera and the cube itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderOptions {
    /// Outline every cubelet after filling its faces.
    pub wireframe: bool,
    /// Show the sticker net in the bottom right corner.
    pub face_net: bool,
    /// Show the status line and brief key summary in the top left corner.
    pub status_line: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            wireframe: false,
            face_net: true,
            status_line: true,
        }
    }
}

/// Counts of what [`draw_cube()`] did.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct RenderInfo {
    /// Number of filled faces.
    pub polygons_drawn: usize,
    /// Number of faces which were visible but could not be projected.
    pub polygons_skipped: usize,
    /// Number of wireframe edges drawn.
    pub segments_drawn: usize,
    /// Number of wireframe edges which could not be projected.
    pub segments_skipped: usize,
}

/// Returns the cubelets ordered farthest from the camera first, so that drawing them in
/// this order lets nearer ones paint over farther ones.
pub fn depth_order<'a>(camera: &Camera, cube: &'a CubeAssembly) -> Vec<&'a Cubelet> {
    let mut order: Vec<&Cubelet> = cube.cubelets().collect();
    order.sort_by(|a, b| {
        camera
            .distance_to(b.position())
            .total_cmp(&camera.distance_to(a.position()))
    });
    order
}

/// Draws the cube as seen by the camera.
///
/// Faces and edges which cannot be projected are skipped; this only affects the current
/// frame.
pub fn draw_cube<C: Canvas + ?Sized>(
    canvas: &mut C,
    camera: &Camera,
    cube: &CubeAssembly,
    options: &RenderOptions,
) -> RenderInfo {
    let mut info = RenderInfo::default();
    let view_direction = camera.view_direction();

    for cubelet in depth_order(camera, cube) {
        for face in cubelet.visible_faces(view_direction) {
            match project_polygon(camera, cubelet.face_polygon(face)) {
                Ok(points) => {
                    canvas.fill_polygon(&points, cubelet.face_colors()[face]);
                    info.polygons_drawn += 1;
                }
                Err(ProjectionDegenerate) => info.polygons_skipped += 1,
            }
        }

        if options.wireframe {
            for [a, b] in cubelet.edges() {
                if let (Ok(a), Ok(b)) = (camera.project(a), camera.project(b)) {
                    canvas.move_to(a);
                    canvas.draw_line_to(b);
                    info.segments_drawn += 1;
                } else {
                    info.segments_skipped += 1;
                }
            }
        }
    }

    if info.polygons_skipped > 0 || info.segments_skipped > 0 {
        log::trace!("skipped unprojectable primitives: {info:?}");
    }
    info
}

fn project_polygon(
    camera: &Camera,
    corners: [FreePoint; 4],
) -> Result<[ScreenPoint; 4], ProjectionDegenerate> {
    let [a, b, c, d] = corners.map(|corner| camera.project(corner));
    Ok([a?, b?, c?, d?])
}

/// Offsets from the bottom right corner of the canvas at which each side's 3×3 block of
/// the net starts.
const NET_LAYOUT: [(Face, u16, u16); 6] = [
    (Face::Top, 6, 12),
    (Face::Left, 9, 9),
    (Face::Front, 6, 9),
    (Face::Right, 3, 9),
    (Face::Bottom, 6, 6),
    (Face::Back, 6, 3),
];

/// Draws the sticker net (see [`CubeAssembly::facelets()`]) in the bottom right corner of
/// the canvas, one letter per sticker in that sticker's color.
///
/// Returns false and draws nothing if the canvas is too small to hold it.
pub fn draw_face_net<C: Canvas + ?Sized>(canvas: &mut C, cube: &CubeAssembly) -> bool {
    let size = canvas.size();
    if size.width < 9 || size.height < 12 {
        return false;
    }
    let mut letter_buf = [0; 4];
    for (face, from_right, from_bottom) in NET_LAYOUT {
        let letter: &str = face.letter().encode_utf8(&mut letter_buf);
        for (row, colors) in cube.facelets(face).into_iter().enumerate() {
            for (col, color) in colors.into_iter().enumerate() {
                canvas.print_text(
                    letter,
                    size.width - from_right + col as u16,
                    size.height - from_bottom + row as u16,
                    Some(color),
                );
            }
        }
    }
    true
}

/// Prints each line of `text` on successive rows starting at `(x, y)`, stopping at the
/// bottom of the canvas.
pub fn draw_text_block<C: Canvas + ?Sized>(canvas: &mut C, text: &str, x: u16, y: u16) {
    let height = canvas.size().height;
    for (line, row) in text.lines().zip(y..height) {
        canvas.print_text(line, x, row, None);
    }
}
