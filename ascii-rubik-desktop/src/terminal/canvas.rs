//! [`TextCanvas`], a grid of character cells which the cube is drawn into.

use std::convert::Infallible;
use std::io::{self, Write};

use embedded_graphics::Drawable as _;
use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions as _, OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::PixelColor;
use embedded_graphics::primitives::{
    Line, PointsIter as _, Primitive as _, PrimitiveStyle, Rectangle, Triangle,
};

use ratatui::buffer::Buffer;
use ratatui::crossterm::QueueableCommand as _;
use ratatui::crossterm::style::{
    Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use ascii_rubik::StickerColor;
use ascii_rubik::math::{ScreenPoint, ScreenSize};
use ascii_rubik::render::Canvas;

use crate::terminal::ColorMode;

/// Contents of one character cell.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Cell {
    #[default]
    Blank,
    /// Part of a filled polygon.
    Fill(StickerColor),
    /// Part of a wireframe line.
    Line(char),
    Text(char, Option<StickerColor>),
}

impl Cell {
    /// Character and foreground/background colors to display.
    ///
    /// Filled cells are shown as solid color when colors are available, and otherwise as
    /// the first letter of the color's name.
    fn appearance(self, colors: ColorMode) -> (char, Option<Color>, Option<Color>) {
        match self {
            Cell::Blank => (' ', colors.convert(None), colors.convert(None)),
            Cell::Fill(color) => match colors {
                ColorMode::None => (fill_letter(color), None, None),
                _ => (' ', colors.convert(None), colors.convert(Some(color))),
            },
            Cell::Line(ch) => (ch, colors.convert(None), colors.convert(None)),
            Cell::Text(ch, color) => (ch, colors.convert(color), colors.convert(None)),
        }
    }
}

// Cells are never converted to or from raw pixel data.
impl PixelColor for Cell {
    type Raw = ();
}

fn fill_letter(color: StickerColor) -> char {
    match color {
        StickerColor::Red => 'r',
        StickerColor::Magenta => 'm',
        StickerColor::Yellow => 'y',
        StickerColor::White => 'w',
        StickerColor::Green => 'g',
        StickerColor::Blue => 'b',
    }
}

/// A [`Canvas`] made of terminal character cells.
///
/// Drawing operations affect a back buffer; [`Canvas::refresh()`] makes it the frame
/// which is displayed, by [`TextCanvas::write_to()`] or as a [`Widget`].
#[derive(Clone, Debug)]
pub struct TextCanvas {
    size: ScreenSize,
    back: Vec<Cell>,
    front: Vec<Cell>,
    pen: ScreenPoint,
}

impl TextCanvas {
    /// Creates a blank canvas.
    pub fn new(size: ScreenSize) -> Self {
        let cells = vec![Cell::Blank; usize::from(size.width) * usize::from(size.height)];
        Self {
            size,
            back: cells.clone(),
            front: cells,
            pen: ScreenPoint::origin(),
        }
    }

    /// Changes the size, erasing everything.
    pub fn resize(&mut self, size: ScreenSize) {
        *self = Self::new(size);
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let (width, height) = (i64::from(self.size.width), i64::from(self.size.height));
        ((0..width).contains(&x) && (0..height).contains(&y)).then(|| (y * width + x) as usize)
    }

    fn set(&mut self, x: i64, y: i64, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.back[i] = cell;
        }
    }

    /// Points farther than this from the canvas are moved to this distance, so that
    /// nearly degenerate projections cannot make drawing take unbounded time.
    fn coordinate_limit(&self) -> f64 {
        4.0 * (f64::from(self.size.width) + f64::from(self.size.height)).max(1.0)
    }

    fn back_buffer(&mut self) -> BackBuffer<'_> {
        BackBuffer {
            cells: &mut self.back,
            size: Size::new(u32::from(self.size.width), u32::from(self.size.height)),
        }
    }

    fn displayed_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.front.chunks(usize::from(self.size.width).max(1))
    }

    /// Writes the displayed frame as lines of text, with color control sequences
    /// according to `colors`.
    ///
    /// Trailing blank cells are omitted when they would not be visible.
    pub fn write_to(&self, out: &mut dyn Write, colors: ColorMode) -> io::Result<()> {
        for row in self.displayed_rows() {
            let visible_len = match colors {
                ColorMode::None => row
                    .iter()
                    .rposition(|cell| cell.appearance(colors).0 != ' ')
                    .map_or(0, |i| i + 1),
                _ => row
                    .iter()
                    .rposition(|&cell| cell != Cell::Blank)
                    .map_or(0, |i| i + 1),
            };
            let mut current_colors = None;
            for &cell in &row[..visible_len] {
                let (ch, fg, bg) = cell.appearance(colors);
                if current_colors != Some((fg, bg)) {
                    if let Some(fg) = fg {
                        out.queue(SetForegroundColor(fg))?;
                    }
                    if let Some(bg) = bg {
                        out.queue(SetBackgroundColor(bg))?;
                    }
                    current_colors = Some((fg, bg));
                }
                write!(out, "{ch}")?;
            }
            if colors != ColorMode::None {
                // don't colorize the rest of the line
                out.queue(SetAttribute(Attribute::Reset))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Returns a [`Widget`] which draws the displayed frame with the given colors.
    pub fn widget(&self, colors: ColorMode) -> CanvasWidget<'_> {
        CanvasWidget {
            canvas: self,
            colors,
        }
    }
}

impl Canvas for TextCanvas {
    fn size(&self) -> ScreenSize {
        self.size
    }

    fn clear_frame(&mut self) {
        self.back.fill(Cell::Blank);
    }

    fn move_to(&mut self, point: ScreenPoint) {
        self.pen = point;
    }

    fn draw_line_to(&mut self, point: ScreenPoint) {
        let start = self.pen;
        self.pen = point;
        if !(is_finite(start) && is_finite(point)) {
            return;
        }
        let delta = point - start;
        let style = PrimitiveStyle::with_stroke(Cell::Line(line_char(delta.x, delta.y)), 1);
        let limit = self.coordinate_limit();
        let Ok(()) = Line::new(cell_point(start, limit), cell_point(point, limit))
            .into_styled(style)
            .draw(&mut self.back_buffer());
    }

    /// Fills a convex polygon, as a fan of triangles from its first vertex.
    ///
    /// Every cell which contains part of an edge is filled.
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: StickerColor) {
        if points.len() < 3 || !points.iter().copied().all(is_finite) {
            return;
        }
        let limit = self.coordinate_limit();
        let points: Vec<Point> = points.iter().map(|&p| cell_point(p, limit)).collect();
        let style = PrimitiveStyle::with_fill(Cell::Fill(color));
        let mut target = self.back_buffer();
        for pair in points[1..].windows(2) {
            let Ok(()) = Triangle::new(points[0], pair[0], pair[1])
                .into_styled(style)
                .draw(&mut target);
        }
    }

    fn print_text(&mut self, text: &str, x: u16, y: u16, color: Option<StickerColor>) {
        for (column, ch) in (i64::from(x)..).zip(text.chars()) {
            self.set(column, i64::from(y), Cell::Text(ch, color));
        }
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.front.clone_from(&self.back);
        Ok(())
    }
}

/// Picks a character which looks like a line going in the direction `(dx, dy)`, with
/// `y` increasing downward.
fn line_char(dx: f64, dy: f64) -> char {
    // Character cells are about twice as tall as they are wide.
    let (dx, dy) = (dx, dy * 2.0);
    if dy.abs() < dx.abs() * 0.4142 {
        '-'
    } else if dx.abs() < dy.abs() * 0.4142 {
        '|'
    } else if (dx > 0.0) == (dy > 0.0) {
        '\\'
    } else {
        '/'
    }
}

fn is_finite(point: ScreenPoint) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

/// The cell containing `point`.
fn cell_point(point: ScreenPoint, limit: f64) -> Point {
    Point::new(
        point.x.floor().clamp(-limit, limit) as i32,
        point.y.floor().clamp(-limit, limit) as i32,
    )
}

/// Lets `embedded_graphics` draw into the cells of a [`TextCanvas`]'s back buffer.
struct BackBuffer<'a> {
    cells: &'a mut [Cell],
    size: Size,
}

impl BackBuffer<'_> {
    fn index(&self, point: Point) -> usize {
        point.y as usize * self.size.width as usize + point.x as usize
    }
}

impl DrawTarget for BackBuffer<'_> {
    type Color = Cell;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, cell) in pixels {
            if bounds.contains(point) {
                let i = self.index(point);
                self.cells[i] = cell;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, cell: Self::Color) -> Result<(), Self::Error> {
        // Scanlines may extend far beyond the canvas; only visit the cells on it.
        for point in area.intersection(&self.bounding_box()).points() {
            let i = self.index(point);
            self.cells[i] = cell;
        }
        Ok(())
    }
}

impl OriginDimensions for BackBuffer<'_> {
    fn size(&self) -> Size {
        self.size
    }
}

/// [`Widget`] which shows a [`TextCanvas`]; returned by [`TextCanvas::widget()`].
#[derive(Clone, Copy, Debug)]
pub struct CanvasWidget<'a> {
    canvas: &'a TextCanvas,
    colors: ColorMode,
}

impl Widget for CanvasWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (y, row) in (area.top()..area.bottom()).zip(self.canvas.displayed_rows()) {
            for (x, &cell) in (area.left()..area.right()).zip(row) {
                let (ch, fg, bg) = cell.appearance(self.colors);
                let mut style = Style::default();
                if let Some(fg) = fg {
                    style = style.fg(fg.into());
                }
                if let Some(bg) = bg {
                    style = style.bg(bg.into());
                }
                buf[(x, y)].set_char(ch).set_style(style);
            }
        }
    }
}
