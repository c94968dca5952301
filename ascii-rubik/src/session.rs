//! [`Session`], which owns the cube and camera and responds to input.

use crate::assembly::CubeAssembly;
use crate::camera::Camera;
use crate::input::{BRIEF_HELP_TEXT, Command, DragState, InputEvent, Key, MouseInput};
use crate::math::{FreeCoordinate, ScreenSize};
use crate::render::{self, Canvas, RenderInfo, RenderOptions};

/// Everything the user can see and change: the cube, the camera, and the state of mouse
/// dragging.
///
/// A session is driven by a single loop which alternates between
/// [`Session::handle_event()`] and [`Session::render()`]; every change is complete by the
/// time the call which made it returns.
#[derive(Clone, Debug)]
pub struct Session {
    cube: CubeAssembly,
    camera: Camera,
    drag: DragState,
    last_key: Option<Key>,
    last_mouse: MouseInput,
}

/// What the caller of [`Session::handle_event()`] should do next.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub enum Response {
    /// Render the next frame and keep going.
    Continue,
    /// Show the help screen, then continue.
    ShowHelp,
    /// Stop.
    Quit,
}

impl Session {
    /// Creates a session with a solved cube and the camera in its initial position.
    pub fn new(viewport: ScreenSize, camera_distance: FreeCoordinate) -> Self {
        Self {
            cube: CubeAssembly::new(),
            camera: Camera::new(viewport, camera_distance),
            drag: DragState::new(),
            last_key: None,
            last_mouse: MouseInput::default(),
        }
    }

    /// Handles one input event.
    pub fn handle_event(&mut self, event: InputEvent) -> Response {
        match event {
            InputEvent::Key(key) => {
                self.last_key = Some(key);
                match Command::from_key(key) {
                    Some(command) => self.execute(command),
                    None => {
                        log::trace!("unbound key {key}");
                        Response::Continue
                    }
                }
            }
            InputEvent::Mouse(mouse) => {
                self.mouse(mouse);
                Response::Continue
            }
            InputEvent::Resize(size) => {
                log::debug!("viewport resized to {}x{}", size.width, size.height);
                self.camera.set_viewport(size);
                Response::Continue
            }
            InputEvent::Tick => Response::Continue,
        }
    }

    /// Performs a command, as if its key had been pressed.
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Twist { layer, clockwise } => {
                log::info!(
                    "twisting {layer} {}",
                    if clockwise { "clockwise" } else { "counterclockwise" }
                );
                self.cube.twist(layer, clockwise);
                if self.cube.is_solved() {
                    log::info!("cube is solved");
                }
                Response::Continue
            }
            Command::ResetView => {
                log::info!("resetting view");
                self.camera.reset();
                self.drag.clear();
                Response::Continue
            }
            Command::Help => {
                log::info!("showing help");
                Response::ShowHelp
            }
            Command::Quit => Response::Quit,
        }
    }

    fn mouse(&mut self, mouse: MouseInput) {
        self.last_mouse = mouse;
        if mouse.buttons != 0 {
            let enabled = self.drag.press(mouse.position());
            log::info!("setting mouse drag to {enabled}, mouse event is {mouse:?}");
        } else if let Some(total) = self.drag.motion(mouse.position()) {
            self.camera.update_from_drag(total, self.camera.viewport());
        } else {
            log::debug!("not registering mouse movement because drag mode is disabled");
        }
    }

    /// Draws a complete frame, except for calling [`Canvas::refresh()`].
    ///
    /// `frames_per_second` is only displayed.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        options: &RenderOptions,
        frames_per_second: f64,
    ) -> RenderInfo {
        canvas.clear_frame();
        let info = render::draw_cube(canvas, &self.camera, &self.cube, options);
        if options.face_net {
            render::draw_face_net(canvas, &self.cube);
        }
        if options.status_line {
            render::draw_text_block(canvas, &self.status_text(frames_per_second), 0, 0);
            render::draw_text_block(canvas, BRIEF_HELP_TEXT, 0, 3);
        }
        info
    }

    /// Two lines describing the display and the most recent input.
    pub fn status_text(&self, frames_per_second: f64) -> String {
        let size = self.camera.viewport();
        let key = match self.last_key {
            Some(key) => key.to_string(),
            None => String::from("-"),
        };
        let MouseInput { x, y, buttons } = self.last_mouse;
        format!(
            "size {w}x{h}  fps {frames_per_second:5.1}{solved}\n\
            key {key:5}  mouse {x:4},{y:4}  buttons {buttons}  drag {drag}",
            w = size.width,
            h = size.height,
            solved = if self.cube.is_solved() { "  solved" } else { "" },
            drag = if self.drag.is_enabled() { "on" } else { "off" },
        )
    }

    /// The cube.
    pub fn cube(&self) -> &CubeAssembly {
        &self.cube
    }

    /// The camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The mouse drag state.
    pub fn drag(&self) -> &DragState {
        &self.drag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::Layer;
    use crate::camera::DISTANCE_TO_CAMERA;
    use crate::math::{size2, vec2};
    use crate::render::tests::{DrawCall, RecordingCanvas};
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session::new(size2(80, 24), DISTANCE_TO_CAMERA)
    }

    fn key(c: char) -> InputEvent {
        InputEvent::Key(Key::Character(c))
    }

    fn mouse(x: u16, y: u16, buttons: u8) -> InputEvent {
        InputEvent::Mouse(MouseInput { x, y, buttons })
    }

    #[test]
    fn twist_keys() {
        let mut session = session();
        assert_eq!(session.handle_event(key('F')), Response::Continue);
        let mut expected = CubeAssembly::new();
        expected.twist(Layer::FRONT, true);
        assert_eq!(session.cube(), &expected);

        assert_eq!(session.handle_event(key('f')), Response::Continue);
        assert!(session.cube().is_solved());
    }

    #[test]
    fn quit_help_and_unbound() {
        let mut session = session();
        assert_eq!(session.handle_event(key('x')), Response::Continue);
        assert_eq!(session.cube(), &CubeAssembly::new());
        assert_eq!(session.handle_event(key('h')), Response::ShowHelp);
        assert_eq!(session.handle_event(key('q')), Response::Quit);
        assert_eq!(session.handle_event(InputEvent::Key(Key::Escape)), Response::Quit);
        assert_eq!(session.handle_event(InputEvent::Tick), Response::Continue);
    }

    #[test]
    fn drag_moves_camera() {
        let mut session = session();
        let _ = session.handle_event(mouse(0, 0, 0));
        let _ = session.handle_event(mouse(8, 0, 0));
        let mut expected = Camera::new(size2(80, 24), DISTANCE_TO_CAMERA);
        expected.update_from_drag(vec2(8., 0.), size2(80, 24));
        assert_eq!(session.camera(), &expected);
    }

    #[test]
    fn click_disables_drag() {
        let mut session = session();
        let _ = session.handle_event(mouse(5, 5, 1));
        assert!(!session.drag().is_enabled());
        let before = session.camera().clone();
        let _ = session.handle_event(mouse(30, 10, 0));
        assert_eq!(session.camera(), &before);

        // Re-enabling measures from the click, not from the ignored movement.
        let _ = session.handle_event(mouse(40, 12, 1));
        let _ = session.handle_event(mouse(42, 12, 0));
        assert_eq!(session.drag().accumulated(), vec2(2., 0.));
    }

    #[test]
    fn reset_view_clears_drag() {
        let mut session = session();
        let _ = session.handle_event(mouse(0, 0, 0));
        let _ = session.handle_event(mouse(17, 3, 0));
        assert_eq!(session.handle_event(key('z')), Response::Continue);
        assert_eq!(session.camera(), &Camera::new(size2(80, 24), DISTANCE_TO_CAMERA));
        assert_eq!(session.drag().accumulated(), vec2(0., 0.));
    }

    #[test]
    fn resize_changes_viewport_only() {
        let mut session = session();
        let frame = (session.camera().right(), session.camera().up());
        assert_eq!(
            session.handle_event(InputEvent::Resize(size2(100, 40))),
            Response::Continue
        );
        assert_eq!(session.camera().viewport(), size2(100, 40));
        assert_eq!((session.camera().right(), session.camera().up()), frame);
    }

    #[test]
    fn status_text() {
        let mut session = session();
        assert_eq!(
            session.status_text(9.96),
            "size 80x24  fps  10.0  solved\n\
            key -      mouse    0,   0  buttons 0  drag on"
        );
        let _ = session.handle_event(mouse(12, 7, 1));
        let _ = session.handle_event(key('T'));
        assert_eq!(
            session.status_text(0.0),
            "size 80x24  fps   0.0\n\
            key 'T'    mouse   12,   7  buttons 1  drag off"
        );
    }

    #[test]
    fn render_frame_contents() {
        let session = session();
        let mut canvas = RecordingCanvas::new(size2(80, 24));
        let info = session.render(&mut canvas, &RenderOptions::default(), 10.0);
        assert_eq!(info.polygons_drawn, 81);
        assert_eq!(canvas.calls[0], DrawCall::Clear);
        assert!(!canvas.calls.contains(&DrawCall::Refresh));
        let texts: Vec<_> = canvas.texts().map(|(text, ..)| text).collect();
        assert!(texts.contains(&"size 80x24  fps  10.0  solved"));
        assert!(texts.contains(&" Rotate Front: f/F;"));
        assert_eq!(texts.iter().filter(|t| **t == "F").count(), 9);
    }

    #[test]
    fn render_without_overlays() {
        let session = session();
        let mut canvas = RecordingCanvas::new(size2(80, 24));
        session.render(
            &mut canvas,
            &RenderOptions {
                wireframe: false,
                face_net: false,
                status_line: false,
            },
            10.0,
        );
        assert_eq!(canvas.texts().count(), 0);
    }
}
