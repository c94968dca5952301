//! Playing the cube in a terminal, and printing it as text.

use std::io::{self, Write as _};
use std::time::{Duration, Instant};

use anyhow::Context as _;
use ratatui::crossterm::event;

use ascii_rubik::input::InputEvent;
use ascii_rubik::math::ScreenSize;
use ascii_rubik::render::Canvas as _;
use ascii_rubik::session::{Response, Session};

use crate::Settings;
use crate::glue::crossterm::event_to_input;

mod canvas;
pub use canvas::{CanvasWidget, TextCanvas};
mod help;
pub use help::{HelpAction, HelpScreen};
mod options;
pub use options::ColorMode;
mod ui;
use ui::TerminalWindow;

/// Takes over the terminal and runs an interactive session until the user quits.
pub fn terminal_main_loop(settings: &Settings) -> Result<(), anyhow::Error> {
    let mut window = TerminalWindow::new()?;
    window.begin_fullscreen()?;
    let size = window.size()?;
    log::info!("starting terminal session at {}x{}", size.width, size.height);

    let mut session = Session::new(size, settings.camera_distance);
    let mut canvas = TextCanvas::new(size);
    let mut help: Option<HelpScreen> = None;
    let render_options = settings.render_options();
    let frame_interval = Duration::from_millis(settings.frame_interval_ms.max(1));
    let mut last_frame_time: Option<Instant> = None;

    loop {
        let now = Instant::now();
        let frames_per_second = match last_frame_time {
            Some(last) => 1.0 / now.duration_since(last).as_secs_f64().max(1e-6),
            None => 0.0,
        };
        last_frame_time = Some(now);

        let info = session.render(&mut canvas, &render_options, frames_per_second);
        log::trace!("{info:?}");
        canvas.refresh()?;
        window
            .draw(&canvas, settings.colors, help.as_ref())
            .context("failed to draw frame")?;

        // Wait for input, or until it is time for the next frame anyway.
        let input = if event::poll(frame_interval).context("failed to read input")? {
            match event_to_input(&event::read().context("failed to read input")?) {
                Some(input) => input,
                None => continue,
            }
        } else {
            InputEvent::Tick
        };

        if let InputEvent::Resize(new_size) = input {
            canvas.resize(new_size);
        }
        if let Some(help_screen) = &mut help {
            match input {
                InputEvent::Key(key) => match help_screen.handle_key(key) {
                    HelpAction::Stay => {}
                    HelpAction::Close => {
                        log::info!("closing help");
                        help = None;
                    }
                    HelpAction::Quit => break,
                },
                InputEvent::Resize(_) => match session.handle_event(input) {
                    Response::Continue => {}
                    response => unreachable!("resizing produced {response:?}"),
                },
                InputEvent::Mouse(_) | InputEvent::Tick => {}
            }
            continue;
        }
        match session.handle_event(input) {
            Response::Continue => {}
            Response::ShowHelp => help = Some(HelpScreen::new()),
            Response::Quit => break,
        }
    }

    log::info!("quitting");
    window.stop()
}

/// Draws the initial view of the cube at the given size and prints it to stdout.
pub fn terminal_print_once(settings: &Settings, size: ScreenSize) -> Result<(), anyhow::Error> {
    let session = Session::new(size, settings.camera_distance);
    let mut canvas = TextCanvas::new(size);
    let info = session.render(&mut canvas, &settings.render_options(), 0.0);
    log::debug!("{info:?}");
    canvas.refresh()?;

    let mut out = io::stdout().lock();
    canvas.write_to(&mut out, settings.colors)?;
    out.flush()?;
    Ok(())
}
