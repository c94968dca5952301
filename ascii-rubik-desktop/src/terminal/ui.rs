use std::io;

use anyhow::Context as _;
use crossterm::QueueableCommand as _;
use crossterm::cursor;
use crossterm::style::{Attribute, Color, Colors, SetAttribute, SetColors};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm;

use ascii_rubik::math::{ScreenSize, size2};

use crate::terminal::{ColorMode, HelpScreen, TextCanvas};

/// Owns the terminal while the interactive session runs.
///
/// Dropping it puts the terminal back the way it was, so that an error partway through
/// does not leave the user with an unusable terminal.
pub(crate) struct TerminalWindow {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,

    /// True if stdin is a terminal and we are allowed to use things that query it.
    has_terminal_stdin: bool,

    /// True if we should clean up on drop.
    reset_terminal_on_drop: bool,
}

impl TerminalWindow {
    pub(crate) fn new() -> Result<Self, anyhow::Error> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("failed to initialize terminal output")?;
        Ok(TerminalWindow {
            terminal,
            has_terminal_stdin: io::IsTerminal::is_terminal(&io::stdin()),
            reset_terminal_on_drop: false,
        })
    }

    pub(crate) fn begin_fullscreen(&mut self) -> anyhow::Result<()> {
        self.reset_terminal_on_drop = true;
        if !self.has_terminal_stdin {
            anyhow::bail!("cannot run interactively because standard input is not a terminal");
        }
        crossterm::terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let backend = self.terminal.backend_mut();
        backend.queue(crossterm::terminal::EnterAlternateScreen)?;
        backend.queue(crossterm::event::EnableMouseCapture)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Current size of the terminal.
    pub(crate) fn size(&self) -> anyhow::Result<ScreenSize> {
        let size = self.terminal.size().context("failed to get terminal size")?;
        Ok(size2(size.width, size.height))
    }

    /// Shows the canvas's displayed frame, with the help screen over it if there is one.
    pub(crate) fn draw(
        &mut self,
        canvas: &TextCanvas,
        colors: ColorMode,
        help: Option<&HelpScreen>,
    ) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(canvas.widget(colors), area);
            if let Some(help) = help {
                frame.render_widget(help, area);
            }
        })?;
        Ok(())
    }

    /// Cleans up and reports the first error, unlike dropping.
    pub(crate) fn stop(mut self) -> Result<(), anyhow::Error> {
        self.terminal.show_cursor()?;
        self.clean_up_terminal();
        Ok(())
    }

    /// Reset terminal state, as before exiting.
    fn clean_up_terminal(&mut self) {
        if self.reset_terminal_on_drop {
            fn log_if_fails<T, E: std::error::Error>(r: Result<T, E>) {
                match r {
                    Ok(_) => {}
                    Err(e) => {
                        log::error!("error detected while cleaning up terminal state: {e}");
                    }
                }
            }

            let out = self.terminal.backend_mut();
            log_if_fails(out.queue(SetAttribute(Attribute::Reset)));
            log_if_fails(out.queue(SetColors(Colors::new(Color::Reset, Color::Reset))));
            log_if_fails(out.queue(cursor::Show));
            log_if_fails(out.queue(crossterm::event::DisableMouseCapture));
            log_if_fails(out.queue(crossterm::terminal::LeaveAlternateScreen));
            log_if_fails(io::Write::flush(out));
            log_if_fails(crossterm::terminal::disable_raw_mode());
            self.reset_terminal_on_drop = false;
        }
    }
}

impl Drop for TerminalWindow {
    fn drop(&mut self) {
        self.clean_up_terminal();
    }
}

impl std::fmt::Debug for TerminalWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalWindow")
            .field("has_terminal_stdin", &self.has_terminal_stdin)
            .field("reset_terminal_on_drop", &self.reset_terminal_on_drop)
            .finish_non_exhaustive()
    }
}
