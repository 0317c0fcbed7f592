use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use frethero::{render, ChordLibrary, PlaybackCursor, ViewMode};

/// How often the loop wakes up to poll the change timer.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What a key press asks the loop to do.
enum Action {
    Quit,
    Redraw,
    Ignore,
}

/// Interactive trainer session: one library, one cursor, one terminal.
///
/// The loop blocks on key events with a short timeout and polls the
/// cursor's change timer whenever the timeout elapses, so a timed chord
/// change shows up at most one poll interval late.
pub struct TrainerApp {
    library: ChordLibrary,
    cursor: PlaybackCursor,
    mode: ViewMode,
    selection_label: String,
}

impl TrainerApp {
    pub const fn new(
        library: ChordLibrary,
        cursor: PlaybackCursor,
        mode: ViewMode,
        selection_label: String,
    ) -> Self {
        Self {
            library,
            cursor,
            mode,
            selection_label,
        }
    }

    /// Run the interactive loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let result = self.event_loop();
        terminal::disable_raw_mode()?;
        result
    }

    fn event_loop(&mut self) -> io::Result<()> {
        self.draw()?;
        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match self.handle_key(&key) {
                            Action::Quit => return Ok(()),
                            Action::Redraw => self.draw()?,
                            Action::Ignore => {}
                        }
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            } else if self.cursor.tick() {
                self.draw()?;
            }
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('n') | KeyCode::Right | KeyCode::Char(' ') => {
                self.cursor.next_chord();
                Action::Redraw
            }
            KeyCode::Char('p') | KeyCode::Left => {
                self.cursor.prev_chord();
                Action::Redraw
            }
            KeyCode::Char('r') => {
                self.cursor.random_chord();
                Action::Redraw
            }
            KeyCode::Char('t') => {
                self.cursor.toggle_timer();
                Action::Redraw
            }
            KeyCode::Char('f') => {
                self.mode = match self.mode {
                    ViewMode::Zoom => ViewMode::Full,
                    ViewMode::Full => ViewMode::Zoom,
                };
                Action::Redraw
            }
            _ => Action::Ignore,
        }
    }

    fn draw(&self) -> io::Result<()> {
        let Some(shape) = self.library.default_shape(self.cursor.current()) else {
            // selector output always comes from the library, so this is
            // unreachable in practice; skip the frame rather than panic
            log::warn!("no shape for chord {}", self.cursor.current());
            return Ok(());
        };
        let diagram = render(shape, &self.library.tuning, self.mode);

        let mut out = io::stdout();
        execute!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        // raw mode needs explicit carriage returns
        for line in diagram.lines() {
            write!(out, "{line}\r\n")?;
        }
        write!(out, "\r\n{}\r\n", self.status_line())?;
        write!(out, "n next | p prev | r random | t timer | f view | q quit\r\n")?;
        out.flush()
    }

    fn status_line(&self) -> String {
        let timer = if self.cursor.timer_enabled() {
            format!("on, {:.1}s", self.cursor.tempo().as_secs_f32())
        } else {
            "off".to_string()
        };
        format!(
            "set: {} | view: {} | chord: {} ({}/{}) | timer: {}",
            self.selection_label,
            self.mode,
            self.cursor.current(),
            self.cursor.index() + 1,
            self.cursor.len(),
            timer,
        )
    }
}
