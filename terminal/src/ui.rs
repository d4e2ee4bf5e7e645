use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use common::{Action, CellBuffer, Coordinate, EditMode, Editor, Grid, PaintColor, StatusLevel};

/// Each maze cell is drawn as two character cells so it looks roughly square.
pub const CELL_WIDTH: usize = 2;

const HELP: &str =
    "1/s start  2/d destination  3/o obstacles  tab mode  enter solve  g maze  r scatter  c clear  q quit";

pub fn paint_color(color: PaintColor) -> Color {
    match color {
        PaintColor::Neutral => Color::Rgb { r: 0xf5, g: 0xf5, b: 0xf5 },
        PaintColor::Obstacle => Color::Rgb { r: 0x1e, g: 0x1e, b: 0x1e },
        PaintColor::Start => Color::Rgb { r: 0x00, g: 0xbb, b: 0x00 },
        PaintColor::Destination => Color::Rgb { r: 0xbb, g: 0x00, b: 0x00 },
        PaintColor::Visiting => Color::Rgb { r: 0x00, g: 0x00, b: 0xbb },
    }
}

pub fn key_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers == KeyModifiers::CONTROL {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('1') | KeyCode::Char('s') => Action::SetMode(EditMode::Starting),
        KeyCode::Char('2') | KeyCode::Char('d') => Action::SetMode(EditMode::Destination),
        KeyCode::Char('3') | KeyCode::Char('o') => Action::SetMode(EditMode::Obstacles),
        KeyCode::Tab => Action::CycleMode,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Solve,
        KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('r') => Action::Scatter,
        KeyCode::Char('c') => Action::Clear,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };

    Some(action)
}

pub struct TerminalUi<W: Write> {
    pub(crate) out: W,
    pub(crate) grid: Grid,
    pub(crate) is_raw_mode_owner: bool, // True except in tests.
}

impl TerminalUi<Stdout> {
    pub fn new(grid: Grid) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            Clear(ClearType::All)
        )?;

        Ok(Self {
            out,
            grid,
            is_raw_mode_owner: true,
        })
    }

    pub fn poll_action(&mut self, timeout: Duration) -> io::Result<Option<Action>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        let event = event::read()?;
        Ok(self.action_for(event))
    }
}

impl<W: Write> TerminalUi<W> {
    pub fn action_for(&self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => key_action(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.cell_at(column, row).map(Action::Select),
            _ => None,
        }
    }

    /// Maps a character cell to the maze cell under it, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coordinate> {
        let coordinate = Coordinate::new(column as usize / CELL_WIDTH, row as usize);
        self.grid.is_valid(coordinate).then_some(coordinate)
    }

    pub fn draw(&mut self, cells: &CellBuffer, editor: &Editor) -> io::Result<()> {
        for (coordinate, color) in cells.iter() {
            if coordinate.x == 0 {
                queue!(self.out, MoveTo(0, coordinate.y as u16))?;
            }
            queue!(self.out, SetBackgroundColor(paint_color(color)), Print("  "))?;
        }
        queue!(self.out, ResetColor)?;

        let status_row = self.grid.rows() as u16;
        queue!(
            self.out,
            MoveTo(0, status_row),
            Clear(ClearType::CurrentLine),
            Print(format!("mode: {}", editor.mode()))
        )?;

        if let Some(status) = editor.status() {
            let color = match status.level {
                StatusLevel::Message => Color::Reset,
                StatusLevel::Error => Color::Red,
            };
            queue!(
                self.out,
                Print("  "),
                SetForegroundColor(color),
                Print(&status.text),
                ResetColor
            )?;
        }

        queue!(
            self.out,
            MoveTo(0, status_row + 1),
            Clear(ClearType::CurrentLine),
            Print(HELP)
        )?;

        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalUi<W> {
    fn drop(&mut self) {
        if self.is_raw_mode_owner {
            // Only the instance that enabled raw mode gives it back.
            execute!(self.out, Show, DisableMouseCapture, LeaveAlternateScreen).ok();
            terminal::disable_raw_mode().ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{click, ctrl, key, output, setup_test_ui};
    use common::Config;

    fn editor() -> Editor {
        let config = Config {
            surface_width: 300.0,
            surface_height: 150.0,
            ..Config::default()
        };
        Editor::new(&config).expect("4x2 grid")
    }

    #[test]
    fn click_on_either_half_of_a_cell_selects_it() {
        let ui = setup_test_ui(2, 4);

        assert_eq!(
            ui.action_for(click(4, 1)),
            Some(Action::Select(Coordinate::new(2, 1)))
        );
        assert_eq!(
            ui.action_for(click(5, 1)),
            Some(Action::Select(Coordinate::new(2, 1)))
        );
    }

    #[test]
    fn clicks_outside_the_maze_are_ignored() {
        let ui = setup_test_ui(2, 4);

        assert_eq!(ui.action_for(click(8, 0)), None);
        assert_eq!(ui.action_for(click(0, 2)), None);
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_clears() {
        let ui = setup_test_ui(2, 4);

        assert_eq!(ui.action_for(ctrl('c')), Some(Action::Quit));
        assert_eq!(ui.action_for(key(KeyCode::Char('c'))), Some(Action::Clear));
    }

    #[test]
    fn key_releases_are_ignored() {
        let ui = setup_test_ui(2, 4);
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        assert_eq!(ui.action_for(Event::Key(release)), None);
    }

    #[test]
    fn mode_keys_match_the_window_client() {
        assert_eq!(
            key_action(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE)),
            Some(Action::SetMode(EditMode::Destination))
        );
        assert_eq!(
            key_action(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            Some(Action::CycleMode)
        );
    }

    #[test]
    fn draw_paints_cells_and_shows_the_status() {
        let mut ui = setup_test_ui(2, 4);
        let mut editor = editor();
        let mut cells = CellBuffer::new(*editor.session().grid());

        editor.apply(Action::Select(Coordinate::new(0, 0)), &mut cells);
        editor.apply(Action::Solve, &mut cells);
        ui.draw(&cells, &editor).unwrap();

        let text = output(&ui);
        assert!(text.contains("mode: starting"));
        assert!(text.contains("select a start and end destination"));
        // Start cell in green.
        assert!(text.contains("\u{1b}[48;2;0;187;0m"));
    }
}
