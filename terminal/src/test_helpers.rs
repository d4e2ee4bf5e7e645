use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use common::Grid;

use crate::ui::TerminalUi;

// A `TerminalUi` over a `Vec<u8>` that never touches raw mode.
pub fn setup_test_ui(rows: usize, cols: usize) -> TerminalUi<Vec<u8>> {
    TerminalUi {
        out: Vec::new(),
        grid: Grid::new(rows, cols).expect("test grid should be non-empty"),
        is_raw_mode_owner: false,
    }
}

pub fn output(ui: &TerminalUi<Vec<u8>>) -> String {
    String::from_utf8_lossy(&ui.out).into_owned()
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}
