mod ui;

#[cfg(test)]
mod test_helpers;

use std::io::{self, Stdout};
use std::process;
use std::time::{Duration, Instant};

use tracing::info;
use tracing_subscriber::EnvFilter;

use common::{CellBuffer, Config, Editor, Flow};

use crate::ui::TerminalUi;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn main() {
    // Logs go to stderr so they can be redirected away from the maze.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    let editor = match Editor::new(&config) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Cannot build a grid: {}", e);
            process::exit(1);
        }
    };

    let mut ui = match TerminalUi::new(*editor.session().grid()) {
        Ok(ui) => ui,
        Err(e) => {
            eprintln!("Failed to initialize terminal UI: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&mut ui, editor) {
        // Restore the terminal before reporting.
        drop(ui);
        eprintln!("Terminal error: {}", e);
        process::exit(1);
    }
}

fn run(ui: &mut TerminalUi<Stdout>, mut editor: Editor) -> io::Result<()> {
    let mut cells = CellBuffer::new(*editor.session().grid());
    editor.session().repaint(&mut cells);
    let mut last_updated = Instant::now();

    loop {
        if let Some(action) = ui.poll_action(POLL_INTERVAL)? {
            if editor.apply(action, &mut cells) == Flow::Quit {
                info!("quit");
                return Ok(());
            }
        }

        let now = Instant::now();
        editor.update(now - last_updated, &mut cells);
        last_updated = now;

        ui.draw(&cells, &editor)?;
    }
}
