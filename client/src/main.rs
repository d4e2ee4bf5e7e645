mod canvas;
mod keys;
mod run;

use std::process;

use macroquad::window::Conf;
use tracing_subscriber::EnvFilter;

use common::{Config, Editor};

fn window_conf() -> Conf {
    // Invalid settings are reported properly once the window is up.
    let config = Config::from_env().unwrap_or_default();

    Conf {
        window_title: "Maze Solver".to_owned(),
        window_width: config.surface_width as i32,
        window_height: (config.surface_height + canvas::STATUS_BAR_HEIGHT) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
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

    run::run(editor).await;
}
