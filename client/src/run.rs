use std::time::Duration;

use macroquad::input::{MouseButton, get_keys_pressed, is_mouse_button_pressed, mouse_position};
use macroquad::time::get_frame_time;
use macroquad::window::next_frame;
use tracing::info;

use common::{Action, CellBuffer, ClickEvent, Editor, Flow, PaintSink};

use crate::{canvas, keys};

pub async fn run(mut editor: Editor) {
    let grid = *editor.session().grid();
    let cell_size = editor.session().cell_size();
    let mut cells = CellBuffer::new(grid);
    editor.session().repaint(&mut cells);

    info!(rows = grid.rows(), cols = grid.cols(), "window ready");

    loop {
        let mut actions: Vec<Action> = get_keys_pressed()
            .into_iter()
            .filter_map(keys::action_for)
            .collect();

        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            actions.push(Action::Click(ClickEvent::new(editor.mode(), x, y)));
        }

        if apply_all(&mut editor, actions, &mut cells) == Flow::Quit {
            info!("quit");
            break;
        }

        let dt = Duration::from_secs_f32(get_frame_time().max(0.0));
        editor.update(dt, &mut cells);

        canvas::draw(&cells, cell_size, &editor);
        next_frame().await;
    }
}

fn apply_all(editor: &mut Editor, actions: Vec<Action>, sink: &mut dyn PaintSink) -> Flow {
    for action in actions {
        if editor.apply(action, sink) == Flow::Quit {
            return Flow::Quit;
        }
    }
    Flow::Continue
}
