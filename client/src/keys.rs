use macroquad::input::KeyCode;

use common::{Action, EditMode};

pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Key1 | KeyCode::S => Action::SetMode(EditMode::Starting),
        KeyCode::Key2 | KeyCode::D => Action::SetMode(EditMode::Destination),
        KeyCode::Key3 | KeyCode::O => Action::SetMode(EditMode::Obstacles),
        KeyCode::Tab => Action::CycleMode,
        KeyCode::Enter | KeyCode::KpEnter | KeyCode::Space => Action::Solve,
        KeyCode::G => Action::Generate,
        KeyCode::R => Action::Scatter,
        KeyCode::C => Action::Clear,
        KeyCode::Escape | KeyCode::Q => Action::Quit,
        _ => return None,
    };

    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_and_letter_keys_pick_the_same_mode() {
        assert_eq!(action_for(KeyCode::Key1), action_for(KeyCode::S));
        assert_eq!(action_for(KeyCode::Key2), action_for(KeyCode::D));
        assert_eq!(
            action_for(KeyCode::Key3),
            Some(Action::SetMode(EditMode::Obstacles))
        );
    }

    #[test]
    fn enter_and_space_solve() {
        assert_eq!(action_for(KeyCode::Enter), Some(Action::Solve));
        assert_eq!(action_for(KeyCode::Space), Some(Action::Solve));
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(action_for(KeyCode::X), None);
        assert_eq!(action_for(KeyCode::F1), None);
    }
}
