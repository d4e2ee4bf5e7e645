use std::time::Duration;

use crate::config::Config;
use crate::grid::{Coordinate, Grid};
use crate::maze::{MazeState, Role};
use crate::paint::{NoPaint, SearchObserver, Step};

pub fn at(x: usize, y: usize) -> Coordinate {
    Coordinate::new(x, y)
}

/// A 225 x 225 surface at the default cell size: a 3x3 grid.
pub fn small_config() -> Config {
    Config {
        surface_width: 225.0,
        surface_height: 225.0,
        step_delay: Duration::from_millis(10),
        ..Config::default()
    }
}

pub fn maze_with(
    rows: usize,
    cols: usize,
    start: Coordinate,
    destination: Coordinate,
    obstacles: &[Coordinate],
) -> MazeState {
    let grid = Grid::new(rows, cols).expect("test grid should be non-empty");
    let mut maze = MazeState::new(grid);
    maze.apply_selection(Role::Start, start, &mut NoPaint);
    maze.apply_selection(Role::Destination, destination, &mut NoPaint);
    for &obstacle in obstacles {
        maze.apply_selection(Role::Obstacle, obstacle, &mut NoPaint);
    }
    maze
}

/// Asks the search to stop once it has reported `remaining` steps.
pub struct CancelAfter {
    pub remaining: usize,
}

impl SearchObserver for CancelAfter {
    fn on_step(&mut self, _step: Step) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    fn should_cancel(&self) -> bool {
        self.remaining == 0
    }
}
