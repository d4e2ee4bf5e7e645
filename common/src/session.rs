use rand::Rng;
use tracing::{info, warn};

use crate::config::Config;
use crate::grid::{Coordinate, Grid, GridError};
use crate::input::{ClickEvent, EditMode};
use crate::maze::{Algorithm, MazeState, Rejection, Selection, maker};
use crate::paint::{PaintSink, SearchObserver};
use crate::pathfinder::{PathResult, Pathfinder, SolveError};

/// Everything one editing session owns: the grid, the maze drawn on it, and
/// the cell size used to map surface positions to cells.
pub struct Session {
    maze: MazeState,
    cell_size: f32,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self, GridError> {
        let grid = Grid::from_surface(
            config.surface_width,
            config.surface_height,
            config.cell_size,
        )?;
        let (rows, cols) = grid.dimensions();
        info!(rows, cols, cell_size = config.cell_size, "grid ready");

        Ok(Self::with_grid(grid, config.cell_size))
    }

    pub fn with_grid(grid: Grid, cell_size: f32) -> Self {
        Self {
            maze: MazeState::new(grid),
            cell_size,
        }
    }

    pub fn maze(&self) -> &MazeState {
        &self.maze
    }

    pub fn grid(&self) -> &Grid {
        self.maze.grid()
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn handle_click(&mut self, event: &ClickEvent, sink: &mut dyn PaintSink) -> Selection {
        match event.coordinate(self.cell_size) {
            Some(coordinate) => self.select(event.mode, coordinate, sink),
            None => Selection::Ignored(Rejection::OutOfRange),
        }
    }

    pub fn select(
        &mut self,
        mode: EditMode,
        coordinate: Coordinate,
        sink: &mut dyn PaintSink,
    ) -> Selection {
        self.maze.apply_selection(mode.role(), coordinate, sink)
    }

    pub fn solve(&self, observer: &mut dyn SearchObserver) -> Result<PathResult, SolveError> {
        let result = Pathfinder::new(&self.maze).solve(observer);

        match &result {
            Ok(PathResult::Found(path)) => info!(length = path.len(), "solved"),
            Ok(PathResult::NotFound) => info!("destination unreachable"),
            Err(e) => warn!("{}", e),
        }

        result
    }

    pub fn generate<R: Rng>(
        &mut self,
        algorithm: Algorithm,
        rng: R,
        sink: &mut dyn PaintSink,
    ) -> usize {
        maker::generate(&mut self.maze, algorithm, rng, sink)
    }

    pub fn clear(&mut self, sink: &mut dyn PaintSink) {
        self.maze.clear(sink);
    }

    pub fn repaint(&self, sink: &mut dyn PaintSink) {
        self.maze.repaint(sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{NoPaint, Paint, PaintColor, Trace};
    use crate::test_helpers::small_config;

    fn session() -> Session {
        Session::new(&small_config()).expect("225 units should fit three cells")
    }

    #[test]
    fn new_sizes_grid_from_config() {
        assert_eq!(session().grid().dimensions(), (3, 3));
    }

    #[test]
    fn new_rejects_a_surface_without_cells() {
        let config = Config {
            surface_width: 10.0,
            ..Config::default()
        };
        assert!(matches!(
            Session::new(&config),
            Err(GridError::Empty { .. })
        ));
    }

    #[test]
    fn new_rejects_a_surface_too_large_to_draw() {
        let config = Config {
            surface_width: 1e30,
            surface_height: 1e30,
            cell_size: 1.0,
            ..Config::default()
        };
        assert!(matches!(
            Session::new(&config),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn click_converts_pixels_before_selecting() {
        let mut session = session();
        let mut paints = Vec::new();

        let click = ClickEvent::new(EditMode::Destination, 160.0, 10.0);
        let selection = session.handle_click(&click, &mut paints);

        assert!(selection.is_applied());
        assert_eq!(
            paints,
            vec![Paint::new(Coordinate::new(2, 0), PaintColor::Destination)]
        );
    }

    #[test]
    fn clicks_off_the_grid_are_ignored() {
        let mut session = session();
        let mut paints = Vec::new();

        let beyond = ClickEvent::new(EditMode::Obstacles, 300.0, 10.0);
        let negative = ClickEvent::new(EditMode::Obstacles, -1.0, 10.0);

        assert_eq!(
            session.handle_click(&beyond, &mut paints),
            Selection::Ignored(Rejection::OutOfRange)
        );
        assert_eq!(
            session.handle_click(&negative, &mut paints),
            Selection::Ignored(Rejection::OutOfRange)
        );
        assert!(paints.is_empty());
    }

    #[test]
    fn solve_reports_missing_endpoints_then_succeeds_once_set() {
        let mut session = session();
        let mut trace = Trace::new();

        assert_eq!(session.solve(&mut trace), Err(SolveError::MissingEndpoints));

        session.select(EditMode::Starting, Coordinate::new(0, 0), &mut NoPaint);
        session.select(EditMode::Destination, Coordinate::new(2, 2), &mut NoPaint);

        let result = session.solve(&mut trace).unwrap();
        assert_eq!(result.path().map(<[_]>::len), Some(9));
    }
}
