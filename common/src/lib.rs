pub mod cells;
pub mod config;
pub mod editor;
pub mod grid;
pub mod input;
pub mod maze;
pub mod paint;
pub mod pathfinder;
pub mod playback;
pub mod session;

#[cfg(test)]
mod test_helpers;

pub use cells::CellBuffer;
pub use config::{Config, ConfigError};
pub use editor::{Action, Editor, Flow, Status, StatusLevel};
pub use grid::{Coordinate, Grid, GridError};
pub use input::{ClickEvent, EditMode};
pub use maze::{Algorithm, MazeState, Rejection, Role, Selection};
pub use paint::{Paint, PaintColor, PaintSink, SearchObserver, Step, Trace, Visualizer};
pub use pathfinder::{PathResult, Pathfinder, SolveError};
pub use playback::Playback;
pub use session::Session;
