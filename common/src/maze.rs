pub mod maker;

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use crate::grid::{Coordinate, Grid};
use crate::paint::{Paint, PaintColor, PaintSink};

pub use maker::Algorithm;

/// Left, right, up, down. Search prefers earlier directions.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Start,
    Destination,
    Obstacle,
}

impl Role {
    pub fn color(self) -> PaintColor {
        match self {
            Role::Start => PaintColor::Start,
            Role::Destination => PaintColor::Destination,
            Role::Obstacle => PaintColor::Obstacle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutOfRange,
    RoleConflict,
}

/// Outcome of `MazeState::apply_selection`. Neither variant is an error:
/// ignored selections just leave the maze and the surface untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Applied,
    Ignored(Rejection),
}

impl Selection {
    pub fn is_applied(self) -> bool {
        self == Selection::Applied
    }
}

/// Start, destination and obstacles laid over a grid. No cell ever holds
/// more than one role.
#[derive(Clone)]
pub struct MazeState {
    grid: Grid,
    start: Option<Coordinate>,
    destination: Option<Coordinate>,
    obstacles: HashSet<Coordinate>,
}

impl MazeState {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            start: None,
            destination: None,
            obstacles: HashSet::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Coordinate> {
        self.start
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.destination
    }

    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn has_destination(&self) -> bool {
        self.destination.is_some()
    }

    pub fn is_obstacle(&self, coordinate: Coordinate) -> bool {
        self.obstacles.contains(&coordinate)
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    pub fn role_at(&self, coordinate: Coordinate) -> Option<Role> {
        if self.start == Some(coordinate) {
            Some(Role::Start)
        } else if self.destination == Some(coordinate) {
            Some(Role::Destination)
        } else if self.is_obstacle(coordinate) {
            Some(Role::Obstacle)
        } else {
            None
        }
    }

    pub fn color_at(&self, coordinate: Coordinate) -> PaintColor {
        self.role_at(coordinate)
            .map_or(PaintColor::Neutral, Role::color)
    }

    /// The single mutation entry point. An accepted change paints the cell it
    /// touches, plus the old cell when an endpoint moves; ignored selections
    /// paint nothing.
    pub fn apply_selection(
        &mut self,
        role: Role,
        coordinate: Coordinate,
        sink: &mut dyn PaintSink,
    ) -> Selection {
        if !self.grid.is_valid(coordinate) {
            trace!(%coordinate, ?role, "selection outside the grid ignored");
            return Selection::Ignored(Rejection::OutOfRange);
        }

        let selection = match role {
            Role::Start | Role::Destination => self.assign_endpoint(role, coordinate, sink),
            Role::Obstacle => self.toggle_obstacle(coordinate, sink),
        };

        match selection {
            Selection::Applied => debug!(%coordinate, ?role, "selection applied"),
            Selection::Ignored(reason) => {
                trace!(%coordinate, ?role, ?reason, "selection ignored")
            }
        }

        selection
    }

    fn assign_endpoint(
        &mut self,
        role: Role,
        coordinate: Coordinate,
        sink: &mut dyn PaintSink,
    ) -> Selection {
        let occupied = self.start == Some(coordinate)
            || self.destination == Some(coordinate)
            || self.is_obstacle(coordinate);
        if occupied {
            return Selection::Ignored(Rejection::RoleConflict);
        }

        let slot = match role {
            Role::Start => &mut self.start,
            _ => &mut self.destination,
        };

        if let Some(previous) = slot.replace(coordinate) {
            sink.paint(Paint::new(previous, PaintColor::Neutral));
        }
        sink.paint(Paint::new(coordinate, role.color()));

        Selection::Applied
    }

    fn toggle_obstacle(&mut self, coordinate: Coordinate, sink: &mut dyn PaintSink) -> Selection {
        if self.start == Some(coordinate) || self.destination == Some(coordinate) {
            return Selection::Ignored(Rejection::RoleConflict);
        }

        if self.obstacles.remove(&coordinate) {
            sink.paint(Paint::new(coordinate, PaintColor::Neutral));
        } else {
            self.obstacles.insert(coordinate);
            sink.paint(Paint::new(coordinate, PaintColor::Obstacle));
        }

        Selection::Applied
    }

    /// In-grid, non-obstacle cells next to `coordinate`, in `DIRECTIONS` order.
    pub fn neighbors(&self, coordinate: Coordinate) -> Vec<Coordinate> {
        DIRECTIONS
            .iter()
            .filter_map(|&(dx, dy)| coordinate.offset(dx, dy))
            .filter(|&neighbor| self.grid.is_valid(neighbor) && !self.is_obstacle(neighbor))
            .collect()
    }

    /// Paints every cell with its role color, wiping any search trace.
    pub fn repaint(&self, sink: &mut dyn PaintSink) {
        for coordinate in self.grid.coordinates() {
            sink.paint(Paint::new(coordinate, self.color_at(coordinate)));
        }
    }

    /// Drops every role, painting the cells that held one back to neutral.
    pub fn clear(&mut self, sink: &mut dyn PaintSink) {
        let mut cleared: Vec<Coordinate> = self.obstacles.drain().collect();
        cleared.extend(self.start.take());
        cleared.extend(self.destination.take());
        cleared.sort();

        for coordinate in cleared {
            sink.paint(Paint::new(coordinate, PaintColor::Neutral));
        }
    }

    pub fn render(&self) -> String {
        (0..self.grid.rows())
            .map(|y| {
                (0..self.grid.cols())
                    .map(|x| match self.role_at(Coordinate::new(x, y)) {
                        Some(Role::Start) => "S ",
                        Some(Role::Destination) => "D ",
                        Some(Role::Obstacle) => "██",
                        None => "  ",
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for MazeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for MazeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
