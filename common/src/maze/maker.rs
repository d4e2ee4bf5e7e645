pub mod algorithms;

use std::fmt;

use rand::Rng;
use rand::prelude::IndexedRandom;
use strum::EnumString;

use algorithms::{backtrack::Backtrack, scatter::Scatter};

use super::{MazeState, Role};
use crate::grid::{Coordinate, Grid};
use crate::paint::PaintSink;

#[derive(Debug, Clone, Copy, PartialEq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Algorithm {
    Backtrack, // Long corridors one cell wide.
    #[strum(disabled)]
    Scatter { density: f64 }, // Independent coin flip per cell.
}

impl Algorithm {
    pub fn scatter(density: f64) -> Self {
        let density = if density.is_finite() {
            density.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Algorithm::Scatter { density }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Backtrack => write!(f, "backtrack"),
            Algorithm::Scatter { density } => write!(f, "scatter {:.2}", density),
        }
    }
}

/// Builds an obstacle layout over a grid. `walls[y][x]` is true for cells
/// that should end up as obstacles.
pub struct MazeMaker<R: Rng> {
    pub walls: Vec<Vec<bool>>,
    pub rng: R,
    width: usize,
    height: usize,
}

impl<R: Rng> MazeMaker<R> {
    pub fn new(grid: &Grid, generator: Algorithm, rng: R) -> Self {
        let width = grid.cols();
        let height = grid.rows();

        let fill = matches!(generator, Algorithm::Backtrack);
        let walls = vec![vec![fill; width]; height];
        let mut maker = MazeMaker {
            walls,
            rng,
            width,
            height,
        };
        match generator {
            Algorithm::Backtrack => maker.backtrack(),
            Algorithm::Scatter { density } => maker.scatter(density),
        }
        maker
    }

    pub fn is_wall(&self, cell: Coordinate) -> bool {
        self.walls[cell.y][cell.x]
    }

    /// Rooms sit on even coordinates so the corridors reach the grid's top
    /// and left edges.
    fn rooms(&self) -> Vec<Coordinate> {
        let mut rooms = Vec::new();

        for y in (0..self.height).step_by(2) {
            for x in (0..self.width).step_by(2) {
                rooms.push(Coordinate::new(x, y));
            }
        }

        rooms
    }

    fn get_unvisited_rooms_nearby(&self, room: Coordinate) -> Vec<Coordinate> {
        let directions = [(0, 2), (2, 0), (0, -2), (-2, 0)];

        directions
            .iter()
            .filter_map(|&(dx, dz)| room.offset(dx, dz))
            .filter(|next| next.x < self.width && next.y < self.height)
            .filter(|&next| !self.is_visited(next))
            .collect()
    }

    fn pick_unvisited_room_nearby(&mut self, room: Coordinate) -> Option<Coordinate> {
        let neighbors = self.get_unvisited_rooms_nearby(room);
        neighbors.choose(&mut self.rng).copied()
    }

    fn visit_cell(&mut self, cell: Coordinate) {
        self.walls[cell.y][cell.x] = false;
    }

    fn is_visited(&self, cell: Coordinate) -> bool {
        !self.walls[cell.y][cell.x]
    }

    fn pick_room(&mut self) -> Option<Coordinate> {
        let rooms = self.rooms();
        rooms.choose(&mut self.rng).copied()
    }

    fn remove_wall_between(&mut self, room_1: Coordinate, room_2: Coordinate) {
        let x = (room_1.x + room_2.x) / 2;
        let y = (room_1.y + room_2.y) / 2;
        self.walls[y][x] = false;
    }
}

/// Replaces the maze's obstacles with a freshly generated layout. Every
/// change goes through `apply_selection`, so start and destination are never
/// overwritten and each changed cell is painted once.
pub fn generate<R: Rng>(
    maze: &mut MazeState,
    algorithm: Algorithm,
    rng: R,
    sink: &mut dyn PaintSink,
) -> usize {
    let grid = *maze.grid();
    let maker = MazeMaker::new(&grid, algorithm, rng);
    let mut changed = 0;

    for cell in grid.coordinates() {
        if maker.is_wall(cell) != maze.is_obstacle(cell)
            && maze.apply_selection(Role::Obstacle, cell, sink).is_applied()
        {
            changed += 1;
        }
    }

    tracing::info!(
        %algorithm,
        changed,
        obstacles = maze.obstacle_count(),
        "generated obstacles"
    );

    changed
}
