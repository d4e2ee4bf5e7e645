use std::collections::HashSet;

use thiserror::Error;
use tracing::info;

use crate::grid::Coordinate;
use crate::maze::MazeState;
use crate::paint::{SearchObserver, Step};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// Every cell from start to destination, both included.
    Found(Vec<Coordinate>),
    NotFound,
}

impl PathResult {
    pub fn path(&self) -> Option<&[Coordinate]> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("select a start and end destination")]
    MissingEndpoints,
    #[error("search cancelled after entering {entered} cells")]
    Cancelled { entered: usize },
}

struct Frame {
    cell: Coordinate,
    neighbors: Vec<Coordinate>,
    next: usize,
}

impl Frame {
    fn new(maze: &MazeState, cell: Coordinate) -> Self {
        Self {
            cell,
            neighbors: maze.neighbors(cell),
            next: 0,
        }
    }
}

/// Depth-first search with backtracking.
///
/// Each frame on the stack is one level of the recursive formulation: the
/// cell, its passable neighbors, and how far through them the search has got.
/// Neighbors are tried left, right, up, down, and the first route that reaches
/// the destination wins, so the result is deterministic but not necessarily
/// the shortest.
///
/// The observer sees `Entered` when a cell joins the path and `Backtracked`
/// when it turns out to be a dead end. The start cell keeps its marker and
/// produces neither. The destination is never entered; reaching it ends the
/// search.
pub struct Pathfinder<'a> {
    maze: &'a MazeState,
}

impl<'a> Pathfinder<'a> {
    pub fn new(maze: &'a MazeState) -> Self {
        Self { maze }
    }

    pub fn solve(&self, observer: &mut dyn SearchObserver) -> Result<PathResult, SolveError> {
        let maze = self.maze;
        let (Some(start), Some(destination)) = (maze.start(), maze.destination()) else {
            return Err(SolveError::MissingEndpoints);
        };

        if start == destination {
            return Ok(PathResult::Found(vec![start]));
        }

        let mut visited = HashSet::from([start]);
        let mut entered = 0;
        let mut stack = vec![Frame::new(maze, start)];

        loop {
            if observer.should_cancel() {
                info!(entered, "search cancelled");
                return Err(SolveError::Cancelled { entered });
            }

            let Some(frame) = stack.last_mut() else {
                info!(entered, "no path to the destination");
                return Ok(PathResult::NotFound);
            };

            let mut next = None;
            while let Some(&neighbor) = frame.neighbors.get(frame.next) {
                frame.next += 1;
                if !visited.contains(&neighbor) {
                    next = Some(neighbor);
                    break;
                }
            }

            match next {
                Some(cell) if cell == destination => {
                    let path: Vec<Coordinate> = stack
                        .iter()
                        .map(|frame| frame.cell)
                        .chain(std::iter::once(destination))
                        .collect();
                    info!(entered, length = path.len(), ?path, "path found");
                    return Ok(PathResult::Found(path));
                }
                Some(cell) => {
                    visited.insert(cell);
                    entered += 1;
                    observer.on_step(Step::Entered(cell));
                    stack.push(Frame::new(maze, cell));
                }
                None => {
                    let Some(dead_end) = stack.pop() else {
                        continue;
                    };
                    if dead_end.cell != start {
                        observer.on_step(Step::Backtracked {
                            coordinate: dead_end.cell,
                            restore: maze.color_at(dead_end.cell),
                        });
                    }
                }
            }
        }
    }
}

pub fn solve(maze: &MazeState, observer: &mut dyn SearchObserver) -> Result<PathResult, SolveError> {
    Pathfinder::new(maze).solve(observer)
}
