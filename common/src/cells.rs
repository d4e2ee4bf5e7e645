use crate::grid::{Coordinate, Grid};
use crate::paint::{Paint, PaintColor, PaintSink};

/// What the surface currently shows, one color per cell. Front ends paint
/// into this and draw from it every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBuffer {
    grid: Grid,
    colors: Vec<PaintColor>,
}

impl CellBuffer {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            colors: vec![PaintColor::Neutral; grid.len()],
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<PaintColor> {
        self.grid.index(coordinate).map(|i| self.colors[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, PaintColor)> + '_ {
        self.grid.coordinates().zip(self.colors.iter().copied())
    }

    pub fn count(&self, color: PaintColor) -> usize {
        self.colors.iter().filter(|&&c| c == color).count()
    }
}

impl PaintSink for CellBuffer {
    fn paint(&mut self, paint: Paint) {
        if let Some(i) = self.grid.index(paint.coordinate) {
            self.colors[i] = paint.color;
        }
    }
}
