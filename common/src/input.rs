use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::grid::{Coordinate, Grid};
use crate::maze::Role;

/// Which role a click assigns. The string forms are the ones the mode
/// selector reports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EditMode {
    #[default]
    Starting,
    Destination,
    Obstacles,
}

impl EditMode {
    pub fn role(self) -> Role {
        match self {
            EditMode::Starting => Role::Start,
            EditMode::Destination => Role::Destination,
            EditMode::Obstacles => Role::Obstacle,
        }
    }

    /// The following mode, wrapping around after the last.
    pub fn next(self) -> Self {
        EditMode::iter()
            .cycle()
            .skip_while(|&mode| mode != self)
            .nth(1)
            .unwrap_or_default()
    }
}

/// A click on the rendering surface, in surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub mode: EditMode,
    pub pixel_x: f32,
    pub pixel_y: f32,
}

impl ClickEvent {
    pub fn new(mode: EditMode, pixel_x: f32, pixel_y: f32) -> Self {
        Self {
            mode,
            pixel_x,
            pixel_y,
        }
    }

    pub fn coordinate(&self, cell_size: f32) -> Option<Coordinate> {
        Grid::coordinate_from_pixel(self.pixel_x, self.pixel_y, cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_parse_from_selector_values() {
        assert_eq!("starting".parse::<EditMode>(), Ok(EditMode::Starting));
        assert_eq!("destination".parse::<EditMode>(), Ok(EditMode::Destination));
        assert_eq!("obstacles".parse::<EditMode>(), Ok(EditMode::Obstacles));
        assert!("walls".parse::<EditMode>().is_err());
        assert_eq!(EditMode::Obstacles.to_string(), "obstacles");
    }

    #[test]
    fn next_cycles_through_every_mode() {
        assert_eq!(EditMode::Starting.next(), EditMode::Destination);
        assert_eq!(EditMode::Destination.next(), EditMode::Obstacles);
        assert_eq!(EditMode::Obstacles.next(), EditMode::Starting);
    }

    #[test]
    fn click_maps_to_cell_by_flooring() {
        let click = ClickEvent::new(EditMode::Obstacles, 75.0, 224.9);
        assert_eq!(click.coordinate(75.0), Some(Coordinate::new(1, 2)));
    }
}
