use rand::Rng;

use super::super::MazeMaker;

pub trait Backtrack {
    fn backtrack(&mut self);
}

impl<R: Rng> Backtrack for MazeMaker<R> {
    fn backtrack(&mut self) {
        let mut stack = Vec::new();

        let Some(initial_room) = self.pick_room() else {
            return;
        };
        self.visit_cell(initial_room);
        stack.push(initial_room);

        while let Some(curr) = stack.pop() {
            if let Some(next) = self.pick_unvisited_room_nearby(curr) {
                stack.push(curr);
                self.remove_wall_between(curr, next);
                self.visit_cell(next);
                stack.push(next);
            }
        }
    }
}
