use rand::Rng;

use super::super::MazeMaker;

pub trait Scatter {
    fn scatter(&mut self, density: f64);
}

impl<R: Rng> Scatter for MazeMaker<R> {
    fn scatter(&mut self, density: f64) {
        let density = if density.is_finite() {
            density.clamp(0.0, 1.0)
        } else {
            0.0
        };

        for row in self.walls.iter_mut() {
            for cell in row.iter_mut() {
                *cell = self.rng.random_bool(density);
            }
        }
    }
}
