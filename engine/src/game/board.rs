use super::session_rng::SessionRng;
use super::types::Point;

/// Square torus of `grid_count` x `grid_count` cells.
#[derive(Clone, Copy, Debug)]
pub struct Board {
    grid_count: i32,
}

impl Board {
    pub fn new(grid_count: i32) -> Self {
        Self { grid_count }
    }

    pub fn grid_count(&self) -> i32 {
        self.grid_count
    }

    /// No-wall rule: leaving one edge re-enters on the opposite edge. Each
    /// axis is corrected independently; single-step movement only ever takes
    /// one axis out of range, but both are handled anyway.
    pub fn wrap(&self, point: Point) -> Point {
        Point::new(self.wrap_axis(point.col), self.wrap_axis(point.row))
    }

    fn wrap_axis(&self, value: i32) -> i32 {
        if value < 0 {
            self.grid_count - 1
        } else if value > self.grid_count - 1 {
            0
        } else {
            value
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..self.grid_count).contains(&point.col) && (0..self.grid_count).contains(&point.row)
    }

    pub fn random_point(&self, rng: &mut SessionRng) -> Point {
        Point::new(
            rng.sample_axis(self.grid_count),
            rng.sample_axis(self.grid_count),
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.grid_count / 2, self.grid_count / 2)
    }
}
