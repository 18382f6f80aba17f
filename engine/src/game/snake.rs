use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

/// Snake body, head first. The occupancy set mirrors the deque so food
/// placement checks stay O(1).
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    direction: Direction,
    pending_direction: Option<Direction>,
}

impl Snake {
    /// Straight run of `length` segments with the head at `head` and the
    /// rest trailing away from the travel direction, wrapped onto the torus
    /// when the run crosses an edge.
    pub fn new(head: Point, length: usize, direction: Direction, grid_count: i32) -> Self {
        let (dc, dr) = direction.offset();

        let mut body = VecDeque::with_capacity(length);
        let mut body_set = HashSet::with_capacity(length);
        for i in 0..length as i32 {
            let segment = Point::new(
                (head.col - dc * i).rem_euclid(grid_count),
                (head.row - dr * i).rem_euclid(grid_count),
            );
            body.push_back(segment);
            body_set.insert(segment);
        }

        Self {
            body,
            body_set,
            direction,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }

    pub fn snapshot(&self) -> Vec<Point> {
        self.body.iter().copied().collect()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn queue_turn(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Sampled once per tick; the last queued turn wins.
    pub fn apply_pending_turn(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    pub fn advance(&mut self, new_head: Point) {
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
    }

    pub fn drop_tail(&mut self) -> Point {
        let tail = self.body.pop_back().expect("snake body is never empty");
        // the head may have just entered the cell the tail is vacating
        if !self.body.contains(&tail) {
            self.body_set.remove(&tail);
        }
        tail
    }

    /// True iff the head coincides with a segment at index >= 1.
    pub fn has_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_trails_behind_a_left_moving_head() {
        let snake = Snake::new(Point::new(6, 6), 5, Direction::Left, 13);

        assert_eq!(
            snake.snapshot(),
            vec![
                Point::new(6, 6),
                Point::new(7, 6),
                Point::new(8, 6),
                Point::new(9, 6),
                Point::new(10, 6),
            ]
        );
        assert_eq!(snake.head(), Point::new(6, 6));
        assert_eq!(snake.tail(), Point::new(10, 6));
    }

    #[test]
    fn test_new_snake_wraps_across_the_edge() {
        let snake = Snake::new(Point::new(6, 6), 13, Direction::Left, 13);

        assert_eq!(snake.len(), 13);
        // one full row, no duplicate segments
        let unique: std::collections::HashSet<_> = snake.snapshot().into_iter().collect();
        assert_eq!(unique.len(), 13);
        assert!(snake.occupies(Point::new(0, 6)));
        assert!(snake.occupies(Point::new(12, 6)));
    }

    #[test]
    fn test_advance_and_drop_tail_keep_occupancy_in_sync() {
        let mut snake = Snake::new(Point::new(6, 6), 3, Direction::Left, 13);

        snake.advance(Point::new(5, 6));
        let dropped = snake.drop_tail();

        assert_eq!(dropped, Point::new(8, 6));
        assert!(snake.occupies(Point::new(5, 6)));
        assert!(!snake.occupies(Point::new(8, 6)));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_tail_chase_keeps_reentered_cell_occupied() {
        let mut snake = Snake::new(Point::new(6, 6), 3, Direction::Left, 13);
        let tail = snake.tail();

        snake.advance(tail);
        snake.drop_tail();

        assert!(snake.occupies(tail));
        assert!(!snake.has_self_collision());
    }

    #[test]
    fn test_head_on_body_is_a_self_collision() {
        let mut snake = Snake::new(Point::new(6, 6), 4, Direction::Left, 13);

        snake.advance(Point::new(8, 6));

        assert!(snake.has_self_collision());
    }

    #[test]
    fn test_last_queued_turn_wins() {
        let mut snake = Snake::new(Point::new(6, 6), 3, Direction::Left, 13);

        snake.queue_turn(Direction::Up);
        snake.queue_turn(Direction::Down);
        snake.apply_pending_turn();

        assert_eq!(snake.direction(), Direction::Down);
    }
}
