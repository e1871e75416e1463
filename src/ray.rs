use crate::vector::{Point, Vector};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vector,
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// A ray starting at `origin` and passing through `target`.
    ///
    /// # Panics
    ///
    /// Panics if `origin` and `target` coincide, since no direction joins
    /// them.
    pub fn through(origin: Point, target: Point) -> Self {
        let direction = Vector::between(origin, target);
        assert!(
            direction.try_normalized().is_some(),
            "cannot cast a ray from {origin:?} through itself"
        );
        Self::new(origin, direction)
    }

    pub fn at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }
}
