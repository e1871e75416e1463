use crate::{
    ray::Ray,
    vector::{Point, Vector},
};

/// Anything a ray can be tested against.
pub trait Intersect {
    /// Returns `None` when the ray misses.
    fn intersect(&self, ray: &Ray) -> Option<LocalCalculations>;
}

/// The result of a successful intersection test, consumed right away by the
/// tracer and the shading strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalCalculations {
    pub point: Point,
    /// Ray parameter of the hit. Can be negative, see [`crate::sphere::Sphere`].
    pub time_hit: f64,
    /// Surface normal at `point`. Not unit length; shading normalizes it.
    pub normal: Vector,
    /// Reserved for reflection. Always `None`.
    pub reflected: Option<Ray>,
}

impl LocalCalculations {
    pub fn new(point: Point, time_hit: f64, normal: Vector) -> Self {
        Self {
            point,
            time_hit,
            normal,
            reflected: None,
        }
    }
}
