use core::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::{Point3, Vector3};

/// A location in 3-D space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point(Point3<f64>);

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Point3::new(x, y, z))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point(self.0 + rhs.0)
    }
}

/// A direction in 3-D space.
///
/// Every operation returns a new value. The magnitude is derived from the
/// components on each call, so it always matches them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector(Vector3<f64>);

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The direction from the origin to `point`.
    pub fn from_point(point: Point) -> Self {
        Self(point.0.coords)
    }

    /// The direction from `a` to `b`.
    pub fn between(a: Point, b: Point) -> Self {
        b - a
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.0.dot(&other.0)
    }

    /// Returns this vector rescaled to unit length.
    ///
    /// # Panics
    ///
    /// Panics if the vector has zero length.
    pub fn normalized(&self) -> Vector {
        match self.try_normalized() {
            Some(unit) => unit,
            None => panic!("cannot normalize a zero-length vector: {self:?}"),
        }
    }

    pub fn try_normalized(&self) -> Option<Vector> {
        self.0.try_normalize(0.0).map(Self)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector(self.0 * rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        Vector(rhs.0 * self)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector(self.0 / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}
