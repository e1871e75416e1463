use serde::Deserialize;

use crate::{
    error::{Error, Result},
    vector::Point,
};

/// A rectangle in space, parallel to the x-y plane, that rays are cast
/// through. Its size is in scene units and has nothing to do with the
/// resolution of the output image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    center: Point,
    upper_left: Point,
    upper_right: Point,
    lower_left: Point,
    lower_right: Point,
}

impl Viewport {
    pub fn new(width: f64, height: f64, center: Point) -> Self {
        let left = center.x() - width / 2.0;
        let right = center.x() + width / 2.0;
        let up = center.y() + height / 2.0;
        let down = center.y() - height / 2.0;
        Self {
            width,
            height,
            center,
            upper_left: Point::new(left, up, center.z()),
            upper_right: Point::new(right, up, center.z()),
            lower_left: Point::new(left, down, center.z()),
            lower_right: Point::new(right, down, center.z()),
        }
    }

    pub fn from_corners(
        upper_left: Point,
        upper_right: Point,
        lower_left: Point,
        lower_right: Point,
    ) -> Self {
        let width = upper_right.x() - upper_left.x();
        let height = upper_left.y() - lower_left.y();
        let center = Point::new(
            (upper_left.x() + lower_right.x()) / 2.0,
            (upper_left.y() + lower_right.y()) / 2.0,
            upper_left.z(),
        );
        Self {
            width,
            height,
            center,
            upper_left,
            upper_right,
            lower_left,
            lower_right,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn upper_left(&self) -> Point {
        self.upper_left
    }

    pub fn upper_right(&self) -> Point {
        self.upper_right
    }

    pub fn lower_left(&self) -> Point {
        self.lower_left
    }

    pub fn lower_right(&self) -> Point {
        self.lower_right
    }
}

/// Size of the pixel grid, which is also the number of samples taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawResolution")]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidResolution { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// 500x500.
impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
        }
    }
}

#[derive(Deserialize)]
struct RawResolution {
    width: u32,
    height: u32,
}

impl TryFrom<RawResolution> for Resolution {
    type Error = Error;

    fn try_from(raw: RawResolution) -> Result<Self> {
        Self::new(raw.width, raw.height)
    }
}
