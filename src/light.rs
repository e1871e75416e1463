use crate::{color::Color, vector::Vector};

/// A directional light, infinitely far away. `direction` points from the
/// light toward the scene and does not need to be unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    direction: Vector,
    color: Color,
    on: bool,
}

impl Light {
    pub fn new(direction: Vector, color: Color) -> Self {
        Self {
            direction,
            color,
            on: true,
        }
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn turn_on(&mut self) {
        self.on = true;
    }

    pub fn turn_off(&mut self) {
        self.on = false;
    }

    pub fn flick(&mut self) {
        self.on = !self.on;
    }

    pub fn set_direction(&mut self, direction: Vector) {
        self.direction = direction;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
