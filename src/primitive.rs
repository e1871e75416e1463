use crate::{
    color::Color,
    hit::{Intersect, LocalCalculations},
    light::Light,
    ray::Ray,
    shading::{Properties, ShadingModel},
    sphere::Sphere,
};

/// Every kind of shape a scene can hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
}

impl Primitive {
    pub fn properties(&self) -> &Properties {
        match self {
            Self::Sphere(sphere) => &sphere.properties,
        }
    }

    pub fn shading(&self) -> ShadingModel {
        match self {
            Self::Sphere(sphere) => sphere.shading,
        }
    }

    /// Colors a hit on this primitive with its own material and shading model.
    pub fn shade<'a>(
        &self,
        view_ray: &Ray,
        local: &LocalCalculations,
        lights: impl IntoIterator<Item = &'a Light>,
    ) -> Color {
        self.shading()
            .shade(view_ray, local, self.properties(), lights)
    }
}

impl Intersect for Primitive {
    fn intersect(&self, ray: &Ray) -> Option<LocalCalculations> {
        match self {
            Self::Sphere(sphere) => sphere.intersect(ray),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}
