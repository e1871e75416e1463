use serde::Deserialize;

use crate::{color::Color, hit::LocalCalculations, light::Light, ray::Ray};

/// Surface material of a primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Properties {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub specular_exponent: i32,
    // Not read by any shading model yet.
    pub reflection: i32,
    pub refraction: i32,
}

/// How a primitive turns an intersection into a color. Chosen when the
/// primitive is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingModel {
    #[default]
    BlinnPhong,
}

impl ShadingModel {
    pub fn shade<'a>(
        &self,
        view_ray: &Ray,
        local: &LocalCalculations,
        properties: &Properties,
        lights: impl IntoIterator<Item = &'a Light>,
    ) -> Color {
        match self {
            Self::BlinnPhong => blinn_phong(view_ray, local, properties, lights),
        }
    }
}

/// Sums ambient, diffuse and specular terms over every light that is on,
/// then caps each channel at 1.0.
///
/// # Panics
///
/// Panics on a zero-length light direction, a zero-length normal, or a hit
/// point that coincides with the ray origin.
pub fn blinn_phong<'a>(
    view_ray: &Ray,
    local: &LocalCalculations,
    properties: &Properties,
    lights: impl IntoIterator<Item = &'a Light>,
) -> Color {
    let n = local.normal.normalized();
    let v = (view_ray.origin - local.point).normalized();

    let mut color = Color::black();
    for light in lights.into_iter().filter(|light| light.is_on()) {
        let l = light.direction().normalized();
        let rv = (n * (2.0 * l.dot(&n)) - l).normalized();

        let diffuse = n.dot(&l).max(0.0);
        let specular = v.dot(&rv).max(0.0).powi(properties.specular_exponent);

        color += properties.ambient * light.color()
            + properties.diffuse * light.color() * diffuse
            + properties.specular * light.color() * specular;
    }

    color.clamped()
}
