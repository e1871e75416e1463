use std::{fs, path::Path};

use log::{debug, info};
use serde::Deserialize;

use crate::{
    camera::Camera,
    color::Color,
    error::Result,
    light::Light,
    scene::Scene,
    shading::{Properties, ShadingModel},
    sphere::Sphere,
    vector::Vector,
    viewport::{Resolution, Viewport},
};

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CameraSettings {
    pub eye: [f64; 3],
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ViewportSettings {
    Centered {
        width: f64,
        height: f64,
        center: [f64; 3],
    },
    Corners {
        upper_left: [f64; 3],
        upper_right: [f64; 3],
        lower_left: [f64; 3],
        lower_right: [f64; 3],
    },
}

impl From<&ViewportSettings> for Viewport {
    fn from(settings: &ViewportSettings) -> Self {
        match *settings {
            ViewportSettings::Centered {
                width,
                height,
                center,
            } => Viewport::new(width, height, center.into()),
            ViewportSettings::Corners {
                upper_left,
                upper_right,
                lower_left,
                lower_right,
            } => Viewport::from_corners(
                upper_left.into(),
                upper_right.into(),
                lower_left.into(),
                lower_right.into(),
            ),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveSettings {
    Sphere {
        center: [f64; 3],
        radius: f64,
        #[serde(default)]
        properties: Properties,
        #[serde(default)]
        shading: ShadingModel,
    },
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LightSettings {
    pub direction: [f64; 3],
    pub color: Color,
    pub on: Option<bool>,
}

/// A scene description as read from a TOML file.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SceneFile {
    pub camera: CameraSettings,
    pub viewport: ViewportSettings,
    pub resolution: Resolution,
    #[serde(default)]
    pub primitives: Vec<PrimitiveSettings>,
    #[serde(default)]
    pub lights: Vec<LightSettings>,
}

impl SceneFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("reading scene from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn build(&self) -> (Camera, Scene) {
        let camera = Camera::new(
            self.camera.eye.into(),
            Viewport::from(&self.viewport),
            self.resolution,
        );

        let mut scene = Scene::new();
        for settings in &self.primitives {
            let handle = match *settings {
                PrimitiveSettings::Sphere {
                    center,
                    radius,
                    properties,
                    shading,
                } => scene.add_primitive(Sphere::new(center.into(), radius, properties, shading)),
            };
            debug!("added primitive {handle:?}: {settings:?}");
        }
        for settings in &self.lights {
            let mut light = Light::new(Vector::from(settings.direction), settings.color);
            if settings.on == Some(false) {
                light.turn_off();
            }
            let handle = scene.add_light(light);
            debug!("added light {handle:?}: {settings:?}");
        }

        (camera, scene)
    }
}

/// One red sphere lit from the upper left, seen through a 2x2 viewport at
/// z = 2.
impl Default for SceneFile {
    fn default() -> Self {
        Self {
            camera: CameraSettings {
                eye: [0.0, 0.0, 0.0],
            },
            viewport: ViewportSettings::Centered {
                width: 2.0,
                height: 2.0,
                center: [0.0, 0.0, 2.0],
            },
            resolution: Resolution::default(),
            primitives: vec![PrimitiveSettings::Sphere {
                center: [0.0, 0.0, 20.0],
                radius: 3.0,
                properties: Properties {
                    ambient: Color::new(0.1, 0.1, 0.1),
                    diffuse: Color::new(1.0, 0.0, 0.0),
                    specular: Color::new(1.0, 1.0, 1.0),
                    specular_exponent: 500,
                    ..Default::default()
                },
                shading: ShadingModel::BlinnPhong,
            }],
            lights: vec![LightSettings {
                direction: [0.57735027, -0.57735027, 0.57735027],
                color: Color::white(),
                on: None,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{primitive::Primitive, vector::Point};

    const TWO_SPHERES: &str = r#"
        [camera]
        eye = [0.0, 0.0, 0.0]

        [viewport]
        upper_left = [-1.0, 1.0, 2.0]
        upper_right = [1.0, 1.0, 2.0]
        lower_left = [-1.0, -1.0, 2.0]
        lower_right = [1.0, -1.0, 2.0]

        [resolution]
        width = 64
        height = 48

        [[primitives]]
        type = "sphere"
        center = [0.0, 0.0, 20.0]
        radius = 3.0

        [primitives.properties]
        ambient = [0.1, 0.1, 0.1]
        diffuse = [1.0, 0.0, 0.0]
        specular = [1.0, 1.0, 1.0]
        specular_exponent = 500

        [[primitives]]
        type = "sphere"
        center = [2.0, 2.0, 10.0]
        radius = 3.0
        shading = "blinn_phong"

        [[lights]]
        direction = [0.577, -0.577, 0.577]
        color = [1.0, 1.0, 1.0]

        [[lights]]
        direction = [0.0, 0.0, 1.0]
        color = [0.5, 0.5, 0.5]
        on = false
    "#;

    #[test]
    fn parses_a_scene_file() {
        let file = SceneFile::parse(TWO_SPHERES).unwrap();
        assert_eq!(file.resolution, Resolution::new(64, 48).unwrap());
        assert_eq!(file.primitives.len(), 2);

        let (camera, scene) = file.build();
        assert_eq!(camera.resolution(), file.resolution);
        assert_eq!(camera.viewport().center(), Point::new(0.0, 0.0, 2.0));
        assert_eq!(camera.viewport().width(), 2.0);

        let primitives: Vec<&Primitive> = scene.primitives().collect();
        let Primitive::Sphere(first) = primitives[0];
        assert_eq!(first.properties.specular_exponent, 500);
        assert_eq!(first.properties.diffuse, Color::new(1.0, 0.0, 0.0));
        let Primitive::Sphere(second) = primitives[1];
        assert_eq!(second.center, Point::new(2.0, 2.0, 10.0));
        assert_eq!(second.properties, Properties::default());

        let lights: Vec<&Light> = scene.lights().collect();
        assert!(lights[0].is_on());
        assert!(!lights[1].is_on());
        assert_eq!(lights[1].color(), Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn centered_viewport() {
        let file = SceneFile::parse(
            r#"
            camera = { eye = [0.0, 0.0, -1.0] }
            viewport = { width = 4.0, height = 2.0, center = [0.0, 1.0, 3.0] }
            resolution = { width = 8, height = 4 }
            "#,
        )
        .unwrap();
        let (camera, scene) = file.build();
        assert_eq!(camera.eye(), Point::new(0.0, 0.0, -1.0));
        assert_eq!(camera.viewport().upper_left(), Point::new(-2.0, 2.0, 3.0));
        assert_eq!(scene.primitives().count(), 0);
    }

    #[test]
    fn rejects_empty_resolution() {
        let result = SceneFile::parse(
            r#"
            camera = { eye = [0.0, 0.0, 0.0] }
            viewport = { width = 2.0, height = 2.0, center = [0.0, 0.0, 2.0] }
            resolution = { width = 0, height = 4 }
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn default_is_the_red_sphere() {
        let (camera, scene) = SceneFile::default().build();
        assert_eq!(camera.resolution(), Resolution::new(500, 500).unwrap());
        assert_eq!(scene.primitives().count(), 1);
        assert_eq!(scene.lights().count(), 1);
    }
}
