use log::{debug, info};
use rayon::prelude::*;

use crate::{
    color::Color,
    frame::Pixel,
    hit::{Intersect, LocalCalculations},
    primitive::Primitive,
    ray::Ray,
    sampler::{Sample, Sampler},
    scene::Scene,
    vector::Point,
    viewport::{Resolution, Viewport},
};

/// Casts one ray per pixel from a fixed eye point through the viewport.
#[derive(Clone, Debug)]
pub struct Camera {
    eye: Point,
    viewport: Viewport,
    sampler: Sampler,
}

impl Camera {
    pub fn new(eye: Point, viewport: Viewport, resolution: Resolution) -> Self {
        Self {
            eye,
            viewport,
            sampler: Sampler::new(viewport, resolution),
        }
    }

    pub fn eye(&self) -> Point {
        self.eye
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn resolution(&self) -> Resolution {
        self.sampler.resolution()
    }

    /// Renders every sample in order on the calling thread.
    pub fn render(&self, scene: &Scene) -> Vec<Pixel> {
        self.log_start(scene);
        let pixels: Vec<Pixel> = self
            .sampler
            .samples()
            .map(|sample| self.shoot(sample, scene))
            .collect();
        info!("traced {} pixels", pixels.len());
        pixels
    }

    /// Same output as [`Camera::render`], with samples traced on the rayon
    /// thread pool.
    pub fn render_parallel(&self, scene: &Scene) -> Vec<Pixel> {
        self.log_start(scene);
        let pixels: Vec<Pixel> = (0..self.sampler.len())
            .into_par_iter()
            .map(|index| self.shoot(self.sampler.sample_by_index(index), scene))
            .collect();
        info!(
            "traced {} pixels on {} threads",
            pixels.len(),
            rayon::current_num_threads()
        );
        pixels
    }

    /// Color seen along `ray`: the nearest primitive shaded by its own
    /// material, or black when nothing is hit.
    pub fn trace(&self, ray: &Ray, scene: &Scene) -> Color {
        match nearest_hit(ray, scene.primitives()) {
            Some((primitive, local)) => primitive.shade(ray, &local, scene.lights()),
            None => Color::black(),
        }
    }

    fn shoot(&self, sample: Sample, scene: &Scene) -> Pixel {
        let ray = Ray::through(self.eye, sample.point);
        Pixel::new(sample.column, sample.row, self.trace(&ray, scene))
    }

    fn log_start(&self, scene: &Scene) {
        let resolution = self.resolution();
        info!(
            "rendering {}x{} from {:?}",
            resolution.width(),
            resolution.height(),
            self.eye
        );
        debug!(
            "scene has {} primitives and {} lights",
            scene.primitives().count(),
            scene.lights().count()
        );
    }
}

/// Smallest hit time wins. On an exact tie the earlier primitive is kept.
fn nearest_hit<'a>(
    ray: &Ray,
    primitives: impl Iterator<Item = &'a Primitive>,
) -> Option<(&'a Primitive, LocalCalculations)> {
    primitives
        .filter_map(|primitive| primitive.intersect(ray).map(|local| (primitive, local)))
        .fold(None, |best, (primitive, local)| match best {
            Some((_, ref nearest)) if nearest.time_hit <= local.time_hit => best,
            _ => Some((primitive, local)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        light::Light,
        shading::{Properties, ShadingModel},
        sphere::Sphere,
        vector::Vector,
    };

    fn matte(diffuse: Color) -> Properties {
        Properties {
            ambient: Color::new(0.1, 0.1, 0.1),
            diffuse,
            ..Default::default()
        }
    }

    fn sphere(z: f64, diffuse: Color) -> Sphere {
        Sphere::new(
            Point::new(0.0, 0.0, z),
            1.0,
            matte(diffuse),
            ShadingModel::BlinnPhong,
        )
    }

    fn camera(width: u32, height: u32) -> Camera {
        Camera::new(
            Point::new(0.0, 0.0, 0.0),
            Viewport::new(2.0, 2.0, Point::new(0.0, 0.0, 2.0)),
            Resolution::new(width, height).unwrap(),
        )
    }

    fn head_on() -> Ray {
        Ray::new(Point::new(0.0, 0.0, 0.0), Vector::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn empty_scene_is_black() {
        let scene = Scene::new();
        let pixels = camera(4, 4).render(&scene);
        assert_eq!(pixels.len(), 16);
        assert!(pixels.iter().all(|p| p.color.is_black()));
    }

    #[test]
    fn nearest_primitive_wins_in_any_order() {
        let light = Light::new(Vector::new(0.0, 0.0, -1.0), Color::white());
        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);

        let mut near_first = Scene::new();
        near_first.add_primitive(sphere(5.0, red));
        near_first.add_primitive(sphere(10.0, blue));
        near_first.add_light(light);

        let mut far_first = Scene::new();
        far_first.add_primitive(sphere(10.0, blue));
        far_first.add_primitive(sphere(5.0, red));
        far_first.add_light(light);

        let camera = camera(1, 1);
        for scene in [&near_first, &far_first] {
            let color = camera.trace(&head_on(), scene);
            assert_eq!(color, Color::new(1.0, 0.1, 0.1));
        }
    }

    #[test]
    fn ties_keep_the_first_primitive() {
        let mut scene = Scene::new();
        let first = scene.add_primitive(sphere(5.0, Color::new(1.0, 0.0, 0.0)));
        scene.add_primitive(sphere(5.0, Color::new(0.0, 1.0, 0.0)));

        let (winner, local) = nearest_hit(&head_on(), scene.primitives()).unwrap();
        assert_eq!(Some(winner), scene.primitive(first));
        assert_eq!(local.time_hit, 4.0);
    }

    #[test]
    fn pixels_follow_sampler_order() {
        let mut scene = Scene::new();
        scene.add_primitive(sphere(5.0, Color::new(1.0, 0.0, 0.0)));
        scene.add_light(Light::new(Vector::new(0.3, -0.2, 1.0), Color::white()));

        let pixels = camera(5, 3).render(&scene);
        let coordinates: Vec<(u32, u32)> = pixels.iter().map(|p| (p.column, p.row)).collect();
        let expected: Vec<(u32, u32)> = (0..3)
            .flat_map(|row| (0..5).map(move |column| (column, row)))
            .collect();
        assert_eq!(coordinates, expected);
    }

    #[test]
    #[should_panic(expected = "through itself")]
    fn eye_on_a_sample_point_fails_fast() {
        let mut scene = Scene::new();
        scene.add_primitive(Sphere::new(
            Point::new(0.0, 0.0, 5.0),
            1.0,
            Properties {
                ambient: Color::white(),
                ..Default::default()
            },
            ShadingModel::BlinnPhong,
        ));
        scene.add_light(Light::new(Vector::new(0.0, 0.0, 1.0), Color::white()));

        // The first sample of a 2x2 grid is the viewport's upper-left corner.
        let camera = Camera::new(
            Point::new(-1.0, 1.0, 2.0),
            Viewport::new(2.0, 2.0, Point::new(0.0, 0.0, 2.0)),
            Resolution::new(2, 2).unwrap(),
        );
        camera.render(&scene);
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut scene = Scene::new();
        scene.add_primitive(sphere(6.0, Color::new(1.0, 0.5, 0.0)));
        scene.add_primitive(Sphere::new(
            Point::new(1.0, 1.0, 4.0),
            0.5,
            matte(Color::new(0.0, 0.4, 1.0)),
            ShadingModel::BlinnPhong,
        ));
        scene.add_light(Light::new(Vector::new(-1.0, -1.0, -1.0), Color::white()));

        let camera = camera(32, 24);
        assert_eq!(camera.render(&scene), camera.render_parallel(&scene));
    }
}
