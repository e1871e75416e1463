use crate::{
    hit::{Intersect, LocalCalculations},
    ray::Ray,
    shading::{Properties, ShadingModel},
    vector::Point,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point,
    pub radius: f64,
    pub properties: Properties,
    pub shading: ShadingModel,
}

impl Sphere {
    pub fn new(center: Point, radius: f64, properties: Properties, shading: ShadingModel) -> Self {
        Self {
            center,
            radius,
            properties,
            shading,
        }
    }
}

impl Intersect for Sphere {
    /// Takes the smaller root of the ray/sphere quadratic, even when it lies
    /// behind the ray origin. The normal is `2 * (point - center)`. A ray with
    /// no direction hits nothing.
    fn intersect(&self, ray: &Ray) -> Option<LocalCalculations> {
        let d = ray.direction;
        let ec = ray.origin - self.center;
        let a = d.dot(&d);
        let b = d.dot(&ec);
        let c = ec.dot(&ec) - self.radius * self.radius;
        let discriminant = b * b - a * c;

        if a == 0.0 || discriminant < 0.0 {
            return None;
        }

        let t1 = (-b + discriminant.sqrt()) / a;
        let t2 = (-b - discriminant.sqrt()) / a;
        let t = t1.min(t2);

        let point = ray.at(t);
        let normal = (point - self.center) * 2.0;
        Some(LocalCalculations::new(point, t, normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;
    use approx::assert_relative_eq;

    fn sphere(center: Point, radius: f64) -> Sphere {
        Sphere::new(center, radius, Properties::default(), ShadingModel::BlinnPhong)
    }

    #[test]
    fn head_on_hit_is_distance_minus_radius() {
        let s = sphere(Point::new(0.0, 0.0, 20.0), 3.0);
        let ray = Ray::new(Point::new(0.0, 0.0, 0.0), Vector::new(0.0, 0.0, 1.0));
        let hit = s.intersect(&ray).expect("ray aimed at the center must hit");
        assert_relative_eq!(hit.time_hit, 17.0);
        assert_eq!(hit.point, Point::new(0.0, 0.0, 17.0));
        assert_eq!(hit.normal, Vector::new(0.0, 0.0, -6.0));
        assert!(hit.reflected.is_none());
    }

    #[test]
    fn time_is_in_units_of_the_direction() {
        let s = sphere(Point::new(0.0, 0.0, 20.0), 3.0);
        let ray = Ray::new(Point::new(0.0, 0.0, 0.0), Vector::new(0.0, 0.0, 2.0));
        let hit = s.intersect(&ray).unwrap();
        assert_relative_eq!(hit.time_hit, 8.5);
        assert_relative_eq!(hit.point.z(), 17.0);
    }

    #[test]
    fn wide_ray_misses() {
        let s = sphere(Point::new(0.0, 0.0, 20.0), 3.0);
        let ray = Ray::new(Point::new(3.5, 0.0, 0.0), Vector::new(0.0, 0.0, 1.0));
        assert!(s.intersect(&ray).is_none());
    }

    #[test]
    fn tangent_ray_has_one_root() {
        let s = sphere(Point::new(0.0, 0.0, 20.0), 3.0);
        let ray = Ray::new(Point::new(3.0, 0.0, 0.0), Vector::new(0.0, 0.0, 1.0));
        let hit = s.intersect(&ray).expect("tangent ray touches the sphere");
        assert!(hit.time_hit.is_finite());
        assert_relative_eq!(hit.time_hit, 20.0);
        assert_eq!(hit.point, Point::new(3.0, 0.0, 20.0));
        assert_eq!(hit.normal, Vector::new(6.0, 0.0, 0.0));
    }

    #[test]
    fn hits_behind_the_origin_are_reported() {
        let s = sphere(Point::new(0.0, 0.0, -10.0), 2.0);
        let ray = Ray::new(Point::new(0.0, 0.0, 0.0), Vector::new(0.0, 0.0, 1.0));
        let hit = s.intersect(&ray).unwrap();
        assert_relative_eq!(hit.time_hit, -12.0);
    }

    #[test]
    fn origin_inside_takes_the_smaller_root() {
        let s = sphere(Point::new(0.0, 0.0, 0.0), 1.0);
        let ray = Ray::new(Point::new(0.0, 0.0, 0.0), Vector::new(1.0, 0.0, 0.0));
        let hit = s.intersect(&ray).unwrap();
        assert_relative_eq!(hit.time_hit, -1.0);
        assert_eq!(hit.point, Point::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn zero_direction_never_hits() {
        let s = sphere(Point::new(0.0, 0.0, 5.0), 3.0);
        let ray = Ray::new(Point::new(0.0, 0.0, 4.0), Vector::default());
        assert!(s.intersect(&ray).is_none());
    }
}
