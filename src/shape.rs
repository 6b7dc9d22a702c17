use crate::*;

/// Below this `|dot(normal, dir)|` a ray counts as parallel to a plane.
pub const PARALLEL_EPS: f32 = 1e-6;

#[derive(Clone, Debug)]
pub struct Hit {
    pub dist: f32,
    pub pos: P3,
    pub gnorm: V3,
}

pub trait ShapeImpl {
    /// Distance along `ray` to the nearest accepted intersection.
    fn test_hit(&self, ray: &Ray) -> Option<f32>;
    fn normal_at(&self, pos: &P3) -> V3;
}

pub mod shapes {
    use super::*;

    #[derive(Clone, Debug)]
    pub struct Sphere {
        pub center: P3,
        pub radius: f32,
    }

    impl ShapeImpl for Sphere {
        // Tangent rays (zero discriminant) are misses, and so are roots at t == 0.
        fn test_hit(&self, ray: &Ray) -> Option<f32> {
            let oc = ray.origin - self.center;
            let b = oc.dot(&ray.dir);
            let c = oc.dot(&oc) - self.radius * self.radius;
            let discriminant = b * b - c;
            if discriminant <= 0.0 {
                return None;
            }
            let l = discriminant.sqrt();
            let tmin = -b - l;
            let tmax = -b + l;
            if tmin > 0.0 {
                Some(tmin)
            } else if tmax > 0.0 {
                Some(tmax)
            } else {
                None
            }
        }

        fn normal_at(&self, pos: &P3) -> V3 {
            (pos - self.center).normalize()
        }
    }

    #[derive(Clone, Debug)]
    pub struct Plane {
        pub point: P3,
        pub normal: V3,
    }

    impl ShapeImpl for Plane {
        // Unlike spheres, t == 0 is accepted.
        fn test_hit(&self, ray: &Ray) -> Option<f32> {
            let denom = self.normal.dot(&ray.dir);
            if denom.abs() <= PARALLEL_EPS {
                return None;
            }
            let t = (self.point - ray.origin).dot(&self.normal) / denom;
            if t >= 0.0 {
                Some(t)
            } else {
                None
            }
        }

        fn normal_at(&self, _pos: &P3) -> V3 {
            self.normal
        }
    }
}

#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(shapes::Sphere),
    Plane(shapes::Plane),
}

impl_wrap_from_many! {Shape, shapes, [Sphere, Plane]}

use Shape::*;
impl Shape {
    pub fn test_hit(&self, ray: &Ray) -> Option<f32> {
        match self {
            Sphere(s) => s.test_hit(ray),
            Plane(s) => s.test_hit(ray),
        }
    }

    pub fn normal_at(&self, pos: &P3) -> V3 {
        match self {
            Sphere(s) => s.normal_at(pos),
            Plane(s) => s.normal_at(pos),
        }
    }

    pub fn make_hit(&self, ray: &Ray, dist: f32) -> Hit {
        let pos = ray.at(dist);
        Hit {
            dist,
            pos,
            gnorm: self.normal_at(&pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::shapes::{Plane, Sphere};
    use super::*;

    fn unit_sphere(radius: f32) -> Sphere {
        Sphere {
            center: P3::origin(),
            radius,
        }
    }

    fn ground() -> Plane {
        Plane {
            point: P3::origin(),
            normal: V3::new(0.0, 1.0, 0.0),
        }
    }

    #[test]
    fn sphere_front_hit() {
        for &r in &[0.5f32, 1.0, 2.0] {
            let ray = Ray::new(P3::new(0.0, 0.0, 5.0), V3::new(0.0, 0.0, -1.0));
            let t = unit_sphere(r).test_hit(&ray).unwrap();
            assert!((t - (5.0 - r)).abs() < 1e-5, "r = {}, t = {}", r, t);
        }
    }

    #[test]
    fn sphere_behind() {
        let ray = Ray::new(P3::new(0.0, 0.0, 5.0), V3::new(0.0, 0.0, 1.0));
        assert!(unit_sphere(1.0).test_hit(&ray).is_none());
    }

    #[test]
    fn sphere_tangent_is_miss() {
        // b == 0, c == 0, so the discriminant is exactly zero
        let ray = Ray::new(P3::new(1.0, 0.0, 5.0), V3::new(0.0, 0.0, -1.0));
        assert!(unit_sphere(1.0).test_hit(&ray).is_none());
    }

    #[test]
    fn sphere_from_inside_uses_far_root() {
        let ray = Ray::new(P3::origin(), V3::new(1.0, 0.0, 0.0));
        let t = unit_sphere(2.0).test_hit(&ray).unwrap();
        assert!((t - 2.0).abs() < 1e-6);
    }

    #[test]
    fn sphere_normal() {
        let s = Shape::from(unit_sphere(2.0));
        let ray = Ray::new(P3::new(0.0, 0.0, 5.0), V3::new(0.0, 0.0, -1.0));
        let hit = s.make_hit(&ray, s.test_hit(&ray).unwrap());
        assert!((hit.pos - P3::new(0.0, 0.0, 2.0)).norm() < 1e-5);
        assert!((hit.gnorm - V3::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn plane_hit() {
        let ray = Ray::new(P3::new(0.0, 5.0, 0.0), V3::new(0.0, -1.0, 0.0));
        assert_eq!(ground().test_hit(&ray), Some(5.0));
    }

    #[test]
    fn plane_parallel_is_miss() {
        let ray = Ray::new(P3::new(0.0, 5.0, 0.0), V3::new(1.0, 0.0, 0.0));
        assert!(ground().test_hit(&ray).is_none());
    }

    #[test]
    fn plane_accepts_zero_distance() {
        let ray = Ray::new(P3::origin(), V3::new(0.0, -1.0, 0.0));
        assert_eq!(ground().test_hit(&ray), Some(0.0));
    }

    #[test]
    fn plane_behind() {
        let ray = Ray::new(P3::new(0.0, 5.0, 0.0), V3::new(0.0, 1.0, 0.0));
        assert!(ground().test_hit(&ray).is_none());
    }

    #[test]
    fn plane_normal_is_not_flipped() {
        let p = Shape::from(ground());
        let ray = Ray::new(P3::new(0.0, -5.0, 0.0), V3::new(0.0, 1.0, 0.0));
        let hit = p.make_hit(&ray, p.test_hit(&ray).unwrap());
        assert_eq!(hit.gnorm, V3::new(0.0, 1.0, 0.0));
    }
}
