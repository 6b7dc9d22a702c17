use crate::*;

pub struct ObjectHit<'a> {
    pub hit: shape::Hit,
    pub object: &'a SimpleObject,
}

impl<'a> ObjectHit<'a> {
    pub fn albedo(&self) -> RGB {
        self.object.material.albedo(&self.hit.pos)
    }
}

#[derive(Clone, Debug)]
pub struct SimpleObject {
    pub shape: shape::Shape,
    pub material: material::Material,
}

impl SimpleObject {
    /// A noise-textured sphere.
    pub fn sphere(center: P3, radius: f32, color: RGB) -> Self {
        SimpleObject {
            shape: shape::shapes::Sphere { center, radius }.into(),
            material: material::Material::new_mottled(color),
        }
    }

    /// A plain-coloured plane.
    pub fn plane(point: P3, normal: V3, color: RGB) -> Self {
        SimpleObject {
            shape: shape::shapes::Plane { point, normal }.into(),
            material: material::Material::new_matte(color),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ObjectList {
    pub objects: Vec<SimpleObject>,
}

impl ObjectList {
    pub fn new(objects: Vec<SimpleObject>) -> Self {
        ObjectList { objects }
    }

    /// Nearest hit over all objects. On an exact tie the earlier object wins.
    pub fn test_hit(&self, ray: &Ray) -> Option<ObjectHit<'_>> {
        let mut nearest = None::<(f32, &SimpleObject)>;
        for o in self.objects.iter() {
            if let Some(t) = o.shape.test_hit(ray) {
                if nearest.map_or(true, |(best, _)| t < best) {
                    nearest = Some((t, o));
                }
            }
        }
        nearest.map(|(t, o)| ObjectHit {
            hit: o.shape.make_hit(ray, t),
            object: o,
        })
    }

    /// Whether anything intersects `ray` strictly closer than `tfar`.
    pub fn occluded(&self, ray: &Ray, tfar: f32) -> bool {
        self.objects
            .iter()
            .filter_map(|o| o.shape.test_hit(ray))
            .any(|t| t < tfar)
    }
}
