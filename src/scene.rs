use crate::object::{ObjectHit, ObjectList, SimpleObject};
use crate::shape::Shape;
use crate::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("object {index}: sphere radius must be finite and positive, got {radius}")]
    BadRadius { index: usize, radius: f32 },
    #[error("object {index}: plane normal must be finite and non-zero")]
    BadNormal { index: usize },
    #[error("object {index}: non-finite coordinates or colour")]
    NonFiniteObject { index: usize },
    #[error("light position and colour must be finite")]
    NonFiniteLight,
}

/// Point light. No falloff; `color` is carried along but does not tint shading.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub position: P3,
    pub color: RGB,
}

impl Light {
    pub fn new(position: P3, color: RGB) -> Self {
        Light { position, color }
    }
}

pub struct Scene {
    objects: ObjectList,
    light: Light,
}

impl Scene {
    /// Error indices refer to `objects` as passed. Spheres are then moved
    /// ahead of planes, keeping their relative order, so an exact tie between
    /// a sphere and a plane goes to the sphere.
    pub fn new(mut objects: Vec<SimpleObject>, light: Light) -> Result<Self, SceneError> {
        for (index, o) in objects.iter().enumerate() {
            Self::validate(index, o)?;
        }
        if !is_finite_p3(&light.position) || !light.color.is_finite() {
            return Err(SceneError::NonFiniteLight);
        }
        objects.sort_by_key(|o| match o.shape {
            Shape::Sphere(_) => 0,
            Shape::Plane(_) => 1,
        });
        Ok(Scene {
            objects: ObjectList::new(objects),
            light,
        })
    }

    fn validate(index: usize, o: &SimpleObject) -> Result<(), SceneError> {
        if !o.material.base_color().is_finite() {
            return Err(SceneError::NonFiniteObject { index });
        }
        match &o.shape {
            Shape::Sphere(s) => {
                if !is_finite_p3(&s.center) {
                    return Err(SceneError::NonFiniteObject { index });
                }
                if !(s.radius.is_finite() && s.radius > 0.0) {
                    return Err(SceneError::BadRadius {
                        index,
                        radius: s.radius,
                    });
                }
            }
            Shape::Plane(p) => {
                if !is_finite_p3(&p.point) {
                    return Err(SceneError::NonFiniteObject { index });
                }
                if !is_finite_v3(&p.normal) || p.normal.norm_squared() == 0.0 {
                    return Err(SceneError::BadNormal { index });
                }
            }
        }
        Ok(())
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn set_light_position(&mut self, position: P3) {
        self.light.position = position;
    }

    pub fn objects(&self) -> &[SimpleObject] {
        &self.objects.objects
    }

    pub fn test_hit(&self, ray: &Ray) -> Option<ObjectHit<'_>> {
        self.objects.test_hit(ray)
    }

    /// Whether the segment from `x` to the light is blocked.
    pub fn light_blocked(&self, x: &P3) -> bool {
        let r = self.light.position - x;
        let dist = r.norm();
        if dist == 0.0 {
            return false;
        }
        let ray = Ray::new(*x, r / dist);
        self.objects.occluded(&ray, dist)
    }
}
