use crate::*;

pub trait Camera {
    /// Primary ray through film coordinates `u, v` in `[-1, 1]`.
    fn ray_to(&self, u: f32, v: f32) -> Ray;
}

/// Pinhole looking down -z with +y up. No aspect correction.
#[derive(Clone, Debug)]
pub struct PinHole {
    origin: P3,
    half_tan: f32,
}

impl PinHole {
    /// 90 degree field of view: the ray through `(u, v)` points at `(u, v, -1)`.
    pub fn new(origin: P3) -> Self {
        PinHole {
            origin,
            half_tan: 1.0,
        }
    }

    pub fn with_fov(origin: P3, fov_degree: f32) -> Self {
        let fov_rad = fov_degree * std::f32::consts::PI / 180.0;
        PinHole {
            origin,
            half_tan: (fov_rad / 2.0).tan(),
        }
    }
}

impl Camera for PinHole {
    fn ray_to(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            V3::new(self.half_tan * u, self.half_tan * v, -1.0).normalize(),
        )
    }
}
