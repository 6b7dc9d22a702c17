use nalgebra::*;
pub type P3 = Point3<f32>;
pub type V3 = Vector3<f32>;

/// Mirror `dir` about the plane with normal `n`.
pub fn reflect(dir: &V3, n: &V3) -> V3 {
    *dir - *n * (2.0 * dir.dot(n))
}

pub fn is_finite_p3(p: &P3) -> bool {
    p.iter().all(|x| x.is_finite())
}

pub fn is_finite_v3(v: &V3) -> bool {
    v.iter().all(|x| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_flips_normal_component() {
        let d = V3::new(1.0, -1.0, 0.0);
        let n = V3::new(0.0, 1.0, 0.0);
        assert_eq!(reflect(&d, &n), V3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn reflect_head_on() {
        let d = V3::new(0.0, 0.0, -1.0);
        let n = V3::new(0.0, 0.0, 1.0);
        assert_eq!(reflect(&d, &n), V3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn finiteness() {
        assert!(is_finite_p3(&P3::new(0.0, 1.0, 2.0)));
        assert!(!is_finite_p3(&P3::new(0.0, std::f32::NAN, 2.0)));
        assert!(!is_finite_v3(&V3::new(std::f32::INFINITY, 0.0, 0.0)));
    }
}
