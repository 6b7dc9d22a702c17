use std::ops::{Add, AddAssign, Div, Mul};

/// Linear colour, one `f32` per channel. Never clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RGB {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGB {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        RGB { r, g, b }
    }
    pub fn all(x: f32) -> Self {
        Self::new(x, x, x)
    }
    pub fn black() -> Self {
        Self::all(0.0)
    }

    pub fn from_array([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        RGB::new(f(self.r), f(self.g), f(self.b))
    }
}

impl Add for RGB {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        RGB::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for RGB {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for RGB {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.map(|c| c * rhs)
    }
}

impl Div<f32> for RGB {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.map(|c| c / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = RGB::new(1.0, 2.0, 3.0);
        let b = RGB::all(0.5);
        assert_eq!(a + b, RGB::new(1.5, 2.5, 3.5));
        assert_eq!(a * 0.5, RGB::new(0.5, 1.0, 1.5));
        assert_eq!(a / 2.0, a * 0.5);

        let mut c = a;
        c += b;
        assert_eq!(c, RGB::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn finiteness() {
        assert_eq!(RGB::black(), RGB::default());
        assert!(RGB::black().is_finite());
        assert!(!RGB::new(0.0, std::f32::NAN, 0.0).is_finite());
        assert!(!RGB::all(std::f32::INFINITY).is_finite());
        assert_eq!(RGB::from_array([0.1, 0.2, 0.3]), RGB::new(0.1, 0.2, 0.3));
    }
}
