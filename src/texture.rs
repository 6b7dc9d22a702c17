use crate::*;

const HASH_DIR: [f32; 3] = [12.9898, 78.233, 45.164];
const HASH_SCALE: f32 = 43758.5453;

/// Sinusoidal hash of a point, used as a cheap stand-in for gradient noise.
///
/// Deterministic for a given point. Although it is usually described as
/// centred on zero, `(sin(n) - 1) / 2` actually lies in `[-1, 0]`.
pub fn hash_noise(p: &P3) -> f32 {
    let n = p.coords.dot(&V3::from(HASH_DIR)).sin() * HASH_SCALE;
    (n.sin() - 1.0) / 2.0
}

/// Darkens `color` by the noise at `p`.
pub fn mottle(color: RGB, p: &P3) -> RGB {
    color * (0.5 + 0.5 * hash_noise(p))
}
