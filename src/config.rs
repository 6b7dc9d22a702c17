//! TOML scene description.
//!
//! ```toml
//! [camera]
//! position = [0.0, 0.0, 3.0]
//!
//! [light]
//! position = [3.0, 2.0, -2.0]
//! color = [1.0, 1.0, 0.0]
//!
//! [[spheres]]
//! center = [0.0, 0.0, -3.0]
//! radius = 1.0
//! color = [1.0, 1.0, 0.0]
//!
//! [[planes]]
//! point = [0.0, -1.0, 0.0]
//! normal = [0.0, 1.0, 0.0]
//! color = [0.5, 0.5, 0.5]
//! ```
//!
//! `camera.fov`, `texture` on each object and the whole `[trace]` table are
//! optional.

use crate::camera::PinHole;
use crate::material::Material;
use crate::object::SimpleObject;
use crate::renderer::TraceConfig;
use crate::scene::{Light, Scene, SceneError};
use crate::shape::shapes::{Plane, Sphere};
use crate::*;

use log::*;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing scene file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),
    #[error("camera position must be finite")]
    Camera,
    #[error("camera fov must be between 0 and 180 degrees, got {0}")]
    Fov(f32),
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TextureKind {
    Matte,
    Mottled,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraData {
    pub position: [f32; 3],
    #[serde(default)]
    pub fov: Option<f32>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightData {
    pub position: [f32; 3],
    #[serde(default = "white")]
    pub color: [f32; 3],
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereData {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    #[serde(default)]
    pub texture: Option<TextureKind>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaneData {
    pub point: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    #[serde(default)]
    pub texture: Option<TextureKind>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraceData {
    pub max_depth: Option<usize>,
    pub ambient: Option<f32>,
    pub reflectivity: Option<f32>,
    pub bias: Option<f32>,
    pub shadows: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneData {
    pub camera: CameraData,
    pub light: LightData,
    #[serde(default)]
    pub spheres: Vec<SphereData>,
    #[serde(default)]
    pub planes: Vec<PlaneData>,
    #[serde(default)]
    pub trace: TraceData,
}

fn white() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn p3([x, y, z]: [f32; 3]) -> P3 {
    P3::new(x, y, z)
}

fn v3([x, y, z]: [f32; 3]) -> V3 {
    V3::new(x, y, z)
}

fn material(color: [f32; 3], texture: Option<TextureKind>, default: TextureKind) -> Material {
    let color = RGB::from_array(color);
    match texture.unwrap_or(default) {
        TextureKind::Matte => Material::new_matte(color),
        TextureKind::Mottled => Material::new_mottled(color),
    }
}

impl TraceData {
    pub fn to_config(&self) -> TraceConfig {
        let d = TraceConfig::default();
        TraceConfig {
            max_depth: self.max_depth.unwrap_or(d.max_depth),
            ambient: self.ambient.unwrap_or(d.ambient),
            reflectivity: self.reflectivity.unwrap_or(d.reflectivity),
            bias: self.bias.unwrap_or(d.bias),
            shadows: self.shadows.unwrap_or(d.shadows),
        }
    }
}

/// Everything needed to render a frame.
pub struct Setup {
    pub scene: Scene,
    pub camera: PinHole,
    pub trace: TraceConfig,
}

impl SceneData {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Spheres are enumerated before planes.
    pub fn build(&self) -> Result<Setup, ConfigError> {
        let mut objects = Vec::with_capacity(self.spheres.len() + self.planes.len());
        for s in self.spheres.iter() {
            objects.push(SimpleObject {
                shape: Sphere {
                    center: p3(s.center),
                    radius: s.radius,
                }
                .into(),
                material: material(s.color, s.texture, TextureKind::Mottled),
            });
        }
        for p in self.planes.iter() {
            // zero normals stay zero so validation reports them
            let normal = v3(p.normal);
            objects.push(SimpleObject {
                shape: Plane {
                    point: p3(p.point),
                    normal: normal.try_normalize(0.0).unwrap_or(normal),
                }
                .into(),
                material: material(p.color, p.texture, TextureKind::Matte),
            });
        }
        let light = Light::new(p3(self.light.position), RGB::from_array(self.light.color));
        let scene = Scene::new(objects, light)?;

        let origin = p3(self.camera.position);
        if !is_finite_p3(&origin) {
            return Err(ConfigError::Camera);
        }
        let camera = match self.camera.fov {
            Some(fov) if fov > 0.0 && fov < 180.0 => PinHole::with_fov(origin, fov),
            Some(fov) => return Err(ConfigError::Fov(fov)),
            None => PinHole::new(origin),
        };

        Ok(Setup {
            scene,
            camera,
            trace: self.trace.to_config(),
        })
    }
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Setup, ConfigError> {
    let path = path.as_ref();
    info!("loading scene file {}", path.display());
    let input = std::fs::read_to_string(path).map_err(|e| {
        error!("{}", e);
        e
    })?;
    debug!("read {} bytes", input.len());
    let data = SceneData::from_toml(&input).map_err(|e| {
        error!("encountered error when parsing scene file: {}", e);
        e
    })?;
    data.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::shape::Shape;

    const LAB: &str = r#"
        [camera]
        position = [0.0, 0.0, 3.0]

        [light]
        position = [3.0, 2.0, -2.0]
        color = [1.0, 1.0, 0.0]

        [[spheres]]
        center = [0.0, 0.0, -3.0]
        radius = 1.0
        color = [1.0, 1.0, 0.0]

        [[spheres]]
        center = [2.0, 0.0, -3.0]
        radius = 1.0
        color = [0.0, 0.8, 0.8]
        texture = "matte"

        [[planes]]
        point = [0.0, -1.0, 0.0]
        normal = [0.0, 1.0, 0.0]
        color = [0.5, 0.5, 0.5]
    "#;

    #[test]
    fn parses_scene() {
        let setup = SceneData::from_toml(LAB).unwrap().build().unwrap();
        let objects = setup.scene.objects();
        assert_eq!(objects.len(), 3);
        assert!(matches!(objects[0].shape, Shape::Sphere(_)));
        assert!(matches!(objects[0].material, Material::Mottled(_)));
        assert!(matches!(objects[1].material, Material::Matte(_)));
        assert!(matches!(objects[2].shape, Shape::Plane(_)));
        assert!(matches!(objects[2].material, Material::Matte(_)));
        assert_eq!(setup.scene.light().color, RGB::new(1.0, 1.0, 0.0));
        assert_eq!(setup.camera.ray_to(0.0, 0.0).origin, P3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn trace_defaults_and_overrides() {
        let setup = SceneData::from_toml(LAB).unwrap().build().unwrap();
        let d = TraceConfig::default();
        assert_eq!(setup.trace.max_depth, d.max_depth);
        assert_eq!(setup.trace.reflectivity, d.reflectivity);
        assert!(!setup.trace.shadows);

        let input = format!("{}\n[trace]\nmax_depth = 1\nshadows = true\n", LAB);
        let setup = SceneData::from_toml(&input).unwrap().build().unwrap();
        assert_eq!(setup.trace.max_depth, 1);
        assert!(setup.trace.shadows);
        assert_eq!(setup.trace.ambient, d.ambient);
    }

    #[test]
    fn rejects_bad_geometry() {
        let input = LAB.replacen("radius = 1.0", "radius = -1.0", 1);
        let err = SceneData::from_toml(&input).unwrap().build().err();
        assert!(matches!(
            err,
            Some(ConfigError::Scene(SceneError::BadRadius { index: 0, .. }))
        ));
    }

    #[test]
    fn rejects_bad_fov() {
        let input = LAB.replacen(
            "position = [0.0, 0.0, 3.0]",
            "position = [0.0, 0.0, 3.0]\nfov = 180.0",
            1,
        );
        let err = SceneData::from_toml(&input).unwrap().build().err();
        assert!(matches!(err, Some(ConfigError::Fov(_))));
    }

    #[test]
    fn plane_normals_are_normalised() {
        let input = LAB.replacen("normal = [0.0, 1.0, 0.0]", "normal = [0.0, 2.0, 0.0]", 1);
        let setup = SceneData::from_toml(&input).unwrap().build().unwrap();
        let plane = setup
            .scene
            .objects()
            .iter()
            .find_map(|o| match &o.shape {
                Shape::Plane(p) => Some(p.normal),
                _ => None,
            })
            .unwrap();
        assert_eq!(plane, V3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn rejects_unknown_fields() {
        let input = format!("{}\n[trace]\nbounces = 2\n", LAB);
        assert!(matches!(
            SceneData::from_toml(&input),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        let err = load_scene("definitely/not/here.toml").err();
        assert!(matches!(err, Some(ConfigError::Io(_))));
    }
}
