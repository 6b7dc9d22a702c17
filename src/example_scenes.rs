use crate::camera::PinHole;
use crate::config::Setup;
use crate::object::SimpleObject;
use crate::renderer::TraceConfig;
use crate::scene::{Light, Scene, SceneError};
use crate::*;

pub const NAMES: &[&str] = &["lab", "hallway"];

pub fn by_name(name: &str) -> Option<Result<Setup, SceneError>> {
    match name {
        "lab" => Some(make_lab()),
        "hallway" => Some(make_hallway()),
        _ => None,
    }
}

/// Three mottled spheres in a row over a grey floor, lit by a yellow light.
pub fn make_lab() -> Result<Setup, SceneError> {
    let objects = vec![
        SimpleObject::sphere(P3::new(0.0, 0.0, -3.0), 1.0, RGB::new(1.0, 1.0, 0.0)),
        SimpleObject::sphere(P3::new(2.0, 0.0, -3.0), 1.0, RGB::new(0.0, 0.8, 0.8)),
        SimpleObject::sphere(P3::new(-2.0, 0.0, -3.0), 1.0, RGB::new(0.9, 0.0, 0.9)),
        SimpleObject::plane(
            P3::new(0.0, -1.0, 0.0),
            V3::new(0.0, 1.0, 0.0),
            RGB::new(0.5, 0.5, 0.5),
        ),
    ];
    let light = Light::new(P3::new(3.0, 2.0, -2.0), RGB::new(1.0, 1.0, 0.0));

    Ok(Setup {
        scene: Scene::new(objects, light)?,
        camera: PinHole::new(P3::new(0.0, 0.0, 3.0)),
        trace: TraceConfig::default(),
    })
}

/// A sphere between two facing floor and ceiling planes.
pub fn make_hallway() -> Result<Setup, SceneError> {
    let objects = vec![
        SimpleObject::sphere(P3::new(0.0, 0.0, -4.0), 1.0, RGB::new(0.9, 0.3, 0.1)),
        SimpleObject::plane(
            P3::new(0.0, -1.5, 0.0),
            V3::new(0.0, 1.0, 0.0),
            RGB::new(0.6, 0.6, 0.7),
        ),
        SimpleObject::plane(
            P3::new(0.0, 1.5, 0.0),
            V3::new(0.0, -1.0, 0.0),
            RGB::new(0.6, 0.7, 0.6),
        ),
    ];
    let light = Light::new(P3::new(0.0, 1.0, -1.0), RGB::all(1.0));

    Ok(Setup {
        scene: Scene::new(objects, light)?,
        camera: PinHole::new(P3::new(0.0, 0.0, 2.0)),
        trace: TraceConfig::default(),
    })
}
