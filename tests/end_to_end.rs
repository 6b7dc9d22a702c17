use whitted::camera::PinHole;
use whitted::config;
use whitted::example_scenes;
use whitted::image::Image;
use whitted::renderer::{self, RenderConfig, Renderer};
use whitted::state::{Key, SceneState};
use whitted::*;

#[test]
fn lab_scene_from_file() {
    let toml = r#"
        [camera]
        position = [0.0, 0.0, 3.0]

        [light]
        position = [3.0, 2.0, -2.0]
        color = [1.0, 1.0, 0.0]

        [[spheres]]
        center = [0.0, 0.0, -3.0]
        radius = 1.0
        color = [1.0, 1.0, 0.0]

        [[planes]]
        point = [0.0, -1.0, 0.0]
        normal = [0.0, 1.0, 0.0]
        color = [0.5, 0.5, 0.5]

        [trace]
        shadows = true
    "#;
    let path = std::env::temp_dir().join(format!("whitted-scene-{}.toml", std::process::id()));
    std::fs::write(&path, toml).unwrap();
    let setup = config::load_scene(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(setup.trace.shadows);
    let mut image = Image::new(16, 12);
    let renderer = Renderer {
        trace: setup.trace.clone(),
        config: RenderConfig {
            nthread: 3,
            ..Default::default()
        },
    };
    let stats = renderer.render(&setup.scene, &setup.camera, &mut image);
    assert!(stats.rays >= 16 * 12);
    assert!(image.pixels().iter().all(RGB::is_finite));
    // the floor fills the bottom row
    assert_ne!(*image.at(8, 0), RGB::black());
}

#[test]
fn builtin_matches_default_render() {
    let setup = example_scenes::make_lab().unwrap();
    let a = renderer::render(&setup.scene, P3::new(0.0, 0.0, 3.0), 8, 6);

    let mut b = Image::new(8, 6);
    Renderer {
        config: RenderConfig {
            nthread: 2,
            ..Default::default()
        },
        ..Default::default()
    }
    .render(&setup.scene, &PinHole::new(P3::new(0.0, 0.0, 3.0)), &mut b);
    assert_eq!(a, b);
}

#[test]
fn moving_the_light_changes_the_frame() {
    let mut setup = example_scenes::make_lab().unwrap();
    let before = renderer::render(&setup.scene, P3::new(0.0, 0.0, 3.0), 8, 6);

    let mut state = SceneState::new(setup.scene.light().position);
    for _ in 0..5 {
        state.update(&[Key::Left, Key::Down], 0.5);
    }
    state.apply(&mut setup.scene);
    let after = renderer::render(&setup.scene, P3::new(0.0, 0.0, 3.0), 8, 6);
    assert_ne!(before, after);
}
