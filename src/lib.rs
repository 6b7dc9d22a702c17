#[macro_use]
pub mod util;

pub mod camera;
pub mod config;
pub mod example_scenes;
pub mod image;
pub mod manager;
pub mod material;
pub mod math;
pub mod object;
pub mod ray;
pub mod renderer;
pub mod rgb;
pub mod scene;
pub mod shape;
pub mod state;
pub mod texture;

pub use math::*;
pub use ray::Ray;
pub use rgb::RGB;
