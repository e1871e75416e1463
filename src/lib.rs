//! A ray caster: one ray per pixel from a fixed eye point, nearest-hit
//! sphere intersection, and Blinn-Phong shading under directional lights.

pub mod camera;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod hit;
pub mod light;
pub mod primitive;
pub mod ray;
pub mod sampler;
pub mod scene;
pub mod shading;
pub mod sphere;
pub mod vector;
pub mod viewport;

pub use camera::Camera;
pub use color::Color;
pub use config::SceneFile;
pub use error::{Error, Result};
pub use frame::{FrameBuffer, Pixel};
pub use hit::{Intersect, LocalCalculations};
pub use light::Light;
pub use primitive::Primitive;
pub use ray::Ray;
pub use sampler::{Sample, Sampler};
pub use scene::{Handle, Scene};
pub use shading::{Properties, ShadingModel};
pub use sphere::Sphere;
pub use vector::{Point, Vector};
pub use viewport::{Resolution, Viewport};
