//! Ray-surface intersection and Phong shading.
//!
//! Objects ([`Sphere`], [`Mesh`], [`Plane`]) answer intersection, normal and
//! bounding-box queries through the [`Object`] trait. A [`World`] pairs each
//! object with a [`Shader`], finds the closest hit along a ray, and hands the
//! hit point to that shader, which may query the world again for shadows or
//! reflections.
//!
//! Everything is immutable once built, so a world can be rendered from many
//! threads at once (see [`render::render`]).

pub mod bounds;
pub mod camera;
pub mod error;
pub mod frame;
pub mod hit;
pub mod light;
pub mod mesh;
pub mod obj;
pub mod object;
pub mod plane;
pub mod ray;
pub mod render;
pub mod shader;
pub mod sphere;
pub mod world;

pub use bounds::Aabb;
pub use camera::Camera;
pub use error::{Error, Result};
pub use hit::Hit;
pub use light::{DirectionLight, Light, PointLight};
pub use mesh::{Mesh, MeshBuilder};
pub use object::{Object, Part};
pub use plane::Plane;
pub use ray::Ray;
pub use shader::{FlatShader, PhongShader, ReflectiveShader, Shader};
pub use sphere::Sphere;
pub use world::World;

/// Linear RGB, unbounded above.
pub type Color = nalgebra::Vector3<f64>;
