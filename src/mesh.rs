use log::debug;
use nalgebra::Vector3;

use crate::{
    bounds::Aabb,
    error::{Error, Result},
    hit::Hit,
    object::{Object, Part},
    plane::Plane,
    Ray,
};

/// Slack allowed on each barycentric weight. Points marginally outside a
/// triangle still count as hits so rays cannot slip between two triangles
/// that share an edge.
pub const WEIGHT_TOLERANCE: f64 = 1e-4;

/// Barycentric weights of a point relative to a triangle's vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Barycentric {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl Barycentric {
    pub fn within(&self, tolerance: f64) -> bool {
        self.alpha > -tolerance && self.beta > -tolerance && self.gamma > -tolerance
    }
}

/// Accumulates vertices and triangles, then seals them into an immutable
/// [`Mesh`].
#[derive(Clone, Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<Vector3<f64>>,
    triangles: Vec<[usize; 3]>,
    bounds: Aabb,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: Vector3<f64>) -> usize {
        self.bounds.include_point(&vertex);
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Adds a triangle by 0-based vertex indices. Indices are checked in
    /// [`MeshBuilder::build`], so faces may refer to vertices added later.
    pub fn add_triangle(&mut self, triangle: [usize; 3]) -> usize {
        self.triangles.push(triangle);
        self.triangles.len() - 1
    }

    pub fn build(self) -> Result<Mesh> {
        let vertex_count = self.vertices.len();
        for (triangle, indices) in self.triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= vertex_count) {
                return Err(Error::InvalidIndex {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }

        debug!(
            "mesh sealed: {} vertices, {} triangles",
            vertex_count,
            self.triangles.len()
        );

        Ok(Mesh {
            vertices: self.vertices,
            triangles: self.triangles,
            bounds: self.bounds,
        })
    }
}

/// Triangles sharing a vertex pool. Each triangle is one part.
#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<Vector3<f64>>,
    triangles: Vec<[usize; 3]>,
    bounds: Aabb,
}

impl Mesh {
    pub fn new(vertices: Vec<Vector3<f64>>, triangles: Vec<[usize; 3]>) -> Result<Self> {
        let mut builder = MeshBuilder::new();
        for v in vertices {
            builder.add_vertex(v);
        }
        for t in triangles {
            builder.add_triangle(t);
        }
        builder.build()
    }

    pub fn vertices(&self) -> &[Vector3<f64>] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    fn corners(&self, tri: usize) -> [Vector3<f64>; 3] {
        self.triangles[tri].map(|i| self.vertices[i])
    }

    /// Barycentric weights of the point where `ray` crosses the plane of
    /// triangle `tri`. `None` when the ray is parallel to the plane or the
    /// triangle is degenerate.
    pub fn barycentric(&self, ray: &Ray, tri: usize) -> Option<Barycentric> {
        let [a, b, c] = self.corners(tri);
        let u = ray.direction;
        let v = b - a;
        let w = c - a;
        let y = ray.origin - a;

        let uv = u.cross(&v);
        let denom = uv.dot(&w);
        if denom == 0.0 {
            return None;
        }

        let gamma = uv.dot(&y) / denom;
        let beta = w.cross(&u).dot(&y) / denom;
        Some(Barycentric {
            alpha: 1.0 - gamma - beta,
            beta,
            gamma,
        })
    }

    /// Ray parameter at which `ray` strikes triangle `tri`, if it does.
    pub fn intersect_triangle(&self, ray: &Ray, tri: usize) -> Option<f64> {
        let a = self.vertices[self.triangles[tri][0]];
        let t = Plane::new(a, self.normal(&a, tri)).intersect_distance(ray)?;

        self.barycentric(ray, tri)
            .filter(|weights| weights.within(WEIGHT_TOLERANCE))
            .map(|_| t)
    }
}

impl Object for Mesh {
    fn intersection(&self, ray: &Ray, part: Part) -> Option<Hit<'_>> {
        match part {
            Part::Index(tri) => {
                debug_assert!(
                    tri < self.triangles.len(),
                    "triangle {tri} out of range for a mesh of {}",
                    self.triangles.len()
                );
                self.intersect_triangle(ray, tri)
                    .map(|t| Hit::new(self, t, tri))
            }
            Part::All => (0..self.triangles.len())
                .filter_map(|tri| self.intersect_triangle(ray, tri).map(|t| (tri, t)))
                .min_by(|(_, a), (_, b)| a.total_cmp(b))
                .map(|(tri, t)| Hit::new(self, t, tri)),
        }
    }

    /// Flat per-triangle normal; `point` is ignored.
    fn normal(&self, _point: &Vector3<f64>, part: usize) -> Vector3<f64> {
        debug_assert!(
            part < self.triangles.len(),
            "triangle {part} out of range for a mesh of {}",
            self.triangles.len()
        );
        let [a, b, c] = self.corners(part);
        (b - a).cross(&(c - a)).normalize()
    }

    fn bounding_box(&self, part: Part) -> Aabb {
        match part {
            Part::All => self.bounds,
            Part::Index(tri) => Aabb::from_points(&self.corners(tri)),
        }
    }

    fn number_parts(&self) -> usize {
        self.triangles.len()
    }
}
