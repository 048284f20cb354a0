use crate::{
    bounds::Aabb,
    hit::Hit,
    light::Light,
    object::{Object, Part},
    shader::Shader,
    Color, Ray,
};

pub const DEFAULT_RECURSION_DEPTH_MAX: u32 = 3;

/// An object paired with the shader that colors it.
pub struct Surface {
    pub object: Box<dyn Object>,
    pub shader: Box<dyn Shader>,
}

/// Objects, lights and global lighting parameters.
///
/// Populated once, then shared read-only by every render thread.
pub struct World {
    surfaces: Vec<Surface>,
    lights: Vec<Box<dyn Light>>,
    pub ambient_color: Color,
    pub ambient_intensity: f64,
    pub enable_shadows: bool,
    pub recursion_depth_max: u32,
    /// Color of rays that strike nothing.
    pub background: Color,
}

impl World {
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
            lights: Vec::new(),
            ambient_color: Color::repeat(1.0),
            ambient_intensity: 0.0,
            enable_shadows: true,
            recursion_depth_max: DEFAULT_RECURSION_DEPTH_MAX,
            background: Color::zeros(),
        }
    }

    pub fn add_surface(&mut self, object: Box<dyn Object>, shader: Box<dyn Shader>) {
        self.surfaces.push(Surface { object, shader });
    }

    pub fn add_light(&mut self, light: impl Light + 'static) {
        self.lights.push(Box::new(light));
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn lights(&self) -> impl Iterator<Item = &dyn Light> {
        self.lights.iter().map(|l| l.as_ref())
    }

    /// Nearest surface struck by `ray`, with the hit on its object.
    pub fn closest_surface(&self, ray: &Ray) -> Option<(&Surface, Hit<'_>)> {
        self.surfaces
            .iter()
            .filter_map(|s| s.object.intersection(ray, Part::All).map(|hit| (s, hit)))
            .min_by(|(_, a), (_, b)| a.dist.total_cmp(&b.dist))
    }

    pub fn closest_intersection(&self, ray: &Ray) -> Option<Hit<'_>> {
        self.closest_surface(ray).map(|(_, hit)| hit)
    }

    /// Color seen along `ray`: the closest surface shaded by its shader, or
    /// the background.
    pub fn cast_ray(&self, ray: &Ray, recursion_depth: u32) -> Color {
        match self.closest_surface(ray) {
            Some((surface, hit)) => {
                let point = hit.point(ray);
                let normal = hit.object.normal(&point, hit.part);
                surface
                    .shader
                    .shade_surface(self, ray, &point, &normal, recursion_depth)
            }
            None => self.background,
        }
    }

    /// Union of every bounded object's box. Unbounded objects such as planes
    /// are skipped.
    pub fn bounds(&self) -> Aabb {
        self.surfaces
            .iter()
            .map(|s| s.object.bounding_box(Part::All))
            .filter(Aabb::is_finite)
            .fold(Aabb::empty(), |acc, b| acc.union(&b))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
