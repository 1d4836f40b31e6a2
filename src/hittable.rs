//! Ray-object intersection system.
//!
//! Defines the closed set of hittable shapes and the HitRecord produced by a
//! successful intersection query. Shape dispatch is a plain enum match, which
//! keeps material sharing trivial compared to trait objects.

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::sphere::Sphere;
use glam::DVec3;

/// Ray-object intersection information.
///
/// Contains intersection point, surface normal, distance, and material data
/// needed for shading calculations.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: DVec3,
    /// Surface normal at the intersection point (unit vector, oriented
    /// against the incident ray)
    pub normal: DVec3,
    /// Distance along the ray to the intersection point
    pub t: f64,
    /// True if ray hits the front face, false if hits the back face
    pub front_face: bool,
    /// Material of the object at the hit point
    pub material: Material,
}

impl HitRecord {
    /// Build a hit record from an outward surface normal.
    ///
    /// Determines front/back face from the incident ray and flips the normal
    /// so it always points against the ray.
    pub fn new(r: &Ray, outward_normal: DVec3, t: f64, material: Material) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            p: r.at(t),
            normal,
            t,
            front_face,
            material,
        }
    }
}

/// The closed set of shapes a ray can intersect.
///
/// Sphere is currently the only concrete shape; the enum keeps dispatch a
/// static match and leaves room for further variants.
#[derive(Debug, Clone)]
pub enum Hittable {
    /// Sphere primitive
    Sphere(Sphere),
}

impl Hittable {
    /// Test for ray intersection within the given parameter range.
    ///
    /// Returns the intersection closest to the ray origin, if any.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Hittable::Sphere(sphere) => sphere.hit(r, ray_t),
        }
    }
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing; the closest hit among all
/// objects wins.
#[derive(Debug, Default)]
pub struct HittableList {
    /// Objects in the scene
    pub objects: Vec<Hittable>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all objects from the list
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Hittable) {
        self.objects.push(object);
    }

    /// Find the closest intersection among all objects in `ray_t`.
    ///
    /// Each accepted hit narrows the upper search bound, so later objects
    /// must hit strictly closer to replace an earlier one.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
