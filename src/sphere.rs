//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection using the half-b form of the quadratic
//! formula.

use crate::hittable::HitRecord;
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use glam::DVec3;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: DVec3,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f64,

    /// Material properties determining light interaction.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: DVec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Test for ray intersection within the given parameter range.
    ///
    /// Solves a*t^2 - 2h*t + c = 0 with h the positive half-coefficient, so
    /// the roots are (h ± sqrt(h^2 - ac)) / a. The smaller root is preferred;
    /// the larger one is used when the smaller falls outside `ray_t`.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        // Vector from ray origin to sphere center
        let oc = self.center - r.origin;

        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (r.at(root) - self.center) / self.radius;
        Some(HitRecord::new(r, outward_normal, root, self.material))
    }
}
