//! Material system for ray tracing.
//!
//! Implements three material types: Lambertian (diffuse), Metal (specular),
//! and Dielectric (transparent).

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;
use glam::DVec3;

/// RGB color type, one channel per component.
pub type Color = DVec3;

/// Material types for ray tracing.
///
/// Closed enum representing different surface materials. The variants are
/// small Copy values, so many spheres can share one material by value.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    /// Lambertian diffuse material for matte surfaces.
    Lambertian {
        /// Surface color/reflectance.
        albedo: Color,
    },

    /// Metallic material with specular reflection.
    Metal {
        /// Metal color.
        albedo: Color,
        /// Surface roughness (0.0 = mirror, 1.0 = rough).
        fuzz: f64,
    },

    /// Dielectric (transparent) material with refraction.
    Dielectric {
        /// Index of refraction (1.0 = air, 1.5 = glass, etc.).
        refraction_index: f64,
    },
}

impl Material {
    /// Create a Lambertian diffuse material.
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// Create a metallic material.
    ///
    /// Fuzz values outside [0, 1] are clamped at construction.
    pub fn metal(albedo: Color, fuzz: f64) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Create a dielectric material with the given index of refraction.
    pub fn dielectric(refraction_index: f64) -> Self {
        Material::Dielectric { refraction_index }
    }

    /// Compute ray scattering for this material.
    ///
    /// Returns the attenuation color and the scattered ray, or `None` if the
    /// ray is absorbed.
    pub fn scatter(&self, r_in: &Ray, rec: &HitRecord) -> Option<(Color, Ray)> {
        match *self {
            Material::Lambertian { albedo } => scatter_lambertian(albedo, rec),
            Material::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, r_in, rec),
            Material::Dielectric { refraction_index } => {
                scatter_dielectric(refraction_index, r_in, rec)
            }
        }
    }
}

/// Lambertian diffuse scattering with cosine-weighted distribution.
fn scatter_lambertian(albedo: Color, rec: &HitRecord) -> Option<(Color, Ray)> {
    let mut scatter_direction = rec.normal + random::random_unit_vector();

    // Catch degenerate scatter direction (very close to zero)
    if near_zero(scatter_direction) {
        scatter_direction = rec.normal;
    }

    Some((albedo, Ray::new(rec.p, scatter_direction)))
}

/// Metallic reflection with optional surface roughness.
fn scatter_metal(albedo: Color, fuzz: f64, r_in: &Ray, rec: &HitRecord) -> Option<(Color, Ray)> {
    let reflected = reflect(r_in.direction, rec.normal);
    let reflected = reflected.normalize() + fuzz * random::random_unit_vector();

    // Fuzzed reflections that end up under the surface are absorbed
    if reflected.dot(rec.normal) <= 0.0 {
        return None;
    }

    Some((albedo, Ray::new(rec.p, reflected)))
}

/// Dielectric scattering, choosing between reflection and refraction.
fn scatter_dielectric(
    refraction_index: f64,
    r_in: &Ray,
    rec: &HitRecord,
) -> Option<(Color, Ray)> {
    // Glass doesn't attenuate light
    let attenuation = Color::ONE;

    let ri = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = r_in.direction.normalize();
    let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let cannot_refract = ri * sin_theta > 1.0;

    let direction = if cannot_refract || reflectance(cos_theta, ri) > random::random_f64() {
        reflect(unit_direction, rec.normal)
    } else {
        refract(unit_direction, rec.normal, ri)
    };

    Some((attenuation, Ray::new(rec.p, direction)))
}

/// True if every component of the vector is within 1e-8 of zero.
fn near_zero(v: DVec3) -> bool {
    const EPS: f64 = 1e-8;
    v.x.abs() < EPS && v.y.abs() < EPS && v.z.abs() < EPS
}

/// Reflect a vector off a surface using the law of reflection.
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through an interface using Snell's law.
fn refract(uv: DVec3, n: DVec3, etai_over_etat: f64) -> DVec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Compute Fresnel reflectance using Schlick's approximation.
fn reflectance(cosine: f64, refraction_index: f64) -> f64 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
