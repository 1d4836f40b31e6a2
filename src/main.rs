use clap::Parser;
use glam::DVec3;
use log::info;

mod camera;
mod cli;
mod hittable;
mod interval;
mod logger;
mod material;
mod output;
mod random;
mod ray;
mod sphere;

use camera::Camera;
use cli::Args;
use hittable::{Hittable, HittableList};
use logger::init_logger;
use material::Material;
use output::save_ppm;
use sphere::Sphere;

/// Create the book cover scene with random spheres
fn create_scene() -> HittableList {
    let mut world = HittableList::new();

    // Ground sphere
    let ground_material = Material::lambertian(DVec3::new(0.5, 0.5, 0.5));
    world.add(Hittable::Sphere(Sphere::new(
        DVec3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground_material,
    )));

    // Generate 22x22 grid of small spheres
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random::random_f64();
            let center = DVec3::new(
                a as f64 + 0.9 * random::random_f64(),
                0.2,
                b as f64 + 0.9 * random::random_f64(),
            );

            // Don't place spheres too close to the large feature spheres
            if (center - DVec3::new(4.0, 0.2, 0.0)).length() > 0.9 {
                let sphere_material = if choose_mat < 0.8 {
                    // Diffuse material
                    let albedo = random::random_color() * random::random_color();
                    Material::lambertian(albedo)
                } else if choose_mat < 0.95 {
                    // Metal material
                    let albedo = random::random_color_range(0.5, 1.0);
                    let fuzz = random::random_f64_range(0.0, 0.5);
                    Material::metal(albedo, fuzz)
                } else {
                    // Glass material
                    Material::dielectric(1.5)
                };

                world.add(Hittable::Sphere(Sphere::new(center, 0.2, sphere_material)));
            }
        }
    }

    // Three large feature spheres
    world.add(Hittable::Sphere(Sphere::new(
        DVec3::new(0.0, 1.0, 0.0),
        1.0,
        Material::dielectric(1.5),
    )));
    world.add(Hittable::Sphere(Sphere::new(
        DVec3::new(-4.0, 1.0, 0.0),
        1.0,
        Material::lambertian(DVec3::new(0.4, 0.2, 0.1)),
    )));
    world.add(Hittable::Sphere(Sphere::new(
        DVec3::new(4.0, 1.0, 0.0),
        1.0,
        Material::metal(DVec3::new(0.7, 0.6, 0.5), 0.0),
    )));

    world
}

/// Create the camera for the book cover shot
fn create_camera(args: &Args) -> Camera {
    let mut camera = Camera::new();
    camera.aspect_ratio = args.aspect_ratio;
    camera.image_width = args.width;
    camera.samples_per_pixel = args.samples_per_pixel;
    camera.max_depth = args.max_depth;
    camera.vfov = 20.0;
    camera.lookfrom = DVec3::new(13.0, 2.0, 3.0);
    camera.lookat = DVec3::new(0.0, 0.0, 0.0);
    camera.vup = DVec3::new(0.0, 1.0, 0.0);
    camera.defocus_angle = 0.6;
    camera.focus_dist = 10.0;
    camera
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("LumaPath - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Some(seed) = args.seed {
        info!("Seeding RNG with {}", seed);
        random::reseed(seed);
    }

    info!(
        "Image width: {}, samples per pixel: {}",
        args.width, args.samples_per_pixel
    );

    // Create the book cover scene with lots of random spheres
    let world = create_scene();

    // Create camera for the book cover shot
    let mut camera = create_camera(&args);

    // Render the image
    let pixels = camera.render(&world);

    // Save as ASCII PPM
    if let Err(e) = save_ppm(&args.output, &pixels, camera.image_width, camera.image_height()) {
        log::error!("Failed to save image to {}: {}", args.output, e);
        std::process::exit(1);
    }
}
