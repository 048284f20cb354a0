use std::{f64::consts::PI, path::PathBuf};

use clap::Parser;
use log::{error, info};
use nalgebra::Vector3;

use phong_tracer::{
    obj, render::render, Aabb, Camera, Color, DirectionLight, Error, PhongShader, Plane,
    PointLight, ReflectiveShader, Sphere, World,
};

const PALETTE: [(f64, f64, f64); 4] = [
    (0.8, 0.3, 0.2),
    (0.2, 0.5, 0.8),
    (0.3, 0.7, 0.3),
    (0.8, 0.7, 0.2),
];

/// Render triangle meshes with Phong shading and shadows.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Wavefront OBJ file to render; repeat for several meshes. A sphere is
    /// rendered when none are given.
    #[arg(short, long = "mesh")]
    meshes: Vec<PathBuf>,
    #[arg(long, default_value_t = 640)]
    width: usize,
    #[arg(long, default_value_t = 480)]
    height: usize,
    /// Jittered rays per pixel.
    #[arg(short, long, default_value_t = 1)]
    samples: usize,
    /// Vertical field of view in degrees.
    #[arg(long, default_value_t = 45.0)]
    fov: f64,
    #[arg(long)]
    no_shadows: bool,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logger(verbose: bool) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn phong(diffuse: Color) -> PhongShader {
    PhongShader::new(diffuse, diffuse, Color::repeat(0.4), 40.0)
}

fn build_world(args: &Args) -> phong_tracer::Result<World> {
    let mut world = World::new();
    world.ambient_intensity = 0.15;
    world.enable_shadows = !args.no_shadows;
    world.background = Color::new(0.05, 0.05, 0.08);

    for (i, path) in args.meshes.iter().enumerate() {
        let mesh = obj::read_obj(path)?;
        let (r, g, b) = PALETTE[i % PALETTE.len()];
        world.add_surface(Box::new(mesh), Box::new(phong(Color::new(r, g, b))));
    }
    if args.meshes.is_empty() {
        world.add_surface(
            Box::new(Sphere::new(Vector3::zeros(), 1.0)),
            Box::new(phong(Color::new(0.8, 0.3, 0.2))),
        );
    }

    let bounds = world.bounds();
    if bounds.is_empty() {
        return Err(Error::EmptyScene);
    }
    let radius = scene_radius(&bounds);
    let center = bounds.center();

    world.add_surface(
        Box::new(Plane::new(
            Vector3::new(0.0, bounds.min.y, 0.0),
            Vector3::y(),
        )),
        Box::new(ReflectiveShader::new(
            Box::new(phong(Color::repeat(0.6))),
            0.3,
        )),
    );

    for (offset, intensity) in [
        (Vector3::new(2.0, 3.0, 2.0), 1.0),
        (Vector3::new(-3.0, 2.0, 1.0), 0.4),
    ] {
        let position = center + offset * radius;
        let d = offset.norm() * radius;
        world.add_light(PointLight::new(
            position,
            Color::repeat(1.0),
            4.0 * PI * d * d * intensity,
        ));
    }
    // Dim sky fill so surfaces facing away from both lamps are not flat.
    world.add_light(DirectionLight::new(
        Vector3::new(-1.0, 4.0, 2.0),
        Color::new(0.6, 0.7, 1.0),
        0.15,
    ));

    Ok(world)
}

fn scene_radius(bounds: &Aabb) -> f64 {
    (bounds.diagonal().norm() / 2.0).max(1e-3)
}

/// Places the camera above and in front of the scene so that its bounding
/// sphere fits the vertical field of view.
fn frame_camera(bounds: &Aabb, args: &Args) -> Camera {
    let center = bounds.center();
    let distance = scene_radius(bounds) / (args.fov.to_radians() / 2.0).sin();
    let position = center + Vector3::new(0.0, 0.35, 1.0).normalize() * distance;
    Camera::look_at(
        position,
        center,
        Vector3::y(),
        args.fov,
        args.width,
        args.height,
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logger(args.verbose)?;

    // Geometry errors leave nothing sensible to render.
    let world = build_world(&args).inspect_err(|e| error!("failed to build scene: {e}"))?;
    let bounds = world.bounds();
    info!(
        "scene: {} surfaces, bounds {:?} to {:?}",
        world.surfaces().len(),
        bounds.min.as_slice(),
        bounds.max.as_slice()
    );

    let camera = frame_camera(&bounds, &args);
    let frame = render(&world, &camera, args.samples, args.seed);
    frame.save_png(&args.output)?;
    info!("wrote {}", args.output.display());
    Ok(())
}
