//! Headless demo: renders a torus, a sphere and a wireframe to BMP files.
//!
//! Usage: `softrender [OPTIONS] [OUTPUT_DIR]` (see `--help`).
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=info`).

use std::f32::consts::PI;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use softrender::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use softrender::prelude::*;

/// Renders a torus, a sphere and a wireframe torus to BMP files.
#[derive(Parser, Debug)]
#[command(name = "softrender")]
#[command(about = "Headless CPU renderer demo")]
struct Cli {
    /// Directory the BMP files are written to
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
}

fn scene(aspect_ratio: f32) -> Scene {
    let mut camera = Camera::looking_at(Vec3::new(0.0, 1.5, 6.0), Vec3::ZERO);
    camera.set_projection(45.0, aspect_ratio, 0.1, 100.0);

    let light = Light::new(Vec3::new(4.0, 6.0, 8.0), Color::WHITE, 1.0);
    Scene::new(camera, light, Material::default())
}

fn render_to(
    path: &Path,
    settings: RenderSettings,
    mesh: &Mesh,
    model: &Mat4,
    scene: &Scene,
) -> std::io::Result<()> {
    let renderer = Renderer::new(settings);
    let mut framebuffer = renderer.create_framebuffer();
    let stats = renderer.draw_mesh(&mut framebuffer, mesh, model, scene);
    log::info!(
        "{}: {}/{} triangles drawn ({} culled)",
        mesh.name(),
        stats.drawn,
        stats.triangles,
        stats.culled
    );
    framebuffer.save_bmp(path)
}

fn run(output_dir: &Path, settings: RenderSettings) -> std::io::Result<()> {
    std::fs::create_dir_all(output_dir)?;

    let mut scene = scene(settings.aspect_ratio());

    let torus = generate_torus(1.5, 0.5, 64, 32);
    let tilt = Transform::new().rotate_x(PI / 3.0).rotate_y(PI / 8.0).to_matrix();

    scene.material = Material::colored(Color::new(0.9, 0.4, 0.2));
    render_to(
        &output_dir.join("torus.bmp"),
        settings.with_shading(ShadingMode::Phong),
        &torus,
        &tilt,
        &scene,
    )?;

    scene.material = Material::colored(Color::new(0.2, 0.5, 0.9));
    render_to(
        &output_dir.join("sphere.bmp"),
        settings.with_shading(ShadingMode::Gouraud),
        &generate_sphere(1.5, 48, 24),
        &Mat4::identity(),
        &scene,
    )?;

    render_to(
        &output_dir.join("wireframe.bmp"),
        settings.with_shading(ShadingMode::Wireframe),
        &generate_torus(1.5, 0.5, 24, 12),
        &tilt,
        &scene,
    )?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let settings = RenderSettings::default().with_size(cli.width, cli.height);

    match run(&cli.output_dir, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("rendering to {} failed: {}", cli.output_dir.display(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn output_dir_defaults_to_current_directory() {
        let cli = Cli::try_parse_from(["softrender"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!((cli.width, cli.height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }

    #[test]
    fn flags_are_not_taken_as_output_dir() {
        let err = Cli::try_parse_from(["softrender", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Cli::try_parse_from(["softrender", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = Cli::try_parse_from(["softrender", "--width", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn size_and_directory_are_parsed() {
        let cli = Cli::try_parse_from(["softrender", "--width", "320", "--height", "200", "out"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!((cli.width, cli.height), (320, 200));
    }
}
