use anyhow::Context;
use clap::Parser;
use log::info;

use raytracer::{cli::Args, FrameBuffer, Resolution, SceneFile};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let mut scene_file = match &args.scene {
        Some(path) => SceneFile::load(path)
            .with_context(|| format!("couldn't load scene {}", path.display()))?,
        None => {
            info!("no scene file given, rendering the built-in scene");
            SceneFile::default()
        }
    };

    if args.width.is_some() || args.height.is_some() {
        scene_file.resolution = Resolution::new(
            args.width.unwrap_or(scene_file.resolution.width()),
            args.height.unwrap_or(scene_file.resolution.height()),
        )?;
    }

    let (camera, scene) = scene_file.build();

    let pixels = if args.threads > 1 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build()?
            .install(|| camera.render_parallel(&scene))
    } else {
        camera.render(&scene)
    };

    FrameBuffer::from_pixels(camera.resolution(), &pixels)?
        .save_png(&args.output)
        .with_context(|| format!("couldn't write {}", args.output.display()))?;

    Ok(())
}
