//! Simulate command: run the scene driver headless.

use crate::SimulateArgs;
use anyhow::{Context, Result, bail};
use std::time::Instant;
use tracing::{debug, info};
use xform_scene::{Scene, SceneConfig};

/// Runs the simulate command.
pub fn run(args: SimulateArgs, verbose: bool) -> Result<()> {
    let config = load_config(&args)?;
    if !(args.dt.is_finite() && args.dt >= 0.0) {
        bail!("--dt must be a finite, non-negative number of milliseconds");
    }

    let mut scene = Scene::from_config(&config).context("Failed to build scene")?;
    info!(
        entities = scene.len(),
        frames = args.frames,
        threads = rayon::current_num_threads(),
        "simulating"
    );

    let start = Instant::now();
    let mut time_ms = 0.0;
    let mut elapsed_ms = args.dt;
    for frame in 0..args.frames {
        let frame_start = Instant::now();
        time_ms += args.dt;
        scene
            .update(time_ms, elapsed_ms)
            .with_context(|| format!("Frame {frame} failed"))?;
        elapsed_ms = frame_start.elapsed().as_secs_f64() * 1000.0;
    }
    let total = start.elapsed();

    info!(
        "{} frames in {:.2?} ({:.3} ms/frame)",
        args.frames,
        total,
        total.as_secs_f64() * 1000.0 / args.frames.max(1) as f64
    );

    if args.dump {
        dump(&scene, verbose);
    }
    Ok(())
}

/// Loads the config file (or defaults) and applies command-line overrides.
fn load_config(args: &SimulateArgs) -> Result<SceneConfig> {
    let mut config = match &args.config {
        Some(path) => SceneConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(n) = args.entities {
        config.entity_count = n;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    debug!(?config, "scene config");
    Ok(config)
}

/// Prints the last frame's uniforms.
fn dump(scene: &Scene, verbose: bool) {
    let frame = scene.frame_uniforms();
    println!("view:{}", frame.view);
    println!("projection:{}", frame.projection);

    for (i, u) in scene.entity_uniforms().iter().enumerate() {
        println!();
        println!("entity {i}: color ({}, {}, {})", u.color.x, u.color.y, u.color.z);
        if verbose {
            println!("model:{}", u.model);
            println!("normal:{}", u.normal);
        } else {
            println!("model: [{}]", super::format_flat(&u.model));
        }
    }
}
