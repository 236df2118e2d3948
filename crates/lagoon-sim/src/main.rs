//! Headless scene driver.
//!
//! Loads (or populates) an aquarium, steps the simulation at a fixed delta,
//! and optionally saves the result. Useful for soak-testing swim behavior
//! and for regenerating `.aqua` files without opening the editor shell.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use lagoon_scene::logging::{LoggingConfig, init_logging};
use lagoon_scene::sprite::BACKGROUND_FILE;
use lagoon_scene::{DrawList, ItemKind, Scene, Sprite, SpriteBank};

const USAGE: &str = "usage: lagoon-sim [--load FILE] [--save FILE] [--assets DIR] \
[--steps N] [--dt SECONDS] [--seed N]";

struct Args {
    load: Option<PathBuf>,
    save: Option<PathBuf>,
    assets: Option<PathBuf>,
    steps: u32,
    dt: f64,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        load: None,
        save: None,
        assets: None,
        steps: 300,
        dt: 0.03,
        seed: None,
    };

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        let mut value = |name: &str| {
            argv.next().with_context(|| format!("{name} needs a value\n{USAGE}"))
        };
        match arg.as_str() {
            "--load" => args.load = Some(PathBuf::from(value("--load")?)),
            "--save" => args.save = Some(PathBuf::from(value("--save")?)),
            "--assets" => args.assets = Some(PathBuf::from(value("--assets")?)),
            "--steps" => args.steps = value("--steps")?.parse().context("--steps must be an integer")?,
            "--dt" => args.dt = value("--dt")?.parse().context("--dt must be a number")?,
            "--seed" => args.seed = Some(value("--seed")?.parse().context("--seed must be an integer")?),
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => bail!("unknown argument {other:?}\n{USAGE}"),
        }
    }

    Ok(args)
}

/// Loads real art from the asset directory, or falls back to placeholder
/// sprites so the sim stays runnable in a bare checkout.
fn build_scene(assets: Option<&PathBuf>) -> Result<Scene> {
    if let Some(dir) = assets {
        let bank = SpriteBank::load_dir(dir)?;
        let background = Sprite::load(dir.join(BACKGROUND_FILE))?;
        return Ok(Scene::new(Arc::new(background), bank));
    }

    log::warn!("no --assets directory given, using placeholder sprites");
    let mut bank = SpriteBank::new();
    for kind in ItemKind::ALL {
        bank.insert(kind, Arc::new(Sprite::solid(64, 64)));
    }
    Ok(Scene::new(Arc::new(Sprite::solid(1024, 800)), bank))
}

fn main() -> Result<()> {
    init_logging(LoggingConfig {
        env_filter: Some("info".into()),
        ..LoggingConfig::default()
    });

    let args = parse_args()?;
    let mut scene = build_scene(args.assets.as_ref())?;

    if let Some(seed) = args.seed {
        scene.reseed(seed);
    }

    match &args.load {
        Some(path) => {
            scene
                .load(path)
                .with_context(|| format!("loading {}", path.display()))?;
            log::info!("loaded {} items from {}", scene.items().len(), path.display());
        }
        None => {
            // Default population: one of everything, like a fresh editor session.
            for kind in ItemKind::ALL {
                scene.spawn(kind);
            }
        }
    }

    log::info!(
        "stepping {} items for {} frames at dt={}s in a {}x{} tank",
        scene.items().len(),
        args.steps,
        args.dt,
        scene.width(),
        scene.height(),
    );

    for _ in 0..args.steps {
        scene.update(args.dt);
    }

    let mut frame = DrawList::new();
    scene.draw(&mut frame);
    log::info!("final frame records {} draw commands", frame.items().len());

    if let Some(path) = &args.save {
        scene
            .save(path)
            .with_context(|| format!("saving {}", path.display()))?;
        log::info!("saved scene to {}", path.display());
    }

    Ok(())
}
