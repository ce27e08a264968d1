use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use kinema::{CountingSink, FrameSink, JsonLinesSink, Scene, SceneConfig, tutorial};

#[derive(Parser, Debug)]
#[command(name = "kinema", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the tutorial scenes.
    List,
    /// Play a tutorial scene and write its frames as JSON lines.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Scene name (see `kinema list`).
    scene: String,

    /// Override the tick rate (frames per second).
    #[arg(long)]
    fps: Option<u32>,

    /// Output JSON-lines path. Frames are only counted when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Scene config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List => {
            for (name, _) in tutorial::SCENES {
                println!("{name}");
            }
            Ok(())
        }
        Command::Run(args) => cmd_run(args),
    }
}

fn load_config(args: &RunArgs) -> anyhow::Result<SceneConfig> {
    let mut cfg = match &args.config {
        Some(path) => SceneConfig::from_path(path)?,
        None => SceneConfig::default(),
    };
    if let Some(fps) = args.fps {
        cfg.fps = kinema::Fps::new(fps, 1)?;
    }
    Ok(cfg)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let scene_fn = tutorial::find(&args.scene).with_context(|| {
        format!(
            "unknown scene '{}' (run `kinema list` for the available scenes)",
            args.scene
        )
    })?;
    let cfg = load_config(&args)?;

    match &args.out {
        Some(path) => {
            let mut sink = JsonLinesSink::new(create_output(path)?);
            let frames = play(scene_fn, cfg, &mut sink)?;
            eprintln!("wrote {frames} frames to {}", path.display());
        }
        None => {
            let mut sink = CountingSink::new();
            let frames = play(scene_fn, cfg, &mut sink)?;
            eprintln!(
                "{}: {frames} frames, {:.3}s",
                args.scene,
                sink.last_time_s()
            );
        }
    }
    Ok(())
}

fn create_output(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(BufWriter::new(f))
}

fn play(
    scene_fn: tutorial::SceneFn,
    cfg: SceneConfig,
    sink: &mut dyn FrameSink,
) -> anyhow::Result<u64> {
    let mut scene = Scene::new(cfg, sink)?;
    scene_fn(&mut scene)?;
    let frames = scene.frames_emitted();
    scene.finish()?;
    Ok(frames)
}
