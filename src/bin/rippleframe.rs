use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

use rippleframe::{
    AnimationOpts, Fps, InkMode, RenderConfig, RowSampling, ShapeKind, SweepThreading,
};

#[derive(Parser, Debug)]
#[command(name = "rippleframe", version, about = "Ripple line-art animations from images")]
struct Cli {
    /// Log at DEBUG level.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sweep one or more images into an animation (GIF, video via ffmpeg, or a PNG directory).
    Render(RenderArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Print (or write) the default render configuration as JSON.
    Config(ConfigArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RowSamplingArg {
    EveryPixel,
    ScaleFactor,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum InkArg {
    Sampled,
    Black,
}

/// Render style flags; each one overrides the value from `--config`.
#[derive(Args, Debug, Default)]
struct StyleArgs {
    /// Render configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// circle, square, triangle, or parallel-lines.
    #[arg(long)]
    shape: Option<ShapeKind>,

    /// Integer upscale applied to the source image.
    #[arg(long)]
    scale_factor: Option<u32>,

    /// Convert sampled colors to gray.
    #[arg(long, default_value_t = false)]
    grayscale: bool,

    /// Lower bound on stroke width.
    #[arg(long)]
    min_thickness: Option<u32>,

    /// Intensity at and above which strokes get the minimum width.
    #[arg(long)]
    intensity_ceiling: Option<u32>,

    /// Segments per circle ring.
    #[arg(long)]
    angular_resolution: Option<u32>,

    /// Horizontal sampling stride for parallel lines.
    #[arg(long, value_enum)]
    row_sampling: Option<RowSamplingArg>,

    /// Stroke color source.
    #[arg(long, value_enum)]
    ink: Option<InkArg>,
}

impl StyleArgs {
    fn resolve(&self) -> anyhow::Result<RenderConfig> {
        let mut cfg = match &self.config {
            Some(path) => RenderConfig::from_path(path)?,
            None => RenderConfig::default(),
        };
        if let Some(shape) = self.shape {
            cfg.shape = shape;
        }
        if let Some(scale) = self.scale_factor {
            cfg.scale_factor = scale;
        }
        if self.grayscale {
            cfg.grayscale = true;
        }
        if let Some(t) = self.min_thickness {
            cfg.min_thickness = t;
        }
        if let Some(c) = self.intensity_ceiling {
            cfg.intensity_ceiling = c;
        }
        if let Some(n) = self.angular_resolution {
            cfg.angular_resolution = n;
        }
        if let Some(rs) = self.row_sampling {
            cfg.row_sampling = match rs {
                RowSamplingArg::EveryPixel => RowSampling::EveryPixel,
                RowSamplingArg::ScaleFactor => RowSampling::ScaleFactor,
            };
        }
        if let Some(ink) = self.ink {
            cfg.ink = match ink {
                InkArg::Sampled => InkMode::Sampled,
                InkArg::Black => InkMode::Black,
            };
        }
        Ok(cfg)
    }
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input images, in animation order.
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Output path: `.gif`, `.mp4`/`.mov`/`.mkv`, or a directory for PNG frames.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    style: StyleArgs,

    /// First (smallest) ring spacing.
    #[arg(long)]
    initial_step: Option<u32>,

    /// Largest ring spacing (inclusive).
    #[arg(long)]
    max_step: Option<u32>,

    /// Spacing increment between frames.
    #[arg(long)]
    step_increment: Option<u32>,

    /// Frames per second.
    #[arg(long, default_value_t = 10)]
    fps: u32,

    /// Audio track to mux (video output only); cut to the animation length.
    #[arg(long)]
    audio: Option<PathBuf>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Fail instead of replacing an existing output.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input image.
    image: PathBuf,

    /// Ring spacing.
    #[arg(long)]
    step: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = args.style.resolve()?;
    if let Some(n) = args.initial_step {
        cfg.initial_step = n;
    }
    if let Some(n) = args.max_step {
        cfg.max_step = n;
    }
    if let Some(n) = args.step_increment {
        cfg.step_increment = n;
    }

    let images = rippleframe::load_images(&args.images)?;
    let opts = AnimationOpts {
        fps: Fps::new(args.fps, 1)?,
        audio: args.audio,
        threading: SweepThreading {
            parallel: args.parallel,
            chunk_size: args.chunk_size,
            threads: args.threads,
        },
    };
    let mut sink = rippleframe::sink_for_path(&args.out, !args.no_overwrite);
    let stats = rippleframe::render_to_sink(&images, &cfg, &opts, sink.as_mut())?;

    eprintln!("wrote {} ({} frames)", args.out.display(), stats.frames_total);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = args.style.resolve()?;
    let image = rippleframe::load_image(&args.image)?;
    let frame = rippleframe::render_frame(&image, &cfg, args.step)?;
    rippleframe::write_png(&args.out, &frame, true)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let json = RenderConfig::default().to_json_pretty()?;
    match args.out {
        Some(path) => {
            rippleframe::ensure_parent_dir(&path)?;
            std::fs::write(&path, format!("{json}\n"))
                .with_context(|| format!("write config '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
