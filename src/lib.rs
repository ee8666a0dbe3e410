//! Rippleframe turns raster images into animated, ripple-style line art.
//!
//! A frame is built by walking concentric rings (circles, squares, triangles) or horizontal
//! scanlines over a blank white canvas. Each small segment of a ring is colored by the source pixel
//! underneath it, and its stroke width grows as that pixel gets darker. Re-rendering with a growing
//! ring spacing (the *step*) and playing the frames back gives the ripple animation.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: [`PixelSampler`] maps canvas coordinates back to source pixels
//! 2. **Generate**: [`ring_segments`] yields the [`Segment`]s of one ring for a [`ShapeKind`]
//! 3. **Render**: [`render_frame`] draws every ring of one frame into a [`FrameRGBA`]
//! 4. **Sweep**: [`run_sweep`] renders every image at every step, in canonical order
//! 5. **Encode** (optional): [`render_to_sink`] streams frames into a GIF, PNG sequence, or the
//!    system `ffmpeg` binary
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same image, config, and step always give byte-identical frames, and
//!   parallel sweeps match sequential ones.
//! - **Fail before drawing**: configuration and inputs are validated before any frame is rendered.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod encode;
mod foundation;
mod render;
mod sampling;
mod shapes;
mod sweep;

pub use assets::decode::{decode_image, load_image, load_images};
pub use assets::source::SourceImage;
pub use config::model::{
    DEFAULT_ANGULAR_RESOLUTION, DEFAULT_INTENSITY_CEILING, InkMode, RenderConfig, RowSampling,
    ShapeKind,
};
pub use foundation::core::{CanvasSize, Fps, FrameKey, Point, Rgb8, Vec2};
pub use foundation::error::{RippleError, RippleResult};
pub use render::canvas::Canvas;
pub use render::frame::FrameRGBA;
pub use render::pipeline::render_frame;
pub use sampling::sampler::PixelSampler;
pub use sampling::thickness::ThicknessModel;
pub use shapes::circle::CircleRing;
pub use shapes::lines::ScanlineRow;
pub use shapes::square::SquareRing;
pub use shapes::triangle::TriangleRing;
pub use shapes::{
    RingContext, RingSegments, Segment, StrokeStyle, max_ring_param, ring_params, ring_segments,
};
pub use sweep::controller::{FrameSequence, SweepStats, SweepThreading, run_sweep, run_sweep_with};
pub use sweep::plan::SweepPlan;
pub use sweep::stream::{AnimationOpts, render_to_sink};

pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use encode::gif::{GifSink, GifSinkOpts};
pub use encode::png_seq::{PngSequenceOpts, PngSequenceSink, write_png};
pub use encode::sink::{
    AudioInputConfig, FrameSink, InMemorySink, SinkConfig, ensure_parent_dir, sink_for_path,
};
