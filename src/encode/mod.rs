//! Animation sinks.
//!
//! Sinks consume finished frames in canonical sweep order and are driven by
//! [`render_to_sink`](crate::render_to_sink).

/// `ffmpeg`-based sink (MP4 and friends via system `ffmpeg`).
pub mod ffmpeg;
/// Animated GIF sink.
pub mod gif;
/// Numbered PNG files in a directory.
pub mod png_seq;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
