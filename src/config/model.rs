use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{RippleError, RippleResult};

/// Normalization constant of the intensity-to-thickness formula used by most ripple variants.
///
/// Intensities above this value produce a negative raw thickness, which is then floored by
/// [`RenderConfig::min_thickness`].
pub const DEFAULT_INTENSITY_CEILING: u32 = 225;

/// Number of angular subdivisions of one circular ring.
pub const DEFAULT_ANGULAR_RESOLUTION: u32 = 360;

/// Geometric family drawn by the frame renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Concentric circles around the canvas center.
    #[default]
    Circle,
    /// Concentric axis-aligned squares around the canvas center.
    Square,
    /// Concentric upward-pointing equilateral triangles.
    Triangle,
    /// Horizontal scanlines spaced by the step size.
    ParallelLines,
}

impl ShapeKind {
    /// All variants, in declaration order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::ParallelLines,
    ];

    /// Stable kebab-case name (matches the JSON representation).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::ParallelLines => "parallel-lines",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = RippleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" | "circular" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            "triangle" | "triangular" => Ok(Self::Triangle),
            "parallel-lines" | "parallel_lines" | "lines" => Ok(Self::ParallelLines),
            other => Err(RippleError::config(format!("unknown shape '{other}'"))),
        }
    }
}

/// Horizontal sample stride of the parallel-lines variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowSampling {
    /// One sample (and one segment) per canvas pixel.
    #[default]
    EveryPixel,
    /// One sample per source pixel, i.e. every `scale_factor` canvas pixels.
    ScaleFactor,
}

/// Stroke color policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InkMode {
    /// Stroke with the sampled source color.
    #[default]
    Sampled,
    /// Stroke in black; only the thickness follows the source image.
    Black,
}

/// Immutable sweep and style parameters for one run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// First step size of the sweep.
    pub initial_step: u32,
    /// Last step size (inclusive) of the sweep.
    pub max_step: u32,
    /// Increment between consecutive step sizes.
    pub step_increment: u32,
    /// Integer output resolution multiplier.
    pub scale_factor: u32,
    /// Desaturate sampled colors.
    pub grayscale: bool,
    /// Stroke-width floor.
    pub min_thickness: u32,
    /// Geometric family.
    pub shape: ShapeKind,
    /// Normalization constant of the thickness formula.
    pub intensity_ceiling: u32,
    /// Angular subdivisions per circle.
    pub angular_resolution: u32,
    /// Parallel-lines horizontal stride.
    pub row_sampling: RowSampling,
    /// Stroke color policy.
    pub ink: InkMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            initial_step: 5,
            max_step: 20,
            step_increment: 1,
            scale_factor: 2,
            grayscale: false,
            min_thickness: 1,
            shape: ShapeKind::Circle,
            intensity_ceiling: DEFAULT_INTENSITY_CEILING,
            angular_resolution: DEFAULT_ANGULAR_RESOLUTION,
            row_sampling: RowSampling::EveryPixel,
            ink: InkMode::Sampled,
        }
    }
}

impl RenderConfig {
    /// Default configuration for the given shape.
    pub fn for_shape(shape: ShapeKind) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// Set the sweep bounds.
    pub fn with_sweep(mut self, initial_step: u32, max_step: u32, step_increment: u32) -> Self {
        self.initial_step = initial_step;
        self.max_step = max_step;
        self.step_increment = step_increment;
        self
    }

    /// Set the output resolution multiplier.
    pub fn with_scale_factor(mut self, scale_factor: u32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Enable or disable grayscale sampling.
    pub fn with_grayscale(mut self, grayscale: bool) -> Self {
        self.grayscale = grayscale;
        self
    }

    /// Set the stroke-width floor.
    pub fn with_min_thickness(mut self, min_thickness: u32) -> Self {
        self.min_thickness = min_thickness;
        self
    }

    /// Set the thickness normalization constant.
    pub fn with_intensity_ceiling(mut self, ceiling: u32) -> Self {
        self.intensity_ceiling = ceiling;
        self
    }

    /// Set the parallel-lines stride policy.
    pub fn with_row_sampling(mut self, row_sampling: RowSampling) -> Self {
        self.row_sampling = row_sampling;
        self
    }

    /// Set the stroke color policy.
    pub fn with_ink(mut self, ink: InkMode) -> Self {
        self.ink = ink;
        self
    }

    /// Reject configurations that cannot produce a meaningful animation.
    pub fn validate(&self) -> RippleResult<()> {
        if self.initial_step == 0 {
            return Err(RippleError::config("initial_step must be >= 1"));
        }
        if self.step_increment == 0 {
            return Err(RippleError::config("step_increment must be >= 1"));
        }
        if self.initial_step > self.max_step {
            return Err(RippleError::config(format!(
                "initial_step ({}) must be <= max_step ({})",
                self.initial_step, self.max_step
            )));
        }
        if self.scale_factor == 0 {
            return Err(RippleError::config("scale_factor must be >= 1"));
        }
        if self.min_thickness == 0 {
            return Err(RippleError::config("min_thickness must be >= 1"));
        }
        if self.intensity_ceiling == 0 {
            return Err(RippleError::config("intensity_ceiling must be >= 1"));
        }
        if self.angular_resolution < 3 {
            return Err(RippleError::config("angular_resolution must be >= 3"));
        }
        Ok(())
    }

    /// Number of frames the sweep produces per image, or `0` when the bounds are inverted.
    pub fn frames_per_image(&self) -> u64 {
        if self.step_increment == 0 || self.initial_step > self.max_step {
            return 0;
        }
        u64::from((self.max_step - self.initial_step) / self.step_increment) + 1
    }

    /// Parse a JSON configuration; missing keys take their defaults.
    pub fn from_json_str(s: &str) -> RippleResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| RippleError::serde(e.to_string()))?;
        Ok(cfg)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> RippleResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON representation.
    pub fn to_json_pretty(&self) -> RippleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RippleError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
