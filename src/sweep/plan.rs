use crate::{CanvasSize, FrameKey, RenderConfig, RippleError, RippleResult, SourceImage};

/// Widest canvas row (in bytes) the rasterizer accepts.
const MAX_ROW_BYTES: u64 = i32::MAX as u64;

/// The step values of one sweep, in ascending order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepPlan {
    steps: Vec<u32>,
}

impl SweepPlan {
    /// Validate `config` and expand `initial_step..=max_step` by `step_increment`.
    pub fn new(config: &RenderConfig) -> RippleResult<Self> {
        config.validate()?;
        let steps = (config.initial_step..=config.max_step)
            .step_by(config.step_increment as usize)
            .collect();
        Ok(Self { steps })
    }

    /// Step sizes in ascending order.
    pub fn steps(&self) -> &[u32] {
        &self.steps
    }

    /// Frames per image.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` when the plan holds no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Canonical frame order for `image_count` images: image index outer, step inner.
    pub fn jobs(&self, image_count: usize) -> impl Iterator<Item = FrameKey> + '_ {
        (0..image_count).flat_map(move |image_index| {
            self.steps
                .iter()
                .map(move |&step| FrameKey { image_index, step })
        })
    }
}

/// Check every input image up front; returns the scaled canvas size of each.
pub(crate) fn validate_images(
    images: &[SourceImage],
    scale_factor: u32,
) -> RippleResult<Vec<CanvasSize>> {
    if images.is_empty() {
        return Err(RippleError::config("at least one source image is required"));
    }
    images
        .iter()
        .enumerate()
        .map(|(idx, img)| {
            let size = CanvasSize::scaled(img.width(), img.height(), scale_factor)
                .map_err(|e| RippleError::config(format!("image {idx}: {e}")))?;
            if u64::from(size.width) * 4 > MAX_ROW_BYTES {
                return Err(RippleError::config(format!(
                    "image {idx}: scaled width {} exceeds the rasterizer limit",
                    size.width
                )));
            }
            Ok(size)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/sweep/plan.rs"]
mod tests;
