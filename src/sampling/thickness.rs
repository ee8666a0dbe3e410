use crate::Rgb8;

/// Linear intensity-to-stroke-width mapping.
///
/// `raw = floor((ceiling - I) * step / ceiling)` with `I` the truncated channel mean; the result is
/// `max(min_thickness, raw)`. Dark pixels approach `step`, pixels at or above `ceiling` fall back to
/// the floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThicknessModel {
    ceiling: i64,
    min_thickness: u32,
}

impl ThicknessModel {
    /// `ceiling` of `0` is treated as `1`.
    pub fn new(ceiling: u32, min_thickness: u32) -> Self {
        Self {
            ceiling: i64::from(ceiling.max(1)),
            min_thickness,
        }
    }

    /// Stroke-width floor.
    pub fn min_thickness(&self) -> u32 {
        self.min_thickness
    }

    /// Unfloored width; negative for intensities above the ceiling.
    pub fn raw(&self, color: Rgb8, step: u32) -> i64 {
        let intensity = i64::from(color.intensity());
        crate::foundation::math::floor_div((self.ceiling - intensity) * i64::from(step), self.ceiling)
    }

    /// Stroke width for `color` at `step`: [`ThicknessModel::raw`] clamped to the floor.
    pub fn thickness(&self, color: Rgb8, step: u32) -> u32 {
        let raw = self.raw(color, step);
        let floor = i64::from(self.min_thickness);
        raw.max(floor).min(i64::from(u32::MAX)) as u32
    }
}

impl Default for ThicknessModel {
    fn default() -> Self {
        Self::new(crate::DEFAULT_INTENSITY_CEILING, 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/thickness.rs"]
mod tests;
