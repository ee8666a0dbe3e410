use std::path::Path;

use anyhow::Context;

use crate::{RippleResult, SourceImage};

/// Decode encoded image bytes (any format enabled in `image`) into a [`SourceImage`].
pub fn decode_image(bytes: &[u8]) -> RippleResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(SourceImage::from_dynamic(&dyn_img))
}

/// Read and decode an image file.
pub fn load_image(path: impl AsRef<Path>) -> RippleResult<SourceImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let img = decode_image(&bytes).map_err(|e| {
        crate::RippleError::Other(anyhow::anyhow!("decode image '{}': {e}", path.display()))
    })?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded source image"
    );
    Ok(img)
}

/// Load every path in order; fails on the first unreadable image.
pub fn load_images<P: AsRef<Path>>(paths: &[P]) -> RippleResult<Vec<SourceImage>> {
    paths.iter().map(load_image).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
