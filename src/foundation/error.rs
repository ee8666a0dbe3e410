/// Convenience result type used across rippleframe.
pub type RippleResult<T> = Result<T, RippleError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum RippleError {
    /// Invalid render configuration or input set, rejected before any frame is drawn.
    #[error("configuration error: {0}")]
    Config(String),

    /// A frame could not be constructed; the whole sweep is aborted.
    #[error("render failure for image {image_index} at step {step}: {reason}")]
    Render {
        /// Index of the source image in the sweep input.
        image_index: usize,
        /// Step size of the failing frame.
        step: u32,
        /// Human-readable cause.
        reason: String,
    },

    /// Errors raised by frame sinks and external encoders.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RippleError {
    /// Build a [`RippleError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RippleError::Render`] value.
    pub fn render(image_index: usize, step: u32, reason: impl Into<String>) -> Self {
        Self::Render {
            image_index,
            step,
            reason: reason.into(),
        }
    }

    /// Build a [`RippleError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`RippleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for errors that were raised during up-front validation.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
