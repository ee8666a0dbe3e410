//! Render configuration: sweep bounds, shape selection, and stroke style.

pub(crate) mod model;
