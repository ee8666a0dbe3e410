pub(crate) mod sampler;
pub(crate) mod thickness;
