//! Step-size sweeps: frame ordering, validation, and (optionally parallel) frame production.

pub(crate) mod controller;
pub(crate) mod plan;
pub(crate) mod stream;
