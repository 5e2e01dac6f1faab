// Domain layer: process model and the interruption port. No runtime dependencies.

pub mod model;
pub mod ports;
