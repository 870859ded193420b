// Domain layer: core models, the age classifier and ports (interfaces).

pub mod brackets;
pub mod model;
pub mod ports;
