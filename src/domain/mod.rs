// Domain layer: directory models and ports. No IO here.

pub mod model;
pub mod ports;
