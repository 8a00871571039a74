// Domain layer: engine models, filter args and ports. No transport code here.

pub mod filters;
pub mod model;
pub mod ports;
