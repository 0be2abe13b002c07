// Domain layer: the profile schema and the ports the renderer is written against.

pub mod model;
pub mod ports;
