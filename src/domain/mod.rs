// Domain layer: marker constants, run options and the filesystem port.

pub mod model;
pub mod ports;
