// Domain layer: entity shapes and ports (interfaces). No transport details here.

pub mod model;
pub mod ports;
