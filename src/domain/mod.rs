// Domain layer: run model and ports. Implementations live under adapters/.

pub mod model;
pub mod ports;
