// Domain layer: document model, patch report and the ports the engine runs against.

pub mod model;
pub mod ports;
