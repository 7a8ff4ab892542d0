// Domain layer: content models and ports (interfaces). No HTTP or runtime
// details here; adapters implement the ports.

pub mod model;
pub mod ports;
