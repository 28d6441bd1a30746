// Domain layer: request/address/command models, the service catalog and the
// ports (traits) the core and adapters implement.

pub mod model;
pub mod ports;

pub mod services;
