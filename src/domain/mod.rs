// Domain layer: zodiac records, profiles and the ports (interfaces) the server adapters implement.

pub mod model;
pub mod ports;
