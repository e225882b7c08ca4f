// Domain layer: device types and the rendering port. No I/O beyond `Write` sinks.

pub mod advanced_phone;
pub mod device;
pub mod media_player;
pub mod model;
pub mod phone;
pub mod ports;
pub mod tablet;
