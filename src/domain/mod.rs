// Domain layer: pricing tables, quote data and ports. No I/O here.

pub mod model;
pub mod ports;
