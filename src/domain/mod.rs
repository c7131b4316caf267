//! Domain layer: the order aggregate and the ports payment adapters implement.

pub mod order;
pub mod ports;
