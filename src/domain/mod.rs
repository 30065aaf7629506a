// Domain layer: the product model and the ports the fetcher is built against.

pub mod model;
pub mod ports;
