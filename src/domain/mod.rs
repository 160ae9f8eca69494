// Domain layer: element records and the repository port. No web framework types here.

pub mod model;
pub mod ports;
