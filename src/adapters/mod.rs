// Adapters layer: bridges from external protocols to the domain ports.

pub mod http;
