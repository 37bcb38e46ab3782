#[macro_use]
mod macros;
mod registry_client;

pub use registry_client::*;
