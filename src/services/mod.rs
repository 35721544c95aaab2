// Service exports
pub mod spatial;

pub use spatial::{SpatialClient, SpatialError};
