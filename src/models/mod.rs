// Module exports for models

pub mod breakdown;
pub mod target;
