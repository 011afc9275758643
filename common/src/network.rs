pub mod ports;
pub mod range;
pub mod result;
pub mod target;
