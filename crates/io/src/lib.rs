// File I/O operations

pub mod read;
pub mod sample;
pub mod write;
