//! Application Layer
//!
//! Window setup and the demo workspace hosting the data table.

pub mod application;
pub mod sample;
pub mod workspace;
