//! Block scaffolding
//!
//! Plans the output layout for a block and writes its rendered files.

pub mod generator;

pub use generator::{plan, BlockGenerator, GeneratedFile, PlannedFile};
