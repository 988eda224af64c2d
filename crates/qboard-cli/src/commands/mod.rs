//! CLI command implementations.

pub mod common;
pub mod encode;
pub mod presets;
pub mod simulate;
pub mod validate;
pub mod version;
