//! Configuration sourced from `ZETTELKASTEN*` environment variables.

pub mod loader;
pub mod types;
