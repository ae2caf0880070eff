//! Optional templates that pre-populate new periodic notes.

pub mod loader;

pub use loader::load_template;
