//! Core library for `zk`: inbox notes and periodic (daily/weekly) notes
//! inside a Zettelkasten directory.

pub mod clock;
pub mod config;
pub mod editor;
pub mod error;
pub mod links;
pub mod notes;
pub mod periodic;
pub mod templates;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::loader::{ConfigError, ConfigLoader};
pub use config::types::{Config, EditorConfig, LoggingConfig, PathConfig};
pub use editor::{EditorError, Launcher, SystemEditor};
pub use error::ZkError;
pub use notes::{Note, NoteError};
pub use periodic::{Period, PeriodicNote};
