//! Chordshell Settings
//!
//! The persisted preferences record for the application and its store:
//! - **Notes:** The closed 12-note scale and accidental preferences used
//!   for transposition
//! - **Bookmarks:** Resolvable references to user-selected files outside
//!   the application's own storage
//! - **Model:** The versioned `AppSettings` record with its computed
//!   accessors (config label, transpose offset)
//! - **Store:** A JSON key-value cache with load/save under a fixed key
//!
//! One settings record exists per installation. It is loaded once at
//! startup (falling back to defaults when nothing is saved), mutated in
//! place by the action surface, and explicitly saved on demand.

pub mod bookmark;
pub mod model;
pub mod notes;
pub mod store;

pub use bookmark::*;
pub use model::*;
pub use notes::*;
pub use store::*;
