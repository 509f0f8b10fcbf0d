//! Chordshell Scene Model
//!
//! Defines the per-window state of the application:
//! - **Document:** The song text buffer with title/subtitle metadata
//!   extraction (the ChordPro language itself is handled by the external
//!   tool, not here)
//! - **State:** The transient scene state every open song window owns:
//!   last error, export status, log visibility, temporary file paths

pub mod document;
pub mod state;

pub use document::*;
pub use state::*;
