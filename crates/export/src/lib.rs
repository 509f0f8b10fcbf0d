//! Chordshell Export Pipeline
//!
//! The seam between the application shell and the external **ChordPro**
//! toolchain. Parsing the song, transposing it and laying out the PDF all
//! happen in the `chordpro` executable; this crate only prepares its
//! invocation and collects the result:
//! - **Args:** Translate a settings snapshot into command-line arguments
//! - **Export:** The backend trait, the `chordpro` process backend, and
//!   the per-scene single-flight export entry point

pub mod args;
pub mod export;

pub use args::*;
pub use export::*;
