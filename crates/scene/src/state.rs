//! Per-window scene state.
//!
//! Every open song window owns one `SceneState`: a passive bag of
//! transient values the action surface reads and writes under a
//! single-writer discipline. The only computed behavior is file naming,
//! which combines the scene's temporary directory with a name derived
//! from the current document.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use chordshell_common::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Status of the last export in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportStatus {
    /// No export has run yet.
    #[default]
    Idle,
    /// The tool produced a PDF without messages.
    Clean,
    /// The tool produced a PDF but wrote diagnostics to the log.
    Warnings,
    /// PDF creation failed.
    Failed,
}

/// An extra named config the user can run a document through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTask {
    /// Menu label.
    pub label: String,
    /// The config file the task applies.
    pub config: PathBuf,
}

/// State of the last rendered preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    /// The rendered PDF, when one exists.
    pub data: Option<Vec<u8>>,
    /// The document changed since the preview was rendered.
    pub outdated: bool,
}

/// The derived file locations for one export run.
///
/// Derived once per run so that source, export and log all share the same
/// base name even for untitled documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenePaths {
    /// The ChordPro source file.
    pub source: PathBuf,
    /// The exported PDF.
    pub export: PathBuf,
    /// The tool's message log.
    pub log: PathBuf,
}

/// The state of one open song window.
#[derive(Debug, Default)]
pub struct SceneState {
    /// An error that should be shown to the user.
    pub alert_error: Option<AppError>,
    /// Whether the log view is open.
    pub show_log: bool,
    /// Status of the last export.
    pub export_status: ExportStatus,
    /// The temporary directory for processing files.
    temporary_directory: PathBuf,
    /// The optional custom task to run.
    pub custom_task: Option<CustomTask>,
    /// State of the last rendered preview.
    pub preview: PreviewState,
    /// An export is currently running for this scene.
    export_in_flight: bool,
}

impl SceneState {
    /// Create the state for a new window.
    pub fn new() -> Self {
        Self {
            temporary_directory: std::env::temp_dir().join("chordshell"),
            ..Default::default()
        }
    }

    /// Create a state with an explicit temporary directory (tests).
    pub fn with_temporary_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            temporary_directory: dir.into(),
            ..Default::default()
        }
    }

    /// The temporary directory for processing files. Fixed per scene.
    pub fn temporary_directory(&self) -> &PathBuf {
        &self.temporary_directory
    }

    /// The file name for the current document.
    ///
    /// Subtitle and title joined with `" - "`, subtitle first and omitted
    /// when absent. A document without a title (or no document at all)
    /// gets a freshly generated unique identifier, so the name is always
    /// non-empty and collision-resistant.
    pub fn song_file_name(&self, document: Option<&Document>) -> String {
        if let Some(title) = document.and_then(Document::title) {
            match document.and_then(Document::subtitle) {
                Some(subtitle) => format!("{subtitle} - {title}"),
                None => title,
            }
        } else {
            unique_id()
        }
    }

    /// Derive the source/export/log paths for one export run.
    pub fn paths(&self, document: Option<&Document>) -> ScenePaths {
        let name = self.song_file_name(document);
        ScenePaths {
            source: self.temporary_directory.join(format!("{name}.cho")),
            export: self.temporary_directory.join(format!("{name}.pdf")),
            log: self.temporary_directory.join(format!("{name}.log")),
        }
    }

    /// Mark the start of an export.
    ///
    /// One export may be in flight per scene; a second request is
    /// rejected rather than queued or superseded. Any stored preview is
    /// stale from this point until the run delivers a fresh payload.
    pub fn begin_export(&mut self) -> AppResult<()> {
        if self.export_in_flight {
            return Err(AppError::ExportInProgress);
        }
        self.export_in_flight = true;
        self.preview.outdated = true;
        Ok(())
    }

    /// Record a finished export: the rendered payload lands in the
    /// scene alongside the status.
    pub fn finish_export(&mut self, status: ExportStatus, data: Vec<u8>) {
        self.export_in_flight = false;
        self.export_status = status;
        self.preview.data = Some(data);
        self.preview.outdated = false;
    }

    /// Record a failed export. The error lands in the scene's error slot
    /// for the surface to present; it is never dropped here.
    pub fn fail_export(&mut self, error: AppError) {
        self.export_in_flight = false;
        self.export_status = ExportStatus::Failed;
        self.alert_error = Some(error);
    }

    pub fn export_in_flight(&self) -> bool {
        self.export_in_flight
    }
}

/// Generate a unique identifier without an external dependency.
///
/// Time-seeded with a process-wide counter mixed in so back-to-back calls
/// differ even within one timer tick.
fn unique_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        ^ ((COUNTER.fetch_add(1, Ordering::Relaxed) as u128) << 64);
    format!(
        "{:08x}-{:04x}-4{:03x}-{:04x}-{:012x}",
        (seed & 0xFFFFFFFF) as u32,
        ((seed >> 32) & 0xFFFF) as u16,
        ((seed >> 48) & 0x0FFF) as u16,
        (((seed >> 60) & 0x3F) | 0x80) as u16 | (((seed >> 66) & 0x3FF) as u16) << 6,
        (seed >> 76) & 0xFFFFFFFFFFFF,
    )
}
