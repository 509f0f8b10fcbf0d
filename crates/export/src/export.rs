//! Export job management and the `chordpro` process backend.

use std::path::PathBuf;
use std::process::Command;

use chordshell_common::error::{AppError, AppResult};
use chordshell_scene::{CustomTask, Document, ExportStatus, ScenePaths, SceneState};
use chordshell_settings::AppSettings;

use crate::args::build_arguments;

/// One export run, fully described.
///
/// Carries a snapshot of the settings so that edits made while the tool
/// runs do not affect the run.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// The ChordPro source text.
    pub text: String,

    /// Settings snapshot taken when the export started.
    pub settings: AppSettings,

    /// The scene's custom task, if one is active.
    pub custom_task: Option<CustomTask>,

    /// Source/export/log locations for this run.
    pub paths: ScenePaths,
}

/// The result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportOutput {
    /// The PDF payload.
    pub data: Vec<u8>,

    /// Whether the tool wrote diagnostics while producing it.
    pub status: ExportStatus,

    /// The message log for this run. Needed by callers because untitled
    /// documents get a fresh random name on every path derivation.
    pub log: PathBuf,
}

/// Trait for export backends (the real tool, fakes in tests).
pub trait ExportBackend: Send {
    /// Execute the export job.
    fn export(&self, job: &ExportJob) -> AppResult<ExportOutput>;

    /// Check if this backend is available on the system.
    fn is_available(&self) -> bool;

    /// Backend name.
    fn name(&self) -> &str;
}

/// Backend that runs the external `chordpro` executable.
pub struct ChordProBackend {
    executable: String,
}

impl ChordProBackend {
    pub fn new() -> Self {
        Self {
            executable: "chordpro".to_string(),
        }
    }

    /// Use a specific executable instead of `chordpro` from PATH.
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl Default for ChordProBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportBackend for ChordProBackend {
    fn export(&self, job: &ExportJob) -> AppResult<ExportOutput> {
        if let Some(parent) = job.paths.source.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&job.paths.source, &job.text)?;

        let args = build_arguments(&job.settings, job.custom_task.as_ref(), &job.paths);
        tracing::debug!(executable = %self.executable, ?args, "Running chordpro");

        let output = Command::new(&self.executable)
            .args(&args)
            .output()
            .map_err(|e| {
                AppError::pdf_creation(format!("could not run {}: {e}", self.executable))
            })?;

        // The tool's messages go to the scene's log file, empty or not,
        // so the log view always has something current to show.
        let messages = String::from_utf8_lossy(&output.stderr).into_owned();
        std::fs::write(&job.paths.log, &messages)?;

        if !output.status.success() {
            let detail = messages
                .lines()
                .last()
                .unwrap_or("chordpro exited with an error")
                .to_string();
            return Err(AppError::pdf_creation(detail));
        }

        let data = std::fs::read(&job.paths.export).map_err(|_| {
            AppError::pdf_creation("chordpro reported success but produced no PDF")
        })?;

        let status = if messages.trim().is_empty() {
            ExportStatus::Clean
        } else {
            ExportStatus::Warnings
        };

        Ok(ExportOutput {
            data,
            status,
            log: job.paths.log.clone(),
        })
    }

    fn is_available(&self) -> bool {
        Command::new(&self.executable)
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    fn name(&self) -> &str {
        "chordpro"
    }
}

/// Export a document with the external ChordPro tool.
///
/// The main entry point for the export action: takes the focused document
/// and the scene, snapshots the settings, and writes the outcome back
/// into the scene. One export may run per scene at a time; overlapping
/// requests are rejected with [`AppError::ExportInProgress`] and leave
/// the running export's state alone.
pub async fn export_document(
    document: &Document,
    settings: &AppSettings,
    scene: &mut SceneState,
) -> AppResult<ExportOutput> {
    export_with_backend(&ChordProBackend::new(), document, settings, scene).await
}

/// Export through an explicit backend. Split out so tests can substitute
/// a fake for the external tool.
pub async fn export_with_backend(
    backend: &dyn ExportBackend,
    document: &Document,
    settings: &AppSettings,
    scene: &mut SceneState,
) -> AppResult<ExportOutput> {
    scene.begin_export()?;

    let job = ExportJob {
        text: document.text.clone(),
        settings: settings.clone(),
        custom_task: scene.custom_task.clone(),
        paths: scene.paths(Some(document)),
    };

    tracing::info!(
        source = %job.paths.source.display(),
        config = %job.settings.config_label(),
        "Starting export"
    );

    if !backend.is_available() {
        let error = AppError::ExecutableNotFound {
            name: backend.name().to_string(),
        };
        scene.fail_export(AppError::ExecutableNotFound {
            name: backend.name().to_string(),
        });
        return Err(error);
    }

    match backend.export(&job) {
        Ok(output) => {
            tracing::info!(
                bytes = output.data.len(),
                status = ?output.status,
                "Export complete"
            );
            scene.finish_export(output.status, output.data.clone());
            Ok(output)
        }
        Err(error) => {
            tracing::warn!("Export failed: {error}");
            let summary = AppError::pdf_creation(error.to_string());
            scene.fail_export(error);
            Err(summary)
        }
    }
}
