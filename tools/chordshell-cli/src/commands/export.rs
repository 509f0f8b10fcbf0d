//! Export a song to PDF.

use std::path::{Path, PathBuf};

use chordshell_export::export_document;
use chordshell_scene::{CustomTask, Document, ExportStatus, SceneState};
use chordshell_settings::{AppSettings, SettingsCache};

pub async fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    show_log: bool,
    task_config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let cache = SettingsCache::new();
    let settings = AppSettings::load(&cache);

    let document = Document::from_file(&file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", file.display()))?;

    let mut scene = SceneState::new();
    scene.show_log = show_log;
    if let Some(config) = task_config {
        scene.custom_task = Some(task_from_config(config)?);
    }

    let output_path = output.unwrap_or_else(|| default_output(&file));

    println!("Exporting: {}", file.display());
    println!("  Config: {}", settings.config_label());
    if let Some(task) = &scene.custom_task {
        println!("  Task: {}", task.label);
    }
    match settings.effective_transpose() {
        Some(offset) => println!(
            "  Transpose: {} -> {} ({offset:+})",
            settings.transpose_from, settings.transpose_to
        ),
        None => println!("  Transpose: off"),
    }

    match export_document(&document, &settings, &mut scene).await {
        Ok(result) => {
            std::fs::write(&output_path, &result.data)?;
            println!("Export complete: {}", output_path.display());

            if result.status == ExportStatus::Warnings {
                println!("chordpro wrote messages: {}", result.log.display());
                if scene.show_log {
                    if let Ok(messages) = std::fs::read_to_string(&result.log) {
                        println!("{messages}");
                    }
                }
            }
            Ok(())
        }
        Err(_) => {
            // The cause sits in the scene's error slot; present it.
            let error = scene
                .alert_error
                .take()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "PDF creation error".to_string());
            Err(anyhow::anyhow!("{error}"))
        }
    }
}

/// Build the custom task for an extra config file. The file must exist
/// up front; a typo'd path should not surface as a chordpro failure
/// halfway through the run. The menu-style label is the file's base name.
fn task_from_config(config: PathBuf) -> anyhow::Result<CustomTask> {
    if !config.is_file() {
        anyhow::bail!("Task config not found: {}", config.display());
    }
    let label = config
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.display().to_string());
    Ok(CustomTask { label, config })
}

/// Default output location: the song's base name with a `.pdf` extension,
/// or `Export.pdf` when the source has no usable name.
fn default_output(file: &Path) -> PathBuf {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Export".to_string());
    file.with_file_name(format!("{stem}.pdf"))
}
