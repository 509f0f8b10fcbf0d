//! Translation of a settings snapshot into `chordpro` arguments.
//!
//! Pure: the builder never touches the filesystem beyond resolving the
//! bookmarks it was handed, and an unresolvable bookmark falls back the
//! same way the config label does.

use chordshell_scene::{CustomTask, ScenePaths};
use chordshell_settings::AppSettings;

/// Build the argument list for one `chordpro` run.
///
/// The source file is the last argument; everything before it is derived
/// from the settings snapshot taken when the export started.
pub fn build_arguments(
    settings: &AppSettings,
    custom_task: Option<&CustomTask>,
    paths: &ScenePaths,
) -> Vec<String> {
    let mut args = Vec::new();

    if settings.no_default_configs {
        args.push("--nodefaultconfigs".to_string());
    }

    if settings.use_additional_library {
        if let Some(library) = settings.custom_library.as_ref().and_then(|b| b.resolve().ok()) {
            args.push(format!("--lib={}", library.display()));
        }
    }

    // A resolvable custom config replaces the system config; otherwise
    // the system config identifier is passed through.
    let custom = if settings.use_custom_config {
        settings.custom_config.as_ref().and_then(|b| b.resolve().ok())
    } else {
        None
    };
    match custom {
        Some(path) => args.push(format!("--config={}", path.display())),
        None => args.push(format!("--config={}", settings.system_config)),
    }

    // A custom task's config is applied on top.
    if let Some(task) = custom_task {
        args.push(format!("--config={}", task.config.display()));
    }

    if settings.lyrics_only {
        args.push("--lyrics-only".to_string());
    }
    if settings.no_chord_grids {
        args.push("--no-chord-grids".to_string());
    }
    if settings.de_capo {
        args.push("--decapo".to_string());
    }

    if settings.transcode {
        args.push(format!("--transcode={}", settings.transcode_notation));
    }

    // Only an enabled, non-zero transposition reaches the tool.
    if let Some(offset) = settings.effective_transpose() {
        args.push(format!("--transpose={offset}"));
    }

    args.push(format!("--output={}", paths.export.display()));
    args.push(paths.source.display().to_string());

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use chordshell_scene::SceneState;
    use chordshell_settings::{Accidentals, FileBookmark, Note};
    use std::path::PathBuf;

    fn paths() -> ScenePaths {
        ScenePaths {
            source: PathBuf::from("/tmp/chordshell/Song.cho"),
            export: PathBuf::from("/tmp/chordshell/Song.pdf"),
            log: PathBuf::from("/tmp/chordshell/Song.log"),
        }
    }

    #[test]
    fn test_default_settings_pass_only_config_and_files() {
        let args = build_arguments(&AppSettings::default(), None, &paths());
        assert_eq!(
            args,
            vec![
                "--config=guitar",
                "--output=/tmp/chordshell/Song.pdf",
                "/tmp/chordshell/Song.cho",
            ]
        );
    }

    #[test]
    fn test_toggles_emit_their_flags() {
        let settings = AppSettings {
            no_default_configs: true,
            lyrics_only: true,
            no_chord_grids: true,
            de_capo: true,
            transcode: true,
            transcode_notation: "solfege".to_string(),
            ..Default::default()
        };
        let args = build_arguments(&settings, None, &paths());
        assert!(args.contains(&"--nodefaultconfigs".to_string()));
        assert!(args.contains(&"--lyrics-only".to_string()));
        assert!(args.contains(&"--no-chord-grids".to_string()));
        assert!(args.contains(&"--decapo".to_string()));
        assert!(args.contains(&"--transcode=solfege".to_string()));
    }

    #[test]
    fn test_transpose_argument_emission() {
        let mut settings = AppSettings {
            transpose_from: Note::C,
            transpose_to: Note::D,
            ..Default::default()
        };

        // Toggle off: no argument even though the notes differ.
        let args = build_arguments(&settings, None, &paths());
        assert!(!args.iter().any(|a| a.starts_with("--transpose")));

        settings.transpose = true;
        let args = build_arguments(&settings, None, &paths());
        assert!(args.contains(&"--transpose=2".to_string()));

        // Same key: toggle on but nothing to do.
        settings.transpose_to = Note::C;
        let args = build_arguments(&settings, None, &paths());
        assert!(!args.iter().any(|a| a.starts_with("--transpose")));

        // Flats spell the offset downward.
        settings.transpose_to = Note::D;
        settings.transpose_accidentals = Accidentals::Flats;
        let args = build_arguments(&settings, None, &paths());
        assert!(args.contains(&"--transpose=-10".to_string()));
    }

    #[test]
    fn test_unresolvable_custom_config_falls_back_to_system() {
        let settings = AppSettings {
            use_custom_config: true,
            custom_config: Some(FileBookmark::new("/gone/notes.json")),
            system_config: "ukulele".to_string(),
            ..Default::default()
        };
        let args = build_arguments(&settings, None, &paths());
        assert!(args.contains(&"--config=ukulele".to_string()));
    }

    #[test]
    fn test_resolvable_custom_config_is_used() {
        let dir = std::env::temp_dir().join("chordshell_test_args_config");
        std::fs::create_dir_all(&dir).unwrap();
        let config = dir.join("mine.json");
        std::fs::write(&config, "{}").unwrap();

        let settings = AppSettings {
            use_custom_config: true,
            custom_config: Some(FileBookmark::new(&config)),
            ..Default::default()
        };
        let args = build_arguments(&settings, None, &paths());
        assert!(args.contains(&format!("--config={}", config.display())));
        assert!(!args.contains(&"--config=guitar".to_string()));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_custom_task_config_is_appended_after_base_config() {
        let task = CustomTask {
            label: "Worship set".to_string(),
            config: PathBuf::from("/tasks/worship.json"),
        };
        let args = build_arguments(&AppSettings::default(), Some(&task), &paths());
        let base = args.iter().position(|a| a == "--config=guitar").unwrap();
        let extra = args
            .iter()
            .position(|a| a == "--config=/tasks/worship.json")
            .unwrap();
        assert!(extra > base);
    }

    #[test]
    fn test_source_is_last_argument() {
        let scene = SceneState::with_temporary_directory("/tmp/chordshell-args");
        let doc = chordshell_scene::Document::new("{title: Song}\n");
        let paths = scene.paths(Some(&doc));
        let args = build_arguments(&AppSettings::default(), None, &paths);
        assert_eq!(args.last().unwrap(), &paths.source.display().to_string());
    }
}
