//! Integration test for the process backend, using a stand-in script
//! instead of the real chordpro installation.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use chordshell_export::{ChordProBackend, ExportBackend, ExportJob};
use chordshell_scene::{Document, ExportStatus, SceneState};
use chordshell_settings::AppSettings;

/// Write a small shell script that behaves like chordpro: it finds the
/// `--output=` argument, writes a PDF header there, and optionally
/// complains on stderr.
fn fake_chordpro(dir: &PathBuf, noisy: bool) -> PathBuf {
    let path = dir.join("fake-chordpro");
    let warn = if noisy {
        "echo 'Unknown chord: Xsus99' >&2"
    } else {
        ":"
    };
    let script = format!(
        "#!/bin/sh\n\
         if [ \"$1\" = \"--version\" ]; then echo 'fake 1.0'; exit 0; fi\n\
         out=\"\"\n\
         for arg in \"$@\"; do\n\
           case \"$arg\" in --output=*) out=\"${{arg#--output=}}\";; esac\n\
         done\n\
         {warn}\n\
         printf '%%PDF-1.4 fake body' > \"$out\"\n"
    );
    std::fs::write(&path, script).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chordshell_it_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn clean_run_produces_pdf_and_empty_log() {
    let dir = test_dir("clean");
    let tool = fake_chordpro(&dir, false);
    let backend = ChordProBackend::with_executable(tool.display().to_string());
    assert!(backend.is_available());

    let document = Document::new("{title: Song}\n[C]la la\n");
    let scene = SceneState::with_temporary_directory(dir.join("tmp"));
    let job = ExportJob {
        text: document.text.clone(),
        settings: AppSettings::default(),
        custom_task: None,
        paths: scene.paths(Some(&document)),
    };

    let output = backend.export(&job).unwrap();
    assert!(output.data.starts_with(b"%PDF"));
    assert_eq!(output.status, ExportStatus::Clean);

    // The source was written for the tool, the log exists and is empty.
    assert_eq!(std::fs::read_to_string(&job.paths.source).unwrap(), document.text);
    assert_eq!(std::fs::read_to_string(&job.paths.log).unwrap().trim(), "");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn noisy_run_reports_warnings_and_keeps_the_log() {
    let dir = test_dir("noisy");
    let tool = fake_chordpro(&dir, true);
    let backend = ChordProBackend::with_executable(tool.display().to_string());

    let document = Document::new("{title: Song}\n");
    let scene = SceneState::with_temporary_directory(dir.join("tmp"));
    let job = ExportJob {
        text: document.text.clone(),
        settings: AppSettings::default(),
        custom_task: None,
        paths: scene.paths(Some(&document)),
    };

    let output = backend.export(&job).unwrap();
    assert_eq!(output.status, ExportStatus::Warnings);
    let log = std::fs::read_to_string(&job.paths.log).unwrap();
    assert!(log.contains("Unknown chord"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_executable_is_unavailable() {
    let backend = ChordProBackend::with_executable("/nonexistent/chordpro");
    assert!(!backend.is_available());
}
