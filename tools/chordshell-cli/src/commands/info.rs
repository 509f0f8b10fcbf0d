//! Show song metadata and the settings that would apply to it.

use std::path::PathBuf;

use chordshell_scene::{Document, SceneState};
use chordshell_settings::{AppSettings, SettingsCache};

pub fn run(file: PathBuf) -> anyhow::Result<()> {
    let cache = SettingsCache::new();
    let settings = AppSettings::load(&cache);

    let document = Document::from_file(&file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", file.display()))?;
    let scene = SceneState::new();

    println!("Song: {}", file.display());
    println!(
        "  Title: {}",
        document.title().unwrap_or_else(|| "(none)".to_string())
    );
    println!(
        "  Subtitle: {}",
        document.subtitle().unwrap_or_else(|| "(none)".to_string())
    );
    println!("  Export name: {}", scene.song_file_name(Some(&document)));
    println!();

    println!("Active settings:");
    println!("  Config: {}", settings.config_label());
    println!(
        "  Font: {:?} {}pt",
        settings.font_style, settings.font_size
    );
    match settings.effective_transpose() {
        Some(offset) => println!(
            "  Transpose: {} -> {} ({offset:+}, {})",
            settings.transpose_from, settings.transpose_to, settings.transpose_accidentals
        ),
        None => println!("  Transpose: off"),
    }
    if settings.transcode {
        println!("  Transcode: {}", settings.transcode_notation);
    }
    if settings.lyrics_only {
        println!("  Lyrics only");
    }
    if settings.no_chord_grids {
        println!("  Chord grids suppressed");
    }
    if settings.de_capo {
        println!("  Capo eliminated by transposing");
    }

    Ok(())
}
