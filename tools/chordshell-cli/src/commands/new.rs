//! Create a new song from the configured template.

use std::path::PathBuf;

use chordshell_scene::Document;
use chordshell_settings::{AppSettings, SettingsCache};

pub fn run(file: PathBuf) -> anyhow::Result<()> {
    if file.exists() {
        return Err(anyhow::anyhow!("{} already exists", file.display()));
    }

    let cache = SettingsCache::new();
    let settings = AppSettings::load(&cache);

    let document = Document::from_template(&settings);
    std::fs::write(&file, &document.text)?;

    println!("Created {}", file.display());
    if let Some(title) = document.title() {
        println!("  Title: {title}");
    }
    if settings.use_custom_song_template {
        println!("  Template: custom");
    }

    Ok(())
}
