//! Check that the external tool and the settings store are usable.

use chordshell_export::{ChordProBackend, ExportBackend};
use chordshell_settings::{AppSettings, SettingsCache};

pub fn run() -> anyhow::Result<()> {
    println!("Chordshell System Check");
    println!("{}", "=".repeat(50));

    let backend = ChordProBackend::new();
    if backend.is_available() {
        println!("[OK] chordpro executable found in PATH");
    } else {
        println!("[FAIL] chordpro executable not found in PATH");
        println!("       Install it from https://www.chordpro.org");
    }

    let cache = SettingsCache::new();
    println!("[OK] Settings cache: {}", cache.root().display());

    let settings = AppSettings::load(&cache);
    if settings.modified_at.is_empty() {
        println!("[OK] No saved settings yet, defaults apply");
    } else {
        println!("[OK] Settings loaded (saved {})", settings.modified_at);
    }
    println!("     Config: {}", settings.config_label());

    let temp = std::env::temp_dir().join("chordshell");
    match std::fs::create_dir_all(&temp) {
        Ok(()) => println!("[OK] Temporary directory: {}", temp.display()),
        Err(e) => println!("[FAIL] Temporary directory {}: {e}", temp.display()),
    }

    Ok(())
}
