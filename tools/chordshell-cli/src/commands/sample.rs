//! Emit the bundled example song.

use std::path::PathBuf;

/// The example song shipped with the application.
pub const SAMPLE_SONG: &str = include_str!("../../assets/swinglow.cho");

pub fn run(file: Option<PathBuf>) -> anyhow::Result<()> {
    match file {
        Some(path) => {
            std::fs::write(&path, SAMPLE_SONG)?;
            println!("Wrote the example song to {}", path.display());
        }
        None => print!("{SAMPLE_SONG}"),
    }
    Ok(())
}
