//! Show or change the stored application settings.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use chordshell_settings::{
    Accidentals, AppSettings, FileBookmark, FontStyle, Note, SettingsCache,
};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the stored settings record
    Show,

    /// Change one or more fields and save the record
    Set(SetArgs),

    /// Restore the default settings and save them
    Reset,
}

#[derive(Args)]
pub struct SetArgs {
    /// Editor font style: monospaced, serif, sans-serif
    #[arg(long)]
    pub font_style: Option<String>,

    /// Editor font size in points (positive)
    #[arg(long)]
    pub font_size: Option<f64>,

    /// System config identifier (e.g. guitar, ukulele)
    #[arg(long)]
    pub system_config: Option<String>,

    /// Bookmark a custom config file and enable it
    #[arg(long)]
    pub custom_config: Option<PathBuf>,

    /// Enable or disable the custom config
    #[arg(long)]
    pub use_custom_config: Option<bool>,

    /// Do not use the tool's default configurations
    #[arg(long)]
    pub no_default_configs: Option<bool>,

    /// Bookmark an additional chord library folder and enable it
    #[arg(long)]
    pub custom_library: Option<PathBuf>,

    /// Enable or disable the additional library
    #[arg(long)]
    pub use_additional_library: Option<bool>,

    /// Bookmark a custom song template and enable it
    #[arg(long)]
    pub custom_template: Option<PathBuf>,

    /// Enable or disable the custom song template
    #[arg(long)]
    pub use_custom_song_template: Option<bool>,

    /// Enable or disable transcoding
    #[arg(long)]
    pub transcode: Option<bool>,

    /// Notation to transcode to (e.g. common, solfege)
    #[arg(long)]
    pub transcode_notation: Option<String>,

    /// Enable or disable transposition
    #[arg(long)]
    pub transpose: Option<bool>,

    /// Note to transpose from (C, C#, Db, ...)
    #[arg(long)]
    pub transpose_from: Option<String>,

    /// Note to transpose to
    #[arg(long)]
    pub transpose_to: Option<String>,

    /// Accidental preference: default, sharps, flats
    #[arg(long)]
    pub accidentals: Option<String>,

    /// Show only lyrics
    #[arg(long)]
    pub lyrics_only: Option<bool>,

    /// Suppress chord diagrams
    #[arg(long)]
    pub no_chord_grids: Option<bool>,

    /// Eliminate capo settings by transposing
    #[arg(long)]
    pub de_capo: Option<bool>,
}

pub fn run(action: SettingsAction) -> anyhow::Result<()> {
    let cache = SettingsCache::new();

    match action {
        SettingsAction::Show => {
            let settings = AppSettings::load(&cache);
            println!("{}", serde_json::to_string_pretty(&settings)?);
            println!();
            println!("Computed:");
            println!("  Config label: {}", settings.config_label());
            match settings.effective_transpose() {
                Some(offset) => println!("  Effective transpose: {offset:+}"),
                None => println!("  Effective transpose: none"),
            }
            Ok(())
        }
        SettingsAction::Set(args) => {
            let mut settings = AppSettings::load(&cache);
            apply(&mut settings, &args)?;
            settings.save(&cache)?;
            println!("Settings saved to {}", cache.root().display());
            Ok(())
        }
        SettingsAction::Reset => {
            let mut settings = AppSettings::default();
            settings.save(&cache)?;
            println!("Settings reset to defaults");
            Ok(())
        }
    }
}

fn apply(settings: &mut AppSettings, args: &SetArgs) -> anyhow::Result<()> {
    if let Some(style) = &args.font_style {
        settings.font_style = style.parse::<FontStyle>().map_err(anyhow::Error::msg)?;
    }
    if let Some(size) = args.font_size {
        if size <= 0.0 {
            return Err(anyhow::anyhow!("font size must be positive"));
        }
        settings.font_size = size;
    }
    if let Some(config) = &args.system_config {
        settings.system_config = config.clone();
    }
    if let Some(path) = &args.custom_config {
        settings.custom_config = Some(FileBookmark::new(path));
        settings.use_custom_config = true;
    }
    if let Some(value) = args.use_custom_config {
        settings.use_custom_config = value;
    }
    if let Some(value) = args.no_default_configs {
        settings.no_default_configs = value;
    }
    if let Some(path) = &args.custom_library {
        settings.custom_library = Some(FileBookmark::new(path));
        settings.use_additional_library = true;
    }
    if let Some(value) = args.use_additional_library {
        settings.use_additional_library = value;
    }
    if let Some(path) = &args.custom_template {
        settings.custom_template = Some(FileBookmark::new(path));
        settings.use_custom_song_template = true;
    }
    if let Some(value) = args.use_custom_song_template {
        settings.use_custom_song_template = value;
    }
    if let Some(value) = args.transcode {
        settings.transcode = value;
    }
    if let Some(notation) = &args.transcode_notation {
        settings.transcode_notation = notation.clone();
    }
    if let Some(value) = args.transpose {
        settings.transpose = value;
    }
    if let Some(note) = &args.transpose_from {
        settings.transpose_from = note.parse::<Note>().map_err(anyhow::Error::msg)?;
    }
    if let Some(note) = &args.transpose_to {
        settings.transpose_to = note.parse::<Note>().map_err(anyhow::Error::msg)?;
    }
    if let Some(pref) = &args.accidentals {
        settings.transpose_accidentals =
            pref.parse::<Accidentals>().map_err(anyhow::Error::msg)?;
    }
    if let Some(value) = args.lyrics_only {
        settings.lyrics_only = value;
    }
    if let Some(value) = args.no_chord_grids {
        settings.no_chord_grids = value;
    }
    if let Some(value) = args.de_capo {
        settings.de_capo = value;
    }
    Ok(())
}
