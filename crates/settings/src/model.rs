//! The versioned application settings record.
//!
//! One record exists per installation. Every field persists; the computed
//! accessors (config label, transpose offset) are pure functions of the
//! current field values and are recomputed on access.

use serde::{Deserialize, Serialize};

use crate::bookmark::FileBookmark;
use crate::notes::{Accidentals, Note};

/// Editor font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Monospaced,
    Serif,
    SansSerif,
}

impl std::str::FromStr for FontStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monospaced" | "mono" => Ok(FontStyle::Monospaced),
            "serif" => Ok(FontStyle::Serif),
            "sans-serif" | "sans_serif" | "sans" => Ok(FontStyle::SansSerif),
            _ => Err(format!("unknown font style: {s}")),
        }
    }
}

/// All the settings for the application.
///
/// `#[serde(default)]` keeps old records loadable when fields are added:
/// anything missing on disk takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Schema version.
    pub version: String,

    /// Last save timestamp (ISO 8601). Empty until first saved.
    pub modified_at: String,

    // Fonts
    /// The font style of the editor.
    pub font_style: FontStyle,
    /// The font size of the editor (points, positive).
    pub font_size: f64,

    // Templates and configs
    /// Use an additional chord definition library.
    pub use_additional_library: bool,
    /// The bookmarked library folder, when one was picked.
    pub custom_library: Option<FileBookmark>,

    /// Use a custom template for new songs.
    pub use_custom_song_template: bool,
    /// The bookmarked song template, when one was picked.
    pub custom_template: Option<FileBookmark>,

    /// Use a custom config instead of a system config.
    pub use_custom_config: bool,
    /// The system config to use.
    pub system_config: String,
    /// The bookmarked custom config, when one was picked.
    pub custom_config: Option<FileBookmark>,
    /// Do not use any of the tool's default configurations.
    pub no_default_configs: bool,

    // Transcode
    /// Transcode the song to another notation.
    pub transcode: bool,
    /// The notation to transcode to.
    pub transcode_notation: String,

    // Transpose
    /// Transpose the song.
    pub transpose: bool,
    /// The note to transpose from.
    pub transpose_from: Note,
    /// The note to transpose to.
    pub transpose_to: Note,
    /// Accidental preference for the transposition.
    pub transpose_accidentals: Accidentals,

    // Output
    /// Show only lyrics.
    pub lyrics_only: bool,
    /// Suppress chord diagrams.
    pub no_chord_grids: bool,
    /// Eliminate capo settings by transposing the song.
    pub de_capo: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            modified_at: String::new(),
            font_style: FontStyle::Monospaced,
            font_size: 14.0,
            use_additional_library: false,
            custom_library: None,
            use_custom_song_template: false,
            custom_template: None,
            use_custom_config: false,
            system_config: "guitar".to_string(),
            custom_config: None,
            no_default_configs: false,
            transcode: false,
            transcode_notation: "common".to_string(),
            transpose: false,
            transpose_from: Note::C,
            transpose_to: Note::C,
            transpose_accidentals: Accidentals::Default,
            lyrics_only: false,
            no_chord_grids: false,
            de_capo: false,
        }
    }
}

impl AppSettings {
    /// The label for the active config.
    ///
    /// A custom config that resolves shows its file name; an unresolvable
    /// bookmark (or no custom config at all) falls back to the system
    /// config identifier. Never fails.
    pub fn config_label(&self) -> String {
        if self.use_custom_config {
            if let Some(bookmark) = &self.custom_config {
                if let Ok(path) = bookmark.resolve() {
                    if let Some(name) = path.file_name() {
                        return name.to_string_lossy().into_owned();
                    }
                }
            }
        }
        self.system_config.clone()
    }

    /// The computed semitone offset between the from and to notes.
    ///
    /// The base offset is `(to - from) mod 12`, normalized to `0..=11`.
    /// A base of zero is reported as `None`: the same key is no
    /// transposition, whatever the accidental preference says. A non-zero
    /// base stays positive for the default and sharps preferences (the
    /// tool renders positive offsets with sharps) and is shifted down an
    /// octave for flats, so the result is always in
    /// `-11..=-1` or `1..=11`.
    pub fn transpose_offset(&self) -> Option<i32> {
        let base =
            (self.transpose_to.semitone() - self.transpose_from.semitone()).rem_euclid(12);
        if base == 0 {
            return None;
        }
        let offset = match self.transpose_accidentals {
            Accidentals::Default | Accidentals::Sharps => base,
            Accidentals::Flats => base - 12,
        };
        Some(offset)
    }

    /// The transpose offset that should actually be applied.
    ///
    /// Enabled-ness is a separate state from the computed value: `None`
    /// when the transpose toggle is off or when the computed offset is a
    /// no-op, `Some` otherwise.
    pub fn effective_transpose(&self) -> Option<i32> {
        if !self.transpose {
            return None;
        }
        self.transpose_offset()
    }

    /// Stamp the record with the current time. Done on every save.
    pub(crate) fn touch(&mut self) {
        self.modified_at = chrono::Utc::now().to_rfc3339();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_record() {
        let settings = AppSettings::default();
        assert_eq!(settings.version, "1.0");
        assert_eq!(settings.font_style, FontStyle::Monospaced);
        assert!((settings.font_size - 14.0).abs() < f64::EPSILON);
        assert_eq!(settings.system_config, "guitar");
        assert_eq!(settings.transcode_notation, "common");
        assert_eq!(settings.transpose_from, Note::C);
        assert_eq!(settings.transpose_to, Note::C);
        assert_eq!(settings.transpose_accidentals, Accidentals::Default);
        assert!(!settings.transpose);
        assert!(!settings.use_custom_config);
        assert!(settings.custom_config.is_none());
    }

    #[test]
    fn test_settings_round_trip_full_fidelity() {
        let mut settings = AppSettings::default();
        settings.font_style = FontStyle::Serif;
        settings.font_size = 18.5;
        settings.use_custom_config = true;
        settings.custom_config = Some(FileBookmark::new("/tmp/mandolin.json"));
        settings.no_default_configs = true;
        settings.transcode = true;
        settings.transcode_notation = "solfege".to_string();
        settings.transpose = true;
        settings.transpose_from = Note::E;
        settings.transpose_to = Note::G;
        settings.transpose_accidentals = Accidentals::Flats;
        settings.lyrics_only = true;
        settings.no_chord_grids = true;
        settings.de_capo = true;

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_legacy_record_defaults_missing_fields() {
        // A record from before the library/template bookmarks existed.
        let legacy = r#"{
            "version": "1.0",
            "font_style": "serif",
            "font_size": 12.0,
            "transpose": true,
            "transpose_from": "D",
            "transpose_to": "E"
        }"#;
        let settings: AppSettings = serde_json::from_str(legacy).unwrap();
        assert_eq!(settings.font_style, FontStyle::Serif);
        assert_eq!(settings.transpose_from, Note::D);
        assert_eq!(settings.system_config, "guitar");
        assert_eq!(settings.transcode_notation, "common");
        assert!(settings.custom_library.is_none());
        assert!(!settings.use_custom_song_template);
    }

    #[test]
    fn test_same_key_is_no_offset_for_every_preference() {
        for accidentals in [Accidentals::Default, Accidentals::Sharps, Accidentals::Flats] {
            for note in Note::ALL {
                let settings = AppSettings {
                    transpose_from: note,
                    transpose_to: note,
                    transpose_accidentals: accidentals,
                    ..Default::default()
                };
                assert_eq!(settings.transpose_offset(), None);
            }
        }
    }

    #[test]
    fn test_offset_examples() {
        let mut settings = AppSettings {
            transpose_from: Note::C,
            transpose_to: Note::D,
            ..Default::default()
        };
        assert_eq!(settings.transpose_offset(), Some(2));

        // Wrapping downward: G -> C is a fourth up, not a fifth down.
        settings.transpose_from = Note::G;
        settings.transpose_to = Note::C;
        assert_eq!(settings.transpose_offset(), Some(5));

        // Flats report the negative octave equivalent.
        settings.transpose_accidentals = Accidentals::Flats;
        assert_eq!(settings.transpose_offset(), Some(-7));
    }

    #[test]
    fn test_effective_transpose_requires_the_toggle() {
        let mut settings = AppSettings {
            transpose_from: Note::C,
            transpose_to: Note::D,
            ..Default::default()
        };
        assert_eq!(settings.effective_transpose(), None);
        settings.transpose = true;
        assert_eq!(settings.effective_transpose(), Some(2));
    }

    #[test]
    fn test_config_label_falls_back_on_unresolvable_bookmark() {
        let settings = AppSettings {
            use_custom_config: true,
            custom_config: Some(FileBookmark::new("/gone/away/notes.json")),
            system_config: "ukulele".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.config_label(), "ukulele");
    }

    #[test]
    fn test_config_label_uses_resolvable_bookmark() {
        let dir = std::env::temp_dir().join("chordshell_test_config_label");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("mandolin.json");
        std::fs::write(&file, "{}").unwrap();

        let settings = AppSettings {
            use_custom_config: true,
            custom_config: Some(FileBookmark::new(&file)),
            ..Default::default()
        };
        assert_eq!(settings.config_label(), "mandolin.json");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_config_label_ignores_bookmark_when_custom_disabled() {
        let settings = AppSettings {
            use_custom_config: false,
            custom_config: Some(FileBookmark::new("/anything.json")),
            ..Default::default()
        };
        assert_eq!(settings.config_label(), "guitar");
    }

    proptest! {
        /// For every (from, to, preference) triple the offset is either
        /// absent (same key) or a non-zero value within one octave in
        /// either direction, with the sign matching the preference.
        #[test]
        fn prop_transpose_offset_stays_within_one_octave(
            from_idx in 0usize..12,
            to_idx in 0usize..12,
            accidental_idx in 0usize..3,
        ) {
            let accidentals = [Accidentals::Default, Accidentals::Sharps, Accidentals::Flats]
                [accidental_idx];
            let settings = AppSettings {
                transpose_from: Note::ALL[from_idx],
                transpose_to: Note::ALL[to_idx],
                transpose_accidentals: accidentals,
                ..Default::default()
            };

            match settings.transpose_offset() {
                None => prop_assert_eq!(from_idx, to_idx),
                Some(offset) => {
                    prop_assert_ne!(offset, 0);
                    prop_assert!((-12..=12).contains(&offset));
                    match accidentals {
                        Accidentals::Flats => prop_assert!(offset < 0),
                        _ => prop_assert!(offset > 0),
                    }
                    // Pitch class matches the requested interval.
                    let interval = (to_idx as i32 - from_idx as i32).rem_euclid(12);
                    prop_assert_eq!(offset.rem_euclid(12), interval);
                }
            }
        }

        /// The computation is deterministic and stateless.
        #[test]
        fn prop_transpose_offset_is_deterministic(
            from_idx in 0usize..12,
            to_idx in 0usize..12,
        ) {
            let settings = AppSettings {
                transpose_from: Note::ALL[from_idx],
                transpose_to: Note::ALL[to_idx],
                ..Default::default()
            };
            prop_assert_eq!(settings.transpose_offset(), settings.transpose_offset());
        }
    }
}
