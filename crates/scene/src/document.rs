//! The song document: a plain text buffer with metadata extraction.
//!
//! Only the `title` and `subtitle` directives are read here, because the
//! scene needs them for file naming. Everything else in the ChordPro
//! language is the external tool's business.

use std::path::Path;

use chordshell_common::error::AppResult;
use chordshell_settings::AppSettings;

/// Template for a fresh song when no custom template is configured.
pub const DEFAULT_TEMPLATE: &str = "{title: New Song}\n\n";

/// A song document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// The full ChordPro source text.
    pub text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read a document from disk as UTF-8 text.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self { text })
    }

    /// A fresh document from the user's song template.
    ///
    /// Uses the bookmarked custom template when the toggle is on and the
    /// bookmark resolves; otherwise the built-in template.
    pub fn from_template(settings: &AppSettings) -> Self {
        if settings.use_custom_song_template {
            if let Some(bookmark) = &settings.custom_template {
                if let Ok(path) = bookmark.resolve() {
                    if let Ok(text) = std::fs::read_to_string(&path) {
                        return Self { text };
                    }
                    tracing::warn!(
                        template = %path.display(),
                        "Could not read the custom song template, using the default"
                    );
                }
            }
        }
        Self {
            text: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// The song title, from the first `{title: ...}` or `{t: ...}`
    /// directive.
    pub fn title(&self) -> Option<String> {
        directive_value(&self.text, &["title", "t"])
    }

    /// The song subtitle, from the first `{subtitle: ...}`, `{st: ...}`
    /// or `{su: ...}` directive.
    pub fn subtitle(&self) -> Option<String> {
        directive_value(&self.text, &["subtitle", "st", "su"])
    }
}

/// Find the first directive line matching any of `names` and return its
/// trimmed, non-empty value.
fn directive_value(text: &str, names: &[&str]) -> Option<String> {
    for line in text.lines() {
        let line = line.trim();
        let Some(inner) = line.strip_prefix('{').and_then(|l| l.strip_suffix('}')) else {
            continue;
        };
        let Some((name, value)) = inner.split_once(':') else {
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        if names.contains(&name.as_str()) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}
