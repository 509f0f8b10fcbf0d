//! The twelve-note scale and accidental preferences used for transposition.
//!
//! The actual transposition of a song is done by the external `chordpro`
//! tool; these types only describe the user's request for it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A note in the twelve-tone scale.
///
/// Serialized with its sharp spelling (`"C#"`, `"F#"`, ...) so the stored
/// record reads like what the user picked in a key selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Note {
    #[default]
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "B")]
    B,
}

impl Note {
    /// All notes in scale order, starting at C.
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
        Note::A,
        Note::ASharp,
        Note::B,
    ];

    /// Semitone index relative to C, in `0..=11`.
    pub fn semitone(self) -> i32 {
        match self {
            Note::C => 0,
            Note::CSharp => 1,
            Note::D => 2,
            Note::DSharp => 3,
            Note::E => 4,
            Note::F => 5,
            Note::FSharp => 6,
            Note::G => 7,
            Note::GSharp => 8,
            Note::A => 9,
            Note::ASharp => 10,
            Note::B => 11,
        }
    }

    /// Display label (sharp spelling).
    pub fn label(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Note {
    type Err = String;

    /// Accepts sharp and flat spellings, ASCII (`C#`, `Db`) and the
    /// Unicode accidentals (`C♯`, `D♭`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .replace('♯', "#")
            .replace('♭', "b")
            .to_ascii_uppercase();
        let note = match normalized.as_str() {
            "C" => Note::C,
            "C#" | "DB" => Note::CSharp,
            "D" => Note::D,
            "D#" | "EB" => Note::DSharp,
            "E" => Note::E,
            "F" => Note::F,
            "F#" | "GB" => Note::FSharp,
            "G" => Note::G,
            "G#" | "AB" => Note::GSharp,
            "A" => Note::A,
            "A#" | "BB" => Note::ASharp,
            "B" => Note::B,
            _ => return Err(format!("unknown note: {s}")),
        };
        Ok(note)
    }
}

/// Accidental preference for an equivalent transposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accidentals {
    /// Let the tool pick its default spelling.
    #[default]
    Default,
    /// Prefer sharps (positive transpose offsets).
    Sharps,
    /// Prefer flats (negative transpose offsets).
    Flats,
}

impl fmt::Display for Accidentals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Accidentals::Default => "default",
            Accidentals::Sharps => "sharps",
            Accidentals::Flats => "flats",
        };
        f.write_str(s)
    }
}

impl FromStr for Accidentals {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Accidentals::Default),
            "sharps" | "sharp" | "#" => Ok(Accidentals::Sharps),
            "flats" | "flat" | "b" => Ok(Accidentals::Flats),
            _ => Err(format!("unknown accidental preference: {s}")),
        }
    }
}
