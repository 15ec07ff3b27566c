//! Vocabulary: word records, JLPT levels and loading
//!
//! Words reach the generator only after loading has filtered out entries
//! with an empty (or katakana) reading.

pub mod csv;
pub mod loader;

use serde::{Deserialize, Serialize};

pub use csv::{normalize_kana, parse_jlpt_csv};
pub use loader::*;

/// A vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    /// Canonical reading that must appear in the grid
    pub hiragana: String,
    /// Display form (kanji or kana expression)
    pub kanji: String,
    pub meaning: String,
}

impl Word {
    pub fn new(
        id: impl Into<String>,
        hiragana: impl Into<String>,
        kanji: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            hiragana: hiragana.into(),
            kanji: kanji.into(),
            meaning: meaning.into(),
        }
    }

    /// Reading length in characters (grid cells)
    pub fn len(&self) -> usize {
        self.hiragana.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.hiragana.is_empty()
    }
}

/// JLPT difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum JlptLevel {
    N1,
    N2,
    N3,
    N4,
    #[default]
    N5,
}

impl JlptLevel {
    pub const ALL: [JlptLevel; 5] = [
        JlptLevel::N1,
        JlptLevel::N2,
        JlptLevel::N3,
        JlptLevel::N4,
        JlptLevel::N5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JlptLevel::N1 => "N1",
            JlptLevel::N2 => "N2",
            JlptLevel::N3 => "N3",
            JlptLevel::N4 => "N4",
            JlptLevel::N5 => "N5",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "n1" | "1" => Some(JlptLevel::N1),
            "n2" | "2" => Some(JlptLevel::N2),
            "n3" | "3" => Some(JlptLevel::N3),
            "n4" | "4" => Some(JlptLevel::N4),
            "n5" | "5" => Some(JlptLevel::N5),
            _ => None,
        }
    }

    /// Level digit ("N5" -> 5)
    pub fn digit(&self) -> u8 {
        match self {
            JlptLevel::N1 => 1,
            JlptLevel::N2 => 2,
            JlptLevel::N3 => 3,
            JlptLevel::N4 => 4,
            JlptLevel::N5 => 5,
        }
    }

    /// Vocabulary file name for this level
    pub fn csv_file_name(&self) -> String {
        format!("n{}.csv", self.digit())
    }
}

impl std::fmt::Display for JlptLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while loading vocabulary
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("unexpected CSV header format (need expression, reading, meaning)")]
    Header,
    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to load {level} words CSV ({url})")]
    Fetch { level: JlptLevel, url: String },
    #[error("no {0} words found in CSV after parsing")]
    Empty(JlptLevel),
}

/// Small embedded N5 list used when no CSV is available
/// (expression, reading, meaning)
pub const BUILTIN_N5: &[(&str, &str, &str)] = &[
    ("猫", "ねこ", "cat"),
    ("犬", "いぬ", "dog"),
    ("山", "やま", "mountain"),
    ("川", "かわ", "river"),
    ("水", "みず", "water"),
    ("花", "はな", "flower"),
    ("本", "ほん", "book"),
    ("車", "くるま", "car"),
    ("駅", "えき", "station"),
    ("空", "そら", "sky"),
    ("雨", "あめ", "rain"),
    ("魚", "さかな", "fish"),
    ("学校", "がっこう", "school"),
    ("先生", "せんせい", "teacher"),
    ("友達", "ともだち", "friend"),
    ("時計", "とけい", "clock"),
    ("電話", "でんわ", "telephone"),
    ("名前", "なまえ", "name"),
    ("多分", "たぶん", "probably"),
    ("掃除", "そうじ", "cleaning"),
    ("朝", "あさ", "morning"),
    ("夜", "よる", "night"),
    ("春", "はる", "spring"),
    ("夏", "なつ", "summer"),
    ("秋", "あき", "autumn"),
    ("冬", "ふゆ", "winter"),
    ("右", "みぎ", "right"),
    ("左", "ひだり", "left"),
    ("手紙", "てがみ", "letter"),
    ("部屋", "へや", "room"),
    ("机", "つくえ", "desk"),
    ("鞄", "かばん", "bag"),
    ("靴", "くつ", "shoes"),
    ("傘", "かさ", "umbrella"),
    ("卵", "たまご", "egg"),
    ("肉", "にく", "meat"),
];

/// The embedded N5 list as word records
pub fn builtin_words() -> Vec<Word> {
    BUILTIN_N5
        .iter()
        .enumerate()
        .map(|(i, (kanji, reading, meaning))| {
            Word::new(format!("builtin-{}", i + 1), *reading, *kanji, *meaning)
        })
        .collect()
}
