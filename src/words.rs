use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

static WORD_DIR: Dir = include_dir!("src/words");

/// Selects which word list and gallows art a session uses.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    clap::ValueEnum,
    strum_macros::Display,
    Serialize,
    Deserialize,
)]
pub enum Mode {
    Basic,
    Advanced,
}

impl Mode {
    pub fn word_file(&self) -> &'static str {
        match self {
            Mode::Basic => "basic.txt",
            Mode::Advanced => "advanced.txt",
        }
    }
}

/// Trying to start a session from a mode whose word list came up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyWordList {
    pub mode: Mode,
}

impl fmt::Display for EmptyWordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no words available for {} mode",
            self.mode.to_string().to_lowercase()
        )
    }
}

impl Error for EmptyWordList {}

/// A mode's words, uppercased, one session picks one uniformly at random.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// The word list compiled into the binary for `mode`.
    pub fn embedded(mode: Mode) -> Self {
        let file = WORD_DIR
            .get_file(mode.word_file())
            .expect("embedded word list missing");
        let text = file
            .contents_utf8()
            .expect("embedded word list is not utf-8");
        Self::parse(text)
    }

    /// Load a word list from a plain-text file, one word per line. A
    /// missing or unreadable file degrades to an empty list with a
    /// reported error; callers must treat an empty list as fatal for
    /// the mode.
    pub fn from_file(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) => {
                eprintln!("error: cannot read word list {}: {}", path.display(), err);
                Self { words: Vec::new() }
            }
        }
    }

    /// One word per line, whitespace trimmed, blank lines skipped. Words
    /// with characters outside A–Z are dropped: they could never be
    /// completed from a 26-letter board.
    fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .filter(|w| w.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_ascii_uppercase)
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}

/// Resolve the word list for `mode`: an external directory when given,
/// the embedded set otherwise.
pub fn load(mode: Mode, words_dir: Option<&Path>) -> WordList {
    match words_dir {
        Some(dir) => WordList::from_file(&dir.join(mode.word_file())),
        None => WordList::embedded(mode),
    }
}
