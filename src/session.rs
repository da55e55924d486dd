use crate::words::Mode;
use crate::TICK_RATE_MS;
use chrono::prelude::*;
use directories::ProjectDirs;
use itertools::Itertools;
use std::collections::HashSet;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::time::SystemTime;

/// Wrong guesses allowed before the gallows is complete.
pub const MAX_MISSES: usize = 6;

/// Default time budget for a round, in seconds.
pub const ROUND_SECS: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
    TimedOut,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::InProgress => "in progress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
            Outcome::TimedOut => "timed out",
        };
        write!(f, "{}", s)
    }
}

/// What a single call to [`Session::guess`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guess {
    /// Letter is in the word.
    Hit,
    /// Letter is not in the word; the miss count advanced.
    Miss,
    /// Letter was already guessed; nothing changed.
    Repeat,
    /// Not accepted: non-letter input or the round is already over.
    Rejected,
}

/// One hangman round from word selection to a terminal outcome.
///
/// The word is held uppercase and every guess is uppercased before
/// comparison, so word lists may ship in either case.
#[derive(Debug, Clone)]
pub struct Session {
    word: String,
    guessed: HashSet<char>,
    miss_count: usize,
    seconds_remaining: f64,
    round_secs: f64,
    pub started_at: SystemTime,
}

impl Session {
    pub fn new(word: &str) -> Self {
        Self::with_time_limit(word, ROUND_SECS)
    }

    pub fn with_time_limit(word: &str, round_secs: f64) -> Self {
        debug_assert!(!word.is_empty(), "a session needs a word to guess");
        Self {
            word: word.to_ascii_uppercase(),
            guessed: HashSet::new(),
            miss_count: 0,
            seconds_remaining: round_secs,
            round_secs,
            started_at: SystemTime::now(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn misses(&self) -> usize {
        self.miss_count
    }

    pub fn round_secs(&self) -> f64 {
        self.round_secs
    }

    pub fn seconds_remaining(&self) -> f64 {
        self.seconds_remaining
    }

    /// Remaining whole seconds for the countdown display, floored at zero.
    pub fn remaining_display(&self) -> u64 {
        self.seconds_remaining.max(0.0).round() as u64
    }

    /// Drain the countdown by one event-loop tick. The clock freezes once
    /// the round reaches a terminal outcome.
    pub fn on_tick(&mut self) {
        if !self.outcome().is_terminal() {
            self.seconds_remaining -= TICK_RATE_MS as f64 / 1000.0;
        }
    }

    /// Apply one letter guess. Repeats never double-count a miss, and
    /// nothing is accepted once the round is over.
    pub fn guess(&mut self, letter: char) -> Guess {
        if self.outcome().is_terminal() {
            return Guess::Rejected;
        }
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Guess::Rejected;
        }
        if !self.guessed.insert(letter) {
            return Guess::Repeat;
        }
        if self.word.contains(letter) {
            Guess::Hit
        } else {
            self.miss_count += 1;
            Guess::Miss
        }
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_uppercase())
    }

    pub fn guessed(&self) -> &HashSet<char> {
        &self.guessed
    }

    pub fn outcome(&self) -> Outcome {
        if self.word.chars().all(|c| self.guessed.contains(&c)) {
            Outcome::Won
        } else if self.miss_count >= MAX_MISSES {
            Outcome::Lost
        } else if self.seconds_remaining < 0.0 {
            Outcome::TimedOut
        } else {
            Outcome::InProgress
        }
    }

    pub fn has_finished(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// The word as shown to the player, unguessed letters masked.
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .join(" ")
    }

    /// Append one CSV line for this round to the result log. Best-effort,
    /// called once when the round finishes.
    pub fn save_result(&self, mode: Mode) -> io::Result<()> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "gibbet") {
            let config_dir = proj_dirs.config_dir();
            let log_path = config_dir.join("log.csv");

            std::fs::create_dir_all(config_dir)?;

            // If the log file doesn't exist, we need to emit a header
            let needs_header = !log_path.exists();

            let mut log_file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(log_path)?;

            if needs_header {
                writeln!(log_file, "date,mode,word,outcome,misses,elapsed_secs")?;
            }

            let elapsed_secs = self
                .started_at
                .elapsed()
                .unwrap_or_default()
                .as_secs_f64();

            writeln!(
                log_file,
                "{},{},{},{},{},{:.2}",
                Local::now().format("%c"),
                mode.to_string().to_lowercase(),
                self.word,
                self.outcome(),
                self.miss_count,
                elapsed_secs,
            )?;
        }

        Ok(())
    }
}
