//! Enumerated `FLOCKBOOK_*` settings
//!
//! A bad value never aborts the run. The closest valid token is suggested on
//! the writer and the setting falls back to its default.

use std::io::Write;

use super::types::ColorMode;
use crate::domain::policies::GuardMode;
use crate::logging::LogFormat;

/// A setting that can be chosen through an environment variable
pub trait EnvChoice: Sized + Default {
    const VAR: &'static str;
    const TOKENS: &'static [&'static str];

    fn from_token(token: &str) -> Option<Self>;
}

impl EnvChoice for ColorMode {
    const VAR: &'static str = "FLOCKBOOK_COLOR";
    const TOKENS: &'static [&'static str] = &["auto", "always", "never"];

    fn from_token(token: &str) -> Option<Self> {
        ColorMode::parse(token)
    }
}

impl EnvChoice for LogFormat {
    const VAR: &'static str = "FLOCKBOOK_LOG_FORMAT";
    const TOKENS: &'static [&'static str] = &["pretty", "compact", "json"];

    fn from_token(token: &str) -> Option<Self> {
        LogFormat::parse(token)
    }
}

impl EnvChoice for GuardMode {
    const VAR: &'static str = "FLOCKBOOK_GUARD";
    const TOKENS: &'static [&'static str] = &["permissive", "strict"];

    fn from_token(token: &str) -> Option<Self> {
        GuardMode::parse(token)
    }
}

/// Parse `raw` as `T`, or warn on `writer` and return `T::default()`.
pub fn read_choice<T: EnvChoice, W: Write>(raw: &str, writer: &mut W) -> T {
    if let Some(value) = T::from_token(raw) {
        return value;
    }

    let typed = raw.trim().to_ascii_lowercase();
    let hint = closest(&typed, T::TOKENS)
        .map(|token| format!(". Did you mean '{token}'?"))
        .unwrap_or_default();
    let _ = writeln!(writer, "Warning: Invalid {} value '{}'{}", T::VAR, raw, hint);
    let _ = writeln!(writer, "Valid values: {}", T::TOKENS.join(", "));
    T::default()
}

/// Nearest candidate within two edits, first one wins on a tie
pub fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|c| (*c, levenshtein(input, c)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(c, _)| c)
}

/// Edit distance over chars, one rolling row
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
