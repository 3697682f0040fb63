//! Delimiter sniffing for ledger text

use crate::constants::SEPARATOR_SAMPLE_LINES;
use serde::Serialize;
use std::fmt;

/// Cell delimiter of a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    Comma,
    Semicolon,
    Tab,
    Pipe,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Comma => ',',
            Separator::Semicolon => ';',
            Separator::Tab => '\t',
            Separator::Pipe => '|',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Separator::Comma => "comma",
            Separator::Semicolon => "semicolon",
            Separator::Tab => "tab",
            Separator::Pipe => "pipe",
        }
    }

    /// Pick the dominant delimiter of the first lines of `text`
    ///
    /// Tab must beat all three others, semicolon must beat comma and pipe,
    /// pipe must beat comma; comma wins every tie and empty input.
    pub fn detect(text: &str) -> Self {
        let mut semicolons = 0usize;
        let mut commas = 0usize;
        let mut tabs = 0usize;
        let mut pipes = 0usize;

        for line in text.lines().take(SEPARATOR_SAMPLE_LINES) {
            for ch in line.chars() {
                match ch {
                    ';' => semicolons += 1,
                    ',' => commas += 1,
                    '\t' => tabs += 1,
                    '|' => pipes += 1,
                    _ => {}
                }
            }
        }

        if tabs > semicolons && tabs > commas && tabs > pipes {
            Separator::Tab
        } else if semicolons > commas && semicolons > pipes {
            Separator::Semicolon
        } else if pipes > commas {
            Separator::Pipe
        } else {
            Separator::Comma
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
