use std::{collections::HashSet, fs, path::Path};

use isowords_core::Language;
use isowords_game::Dictionary;

use crate::error::CliError;

/// A word list loaded from a text file with one word per line.
///
/// Blank lines and lines starting with `#` are skipped. Words are matched
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WordList {
    language: Language,
    words: HashSet<String>,
}

impl WordList {
    pub(crate) fn load(path: &Path, language: Language) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_owned(),
            source,
        })?;
        let list = Self::parse(&text, language);
        log::info!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    pub(crate) fn parse(text: &str, language: Language) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_uppercase)
            .collect();
        Self { language, words }
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str, language: Language) -> bool {
        language == self.language && self.words.contains(&word.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let list = WordList::parse("# comment\ncat\n\n  Dog \nQUIT\ncat\n", Language::English);
        assert_eq!(list.len(), 3);
        assert!(list.contains("CAT", Language::English));
        assert!(list.contains("dog", Language::English));
        assert!(list.contains("QUIT", Language::English));
        assert!(!list.contains("COMMENT", Language::English));
        assert!(!list.contains("", Language::English));
    }
}
