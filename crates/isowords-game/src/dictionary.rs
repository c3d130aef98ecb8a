use isowords_core::Language;

/// Decides whether a word is playable.
///
/// The engine never ships a word list; callers supply one. Words are passed in
/// uppercase, exactly as spelled by the puzzle's tiles. Implementations must be
/// deterministic, since the server re-runs them to authenticate a game.
///
/// Any `Fn(&str, Language) -> bool` is a dictionary.
///
/// # Examples
///
/// ```
/// use isowords_core::Language;
/// use isowords_game::Dictionary;
///
/// let words = ["CAT", "CATS"];
/// let dictionary = |word: &str, _language: Language| words.contains(&word);
/// assert!(dictionary.contains("CAT", Language::English));
/// assert!(!dictionary.contains("TAC", Language::English));
/// ```
pub trait Dictionary {
    /// Returns `true` if `word` is a valid word in `language`.
    fn contains(&self, word: &str, language: Language) -> bool;
}

impl<F> Dictionary for F
where
    F: ?Sized + Fn(&str, Language) -> bool,
{
    fn contains(&self, word: &str, language: Language) -> bool {
        self(word, language)
    }
}
