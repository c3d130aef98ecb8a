//! Daily challenges.
//!
//! Every player of a daily challenge must receive the same puzzle. Rather than
//! distributing the letters, the puzzle seed is derived from the challenge's
//! date, game mode and language, so any client (and the server) can
//! regenerate it independently.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use isowords_core::Language;
use serde::{Deserialize, Serialize};

use crate::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

/// Error returned when parsing a [`ChallengeDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseDateError {
    /// The text is not of the form `YYYY-MM-DD`.
    #[display("expected a date of the form YYYY-MM-DD")]
    InvalidFormat,
    /// The fields do not name a day of the Gregorian calendar.
    #[display("{year:04}-{month:02}-{day:02} is not a valid date")]
    InvalidDate {
        /// Year field.
        year: u16,
        /// Month field.
        month: u8,
        /// Day field.
        day: u8,
    },
}

/// Error returned when parsing an unknown [`GameMode`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown game mode: {_0:?}")]
pub struct ParseGameModeError(#[error(not(source))] pub String);

/// How long a game lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// A game against the clock.
    Timed,
    /// A game without a time limit.
    Unlimited,
}

impl GameMode {
    /// All game modes.
    pub const ALL: [Self; 2] = [Self::Timed, Self::Unlimited];

    /// Returns the lowercase name of the mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Timed => "timed",
            Self::Unlimited => "unlimited",
        }
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = ParseGameModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseGameModeError(s.to_owned()))
    }
}

/// A calendar day, written `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ChallengeDate {
    year: u16,
    month: u8,
    day: u8,
}

impl ChallengeDate {
    /// Creates a date, validating it against the Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDateError::InvalidDate`] if the month or day is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseDateError> {
        let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        let days_in_month = match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if leap => 29,
            2 => 28,
            _ => 0,
        };
        if day == 0 || day > days_in_month {
            return Err(ParseDateError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month (1-12).
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31).
    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }
}

impl Display for ChallengeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for ChallengeDate {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(ParseDateError::InvalidFormat);
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(ParseDateError::InvalidFormat);
        }
        let parse = |field: &str| -> Result<u16, ParseDateError> {
            field
                .bytes()
                .all(|b| b.is_ascii_digit())
                .then(|| field.parse().ok())
                .flatten()
                .ok_or(ParseDateError::InvalidFormat)
        };
        let narrow = |value: u16| u8::try_from(value).map_err(|_| ParseDateError::InvalidFormat);
        Self::new(parse(year)?, narrow(parse(month)?)?, narrow(parse(day)?)?)
    }
}

impl From<ChallengeDate> for String {
    fn from(date: ChallengeDate) -> Self {
        date.to_string()
    }
}

impl TryFrom<String> for ChallengeDate {
    type Error = ParseDateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Identifies one daily challenge puzzle.
///
/// # Examples
///
/// ```
/// use isowords_core::Language;
/// use isowords_generator::{DailyChallenge, GameMode};
///
/// let challenge = DailyChallenge {
///     date: "2026-10-17".parse()?,
///     mode: GameMode::Timed,
///     language: Language::English,
/// };
/// assert_eq!(challenge.label(), "isowords/daily/2026-10-17/timed/en");
///
/// // Every client regenerates the identical puzzle.
/// assert_eq!(challenge.generate().puzzle, challenge.generate().puzzle);
/// # Ok::<(), isowords_generator::ParseDateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyChallenge {
    /// The day the challenge is played on.
    pub date: ChallengeDate,
    /// The game mode of the challenge.
    pub mode: GameMode,
    /// The language of the puzzle.
    pub language: Language,
}

impl DailyChallenge {
    /// Returns the text the challenge seed is derived from.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "isowords/daily/{}/{}/{}",
            self.date, self.mode, self.language
        )
    }

    /// Returns the puzzle seed of the challenge.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        PuzzleSeed::from_label(&self.label())
    }

    /// Generates the challenge puzzle.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        PuzzleGenerator::new(self.language).generate_with_seed(self.seed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge(date: &str, mode: GameMode) -> DailyChallenge {
        DailyChallenge {
            date: date.parse().unwrap(),
            mode,
            language: Language::English,
        }
    }

    #[test]
    fn test_date_validation() {
        assert!(ChallengeDate::new(2024, 2, 29).is_ok());
        assert!(ChallengeDate::new(2026, 2, 29).is_err());
        assert!(ChallengeDate::new(1900, 2, 29).is_err());
        assert!(ChallengeDate::new(2000, 2, 29).is_ok());
        assert!(ChallengeDate::new(2026, 4, 31).is_err());
        assert!(ChallengeDate::new(2026, 13, 1).is_err());
        assert!(ChallengeDate::new(2026, 1, 0).is_err());
    }

    #[test]
    fn test_date_parse() {
        let date: ChallengeDate = "2026-03-09".parse().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2026, 3, 9));
        assert_eq!(date.to_string(), "2026-03-09");

        for bad in ["2026-3-09", "2026-03-09-01", "20260309", "2026-+3-09", "abcd-ef-gh"] {
            assert_eq!(
                bad.parse::<ChallengeDate>(),
                Err(ParseDateError::InvalidFormat),
                "{bad}"
            );
        }
        assert_eq!(
            "2026-02-30".parse::<ChallengeDate>(),
            Err(ParseDateError::InvalidDate {
                year: 2026,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn test_game_mode_parse() {
        assert_eq!("Timed".parse::<GameMode>(), Ok(GameMode::Timed));
        assert_eq!("unlimited".parse::<GameMode>(), Ok(GameMode::Unlimited));
        assert!("blitz".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_challenges_differ_by_day_and_mode() {
        let base = challenge("2026-10-17", GameMode::Timed);
        assert_eq!(base.seed(), challenge("2026-10-17", GameMode::Timed).seed());
        assert_ne!(base.seed(), challenge("2026-10-18", GameMode::Timed).seed());
        assert_ne!(base.seed(), challenge("2026-10-17", GameMode::Unlimited).seed());
        assert_eq!(base.generate().seed, base.seed());
    }
}
