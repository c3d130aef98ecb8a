//! Submitted game files.
//!
//! A submission file is a JSON object holding the move log, the claimed total
//! score and the puzzle the game was played on, given either as its 81-letter
//! archive string or as the daily challenge it belongs to:
//!
//! ```json
//! {
//!   "puzzle": "CATCATCAT...",
//!   "language": "en",
//!   "moves": [{ "playedAt": 0, "score": 18, "type": { "playedWord": [...] } }],
//!   "score": 18
//! }
//! ```

use std::{fs, path::Path};

use isowords_core::{Language, Puzzle};
use isowords_game::{Dictionary, Submission, VerifiedResult, VerifyOptions};
use isowords_generator::DailyChallenge;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum PuzzleSource {
    /// The letters of the fresh puzzle in archive form.
    Puzzle(String),
    /// The daily challenge the game was played on.
    Daily(DailyChallenge),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmissionFile {
    #[serde(flatten)]
    pub(crate) source: PuzzleSource,
    /// Language of an archived puzzle; a daily challenge carries its own.
    #[serde(default)]
    pub(crate) language: Language,
    #[serde(flatten)]
    pub(crate) submission: Submission,
}

impl SubmissionFile {
    pub(crate) fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CliError::Decode {
            path: path.to_owned(),
            source,
        })
    }

    /// Returns the fresh puzzle and the language the game was played in.
    pub(crate) fn puzzle(&self) -> Result<(Puzzle, Language), CliError> {
        match &self.source {
            PuzzleSource::Puzzle(letters) => Ok((letters.parse()?, self.language)),
            PuzzleSource::Daily(challenge) => {
                Ok((challenge.generate().puzzle, challenge.language))
            }
        }
    }

    pub(crate) fn verify<D>(
        &self,
        dictionary: &D,
        options: VerifyOptions,
    ) -> Result<VerifiedResult, CliError>
    where
        D: Dictionary + ?Sized,
    {
        let (puzzle, language) = self.puzzle()?;
        log::debug!(
            "replaying {} moves in {language}",
            self.submission.moves.len()
        );
        let result = isowords_game::verify_submission(
            &self.submission,
            &puzzle,
            language,
            dictionary,
            options,
        )?;
        Ok(result)
    }
}
