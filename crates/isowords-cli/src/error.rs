use std::{io, path::PathBuf};

use isowords_core::ParsePuzzleError;
use isowords_game::VerifyError;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("invalid submission {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("failed to encode JSON: {_0}")]
    Encode(#[from] serde_json::Error),
    #[display("invalid puzzle: {_0}")]
    Puzzle(#[from] ParsePuzzleError),
    #[display("{_0}")]
    Verify(#[from] VerifyError),
}

impl CliError {
    /// Short label for the kind of failure, used in the per-file report.
    pub(crate) fn kind(&self) -> String {
        match self {
            Self::Read { .. } | Self::Decode { .. } | Self::Encode(_) | Self::Puzzle(_) => {
                "input".to_owned()
            }
            Self::Verify(err) => err.category().to_string(),
        }
    }
}
