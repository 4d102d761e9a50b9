use chrono::{DateTime, Local};
use code_counter_domain::Analysis;
use code_counter_shared_kernel::{ApplicationError, CodeCounterError, DomainError};
use serde::Serialize;
use thiserror::Error;

/// Successful submit: analysis plus the text to show as cleaned output.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    #[serde(flatten)]
    pub analysis: Analysis,
    /// Read back from the sink when one is configured, otherwise built in memory.
    #[serde(skip)]
    pub displayed_text: String,
    pub persisted_to: Option<String>,
    pub completed_at: DateTime<Local>,
}

/// Why a submit produced nothing to display.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The raw text could not be loaded.
    #[error(transparent)]
    Unreadable(ApplicationError),

    /// The pipeline refused the input (nothing entered, or only comments).
    #[error(transparent)]
    Rejected(#[from] DomainError),

    /// Cleaning succeeded but the sink failed. The analysis is kept here so
    /// the cleaned lines are not lost.
    #[error("{source}")]
    NotPersisted {
        analysis: Box<Analysis>,
        #[source]
        source: ApplicationError,
    },
}

impl SubmitError {
    /// Analysis that survived a persistence failure.
    pub fn recovered(&self) -> Option<&Analysis> {
        match self {
            Self::NotPersisted { analysis, .. } => Some(analysis),
            Self::Unreadable(_) | Self::Rejected(_) => None,
        }
    }

    pub fn into_error(self) -> CodeCounterError {
        match self {
            Self::Unreadable(source) | Self::NotPersisted { source, .. } => source.into(),
            Self::Rejected(err) => err.into(),
        }
    }
}
