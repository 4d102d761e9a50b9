use chrono::Local;
use code_counter_domain::{Analysis, CommentSyntax, analyze};
use code_counter_ports::{CleanedSink, TextSource};
use code_counter_shared_kernel::{ApplicationError, ErrorContext, Result};

use crate::dto::{SubmitError, Submission};

/// The submit action: clean the raw text, compute statistics, persist the
/// cleaned lines and read them back for display.
///
/// Output is all-or-nothing: a [`Submission`] carries cleaned text,
/// statistics and char counts together, and any failure yields none of them
/// for display.
pub struct SubmitCleaning<'a> {
    syntax: &'a CommentSyntax,
    sink: Option<&'a dyn CleanedSink>,
}

impl<'a> SubmitCleaning<'a> {
    pub fn new(syntax: &'a CommentSyntax) -> Self {
        Self { syntax, sink: None }
    }

    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn CleanedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Load the raw text from `source`, then [`run`](Self::run).
    ///
    /// # Errors
    ///
    /// See [`SubmitError`].
    pub fn run_from(&self, source: &dyn TextSource) -> std::result::Result<Submission, SubmitError> {
        let raw = source.read().map_err(|err| {
            SubmitError::Unreadable(ApplicationError::InputFailed {
                reason: source.describe(),
                source: Some(Box::new(err)),
            })
        })?;
        self.run(&raw)
    }

    /// # Errors
    ///
    /// See [`SubmitError`].
    pub fn run(&self, raw: &str) -> std::result::Result<Submission, SubmitError> {
        let analysis = analyze(raw, self.syntax)?;

        let (displayed_text, persisted_to) = match self.sink {
            Some(sink) => match Self::persist(sink, &analysis) {
                Ok(text) => (text, Some(sink.describe())),
                Err(err) => {
                    return Err(SubmitError::NotPersisted {
                        analysis: Box::new(analysis),
                        source: ApplicationError::PersistenceFailed {
                            reason: sink.describe(),
                            source: Some(Box::new(err)),
                        },
                    });
                }
            },
            None => (analysis.cleaned_text(), None),
        };

        Ok(Submission { analysis, displayed_text, persisted_to, completed_at: Local::now() })
    }

    fn persist(sink: &dyn CleanedSink, analysis: &Analysis) -> Result<String> {
        sink.write(analysis.cleaned().as_slice())
            .with_context(|| format!("saving cleaned lines to {}", sink.describe()))?;
        let text = sink.read_back().with_context(|| format!("reading back {}", sink.describe()))?;
        if text != analysis.cleaned_text() {
            log::warn!("{} did not read back what was written", sink.describe());
        }
        Ok(text)
    }
}
