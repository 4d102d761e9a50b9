// src/config.rs
use std::{path::PathBuf, time::Duration};

use code_counter_domain::CommentSyntax;
use code_counter_domain::config::comment_syntax::DEFAULT_BLOCK_DELIMITERS;
use code_counter_shared_kernel::{PresentationError, PresentationResult};
use derive_builder::Builder;

use crate::{
    args::Args,
    options::{OutputFormat, Verbosity},
};

/// Where the raw text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputTarget {
    #[default]
    Stdin,
    File(PathBuf),
}

/// Resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub input: InputTarget,
    /// `None` disables persistence.
    #[builder(default = "Some(PathBuf::from(\"output.txt\"))")]
    pub output: Option<PathBuf>,
    #[builder(default)]
    pub atomic: bool,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub show_counts: bool,
    #[builder(default)]
    pub stats_only: bool,
    #[builder(default)]
    pub syntax: CommentSyntax,
    #[builder(default)]
    pub watch: bool,
    #[builder(default = "Duration::from_secs(1)")]
    pub watch_interval: Duration,
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> PresentationResult<Self> {
        let syntax = syntax_from_args(&args)?;

        let input = match args.input {
            Some(path) if path.as_os_str() != "-" => InputTarget::File(path),
            _ => InputTarget::Stdin,
        };
        if args.watch && input == InputTarget::Stdin {
            return Err(PresentationError::InvalidValue {
                flag: "--watch".to_string(),
                value: "-".to_string(),
                reason: "watch mode needs a file input".to_string(),
            });
        }

        ConfigBuilder::default()
            .input(input)
            .output((!args.no_save).then_some(args.output))
            .atomic(args.atomic)
            .format(args.format)
            .show_counts(args.show_counts)
            .stats_only(args.stats_only)
            .syntax(syntax)
            .watch(args.watch)
            .watch_interval(Duration::from_secs(args.watch_interval.unwrap_or(1).max(1)))
            .verbosity(Verbosity::from_flags(args.quiet, args.verbose))
            .build()
            .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()))
    }
}

fn syntax_from_args(args: &Args) -> PresentationResult<CommentSyntax> {
    let delimiters: Vec<String> = if args.block_delimiters.is_empty() {
        DEFAULT_BLOCK_DELIMITERS.iter().map(|d| (*d).to_string()).collect()
    } else {
        args.block_delimiters.clone()
    };

    CommentSyntax::new(args.line_marker, delimiters.clone()).map_err(|err| PresentationError::InvalidValue {
        flag: "--line-marker/--block-delimiter".to_string(),
        value: format!("{} {}", args.line_marker, delimiters.join(" ")),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn config(argv: &[&str]) -> Result<Config, PresentationError> {
        let mut full = vec!["code_counter"];
        full.extend_from_slice(argv);
        Config::try_from(Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn defaults_match_python_style() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.input, InputTarget::Stdin);
        assert_eq!(cfg.output, Some(PathBuf::from("output.txt")));
        assert_eq!(cfg.syntax, CommentSyntax::default());
        assert_eq!(cfg.watch_interval, Duration::from_secs(1));
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(config(&["-"]).unwrap().input, InputTarget::Stdin);
        assert_eq!(config(&["a.py"]).unwrap().input, InputTarget::File("a.py".into()));
    }

    #[test]
    fn no_save_drops_output() {
        assert_eq!(config(&["--no-save"]).unwrap().output, None);
    }

    #[test]
    fn invalid_syntax_is_a_presentation_error() {
        let err = config(&["--block-delimiter", "*"]).unwrap_err();
        assert!(matches!(err, PresentationError::InvalidValue { .. }));
    }

    #[test]
    fn watch_on_stdin_is_rejected() {
        assert!(config(&["--watch", "-"]).is_err());
    }
}
