// src/app.rs
use std::process::ExitCode;

use anyhow::{Context, Result};
use code_counter_infra::{FileSink, FileSource, StdinSource, WatchService};
use code_counter_ports::TextSource;
use code_counter_shared_kernel::{ApplicationError, DomainError};
use code_counter_usecase::{SubmitCleaning, SubmitError, Submission};

use crate::{
    config::{Config, InputTarget},
    presentation,
};

pub fn run(config: &Config) -> Result<ExitCode> {
    let source: Box<dyn TextSource> = match &config.input {
        InputTarget::File(path) => Box::new(FileSource::new(path)),
        InputTarget::Stdin => Box::new(StdinSource),
    };
    let sink = config.output.as_ref().map(|path| FileSink::new(path).atomic(config.atomic));

    if config.watch {
        return watch(config, source.as_ref(), sink.as_ref());
    }

    match submit(config, source.as_ref(), sink.as_ref()) {
        Ok(submission) => {
            let out = presentation::render(&submission, config).context("failed to render output")?;
            print!("{out}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            report_failure(&err);
            Ok(exit_code_for(&err))
        }
    }
}

fn submit(
    config: &Config,
    source: &dyn TextSource,
    sink: Option<&FileSink>,
) -> std::result::Result<Submission, SubmitError> {
    let mut usecase = SubmitCleaning::new(&config.syntax);
    if let Some(sink) = sink {
        usecase = usecase.with_sink(sink);
    }
    usecase.run_from(source)
}

fn watch(config: &Config, source: &dyn TextSource, sink: Option<&FileSink>) -> Result<ExitCode> {
    let InputTarget::File(path) = &config.input else {
        anyhow::bail!("watch mode needs a file input");
    };

    log::info!("watching {} (interval {:?})", path.display(), config.watch_interval);
    let mut cycle = || -> code_counter_shared_kernel::Result<()> {
        // a failed cycle leaves the previous output on screen
        match submit(config, source, sink) {
            Ok(submission) => match presentation::render(&submission, config) {
                Ok(out) => {
                    presentation::print_clear_screen();
                    print!("{out}");
                }
                Err(err) => log::warn!("failed to render output: {err}"),
            },
            Err(err) => report_failure(&err),
        }
        Ok(())
    };

    cycle()?;
    WatchService::run(path, config.watch_interval, cycle).context("watch mode failed")?;
    Ok(ExitCode::SUCCESS)
}

fn report_failure(err: &SubmitError) {
    match err {
        SubmitError::Rejected(DomainError::EmptyInput) => {
            log::error!("nothing was entered: the input has no non-blank lines");
        }
        SubmitError::Rejected(DomainError::EmptyResult) => {
            log::error!("all lines were comments: no statistics to compute");
        }
        SubmitError::Unreadable(source) => {
            log::error!("{source}");
            log_cause(source);
        }
        SubmitError::NotPersisted { analysis, source } => {
            log::error!("{source}");
            log_cause(source);
            log::warn!(
                "{} cleaned lines were not saved; rerun with --no-save to print them",
                analysis.cleaned().len()
            );
        }
        other => log::error!("{other}"),
    }
}

fn log_cause(err: &ApplicationError) {
    if let Some(cause) = err.root_cause() {
        log::error!("caused by: {cause}");
    }
}

fn exit_code_for(err: &SubmitError) -> ExitCode {
    match err {
        SubmitError::Rejected(DomainError::EmptyInput | DomainError::EmptyResult) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
