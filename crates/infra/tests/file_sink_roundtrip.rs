// crates/infra/tests/file_sink_roundtrip.rs
use std::fs;

use code_counter_domain::CommentSyntax;
use code_counter_infra::{FileSink, FileSource};
use code_counter_ports::{CleanedSink, TextSource};
use code_counter_shared_kernel::{CodeCounterError, InfrastructureError};
use code_counter_usecase::{SubmitCleaning, SubmitError};

const SAMPLE: &str = r#"
"""
Module docstring
"""
import sys  # needed for argv

def main():
    '''entry point'''
    args = sys.argv[1:]
    '''
    multi-line note
    '''
    return len(args)
"#;

#[test]
fn read_back_equals_joined_lines() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FileSink::new(dir.path().join("output.txt"));
    let lines = vec!["a = 1".to_string(), "b = 2".to_string()];

    sink.write(&lines).unwrap();

    assert_eq!(fs::read_to_string(sink.path()).unwrap(), "a = 1\nb = 2\n");
    assert_eq!(sink.read_back().unwrap(), lines.join("\n"));
}

#[test]
fn atomic_sink_round_trips_too() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FileSink::new(dir.path().join("output.txt")).atomic(true);
    let lines = vec!["only".to_string()];
    sink.write(&lines).unwrap();
    assert_eq!(sink.read_back().unwrap(), "only");
}

#[test]
fn submit_from_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample.py");
    fs::write(&input, SAMPLE).unwrap();

    let syntax = CommentSyntax::default();
    let sink = FileSink::new(dir.path().join("output.txt"));
    let submission = SubmitCleaning::new(&syntax)
        .with_sink(&sink)
        .run_from(&FileSource::new(&input))
        .expect("submit succeeds");

    // the one-line '''entry point''' holds two delimiters and is dropped whole
    let expected = ["import sys  ", "def main():", "args = sys.argv[1:]", "return len(args)"];
    assert_eq!(submission.analysis.cleaned().as_slice(), expected);
    assert_eq!(submission.displayed_text, expected.join("\n"));
    assert_eq!(sink.read_back().unwrap(), submission.displayed_text);
}

#[test]
fn unwritable_sink_reports_failure_and_keeps_lines() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FileSink::new(dir.path().join("no-such-dir").join("output.txt"));
    let syntax = CommentSyntax::default();

    let err = SubmitCleaning::new(&syntax).with_sink(&sink).run("x = 1\n").unwrap_err();

    assert!(matches!(err, SubmitError::NotPersisted { .. }));
    assert_eq!(err.recovered().unwrap().cleaned().as_slice(), ["x = 1"]);
    let root = err.into_error();
    assert!(matches!(root, CodeCounterError::Application(_)));
}

#[test]
fn missing_input_is_a_source_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileSource::new(dir.path().join("absent.py")).read().unwrap_err();
    assert!(matches!(err, CodeCounterError::Infrastructure(InfrastructureError::SourceRead { .. })));
}
