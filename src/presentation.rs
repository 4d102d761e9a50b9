// src/presentation.rs
use std::fmt::Write;

use code_counter_domain::{Analysis, report::StatsReport};
use code_counter_shared_kernel::Result;
use code_counter_usecase::Submission;

use crate::{config::Config, options::OutputFormat};

/// Render a whole submission. Nothing is printed until every part rendered.
pub fn render(submission: &Submission, config: &Config) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(render_text(&submission.analysis, &submission.displayed_text, config)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(submission)?)),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(submission)?),
    }
}

fn render_text(analysis: &Analysis, displayed: &str, config: &Config) -> String {
    let mut out = String::new();
    out.push_str("Statistics\n");
    let _ = writeln!(out, "{}", StatsReport::new(analysis.statistics()));

    if config.show_counts {
        let counts: Vec<String> = analysis.char_counts().iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "Char counts: {}", counts.join(", "));
    }

    if !config.stats_only {
        out.push_str("----------------------------------------------\n");
        out.push_str(displayed);
        out.push('\n');
    }
    out
}

/// Clear the terminal before a watch cycle re-renders.
pub fn print_clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

#[cfg(test)]
mod tests {
    use chrono::Local;
    use code_counter_domain::{CommentSyntax, analyze};

    use super::*;
    use crate::config::ConfigBuilder;

    fn submission(raw: &str) -> Submission {
        let analysis = analyze(raw, &CommentSyntax::default()).unwrap();
        let displayed_text = analysis.cleaned_text();
        Submission { analysis, displayed_text, persisted_to: None, completed_at: Local::now() }
    }

    #[test]
    fn text_report_then_code() {
        let config = ConfigBuilder::default().build().unwrap();
        let out = render(&submission("ab\nabcd # x\na\n"), &config).unwrap();
        assert!(out.starts_with("Statistics\nLines of code: 3\nTotal chars: 8\n"));
        assert!(out.ends_with("ab\nabcd \na\n"));
    }

    #[test]
    fn stats_only_with_counts() {
        let config = ConfigBuilder::default().stats_only(true).show_counts(true).build().unwrap();
        let out = render(&submission("ab\nabcd\na\n"), &config).unwrap();
        assert!(out.contains("Char counts: 2, 4, 1\n"));
        assert!(!out.contains("abcd"));
        assert!(out.contains("Mean: 2\nMedian: 2\n"));
    }

    #[test]
    fn json_carries_all_three_outputs() {
        let config = ConfigBuilder::default().format(OutputFormat::Json).build().unwrap();
        let out = render(&submission("ab\nabcd\na\n"), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["cleaned"], serde_json::json!(["ab", "abcd", "a"]));
        assert_eq!(value["char_counts"], serde_json::json!([2, 4, 1]));
        assert_eq!(value["statistics"]["lines"], 3);
        assert_eq!(value["statistics"]["chars_per_line"], 2);
        assert!(value["completed_at"].is_string());
    }
}
