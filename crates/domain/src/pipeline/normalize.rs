//! 行の正規化

/// Split `raw` into lines, trim each one and drop the blank ones.
///
/// Relative order is preserved. Empty input yields an empty vector; deciding
/// whether that is an error is up to the caller.
pub fn normalize(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_lines() {
        let lines = normalize("  a = 1  \n\n\t\n    b = 2\n");
        assert_eq!(lines, vec!["a = 1", "b = 2"]);
    }

    #[test]
    fn handles_crlf() {
        let lines = normalize("x = 1\r\n\r\ny = 2\r\n");
        assert_eq!(lines, vec!["x = 1", "y = 2"]);
    }

    #[test]
    fn empty_and_whitespace_only_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n \t \n").is_empty());
    }

    #[test]
    fn keeps_comment_lines_untouched() {
        let lines = normalize("# header\ncode()");
        assert_eq!(lines, vec!["# header", "code()"]);
    }
}
