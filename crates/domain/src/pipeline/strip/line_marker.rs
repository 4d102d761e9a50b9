//! 単一行マーカーのパス (状態なし)

/// Truncate every line before the first `marker`; lines without it pass through.
///
/// The kept prefix is not trimmed again, so `code  # note` becomes `code  `.
pub fn strip_line_marker(lines: Vec<String>, marker: char) -> Vec<String> {
    lines
        .into_iter()
        .map(|mut line| {
            if let Some(pos) = line.find(marker) {
                line.truncate(pos);
            }
            line
        })
        .collect()
}
