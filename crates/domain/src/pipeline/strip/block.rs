//! 複数行デリミタのパス
//!
//! パスごとに `Outside` / `Inside` の 2 状態を持ち、行を先頭から順に畳み込みます。
//! 状態はパスの開始時に必ず `Outside` に戻り、パス間・実行間で共有されません。

/// Whether the scan is currently inside a multi-line comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    #[default]
    Outside,
    Inside,
}

impl BlockState {
    /// Apply one line and return the next state with what to emit, if anything.
    ///
    /// | occurrences | state   | emit                  | next    |
    /// |-------------|---------|-----------------------|---------|
    /// | 0           | Outside | whole line            | Outside |
    /// | 1           | Outside | prefix before delim   | Inside  |
    /// | 1           | Inside  | suffix after 1st char | Outside |
    /// | otherwise   | any     | nothing               | same    |
    ///
    /// A line holding two delimiters (a self-contained one-line comment) falls
    /// in the last row and is dropped whole.
    ///
    /// The closing suffix starts one character into the delimiter, so
    /// `end''' + 2` leaves `'' + 2`. A bare leftover (`''`) is removed later by
    /// the artifact filter.
    pub fn step(self, line: &str, delimiter: &str) -> (Self, Option<String>) {
        let occurrences = line.matches(delimiter).count();
        match (occurrences, self) {
            (0, Self::Outside) => (Self::Outside, Some(line.to_string())),
            (1, Self::Outside) => {
                let prefix = line.find(delimiter).map_or(line, |pos| &line[..pos]);
                (Self::Inside, Some(prefix.to_string()))
            }
            (1, Self::Inside) => {
                let first_len = delimiter.chars().next().map_or(0, char::len_utf8);
                let suffix = line.find(delimiter).map_or("", |pos| &line[pos + first_len..]);
                (Self::Outside, Some(suffix.to_string()))
            }
            _ => (self, None),
        }
    }
}

/// One full pass over `lines` for a single `delimiter`.
pub fn strip_block(lines: Vec<String>, delimiter: &str) -> Vec<String> {
    let (state, kept) = lines.into_iter().fold(
        (BlockState::Outside, Vec::new()),
        |(state, mut kept), line| {
            let (next, emitted) = state.step(&line, delimiter);
            kept.extend(emitted);
            (next, kept)
        },
    );
    if state == BlockState::Inside {
        log::debug!("unterminated {delimiter} comment runs to end of input");
    }
    kept
}
