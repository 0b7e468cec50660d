/// An indivisible unit of managed env-file content.
///
/// Identity is exact string equality after stripping trailing line
/// terminators; a block matches only as a full contiguous window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagedContent {
    /// A single line.
    Line(String),
    /// An ordered, non-empty group of contiguous lines.
    Block(Vec<String>),
}

impl ManagedContent {
    pub fn line<S: Into<String>>(line: S) -> Self {
        ManagedContent::Line(line.into())
    }

    pub fn block<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ManagedContent::Block(lines.into_iter().map(Into::into).collect())
    }

    /// Lines of the unit with trailing terminators stripped.
    pub fn normalized_lines(&self) -> Vec<String> {
        match self {
            ManagedContent::Line(line) => vec![strip_terminator(line)],
            ManagedContent::Block(lines) => lines.iter().map(|l| strip_terminator(l)).collect(),
        }
    }
}

fn strip_terminator(line: &str) -> String {
    line.trim_end_matches('\n').trim_end_matches('\r').to_string()
}
