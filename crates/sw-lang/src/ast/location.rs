use std::fmt;

/// 1-based source position of a node, used for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeLocation {
    pub line: usize,
    pub column: usize,
}

impl NodeLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position of byte `offset` within `source`.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let prefix = &source[..offset.min(source.len())];
        let line = prefix.matches('\n').count() + 1;
        let line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = prefix[line_start..].chars().count() + 1;
        Self { line, column }
    }
}

impl fmt::Display for NodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
