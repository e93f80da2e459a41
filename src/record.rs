use crate::utils::normalize_identifier;

/// One `(identifier, expected value)` pair read from a line of the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub identifier: String,
    pub expected: String,
}

impl Record {
    pub fn new(identifier: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            expected: expected.into(),
        }
    }

    /// Splits `line` on runs of whitespace and keeps the first two tokens.
    ///
    /// Returns `None` for lines with fewer than two tokens. Those lines are
    /// skipped, not rejected. Tokens past the second are ignored. The ASCII
    /// separator controls `\x1c`..=`\x1f` count as whitespace here, unlike in
    /// `str::split_whitespace`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split(is_separator).filter(|t| !t.is_empty());
        let identifier = tokens.next()?;
        let expected = tokens.next()?;
        Some(Self::new(identifier, expected))
    }

    /// Name of the generated test function.
    pub fn test_name(&self) -> String {
        normalize_identifier(&self.identifier)
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
