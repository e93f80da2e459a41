use crate::record::Record;

pub const DEFAULT_FUNCTION: &str = "solve";

/// Shape of one generated test case.
///
/// The identifier and expected value are substituted verbatim; nothing is
/// escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestTemplate {
    pub function: String,
}

impl Default for TestTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_FUNCTION)
    }
}

impl TestTemplate {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
        }
    }

    /// Renders `record` as a block that starts with a blank line and ends
    /// with the closing brace and a newline.
    pub fn render(&self, record: &Record) -> String {
        format!(
            "\n#[test]\nfn {name}() {{\n    assert_eq!({expected}, {function}(\"{identifier}\"));\n}}\n",
            name = record.test_name(),
            expected = record.expected,
            function = self.function,
            identifier = record.identifier,
        )
    }
}
