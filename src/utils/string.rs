/// Turns a record identifier into something usable as a test function name.
///
/// Lowercases and replaces every `.` with `_`. Nothing else is touched.
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.to_lowercase().replace('.', "_")
}

const RUST_KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Returns true when `name` can be used as a function name without the raw
/// `r#` form: ASCII identifier characters and not a reserved keyword.
pub fn is_rust_identifier(name: &str) -> bool {
    if RUST_KEYWORDS.contains(&name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    if name == "_" {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
