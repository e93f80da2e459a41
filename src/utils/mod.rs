pub mod string;

pub use string::{is_rust_identifier, normalize_identifier};
