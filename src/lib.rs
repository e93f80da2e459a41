/// Casegen
///
/// Turns a file of `<identifier> <expected>` lines into Rust `#[test]`
/// functions that assert `solve("<identifier>")` returns the expected value.
pub mod cli;
pub mod error;
pub mod generator;
pub mod logging;
pub mod record;
pub mod template;
pub mod utils;

pub use error::{Error, IoError, Result};
pub use generator::{generate_file, run, transform, Summary};
pub use record::Record;
pub use template::TestTemplate;
