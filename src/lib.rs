pub mod app;
pub mod config;
pub mod error;
pub mod generate;
pub mod materialize;
pub mod progress;
pub mod record;
pub mod render;
pub mod validate;
pub mod vocab;

pub use error::{ErrorKind, HarmonogramError};
pub use generate::GeneratedPath;
pub use vocab::Vocabulary;
