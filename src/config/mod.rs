pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;

pub use catalog::Catalog;
#[cfg(feature = "cli")]
pub use cli::{CliConfig, LogFormat};
