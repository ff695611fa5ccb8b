mod commands;
mod reader;
pub mod parse;

pub use commands::convert_path_commands;
pub use reader::{extract_icon, Extraction, IconReader};

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("no `ImageVector.Builder(...)` invocation found")]
    MissingBuilder,
    #[error("the builder invocation has an empty name")]
    EmptyName,
    #[error("no path block produced any drawing command")]
    NoPaths,
}
