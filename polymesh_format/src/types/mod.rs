mod file_format;
mod format_registry;
mod writer_config;

pub use file_format::*;
pub use format_registry::*;
pub use writer_config::*;
