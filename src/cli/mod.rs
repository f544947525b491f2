pub mod commands;
pub mod output;

pub use commands::{CliArgs, OutputFormatArg};
pub use output::{OutputFormat, OutputFormatter};
