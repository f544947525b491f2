use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Sync Base64 image layer blocks between generated files
#[derive(Parser, Debug)]
#[command(
    name = "layersync",
    about = "Sync Base64 image layer blocks from a standalone HTML viewer into a generated component",
    version,
    long_about = "layersync extracts the img1Data and img2Data object literals (six Base64 \
                  layer properties each) from a source HTML file and rewrites the matching \
                  literals in a target component file, leaving everything else untouched.\n\n\
                  Examples:\n  \
                  layersync viewer_standalone.html page.tsx\n  \
                  layersync --format json viewer_standalone.html page.tsx\n  \
                  LAYERSYNC_SOURCE=viewer.html LAYERSYNC_TARGET=page.tsx layersync"
)]
pub struct CliArgs {
    #[arg(
        value_name = "SOURCE",
        help = "Source HTML file holding the blocks (falls back to LAYERSYNC_SOURCE)"
    )]
    pub source: Option<PathBuf>,

    #[arg(
        value_name = "TARGET",
        help = "Target file rewritten in place (falls back to LAYERSYNC_TARGET)"
    )]
    pub target: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub format: OutputFormatArg,

    #[arg(long, help = "Run the full pipeline but do not write the target file")]
    pub dry_run: bool,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Verbose output (debug level logging)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
