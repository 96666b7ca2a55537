use clap::Parser;

use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::ports::outbound::ReportFormatter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Check resolved dependency artifacts for duplicate MANIFEST.MF entries
#[derive(Parser, Debug)]
#[command(name = "manifest-audit")]
#[command(version)]
#[command(about = "Check resolved dependency artifacts for duplicate MANIFEST.MF entries", long_about = None)]
pub struct Args {
    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the project directory containing configurations.toml
    /// (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Audit the immediate subdirectories of DIR as configurations
    /// instead of reading a descriptor file
    #[arg(long, value_name = "DIR", conflicts_with = "path")]
    pub scan_dir: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Exclude artifacts whose file name matches a pattern (supports wildcards: *)
    /// Can be specified multiple times: -e "app.jar" -e "*-sources.jar"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Exit with code 1 when duplicate manifests are found
    #[arg(long)]
    pub deny_duplicates: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
