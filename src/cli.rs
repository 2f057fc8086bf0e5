use clap::Parser;

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

/// Load the detail view of an anomaly-detection alert
#[derive(Parser, Debug)]
#[command(name = "alert-detail")]
#[command(version)]
#[command(
    about = "Load the detail view of an anomaly-detection alert",
    long_about = None
)]
pub struct Args {
    /// Identifier of the alert to load
    pub alert_id: String,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Base URL of the detection backend (overrides the config file)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Path to a config file (defaults to ./alert-detail.config.yml when present)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
