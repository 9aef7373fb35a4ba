//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for routed responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal-friendly text with the contact link spelled out
    Text,
    /// Raw HTML body as served to the web widget
    Html,
    /// JSON with route, area and payload
    Json,
}

impl OutputFormat {
    /// Parse the `[output] format` config value.
    pub fn from_config(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "html" => Some(OutputFormat::Html),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// CLI arguments for dr-legal
#[derive(Parser, Debug)]
#[command(name = "dr-legal")]
#[command(author, version, about = "Dr. Legal - legal intake router")]
#[command(long_about = r#"
Dr. Legal routes a free-text message to a canned reply, an AI-generated reply,
or a fallback, tagged with the legal practice area and a WhatsApp call-to-action.

Routing order:
1. Shortcuts: empty input, greetings, farewells, hot topics
2. Topic gate: off-topic messages get the area menu, never the generator
3. Generator (one attempt), with a warm fallback when it is unavailable

Configuration files are loaded from (in priority order):
1. DRLEGAL_* environment variables
2. --config <path>     Explicit config file
3. ./drlegal.toml      Project-level config
4. ~/.config/dr-legal/config.toml   Global config

The generator key is read from $GROQ_API_KEY and the WhatsApp number from
$WHATSAPP_NUMERO unless the config names other variables.

Example:
  dr-legal "Fui demitido sem justa causa, tenho direito a horas extras?"
  dr-legal --classify "Caí num golpe do pix"
  dr-legal --chat
  dr-legal --serve --port 8080
"#)]
pub struct Cli {
    /// The message to route (not required in chat or serve mode)
    pub message: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long, conflicts_with = "serve")]
    pub chat: bool,

    /// Serve the HTTP chat endpoint (POST /chat)
    #[arg(short, long)]
    pub serve: bool,

    /// Port for --serve (overrides config and $PORT)
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Only classify the message and print the area with its match count
    #[arg(long)]
    pub classify: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
