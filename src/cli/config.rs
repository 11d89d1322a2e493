use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "locator-advisor",
    version,
    about = "Recommends reliable Appium locators from a UI-hierarchy XML dump"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: locator-advisor.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a dump and report a locator suggestion per element
    Analyze {
        /// Path to the Appium/UIAutomator XML dump
        #[arg(long)]
        dump: String,

        /// Report format: console, json
        #[arg(long)]
        format: Option<String>,

        /// Report output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Comma-separated snippet languages (default: all supported);
        /// requires --snippet-dir
        #[arg(long)]
        languages: Option<String>,

        /// Directory to write per-language snippet bundles into
        #[arg(long)]
        snippet_dir: Option<String>,
    },

    /// List supported snippet languages
    Languages,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `locator-advisor.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub analyze: AnalyzeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub languages: Option<String>,

    pub snippet_dir: Option<String>,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            languages: None,
            snippet_dir: None,
        }
    }
}

// Serde default helpers
fn default_console() -> String {
    "console".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("locator-advisor.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
