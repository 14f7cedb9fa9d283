use clap::Parser;
use std::path::PathBuf;

use conversify::{theme, ConversifyConfig};

#[derive(Parser, Debug)]
#[command(
    name = "conversify",
    about = "Render a recorded chat as JSON, Markdown or HTML"
)]
pub struct CliArgs {
    /// JSON file holding an array of turns or an exported chat_history.json
    pub input: PathBuf,
    /// Output format: json, md or html
    #[arg(long, short = 'f')]
    pub format: Option<String>,
    #[arg(long, short = 't', help = theme_help())]
    pub theme: Option<String>,
    /// Write chat_history.<ext> instead of printing
    #[arg(long, short = 'e')]
    pub export: bool,
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,
    #[arg(long)]
    pub user_name: Option<String>,
    #[arg(long)]
    pub bot_name: Option<String>,
    /// TOML config file, defaults to <config dir>/conversify/config.toml
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    /// Log level or filter spec, RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

fn theme_help() -> String {
    let names: Vec<_> = theme::names().collect();
    format!(
        "Theme name: {} (unknown names fall back to {})",
        names.join(", "),
        theme::DEFAULT_THEME
    )
}

impl CliArgs {
    /// Overlay command-line flags on top of a loaded config.
    pub fn apply(&self, mut config: ConversifyConfig) -> ConversifyConfig {
        if let Some(format) = &self.format {
            config.format = format.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if self.export {
            config.export = true;
        }
        if let Some(dir) = &self.output_dir {
            config.export_dir = Some(dir.clone());
        }
        if let Some(name) = &self.user_name {
            config.user_name = name.clone();
        }
        if let Some(name) = &self.bot_name {
            config.bot_name = name.clone();
        }
        config
    }
}
