use anyhow::Context;

use conversify::conversation::default_config_path;
use conversify::{theme, Conversation, ConversifyConfig, Published};

use crate::args::CliArgs;
use crate::input::load_turns;

pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let base = load_config(&args)?;
    let config = args.apply(base);
    if let Some(notice) = theme_notice(&config.theme) {
        eprintln!("{notice}");
    }
    let mut conversation = Conversation::from_config(config)?;
    conversation.add_turns(load_turns(&args.input)?);
    match conversation.publish()? {
        Published::Written(path) => eprintln!("Exported to {}", path.display()),
        Published::Printed => {}
    }
    Ok(())
}

fn theme_notice(name: &str) -> Option<String> {
    if theme::is_known(name) {
        return None;
    }
    let names: Vec<_> = theme::names().collect();
    Some(format!(
        "Unknown theme '{name}', using '{}'. Available: {}",
        theme::DEFAULT_THEME,
        names.join(", ")
    ))
}

fn load_config(args: &CliArgs) -> anyhow::Result<ConversifyConfig> {
    match &args.config {
        Some(path) => ConversifyConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            let config = ConversifyConfig::load_default()?;
            if let Some(path) = default_config_path() {
                log::debug!("config resolved from {}", path.display());
            }
            Ok(config)
        }
    }
}
