#[path = "conversify/app.rs"]
mod app;
#[path = "conversify/args.rs"]
mod args;
#[path = "conversify/input.rs"]
mod input;
#[path = "conversify/logging.rs"]
mod logging;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = args::CliArgs::parse();
    let _logger = logging::init_logging(&args.log_level)?;
    app::run(args)
}
