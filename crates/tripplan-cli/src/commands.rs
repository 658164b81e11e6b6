use super::args::{Cli, Commands, ConfigCommand};
use super::context::AppContext;
use super::handlers;
use super::logging::init_logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let ctx = AppContext::load(
        cli.data_dir.as_deref(),
        cli.api_url.as_deref(),
        cli.today.as_deref(),
        cli.format,
    )?;

    match cli.command {
        Commands::Plan { fields } => handlers::plan::handle(&ctx, &fields),

        Commands::Check { fields } => handlers::check::handle(&ctx, &fields),

        Commands::Interactive { fields } => handlers::interactive::handle(&ctx, &fields),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Set { url } => handlers::config::set(&ctx, &url),
            ConfigCommand::Unset => handlers::config::unset(&ctx),
        },
    }
}
