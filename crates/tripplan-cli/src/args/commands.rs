use super::common::TripFieldArgs;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Validate the trip request and send it to the planning service")]
    Plan {
        #[command(flatten)]
        fields: TripFieldArgs,
    },

    #[command(about = "Validate the trip request without sending it")]
    Check {
        #[command(flatten)]
        fields: TripFieldArgs,
    },

    #[command(about = "Edit the trip request line by line from stdin")]
    Interactive {
        #[command(flatten)]
        fields: TripFieldArgs,
    },

    #[command(about = "Manage the planning service configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the resolved configuration")]
    Show,

    #[command(about = "Store the planning service base URL in config.toml")]
    Set {
        #[arg(value_name = "URL")]
        url: String,
    },

    #[command(about = "Remove the stored planning service base URL")]
    Unset,
}
