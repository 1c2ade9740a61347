mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use decapi::{DecapiClient, TwitchUptimeQuery, YoutubeQuery};

#[derive(Parser)]
#[command(name = "decapi")]
#[command(version)]
#[command(about = "Fetch YouTube and Twitch channel metadata from decapi.me", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "decapi.toml")]
    config: PathBuf,

    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Override the Twitch channel
    #[arg(long)]
    channel: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Latest upload of a YouTube channel
    LatestVideo {
        /// YouTube channel id
        #[arg(long)]
        channel_id: Option<String>,
        /// Response template, {id} and {title} are substituted remotely
        #[arg(long)]
        format: Option<String>,
        /// Ignore livestream VODs
        #[arg(long)]
        no_livestream: bool,
        /// Ignore shorts
        #[arg(long)]
        no_shorts: bool,
        /// Number of most recent uploads to skip
        #[arg(long, default_value_t = 0)]
        skip: u32,
        /// Require an {id, title} response
        #[arg(long)]
        typed: bool,
    },
    /// How long the Twitch channel has been live
    Uptime {
        /// Text returned while the channel is offline
        #[arg(long, default_value = decapi::DEFAULT_OFFLINE_MSG)]
        offline_msg: String,
    },
    /// Current Twitch stream title
    Title,
    /// Uptime and title together
    Status {
        #[arg(long, default_value = decapi::DEFAULT_OFFLINE_MSG)]
        offline_msg: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = config::load(&cli.config).await?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(channel) = cli.channel {
        config = config.with_twitch_channel(channel);
    }

    let client = DecapiClient::with_config(reqwest::Client::new(), config);

    match cli.command {
        Command::LatestVideo {
            channel_id,
            format,
            no_livestream,
            no_shorts,
            skip,
            typed,
        } => {
            let mut query = YoutubeQuery::new()
                .no_livestream(no_livestream)
                .no_shorts(no_shorts)
                .skip(skip);
            if let Some(channel_id) = channel_id {
                query = query.channel_id(channel_id);
            }
            if let Some(format) = format {
                query = query.format(format);
            }

            if typed {
                let video = client.fetch_latest_video_typed(&query).await?;
                println!("{}", video.title);
                println!("{}", video.watch_url());
                println!("{}", video.embed_url());
            } else {
                let value = client.fetch_latest_video(&query).await?;
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        }
        Command::Uptime { offline_msg } => {
            let query = TwitchUptimeQuery::new().offline_msg(offline_msg);
            println!("{}", client.fetch_twitch_live_duration(&query).await?);
        }
        Command::Title => {
            println!("{}", client.fetch_twitch_title().await?);
        }
        Command::Status { offline_msg } => {
            let query = TwitchUptimeQuery::new().offline_msg(offline_msg);
            let status = client.fetch_twitch_status(&query).await?;
            if status.uptime.is_live() {
                tracing::info!("{} is live", client.config().twitch_channel);
            } else {
                tracing::info!("{} is offline", client.config().twitch_channel);
            }
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }

    Ok(())
}
