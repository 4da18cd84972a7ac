mod commands;
mod constants;
mod emotes;
mod handlers;
mod logging;
mod models;
mod outbox;
mod responder;
mod services;
mod utils;

use chrono_tz::Tz;
use poise::serenity_prelude as serenity;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    commands::{birthday, help, jellyfin, ping, react},
    constants::{
        COMMAND_PREFIX, DEFAULT_BIRTHDAYS_FILE, DEFAULT_LOG_CONFIG, DEFAULT_STAFF_PREFIX,
        DEFAULT_TIMEZONE, JELLYFIN_LINK_TTL, MESSAGE_CACHE_SIZE,
    },
    handlers::handle_event,
    logging::initialize_logging,
    models::{Data, Error},
    responder::{Responder, ResponderSettings},
    services::{BirthdayTable, JellyfinService, RoleService},
    utils::timezone::parse_timezone,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let log_config = std::env::var("LOG_CONFIG").unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_string());
    initialize_logging(Path::new(&log_config));

    // Load configuration from environment
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let birthdays = match BirthdayTable::load(&config.birthdays_file) {
        Ok(birthdays) if birthdays.is_empty() => {
            warn!("Birthday table is empty");
            birthdays
        }
        Ok(birthdays) => {
            info!("Loaded {} birthday(s)", birthdays.len());
            birthdays
        }
        Err(e) => {
            error!("{}, starting without birthdays", e);
            BirthdayTable::default()
        }
    };

    // Every singleton is built once here and handed to the framework
    let responder = Responder::new(
        Arc::new(birthdays),
        Arc::new(RoleService::new(config.staff_prefix)),
        ResponderSettings {
            timezone: config.timezone,
            announce_latency: config.announce_latency,
        },
    );
    let jellyfin = JellyfinService::new(config.jellyfin_url, JELLYFIN_LINK_TTL);
    let home_guild = config.home_guild_id.map(serenity::GuildId::new);
    let data = Data::new(responder, jellyfin, home_guild);

    // Create and start the bot
    if let Err(e) = start_bot(config.discord_token, data, config.dev_guild_id).await {
        error!("Bot error: {}", e);
        std::process::exit(1);
    }
}

/// Configuration loaded from environment variables
struct Config {
    discord_token: String,
    dev_guild_id: Option<u64>,
    home_guild_id: Option<u64>,
    birthdays_file: PathBuf,
    timezone: Tz,
    announce_latency: bool,
    staff_prefix: String,
    jellyfin_url: Option<String>,
}

/// Interpret an on/off environment value
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Box<dyn std::error::Error>> {
    let discord_token = std::env::var("DISCORD_TOKEN")
        .map_err(|_| "DISCORD_TOKEN environment variable not set. Set it with: export DISCORD_TOKEN=your_bot_token")?;

    // Optional: development guild ID for faster command registration
    let dev_guild_id = std::env::var("DEV_GUILD_ID")
        .ok()
        .and_then(|id| id.parse::<u64>().ok());

    if dev_guild_id.is_some() {
        info!("Development mode: Commands will be registered to guild only");
    }

    // Channels are looked up by name in this guild, the development guild by default
    let home_guild_id = std::env::var("HOME_GUILD_ID")
        .ok()
        .and_then(|id| id.parse::<u64>().ok())
        .or(dev_guild_id);

    let birthdays_file = std::env::var("BIRTHDAYS_FILE")
        .unwrap_or_else(|_| DEFAULT_BIRTHDAYS_FILE.to_string())
        .into();

    let timezone = parse_timezone(
        &std::env::var("BOT_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string()),
    )?;

    let announce_latency = std::env::var("ANNOUNCE_LATENCY")
        .map(|value| parse_flag(&value))
        .unwrap_or(false);

    let staff_prefix =
        std::env::var("STAFF_PREFIX").unwrap_or_else(|_| DEFAULT_STAFF_PREFIX.to_string());

    let jellyfin_url = std::env::var("JELLYFIN_URL").ok();
    if jellyfin_url.is_none() {
        info!("JELLYFIN_URL not set, Jellyfin links are disabled");
    }

    Ok(Config {
        discord_token,
        dev_guild_id,
        home_guild_id,
        birthdays_file,
        timezone,
        announce_latency,
        staff_prefix,
        jellyfin_url,
    })
}

/// Create and start the Discord bot
async fn start_bot(
    token: String,
    data: Data,
    dev_guild_id: Option<u64>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Create framework
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![jellyfin(), ping(), birthday(), react(), help()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(COMMAND_PREFIX.to_string()),
                ..Default::default()
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(handle_event(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                // Register commands based on dev_guild_id
                if let Some(guild_id) = dev_guild_id {
                    let guild = serenity::GuildId::new(guild_id);
                    info!("Registering commands in development guild: {}", guild_id);
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild)
                        .await?;
                } else {
                    info!("Registering commands globally (may take up to 1 hour)");
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                }

                info!("[Commands ready] LET'S GO !");
                Ok::<Data, Error>(data)
            })
        })
        .build();

    // Create client with required intents
    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    // Edits are compared against the cached message
    let mut cache_settings = ::serenity::cache::Settings::default();
    cache_settings.max_messages = MESSAGE_CACHE_SIZE;

    let mut client = serenity::ClientBuilder::new(token, intents)
        .cache_settings(cache_settings)
        .framework(framework)
        .await?;

    // Start the bot
    info!("Starting bot...");
    client.start().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("yes"));
        assert!(parse_flag("on"));

        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("maybe"));
    }
}
