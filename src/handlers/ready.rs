//! Connection lifecycle handlers.
//!
//! `Ready` arrives right after the handshake, before guilds are cached, so it
//! only sets the status. The latency report and the birthday check wait for
//! `CacheReady`, once channels can be resolved by name.

use poise::serenity_prelude::{self as serenity, ActivityData};
use std::time::Duration;
use tracing::{error, info};

use crate::constants::STATUS_TEXT;
use crate::models::{Data, Error};

pub fn handle_ready(ctx: &serenity::Context, ready: &serenity::Ready) -> Result<(), Error> {
    info!("{} is connected to Discord", ready.user.name);
    ctx.set_activity(Some(ActivityData::custom(STATUS_TEXT)));
    Ok(())
}

pub async fn handle_cache_ready(
    ctx: &serenity::Context,
    guild_count: usize,
    framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    info!("Cache ready for {} guild(s)", guild_count);

    let outbox = data.outbox(ctx);
    let latency = shard_latency(ctx, framework).await;

    // Sending and reacting takes several round trips, keep it off the dispatch context
    let responder = data.responder.clone();
    tokio::spawn(async move {
        if let Err(e) = responder.announce_startup(&outbox, latency).await {
            error!("Birthday check failed: {}", e);
        }
    });

    Ok(())
}

/// Last heartbeat latency of the shard handling this context
async fn shard_latency(
    ctx: &serenity::Context,
    framework: poise::FrameworkContext<'_, Data, Error>,
) -> Duration {
    let shard_manager = framework.shard_manager();
    let runners = shard_manager.runners.lock().await;
    runners
        .get(&ctx.shard_id)
        .and_then(|runner| runner.latency)
        .unwrap_or_default()
}
