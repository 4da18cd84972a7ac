/// Gateway event dispatch: one handler per event the bot cares about
mod member;
mod message;
mod ready;

use poise::serenity_prelude::{self as serenity, FullEvent};

use crate::models::{Data, Error};

/// Route a gateway event to its handler, other events are ignored
pub async fn handle_event(
    ctx: &serenity::Context,
    event: &FullEvent,
    framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        FullEvent::Ready { data_about_bot } => ready::handle_ready(ctx, data_about_bot),
        FullEvent::CacheReady { guilds } => {
            ready::handle_cache_ready(ctx, guilds.len(), framework, data).await
        }
        FullEvent::GuildMemberRemoval {
            user,
            member_data_if_available,
            ..
        } => {
            member::handle_member_removal(ctx, user, member_data_if_available.as_ref(), data).await
        }
        FullEvent::MessageUpdate {
            old_if_available,
            new,
            event,
        } => {
            message::handle_message_update(
                ctx,
                old_if_available.as_ref(),
                new.as_ref(),
                event,
                data,
            )
            .await
        }
        _ => Ok(()),
    }
}
