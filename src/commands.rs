use std::time::Instant;

use crate::{
    constants::COMMAND_PREFIX,
    models::{Context, Error},
    outbox::MessageRef,
    responder::Invocation,
    utils::{
        datetime::today_in,
        messages::{format_help, format_ping},
    },
};

/// Message that invoked a prefix command, slash commands have none
fn invoking_message(ctx: Context<'_>) -> Option<MessageRef> {
    match ctx {
        poise::Context::Prefix(prefix) => Some(MessageRef::from(prefix.msg)),
        _ => None,
    }
}

fn invocation<'a, 'c: 'a>(ctx: Context<'c>, channel_name: &'a str) -> Invocation<'a> {
    let author = ctx.author();
    Invocation {
        channel_id: ctx.channel_id(),
        channel_name,
        author_id: author.id,
        author_name: &author.name,
        author_is_bot: author.bot,
        message: invoking_message(ctx),
    }
}

/// Ask for a temporary Jellyfin link, sent by direct message
#[poise::command(prefix_command, guild_only)]
pub async fn jellyfin(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();
    let outbox = data.outbox(ctx.serenity_context());

    let channel_name = ctx
        .channel_id()
        .name(ctx.serenity_context())
        .await
        .unwrap_or_default();

    data.responder
        .jellyfin_request(
            &outbox,
            &data.jellyfin,
            &invocation(ctx, &channel_name),
            Instant::now(),
        )
        .await
}

/// Check that the bot is alive and how far away it is
#[poise::command(prefix_command, slash_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let latency = ctx.ping().await;
    ctx.say(format_ping(latency.as_millis())).await?;

    if let Some(request) = invoking_message(ctx) {
        let outbox = ctx.data().outbox(ctx.serenity_context());
        ctx.data()
            .responder
            .add_reaction_robot(&outbox, request)
            .await?;
    }

    Ok(())
}

/// Run the birthday check again (staff only)
#[poise::command(prefix_command, guild_only)]
pub async fn birthday(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();
    let outbox = data.outbox(ctx.serenity_context());
    let today = today_in(data.responder.timezone());

    data.responder
        .birthday_on_demand(&outbox, &invocation(ctx, ""), today)
        .await
}

/// React to the replied-to message with a named emote (staff only)
#[poise::command(prefix_command, guild_only)]
pub async fn react(
    ctx: Context<'_>,
    #[description = "Emote name, e.g. bravo or catvibe"] name: String,
) -> Result<(), Error> {
    let poise::Context::Prefix(prefix) = ctx else {
        return Ok(());
    };
    let data = ctx.data();
    let outbox = data.outbox(ctx.serenity_context());
    let target = prefix.msg.referenced_message.as_deref().map(MessageRef::from);

    data.responder
        .react_on_demand(&outbox, &invocation(ctx, ""), &name, target)
        .await
}

/// List the available commands
#[poise::command(prefix_command, slash_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(format_help(COMMAND_PREFIX)).await?;
    Ok(())
}
