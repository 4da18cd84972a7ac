use poise::serenity_prelude::{self as serenity, MessageUpdateEvent};
use tracing::info;

use crate::models::{Data, Error};
use crate::responder::MessageEdit;

/// Handle a message edit, logging what changed locally
pub async fn handle_message_update(
    ctx: &serenity::Context,
    old: Option<&serenity::Message>,
    new: Option<&serenity::Message>,
    event: &MessageUpdateEvent,
    data: &Data,
) -> Result<(), Error> {
    let Some(author) = new.map(|m| &m.author).or(event.author.as_ref()) else {
        return Ok(());
    };
    // Embed-only updates carry no content
    let Some(after) = new.map(|m| m.content.as_str()).or(event.content.as_deref()) else {
        return Ok(());
    };

    let channel_name = match event.channel_id.name(ctx).await {
        Ok(name) => name,
        Err(_) => format!("<#{}>", event.channel_id),
    };

    let edit = MessageEdit {
        author_name: &author.name,
        author_is_bot: author.bot,
        before: old.map(|m| m.content.as_str()),
        after,
        channel_name: &channel_name,
    };

    if let Some(line) = data.responder.edit_diagnostic(&edit) {
        info!("{}", line);
    }

    Ok(())
}
