use poise::serenity_prelude as serenity;
use tracing::info;

use crate::models::{Data, Error};
use crate::utils::datetime::date_from_unix;

/// Handle a member leaving the guild
pub async fn handle_member_removal(
    ctx: &serenity::Context,
    user: &serenity::User,
    member: Option<&serenity::Member>,
    data: &Data,
) -> Result<(), Error> {
    let user_tag = user.tag();
    info!("{} left the server", user_tag);

    // Join date is only known when the member was cached
    let joined_at = member
        .and_then(|m| m.joined_at)
        .and_then(|ts| date_from_unix(ts.unix_timestamp(), data.responder.timezone()));

    let outbox = data.outbox(ctx);
    data.responder.user_left(&outbox, &user_tag, joined_at).await
}
