use poise::serenity_prelude::{self as serenity, GuildId};

use crate::outbox::SerenityOutbox;
use crate::responder::Responder;
use crate::services::JellyfinService;

/// Bot state shared across all handlers and commands
pub struct Data {
    /// Event and command responses
    pub responder: Responder,
    /// Jellyfin link hand-out
    pub jellyfin: JellyfinService,
    /// Guild whose channels are resolved by name, any cached guild when unset
    pub home_guild: Option<GuildId>,
}

impl Data {
    pub fn new(responder: Responder, jellyfin: JellyfinService, home_guild: Option<GuildId>) -> Self {
        Self {
            responder,
            jellyfin,
            home_guild,
        }
    }

    pub fn outbox(&self, ctx: &serenity::Context) -> SerenityOutbox {
        SerenityOutbox::from_context(ctx, self.home_guild)
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
