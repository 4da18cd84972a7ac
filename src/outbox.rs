/// Outbound calls to Discord, behind a trait so the responder can be exercised without a gateway
use ::serenity::async_trait;
use poise::serenity_prelude::{
    self as serenity, ChannelId, ChannelType, CreateMessage, GuildId, MessageId, ReactionType,
    UserId,
};
use std::sync::Arc;

use crate::constants::CHANNEL_NAME_SEPARATOR;
use crate::models::Error;

/// A message the bot can react to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageRef {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

impl MessageRef {
    pub fn new(channel_id: ChannelId, message_id: MessageId) -> Self {
        Self {
            channel_id,
            message_id,
        }
    }
}

impl From<&serenity::Message> for MessageRef {
    fn from(message: &serenity::Message) -> Self {
        Self::new(message.channel_id, message.id)
    }
}

#[async_trait]
pub trait Outbox: Send + Sync {
    /// Find a text channel by its human-readable name
    fn resolve_channel(&self, name: &str) -> Option<ChannelId>;

    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<MessageRef, Error>;

    async fn add_reaction(&self, message: MessageRef, reaction: ReactionType) -> Result<(), Error>;

    async fn remove_all_reactions(&self, message: MessageRef) -> Result<(), Error>;

    async fn send_direct_message(&self, user_id: UserId, content: &str) -> Result<(), Error>;
}

/// Check if a channel name designates the wanted channel, decoration aside
pub fn channel_name_matches(channel_name: &str, wanted: &str) -> bool {
    channel_name == wanted
        || channel_name
            .rsplit(CHANNEL_NAME_SEPARATOR)
            .next()
            .is_some_and(|bare| bare.trim() == wanted)
}

/// Guilds searched for a channel name: the home guild alone, or every guild by ascending ID
pub fn guild_search_order(mut guilds: Vec<GuildId>, home_guild: Option<GuildId>) -> Vec<GuildId> {
    match home_guild {
        Some(home) => vec![home],
        None => {
            guilds.sort_unstable();
            guilds
        }
    }
}

/// Outbox backed by serenity's HTTP client and cache
pub struct SerenityOutbox {
    http: Arc<serenity::Http>,
    cache: Arc<serenity::Cache>,
    home_guild: Option<GuildId>,
}

impl SerenityOutbox {
    pub fn new(
        http: Arc<serenity::Http>,
        cache: Arc<serenity::Cache>,
        home_guild: Option<GuildId>,
    ) -> Self {
        Self {
            http,
            cache,
            home_guild,
        }
    }

    pub fn from_context(ctx: &serenity::Context, home_guild: Option<GuildId>) -> Self {
        Self::new(ctx.http.clone(), ctx.cache.clone(), home_guild)
    }
}

#[async_trait]
impl Outbox for SerenityOutbox {
    fn resolve_channel(&self, name: &str) -> Option<ChannelId> {
        let guilds = guild_search_order(self.cache.guilds(), self.home_guild);
        guilds.into_iter().find_map(|guild_id| {
            let guild = self.cache.guild(guild_id)?;
            guild
                .channels
                .values()
                .find(|channel| {
                    channel.kind == ChannelType::Text && channel_name_matches(&channel.name, name)
                })
                .map(|channel| channel.id)
        })
    }

    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<MessageRef, Error> {
        let message = channel_id.say(&self.http, content).await?;
        Ok(MessageRef::from(&message))
    }

    async fn add_reaction(&self, message: MessageRef, reaction: ReactionType) -> Result<(), Error> {
        self.http
            .create_reaction(message.channel_id, message.message_id, &reaction)
            .await?;
        Ok(())
    }

    async fn remove_all_reactions(&self, message: MessageRef) -> Result<(), Error> {
        self.http
            .delete_message_reactions(message.channel_id, message.message_id)
            .await?;
        Ok(())
    }

    async fn send_direct_message(&self, user_id: UserId, content: &str) -> Result<(), Error> {
        user_id
            .direct_message(
                (&self.cache, &*self.http),
                CreateMessage::new().content(content),
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_name_matches_exact() {
        assert!(channel_name_matches("log", "log"));
        assert!(channel_name_matches("general", "general"));

        assert!(!channel_name_matches("logs", "log"));
        assert!(!channel_name_matches("general-2", "general"));
    }

    #[test]
    fn test_channel_name_matches_decorated() {
        assert!(channel_name_matches("🌐︱jellyfin", "jellyfin"));
        assert!(channel_name_matches("📜︱log", "log"));

        assert!(!channel_name_matches("🌐︱jellyfin-old", "jellyfin"));
        assert!(!channel_name_matches("jellyfin︱🌐", "jellyfin"));
    }

    #[test]
    fn test_guild_search_order() {
        let guilds = vec![GuildId::new(30), GuildId::new(10), GuildId::new(20)];

        assert_eq!(
            guild_search_order(guilds.clone(), None),
            vec![GuildId::new(10), GuildId::new(20), GuildId::new(30)]
        );
        assert_eq!(
            guild_search_order(guilds, Some(GuildId::new(20))),
            vec![GuildId::new(20)]
        );
    }

    #[test]
    fn test_message_ref_new() {
        let message = MessageRef::new(ChannelId::new(1), MessageId::new(2));
        assert_eq!(message.channel_id, ChannelId::new(1));
        assert_eq!(message.message_id, MessageId::new(2));
    }
}
