//! Turns gateway events and command outcomes into messages and reactions.
//!
//! The responder holds no mutable state: the birthday table and staff filter
//! are fixed at startup. Every outbound call goes through an [`Outbox`], and a
//! channel that cannot be resolved by name makes the call a no-op.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use poise::serenity_prelude::{ChannelId, UserId};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use crate::constants::{GENERAL_CHANNEL, JELLYFIN_CHANNEL, LOG_CHANNEL, SERVER_NAME};
use crate::emotes::{CAKE, CROSS, EYES, Emote, ROBOT, emoji};
use crate::models::Error;
use crate::outbox::{MessageRef, Outbox, channel_name_matches};
use crate::services::{BirthdayTable, JellyfinService, LinkRequest, RoleService};
use crate::utils::datetime::{format_simple_date, local_hour, today_in};
use crate::utils::messages::{
    format_birthday_announcement, format_edit_diagnostic, format_error,
    format_jellyfin_already_in_use, format_jellyfin_link, format_latency_report,
    format_user_left, greeting, jellyfin_not_authorized_notices,
};

const JELLYFIN_UNAVAILABLE: &str = "Jellyfin n'est pas disponible pour le moment.";
const NO_BIRTHDAY_TODAY: &str = "Pas d'anniversaire aujourd'hui.";

#[derive(Debug, Clone)]
pub struct ResponderSettings {
    /// Timezone deciding the current day and greeting
    pub timezone: Tz,
    /// Post the latency report in the log channel, not only in the local log
    pub announce_latency: bool,
}

/// An edited message as seen by the edit diagnostics
#[derive(Debug, Clone)]
pub struct MessageEdit<'a> {
    pub author_name: &'a str,
    pub author_is_bot: bool,
    /// Content before the edit, `None` when it was not cached
    pub before: Option<&'a str>,
    pub after: &'a str,
    pub channel_name: &'a str,
}

/// Who invoked a command, and where
#[derive(Debug, Clone)]
pub struct Invocation<'a> {
    pub channel_id: ChannelId,
    pub channel_name: &'a str,
    pub author_id: UserId,
    pub author_name: &'a str,
    pub author_is_bot: bool,
    /// Message carrying a prefix command, `None` for slash commands
    pub message: Option<MessageRef>,
}

#[derive(Clone)]
pub struct Responder {
    birthdays: Arc<BirthdayTable>,
    roles: Arc<RoleService>,
    settings: ResponderSettings,
}

impl Responder {
    pub fn new(
        birthdays: Arc<BirthdayTable>,
        roles: Arc<RoleService>,
        settings: ResponderSettings,
    ) -> Self {
        Self {
            birthdays,
            roles,
            settings,
        }
    }

    pub fn timezone(&self) -> &Tz {
        &self.settings.timezone
    }

    /// Report the gateway latency, in the log channel when enabled
    pub async fn send_latency(&self, outbox: &dyn Outbox, latency: Duration) -> Result<(), Error> {
        let latency_ms = latency.as_millis();
        info!("Latency : {} ms", latency_ms);

        if !self.settings.announce_latency {
            return Ok(());
        }

        let Some(channel_id) = outbox.resolve_channel(LOG_CHANNEL) else {
            debug!("No '{}' channel, latency report skipped", LOG_CHANNEL);
            return Ok(());
        };

        let hour = local_hour(Utc::now(), &self.settings.timezone);
        let message = format_latency_report(greeting(hour), latency_ms);
        outbox.send_message(channel_id, &message).await?;
        Ok(())
    }

    /// Once channels are known: latency report, then today's birthday check
    ///
    /// A failed latency report is logged and the birthday check still runs.
    pub async fn announce_startup(
        &self,
        outbox: &dyn Outbox,
        latency: Duration,
    ) -> Result<Option<MessageRef>, Error> {
        if let Err(e) = self.send_latency(outbox, latency).await {
            error!("Latency report failed: {}", e);
        }
        self.check_birthday_today(outbox).await
    }

    /// Post a farewell notice for a member who left the server
    pub async fn user_left(
        &self,
        outbox: &dyn Outbox,
        user_tag: &str,
        joined_at: Option<NaiveDate>,
    ) -> Result<(), Error> {
        let joined_at = joined_at.map(format_simple_date);
        let message = format_user_left(user_tag, SERVER_NAME, joined_at.as_deref());

        let Some(channel_id) = outbox.resolve_channel(LOG_CHANNEL) else {
            debug!("No '{}' channel, farewell for {} skipped", LOG_CHANNEL, user_tag);
            return Ok(());
        };

        outbox.send_message(channel_id, &message).await?;
        Ok(())
    }

    /// Diagnostic line for a member's edit, `None` for staff or unchanged content
    pub fn edit_diagnostic(&self, edit: &MessageEdit<'_>) -> Option<String> {
        if self.roles.is_staff(edit.author_is_bot, edit.author_name) {
            return None;
        }

        // An uncached message compares equal to its edited version
        let before = edit.before.unwrap_or(edit.after);
        if before == edit.after {
            return None;
        }

        Some(format_edit_diagnostic(
            edit.author_name,
            before,
            edit.after,
            edit.channel_name,
        ))
    }

    /// Announce today's birthday in the general channel
    pub async fn check_birthday_today(
        &self,
        outbox: &dyn Outbox,
    ) -> Result<Option<MessageRef>, Error> {
        self.check_birthday(outbox, today_in(&self.settings.timezone))
            .await
    }

    /// Announce the first birthday falling on `today` and celebrate it with reactions
    pub async fn check_birthday(
        &self,
        outbox: &dyn Outbox,
        today: NaiveDate,
    ) -> Result<Option<MessageRef>, Error> {
        let Some(user_id) = self.birthdays.celebrated_on(today) else {
            debug!("No birthday on {}", today);
            return Ok(None);
        };

        let Some(channel_id) = outbox.resolve_channel(GENERAL_CHANNEL) else {
            debug!("No '{}' channel, birthday of {} skipped", GENERAL_CHANNEL, user_id);
            return Ok(None);
        };

        let message = format_birthday_announcement(user_id);
        let announcement = outbox.send_message(channel_id, &message).await?;
        self.add_reaction_birthday(outbox, announcement).await?;

        info!("Announced birthday of {}", user_id);
        Ok(Some(announcement))
    }

    pub async fn add_reaction_vu(&self, outbox: &dyn Outbox, message: MessageRef) -> Result<(), Error> {
        outbox.add_reaction(message, emoji(EYES)).await
    }

    pub async fn add_reaction_refused(
        &self,
        outbox: &dyn Outbox,
        message: MessageRef,
    ) -> Result<(), Error> {
        outbox.add_reaction(message, emoji(CROSS)).await
    }

    pub async fn add_reaction_robot(
        &self,
        outbox: &dyn Outbox,
        message: MessageRef,
    ) -> Result<(), Error> {
        outbox.add_reaction(message, emoji(ROBOT)).await
    }

    pub async fn add_reaction_alarm(
        &self,
        outbox: &dyn Outbox,
        message: MessageRef,
    ) -> Result<(), Error> {
        self.add_emote(outbox, message, Emote::Alarm).await
    }

    pub async fn add_reaction_birthday(
        &self,
        outbox: &dyn Outbox,
        message: MessageRef,
    ) -> Result<(), Error> {
        outbox.add_reaction(message, emoji(CAKE)).await?;
        self.add_emote(outbox, message, Emote::Bravo).await
    }

    /// Replace every reaction on a handled Jellyfin request with the check emote
    pub async fn jellyfin_done(&self, outbox: &dyn Outbox, message: MessageRef) -> Result<(), Error> {
        outbox.remove_all_reactions(message).await?;
        self.add_emote(outbox, message, Emote::Check).await
    }

    pub async fn add_emote(
        &self,
        outbox: &dyn Outbox,
        message: MessageRef,
        emote: Emote,
    ) -> Result<(), Error> {
        outbox.add_reaction(message, emote.reaction()).await
    }

    pub async fn send_jellyfin_not_authorized(
        &self,
        outbox: &dyn Outbox,
        channel_id: ChannelId,
    ) -> Result<(), Error> {
        for notice in jellyfin_not_authorized_notices() {
            outbox.send_message(channel_id, &notice).await?;
        }
        Ok(())
    }

    pub async fn send_jellyfin_already_in_use(
        &self,
        outbox: &dyn Outbox,
        channel_id: ChannelId,
    ) -> Result<(), Error> {
        outbox
            .send_message(channel_id, &format_jellyfin_already_in_use())
            .await?;
        Ok(())
    }

    fn is_staff(&self, invocation: &Invocation<'_>) -> bool {
        self.roles
            .is_staff(invocation.author_is_bot, invocation.author_name)
    }

    async fn refuse(&self, outbox: &dyn Outbox, invocation: &Invocation<'_>) -> Result<(), Error> {
        match invocation.message {
            Some(message) => self.add_reaction_refused(outbox, message).await,
            None => Ok(()),
        }
    }

    /// Hand out the Jellyfin link by direct message, from the jellyfin channel only
    ///
    /// A link that cannot be delivered is released for the next request.
    pub async fn jellyfin_request(
        &self,
        outbox: &dyn Outbox,
        jellyfin: &JellyfinService,
        invocation: &Invocation<'_>,
        now: Instant,
    ) -> Result<(), Error> {
        if !channel_name_matches(invocation.channel_name, JELLYFIN_CHANNEL) {
            self.send_jellyfin_not_authorized(outbox, invocation.channel_id)
                .await?;
            return self.refuse(outbox, invocation).await;
        }

        match jellyfin.request_link(now) {
            LinkRequest::Granted(url) => {
                let link = format_jellyfin_link(&url);
                if let Err(e) = outbox.send_direct_message(invocation.author_id, &link).await {
                    jellyfin.release(now);
                    return Err(e);
                }
                info!("Jellyfin link sent to {}", invocation.author_name);
                if let Some(message) = invocation.message {
                    self.jellyfin_done(outbox, message).await?;
                }
            }
            LinkRequest::AlreadyInUse => {
                self.send_jellyfin_already_in_use(outbox, invocation.channel_id)
                    .await?;
                if let Some(message) = invocation.message {
                    self.add_reaction_alarm(outbox, message).await?;
                }
            }
            LinkRequest::Unavailable => {
                outbox
                    .send_message(invocation.channel_id, &format_error(JELLYFIN_UNAVAILABLE))
                    .await?;
                self.refuse(outbox, invocation).await?;
            }
        }

        Ok(())
    }

    /// Staff-triggered birthday check for `today`
    pub async fn birthday_on_demand(
        &self,
        outbox: &dyn Outbox,
        invocation: &Invocation<'_>,
        today: NaiveDate,
    ) -> Result<(), Error> {
        let Some(message) = invocation.message else {
            return Ok(());
        };

        if !self.is_staff(invocation) {
            return self.add_reaction_refused(outbox, message).await;
        }

        self.add_reaction_vu(outbox, message).await?;
        if self.check_birthday(outbox, today).await?.is_none() {
            outbox
                .send_message(invocation.channel_id, NO_BIRTHDAY_TODAY)
                .await?;
        }
        Ok(())
    }

    /// Staff-triggered named emote on the replied-to message
    pub async fn react_on_demand(
        &self,
        outbox: &dyn Outbox,
        invocation: &Invocation<'_>,
        emote_name: &str,
        target: Option<MessageRef>,
    ) -> Result<(), Error> {
        match (self.is_staff(invocation), Emote::from_key(emote_name), target) {
            (true, Some(emote), Some(target)) => self.add_emote(outbox, target, emote).await,
            _ => self.refuse(outbox, invocation).await,
        }
    }
}
