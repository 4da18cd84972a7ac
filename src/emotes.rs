/// Emotes and emoji the bot reacts and writes with
use poise::serenity_prelude::{EmojiId, ReactionType};

pub const EYES: &str = "👀";
pub const CROSS: &str = "❌";
pub const ROBOT: &str = "🤖";
pub const CAKE: &str = "🎂";
pub const HEART: &str = "\u{2764}";

/// Animated server emotes, addressed by a symbolic name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emote {
    Coin,
    Arrow,
    Alarm,
    Coeur,
    Bravo,
    Check,
    CatVibe,
    Pikachu,
    PepeSmoke,
}

impl Emote {
    pub const ALL: [Emote; 9] = [
        Emote::Coin,
        Emote::Arrow,
        Emote::Alarm,
        Emote::Coeur,
        Emote::Bravo,
        Emote::Check,
        Emote::CatVibe,
        Emote::Pikachu,
        Emote::PepeSmoke,
    ];

    /// Symbolic name used by commands
    pub fn key(self) -> &'static str {
        match self {
            Emote::Coin => "coin",
            Emote::Arrow => "arrow",
            Emote::Alarm => "alarm",
            Emote::Coeur => "coeur",
            Emote::Bravo => "bravo",
            Emote::Check => "check",
            Emote::CatVibe => "catvibe",
            Emote::Pikachu => "pikachu",
            Emote::PepeSmoke => "pepesmoke",
        }
    }

    /// Name of the emote on the server
    fn name(self) -> &'static str {
        match self {
            Emote::Coin => "Coin",
            Emote::Arrow => "arrow",
            Emote::Alarm => "alert",
            Emote::Coeur => "coeur",
            Emote::Bravo => "bravo",
            Emote::Check => "verified",
            Emote::CatVibe => "catvibe",
            Emote::Pikachu => "hiPikachu",
            Emote::PepeSmoke => "pepeSmoke",
        }
    }

    fn id(self) -> u64 {
        match self {
            Emote::Coin => 637802593413758978,
            Emote::Arrow => 830799574947463229,
            Emote::Alarm => 637645061764415488,
            Emote::Coeur => 830788906793828382,
            Emote::Bravo => 626017180731047977,
            Emote::Check => 773622374926778380,
            Emote::CatVibe => 792184060054732810,
            Emote::Pikachu => 637802627345678339,
            Emote::PepeSmoke => 830799658354737178,
        }
    }

    /// Look an emote up by its symbolic name, ignoring case
    pub fn from_key(key: &str) -> Option<Emote> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|emote| emote.key().eq_ignore_ascii_case(key))
    }

    /// Inline form usable in message content
    pub fn mention(self) -> String {
        format!("<a:{}:{}>", self.name(), self.id())
    }

    pub fn reaction(self) -> ReactionType {
        ReactionType::Custom {
            animated: true,
            id: EmojiId::new(self.id()),
            name: Some(self.name().to_string()),
        }
    }
}

/// Reaction for a unicode emoji
pub fn emoji(symbol: &str) -> ReactionType {
    ReactionType::Unicode(symbol.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_format() {
        assert_eq!(Emote::Alarm.mention(), "<a:alert:637645061764415488>");
        assert_eq!(Emote::Bravo.mention(), "<a:bravo:626017180731047977>");
        assert_eq!(Emote::Check.mention(), "<a:verified:773622374926778380>");
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Emote::from_key("alarm"), Some(Emote::Alarm));
        assert_eq!(Emote::from_key("CatVibe"), Some(Emote::CatVibe));
        assert_eq!(Emote::from_key(" bravo "), Some(Emote::Bravo));
        assert_eq!(Emote::from_key("alert"), None);
        assert_eq!(Emote::from_key(""), None);
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, a) in Emote::ALL.iter().enumerate() {
            for b in &Emote::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn test_reaction_is_animated_custom() {
        match Emote::Check.reaction() {
            ReactionType::Custom { animated, id, name } => {
                assert!(animated);
                assert_eq!(id, EmojiId::new(773622374926778380));
                assert_eq!(name.as_deref(), Some("verified"));
            }
            other => panic!("unexpected reaction {:?}", other),
        }
    }

    #[test]
    fn test_emoji_is_unicode() {
        assert_eq!(emoji(CAKE), ReactionType::Unicode("🎂".to_string()));
    }
}
