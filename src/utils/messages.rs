/// Pure functions building the bot's canned messages (Discord-agnostic)
use crate::constants::{JELLYFIN_ACCOUNT_CHANNEL_ID, JELLYFIN_CHANNEL};
use crate::emotes::{Emote, HEART};

/// Format a validation error message with emoji
pub fn format_error(message: &str) -> String {
    format!("❌ {}", message)
}

/// Greeting matching the local hour
pub fn greeting(hour: u32) -> &'static str {
    if (5..18).contains(&hour) {
        "Bonjour"
    } else {
        "Bonsoir"
    }
}

pub fn format_latency_report(greeting: &str, latency_ms: u128) -> String {
    format!("{}```Je suis à {}ms de vous !```", greeting, latency_ms)
}

/// Farewell notice posted when a member leaves
pub fn format_user_left(user_tag: &str, server_name: &str, joined_at: Option<&str>) -> String {
    format!(
        "```{} left {} ! This person joined at {}```",
        user_tag,
        server_name,
        joined_at.unwrap_or("unknown date")
    )
}

pub fn format_birthday_announcement(user_id: &str) -> String {
    format!(
        "@everyone {} \n\
        On me souffle dans l'oreille que c'est l'anniversaire de <@{}> aujourd'hui !\n\
        *ps : j'ai pas vraiment d'oreille*",
        Emote::Pikachu.mention(),
        user_id
    )
}

/// The two notices sent when Jellyfin is requested outside its channel
pub fn jellyfin_not_authorized_notices() -> [String; 2] {
    [
        format!(
            "```⚠️ Pour des raisons de sécurité l'utilisation de Jellyfin \
            est limité au channel 🌐︱{} ⚠️```",
            JELLYFIN_CHANNEL
        ),
        format!(
            "```Si vous  Vince pour qu'il vous créé un compte```<#{}>",
            JELLYFIN_ACCOUNT_CHANNEL_ID
        ),
    ]
}

pub fn format_jellyfin_already_in_use() -> String {
    let alarm = Emote::Alarm.mention();
    format!("{} Un lien a déjà été généré il y a moins de 2h {}", alarm, alarm)
}

/// Direct message carrying a freshly generated Jellyfin link
pub fn format_jellyfin_link(url: &str) -> String {
    format!(
        "{} Voici ton lien Jellyfin, valable 2h : {}",
        Emote::Arrow.mention(),
        url
    )
}

/// Local diagnostic line for an edited message
pub fn format_edit_diagnostic(username: &str, before: &str, after: &str, channel: &str) -> String {
    format!(
        "{} edit : \"{}\" ---> \"{}\" from {}",
        username, before, after, channel
    )
}

pub fn format_ping(latency_ms: u128) -> String {
    format!("{} Pong ! {}ms", Emote::CatVibe.mention(), latency_ms)
}

/// Command list shown by the help command
pub fn format_help(prefix: &str) -> String {
    let arrow = Emote::Arrow.mention();
    let commands = [
        ("jellyfin", "demander un lien Jellyfin (dans le channel jellyfin)"),
        ("ping", "tester la latence du bot"),
        ("birthday", "relancer la vérification des anniversaires (staff)"),
        ("react <nom>", "réagir au message cité avec une emote (staff)"),
        ("help", "afficher cette aide"),
    ];

    let lines = commands
        .iter()
        .map(|(name, about)| format!("{} `{}{}` : {}", arrow, prefix, name, about))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{} {}", lines, Emote::Coeur.mention(), HEART)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error() {
        assert_eq!(format_error("Something failed"), "❌ Something failed");
    }

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting(4), "Bonsoir");
        assert_eq!(greeting(5), "Bonjour");
        assert_eq!(greeting(12), "Bonjour");
        assert_eq!(greeting(17), "Bonjour");
        assert_eq!(greeting(18), "Bonsoir");
        assert_eq!(greeting(23), "Bonsoir");
    }

    #[test]
    fn test_format_latency_report() {
        assert_eq!(
            format_latency_report("Bonjour", 42),
            "Bonjour```Je suis à 42ms de vous !```"
        );
    }

    #[test]
    fn test_format_user_left() {
        assert_eq!(
            format_user_left("alice#0042", "Zderland", Some("05/03/2021")),
            "```alice#0042 left Zderland ! This person joined at 05/03/2021```"
        );
    }

    #[test]
    fn test_format_user_left_without_join_date() {
        let msg = format_user_left("bob", "Zderland", None);
        assert!(msg.ends_with("joined at unknown date```"));
    }

    #[test]
    fn test_format_birthday_announcement() {
        let msg = format_birthday_announcement("123");
        assert!(msg.starts_with("@everyone <a:hiPikachu:637802627345678339> \n"));
        assert!(msg.contains("l'anniversaire de <@123> aujourd'hui !"));
        assert!(msg.ends_with("*ps : j'ai pas vraiment d'oreille*"));
    }

    #[test]
    fn test_jellyfin_not_authorized_notices() {
        let [security, account] = jellyfin_not_authorized_notices();
        assert!(security.starts_with("```⚠️"));
        assert!(security.contains("🌐︱jellyfin"));
        assert!(account.ends_with("<#816283362478129182>"));
    }

    #[test]
    fn test_format_jellyfin_already_in_use() {
        assert_eq!(
            format_jellyfin_already_in_use(),
            "<a:alert:637645061764415488> Un lien a déjà été généré il y a moins de 2h \
            <a:alert:637645061764415488>"
        );
    }

    #[test]
    fn test_format_edit_diagnostic() {
        assert_eq!(
            format_edit_diagnostic("alice", "helo", "hello", "general"),
            "alice edit : \"helo\" ---> \"hello\" from general"
        );
    }

    #[test]
    fn test_format_help_lists_every_command() {
        let help = format_help("$");
        for command in ["$jellyfin", "$ping", "$birthday", "$react", "$help"] {
            assert!(help.contains(command), "missing {}", command);
        }
        assert!(help.ends_with(HEART));
    }
}
