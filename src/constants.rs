use std::time::Duration;

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "botools=info";

/// Default path of the logging configuration file
pub const DEFAULT_LOG_CONFIG: &str = "log.filter";

/// Default path of the birthday table
pub const DEFAULT_BIRTHDAYS_FILE: &str = "birthdays.json";

/// Timezone used to decide what "today" is
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

/// Username prefix of the staff account
pub const DEFAULT_STAFF_PREFIX: &str = "Vince";

/// Prefix for text commands
pub const COMMAND_PREFIX: &str = "$";

/// Custom status shown once connected
pub const STATUS_TEXT: &str = ": $Jellyfin";

/// Number of messages kept in the cache so edits can be compared
pub const MESSAGE_CACHE_SIZE: usize = 100;

/// Name of the server used in farewell notices
pub const SERVER_NAME: &str = "Zderland";

/// Channel receiving latency reports and farewell notices
pub const LOG_CHANNEL: &str = "log";

/// Channel receiving birthday announcements
pub const GENERAL_CHANNEL: &str = "general";

/// Only channel where Jellyfin links may be requested
pub const JELLYFIN_CHANNEL: &str = "jellyfin";

/// Channel where Jellyfin accounts are requested
pub const JELLYFIN_ACCOUNT_CHANNEL_ID: u64 = 816283362478129182;

/// How long a generated Jellyfin link stays reserved
pub const JELLYFIN_LINK_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Separator between a channel's decoration and its name, e.g. "🌐︱jellyfin"
pub const CHANNEL_NAME_SEPARATOR: char = '︱';
