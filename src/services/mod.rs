/// Long-lived services shared by handlers and commands
mod birthday_service;
mod jellyfin_service;
mod role_service;

pub use birthday_service::BirthdayTable;
pub use jellyfin_service::{JellyfinService, LinkRequest};
pub use role_service::RoleService;
