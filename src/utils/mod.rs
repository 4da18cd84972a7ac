/// Utility modules for common functionality
pub mod datetime;
pub mod messages;
pub mod timezone;
