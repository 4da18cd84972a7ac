use chrono_tz::Tz;

/// Error types for timezone operations
#[derive(Debug)]
pub enum TimezoneError {
    InvalidTimezone(String),
}

impl std::fmt::Display for TimezoneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimezoneError::InvalidTimezone(tz) => write!(f, "Invalid timezone: {}", tz),
        }
    }
}

impl std::error::Error for TimezoneError {}

/// Parse a timezone string
pub fn parse_timezone(tz_str: &str) -> Result<Tz, TimezoneError> {
    tz_str
        .trim()
        .parse()
        .map_err(|_| TimezoneError::InvalidTimezone(tz_str.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("UTC").is_ok());
        assert!(parse_timezone("Europe/Paris").is_ok());
        assert!(parse_timezone(" Europe/Paris ").is_ok());
        assert!(parse_timezone("Invalid/Timezone").is_err());
    }

    #[test]
    fn test_error_message_names_the_zone() {
        let err = parse_timezone("Mars/Olympus").unwrap_err();
        assert_eq!(err.to_string(), "Invalid timezone: Mars/Olympus");
    }
}
