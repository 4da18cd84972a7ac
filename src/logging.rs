use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::constants::LOG_DIRECTIVE;

/// Filter directives from a logging config file: one per line, `#` starts a comment
pub fn parse_directives(contents: &str) -> Vec<&str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Initialize the logging system from `RUST_LOG` and the config file at `path`
///
/// Without a readable file, or when it holds no directive, the built-in
/// directive is used.
pub fn initialize_logging(path: &Path) {
    let contents = std::fs::read_to_string(path).ok();
    let mut directives = contents
        .as_deref()
        .map(parse_directives)
        .unwrap_or_default();
    let from_file = !directives.is_empty();
    if !from_file {
        directives.push(LOG_DIRECTIVE);
    }

    let mut filter = EnvFilter::from_default_env();
    let mut rejected = Vec::new();
    for directive in directives {
        match directive.parse() {
            Ok(parsed) => filter = filter.add_directive(parsed),
            Err(e) => rejected.push(format!("{} ({})", directive, e)),
        }
    }

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if from_file {
        info!("Logging configured from {}", path.display());
    }
    for directive in rejected {
        warn!("Ignored invalid log directive: {}", directive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directives_skips_blanks_and_comments() {
        let contents = "# log levels\nbotools=debug\n\n   \nserenity=warn  \n#poise=trace\n";
        assert_eq!(parse_directives(contents), vec!["botools=debug", "serenity=warn"]);
    }

    #[test]
    fn test_parse_directives_empty() {
        assert!(parse_directives("").is_empty());
        assert!(parse_directives("# nothing here\n").is_empty());
    }

    #[test]
    fn test_default_directive_is_valid() {
        assert!(LOG_DIRECTIVE.parse::<tracing_subscriber::filter::Directive>().is_ok());
    }
}
