/// Jellyfin service - hands out the public access link
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Outcome of a link request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkRequest {
    Granted(String),
    AlreadyInUse,
    Unavailable,
}

pub struct JellyfinService {
    public_url: Option<String>,
    link_ttl: Duration,
    last_link: Mutex<Option<Instant>>,
}

impl JellyfinService {
    pub fn new(public_url: Option<String>, link_ttl: Duration) -> Self {
        Self {
            public_url: public_url.filter(|url| !url.trim().is_empty()),
            link_ttl,
            last_link: Mutex::new(None),
        }
    }

    /// Hand out the link unless one was given less than `link_ttl` ago
    pub fn request_link(&self, now: Instant) -> LinkRequest {
        let Some(url) = &self.public_url else {
            return LinkRequest::Unavailable;
        };

        let mut last_link = match self.last_link.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(given_at) = *last_link
            && now.saturating_duration_since(given_at) < self.link_ttl
        {
            return LinkRequest::AlreadyInUse;
        }

        *last_link = Some(now);
        LinkRequest::Granted(url.clone())
    }

    /// Give back a link granted at `given_at` that never reached the requester
    ///
    /// A later grant is left untouched.
    pub fn release(&self, given_at: Instant) {
        let mut last_link = match self.last_link.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if *last_link == Some(given_at) {
            *last_link = None;
        }
    }
}
