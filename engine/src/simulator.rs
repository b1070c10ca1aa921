//! The completion simulator boundary.
//!
//! Everything asynchronous in Maquette is fake: a reply or an image arrives
//! after a fixed delay with canned content. The trait below is the seam
//! where a real backend would plug in without touching the view-model.

use std::time::{Duration, SystemTime};

/// Placeholder asset standing in for a real image-generation backend.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1686904423955-b3c940951953?w=400&h=400&fit=crop";

const DEFAULT_CHAT_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_IMAGE_DELAY: Duration = Duration::from_secs(2);

/// Produces simulated completion payloads and the latency to deliver them
/// with.
///
/// Implementations must be cheap and infallible: the demo contract is that
/// completions always succeed.
pub trait CompletionSimulator: Send + Sync {
    /// The assistant's reply to a sent message. Must embed `text` verbatim.
    fn reply_to(&self, text: &str) -> String;

    /// The url of the "generated" image for a prompt.
    fn image_url(&self, prompt: &str) -> String;

    fn chat_delay(&self) -> Duration;

    fn image_delay(&self) -> Duration;
}

/// Canned simulator: fixed delays, a reply template, one placeholder url.
#[derive(Debug, Clone)]
pub struct Canned {
    chat_delay: Duration,
    image_delay: Duration,
    image_url: String,
}

impl Canned {
    #[must_use]
    pub fn new(chat_delay: Duration, image_delay: Duration, image_url: String) -> Self {
        Self {
            chat_delay,
            image_delay,
            image_url,
        }
    }
}

impl Default for Canned {
    fn default() -> Self {
        Self::new(
            DEFAULT_CHAT_DELAY,
            DEFAULT_IMAGE_DELAY,
            PLACEHOLDER_IMAGE_URL.to_string(),
        )
    }
}

impl CompletionSimulator for Canned {
    fn reply_to(&self, text: &str) -> String {
        format!(
            "Good question! I processed your request \"{text}\" and I'm ready to help. \
             This is a demo assistant reply."
        )
    }

    fn image_url(&self, _prompt: &str) -> String {
        self.image_url.clone()
    }

    fn chat_delay(&self) -> Duration {
        self.chat_delay
    }

    fn image_delay(&self) -> Duration {
        self.image_delay
    }
}

/// Timestamp source for message and image creation times.
pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

#[cfg(test)]
mod tests {
    use super::{Canned, CompletionSimulator};

    #[test]
    fn canned_reply_embeds_input_verbatim() {
        let simulator = Canned::default();
        let reply = simulator.reply_to("weather on Mars?");
        assert!(reply.contains("weather on Mars?"));
    }
}
