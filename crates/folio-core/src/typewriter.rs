//! Typewriter effect for the hero tagline.
//!
//! ## Timing
//!
//! ```text
//! ""  -80ms-> "O" -80ms-> "Op" ... "Open for freelance" -1200ms-> ""  -80ms-> "B" ...
//! ```
//!
//! Each tick renders the current prefix and advances the character cursor.
//! Once the cursor passes the end of the phrase it wraps to zero, the phrase
//! index advances circularly, and the next tick is delayed by the longer
//! pause. The full phrase therefore stays on screen for [`PHRASE_PAUSE`].
//!
//! The loop itself is [`run`], raced against a [`CancellationToken`] so the
//! page can tear it down when it unmounts.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Delay between two revealed characters.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(80);

/// Delay after a phrase is complete, before the next one starts.
pub const PHRASE_PAUSE: Duration = Duration::from_millis(1200);

/// Phrases cycled in the hero tagline.
pub const DEFAULT_PHRASES: [&str; 3] = [
    "Open for freelance",
    "Building a design system",
    "Exploring WebGL",
];

/// One rendered step of the loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Text to display
    pub text: String,
    /// How long to wait before the next tick
    pub delay: Duration,
}

/// Cursor state over a fixed, ordered list of phrases
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_count: usize,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(DEFAULT_PHRASES)
    }
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase_index: 0,
            char_count: 0,
        }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Index of the phrase the next tick will render from.
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Number of characters the next tick will reveal.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Render the current prefix and advance the cursors.
    pub fn tick(&mut self) -> Frame {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return Frame {
                text: String::new(),
                delay: PHRASE_PAUSE,
            };
        };

        let text: String = phrase.chars().take(self.char_count).collect();
        let len = phrase.chars().count();

        self.char_count += 1;
        if self.char_count > len {
            self.char_count = 0;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            Frame {
                text,
                delay: PHRASE_PAUSE,
            }
        } else {
            Frame {
                text,
                delay: TYPE_INTERVAL,
            }
        }
    }
}

/// Drive a typewriter until `token` is cancelled.
///
/// `render` receives each frame's text. The first frame renders immediately.
pub fn run<F>(
    mut typewriter: Typewriter,
    token: CancellationToken,
    mut render: F,
) -> impl Future<Output = ()>
where
    F: FnMut(String),
{
    async move {
        tracing::debug!(phrases = typewriter.phrases().len(), "Typewriter started");
        loop {
            if token.is_cancelled() {
                break;
            }
            let frame = typewriter.tick();
            render(frame.text);

            tokio::select! {
                _ = token.cancelled() => break,
                _ = tokio::time::sleep(frame.delay) => {}
            }
        }
        tracing::debug!("Typewriter stopped");
    }
}

/// Stop capability for a running typewriter loop.
///
/// Dropping the handle does not stop the loop; call [`stop`](Self::stop).
#[derive(Debug, Clone, Default)]
pub struct TypewriterHandle {
    token: CancellationToken,
}

impl TypewriterHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token to pass to [`run`].
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_character_per_tick() {
        let mut tw = Typewriter::new(["abc"]);
        let texts: Vec<String> = (0..4).map(|_| tw.tick().text).collect();
        assert_eq!(texts, vec!["", "a", "ab", "abc"]);
    }

    #[test]
    fn test_full_phrase_is_followed_by_pause() {
        let mut tw = Typewriter::new(["ab", "cd"]);
        assert_eq!(tw.tick().delay, TYPE_INTERVAL); // ""
        assert_eq!(tw.tick().delay, TYPE_INTERVAL); // "a"
        let full = tw.tick();
        assert_eq!(full.text, "ab");
        assert_eq!(full.delay, PHRASE_PAUSE);
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.char_count(), 0);
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut tw = Typewriter::new(["a", "b"]);
        let texts: Vec<String> = (0..6).map(|_| tw.tick().text).collect();
        assert_eq!(texts, vec!["", "a", "", "b", "", "a"]);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut tw = Typewriter::new(["héllo"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.tick().text, "hé");
    }

    #[test]
    fn test_empty_phrase_list_is_inert() {
        let mut tw = Typewriter::new(Vec::<String>::new());
        let frame = tw.tick();
        assert_eq!(frame.text, "");
        assert_eq!(frame.delay, PHRASE_PAUSE);
    }

    #[test]
    fn test_default_phrases() {
        let tw = Typewriter::default();
        assert_eq!(tw.phrases()[0], "Open for freelance");
        assert_eq!(tw.phrases().len(), 3);
    }

    #[test]
    fn test_handle_stop() {
        let handle = TypewriterHandle::new();
        let token = handle.token();
        assert!(!handle.is_stopped());
        handle.stop();
        assert!(token.is_cancelled());
    }
}
