//! Audio clips and the playback service.

/// An audio resource identified by URL.  Loading and decoding are the host's
/// business.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoundClip {
    url: String,
}

impl SoundClip {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Plays clips through the bot's avatar.
pub trait AudioPlayback {
    /// `true` while the avatar is already emitting a clip.
    fn is_playing(&self) -> bool;

    /// Start `clip`.  No completion callback; poll [`is_playing`][Self::is_playing].
    fn play(&mut self, clip: &SoundClip);
}
