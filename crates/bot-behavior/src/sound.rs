//! Occasional chatter.

use bot_core::BotRng;
use bot_host::AudioPlayback;
use log::debug;

use crate::{BehaviorConfig, SoundLibrary};

pub(crate) fn step<A: AudioPlayback + ?Sized>(
    config: &BehaviorConfig,
    sounds: &SoundLibrary,
    rng:    &mut BotRng,
    audio:  &mut A,
) {
    if rng.chance(config.chance_of_sound) {
        play_random(sounds, rng, audio);
    }
}

/// Start a uniformly chosen clip unless the avatar is already talking.
///
/// Returns the library index that was played.
pub(crate) fn play_random<A: AudioPlayback + ?Sized>(
    sounds: &SoundLibrary,
    rng:    &mut BotRng,
    audio:  &mut A,
) -> Option<usize> {
    if audio.is_playing() {
        return None;
    }
    let index = rng.index(sounds.len())?;
    let clip = sounds.get(index)?;
    debug!("playing clip {index}: {}", clip.url());
    audio.play(clip);
    Some(index)
}
