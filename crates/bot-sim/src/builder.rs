//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use bot_behavior::{BehaviorConfig, BehaviorUpdater, SoundLibrary};
use bot_core::{BotId, BotRng, SimConfig};
use bot_host::BotHost;
use log::info;

use crate::sim::Bot;
use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<H>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: frame delta, frame count, bot count, seed, …
/// - [`BehaviorConfig`]: shared by every bot
/// - a host factory `FnMut(BotId) -> H`, called once per bot in id order
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                          |
/// |---------------|----------------------------------|
/// | `.sounds(l)`  | `SoundLibrary::cocktail_party()` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, BehaviorConfig::default(), |_| RecordingHost::new())
///     .sounds(Arc::new(SoundLibrary::empty()))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<H, F>
where
    H: BotHost,
    F: FnMut(BotId) -> H,
{
    config:       SimConfig,
    behavior:     BehaviorConfig,
    host_factory: F,
    sounds:       Option<Arc<SoundLibrary>>,
}

impl<H, F> SimBuilder<H, F>
where
    H: BotHost,
    F: FnMut(BotId) -> H,
{
    pub fn new(config: SimConfig, behavior: BehaviorConfig, host_factory: F) -> Self {
        Self { config, behavior, host_factory, sounds: None }
    }

    /// Clip library shared by every bot.
    pub fn sounds(mut self, sounds: Arc<SoundLibrary>) -> Self {
        self.sounds = Some(sounds);
        self
    }

    /// Validate both configs, create one host per bot, and spawn each bot
    /// with its own seeded RNG.
    pub fn build(mut self) -> SimResult<Sim<H>> {
        self.config.validate()?;
        self.behavior.validate()?;

        let sounds = self.sounds.unwrap_or_else(|| Arc::new(SoundLibrary::cocktail_party()));

        let mut bots = Vec::with_capacity(self.config.bot_count);
        for i in 0..self.config.bot_count {
            // `validate` guarantees the count fits a `u32`.
            let id = BotId(i as u32);
            let mut host = (self.host_factory)(id);
            let rng = BotRng::new(self.config.seed, id);
            let updater =
                BehaviorUpdater::spawn(id, self.behavior.clone(), Arc::clone(&sounds), rng, &mut host)?;
            bots.push(Bot::new(updater, host));
        }

        info!(
            "sim ready: {} bots, {} frames at {:.1} fps ({:.1} s), seed {}",
            self.config.bot_count,
            self.config.total_frames,
            self.config.frames_per_second(),
            self.config.duration_secs(),
            self.config.seed,
        );
        Ok(Sim::new(self.config, bots))
    }
}
