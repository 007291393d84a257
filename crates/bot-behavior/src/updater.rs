//! `BehaviorUpdater`: the per-frame driver for one bot.

use std::sync::Arc;

use bot_core::{sanitize_delta, BotId, BotRng};
use bot_host::{AudioPlayback, BotHost, Embodiment};
use bot_schedule::{Scheduler, TimerEvent};
use log::{debug, info};

use crate::{
    head, locomotion, sound, view, wave, Appearance, BehaviorConfig, BehaviorResult,
    BotSnapshot, BotState, SoundLibrary,
};

/// Owns one bot's state and advances it once per host frame.
///
/// The host is borrowed for each call rather than stored, so the same updater
/// can be driven by any [`BotHost`] and a crowd of updaters can be stepped in
/// parallel, each with its own host.
#[derive(Debug, Clone)]
pub struct BehaviorUpdater {
    id:         BotId,
    config:     BehaviorConfig,
    sounds:     Arc<SoundLibrary>,
    rng:        BotRng,
    appearance: Appearance,
    state:      BotState,
}

impl BehaviorUpdater {
    /// Validate `config`, pick a spawn point and an appearance, and set up
    /// `host` for a freshly created bot.
    pub fn spawn<H: BotHost + ?Sized>(
        id:      BotId,
        config:  BehaviorConfig,
        sounds:  Arc<SoundLibrary>,
        mut rng: BotRng,
        host:    &mut H,
    ) -> BehaviorResult<Self> {
        config.validate()?;

        let spawn_position = config.spawn_box.sample(&mut rng);
        let appearance = Appearance::random(&mut rng);

        appearance.apply(host);
        host.set_agent_controlled(true);
        host.set_audio_listener(true);
        host.set_position(spawn_position);
        info!(
            "new bot {id} ({}), position = {}, {}, {}",
            appearance.bot_number, spawn_position.x, spawn_position.y, spawn_position.z
        );

        let state = BotState::new(spawn_position, host.orientation(), host.head_pitch());
        Ok(Self { id, config, sounds, rng, appearance, state })
    }

    /// Advance every sub-behavior by one frame of `delta_secs`.
    ///
    /// Order: pin to spawn, view refresh, waving, sound, head, locomotion.
    /// Negative or non-finite deltas count as zero.
    pub fn update<H, S>(&mut self, delta_secs: f64, host: &mut H, scheduler: &mut S)
    where
        H: BotHost + ?Sized,
        S: Scheduler + ?Sized,
    {
        self.state.cumulative_time += sanitize_delta(delta_secs);
        self.sync_from_host(host);

        // A bot that never walks holds its spawn point; freshly created
        // avatars can drop the first position they are given.
        if self.config.chance_of_moving == 0.0 {
            self.state.position = self.state.spawn_position;
            host.set_position(self.state.spawn_position);
        }

        view::refresh(&mut self.state, &self.config, host);
        wave::step(&mut self.state, &self.config, &mut self.rng, host, scheduler);
        sound::step(&self.config, &self.sounds, &mut self.rng, host);
        head::step(&mut self.state, &self.config, &mut self.rng, host);
        locomotion::step(&mut self.state, &self.config, &mut self.rng, host);
    }

    /// Deliver a timer this bot scheduled earlier.
    pub fn on_timer<E: Embodiment + ?Sized>(&mut self, event: TimerEvent, host: &mut E) {
        match event {
            TimerEvent::StopWaving { episode } => {
                match self.state.wave_episode() {
                    Some(current) if current.episode == episode => {
                        debug!("{}: wave {episode} timed out", self.id);
                        self.stop_waving(host);
                    }
                    _ => debug!("{}: ignoring stale stop for wave {episode}", self.id),
                }
            }
        }
    }

    /// End any wave and release shoulder, elbow, and spine.
    pub fn stop_waving<E: Embodiment + ?Sized>(&mut self, host: &mut E) {
        wave::stop(&mut self.state, host);
    }

    /// End any walk and release hip and knee.
    pub fn stop_walking<E: Embodiment + ?Sized>(&mut self, host: &mut E) {
        locomotion::stop(&mut self.state, host);
    }

    /// Play a random library clip unless the avatar is already talking.
    /// Returns the index played.
    pub fn play_random_sound<A: AudioPlayback + ?Sized>(&mut self, host: &mut A) -> Option<usize> {
        sound::play_random(&self.sounds, &mut self.rng, host)
    }

    pub fn snapshot(&self) -> BotSnapshot {
        BotSnapshot {
            bot:          self.id,
            position:     self.state.position,
            orientation:  self.state.orientation,
            head_pitch:   self.state.head_pitch,
            walking:      self.state.is_walking(),
            waving:       self.state.is_waving(),
            turning_head: self.state.is_turning_head(),
        }
    }

    pub fn id(&self) -> BotId {
        self.id
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn state(&self) -> &BotState {
        &self.state
    }

    fn sync_from_host<E: Embodiment + ?Sized>(&mut self, host: &E) {
        self.state.position = host.position();
        self.state.orientation = host.orientation();
        self.state.head_pitch = host.head_pitch();
    }
}
