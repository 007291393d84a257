//! `bot-behavior`: the idle behavior loop of a single bot.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`config`]      | `BehaviorConfig`, `Span`                                   |
//! | [`state`]       | `BotState`, `WaveState`, `HeadTurn`, `Locomotion`, snapshot |
//! | [`updater`]     | `BehaviorUpdater`: spawn, per-frame update, timer delivery |
//! | [`wave`]        | Waving episodes and the arm pose formula                   |
//! | [`locomotion`]  | Walk target selection and leg swing                        |
//! | [`appearance`]  | Bot-number → model/billboard URL catalog                   |
//! | [`sounds`]      | `SoundLibrary` and the stock clip list                     |
//! | [`joints`]      | Joint indices of the default skeleton                      |
//! | [`error`]       | `BehaviorError`, `BehaviorResult<T>`                       |
//!
//! # Frame order
//!
//! `BehaviorUpdater::update` runs, in order: pin to spawn (only when walking is
//! disabled), view refresh, waving, sound, head turning, locomotion.  Each
//! sub-behavior consumes random draws from the bot's own `BotRng`, so the
//! order is part of the deterministic contract.
//!
//! Waving ends through a timer rather than a tolerance: the start frame asks
//! the [`Scheduler`][bot_schedule::Scheduler] for a `StopWaving` event tagged
//! with the episode id, and [`BehaviorUpdater::on_timer`] drops events whose
//! episode is no longer current.

pub mod appearance;
pub mod config;
pub mod error;
pub mod joints;
pub mod locomotion;
pub mod sounds;
pub mod state;
pub mod updater;
pub mod wave;

mod head;
mod sound;
mod view;


pub use appearance::Appearance;
pub use config::{BehaviorConfig, Span};
pub use error::{BehaviorError, BehaviorResult};
pub use sounds::SoundLibrary;
pub use state::{
    BotSnapshot, BotState, HeadState, HeadTurn, Locomotion, WalkTarget, WaveEpisode, WaveState,
};
pub use updater::BehaviorUpdater;
