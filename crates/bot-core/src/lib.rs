//! `bot-core`: foundational types for the idle-bot workspace.
//!
//! Every other `bot-*` crate depends on this one.  It has no `bot-*`
//! dependencies and only a handful of external ones (`glam`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`ids`]         | `BotId`, `JointId`, `EpisodeId`                          |
//! | [`time`]        | `Frame`, `Millis`, `FrameClock`, `SimConfig`             |
//! | [`rng`]         | `BotRng` (per-bot), `SimRng` (global)                    |
//! | [`math`]        | Degree-based quaternion helpers, `SpawnBox`, `approach`  |
//! | [`error`]       | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod math;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use glam::{Quat, Vec3};
pub use ids::{BotId, EpisodeId, JointId};
pub use math::SpawnBox;
pub use rng::{BotRng, SimRng};
pub use time::{sanitize_delta, Frame, FrameClock, Millis, SimConfig};
