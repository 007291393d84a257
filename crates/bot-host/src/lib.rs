//! `bot-host`: the capabilities a bot borrows from its host environment.
//!
//! A bot never renders, streams, or decodes anything itself.  It reads and
//! writes its pose through an [`Embodiment`], keeps the world-streaming client
//! pointed at itself through a [`WorldViewer`], and hands clips to an
//! [`AudioPlayback`] service.  All calls are fire-and-forget: the host is
//! assumed to succeed or fail silently.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`embodiment`]  | `Embodiment`: pose, joints, asset URLs, agent flags   |
//! | [`viewer`]      | `WorldViewer`: viewer pose + visible-region refresh   |
//! | [`audio`]       | `SoundClip`, `AudioPlayback`                           |
//! | [`recording`]   | `RecordingHost`: in-memory host for demos and tests   |

pub mod audio;
pub mod embodiment;
pub mod recording;
pub mod viewer;


pub use audio::{AudioPlayback, SoundClip};
pub use embodiment::Embodiment;
pub use recording::RecordingHost;
pub use viewer::WorldViewer;

/// Everything one bot needs from its host.
///
/// Blanket-implemented for any type providing the three capabilities.  `Send`
/// so a crowd of bots can be stepped on a thread pool.
pub trait BotHost: Embodiment + WorldViewer + AudioPlayback + Send {}

impl<T> BotHost for T where T: Embodiment + WorldViewer + AudioPlayback + Send {}
