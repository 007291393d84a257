//! World-streaming client seen from the bot's side.

use bot_core::{Quat, Vec3};

/// The host's world-streaming viewer.
///
/// The bot only steers it; nothing the viewer receives flows back into the
/// behavior.
pub trait WorldViewer {
    fn set_viewer_position(&mut self, position: Vec3);
    fn set_viewer_orientation(&mut self, orientation: Quat);

    /// Ask the host to refresh the region visible from the current viewer
    /// pose.  Asynchronous on the host side; returns immediately.
    fn query_visible_region(&mut self);
}
