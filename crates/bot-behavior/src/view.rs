//! Rate-limited world-viewer refresh.

use bot_host::WorldViewer;

use crate::{BehaviorConfig, BotState};

/// Point the viewer at the bot and request a refresh, at most once per
/// `1 / voxel_fps` of cumulative time.  Returns `true` if a query went out.
pub(crate) fn refresh<V: WorldViewer + ?Sized>(
    state:  &mut BotState,
    config: &BehaviorConfig,
    viewer: &mut V,
) -> bool {
    if !config.receive_voxels {
        return false;
    }
    let since_last = state.cumulative_time - state.last_view_query_time;
    if since_last <= config.view_refresh_interval() {
        return false;
    }

    viewer.set_viewer_position(state.position);
    viewer.set_viewer_orientation(state.orientation);
    viewer.query_visible_region();
    state.last_view_query_time = state.cumulative_time;
    true
}
