//! `RecordingHost`: an in-memory host that just remembers what it was told.
//!
//! Used by the demo binary as a headless stand-in for a real client, and by
//! tests as the host double.

use std::collections::BTreeMap;

use bot_core::{JointId, Quat, Vec3};

use crate::{AudioPlayback, Embodiment, SoundClip, WorldViewer};

/// Headless host keeping the latest value of everything a bot set.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    pub position:    Vec3,
    pub orientation: Quat,
    pub head_pitch:  f32,

    /// Currently overridden joints.  Cleared joints are removed.
    pub joints: BTreeMap<JointId, Quat>,

    pub face_model_url:     Option<String>,
    pub skeleton_model_url: Option<String>,
    pub billboard_url:      Option<String>,
    pub agent_controlled:   bool,
    pub audio_listener:     bool,

    pub viewer_position:    Vec3,
    pub viewer_orientation: Quat,
    /// Number of visible-region refreshes requested.
    pub view_queries: u64,

    /// What [`AudioPlayback::is_playing`] reports.  Tests flip it by hand.
    pub audio_busy: bool,
    /// URLs of every clip handed to [`AudioPlayback::play`], in order.
    pub played: Vec<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// The override currently applied to `joint`, if any.
    pub fn joint(&self, joint: JointId) -> Option<Quat> {
        self.joints.get(&joint).copied()
    }

    pub fn is_overridden(&self, joint: JointId) -> bool {
        self.joints.contains_key(&joint)
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            position:           Vec3::ZERO,
            orientation:        Quat::IDENTITY,
            head_pitch:         0.0,
            joints:             BTreeMap::new(),
            face_model_url:     None,
            skeleton_model_url: None,
            billboard_url:      None,
            agent_controlled:   false,
            audio_listener:     false,
            viewer_position:    Vec3::ZERO,
            viewer_orientation: Quat::IDENTITY,
            view_queries:       0,
            audio_busy:         false,
            played:             Vec::new(),
        }
    }
}

impl Embodiment for RecordingHost {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    fn head_pitch(&self) -> f32 {
        self.head_pitch
    }

    fn set_head_pitch(&mut self, degrees: f32) {
        self.head_pitch = degrees;
    }

    fn set_joint_rotation(&mut self, joint: JointId, rotation: Quat) {
        self.joints.insert(joint, rotation);
    }

    fn clear_joint(&mut self, joint: JointId) {
        self.joints.remove(&joint);
    }

    fn set_face_model_url(&mut self, url: &str) {
        self.face_model_url = Some(url.to_owned());
    }

    fn set_skeleton_model_url(&mut self, url: &str) {
        self.skeleton_model_url = Some(url.to_owned());
    }

    fn set_billboard_url(&mut self, url: &str) {
        self.billboard_url = Some(url.to_owned());
    }

    fn set_agent_controlled(&mut self, controlled: bool) {
        self.agent_controlled = controlled;
    }

    fn set_audio_listener(&mut self, listening: bool) {
        self.audio_listener = listening;
    }
}

impl WorldViewer for RecordingHost {
    fn set_viewer_position(&mut self, position: Vec3) {
        self.viewer_position = position;
    }

    fn set_viewer_orientation(&mut self, orientation: Quat) {
        self.viewer_orientation = orientation;
    }

    fn query_visible_region(&mut self) {
        self.view_queries += 1;
    }
}

impl AudioPlayback for RecordingHost {
    fn is_playing(&self) -> bool {
        self.audio_busy
    }

    fn play(&mut self, clip: &SoundClip) {
        self.played.push(clip.url().to_owned());
    }
}
