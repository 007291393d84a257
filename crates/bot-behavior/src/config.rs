//! Tunables for the idle behaviors.
//!
//! Every probability is a per-frame chance, so the observable rate of each
//! behavior scales with the host's frame rate.  Defaults reproduce the stock
//! bot exactly.

use bot_core::SpawnBox;

use crate::{BehaviorError, BehaviorResult};

/// A closed numeric interval used for per-episode random parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `true` if `value` lies in `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self, name: &str) -> BehaviorResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(BehaviorError::Config(format!(
                "{name} must be a finite range with min <= max, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// All behavior tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorConfig {
    pub chance_of_moving:       f64,
    /// `0.0` in the stock configuration: the chatter mechanism is wired up but
    /// never fires.
    pub chance_of_sound:        f64,
    pub chance_of_head_turning: f64,
    /// Given a move, chance that it uses the big range instead of the small one.
    pub chance_of_big_move:     f64,
    pub chance_of_waving:       f64,

    /// Keep the world-streaming viewer following the bot.
    pub receive_voxels: bool,
    /// Upper bound on viewer refreshes per simulated second.
    pub voxel_fps:      f64,

    pub spawn_box: SpawnBox,

    pub move_range_small:    f32,
    /// Max yaw change, either way, when picking a walk target.
    pub turn_range_degrees:  f32,
    /// Arrival tolerance for both walking (metres) and head pitch (degrees).
    pub stop_tolerance:      f32,
    pub move_rate:           f32,
    pub turn_rate:           f32,
    pub pitch_rate:          f32,
    pub pitch_range_degrees: f32,

    /// Leg swing frequency in radians per second of cumulative time.
    pub walk_frequency: f64,
    pub walk_amplitude: f64,

    pub wave_frequency:   Span,
    pub wave_amplitude:   Span,
    pub wave_duration_ms: Span,
}

impl BehaviorConfig {
    /// Far move distance: half the larger side of the spawn box.
    #[inline]
    pub fn move_range_big(&self) -> f32 {
        self.spawn_box.max_span() / 2.0
    }

    /// Minimum simulated time between two viewer refreshes.
    #[inline]
    pub fn view_refresh_interval(&self) -> f64 {
        1.0 / self.voxel_fps
    }

    /// Reject values the behavior loop cannot honor.
    pub fn validate(&self) -> BehaviorResult<()> {
        for (name, p) in [
            ("chance_of_moving", self.chance_of_moving),
            ("chance_of_sound", self.chance_of_sound),
            ("chance_of_head_turning", self.chance_of_head_turning),
            ("chance_of_big_move", self.chance_of_big_move),
            ("chance_of_waving", self.chance_of_waving),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(BehaviorError::Config(format!(
                    "{name} must be a probability in [0, 1], got {p}"
                )));
            }
        }

        if self.receive_voxels && !(self.voxel_fps.is_finite() && self.voxel_fps > 0.0) {
            return Err(BehaviorError::Config(format!(
                "voxel_fps must be positive, got {}",
                self.voxel_fps
            )));
        }

        if !self.spawn_box.is_valid() {
            return Err(BehaviorError::Config(format!(
                "spawn_box is empty or not finite: {:?}",
                self.spawn_box
            )));
        }

        for (name, rate) in [
            ("move_rate", self.move_rate),
            ("turn_rate", self.turn_rate),
            ("pitch_rate", self.pitch_rate),
        ] {
            if !(rate > 0.0 && rate <= 1.0) {
                return Err(BehaviorError::Config(format!(
                    "{name} must lie in (0, 1], got {rate}"
                )));
            }
        }

        for (name, v) in [
            ("move_range_small", self.move_range_small),
            ("turn_range_degrees", self.turn_range_degrees),
            ("pitch_range_degrees", self.pitch_range_degrees),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(BehaviorError::Config(format!(
                    "{name} must be finite and non-negative, got {v}"
                )));
            }
        }

        if !(self.stop_tolerance.is_finite() && self.stop_tolerance > 0.0) {
            return Err(BehaviorError::Config(format!(
                "stop_tolerance must be positive, got {}",
                self.stop_tolerance
            )));
        }

        if !self.walk_frequency.is_finite() || !self.walk_amplitude.is_finite() {
            return Err(BehaviorError::Config("walk gait parameters must be finite".into()));
        }

        self.wave_frequency.check("wave_frequency")?;
        self.wave_amplitude.check("wave_amplitude")?;
        self.wave_duration_ms.check("wave_duration_ms")?;
        if self.wave_duration_ms.min < 0.0 {
            return Err(BehaviorError::Config("wave_duration_ms must not be negative".into()));
        }

        Ok(())
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            chance_of_moving:       0.005,
            chance_of_sound:        0.0,
            chance_of_head_turning: 0.05,
            chance_of_big_move:     0.1,
            chance_of_waving:       0.009,

            receive_voxels: true,
            voxel_fps:      60.0,

            spawn_box: SpawnBox::default(),

            move_range_small:    0.5,
            turn_range_degrees:  70.0,
            stop_tolerance:      0.05,
            move_rate:           0.05,
            turn_rate:           0.15,
            pitch_rate:          0.20,
            pitch_range_degrees: 30.0,

            walk_frequency: 5.0,
            walk_amplitude: 45.0,

            wave_frequency:   Span::new(3.0, 8.0),
            wave_amplitude:   Span::new(5.0, 65.0),
            wave_duration_ms: Span::new(1_000.0, 3_000.0),
        }
    }
}
