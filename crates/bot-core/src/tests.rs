//! Unit tests for bot-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BotId, EpisodeId, JointId};

    #[test]
    fn index_roundtrip() {
        let id = BotId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(BotId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(BotId::INVALID.0, u32::MAX);
        assert_eq!(JointId::INVALID.0, u16::MAX);
        assert_eq!(EpisodeId::default(), EpisodeId::INVALID);
    }

    #[test]
    fn episode_next_increments() {
        assert_eq!(EpisodeId(0).next(), EpisodeId(1));
        assert_eq!(EpisodeId(u64::MAX).next(), EpisodeId(0));
    }

    #[test]
    fn display() {
        assert_eq!(JointId(17).to_string(), "JointId(17)");
    }
}

#[cfg(test)]
mod time {
    use crate::{sanitize_delta, Frame, FrameClock, Millis, SimConfig};

    #[test]
    fn frame_arithmetic() {
        assert_eq!(Frame(10) + 5, Frame(15));
        assert_eq!(Frame(10).offset(3), Frame(13));
        assert_eq!(Frame(3).to_string(), "F3");
    }

    #[test]
    fn clock_accumulates_and_counts() {
        let mut clock = FrameClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.current_frame, Frame(2));
        assert!((clock.elapsed_secs - 0.75).abs() < 1e-12);
        assert_eq!(clock.now_millis(), Millis(750));
    }

    #[test]
    fn negative_and_nan_deltas_add_no_time() {
        let mut clock = FrameClock::new();
        clock.advance(1.0);
        clock.advance(-3.0);
        clock.advance(f64::NAN);
        clock.advance(f64::INFINITY);
        assert_eq!(clock.current_frame, Frame(4));
        assert_eq!(clock.elapsed_secs, 1.0);
        assert_eq!(sanitize_delta(-0.1), 0.0);
    }

    #[test]
    fn millis_rounds_down() {
        assert_eq!(Millis::from_secs_f64(1.0009), Millis(1000));
        assert_eq!(Millis::from_secs_f64(-2.0), Millis::ZERO);
        assert_eq!(Millis(10).after(5), Millis(15));
        assert_eq!(Millis(u64::MAX).after(5), Millis(u64::MAX));
    }

    #[test]
    fn request_reading_rounds_up() {
        let mut clock = FrameClock::new();
        clock.advance(1.0 / 60.0);
        assert_eq!(clock.now_millis(), Millis(16));
        assert_eq!(clock.request_millis(), Millis(17));

        assert_eq!(Millis::from_secs_f64_ceil(0.75), Millis(750));
        assert_eq!(Millis::from_secs_f64_ceil(f64::NAN), Millis::ZERO);
        assert_eq!(FrameClock::new().request_millis(), Millis::ZERO);
    }

    #[test]
    fn sim_config_derived_values() {
        let cfg = SimConfig {
            frame_delta_secs:         0.5,
            total_frames:             120,
            bot_count:                3,
            seed:                     7,
            snapshot_interval_frames: 10,
        };
        assert_eq!(cfg.end_frame(), Frame(120));
        assert_eq!(cfg.frames_per_second(), 2.0);
        assert_eq!(cfg.duration_secs(), 60.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn sim_config_rejects_bad_delta_and_empty_crowd() {
        let mut cfg = SimConfig::default();
        cfg.frame_delta_secs = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.frame_delta_secs = f64::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.bot_count = 0;
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{BotId, BotRng, SimRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = BotRng::new(42, BotId(0));
        let mut b = BotRng::new(42, BotId(0));
        for _ in 0..100 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn different_bots_different_sequence() {
        let mut a = BotRng::new(42, BotId(0));
        let mut b = BotRng::new(42, BotId(1));
        let va: Vec<f64> = (0..10).map(|_| a.unit()).collect();
        let vb: Vec<f64> = (0..10).map(|_| b.unit()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn chance_extremes() {
        let mut rng = BotRng::new(1, BotId(0));
        assert!((0..1_000).all(|_| !rng.chance(0.0)));
        assert!((0..1_000).all(|_| rng.chance(1.0)));
    }

    #[test]
    fn uniform_stays_half_open() {
        let mut rng = BotRng::new(3, BotId(9));
        for _ in 0..10_000 {
            let v = rng.uniform(-30.0, 30.0);
            assert!((-30.0..30.0).contains(&v), "got {v}");
        }
        assert_eq!(rng.uniform(4.0, 4.0), 4.0);
    }

    #[test]
    fn int_inclusive_covers_bounds() {
        let mut rng = BotRng::new(5, BotId(2));
        let draws: Vec<u32> = (0..5_000).map(|_| rng.int_inclusive(1, 4)).collect();
        assert!(draws.iter().all(|&n| (1..=4).contains(&n)));
        assert!(draws.contains(&1));
        assert!(draws.contains(&4));
        assert_eq!(rng.int_inclusive(7, 7), 7);
    }

    #[test]
    fn index_of_empty_is_none() {
        let mut rng = BotRng::new(5, BotId(2));
        assert_eq!(rng.index(0), None);
        assert!((0..1_000).all(|_| rng.index(3).is_some_and(|i| i < 3)));
    }

    #[test]
    fn sim_rng_is_reproducible() {
        let mut a = SimRng::new(11);
        let mut b = SimRng::new(11);
        assert_eq!(a.next_seed(), b.next_seed());
    }
}

#[cfg(test)]
mod math {
    use glam::{Quat, Vec3};

    use crate::math::{
        angle_axis_degrees, approach, approach_vec, from_pitch_yaw_roll_degrees, front, mix,
        yaw_degrees, IDENTITY_FRONT, UP,
    };
    use crate::{BotId, BotRng, SpawnBox};

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn identity_faces_negative_z() {
        assert!(close(front(Quat::IDENTITY), IDENTITY_FRONT));
    }

    #[test]
    fn yaw_ninety_faces_negative_x() {
        let q = angle_axis_degrees(90.0, UP);
        assert!(close(front(q), Vec3::NEG_X));
        assert!((yaw_degrees(q) - 90.0).abs() < 1e-3);
    }

    #[test]
    fn zero_axis_is_identity() {
        assert_eq!(angle_axis_degrees(45.0, Vec3::ZERO), Quat::IDENTITY);
    }

    #[test]
    fn pitch_yaw_roll_single_axes() {
        let pitch = from_pitch_yaw_roll_degrees(30.0, 0.0, 0.0);
        assert!(pitch.abs_diff_eq(Quat::from_rotation_x(30f32.to_radians()), 1e-6));
        let yaw = from_pitch_yaw_roll_degrees(0.0, 45.0, 0.0);
        assert!(yaw.abs_diff_eq(Quat::from_rotation_y(45f32.to_radians()), 1e-6));
        let roll = from_pitch_yaw_roll_degrees(0.0, 0.0, 60.0);
        assert!(roll.abs_diff_eq(Quat::from_rotation_z(60f32.to_radians()), 1e-6));
    }

    #[test]
    fn pitch_yaw_roll_composes_z_y_x() {
        let q = from_pitch_yaw_roll_degrees(10.0, 20.0, 30.0);
        let expected = Quat::from_rotation_z(30f32.to_radians())
            * Quat::from_rotation_y(20f32.to_radians())
            * Quat::from_rotation_x(10f32.to_radians());
        assert!(q.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn mix_endpoints_and_short_path() {
        let a = Quat::IDENTITY;
        let b = angle_axis_degrees(60.0, UP);
        assert!(mix(a, b, 0.0).abs_diff_eq(a, 1e-6));
        assert!(mix(a, b, 1.0).abs_diff_eq(b, 1e-5));
        // -b is the same rotation; mixing toward it must not take the long way.
        let half = mix(a, -b, 0.5);
        assert!((yaw_degrees(half) - 30.0).abs() < 1e-2);
    }

    #[test]
    fn approach_is_exponential() {
        assert_eq!(approach(0.0, 30.0, 0.2), 6.0);
        assert!((approach(6.0, 30.0, 0.2) - 10.8).abs() < 1e-5);
        let v = approach_vec(Vec3::ZERO, Vec3::new(10.0, 0.0, -10.0), 0.05);
        assert!(close(v, Vec3::new(0.5, 0.0, -0.5)));
    }

    #[test]
    fn spawn_box_clamps_and_pins_height() {
        let b = SpawnBox::default();
        let p = b.clamp(Vec3::new(-100.0, 40.0, 31.0));
        assert_eq!(p, Vec3::new(20.0, 2.5, 25.0));
        assert!(b.contains(p));
        assert_eq!(b.max_span(), 5.0);
    }

    #[test]
    fn spawn_box_samples_inside() {
        let b = SpawnBox::default();
        let mut rng = BotRng::new(0, BotId(0));
        for _ in 0..1_000 {
            assert!(b.contains(b.sample(&mut rng)));
        }
    }

    #[test]
    fn spawn_box_validity() {
        assert!(SpawnBox::default().is_valid());
        let inverted = SpawnBox { x_min: 5.0, x_max: 1.0, ..SpawnBox::default() };
        assert!(!inverted.is_valid());
    }
}
