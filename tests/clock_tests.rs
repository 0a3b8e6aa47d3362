use flycam::core::clock::{FrameClock, TIME_SCALE_MIN};

const EPSILON: f64 = 1e-9;

#[cfg(test)]
mod tick_tests {
    use super::*;

    #[test]
    fn test_pause_scenario() {
        let mut clock = FrameClock::default();

        let delta = clock.tick(2.0);
        assert!((delta - 2.0).abs() < EPSILON);
        assert!((clock.sim_time() - 2.0).abs() < EPSILON);

        clock.set_time_scale(0.0);
        assert_eq!(clock.time_scale(), TIME_SCALE_MIN);

        let delta = clock.tick(4.0);
        assert!(delta > 0.0);
        assert!((delta - 2.0 * TIME_SCALE_MIN).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic_ticks_never_go_backwards() {
        let mut clock = FrameClock::new(TIME_SCALE_MIN, 8.0);
        let readings = [0.0, 0.016, 0.016, 0.05, 0.9, 0.9001, 3.0, 10.0];
        let scales = [1.0, 0.5, 8.0, -3.0, 0.01, 100.0, 0.2, 1.0];

        let mut last_sim = clock.sim_time();
        for (now, scale) in readings.into_iter().zip(scales) {
            clock.set_time_scale(scale);
            let delta = clock.tick(now);

            assert!(delta >= 0.0, "negative delta {} at {}", delta, now);
            assert!(clock.sim_time() >= last_sim);
            assert_eq!(clock.delta(), delta);
            last_sim = clock.sim_time();
        }
    }

    #[test]
    fn test_repeated_reading_yields_zero_delta() {
        let mut clock = FrameClock::default();
        clock.tick(1.5);
        assert_eq!(clock.tick(1.5), 0.0);
    }

    #[test]
    fn test_regressing_clock_gives_negative_delta() {
        let mut clock = FrameClock::default();
        clock.tick(5.0);
        let delta = clock.tick(4.0);

        assert!((delta + 1.0).abs() < EPSILON);
        assert_eq!(clock.real_time(), 4.0);
    }

    #[test]
    fn test_scaled_time_accumulates() {
        let mut clock = FrameClock::new(TIME_SCALE_MIN, 4.0);
        clock.set_time_scale(2.0);
        clock.tick(1.0);
        clock.set_time_scale(0.5);
        clock.tick(3.0);

        assert!((clock.sim_time() - 3.0).abs() < EPSILON);
        assert!((clock.delta() - 1.0).abs() < EPSILON);
        assert!((clock.real_delta() - 2.0).abs() < EPSILON);
    }
}

#[cfg(test)]
mod scale_tests {
    use super::*;

    #[test]
    fn test_non_positive_scale_clamps_to_minimum() {
        let mut clock = FrameClock::default();
        for requested in [0.0, -0.0, -1.0, -1e9, f64::NEG_INFINITY] {
            clock.set_time_scale(requested);
            assert_eq!(clock.time_scale(), TIME_SCALE_MIN);
            assert!(clock.time_scale() > 0.0);
        }
    }

    #[test]
    fn test_scale_clamps_to_maximum() {
        let mut clock = FrameClock::new(TIME_SCALE_MIN, 3.0);
        clock.set_time_scale(10.0);
        assert_eq!(clock.time_scale(), 3.0);
    }

    #[test]
    fn test_adjust_steps_and_clamps() {
        let mut clock = FrameClock::default();

        clock.adjust_time_scale(-0.1);
        assert!((clock.time_scale() - 0.9).abs() < EPSILON);

        clock.adjust_time_scale(0.5);
        assert_eq!(clock.time_scale(), 1.0);

        for _ in 0..20 {
            clock.adjust_time_scale(-0.1);
        }
        assert_eq!(clock.time_scale(), TIME_SCALE_MIN);
        assert!(clock.is_paused());
    }
}

#[cfg(test)]
mod pause_tests {
    use super::*;

    #[test]
    fn test_toggle_pause_restores_previous_rate() {
        let mut clock = FrameClock::new(TIME_SCALE_MIN, 4.0);
        clock.set_time_scale(2.5);

        clock.toggle_pause();
        assert!(clock.is_paused());
        assert_eq!(clock.time_scale(), TIME_SCALE_MIN);

        clock.toggle_pause();
        assert!(!clock.is_paused());
        assert_eq!(clock.time_scale(), 2.5);
    }

    #[test]
    fn test_paused_clock_still_advances_slightly() {
        let mut clock = FrameClock::default();
        clock.toggle_pause();

        let delta = clock.tick(1.0);
        assert!(delta > 0.0);
        assert!(delta < 1e-6);
        assert!((clock.real_delta() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_adjust_while_paused_stays_paused() {
        let mut clock = FrameClock::default();
        clock.set_time_scale(0.5);
        clock.toggle_pause();

        clock.adjust_time_scale(0.1);
        assert!(clock.is_paused());

        clock.toggle_pause();
        assert!((clock.time_scale() - 0.6).abs() < EPSILON);
    }

    #[test]
    fn test_unpause_after_zero_request_resumes_at_unit_rate() {
        let mut clock = FrameClock::default();
        clock.set_time_scale(0.0);
        assert!(clock.is_paused());

        clock.toggle_pause();
        assert_eq!(clock.time_scale(), 1.0);
    }
}
