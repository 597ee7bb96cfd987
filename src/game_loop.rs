//! The per-tick game loop.
//!
//! # Tick Order
//!
//! A gameplay tick always runs, in this order:
//!
//! 1. read the accelerometer (failed reads reuse the last good sample)
//! 2. map the sample to the avatar position
//! 3. check collection against the target, update score/target
//! 4. play the score tone if the target was collected
//! 5. advance the round clock
//! 6. render and present the frame
//! 7. switch to [`Phase::RoundOver`] if the countdown reached zero
//!
//! # Round Over
//!
//! The first tick in `RoundOver` renders the round-over screen and asks the caller to
//! block for [`ROUND_OVER_PAUSE_MS`]. The tick after the pause resets the round and
//! continues as a normal gameplay tick. The clock keeps its anchor across the reset, so
//! that tick already takes the new round's first second.
//!
//! The loop never sleeps itself: every tick returns a [`TickReport`] with the wait the
//! caller must perform before the next tick. On the device that wait blocks the game.

use rand::RngCore;

use crate::clock::RoundClock;
use crate::config::{ROUND_OVER_PAUSE_MS, SCORE_TONE_DURATION_MS, SCORE_TONE_HZ, TICK_INTERVAL_MS};
use crate::display::{Flush, Screen};
use crate::input::{SampleHold, ScreenPoint, TiltMapper};
use crate::peripherals::{Accelerometer, Tone};
use crate::screens::{render_frame, render_round_over};
use crate::state::{GameState, Phase, ScoreEvent};

/// What a tick did, and how long to wait before the next one.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct TickReport {
    /// Milliseconds the caller must block before calling `tick` again.
    pub wait_ms: u64,
    /// Avatar position used this tick (gameplay ticks only).
    pub avatar: Option<ScreenPoint>,
    /// Set on the tick the target was collected.
    pub score: Option<ScoreEvent>,
    /// Final score, set on the tick the round-over screen was shown.
    pub round_over: Option<u32>,
    /// Set on the tick a new round started.
    pub round_reset: bool,
    /// Consecutive failed sensor reads (0 when the last read succeeded).
    pub sensor_misses: u32,
    /// The frame could not be presented.
    pub display_fault: bool,
}

/// Owns the game state and drives it one tick at a time.
pub struct GameLoop<R> {
    state: GameState<R>,
    clock: RoundClock,
    mapper: TiltMapper,
    hold: SampleHold,
    round_over_shown: bool,
}

impl<R: RngCore> GameLoop<R> {
    /// Start the first round at `now_ms` with a random target.
    pub fn new(
        rng: R,
        now_ms: u64,
    ) -> Self {
        Self {
            state: GameState::new(rng),
            clock: RoundClock::new(now_ms),
            mapper: TiltMapper::default(),
            hold: SampleHold::default(),
            round_over_shown: false,
        }
    }

    /// Replace the tilt calibration.
    #[must_use]
    pub fn with_mapper(
        mut self,
        mapper: TiltMapper,
    ) -> Self {
        self.mapper = mapper;
        self
    }

    #[inline]
    pub const fn state(&self) -> &GameState<R> { &self.state }

    #[inline]
    pub const fn phase(&self) -> Phase { self.state.phase() }

    /// Run one iteration of the loop.
    pub fn tick<A, F, T>(
        &mut self,
        now_ms: u64,
        sensor: &mut A,
        screen: &mut Screen<F>,
        tone: &mut T,
    ) -> TickReport
    where
        A: Accelerometer,
        F: Flush,
        T: Tone,
    {
        let mut report = TickReport::default();

        if self.state.phase() == Phase::RoundOver {
            if !self.round_over_shown {
                let final_score = self.state.round().score;
                report.display_fault = render_round_over(screen, final_score).is_err();
                report.round_over = Some(final_score);
                report.wait_ms = ROUND_OVER_PAUSE_MS;
                self.round_over_shown = true;
                return report;
            }

            self.state.reset();
            self.round_over_shown = false;
            report.round_reset = true;
        }

        self.play(now_ms, sensor, screen, tone, &mut report);
        report
    }

    fn play<A, F, T>(
        &mut self,
        now_ms: u64,
        sensor: &mut A,
        screen: &mut Screen<F>,
        tone: &mut T,
        report: &mut TickReport,
    ) where
        A: Accelerometer,
        F: Flush,
        T: Tone,
    {
        let sample = self.hold.resolve(sensor.read_acceleration());
        report.sensor_misses = self.hold.misses();

        let avatar = self.mapper.map(sample);
        report.avatar = Some(avatar);

        if let Some(event) = self.state.on_tick(avatar) {
            tone.play_tone(SCORE_TONE_HZ, SCORE_TONE_DURATION_MS);
            report.score = Some(event);
        }

        self.clock.tick(now_ms, self.state.round_mut());

        report.display_fault = render_frame(screen, self.state.round(), avatar, self.state.target()).is_err();

        if self.state.round().is_expired() {
            self.state.end_round();
        }
        report.wait_ms = TICK_INTERVAL_MS;
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState<R> { &mut self.state }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::Point;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::display::Framebuffer;
    use crate::input::{AxisCalibration, TiltSample};
    use crate::screens::{draw_playfield, draw_round_over};
    use crate::state::RoundState;

    /// Raw reading that maps to the top-left corner: never collects.
    const CORNER: TiltSample = TiltSample::new(-2000, -5400, 16384);

    struct FixedTilt(TiltSample);

    impl Accelerometer for FixedTilt {
        type Error = ();

        fn read_acceleration(&mut self) -> Result<TiltSample, ()> { Ok(self.0) }
    }

    /// Succeeds for the first `good` reads, then fails.
    struct FlakyTilt {
        sample: TiltSample,
        good: u32,
    }

    impl Accelerometer for FlakyTilt {
        type Error = ();

        fn read_acceleration(&mut self) -> Result<TiltSample, ()> {
            if self.good == 0 {
                return Err(());
            }
            self.good -= 1;
            Ok(self.sample)
        }
    }

    #[derive(Default)]
    struct RecordingTone {
        played: Vec<(u32, u32)>,
    }

    impl Tone for RecordingTone {
        fn play_tone(
            &mut self,
            frequency_hz: u32,
            duration_ms: u32,
        ) {
            self.played.push((frequency_hz, duration_ms));
        }
    }

    #[derive(Default)]
    struct Panel {
        frames: u32,
    }

    impl Flush for Panel {
        type Error = ();

        fn flush(
            &mut self,
            _frame: &Framebuffer,
        ) -> Result<(), ()> {
            self.frames += 1;
            Ok(())
        }
    }

    struct DeadPanel;

    impl Flush for DeadPanel {
        type Error = ();

        fn flush(
            &mut self,
            _frame: &Framebuffer,
        ) -> Result<(), ()> {
            Err(())
        }
    }

    fn new_loop() -> GameLoop<Pcg32> { GameLoop::new(Pcg32::seed_from_u64(0x5EED), 0) }

    fn in_target_area(p: Point) -> bool { (6..122).contains(&p.x) && (6..58).contains(&p.y) }

    #[test]
    fn test_starts_playing_with_full_round() {
        let game = new_loop();
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.state().round(), &RoundState::new());
        assert!(in_target_area(game.state().target()));
    }

    #[test]
    fn test_gameplay_tick_waits_tick_interval() {
        let mut game = new_loop();
        let mut screen = Screen::new(Panel::default());
        let mut tone = RecordingTone::default();

        let report = game.tick(50, &mut FixedTilt(CORNER), &mut screen, &mut tone);
        assert_eq!(report.wait_ms, 50);
        assert_eq!(report.avatar, Some(Point::new(0, 0)));
        assert_eq!(report.score, None);
        assert_eq!(screen.flusher().frames, 1);
        assert!(tone.played.is_empty());
    }

    #[test]
    fn test_frame_shows_clock_after_tick() {
        let mut game = new_loop();
        let mut screen = Screen::new(Panel::default());
        let mut tone = RecordingTone::default();

        game.tick(1000, &mut FixedTilt(CORNER), &mut screen, &mut tone);

        let mut expected = Framebuffer::new();
        let mut round = RoundState::new();
        round.seconds_remaining = 29;
        draw_playfield(&mut expected, &round, Point::new(0, 0), game.state().target());
        assert_eq!(screen.front(), &expected);
    }

    #[test]
    fn test_full_round_without_collisions() {
        let mut game = new_loop();
        let mut screen = Screen::new(Panel::default());
        let mut tone = RecordingTone::default();
        let mut sensor = FixedTilt(CORNER);

        for second in 1..=29u64 {
            let report = game.tick(second * 1000, &mut sensor, &mut screen, &mut tone);
            assert_eq!(report.wait_ms, 50);
            assert_eq!(game.phase(), Phase::Playing);
        }
        assert_eq!(game.state().round().seconds_remaining, 1);

        game.tick(30_000, &mut sensor, &mut screen, &mut tone);
        assert_eq!(game.state().round().seconds_remaining, 0);
        assert_eq!(game.phase(), Phase::RoundOver);

        // Round-over screen with the final score, then the pause
        let report = game.tick(30_050, &mut sensor, &mut screen, &mut tone);
        assert_eq!(report.round_over, Some(0));
        assert_eq!(report.wait_ms, 2000);
        assert_eq!(report.avatar, None);
        assert_eq!(game.phase(), Phase::RoundOver);
        let mut expected = Framebuffer::new();
        draw_round_over(&mut expected, 0);
        assert_eq!(screen.front(), &expected);

        // After the pause the round resets and play resumes
        let report = game.tick(32_050, &mut sensor, &mut screen, &mut tone);
        assert!(report.round_reset);
        assert_eq!(report.wait_ms, 50);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.state().round().seconds_remaining, 29);
        assert_eq!(game.state().round().score, 0);
        assert!(in_target_area(game.state().target()));
        assert!(tone.played.is_empty());
    }

    #[test]
    fn test_reset_keeps_clock_anchor() {
        let mut game = new_loop();
        let mut screen = Screen::new(Panel::default());
        let mut tone = RecordingTone::default();
        let mut sensor = FixedTilt(CORNER);

        // Last decrement at 1000 ms ends the round
        game.state_mut().round_mut().seconds_remaining = 1;
        game.tick(1000, &mut sensor, &mut screen, &mut tone);
        game.tick(1050, &mut sensor, &mut screen, &mut tone);

        // The pause already exceeds a clock period, the reset tick decrements
        let report = game.tick(3050, &mut sensor, &mut screen, &mut tone);
        assert!(report.round_reset);
        assert_eq!(game.state().round().seconds_remaining, 29);

        let mut expected = Framebuffer::new();
        let mut round = RoundState::new();
        round.seconds_remaining = 29;
        draw_playfield(&mut expected, &round, Point::new(0, 0), game.state().target());
        assert_eq!(screen.front(), &expected);

        // Re-anchored at 3050 by that decrement
        game.tick(4000, &mut sensor, &mut screen, &mut tone);
        assert_eq!(game.state().round().seconds_remaining, 29);
        game.tick(4050, &mut sensor, &mut screen, &mut tone);
        assert_eq!(game.state().round().seconds_remaining, 28);
    }

    #[test]
    fn test_collect_scores_once_with_tone() {
        let mut game = new_loop();
        let mut screen = Screen::new(Panel::default());
        let mut tone = RecordingTone::default();

        game.state_mut().place_target(Point::new(30, 20));
        let raw_x = AxisCalibration::HORIZONTAL.raw_for(28);
        let mut sensor = FixedTilt(TiltSample::new(raw_x, -5400, 0));

        let report = game.tick(100, &mut sensor, &mut screen, &mut tone);
        assert_eq!(report.avatar, Some(Point::new(28, 0)));

        let event = report.score.expect("avatar at target.x - 2 should score");
        assert_eq!(event.score, 1);
        assert_eq!(game.state().round().score, 1);
        assert_eq!(event.target, game.state().target());
        assert!(in_target_area(game.state().target()));
        assert_eq!(tone.played, vec![(500, 1000)]);
    }

    #[test]
    fn test_sensor_failure_reuses_last_sample() {
        let mut game = new_loop();
        let mut screen = Screen::new(Panel::default());
        let mut tone = RecordingTone::default();
        let raw_x = AxisCalibration::HORIZONTAL.raw_for(3);
        let mut sensor = FlakyTilt {
            sample: TiltSample::new(raw_x, -5400, 0),
            good: 1,
        };

        let first = game.tick(50, &mut sensor, &mut screen, &mut tone);
        assert_eq!(first.sensor_misses, 0);
        assert_eq!(first.avatar, Some(Point::new(3, 0)));

        let second = game.tick(100, &mut sensor, &mut screen, &mut tone);
        let third = game.tick(150, &mut sensor, &mut screen, &mut tone);
        assert_eq!(second.sensor_misses, 1);
        assert_eq!(third.sensor_misses, 2);
        assert_eq!(third.avatar, first.avatar);
    }

    #[test]
    fn test_display_fault_does_not_stop_the_game() {
        let mut game = new_loop();
        let mut screen = Screen::new(DeadPanel);
        let mut tone = RecordingTone::default();

        let report = game.tick(1000, &mut FixedTilt(CORNER), &mut screen, &mut tone);
        assert!(report.display_fault);
        assert_eq!(game.state().round().seconds_remaining, 29);
    }
}
