//! Step player
//!
//! The [`Player`] owns one finished [`StepSequence`] and a cursor into it.
//! Manual navigation moves the cursor directly; timed playback is cooperative:
//! the UI loop calls [`Player::tick`] with the current instant and the player
//! advances as many steps as the speed allows.
//!
//! Every method that depends on time takes an explicit `now`, so playback is
//! driven by the caller's clock.

pub mod analytics;
pub mod errors;

pub use analytics::Analytics;
pub use errors::PlaybackError;

use crate::constants::{
    DEFAULT_SPEED, MAX_SPEED, MIN_SPEED, MIN_STEP_INTERVAL_MS, STEP_INTERVAL_BASE_MS,
};
use crate::snapshot::{Step, StepSequence};
use std::fmt;
use std::time::{Duration, Instant};

/// Playback speed in `MIN_SPEED..=MAX_SPEED`; higher is faster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u16);

impl Speed {
    /// Clamp `value` into the valid range
    pub fn new(value: u16) -> Self {
        Speed(value.clamp(MIN_SPEED, MAX_SPEED))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// Delay between two automatic steps: `max(10, 200 - speed)` ms
    pub fn interval(self) -> Duration {
        let ms = STEP_INTERVAL_BASE_MS
            .saturating_sub(u64::from(self.0))
            .max(MIN_STEP_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    pub fn faster(self, by: u16) -> Self {
        Speed::new(self.0.saturating_add(by))
    }

    pub fn slower(self, by: u16) -> Self {
        Speed::new(self.0.saturating_sub(by))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(DEFAULT_SPEED)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} ms)", self.0, self.interval().as_millis())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Paused,
    Playing,
}

/// Wall time spent playing
#[derive(Debug, Clone, Copy, Default)]
struct Stopwatch {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl Stopwatch {
    fn start(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    fn stop(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += now.saturating_duration_since(since);
        }
    }

    fn reset(&mut self, now: Instant) {
        self.accumulated = Duration::ZERO;
        if self.running_since.is_some() {
            self.running_since = Some(now);
        }
    }

    fn elapsed(&self, now: Instant) -> Duration {
        let running = self
            .running_since
            .map_or(Duration::ZERO, |since| now.saturating_duration_since(since));
        self.accumulated + running
    }
}

/// Cursor and playback state over one step sequence
#[derive(Debug)]
pub struct Player {
    sequence: StepSequence,
    cursor: usize,
    state: PlayState,
    speed: Speed,
    /// Instant the last automatic step was due
    last_advance: Instant,
    stopwatch: Stopwatch,
}

impl Player {
    pub fn new(sequence: StepSequence, speed: Speed, now: Instant) -> Self {
        Player {
            sequence,
            cursor: 0,
            state: PlayState::Paused,
            speed,
            last_advance: now,
            stopwatch: Stopwatch::default(),
        }
    }

    pub fn sequence(&self) -> &StepSequence {
        &self.sequence
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// The step under the cursor
    pub fn current(&self) -> Option<&Step> {
        self.sequence.get(self.cursor)
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.cursor + 1 >= self.sequence.len()
    }

    /// Advance one step
    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.sequence.is_empty() {
            return Err(PlaybackError::Empty);
        }
        if self.at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.cursor += 1;
        Ok(())
    }

    /// Go back one step. Reaching step 0 resets the stopwatch.
    pub fn step_backward(&mut self, now: Instant) -> Result<(), PlaybackError> {
        if self.sequence.is_empty() {
            return Err(PlaybackError::Empty);
        }
        if self.cursor == 0 {
            return Err(PlaybackError::AtStart);
        }
        self.cursor -= 1;
        if self.cursor == 0 {
            self.stopwatch.reset(now);
        }
        Ok(())
    }

    /// Move the cursor to `index`, clamped to the sequence. Returns the new cursor.
    pub fn jump_to(&mut self, index: usize, now: Instant) -> usize {
        self.cursor = index.min(self.sequence.len().saturating_sub(1));
        if self.cursor == 0 {
            self.stopwatch.reset(now);
        }
        self.cursor
    }

    pub fn rewind(&mut self, now: Instant) {
        self.jump_to(0, now);
    }

    pub fn jump_to_end(&mut self, now: Instant) {
        self.jump_to(usize::MAX, now);
        if self.is_playing() {
            self.pause(now);
        }
    }

    /// Start timed playback. The first automatic step is due one interval
    /// from `now`.
    pub fn play(&mut self, now: Instant) -> Result<(), PlaybackError> {
        if self.sequence.is_empty() {
            return Err(PlaybackError::Empty);
        }
        if self.at_end() {
            return Err(PlaybackError::AtEnd);
        }
        if !self.is_playing() {
            self.state = PlayState::Playing;
            self.last_advance = now;
            self.stopwatch.start(now);
        }
        Ok(())
    }

    /// Stop timed playback; the cursor stays where it is
    pub fn pause(&mut self, now: Instant) {
        if self.is_playing() {
            self.state = PlayState::Paused;
            self.stopwatch.stop(now);
        }
    }

    /// Halt any scheduled advancement before the player is discarded or its
    /// sequence replaced
    pub fn cancel(&mut self, now: Instant) {
        self.pause(now);
    }

    /// Advance every step that has come due since the last one.
    /// Returns how many steps were taken; playback stops on the terminal step.
    pub fn tick(&mut self, now: Instant) -> usize {
        if !self.is_playing() {
            return 0;
        }

        let interval = self.speed.interval();
        let mut advanced = 0;
        while now.saturating_duration_since(self.last_advance) >= interval {
            if self.step_forward().is_err() {
                break;
            }
            self.last_advance += interval;
            advanced += 1;
        }

        if self.at_end() {
            self.pause(now);
        }
        advanced
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.stopwatch.elapsed(now)
    }

    /// Counters for `sequence[0..=cursor]`
    pub fn analytics(&self, now: Instant) -> Analytics {
        Analytics::scan(self.sequence.steps(), self.cursor, self.elapsed(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_maps_to_interval() {
        assert_eq!(Speed::new(50).interval(), Duration::from_millis(150));
        assert_eq!(Speed::new(190).interval(), Duration::from_millis(10));
        assert_eq!(Speed::new(0).value(), MIN_SPEED);
        assert_eq!(Speed::new(500).value(), MAX_SPEED);
        assert_eq!(Speed::new(185).faster(20).value(), MAX_SPEED);
    }

    #[test]
    fn stopwatch_accumulates_only_while_running() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::default();
        watch.start(t0);
        watch.stop(t0 + Duration::from_millis(30));
        assert_eq!(watch.elapsed(t0 + Duration::from_secs(5)), Duration::from_millis(30));
        watch.reset(t0);
        assert_eq!(watch.elapsed(t0 + Duration::from_secs(5)), Duration::ZERO);
    }
}
