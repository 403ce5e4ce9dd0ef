//! Frame clock for the engine.
//!
//! [`Engine::tick`](crate::Engine::tick) reads a [`FrameClock`] once per
//! frame. The measured delta drives the field step; the frame number and a
//! windowed FPS figure go back to the caller in the frame statistics.

use std::time::{Duration, Instant};

/// Length of the window the FPS figure is averaged over.
const FPS_WINDOW: Duration = Duration::from_millis(500);

/// One reading of the clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Seconds since the clock (re)started.
    pub elapsed: f32,
    /// Seconds since the previous tick.
    pub delta: f32,
    /// 1 for the first tick after a (re)start.
    pub frame: u64,
}

#[derive(Debug)]
struct FpsWindow {
    opened: Instant,
    frames: u32,
    fps: f32,
}

impl FpsWindow {
    fn record(&mut self, now: Instant) {
        self.frames += 1;
        let span = now.saturating_duration_since(self.opened);
        if span >= FPS_WINDOW {
            self.fps = self.frames as f32 / span.as_secs_f32();
            self.frames = 0;
            self.opened = now;
        }
    }
}

#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frames: u64,
    window: FpsWindow,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            start: now,
            last: now,
            frames: 0,
            window: FpsWindow {
                opened: now,
                frames: 0,
                fps: 0.0,
            },
        }
    }

    /// Read the wall clock.
    pub fn tick(&mut self) -> Tick {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> Tick {
        let delta = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        self.frames += 1;
        self.window.record(now);
        Tick {
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
            delta,
            frame: self.frames,
        }
    }

    /// Frames per second over the last complete window; 0 until one closes.
    pub fn fps(&self) -> f32 {
        self.window.fps
    }

    /// Start over from frame 0, e.g. after the field was rebuilt.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
