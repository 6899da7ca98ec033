//! Time-based settle animations.
//!
//! A [`SettleAnimation`] interpolates a single coordinate from where a panel
//! was released to where it should rest. It is driven by frame timestamps
//! rather than a wall clock so the same sequence of frames always produces
//! the same positions.

/// `(t - 1)^5 + 1`: starts at full speed and decelerates hard, the curve
/// platform drag helpers use when settling a released view.
pub fn quintic_out(fraction: f32) -> f32 {
    let t = fraction.clamp(0.0, 1.0) - 1.0;
    t * t * t * t * t + 1.0
}

/// How long a settle runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
}

/// Shortest settle, used for a release right next to the target.
pub const BASE_SETTLE_DURATION_MILLIS: u64 = 256;

/// Longest settle, whatever the distance.
pub const MAX_SETTLE_DURATION_MILLIS: u64 = 600;

impl AnimationSpec {
    pub fn tween(duration_millis: u64) -> Self {
        Self { duration_millis }
    }

    /// Settle spec scaled by how much of `range` is left to travel.
    ///
    /// Covering the whole range takes twice the base duration, capped at
    /// [`MAX_SETTLE_DURATION_MILLIS`].
    pub fn settle(distance: f32, range: f32) -> Self {
        let fraction = if range > 0.0 {
            (distance.abs() / range).min(1.0)
        } else {
            0.0
        };
        let duration = (BASE_SETTLE_DURATION_MILLIS as f32 * (fraction + 1.0)) as u64;
        Self::tween(duration.min(MAX_SETTLE_DURATION_MILLIS))
    }
}

/// Frame-driven [`quintic_out`] tween of one coordinate toward a resting
/// target.
#[derive(Debug, Clone, PartialEq)]
pub struct SettleAnimation {
    start: f32,
    target: f32,
    current: f32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    finished: bool,
}

impl SettleAnimation {
    pub fn new(start: f32, target: f32, spec: AnimationSpec) -> Self {
        Self {
            start,
            target,
            current: start,
            spec,
            start_time_nanos: None,
            finished: false,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Moves the animation to `frame_time_nanos` and returns the new value.
    ///
    /// The first frame seen becomes the animation's start time, so the first
    /// call always returns the start value (or the target for a zero-length
    /// spec). Once finished the value stays pinned to the target.
    pub fn advance(&mut self, frame_time_nanos: u64) -> f32 {
        if self.finished {
            return self.current;
        }
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = self.spec.duration_millis * 1_000_000;
        let linear_progress = if duration_nanos == 0 {
            1.0
        } else {
            (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0)
        };

        if linear_progress >= 1.0 {
            self.current = self.target;
            self.finished = true;
        } else {
            let progress = quintic_out(linear_progress);
            self.current = self.start + (self.target - self.start) * progress;
        }
        log::trace!(
            "settle {} -> {}: {} ({:.2})",
            self.start,
            self.target,
            self.current,
            linear_progress
        );
        self.current
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
