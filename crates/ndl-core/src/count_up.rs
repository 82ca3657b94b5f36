#![forbid(unsafe_code)]

//! Count-up animation for headline statistics.
//!
//! A [`CountUp`] interpolates a set of integer metrics from 0 to their
//! targets over a shared duration. It is advanced by [`CountUp::tick`] with
//! the current time and reports whether the host should schedule another
//! frame, so it can be driven by a frame callback, a timer, or a test.
//!
//! # Invariants
//!
//! 1. `progress` is `elapsed / duration` clamped to `[0.0, 1.0]`.
//! 2. Each displayed value is `floor(target * progress)`, computed in integer
//!    arithmetic so it is exact at the end and never exceeds the target.
//! 3. Displayed values never decrease between ticks.
//! 4. Once finished or cancelled, `tick()` never requests another frame.
//!
//! # Failure Modes
//!
//! - Zero duration: the first tick completes the animation.
//! - `now` earlier than the start instant: treated as zero elapsed time.

use web_time::{Duration, Instant};

/// Reference duration of the statistics count-up.
pub const COUNT_UP_DURATION: Duration = Duration::from_millis(2000);

/// A headline number animated by [`CountUp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    /// Stable identifier ("documents", "users", ...).
    pub id: String,
    /// Final value reached when the animation completes.
    pub target: u64,
    /// Label appended after the number ("+" or empty).
    pub suffix: String,
}

impl Metric {
    /// Create a metric.
    pub fn new(id: impl Into<String>, target: u64, suffix: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target,
            suffix: suffix.into(),
        }
    }
}

/// Lifecycle of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Not yet started; every value is 0.
    Idle,
    /// Advancing on each tick.
    Running {
        /// Instant captured by [`CountUp::start`].
        started: Instant,
    },
    /// Every value has reached its target.
    Finished,
    /// Torn down before finishing; ticks are ignored.
    Cancelled,
}

/// What the host should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Schedule another frame.
    Continue,
    /// Stop scheduling frames.
    Done,
}

/// Time-interpolated counters sharing one clock.
#[derive(Debug, Clone)]
pub struct CountUp {
    metrics: Vec<Metric>,
    values: Vec<u64>,
    duration: Duration,
    phase: AnimationPhase,
}

impl CountUp {
    /// Create an idle animation over `metrics`.
    #[must_use]
    pub fn new(metrics: Vec<Metric>, duration: Duration) -> Self {
        let values = vec![0; metrics.len()];
        Self {
            metrics,
            values,
            duration,
            phase: AnimationPhase::Idle,
        }
    }

    /// Capture the start instant and apply the first frame.
    ///
    /// Calling `start` again while running does not move the start instant.
    pub fn start(&mut self, now: Instant) -> FrameRequest {
        if self.phase == AnimationPhase::Idle {
            self.phase = AnimationPhase::Running { started: now };
            #[cfg(feature = "tracing")]
            tracing::debug!(
                metrics = self.metrics.len(),
                duration_ms = self.duration.as_millis() as u64,
                "count-up started"
            );
        }
        self.tick(now)
    }

    /// Advance every value to its interpolated position at `now`.
    pub fn tick(&mut self, now: Instant) -> FrameRequest {
        let AnimationPhase::Running { started } = self.phase else {
            return FrameRequest::Done;
        };
        let elapsed = now.saturating_duration_since(started);
        let finished = elapsed >= self.duration;

        for (value, metric) in self.values.iter_mut().zip(&self.metrics) {
            let next = if finished {
                metric.target
            } else {
                interpolate(metric.target, elapsed, self.duration)
            };
            *value = (*value).max(next);
        }

        if finished {
            self.phase = AnimationPhase::Finished;
            #[cfg(feature = "tracing")]
            tracing::debug!("count-up finished");
            FrameRequest::Done
        } else {
            FrameRequest::Continue
        }
    }

    /// Stop the animation; later ticks request no frames.
    pub fn cancel(&mut self) {
        if matches!(self.phase, AnimationPhase::Idle | AnimationPhase::Running { .. }) {
            self.phase = AnimationPhase::Cancelled;
            #[cfg(feature = "tracing")]
            tracing::debug!("count-up cancelled");
        }
    }

    /// Progress in `[0.0, 1.0]` at `now`; 0 when idle, 1 when finished.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        match self.phase {
            AnimationPhase::Idle | AnimationPhase::Cancelled => 0.0,
            AnimationPhase::Finished => 1.0,
            AnimationPhase::Running { started } => {
                if self.duration.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
            }
        }
    }

    /// Displayed value for `id`.
    #[must_use]
    pub fn value(&self, id: &str) -> Option<u64> {
        self.metrics
            .iter()
            .position(|m| m.id == id)
            .map(|idx| self.values[idx])
    }

    /// Metrics paired with their displayed values, in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (&Metric, u64)> {
        self.metrics.iter().zip(self.values.iter().copied())
    }

    /// Current lifecycle phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Whether the host should keep scheduling frames.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, AnimationPhase::Running { .. })
    }

    /// Shared animation duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The animated metrics.
    #[inline]
    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }
}

/// `floor(target * elapsed / duration)` without floating-point rounding.
fn interpolate(target: u64, elapsed: Duration, duration: Duration) -> u64 {
    let total = duration.as_nanos();
    if total == 0 {
        return target;
    }
    let elapsed = elapsed.as_nanos().min(total);
    // target < 2^64 and elapsed <= total < 2^64 * 1e9, so the product fits u128
    // for any duration shorter than ~584 years.
    let scaled = u128::from(target).saturating_mul(elapsed) / total;
    u64::try_from(scaled).unwrap_or(target).min(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> Vec<Metric> {
        vec![
            Metric::new("documents", 2_500_000, "+"),
            Metric::new("collections", 450, "+"),
            Metric::new("users", 180_000, "+"),
            Metric::new("countries", 142, ""),
        ]
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn idle_values_are_zero() {
        let c = CountUp::new(stats(), COUNT_UP_DURATION);
        assert_eq!(c.phase(), AnimationPhase::Idle);
        assert!(c.iter().all(|(_, v)| v == 0));
        assert_eq!(c.progress(Instant::now()), 0.0);
    }

    #[test]
    fn start_applies_first_frame() {
        let t0 = Instant::now();
        let mut c = CountUp::new(stats(), COUNT_UP_DURATION);
        assert_eq!(c.start(t0), FrameRequest::Continue);
        assert_eq!(c.value("documents"), Some(0));
        assert!(c.is_running());
    }

    #[test]
    fn halfway_is_floor_of_half() {
        let t0 = Instant::now();
        let mut c = CountUp::new(stats(), COUNT_UP_DURATION);
        c.start(t0);
        c.tick(t0 + ms(1000));
        assert_eq!(c.value("documents"), Some(1_250_000));
        assert_eq!(c.value("collections"), Some(225));
        assert_eq!(c.value("countries"), Some(71));
    }

    #[test]
    fn floor_not_round() {
        let t0 = Instant::now();
        let mut c = CountUp::new(vec![Metric::new("n", 142, "")], COUNT_UP_DURATION);
        c.start(t0);
        // 142 * 0.999 = 141.858 -> 141
        c.tick(t0 + ms(1998));
        assert_eq!(c.value("n"), Some(141));
    }

    #[test]
    fn finishes_exactly_at_target() {
        let t0 = Instant::now();
        let mut c = CountUp::new(stats(), COUNT_UP_DURATION);
        c.start(t0);
        assert_eq!(c.tick(t0 + COUNT_UP_DURATION), FrameRequest::Done);
        assert_eq!(c.phase(), AnimationPhase::Finished);
        for (metric, value) in c.iter() {
            assert_eq!(value, metric.target);
        }
        assert_eq!(c.tick(t0 + ms(5000)), FrameRequest::Done);
    }

    #[test]
    fn late_tick_overshoot_is_clamped() {
        let t0 = Instant::now();
        let mut c = CountUp::new(stats(), COUNT_UP_DURATION);
        c.start(t0);
        c.tick(t0 + Duration::from_secs(60));
        assert_eq!(c.value("users"), Some(180_000));
        assert_eq!(c.progress(t0 + Duration::from_secs(60)), 1.0);
    }

    #[test]
    fn restart_while_running_keeps_start_instant() {
        let t0 = Instant::now();
        let mut c = CountUp::new(stats(), COUNT_UP_DURATION);
        c.start(t0);
        c.start(t0 + ms(1000));
        assert_eq!(c.phase(), AnimationPhase::Running { started: t0 });
    }

    #[test]
    fn cancel_stops_frames() {
        let t0 = Instant::now();
        let mut c = CountUp::new(stats(), COUNT_UP_DURATION);
        c.start(t0);
        c.tick(t0 + ms(500));
        c.cancel();
        assert_eq!(c.phase(), AnimationPhase::Cancelled);
        assert_eq!(c.tick(t0 + ms(600)), FrameRequest::Done);
        assert!(!c.is_running());
    }

    #[test]
    fn cancel_after_finish_keeps_finished() {
        let t0 = Instant::now();
        let mut c = CountUp::new(stats(), COUNT_UP_DURATION);
        c.start(t0);
        c.tick(t0 + COUNT_UP_DURATION);
        c.cancel();
        assert_eq!(c.phase(), AnimationPhase::Finished);
    }

    #[test]
    fn zero_duration_completes_on_start() {
        let t0 = Instant::now();
        let mut c = CountUp::new(stats(), Duration::ZERO);
        assert_eq!(c.start(t0), FrameRequest::Done);
        assert_eq!(c.value("documents"), Some(2_500_000));
    }

    #[test]
    fn clock_before_start_is_zero_elapsed() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut c = CountUp::new(stats(), COUNT_UP_DURATION);
        c.start(t0);
        c.tick(t0 - ms(500));
        assert_eq!(c.value("documents"), Some(0));
    }

    #[test]
    fn unknown_metric_is_none() {
        let c = CountUp::new(stats(), COUNT_UP_DURATION);
        assert_eq!(c.value("visitors"), None);
    }

    #[test]
    fn interpolate_handles_max_target() {
        assert_eq!(interpolate(u64::MAX, ms(1000), ms(1000)), u64::MAX);
        assert_eq!(interpolate(u64::MAX, ms(0), ms(1000)), 0);
        assert!(interpolate(u64::MAX, ms(500), ms(1000)) <= u64::MAX / 2 + 1);
    }
}
