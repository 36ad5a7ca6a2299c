// SPDX-License-Identifier: MPL-2.0
//! Reveal latch and stagger schedule for the skills section.
//!
//! Timing works the same way as the notification manager: every decision
//! takes the current instant as a parameter, so tests drive a virtual clock
//! and production feeds instants from the tick subscription.

use super::indicator::Indicator;
use crate::content::Skill;
use std::time::{Duration, Instant};

/// Fraction of the section that must be visible before the reveal fires.
pub const REVEAL_THRESHOLD: f32 = 0.3;
/// Delay between consecutive bar reveals.
pub const STAGGER_INTERVAL: Duration = Duration::from_millis(200);
/// Length of each bar's fill tween once revealed.
pub const FILL_DURATION: Duration = Duration::from_millis(600);

/// One-shot latch: once fired it never re-arms, so scrolling the section in
/// and out of view cannot restart the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealLatch {
    Armed,
    Fired { started_at: Instant },
}

/// Skills-section animation state.
#[derive(Debug)]
pub struct State {
    latch: RevealLatch,
    indicators: Vec<Indicator>,
}

impl State {
    #[must_use]
    pub fn new(skills: &[Skill]) -> Self {
        Self {
            latch: RevealLatch::Armed,
            indicators: skills.iter().map(Indicator::new).collect(),
        }
    }

    /// Reports the section's currently visible fraction (from scroll events).
    ///
    /// Fires the animator exactly once, the first time the fraction reaches
    /// [`REVEAL_THRESHOLD`]. Returns whether this call fired it.
    pub fn observe_visibility(&mut self, fraction: f32, now: Instant) -> bool {
        if fraction >= REVEAL_THRESHOLD {
            self.trigger(now)
        } else {
            false
        }
    }

    /// Fires the reveal cascade directly, bypassing the visibility check
    /// (used by the external trigger surface). Latched: a second call is a
    /// no-op. Returns whether this call fired it.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.latch != RevealLatch::Armed {
            return false;
        }
        self.latch = RevealLatch::Fired { started_at: now };
        self.tick(now);
        true
    }

    /// Reveals every bar whose scheduled instant has passed.
    ///
    /// Bar `i` is due at `started_at + i * STAGGER_INTERVAL` and is stamped
    /// with that exact instant, so its fill tween and label timing do not
    /// depend on tick arrival jitter.
    pub fn tick(&mut self, now: Instant) {
        let RevealLatch::Fired { started_at } = self.latch else {
            return;
        };

        for (index, indicator) in self.indicators.iter_mut().enumerate() {
            if indicator.revealed_at().is_some() {
                continue;
            }
            let due_at = started_at + STAGGER_INTERVAL * index as u32;
            if now >= due_at {
                indicator.reveal(due_at);
            }
        }
    }

    /// Whether the cascade has been fired (regardless of completion).
    #[must_use]
    pub fn has_fired(&self) -> bool {
        matches!(self.latch, RevealLatch::Fired { .. })
    }

    /// Whether anything still needs ticks: a bar waiting on its scheduled
    /// reveal, or a revealed bar whose fill tween is still running.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        if !self.has_fired() {
            return false;
        }
        self.indicators.iter().any(|indicator| {
            match indicator.revealed_at() {
                None => true,
                Some(at) => now < at + FILL_DURATION,
            }
        })
    }

    #[must_use]
    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.indicators
            .iter()
            .filter(|indicator| indicator.is_animated())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(n: usize) -> Vec<Skill> {
        (0..n)
            .map(|i| Skill::new(format!("skill-{i}"), 50 + i as u8 * 10))
            .collect()
    }

    #[test]
    fn below_threshold_does_not_fire() {
        let now = Instant::now();
        let mut state = State::new(&skills(3));

        assert!(!state.observe_visibility(0.29, now));
        assert!(!state.has_fired());
        assert_eq!(state.revealed_count(), 0);
    }

    #[test]
    fn crossing_threshold_fires_once() {
        let now = Instant::now();
        let mut state = State::new(&skills(3));

        assert!(state.observe_visibility(0.3, now));
        assert!(state.has_fired());

        // Scrolling away and back does not restart the cascade.
        assert!(!state.observe_visibility(0.9, now + Duration::from_secs(1)));
    }

    #[test]
    fn first_bar_reveals_immediately_on_fire() {
        let now = Instant::now();
        let mut state = State::new(&skills(3));

        state.observe_visibility(1.0, now);
        assert_eq!(state.revealed_count(), 1);
        assert!(state.indicators()[0].is_animated());
    }

    #[test]
    fn bars_reveal_on_the_exact_stagger_schedule() {
        let now = Instant::now();
        let mut state = State::new(&skills(4));
        state.trigger(now);

        // Just before each boundary the next bar is still hidden.
        state.tick(now + STAGGER_INTERVAL - Duration::from_millis(1));
        assert_eq!(state.revealed_count(), 1);

        state.tick(now + STAGGER_INTERVAL);
        assert_eq!(state.revealed_count(), 2);

        state.tick(now + STAGGER_INTERVAL * 3);
        assert_eq!(state.revealed_count(), 4);
    }

    #[test]
    fn each_bar_keeps_its_own_target() {
        let now = Instant::now();
        let mut state = State::new(&skills(3));
        state.trigger(now);
        state.tick(now + STAGGER_INTERVAL * 2);

        let targets: Vec<u8> = state
            .indicators()
            .iter()
            .map(Indicator::target_percent)
            .collect();
        assert_eq!(targets, vec![50, 60, 70]);
    }

    #[test]
    fn late_tick_reveals_all_overdue_bars() {
        let now = Instant::now();
        let mut state = State::new(&skills(5));
        state.trigger(now);

        // One very late tick reveals everything, each stamped with its
        // scheduled instant rather than the tick time.
        state.tick(now + Duration::from_secs(10));
        assert_eq!(state.revealed_count(), 5);
        assert!(!state.is_animating(now + Duration::from_secs(10)));
    }

    #[test]
    fn animating_until_last_fill_settles() {
        let now = Instant::now();
        let mut state = State::new(&skills(2));
        state.trigger(now);

        state.tick(now + STAGGER_INTERVAL);
        assert!(state.is_animating(now + STAGGER_INTERVAL));

        let settled = now + STAGGER_INTERVAL + FILL_DURATION;
        state.tick(settled);
        assert!(!state.is_animating(settled));
    }

    #[test]
    fn trigger_is_idempotent() {
        let now = Instant::now();
        let mut state = State::new(&skills(2));

        assert!(state.trigger(now));
        assert!(!state.trigger(now + Duration::from_secs(1)));
    }

    #[test]
    fn empty_section_fires_but_never_animates() {
        let now = Instant::now();
        let mut state = State::new(&[]);

        state.observe_visibility(1.0, now);
        assert!(state.has_fired());
        assert!(!state.is_animating(now));
        assert_eq!(state.revealed_count(), 0);
    }
}
