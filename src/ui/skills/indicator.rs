// SPDX-License-Identifier: MPL-2.0
//! Per-bar animation state.

use super::animator::FILL_DURATION;
use crate::content::Skill;
use std::time::Instant;

/// One on-screen progress bar, created from a [`Skill`] at startup.
///
/// An indicator is mutated exactly once, when the animator reveals it; from
/// then on its rendered fill is a pure function of elapsed time.
#[derive(Debug, Clone)]
pub struct Indicator {
    name: String,
    target_percent: u8,
    revealed_at: Option<Instant>,
}

impl Indicator {
    pub(super) fn new(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            target_percent: skill.level,
            revealed_at: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target fill percentage (0-100).
    #[must_use]
    pub fn target_percent(&self) -> u8 {
        self.target_percent
    }

    /// Style hook: set once the bar has been revealed, never cleared.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.revealed_at.is_some()
    }

    pub(super) fn reveal(&mut self, at: Instant) {
        self.revealed_at = Some(at);
    }

    pub(super) fn revealed_at(&self) -> Option<Instant> {
        self.revealed_at
    }

    /// Percentage label appended to the bar once it is revealed.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}%", self.target_percent)
    }

    /// Rendered fill as a fraction of the full track (0.0..=1.0).
    ///
    /// Eases out toward `target_percent / 100` over [`FILL_DURATION`],
    /// the visual analog of a CSS width transition.
    #[must_use]
    pub fn fill_fraction(&self, now: Instant) -> f32 {
        let Some(revealed_at) = self.revealed_at else {
            return 0.0;
        };

        let elapsed = now.saturating_duration_since(revealed_at);
        let t = (elapsed.as_secs_f32() / FILL_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        eased * f32::from(self.target_percent) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn indicator(level: u8) -> Indicator {
        Indicator::new(&Skill::new("React", level))
    }

    #[test]
    fn unrevealed_indicator_is_empty_and_unflagged() {
        let bar = indicator(85);
        assert!(!bar.is_animated());
        assert_eq!(bar.fill_fraction(Instant::now()), 0.0);
    }

    #[test]
    fn reveal_sets_animated_flag() {
        let mut bar = indicator(85);
        bar.reveal(Instant::now());
        assert!(bar.is_animated());
    }

    #[test]
    fn fill_reaches_target_after_tween() {
        let now = Instant::now();
        let mut bar = indicator(85);
        bar.reveal(now);

        let settled = bar.fill_fraction(now + FILL_DURATION);
        assert!((settled - 0.85).abs() < f32::EPSILON);

        // And stays there afterwards.
        let later = bar.fill_fraction(now + FILL_DURATION + Duration::from_secs(5));
        assert!((later - 0.85).abs() < f32::EPSILON);
    }

    #[test]
    fn fill_is_monotonic_during_tween() {
        let now = Instant::now();
        let mut bar = indicator(100);
        bar.reveal(now);

        let quarter = bar.fill_fraction(now + FILL_DURATION / 4);
        let half = bar.fill_fraction(now + FILL_DURATION / 2);
        assert!(quarter > 0.0);
        assert!(half > quarter);
    }

    #[test]
    fn label_formats_percentage() {
        assert_eq!(indicator(95).label(), "95%");
    }
}
