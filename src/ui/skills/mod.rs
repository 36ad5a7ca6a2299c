// SPDX-License-Identifier: MPL-2.0
//! Skills section: staggered progress-bar reveal.
//!
//! The section stays dormant until it first becomes sufficiently visible in
//! the page viewport. A one-shot latch then starts the animator, which
//! reveals one bar every 200 ms; each revealed bar tweens its fill toward
//! the skill's target percentage and gains a percentage label.
//!
//! # Components
//!
//! - [`indicator`] - Per-bar state (target percentage, reveal instant, tween)
//! - [`animator`] - Reveal latch and stagger schedule
//! - [`section`] - View rendering for the whole section

pub mod animator;
pub mod indicator;
pub mod section;

pub use animator::{State, FILL_DURATION, REVEAL_THRESHOLD, STAGGER_INTERVAL};
pub use indicator::Indicator;
