// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` holds at most one active toast and drives it through
//! `Entering -> Visible -> Dismissing` before removal. All timing decisions
//! take the current instant as a parameter, so tests can advance a virtual
//! clock instead of sleeping; production feeds the instants delivered by the
//! periodic tick subscription.

use super::notification::{Notification, NotificationId};
use std::time::{Duration, Instant};

/// Delay between insertion and the entrance transition, letting layout settle.
pub const ENTRANCE_DELAY: Duration = Duration::from_millis(100);
/// Length of the exit transition before the toast is removed.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);
/// How long a toast stays up unless dismissed earlier.
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss the active notification by ID (close button).
    Dismiss(NotificationId),
}

/// Lifecycle phase of the active toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted, entrance transition pending or running.
    Entering,
    /// Fully visible, waiting for auto-expiry or manual dismissal.
    Visible,
    /// Exit transition running; the auto-expiry deadline is gone.
    Dismissing,
}

#[derive(Debug)]
struct ActiveToast {
    notification: Notification,
    phase: Phase,
    /// When the current phase began. Phase boundaries are stamped with the
    /// exact scheduled instant, not the tick arrival time, so a late tick
    /// cascades through overdue transitions deterministically.
    phase_since: Instant,
    /// Cleared on manual dismissal so the expiry cannot fire afterwards.
    auto_dismiss_at: Option<Instant>,
}

/// Manages the single active toast notification.
#[derive(Debug, Default)]
pub struct Manager {
    active: Option<ActiveToast>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, synchronously replacing any active toast.
    ///
    /// The replacement is immediate: the old toast gets no exit transition,
    /// which is what keeps at most one notification in the tree at any time.
    pub fn show(&mut self, notification: Notification, now: Instant) {
        self.active = Some(ActiveToast {
            notification,
            phase: Phase::Entering,
            phase_since: now,
            auto_dismiss_at: Some(now + AUTO_DISMISS_AFTER),
        });
    }

    /// Starts dismissing the active notification (close button).
    ///
    /// Cancels the auto-expiry deadline, so the pending automatic removal
    /// cannot fire afterwards. Unknown IDs and toasts already dismissing are
    /// no-ops; returns whether a dismissal was started.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        match &mut self.active {
            Some(toast) if toast.notification.id() == id && toast.phase != Phase::Dismissing => {
                toast.phase = Phase::Dismissing;
                toast.phase_since = now;
                toast.auto_dismiss_at = None;
                true
            }
            _ => false,
        }
    }

    /// Advances the toast lifecycle to `now`.
    ///
    /// Should be called from the periodic tick. Overdue transitions are
    /// applied in order within a single call, so a long gap between ticks
    /// cannot leave a toast stuck in an intermediate phase.
    pub fn tick(&mut self, now: Instant) {
        let Some(toast) = &mut self.active else {
            return;
        };

        if toast.phase == Phase::Entering && now >= toast.phase_since + ENTRANCE_DELAY {
            let entered = toast.phase_since + ENTRANCE_DELAY;
            toast.phase = Phase::Visible;
            toast.phase_since = entered;
        }

        if toast.phase == Phase::Visible {
            if let Some(deadline) = toast.auto_dismiss_at {
                if now >= deadline {
                    toast.phase = Phase::Dismissing;
                    toast.phase_since = deadline;
                    toast.auto_dismiss_at = None;
                }
            }
        }

        if toast.phase == Phase::Dismissing && now >= toast.phase_since + EXIT_DURATION {
            self.active = None;
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    /// Returns the active notification, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.active.as_ref().map(|toast| &toast.notification)
    }

    /// Returns the active toast's lifecycle phase, if any.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.active.as_ref().map(|toast| toast.phase)
    }

    /// Returns whether a toast is on screen (in any phase).
    #[must_use]
    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// Transition progress for rendering: 0.0 is fully out, 1.0 fully in.
    ///
    /// Ramps up over the entrance delay, holds at 1.0 while visible, and
    /// ramps back down over the exit transition.
    #[must_use]
    pub fn transition_progress(&self, now: Instant) -> f32 {
        let Some(toast) = &self.active else {
            return 0.0;
        };

        let elapsed = now.saturating_duration_since(toast.phase_since);
        match toast.phase {
            Phase::Entering => {
                (elapsed.as_secs_f32() / ENTRANCE_DELAY.as_secs_f32()).clamp(0.0, 1.0)
            }
            Phase::Visible => 1.0,
            Phase::Dismissing => {
                1.0 - (elapsed.as_secs_f32() / EXIT_DURATION.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }
}
