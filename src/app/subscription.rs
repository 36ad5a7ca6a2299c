// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for the skills reveal cascade, the
/// submit-button spinner, and toast transitions/expiry.
///
/// The tick only runs while something actually needs it; an idle page has no
/// timers at all.
pub fn create_tick_subscription(
    skills_animating: bool,
    is_sending: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if skills_animating || is_sending || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
