// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (validation errors, send success) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - Single-slot `Manager` driving the toast lifecycle
//! - [`toast`] - Toast widget component for rendering the active notification
//!
//! # Design Considerations
//!
//! - At most one toast is on screen; showing a new one replaces the old
//!   immediately
//! - Lifecycle: entrance transition (100 ms), visible until auto-expiry
//!   (5 s) or manual dismissal, exit transition (300 ms)
//! - Manual dismissal cancels the auto-expiry deadline
//! - Position: top-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{
    Manager, Message as NotificationMessage, Phase, AUTO_DISMISS_AFTER, ENTRANCE_DELAY,
    EXIT_DURATION,
};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
