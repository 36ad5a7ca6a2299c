// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::contact;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved; feeds the skills visibility trigger.
    PageScrolled {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    Tick(Instant), // Periodic tick for animations, spinner, and toast expiry
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
    /// Optional profile path override (for portfolio content).
    /// Takes precedence over the path configured in settings.toml.
    pub profile_path: Option<PathBuf>,
    /// Optional theme mode override for this session.
    pub theme: Option<ThemeMode>,
}
