// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the components (skills animator, contact
//! form, notifications) and translates their events into side effects like
//! toast display, the simulated send task, or config persistence. Policy
//! decisions (window sizing, timing sources, persistence) stay close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use view::PAGE_SCROLL_ID;

use crate::config;
use crate::content::{self, Profile};
use crate::diagnostics::{SubmissionLog, SubmissionRecord};
use crate::ui::contact::{self, SendOutcome};
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::page::{PageLayout, Section};
use crate::ui::skills;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Root Iced application state bridging UI components, portfolio content,
/// and persisted preferences.
pub struct App {
    profile: Profile,
    layout: PageLayout,
    theme_mode: ThemeMode,
    theme: AppTheme,
    skills: skills::State,
    contact: contact::State,
    notifications: notifications::Manager,
    /// Diagnostic log of completed (simulated) submissions.
    submissions: SubmissionLog,
    /// Height of the page viewport, from the last scroll event.
    viewport_height: f32,
    /// The instant the components and the view currently reason about.
    /// Ticks carry their own instant; other messages refresh it from the
    /// wall clock.
    now: Instant,
    /// Config directory override, threaded through saves.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("skills_fired", &self.skills.has_fired())
            .field("sending", &self.contact.is_sending())
            .field("has_toast", &self.notifications.has_active())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let profile = Profile::default();
        let layout = PageLayout::new(profile.skills.len());
        let skills = skills::State::new(&profile.skills);
        Self {
            profile,
            layout,
            theme_mode: ThemeMode::System,
            theme: AppTheme::new(ThemeMode::System),
            skills,
            contact: contact::State::new(),
            notifications: notifications::Manager::new(),
            submissions: SubmissionLog::new(),
            viewport_height: WINDOW_DEFAULT_HEIGHT as f32,
            now: Instant::now(),
            config_dir: None,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` and persisted settings.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load_with_dir(flags.config_dir.as_deref()).unwrap_or_default();

        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);

        // An unreadable or malformed profile falls back to the built-in one;
        // the page renders either way.
        let profile = flags
            .profile_path
            .as_deref()
            .or(config.content.profile.as_deref())
            .and_then(|path| content::load_from_path(path).ok())
            .unwrap_or_default();

        let layout = PageLayout::new(profile.skills.len());
        let skills = skills::State::new(&profile.skills);

        let app = App {
            profile,
            layout,
            theme_mode,
            theme: AppTheme::new(theme_mode),
            skills,
            config_dir: flags.config_dir,
            ..Self::default()
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        format!("{} - Portfolio", self.profile.name)
    }

    pub fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.skills.is_animating(self.now),
            self.contact.is_sending(),
            self.notifications.has_active(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Ticks carry the instant they were scheduled at; every other message
        // happens "now" on the wall clock.
        match &message {
            Message::Tick(instant) => self.now = *instant,
            _ => self.now = Instant::now(),
        }

        match message {
            Message::Navbar(navbar_message) => match navbar::update(navbar_message) {
                navbar::Event::ScrollTo(section) => self.scroll_to_section(section),
                navbar::Event::ThemeToggled => {
                    self.set_theme_mode(self.theme_mode.next());
                    Task::none()
                }
            },
            Message::Contact(contact_message) => {
                let event = self.contact.update(contact_message);
                self.handle_contact_event(event)
            }
            Message::Notification(notification_message) => {
                self.notifications
                    .handle_message(&notification_message, self.now);
                Task::none()
            }
            Message::PageScrolled { bounds, offset } => {
                self.viewport_height = bounds.height;
                let fraction =
                    self.layout
                        .visible_fraction(Section::Skills, offset.y, bounds.height);
                self.skills.observe_visibility(fraction, self.now);
                Task::none()
            }
            Message::Tick(instant) => {
                self.skills.tick(instant);
                self.notifications.tick(instant);
                if self.contact.is_sending() {
                    self.contact.tick_spinner();
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            profile: &self.profile,
            layout: &self.layout,
            theme: &self.theme,
            theme_mode: self.theme_mode,
            skills: &self.skills,
            contact: &self.contact,
            notifications: &self.notifications,
            now: self.now,
        })
    }

    fn handle_contact_event(&mut self, event: contact::Event) -> Task<Message> {
        match event {
            contact::Event::None => Task::none(),
            contact::Event::Rejected(message) => {
                self.notify(Notification::error(message));
                Task::none()
            }
            contact::Event::SendRequested(submission) => Task::perform(
                async move {
                    tokio::time::sleep(contact::SEND_LATENCY).await;
                    submission
                },
                |submission| {
                    Message::Contact(contact::Message::SendCompleted(SendOutcome::Delivered(
                        submission,
                    )))
                },
            ),
            contact::Event::Delivered(submission) => {
                self.submissions.record(SubmissionRecord::new(
                    submission.name,
                    submission.email,
                    submission.subject,
                    submission.message,
                ));
                self.notify(Notification::success(contact::SUCCESS_MESSAGE));
                Task::none()
            }
        }
    }

    fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        self.theme = AppTheme::new(mode);

        let mut config = config::load_with_dir(self.config_dir.as_deref()).unwrap_or_default();
        config.general.theme_mode = mode;
        if config::save_with_dir(&config, self.config_dir.as_deref()).is_err() {
            self.notify(Notification::warning("Could not save settings"));
        }
    }

    /// Shows a toast, replacing any currently displayed one.
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.show(notification, self.now);
    }

    /// Fires the skills reveal cascade directly, bypassing the scroll
    /// trigger. A no-op once the cascade has fired.
    pub fn reveal_skills_now(&mut self) {
        self.skills.trigger(self.now);
    }

    /// Produces the task that smooth-scrolls the page to a section.
    pub fn scroll_to_section(&self, section: Section) -> Task<Message> {
        let y = self
            .layout
            .relative_offset_of(section, self.viewport_height);
        operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset { x: 0.0, y })
    }

    // Read-only accessors used by the integration tests.

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn skills(&self) -> &skills::State {
        &self.skills
    }

    #[must_use]
    pub fn contact(&self) -> &contact::State {
        &self.contact
    }

    #[must_use]
    pub fn submissions(&self) -> &SubmissionLog {
        &self.submissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::contact::Field;
    use crate::ui::notifications::Severity;

    fn app() -> App {
        App::default()
    }

    fn type_field(app: &mut App, field: Field, value: &str) {
        let _ = app.update(Message::Contact(contact::Message::FieldChanged(
            field,
            value.to_string(),
        )));
    }

    fn fill_valid_form(app: &mut App) {
        type_field(app, Field::Name, "Jo");
        type_field(app, Field::Email, "a@b.com");
        type_field(app, Field::Subject, "Hi there");
        type_field(app, Field::Message, "This is a long enough message");
    }

    #[test]
    fn invalid_submission_shows_error_toast() {
        let mut app = app();
        type_field(&mut app, Field::Name, "A");

        let _ = app.update(Message::Contact(contact::Message::SubmitPressed));

        let toast = app.notifications().current().expect("toast expected");
        assert_eq!(toast.severity(), Severity::Error);
        assert!(toast
            .message()
            .contains("Name must be at least 2 characters long"));
        assert!(!app.contact().is_sending());
    }

    #[test]
    fn valid_submission_starts_sending() {
        let mut app = app();
        fill_valid_form(&mut app);

        let _ = app.update(Message::Contact(contact::Message::SubmitPressed));

        assert!(app.contact().is_sending());
        assert!(app.notifications().current().is_none());
    }

    #[test]
    fn completed_send_notifies_clears_and_records() {
        let mut app = app();
        fill_valid_form(&mut app);
        let _ = app.update(Message::Contact(contact::Message::SubmitPressed));

        // The snapshot taken at submit time is what the completion delivers.
        let submission = app.contact().fields().clone();
        let _ = app.update(Message::Contact(contact::Message::SendCompleted(
            SendOutcome::Delivered(submission),
        )));

        let toast = app.notifications().current().expect("toast expected");
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.message(), contact::SUCCESS_MESSAGE);

        assert!(!app.contact().is_sending());
        assert!(app.contact().fields().name.is_empty());
        assert_eq!(app.submissions().len(), 1);
    }

    #[test]
    fn scrolling_past_threshold_fires_skills_once() {
        let mut app = app();
        let skills_top = app.layout.offset_of(Section::Skills);

        let _ = app.update(Message::PageScrolled {
            bounds: iced::Rectangle::new(
                iced::Point::ORIGIN,
                iced::Size::new(900.0, 700.0),
            ),
            offset: iced::widget::scrollable::AbsoluteOffset {
                x: 0.0,
                y: skills_top,
            },
        });

        assert!(app.skills().has_fired());
        assert!(app.skills().indicators()[0].is_animated());
    }

    #[test]
    fn shallow_scroll_does_not_fire_skills() {
        let mut app = app();

        let _ = app.update(Message::PageScrolled {
            bounds: iced::Rectangle::new(
                iced::Point::ORIGIN,
                iced::Size::new(900.0, 200.0),
            ),
            offset: iced::widget::scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
        });

        assert!(!app.skills().has_fired());
    }

    #[test]
    fn reveal_skills_now_is_idempotent() {
        let mut app = app();
        app.reveal_skills_now();
        let revealed = app.skills().revealed_count();
        app.reveal_skills_now();
        assert_eq!(app.skills().revealed_count(), revealed);
    }

    #[test]
    fn title_names_the_profile_owner() {
        let app = app();
        assert!(app.title().contains(&app.profile.name));
    }
}
