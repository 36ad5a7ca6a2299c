// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the active notification.
//!
//! The toast appears as a small card in the top-right corner with a
//! severity-colored accent border, an icon glyph, the message, and a
//! dismiss button. Entrance and exit transitions are rendered by fading
//! and sliding the card according to the manager's transition progress.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::time::Instant;

/// Vertical slide distance of the entrance/exit transition.
const SLIDE_DISTANCE: f32 = 8.0;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification at the given transition progress
    /// (0.0 fully out, 1.0 fully in).
    pub fn view<'a>(notification: &'a Notification, progress: f32) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let icon = Text::new(severity.symbol())
            .size(typography::BODY_LG)
            .color(Color {
                a: progress,
                ..accent_color
            });

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| iced::widget::text::Style {
                color: Some(Color {
                    a: progress,
                    ..theme.palette().text
                }),
            });

        let notification_id = notification.id();
        let dismiss_button = button(Text::new("\u{2715}").size(typography::BODY_SM))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(styles::button::dismiss);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, progress))
            .into()
    }

    /// Renders the toast overlay for the active notification, if any.
    ///
    /// Positions the toast in the top-right corner; the transition offset is
    /// applied through the overlay padding.
    pub fn view_overlay<'a>(manager: &'a Manager, now: Instant) -> Element<'a, Message> {
        let Some(notification) = manager.current() else {
            // No active toast: an empty widget that takes no space.
            return Container::new(Text::new(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let progress = manager.transition_progress(now);
        let slide = (1.0 - progress) * SLIDE_DISTANCE;

        Container::new(Self::view(notification, progress))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(Padding {
                top: spacing::MD + slide,
                right: spacing::MD,
                bottom: spacing::MD,
                left: spacing::MD,
            })
            .into()
    }

    /// Returns the accent color used for the given severity.
    #[must_use]
    pub fn accent_color(severity: Severity) -> Color {
        severity.color()
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, progress: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE * progress,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: progress,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
