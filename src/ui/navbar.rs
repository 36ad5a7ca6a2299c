// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for page-level navigation.
//!
//! The navbar shows the portfolio owner's name, one link per page section,
//! and a theme toggle. Section links ask the application to smooth-scroll
//! the page to the corresponding section.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::page::Section;
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub owner_name: &'a str,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SectionLinkPressed(Section),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ScrollTo(Section),
    ThemeToggled,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::SectionLinkPressed(section) => Event::ScrollTo(section),
        Message::ToggleTheme => Event::ThemeToggled,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let name = Text::new(ctx.owner_name)
        .size(typography::TITLE_SM)
        .color(ctx.colors.brand_primary);

    let mut bar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(name)
        .push(Space::new().width(Length::Fill));

    for section in Section::ALL {
        bar = bar.push(
            button(Text::new(section.label()).size(typography::BODY))
                .on_press(Message::SectionLinkPressed(section))
                .padding(spacing::XS)
                .style(styles::button::nav_link(ctx.colors.text_primary)),
        );
    }

    let theme_label = match ctx.theme_mode {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
        ThemeMode::System => "System",
    };
    bar = bar.push(
        button(Text::new(theme_label).size(typography::BODY_SM))
            .on_press(Message::ToggleTheme)
            .padding(spacing::XS)
            .style(styles::button::nav_link(ctx.colors.text_secondary)),
    );

    Container::new(bar)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::navbar(ctx.colors))
        .into()
}
