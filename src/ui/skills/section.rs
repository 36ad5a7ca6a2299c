// SPDX-License-Identifier: MPL-2.0
//! View rendering for the skills section.
//!
//! Bars are plain containers: a fixed-width track with a brand-colored fill
//! whose width follows the indicator's tween. The percentage label appears
//! to the right of the skill name once its bar has been revealed.

use super::animator::State;
use super::indicator::Indicator;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, Column, Container, Row, Space, Text};
use iced::{alignment, Border, Element, Length, Theme};
use std::time::Instant;

/// Contextual data needed to render the skills section.
pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub state: &'a State,
    pub now: Instant,
}

/// Render the skills section.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let title = Text::new("Skills")
        .size(typography::TITLE_MD)
        .color(ctx.colors.text_primary);

    let mut rows = Column::new().spacing(spacing::MD).push(title);

    for indicator in ctx.state.indicators() {
        rows = rows.push(skill_row(ctx.colors, indicator, ctx.now));
    }

    Container::new(rows)
        .width(Length::Shrink)
        .padding(spacing::LG)
        .into()
}

fn skill_row<'a, M: 'a>(
    colors: &ColorScheme,
    indicator: &'a Indicator,
    now: Instant,
) -> Element<'a, M> {
    let name = Text::new(indicator.name())
        .size(typography::BODY)
        .color(colors.text_secondary);

    let mut header = Row::new()
        .width(Length::Fixed(sizing::SKILL_BAR_WIDTH))
        .align_y(alignment::Vertical::Center)
        .push(name)
        .push(Space::new().width(Length::Fill));

    // The percentage label only exists once the bar has been revealed.
    if indicator.is_animated() {
        header = header.push(
            Text::new(indicator.label())
                .size(typography::CAPTION)
                .color(colors.brand_primary),
        );
    }

    let fill_width = sizing::SKILL_BAR_WIDTH * indicator.fill_fraction(now);
    let fill_color = colors.brand_primary;
    let fill = Container::new(Space::new())
        .width(Length::Fixed(fill_width))
        .height(Length::Fixed(sizing::SKILL_BAR_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(fill_color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    let track_color = colors.bar_track;
    let track = Container::new(fill)
        .width(Length::Fixed(sizing::SKILL_BAR_WIDTH))
        .height(Length::Fixed(sizing::SKILL_BAR_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(track_color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(track)
        .into()
}
