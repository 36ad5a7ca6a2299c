// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! One scrollable page stacking the intro, skills, and contact sections,
//! with the navbar pinned above it and the toast overlay stacked on top.
//! Section containers use the heights from the page layout model, so the
//! visibility math in `ui::page` matches what is actually on screen.

use super::Message;
use crate::content::Profile;
use crate::ui::contact::{self, ViewContext as ContactViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager as NotificationManager, Toast};
use crate::ui::page::{PageLayout, Section};
use crate::ui::skills::{self, section::ViewContext as SkillsViewContext};
use crate::ui::styles;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Scrollable, Stack, Text};
use iced::{alignment, widget::Id, Element, Length};
use std::time::Instant;

/// Widget ID of the page scrollable, shared with the scroll-to-section task.
pub const PAGE_SCROLL_ID: &str = "portfolio-page";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub profile: &'a Profile,
    pub layout: &'a PageLayout,
    pub theme: &'a AppTheme,
    pub theme_mode: ThemeMode,
    pub skills: &'a skills::State,
    pub contact: &'a contact::State,
    pub notifications: &'a NotificationManager,
    pub now: Instant,
}

/// Renders the whole application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = &ctx.theme.colors;

    let navbar_view = navbar::view(NavbarViewContext {
        colors,
        owner_name: ctx.profile.name.as_str(),
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let page_body = Column::new()
        .width(Length::Fill)
        .push(section_container(
            ctx.layout,
            Section::Intro,
            view_intro(&ctx),
        ))
        .push(section_container(
            ctx.layout,
            Section::Skills,
            view_skills(&ctx),
        ))
        .push(section_container(
            ctx.layout,
            Section::Contact,
            view_contact(&ctx),
        ));

    let scroller = Scrollable::new(page_body)
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    let base = Container::new(
        Column::new()
            .push(navbar_view)
            .push(scroller)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page(colors));

    let toast_overlay =
        Toast::view_overlay(ctx.notifications, ctx.now).map(Message::Notification);

    Stack::new().push(base).push(toast_overlay).into()
}

/// Wraps a section's content in a fixed-height, centered container matching
/// the layout model.
fn section_container<'a>(
    layout: &PageLayout,
    section: Section,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout.height_of(section)))
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn view_intro<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = &ctx.theme.colors;

    let heading = Text::new(ctx.profile.name.as_str())
        .size(typography::TITLE_LG)
        .color(colors.text_primary);
    let tagline = Text::new(ctx.profile.tagline.as_str())
        .size(typography::TITLE_SM)
        .color(colors.brand_primary);
    let about = Text::new(ctx.profile.about.as_str())
        .size(typography::BODY)
        .color(colors.text_secondary);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .max_width(600.0)
            .push(heading)
            .push(tagline)
            .push(about),
    )
    .padding(spacing::XL)
    .into()
}

fn view_skills<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    skills::section::view(SkillsViewContext {
        colors: &ctx.theme.colors,
        state: ctx.skills,
        now: ctx.now,
    })
}

fn view_contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    contact::view(ContactViewContext {
        colors: &ctx.theme.colors,
        state: ctx.contact,
        intro: ctx.profile.contact_intro.as_str(),
    })
    .map(Message::Contact)
}
