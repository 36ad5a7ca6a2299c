// SPDX-License-Identifier: MPL-2.0
//! View rendering for the contact section.

use super::{Field, Message, State};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the contact section.
pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub state: &'a State,
    pub intro: &'a str,
}

/// Render the contact section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new("Contact")
        .size(typography::TITLE_MD)
        .color(ctx.colors.text_primary);

    let intro = Text::new(ctx.intro)
        .size(typography::BODY)
        .color(ctx.colors.text_secondary);

    let fields = ctx.state.fields();
    let form = Column::new()
        .spacing(spacing::SM)
        .push(labeled_input(
            "Name",
            "Your name",
            fields.name.as_str(),
            Field::Name,
        ))
        .push(labeled_input(
            "Email",
            "you@example.com",
            fields.email.as_str(),
            Field::Email,
        ))
        .push(labeled_input(
            "Subject",
            "What is this about?",
            fields.subject.as_str(),
            Field::Subject,
        ))
        .push(labeled_input(
            "Message",
            "Tell me about your project",
            fields.message.as_str(),
            Field::Message,
        ))
        .push(submit_button(ctx.colors, ctx.state));

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(intro)
            .push(form),
    )
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .padding(spacing::LG)
    .into()
}

/// Build a labeled field: caption above a single-line text input.
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &str,
    field: Field,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .on_input(move |v| Message::FieldChanged(field, v))
        .padding(spacing::XS)
        .size(typography::BODY);

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(input)
        .into()
}

/// The submit control: an enabled primary button, or a disabled one with a
/// spinner and "Sending..." while the simulated send is in flight.
fn submit_button<'a>(colors: &ColorScheme, state: &State) -> Element<'a, Message> {
    if state.is_sending() {
        let spinner = AnimatedSpinner::new(colors.brand_primary, state.spinner_rotation())
            .into_element::<Message>();

        let busy_label = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(spinner)
            .push(Text::new("Sending...").size(typography::BODY_LG));

        // No on_press: the button reports a Disabled status while sending.
        button(busy_label)
            .padding(spacing::SM)
            .style(button_styles::disabled())
            .into()
    } else {
        button(Text::new("Send Message").size(typography::BODY_LG))
            .on_press(Message::SubmitPressed)
            .padding(spacing::SM)
            .style(button_styles::primary)
            .into()
    }
}
