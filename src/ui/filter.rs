use iced::widget::{button, column, container, horizontal_space, mouse_area, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_aw::Wrap;

use crate::state::popover::{TagFilterPopover, Transition};
use crate::Message;

/// Width of the popover surface
const POPOVER_WIDTH: f32 = 360.0;

/// The control that opens and closes the tag filter popover. Its label
/// doubles as the selection count once anything is picked.
pub fn trigger_button<'a>(filter: &TagFilterPopover) -> Element<'a, Message> {
    let label = if filter.selected_count() > 0 {
        format!("Tags ({})", filter.selected_count())
    } else {
        "Filter by Tags".to_owned()
    };

    button(text(label))
        .style(if filter.is_open() {
            button::primary
        } else {
            button::secondary
        })
        .padding(10)
        .on_press(Message::ToggleFilter)
        .into()
}

/// The popover surface: a heading, one chip per available tag, and a
/// clear-all affordance once anything is selected.
pub fn popover<'a>(
    available_tags: &'a [String],
    filter: &'a TagFilterPopover,
) -> Element<'a, Message> {
    let header = row![
        text("Filter by Tags").size(20),
        horizontal_space(),
        button(text("×").size(20))
            .style(button::text)
            .on_press(Message::CloseFilter),
    ]
    .align_y(Alignment::Center);

    let chips: Vec<Element<Message>> = available_tags
        .iter()
        .map(|tag| {
            button(text(tag.as_str()))
                .style(if filter.is_selected(tag) {
                    button::primary
                } else {
                    button::secondary
                })
                .padding(8)
                .on_press(Message::TagToggled(tag.clone()))
                .into()
        })
        .collect();

    let mut body = column![
        header,
        Wrap::with_elements(chips).spacing(8.0).line_spacing(8.0),
    ]
    .spacing(16);

    if filter.selected_count() > 0 {
        body = body.push(
            button(text("Clear all filters"))
                .style(button::text)
                .on_press(Message::ClearAllTags),
        );
    }

    let phase = filter.phase();
    let surface = container(body)
        .padding(20)
        .width(Length::Fixed(POPOVER_WIDTH))
        .style(move |theme| surface_style(theme, phase));

    // presses on the surface itself must never read as outside clicks
    mouse_area(surface)
        .on_press(Message::PopoverPressed)
        .into()
}

/// Mid-transition the surface is borderless; the settled phases paint it
fn surface_style(theme: &Theme, phase: Transition) -> container::Style {
    let mut style = container::bordered_box(theme);
    if matches!(phase, Transition::Entering | Transition::Exiting) {
        style.border.width = 0.0;
    }
    style
}
