use iced::widget::image::Handle;
use iced::widget::{button, column, container, image as thumbnail_view, row, text};
use iced::{Element, Length};
use iced_aw::Wrap;

use crate::state::recipe::Recipe;
use crate::Message;

/// Width of one card in the grid
const CARD_WIDTH: f32 = 300.0;

/// One recipe card for the browse grid. The whole card is a button that
/// opens the recipe's detail screen.
pub fn recipe_card<'a>(recipe: &'a Recipe, thumbnail: Option<&'a Handle>) -> Element<'a, Message> {
    let mut body = column![].spacing(6);

    if let Some(handle) = thumbnail {
        body = body.push(
            thumbnail_view(handle.clone())
                .width(Length::Fixed(CARD_WIDTH))
                .height(Length::Fixed(CARD_WIDTH * 0.75)),
        );
    }

    body = body.push(text(&recipe.title).size(22));

    let mut meta = row![text(format!("Ready in: {} min", recipe.total_time())).size(14)].spacing(12);
    if let Some(days) = recipe.shelf_life {
        meta = meta.push(text(format!("Shelf: {days} days")).size(14));
    }
    if let Some(days) = recipe.fridge_life {
        meta = meta.push(text(format!("Fridge: {days} days")).size(14));
    }
    body = body.push(meta);

    if !recipe.tags.is_empty() {
        let chips: Vec<Element<Message>> = recipe.tags.iter().map(|tag| tag_chip(tag)).collect();
        body = body.push(Wrap::with_elements(chips).spacing(6.0).line_spacing(6.0));
    }

    button(container(body).padding(12).width(Length::Fixed(CARD_WIDTH)))
        .style(button::text)
        .on_press(Message::OpenRecipe(recipe.slug.clone()))
        .into()
}

/// A small non-interactive tag label
fn tag_chip(tag: &str) -> Element<'_, Message> {
    container(text(tag).size(12))
        .padding(4)
        .style(container::rounded_box)
        .into()
}
