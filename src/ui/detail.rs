use iced::widget::image::Handle;
use iced::widget::{button, column, container, image as photo, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::state::recipe::Recipe;
use crate::Message;

/// Maximum width of the article column
const PAGE_WIDTH: f32 = 800.0;

/// Full-page view of one recipe
pub fn recipe_detail<'a>(recipe: &'a Recipe, thumbnail: Option<&'a Handle>) -> Element<'a, Message> {
    let mut page = column![
        button(text("< All recipes"))
            .style(button::text)
            .on_press(Message::CloseRecipe),
        text(&recipe.title).size(40),
    ]
    .spacing(18);

    if let Some(handle) = thumbnail {
        page = page.push(photo(handle.clone()).width(Length::Fixed(PAGE_WIDTH / 2.0)));
    }

    page = page.push(time_section(recipe));

    if recipe.shelf_life.is_some() || recipe.fridge_life.is_some() || recipe.freezer_life.is_some()
    {
        page = page.push(storage_section(recipe));
    }

    if !recipe.ingredients.is_empty() {
        page = page.push(list_section(
            "Ingredients",
            &recipe.ingredients,
            ListStyle::Bulleted,
        ));
    }
    if !recipe.instructions.is_empty() {
        page = page.push(list_section(
            "Method",
            &recipe.instructions,
            ListStyle::Numbered,
        ));
    }
    if !recipe.tips.is_empty() {
        page = page.push(list_section("Tips", &recipe.tips, ListStyle::Bulleted));
    }

    scrollable(
        container(page.width(Length::Fixed(PAGE_WIDTH)).padding(24))
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

/// Prep/cook/cool/total figures, in minutes
fn time_section(recipe: &Recipe) -> Element<'_, Message> {
    let mut figures = row![
        figure(recipe.prep_time, "Prep Time (min)"),
        figure(recipe.cook_time, "Cook Time (min)"),
    ]
    .spacing(32);

    if let Some(cool) = recipe.cool_time {
        figures = figures.push(figure(cool, "Cool Time (min)"));
    }
    figures = figures.push(figure(recipe.total_time(), "Total Time (min)"));

    section("Time", figures.into())
}

/// Shelf/fridge/freezer figures, in days. Only present fields are shown;
/// a missing value is never rendered as zero.
fn storage_section(recipe: &Recipe) -> Element<'_, Message> {
    let mut figures = row![].spacing(32);

    if let Some(days) = recipe.shelf_life {
        figures = figures.push(figure(days, "Max Shelf Life (days)"));
    }
    if let Some(days) = recipe.fridge_life {
        figures = figures.push(figure(days, "Max Fridge Life (days)"));
    }
    if let Some(days) = recipe.freezer_life {
        figures = figures.push(figure(days, "Max Freezer Life (days)"));
    }

    section("Storage", figures.into())
}

enum ListStyle {
    Bulleted,
    Numbered,
}

fn list_section<'a>(
    heading: &'a str,
    items: &'a [String],
    style: ListStyle,
) -> Element<'a, Message> {
    let mut list = column![].spacing(8);
    for (index, item) in items.iter().enumerate() {
        let line = match style {
            ListStyle::Bulleted => format!("• {item}"),
            ListStyle::Numbered => format!("{}. {item}", index + 1),
        };
        list = list.push(text(line));
    }

    section(heading, list.into())
}

fn section<'a>(heading: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(heading).size(28), body].spacing(12))
        .padding(20)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn figure(value: u32, label: &str) -> Element<'_, Message> {
    column![text(value.to_string()).size(24), text(label).size(13)]
        .spacing(4)
        .align_x(Alignment::Center)
        .into()
}
