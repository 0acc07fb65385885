use iced::widget::image::Handle as ThumbnailHandle;
use iced::widget::{
    button, center, column, mouse_area, opaque, pick_list, row, scrollable, stack, text,
    text_input,
};
use iced::{Alignment, Element, Length, Task, Theme};
use iced_aw::Wrap;
use rfd::FileDialog;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

// Application modules
mod content;
mod state;
mod ui;

use content::loader::{self, CatalogLoad};
use state::popover::{HitTarget, ScrollLock, TagFilterPopover, ANIMATION_DURATION};
use state::query::{self, SortOrder};
use state::recipe::Recipe;
use state::settings::Settings;

/// Which screen fills the window
#[derive(Debug, Clone)]
enum Screen {
    Browse,
    Recipe(String),
}

/// Main application state
struct RecipeShelf {
    /// Persisted preferences (content folder location)
    settings: Settings,
    /// The loaded catalog, in document order
    recipes: Vec<Recipe>,
    /// Union of every recipe's tags, sorted
    available_tags: Vec<String>,
    /// Generated card thumbnails, keyed by slug
    thumbnails: HashMap<String, ThumbnailHandle>,
    /// Free-text search over recipe titles
    search_term: String,
    /// Selected ordering for the browse grid
    sort_order: SortOrder,
    /// Tag filter popover state machine
    tag_filter: TagFilterPopover,
    screen: Screen,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Choose Content Folder" button
    PickContentFolder,
    /// Background catalog scan completed
    CatalogLoaded(CatalogLoad),
    /// A card thumbnail finished generating
    ThumbnailReady(String, Option<ThumbnailHandle>),
    SearchChanged(String),
    SortChanged(SortOrder),
    /// The filter trigger control was pressed
    ToggleFilter,
    /// The close affordance inside the popover was pressed
    CloseFilter,
    /// A pointer went down outside the popover and its trigger
    DismissFilter,
    /// A pointer went down on the popover surface itself
    PopoverPressed,
    /// The popover enter/exit animation timer fired
    FilterTransition,
    TagToggled(String),
    ClearAllTags,
    OpenRecipe(String),
    CloseRecipe,
}

impl RecipeShelf {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        let (status, task) = match settings.content_dir.clone() {
            Some(dir) => (
                format!("Loading recipes from {}...", dir.display()),
                Task::perform(load_catalog_async(dir), Message::CatalogLoaded),
            ),
            None => (
                "Choose a content folder to start browsing.".to_owned(),
                Task::none(),
            ),
        };

        (
            RecipeShelf {
                settings,
                recipes: Vec::new(),
                available_tags: Vec::new(),
                thumbnails: HashMap::new(),
                search_term: String::new(),
                sort_order: SortOrder::default(),
                tag_filter: TagFilterPopover::new(ScrollLock::default()),
                screen: Screen::Browse,
                status,
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickContentFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Recipe Content Folder")
                    .pick_folder();

                if let Some(dir) = folder {
                    self.settings.content_dir = Some(dir.clone());
                    if let Err(err) = self.settings.save() {
                        log::warn!("could not save settings: {err}");
                    }

                    self.status = format!("Loading recipes from {}...", dir.display());
                    return Task::perform(load_catalog_async(dir), Message::CatalogLoaded);
                }

                Task::none()
            }
            Message::CatalogLoaded(load) => {
                self.recipes = load.recipes;
                self.available_tags = query::available_tags(&self.recipes);
                self.thumbnails.clear();

                self.status = if load.skipped_count > 0 {
                    format!(
                        "✅ Loaded {} recipes, skipped {} records.",
                        self.recipes.len(),
                        load.skipped_count
                    )
                } else {
                    format!("Ready. {} recipes in the catalog.", self.recipes.len())
                };

                match self.settings.content_dir.clone() {
                    Some(dir) => {
                        let jobs: Vec<Task<Message>> = self
                            .recipes
                            .iter()
                            .filter(|recipe| recipe.thumbnail.is_some())
                            .map(|recipe| {
                                Task::perform(
                                    thumbnail_async(dir.clone(), recipe.clone()),
                                    |(slug, handle)| Message::ThumbnailReady(slug, handle),
                                )
                            })
                            .collect();
                        Task::batch(jobs)
                    }
                    None => Task::none(),
                }
            }
            Message::ThumbnailReady(slug, handle) => {
                if let Some(handle) = handle {
                    self.thumbnails.insert(slug, handle);
                }
                Task::none()
            }
            Message::SearchChanged(term) => {
                self.search_term = term;
                Task::none()
            }
            Message::SortChanged(order) => {
                self.sort_order = order;
                Task::none()
            }
            Message::ToggleFilter => {
                // the trigger is its own hit target, never an outside click
                self.tag_filter.pointer_down(HitTarget::Trigger);
                self.tag_filter.toggle_open();
                transition_timer()
            }
            Message::CloseFilter => {
                self.tag_filter.request_close();
                transition_timer()
            }
            Message::DismissFilter => {
                self.tag_filter.pointer_down(HitTarget::Outside);
                transition_timer()
            }
            Message::PopoverPressed => {
                self.tag_filter.pointer_down(HitTarget::Popover);
                Task::none()
            }
            Message::FilterTransition => {
                self.tag_filter.advance_transition();
                Task::none()
            }
            Message::TagToggled(tag) => {
                // editing the selection keeps the popover open
                self.tag_filter.toggle_tag(&tag);
                Task::none()
            }
            Message::ClearAllTags => {
                self.tag_filter.clear_all();
                transition_timer()
            }
            Message::OpenRecipe(slug) => {
                self.screen = Screen::Recipe(slug);
                Task::none()
            }
            Message::CloseRecipe => {
                self.screen = Screen::Browse;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let screen = match &self.screen {
            Screen::Recipe(slug) => match self.recipes.iter().find(|r| &r.slug == slug) {
                Some(recipe) => ui::detail::recipe_detail(recipe, self.thumbnails.get(slug)),
                // the slug can only go stale if the catalog reloads under
                // an open detail screen; fall back to the grid
                None => self.browse(),
            },
            Screen::Browse => self.browse(),
        };

        if self.tag_filter.scroll_locked() {
            // the opaque backdrop swallows every pointer event while the
            // popover is up, which is what suspends the grid's scrolling;
            // a press on it is an outside click
            let surface = ui::filter::popover(&self.available_tags, &self.tag_filter);
            let backdrop = mouse_area(center(opaque(surface))).on_press(Message::DismissFilter);
            stack![screen, opaque(backdrop)].into()
        } else if self.tag_filter.is_mounted() {
            // exit phase: the surface is still visible but no longer
            // blocks the page underneath
            let surface = ui::filter::popover(&self.available_tags, &self.tag_filter);
            stack![screen, center(surface)].into()
        } else {
            screen
        }
    }

    /// The browse screen: search, filter and sort controls over the grid
    fn browse(&self) -> Element<Message> {
        let toolbar = row![
            text_input("Search recipes...", &self.search_term)
                .on_input(Message::SearchChanged)
                .width(Length::Fixed(300.0)),
            ui::filter::trigger_button(&self.tag_filter),
            pick_list(SortOrder::ALL, Some(self.sort_order), Message::SortChanged),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let body: Element<Message> = if self.recipes.is_empty() {
            column![
                text("No recipes loaded yet.").size(20),
                button("Choose Content Folder")
                    .padding(10)
                    .on_press(Message::PickContentFolder),
            ]
            .spacing(20)
            .align_x(Alignment::Center)
            .into()
        } else {
            let visible = query::compute_visible_recipes(
                &self.recipes,
                &self.search_term,
                self.tag_filter.selected_tags(),
                self.sort_order,
            );

            if visible.is_empty() {
                text("No recipes match the current filters.").size(18).into()
            } else {
                let cards: Vec<Element<Message>> = visible
                    .into_iter()
                    .map(|recipe| ui::card::recipe_card(recipe, self.thumbnails.get(&recipe.slug)))
                    .collect();

                scrollable(Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0))
                    .height(Length::Fill)
                    .into()
            }
        };

        column![toolbar, body, text(&self.status).size(14)]
            .spacing(16)
            .padding(24)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application("Recipe Shelf", RecipeShelf::update, RecipeShelf::view)
        .theme(RecipeShelf::theme)
        .centered()
        .run_with(RecipeShelf::new)
}

/// Scan the content folder on a blocking thread; walkdir and serde_json
/// are synchronous and the catalog can be large.
async fn load_catalog_async(content_dir: PathBuf) -> CatalogLoad {
    tokio::task::spawn_blocking(move || loader::scan_folder(&content_dir))
        .await
        .unwrap_or_else(|err| {
            log::error!("catalog scan panicked: {err}");
            CatalogLoad {
                recipes: Vec::new(),
                skipped_count: 0,
            }
        })
}

/// Generate (or fetch from cache) one card thumbnail off the UI thread
async fn thumbnail_async(
    content_dir: PathBuf,
    recipe: Recipe,
) -> (String, Option<ThumbnailHandle>) {
    let slug = recipe.slug.clone();
    let path = tokio::task::spawn_blocking(move || {
        content::thumbnail::cached_thumbnail(&content_dir, &recipe)
    })
    .await
    .ok()
    .flatten();

    (slug, path.map(ThumbnailHandle::from_path))
}

/// Wake the popover controller once the enter/exit animation has run
fn transition_timer() -> Task<Message> {
    Task::perform(
        tokio::time::sleep(Duration::from_millis(ANIMATION_DURATION)),
        |_| Message::FilterTransition,
    )
}
